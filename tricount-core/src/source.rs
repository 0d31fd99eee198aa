//! Input sources.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read buffer size for file sources.
const FILE_BUFFER_BYTES: usize = 64 * 1024;

/// Where a run reads text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Source {
    /// Interprets a command-line argument; `-` names standard input.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let path = arg.as_ref();
        if path == Path::new("-") {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }

    /// Human-readable name used in logs and errors.
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Opens the source for buffered reading.
    ///
    /// # Errors
    ///
    /// Returns the error from opening the file. Standard input never fails
    /// to open.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::with_capacity(FILE_BUFFER_BYTES, file)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_stdin() {
        assert_eq!(Source::from_arg("-"), Source::Stdin);
        assert_eq!(
            Source::from_arg("notes.txt"),
            Source::File(PathBuf::from("notes.txt"))
        );
    }

    #[test]
    fn names() {
        assert_eq!(Source::Stdin.name(), "<stdin>");
        assert_eq!(Source::from_arg("dir/a.txt").name(), "dir/a.txt");
    }

    #[test]
    fn missing_file_fails_to_open() {
        let source = Source::from_arg("/definitely/not/here/tricount.txt");
        assert!(source.open().is_err());
    }
}
