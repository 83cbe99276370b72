use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Cannot write to a directory: {}", path.display())]
    InvalidDestination { path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoFailure(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::InvalidDestination { .. } | GenError::InvalidArgument { .. } => {
                ErrorCategory::Configuration
            }
            GenError::IoFailure(_) => ErrorCategory::Io,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::InvalidDestination { path } => {
                format!("The destination '{}' is a directory", path.display())
            }
            GenError::InvalidArgument { message } => {
                format!("Could not understand the arguments: {}", message)
            }
            GenError::IoFailure(e) => format!("Writing the output file failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenError::InvalidDestination { .. } => {
                "Pass a file name with --file, e.g. --file test_rows.txt"
            }
            GenError::InvalidArgument { .. } => "Run with --help to see the accepted arguments",
            GenError::IoFailure(_) => {
                "Check permissions and free disk space for the destination, then rerun"
            }
        }
    }

    /// Process exit code; 2 matches clap's own code for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::InvalidDestination { .. } => 1,
            GenError::InvalidArgument { .. } => 2,
            GenError::IoFailure(_) => 3,
        }
    }
}

#[cfg(feature = "cli")]
impl From<clap::Error> for GenError {
    fn from(e: clap::Error) -> Self {
        // First line of clap's rendering, e.g. "invalid value 'x' for '--rows <ROWS>'".
        let rendered = e.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        GenError::InvalidArgument { message }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let destination = GenError::InvalidDestination {
            path: PathBuf::from("/tmp"),
        };
        let argument = GenError::InvalidArgument {
            message: "bad".to_string(),
        };
        let io = GenError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        assert_eq!(destination.exit_code(), 1);
        assert_eq!(argument.exit_code(), 2);
        assert_eq!(io.exit_code(), 3);
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(destination.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_invalid_destination_mentions_path() {
        let e = GenError::InvalidDestination {
            path: PathBuf::from("/var/data"),
        };
        assert_eq!(e.to_string(), "Cannot write to a directory: /var/data");
        assert!(e.user_friendly_message().contains("/var/data"));
    }
}
