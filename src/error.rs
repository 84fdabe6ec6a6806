use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid vote: {0}")]
    Validation(String),

    #[error("ledger storage failure at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt ledger {} (line {line}): {reason}", .path.display())]
    Corrupt {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("{0}")]
    Unauthorized(String),

    #[error("username or password is incorrect")]
    AuthRejected,

    #[error("credentials required: pass --user and --password")]
    AuthRequired,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LedgerError {
    /// Stable error code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::Validation(_) => "VALIDATION",
            LedgerError::Storage { .. } => "STORAGE",
            LedgerError::Corrupt { .. } => "CORRUPT_LEDGER",
            LedgerError::Unauthorized(_) => "UNAUTHORIZED",
            LedgerError::AuthRejected => "AUTH_REJECTED",
            LedgerError::AuthRequired => "AUTH_REQUIRED",
            LedgerError::Config(_) => "CONFIG",
        }
    }

    pub fn storage(path: &Path) -> impl FnOnce(io::Error) -> LedgerError + '_ {
        move |source| LedgerError::Storage {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn corrupt(path: &Path, line: u64, reason: impl Into<String>) -> LedgerError {
        LedgerError::Corrupt {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LedgerError;
    use std::path::Path;

    #[test]
    fn codes_distinguish_failure_reasons() {
        assert_eq!(LedgerError::AuthRejected.code(), "AUTH_REJECTED");
        assert_eq!(
            LedgerError::Unauthorized("nope".into()).code(),
            "UNAUTHORIZED"
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LedgerError::storage(Path::new("/x/votes.csv"))(io);
        assert_eq!(err.code(), "STORAGE");
        assert!(err.to_string().contains("/x/votes.csv"));
    }
}
