use crate::utils::output::OutputStyle;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which side of a file access failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Read,
    Write,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoAction::Read => write!(f, "read"),
            IoAction::Write => write!(f, "write"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Directory '{}' not found", .0.display())]
    DataDirMissing(PathBuf),

    #[error("'{}' contains invalid JSON: {message} at line {line} column {column}", .path.display())]
    InvalidJson {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("No permission to {action} '{}'", .path.display())]
    PermissionDenied { path: PathBuf, action: IoAction },

    #[error("Failed to {action} '{}': {message}", .path.display())]
    Io {
        path: PathBuf,
        action: IoAction,
        message: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Operation cancelled by user")]
    Interrupted,
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify a filesystem error for `path`, keeping permission failures distinct.
    pub fn from_io(path: &Path, action: IoAction, err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            AppError::PermissionDenied {
                path: path.to_path_buf(),
                action,
            }
        } else {
            AppError::Io {
                path: path.to_path_buf(),
                action,
                message: err.to_string(),
            }
        }
    }

    /// Convert a parse failure of the document at `path`.
    pub fn from_json(path: &Path, err: &serde_json::Error) -> Self {
        if err.is_io() {
            return AppError::Io {
                path: path.to_path_buf(),
                action: IoAction::Read,
                message: err.to_string(),
            };
        }

        // serde_json appends the position to its Display output; keep it separate.
        let message = err.to_string();
        let message = match message.rfind(" at line ") {
            Some(idx) => message[..idx].to_string(),
            None => message,
        };

        AppError::InvalidJson {
            path: path.to_path_buf(),
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

// Console reads and writes are the only place plain `io::Error`s surface.
impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Terminal(err.to_string())
    }
}

/// Validation failures raised by the in-memory catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Category '{0}' already exists.")]
    DuplicateCategory(String),

    #[error("Category '{0}' does not exist.")]
    UnknownCategory(String),

    #[error("{0} cannot be empty.")]
    EmptyField(&'static str),
}

pub enum FlowResult {
    EmptyList {
        item_type: String,
        hint: String,
    },
    AlreadyExists {
        item_type: String,
        name: String,
    },
    Aborted(String),
    Success(String),
}

impl FlowResult {
    /// Whether the flow changed the catalog and should be persisted.
    pub fn is_success(&self) -> bool {
        matches!(self, FlowResult::Success(_))
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::DataDirMissing(dir) => {
            eprintln!(
                "❌ {}",
                OutputStyle::error(&format!("Error: Directory '{}' not found.", dir.display()))
            );
            eprintln!(
                "   {}",
                OutputStyle::muted(&format!(
                    "Please run this from the root of the repository where the '{}' folder exists.",
                    dir.display()
                ))
            );
        }
        AppError::InvalidJson {
            path,
            line,
            column,
            message,
        } => {
            eprintln!(
                "\n❌ {}",
                OutputStyle::error(&format!(
                    "CRITICAL ERROR: '{}' contains invalid JSON.",
                    path.display()
                ))
            );
            eprintln!("   Details: {} (line {}, column {})", message, line, column);
            eprintln!(
                "   {}",
                OutputStyle::muted("Fix the file manually before running this again to prevent data loss.")
            );
        }
        AppError::PermissionDenied {
            path,
            action: IoAction::Read,
        } => {
            eprintln!(
                "\n❌ {}",
                OutputStyle::error(&format!(
                    "CRITICAL ERROR: No permission to read '{}'.",
                    path.display()
                ))
            );
        }
        AppError::PermissionDenied {
            path,
            action: IoAction::Write,
        } => {
            eprintln!(
                "❌ {}",
                OutputStyle::error(&format!(
                    "Error: Permission denied writing to '{}'. Check file permissions.",
                    path.display()
                ))
            );
        }
        AppError::Io {
            path,
            action: IoAction::Read,
            message,
        } => {
            eprintln!(
                "\n❌ {}",
                OutputStyle::error(&format!(
                    "Unexpected error reading '{}': {}",
                    path.display(),
                    message
                ))
            );
        }
        AppError::Io {
            path,
            action: IoAction::Write,
            message,
        } => {
            eprintln!(
                "❌ {}",
                OutputStyle::error(&format!(
                    "Error: Failed to save '{}'. Details: {}",
                    path.display(),
                    message
                ))
            );
        }
        AppError::Config(msg) | AppError::Terminal(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
        AppError::Interrupted => {
            println!("\n⏹️  {}", OutputStyle::muted("Operation cancelled by user. Bye!"));
        }
    }
}

pub fn handle_flow(flow: &FlowResult) {
    match flow {
        FlowResult::EmptyList { item_type, hint } => {
            let msg = format!("No {} found. {}", item_type, hint);
            println!("⚠️  {}", OutputStyle::warning(&msg));
        }
        FlowResult::AlreadyExists { item_type, name } => {
            let msg = format!("Error: {} '{}' already exists.", item_type, name);
            println!("❌ {}", OutputStyle::error(&msg));
        }
        FlowResult::Aborted(msg) => {
            println!("❌ {}", OutputStyle::error(&format!("Error: {}", msg)));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(msg));
        }
    }
}
