use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read module {}: {source}", .path.display())]
    ModuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {}: {}", .path.display(), .messages.join(", "))]
    Parse {
        path: PathBuf,
        messages: Vec<String>,
    },

    #[error("Cannot write bundle {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KnitError {
    /// Create a parse error for a module
    pub fn parse(path: impl Into<PathBuf>, messages: Vec<String>) -> Self {
        Self::Parse {
            path: path.into(),
            messages,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Format error with file context, one diagnostic per line
    pub fn format_detailed(&self) -> String {
        match self {
            KnitError::Parse { path, messages } => {
                let mut output = format!("❌ Parse Error\n📁 File: {}", path.display());
                for message in messages {
                    output.push_str(&format!("\n  → {}", message));
                }
                output
            }
            KnitError::ModuleRead { path, source } => {
                format!("❌ Module not readable\n📁 File: {}\n  → {}", path.display(), source)
            }
            KnitError::Write { path, source } => {
                format!("❌ Bundle not written\n📁 File: {}\n  → {}", path.display(), source)
            }
            _ => format!("❌ {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, KnitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_lists_every_message() {
        let err = KnitError::parse(
            "/src/app.js",
            vec!["Unexpected token".to_string(), "Expected `;`".to_string()],
        );

        let detailed = err.format_detailed();
        assert!(detailed.contains("/src/app.js"));
        assert!(detailed.contains("Unexpected token"));
        assert!(detailed.contains("Expected `;`"));
        assert!(err.to_string().starts_with("Parse error in"));
    }

    #[test]
    fn test_module_read_keeps_io_source() {
        let err = KnitError::ModuleRead {
            path: PathBuf::from("/src/missing.js"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/src/missing.js"));
    }
}
