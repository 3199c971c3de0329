use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TomError {
    Config(String),
    Io(#[from] std::io::Error),
    /// A compose document exists but could not be read as YAML of the expected shape.
    Compose {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
    Command(String),
    /// A delegated child process finished with a non-zero status.
    ChildExited {
        program: String,
        code: i32,
    },
    Dependency(String),
    Validation(String),
    Prompt(String),
    Other(#[from] anyhow::Error),
}

impl TomError {
    /// Exit status the process should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TomError::ChildExited { code, .. } => *code,
            _ => 1,
        }
    }
}

impl Display for TomError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TomError::Config(s) => write!(f, "Configuration error: {}", s),
            TomError::Io(e) => write!(f, "I/O error: {}", e),
            TomError::Compose { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
            TomError::Command(s) => write!(f, "Command failed: {}", s),
            TomError::ChildExited { program, code } => {
                write!(f, "{} exited with status {}", program, code)
            }
            TomError::Dependency(s) => {
                write!(f, "Dependency not found: {}\n\n", s)?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Install '{}' and make sure it is on your PATH", s)
            }
            TomError::Validation(s) => write!(f, "Invalid input: {}", s),
            TomError::Prompt(s) => write!(f, "Prompt failed: {}", s),
            TomError::Other(e) => write!(f, "{:#}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, TomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_exit_code_is_relayed() {
        let err = TomError::ChildExited {
            program: "docker".to_string(),
            code: 17,
        };
        assert_eq!(err.exit_code(), 17);
        assert_eq!(err.to_string(), "docker exited with status 17");
    }

    #[test]
    fn other_errors_exit_with_one() {
        let err = TomError::Config("bad".to_string());
        assert_eq!(err.exit_code(), 1);

        let err: TomError = anyhow::anyhow!("outer").into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "outer");
    }

    #[test]
    fn compose_error_names_the_file() {
        let source = serde_yaml_ng::from_str::<Vec<String>>("{").unwrap_err();
        let err = TomError::Compose {
            path: PathBuf::from("/reg/web/docker-compose.yml"),
            source,
        };
        assert!(err
            .to_string()
            .starts_with("Failed to parse /reg/web/docker-compose.yml"));
    }
}
