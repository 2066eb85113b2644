use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AgentError {
    /// Missing credential or unusable client settings. Fatal.
    Configuration(String),
    /// Network failure, timeout, or non-success status.
    Transport(String),
    /// A local input file could not be read.
    Input { path: PathBuf, source: io::Error },
    /// Console or terminal failure.
    Io(io::Error),
}

impl AgentError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AgentError::Input {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Configuration(message) => write!(f, "configuration error: {}", message),
            AgentError::Transport(message) => write!(f, "API request error: {}", message),
            AgentError::Input { path, source } => {
                write!(f, "file '{}' could not be read: {}", path.display(), source)
            }
            AgentError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl error::Error for AgentError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AgentError::Input { source, .. } => Some(source),
            AgentError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AgentError {
    fn from(err: io::Error) -> Self {
        AgentError::Io(err)
    }
}
