use std::fmt;

/// The server under test, entered once at startup.
/// The port is kept as entered; an out-of-range value only fails once an action connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: i32,
}

impl Target {
    pub fn new(host: impl Into<String>, port: impl Into<i32>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// Address tuple accepted by `TcpStream::connect`, resolves hostnames too
    pub fn addr(&self) -> NetworkResult<(&str, u16)> {
        let port = u16::try_from(self.port).map_err(|_| NetworkError::PortOutOfRange(self.port))?;
        Ok((self.host.as_str(), port))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Custom error type for network operations and the prompts feeding them
#[derive(Debug)]
pub enum NetworkError {
    ConnectionFailed(std::io::Error),
    InvalidPort(String),
    PortOutOfRange(i32),
    InvalidCount(String),
    InputClosed,
    IoError(std::io::Error),
}

impl NetworkError {
    /// Bare message for the `Error: ` status line.
    /// Socket failures show the OS text only, without our prefix.
    pub fn message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed(e) | NetworkError::IoError(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed(e) => write!(f, "Connection failed: {}", e),
            NetworkError::InvalidPort(input) => write!(f, "Invalid port: '{}'", input),
            NetworkError::PortOutOfRange(port) => {
                write!(f, "Port {} is out of range (0-65535)", port)
            }
            NetworkError::InvalidCount(input) => write!(f, "Invalid repetition count: '{}'", input),
            NetworkError::InputClosed => write!(f, "Input closed before a value was entered"),
            NetworkError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetworkError::ConnectionFailed(e) | NetworkError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetworkError {
    fn from(error: std::io::Error) -> Self {
        NetworkError::IoError(error)
    }
}

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;
