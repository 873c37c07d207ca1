pub mod error;
pub mod network;
pub mod types;

// Re-exporting commonly used components
pub use error::ErrorRegistry;
pub use network::{close, connect, send_bytes, write_chunk};
pub use types::{NetworkError, NetworkResult, Target};
