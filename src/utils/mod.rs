pub mod helpers;

pub use helpers::{escape_newlines, hex_string, init_tracing};
