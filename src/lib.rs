//! Interactive TCP robustness prober.
//!
//! Connects to a server entered at startup and, one menu selection at a time, sends
//! hand-crafted payloads: plain text, malformed UTF-8, a split write, an oversized line,
//! rapid connect/disconnect cycles, NUL-laden garbage and a truncated TLS ClientHello.
//! Every action uses its own connection and closes it whatever the outcome.

pub mod core;
pub mod modules;
pub mod sockparse;
pub mod utils;

pub use crate::core::{ErrorRegistry, NetworkError, NetworkResult, Target};
pub use modules::{Console, MenuChoice, RapidReport};
pub use sockparse::target_input;
