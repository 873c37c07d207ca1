pub mod fuzzing;
pub mod menu;
pub mod payloads;

// Re-export commonly used items
pub use fuzzing::*;
pub use menu::{print_banner, Console, MenuChoice};
