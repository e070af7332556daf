//! Line protocol for driving the engine from another process

pub mod command;
pub mod handler;

pub use command::parse_command;
pub use handler::{handle_command, Flow};
