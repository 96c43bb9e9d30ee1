//! The command catalog: definitions, categories, and lookup.

pub mod model;
pub mod registry;

pub use model::{CommandCategory, CommandDefinition};
pub use registry::{all_commands, commands_by_category, find_command, visible_commands};
