pub mod commands;
pub mod ui;
pub mod util;

pub use util::{CommandContext, parse_key_value, read_patch_file, write_artifact};
