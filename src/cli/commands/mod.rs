pub mod config;
pub mod convert;
pub mod generate;
pub mod install;
pub mod list;
pub mod options;
pub mod show;
