//! Install Command
//!
//! Print the dependency install command for a framework.

use crate::cli::util::CommandContext;
use crate::generator::Generator;
use crate::types::{PackageManager, Result};

pub fn run(framework: Option<String>, manager: Option<PackageManager>) -> Result<()> {
    let ctx = CommandContext::load(framework, None, manager)?;
    let command = Generator::builtin().install_command(ctx.require_framework()?, ctx.manager)?;
    println!("{}", command);
    Ok(())
}
