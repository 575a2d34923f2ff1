//! Options Command
//!
//! Print the reference of every formatting option.

use console::style;

use crate::catalog::option_reference;
use crate::types::Result;

pub fn run() -> Result<()> {
    for option in option_reference() {
        println!("{}", style(option.key).bold());
        println!("  {}", option.description);
        if !option.choices.is_empty() {
            println!("  Values:  {}", option.choices.join(" | "));
        }
        println!("  Default: {}", option.default);
    }
    Ok(())
}
