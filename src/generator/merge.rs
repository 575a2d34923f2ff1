//! Preference merging
//!
//! Overlays a sparse patch onto complete defaults. List fields are replaced,
//! not merged: a patch that carries `plugins` or `overrides` at all replaces
//! the base list, even when the patch list is empty.

use tracing::debug;

use crate::types::{FormattingPreferences, PartialPreferences, Result};

/// Merge `patch` over `base`, returning a fully-populated preference set.
pub fn merge_preferences(
    base: &FormattingPreferences,
    patch: &PartialPreferences,
) -> Result<FormattingPreferences> {
    patch.validate("")?;

    let merged = FormattingPreferences {
        semi: patch.semi.unwrap_or(base.semi),
        single_quote: patch.single_quote.unwrap_or(base.single_quote),
        tab_width: patch.tab_width.unwrap_or(base.tab_width),
        trailing_comma: patch.trailing_comma.unwrap_or(base.trailing_comma),
        print_width: patch.print_width.unwrap_or(base.print_width),
        use_tabs: patch.use_tabs.unwrap_or(base.use_tabs),
        bracket_spacing: patch.bracket_spacing.unwrap_or(base.bracket_spacing),
        bracket_same_line: patch.bracket_same_line.unwrap_or(base.bracket_same_line),
        arrow_parens: patch.arrow_parens.unwrap_or(base.arrow_parens),
        end_of_line: patch.end_of_line.unwrap_or(base.end_of_line),
        prose_wrap: patch.prose_wrap.unwrap_or(base.prose_wrap),
        html_whitespace_sensitivity: patch
            .html_whitespace_sensitivity
            .unwrap_or(base.html_whitespace_sensitivity),
        plugins: patch
            .plugins
            .clone()
            .unwrap_or_else(|| base.plugins.clone()),
        overrides: patch
            .overrides
            .clone()
            .unwrap_or_else(|| base.overrides.clone()),
    };

    merged.validate()?;

    if !patch.is_empty() {
        debug!(
            "Merged preference patch: {}",
            serde_json::to_string(patch).unwrap_or_default()
        );
    }

    Ok(merged)
}
