use crate::types::FrameworkProfile;

/// The framework's `package.json` format script, verbatim.
pub fn format_script(profile: &FrameworkProfile) -> &str {
    &profile.format_script
}
