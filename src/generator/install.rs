//! Install command synthesis
//!
//! Every supported manager installs one dependency kind per invocation, so a
//! profile with both runtime and dev dependencies becomes two invocations
//! chained with `&&`. Package names come from the catalog and are not
//! shell-quoted.

use crate::types::{InstallProfile, PackageManager};

/// Fixed command spelling for one package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerSyntax {
    /// Command that adds packages, e.g. `yarn add`
    pub add: &'static str,
    /// Flag marking packages as development dependencies
    pub dev_flag: &'static str,
    /// Command that installs without naming packages
    pub install: &'static str,
}

impl PackageManager {
    pub fn syntax(&self) -> ManagerSyntax {
        match self {
            PackageManager::Npm => ManagerSyntax {
                add: "npm install",
                dev_flag: "--save-dev",
                install: "npm install",
            },
            PackageManager::Yarn => ManagerSyntax {
                add: "yarn add",
                dev_flag: "--dev",
                install: "yarn install",
            },
            PackageManager::Pnpm => ManagerSyntax {
                add: "pnpm add",
                dev_flag: "--save-dev",
                install: "pnpm install",
            },
            PackageManager::Bun => ManagerSyntax {
                add: "bun add",
                dev_flag: "--dev",
                install: "bun install",
            },
        }
    }
}

/// Build a single shell line installing every dependency in `profile`.
pub fn synthesize_install_command(profile: &InstallProfile, manager: PackageManager) -> String {
    let syntax = manager.syntax();
    let mut clauses = Vec::with_capacity(2);

    if !profile.dependencies.is_empty() {
        clauses.push(format!("{} {}", syntax.add, profile.dependencies.join(" ")));
    }
    if !profile.dev_dependencies.is_empty() {
        clauses.push(format!(
            "{} {} {}",
            syntax.add,
            syntax.dev_flag,
            profile.dev_dependencies.join(" ")
        ));
    }

    if clauses.is_empty() {
        syntax.install.to_string()
    } else {
        clauses.join(" && ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> InstallProfile {
        InstallProfile::new(&["eslint-config-x"], &["prettier", "eslint-plugin-y"])
    }

    #[test]
    fn test_npm_mixed() {
        assert_eq!(
            synthesize_install_command(&mixed(), PackageManager::Npm),
            "npm install eslint-config-x && npm install --save-dev prettier eslint-plugin-y"
        );
    }

    #[test]
    fn test_yarn_mixed() {
        assert_eq!(
            synthesize_install_command(&mixed(), PackageManager::Yarn),
            "yarn add eslint-config-x && yarn add --dev prettier eslint-plugin-y"
        );
    }

    #[test]
    fn test_pnpm_and_bun_mixed() {
        assert_eq!(
            synthesize_install_command(&mixed(), PackageManager::Pnpm),
            "pnpm add eslint-config-x && pnpm add --save-dev prettier eslint-plugin-y"
        );
        assert_eq!(
            synthesize_install_command(&mixed(), PackageManager::Bun),
            "bun add eslint-config-x && bun add --dev prettier eslint-plugin-y"
        );
    }

    #[test]
    fn test_dev_only() {
        let profile = InstallProfile::new(&[], &["prettier", "prettier-plugin-svelte"]);
        assert_eq!(
            synthesize_install_command(&profile, PackageManager::Pnpm),
            "pnpm add --save-dev prettier prettier-plugin-svelte"
        );
    }

    #[test]
    fn test_runtime_only() {
        let profile = InstallProfile::new(&["prettier"], &[]);
        assert_eq!(
            synthesize_install_command(&profile, PackageManager::Bun),
            "bun add prettier"
        );
    }

    #[test]
    fn test_empty_profile_is_plain_install() {
        let profile = InstallProfile::default();
        for manager in PackageManager::ALL {
            let command = synthesize_install_command(&profile, manager);
            assert_eq!(command, format!("{} install", manager));
        }
    }

    #[test]
    fn test_managers_differ_only_in_spelling() {
        let profile = mixed();
        for manager in PackageManager::ALL {
            let command = synthesize_install_command(&profile, manager);
            assert!(command.contains(" eslint-config-x"));
            assert!(command.ends_with(" prettier eslint-plugin-y"));
            assert!(command.contains(manager.syntax().dev_flag));
        }
    }
}
