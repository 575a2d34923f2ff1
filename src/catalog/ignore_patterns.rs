//! Ignore pattern groups
//!
//! Ignore lists are curated by group so related patterns sit together in the
//! generated files. Group order is fixed; framework-specific patterns are
//! appended to the group they belong to.

/// Ignore pattern grouping, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreCategory {
    Dependencies,
    Build,
    Cache,
    Logs,
    Environment,
    Editor,
}

impl IgnoreCategory {
    pub const ORDER: [Self; 6] = [
        Self::Dependencies,
        Self::Build,
        Self::Cache,
        Self::Logs,
        Self::Environment,
        Self::Editor,
    ];

    fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ORDER.len() - 1)
    }
}

/// Patterns every `.prettierignore` starts from
pub const COMMON_PRETTIER_IGNORE: &[(IgnoreCategory, &[&str])] = &[
    (
        IgnoreCategory::Dependencies,
        &[
            "node_modules",
            "package-lock.json",
            "pnpm-lock.yaml",
            "yarn.lock",
            "bun.lockb",
        ],
    ),
    (IgnoreCategory::Build, &["coverage"]),
    (IgnoreCategory::Cache, &[".cache"]),
    (IgnoreCategory::Logs, &["*.log"]),
];

/// Patterns every `.gitignore` starts from
pub const COMMON_GITIGNORE: &[(IgnoreCategory, &[&str])] = &[
    (IgnoreCategory::Dependencies, &["node_modules", ".pnp", ".pnp.js"]),
    (IgnoreCategory::Build, &["coverage"]),
    (IgnoreCategory::Cache, &[".cache", ".eslintcache"]),
    (
        IgnoreCategory::Logs,
        &[
            "*.log",
            "npm-debug.log*",
            "yarn-debug.log*",
            "yarn-error.log*",
            "pnpm-debug.log*",
        ],
    ),
    (IgnoreCategory::Environment, &[".env", ".env*.local"]),
    (
        IgnoreCategory::Editor,
        &[".vscode/*", "!.vscode/extensions.json", ".idea", ".DS_Store"],
    ),
];

/// Collects grouped patterns and flattens them in group order
#[derive(Debug, Clone, Default)]
pub struct IgnoreListBuilder {
    groups: [Vec<&'static str>; 6],
}

impl IgnoreListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_groups(groups: &[(IgnoreCategory, &'static [&'static str])]) -> Self {
        let mut builder = Self::new();
        for (category, patterns) in groups {
            builder = builder.with(*category, patterns);
        }
        builder
    }

    pub fn common_prettier() -> Self {
        Self::from_groups(COMMON_PRETTIER_IGNORE)
    }

    pub fn common_git() -> Self {
        Self::from_groups(COMMON_GITIGNORE)
    }

    pub fn with(mut self, category: IgnoreCategory, patterns: &[&'static str]) -> Self {
        self.groups[category.index()].extend_from_slice(patterns);
        self
    }

    pub fn build(self) -> Vec<String> {
        self.groups
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect()
    }
}
