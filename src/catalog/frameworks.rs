//! Built-in framework profiles
//!
//! Defaults follow each framework's own starter templates where they ship a
//! Prettier config, and Prettier's defaults otherwise.

use super::ignore_patterns::{IgnoreCategory, IgnoreListBuilder};
use crate::types::{
    ArrowParens, Category, FormattingPreferences, FrameworkProfile, HtmlWhitespaceSensitivity,
    InstallProfile, Override, PartialPreferences, ProseWrap, TrailingComma,
};

/// Format script shared by most profiles
const FORMAT_ALL: &str = r#""format": "prettier --write .""#;

struct ProfileDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    preferences: FormattingPreferences,
    prettier_ignore: IgnoreListBuilder,
    gitignore: IgnoreListBuilder,
    format_script: &'static str,
    install: InstallProfile,
}

impl ProfileDef {
    fn build(self) -> FrameworkProfile {
        FrameworkProfile {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            preferences: self.preferences,
            prettier_ignore: self.prettier_ignore.build(),
            gitignore: self.gitignore.build(),
            format_script: self.format_script.to_string(),
            install: self.install,
        }
    }
}

/// All built-in profiles in display order
pub fn builtin_profiles() -> Vec<FrameworkProfile> {
    vec![
        react(),
        nextjs(),
        vue(),
        nuxt(),
        angular(),
        sveltekit(),
        astro(),
        express(),
        nestjs(),
        node_typescript(),
    ]
    .into_iter()
    .map(ProfileDef::build)
    .collect()
}

fn markdown_override() -> Override {
    Override::new(
        "*.md",
        PartialPreferences {
            prose_wrap: Some(ProseWrap::Always),
            ..Default::default()
        },
    )
}

fn react() -> ProfileDef {
    ProfileDef {
        id: "react",
        name: "React",
        description: "React single-page app built with Vite",
        category: Category::Frontend,
        preferences: FormattingPreferences {
            single_quote: true,
            ..Default::default()
        }
        .with_override(markdown_override()),
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &["dist", "build"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &["dist", "dist-ssr", "build"]),
        format_script: r#""format": "prettier --write \"src/**/*.{js,jsx,ts,tsx,css,md,json}\"""#,
        install: InstallProfile::new(&[], &["prettier"]),
    }
}

fn nextjs() -> ProfileDef {
    ProfileDef {
        id: "nextjs",
        name: "Next.js",
        description: "Next.js app with Tailwind CSS class sorting",
        category: Category::Fullstack,
        preferences: FormattingPreferences {
            semi: false,
            single_quote: true,
            trailing_comma: TrailingComma::Es5,
            ..Default::default()
        }
        .with_plugins(&["prettier-plugin-tailwindcss"])
        .with_override(markdown_override()),
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &[".next", "out", "next-env.d.ts"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &[".next", "out", "build", "next-env.d.ts"])
            .with(IgnoreCategory::Environment, &[".vercel"]),
        format_script: FORMAT_ALL,
        install: InstallProfile::new(&[], &["prettier", "prettier-plugin-tailwindcss"]),
    }
}

fn vue() -> ProfileDef {
    ProfileDef {
        id: "vue",
        name: "Vue",
        description: "Vue 3 app built with Vite",
        category: Category::Frontend,
        preferences: FormattingPreferences {
            semi: false,
            single_quote: true,
            print_width: 100,
            ..Default::default()
        },
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &["dist"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &["dist", "dist-ssr"]),
        format_script: r#""format": "prettier --write src/""#,
        install: InstallProfile::new(&[], &["prettier", "@vue/eslint-config-prettier"]),
    }
}

fn nuxt() -> ProfileDef {
    ProfileDef {
        id: "nuxt",
        name: "Nuxt",
        description: "Nuxt 3 full-stack Vue framework",
        category: Category::Fullstack,
        preferences: FormattingPreferences {
            semi: false,
            single_quote: true,
            print_width: 100,
            html_whitespace_sensitivity: HtmlWhitespaceSensitivity::Ignore,
            ..Default::default()
        },
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &[".nuxt", ".output", "dist"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &[".nuxt", ".output", ".nitro", "dist"])
            .with(IgnoreCategory::Cache, &[".data"]),
        format_script: FORMAT_ALL,
        install: InstallProfile::new(&[], &["prettier"]),
    }
}

fn angular() -> ProfileDef {
    ProfileDef {
        id: "angular",
        name: "Angular",
        description: "Angular workspace generated by the Angular CLI",
        category: Category::Frontend,
        preferences: FormattingPreferences {
            single_quote: true,
            print_width: 100,
            ..Default::default()
        }
        .with_override(Override::new(
            "*.html",
            PartialPreferences {
                print_width: Some(120),
                html_whitespace_sensitivity: Some(HtmlWhitespaceSensitivity::Ignore),
                ..Default::default()
            },
        )),
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &["dist"])
            .with(IgnoreCategory::Cache, &[".angular"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &["dist", "tmp", "out-tsc"])
            .with(IgnoreCategory::Cache, &[".angular/cache", ".sass-cache"]),
        format_script: r#""format": "prettier --write \"src/**/*.{ts,html,scss,json}\"""#,
        install: InstallProfile::new(&[], &["prettier"]),
    }
}

fn sveltekit() -> ProfileDef {
    ProfileDef {
        id: "sveltekit",
        name: "SvelteKit",
        description: "SvelteKit app with the Svelte Prettier plugin",
        category: Category::Fullstack,
        preferences: FormattingPreferences {
            use_tabs: true,
            single_quote: true,
            trailing_comma: TrailingComma::None,
            print_width: 100,
            ..Default::default()
        }
        .with_plugins(&["prettier-plugin-svelte"]),
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &[".svelte-kit", "build", "static"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &[".svelte-kit", "build", ".output"])
            .with(IgnoreCategory::Cache, &["vite.config.js.timestamp-*"]),
        format_script: FORMAT_ALL,
        install: InstallProfile::new(&[], &["prettier", "prettier-plugin-svelte"]),
    }
}

fn astro() -> ProfileDef {
    ProfileDef {
        id: "astro",
        name: "Astro",
        description: "Astro content site with the Astro Prettier plugin",
        category: Category::Frontend,
        preferences: FormattingPreferences {
            single_quote: true,
            prose_wrap: ProseWrap::Always,
            ..Default::default()
        }
        .with_plugins(&["prettier-plugin-astro"]),
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &["dist"])
            .with(IgnoreCategory::Cache, &[".astro"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &["dist"])
            .with(IgnoreCategory::Cache, &[".astro"]),
        format_script: FORMAT_ALL,
        install: InstallProfile::new(&[], &["prettier", "prettier-plugin-astro"]),
    }
}

fn express() -> ProfileDef {
    ProfileDef {
        id: "express",
        name: "Express",
        description: "Express HTTP server on Node.js",
        category: Category::Backend,
        preferences: FormattingPreferences {
            single_quote: true,
            arrow_parens: ArrowParens::Avoid,
            trailing_comma: TrailingComma::Es5,
            ..Default::default()
        },
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &["dist", "public"]),
        gitignore: IgnoreListBuilder::common_git().with(IgnoreCategory::Build, &["dist"]),
        format_script: r#""format": "prettier --write \"**/*.{js,json,md}\"""#,
        install: InstallProfile::new(&[], &["prettier"]),
    }
}

fn nestjs() -> ProfileDef {
    ProfileDef {
        id: "nestjs",
        name: "NestJS",
        description: "NestJS server application",
        category: Category::Backend,
        preferences: FormattingPreferences {
            single_quote: true,
            trailing_comma: TrailingComma::All,
            ..Default::default()
        },
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &["dist"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &["dist", "build"])
            .with(IgnoreCategory::Cache, &[".temp", ".tmp"]),
        format_script: r#""format": "prettier --write \"src/**/*.ts\" \"test/**/*.ts\"""#,
        install: InstallProfile::new(
            &[],
            &["prettier", "eslint-config-prettier", "eslint-plugin-prettier"],
        ),
    }
}

fn node_typescript() -> ProfileDef {
    ProfileDef {
        id: "node-typescript",
        name: "Node.js (TypeScript)",
        description: "Plain Node.js service or library written in TypeScript",
        category: Category::Backend,
        preferences: FormattingPreferences {
            single_quote: true,
            print_width: 100,
            tab_width: 4,
            ..Default::default()
        }
        .with_override(Override::new(
            &["*.json", "*.yml", "*.yaml"][..],
            PartialPreferences {
                tab_width: Some(2),
                ..Default::default()
            },
        )),
        prettier_ignore: IgnoreListBuilder::common_prettier()
            .with(IgnoreCategory::Build, &["dist", "lib"]),
        gitignore: IgnoreListBuilder::common_git()
            .with(IgnoreCategory::Build, &["dist", "lib", "*.tsbuildinfo"]),
        format_script: r#""format": "prettier --write \"src/**/*.ts\"""#,
        install: InstallProfile::new(&[], &["prettier"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_profile_ids_unique() {
        let profiles = builtin_profiles();
        let ids: HashSet<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), profiles.len());
    }

    #[test]
    fn test_profiles_valid() {
        for profile in builtin_profiles() {
            profile
                .preferences
                .validate()
                .unwrap_or_else(|e| panic!("{} defaults invalid: {}", profile.id, e));
            assert!(!profile.prettier_ignore.is_empty(), "{}", profile.id);
            assert!(!profile.gitignore.is_empty(), "{}", profile.id);
            assert!(profile.format_script.starts_with("\"format\": "), "{}", profile.id);
            assert!(
                profile.install.dev_dependencies.contains(&"prettier".to_string()),
                "{}",
                profile.id
            );
        }
    }

    #[test]
    fn test_plugins_are_installed() {
        for profile in builtin_profiles() {
            for plugin in &profile.preferences.plugins {
                assert!(
                    profile.install.dev_dependencies.contains(plugin),
                    "{} does not install {}",
                    profile.id,
                    plugin
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_patterns() {
        for profile in builtin_profiles() {
            let unique: HashSet<_> = profile.gitignore.iter().collect();
            assert_eq!(unique.len(), profile.gitignore.len(), "{}", profile.id);
            let unique: HashSet<_> = profile.prettier_ignore.iter().collect();
            assert_eq!(unique.len(), profile.prettier_ignore.len(), "{}", profile.id);
        }
    }
}
