//! Site initialization module.
//!
//! Creates new site structure with default configuration.

use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "signal.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &[
    "src/posts",
    "src/css",
    "src/assets",
    "src/_includes",
];

/// Sample post written by `init`.
///
/// The `YYYY-MM-DD-slug.md` naming convention keeps lexicographic
/// discovery order aligned with publish order, which the reversed `posts`
/// collection relies on for newest-first display.
const SAMPLE_POST: (&str, &str) = (
    "src/posts/2024-01-01-hello.md",
    r#"+++
title = "Hello, world"
date = "2024-01-01"
+++
First post. Name post files `YYYY-MM-DD-slug.md` so the newest-first
ordering matches publish dates.
"#,
);

/// Create a new site with default structure
pub fn new_site(config: &'static SiteConfig) -> Result<()> {
    let root = config.get_root();

    init_site_structure(root)?;
    init_default_config(root)?;
    fs::write(root.join(SAMPLE_POST.0), SAMPLE_POST.1)?;

    log!("init"; "created site skeleton in `{}`", root.display());
    Ok(())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `signal-blog init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}
