//! Post loading from the input directory.
//!
//! Posts are Markdown files under `<input>/posts/` with TOML front matter
//! between `+++` fences:
//!
//! ```text
//! +++
//! title = "Hello, world"
//! date = "2024-03-05"
//! +++
//! Body text...
//! ```
//!
//! Discovery order is lexicographic on path, which is what the `posts`
//! collection reverses. A missing or unparseable `date` is a load error
//! naming the file; there is no fallback date.

use super::Document;
use crate::config::SiteConfig;
use crate::utils::date::DateTimeUtc;
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Front matter fence line
const FENCE: &str = "+++";

/// Front matter fields. Unknown keys are allowed and ignored; only these
/// drive the pipeline.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    date: String,

    #[serde(default)]
    title: Option<String>,

    /// Drafts are skipped during discovery
    #[serde(default)]
    draft: bool,
}

/// Collect post files in discovery order (lexicographic on path).
pub fn collect_post_files(posts_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(posts_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Load all posts from `<input>/posts/` in discovery order.
pub fn load_documents(config: &SiteConfig) -> Result<Vec<Document>> {
    let posts_dir = config.posts_dir();
    if !posts_dir.exists() {
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for path in collect_post_files(&posts_dir) {
        let document = load_document(&path, &config.build.input)
            .with_context(|| format!("failed to load post `{}`", path.display()))?;
        if let Some(document) = document {
            documents.push(document);
        }
    }
    Ok(documents)
}

/// Load a single post file. Returns `None` for drafts.
fn load_document(path: &Path, input: &Path) -> Result<Option<Document>> {
    let raw = fs::read_to_string(path)?;
    let (front, body) = split_front_matter(&raw)
        .ok_or_else(|| anyhow!("missing `+++` front matter fences"))?;

    let front: FrontMatter = toml::from_str(front).context("invalid front matter")?;
    if front.draft {
        return Ok(None);
    }

    let Some(publish_date) = DateTimeUtc::parse(&front.date) else {
        bail!("`date` is not a valid date: `{}`", front.date);
    };

    Ok(Some(Document {
        body: body.to_string(),
        publish_date,
        path: site_relative_path(path, input)?,
        title: front.title,
    }))
}

/// Split raw file content into (front matter, body).
///
/// The file must start with a `+++` fence line and contain a closing one.
fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix(FENCE)?;
    let rest = rest.strip_prefix('\n').or_else(|| {
        rest.strip_prefix("\r\n")
    })?;

    // Closing fence on its own line, possibly the last line of the file
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }
    None
}

/// Map a post file to its site-relative directory-style path.
///
/// `<input>/posts/hello.md` becomes `/posts/hello/`.
fn site_relative_path(path: &Path, input: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(input)
        .with_context(|| format!("post `{}` is outside the input directory", path.display()))?
        .with_extension("");

    let rel = rel
        .to_str()
        .ok_or_else(|| anyhow!("post path is not valid UTF-8"))?;

    // Backslash-separated components on Windows
    let rel = rel.replace('\\', "/");
    Ok(format!("/{rel}/"))
}
