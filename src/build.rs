//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_documents() ──► posts in discovery order
//!     │
//!     ├── run_collection("posts") ──► reversed display order
//!     │
//!     ├── project() ──► DocumentView per post (filters applied)
//!     │
//!     └── rayon::join
//!             ├── write_posts_index() ──► _data/posts.json
//!             └── copy_passthrough()  ──► asset files
//! ```
//!
//! Rendering itself is the host templating layer's job; this build emits
//! the post index it iterates over and the assets it links to.

use crate::assets::copy_passthrough;
use crate::config::SiteConfig;
use crate::content::source::load_documents;
use crate::content::{Collection, Document, DocumentView};
use crate::log;
use crate::registry::{Registry, default_registry};
use anyhow::{Context, Result};
use std::fs;

/// Output location of the posts index, relative to the output directory
const POSTS_INDEX: &str = "_data/posts.json";

/// Build the site: assemble the posts collection, derive display fields,
/// emit the posts index and copy passthrough assets.
///
/// If `config.build.clean` is true, clears the entire output directory
/// first. A post with a malformed date aborts the build with an error
/// naming the post; publish dates are never silently defaulted.
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean `{}`", output.display()))?;
    }

    let registry = default_registry(config)?;

    let documents = load_documents(config)?;
    log!("content"; "found {} posts", documents.len());

    let collection = registry.run_collection("posts", documents)?;
    let views = project(&collection, &registry)?;

    let (index_result, assets_result) = rayon::join(
        || write_posts_index(&views, config),
        || copy_passthrough(config),
    );
    index_result?;
    let copied = assets_result?;

    log!("build"; "wrote {} with {} posts, {} passthrough files", POSTS_INDEX, views.len(), copied);
    Ok(())
}

/// Project every document in display order through the registered filters.
fn project(collection: &Collection, registry: &Registry) -> Result<Vec<DocumentView>> {
    collection
        .iter()
        .map(|document| project_document(document, registry))
        .collect()
}

/// Derive the display fields for one document.
fn project_document(document: &Document, registry: &Registry) -> Result<DocumentView> {
    let date = document.publish_date.to_ymd_string();
    let date_display = registry
        .apply_filter("date_display", &date)
        .with_context(|| format!("failed to render `{}`", document.path))?;
    let url = registry.apply_filter("url", &document.path)?;
    let reading_time = registry.apply_filter("reading_time", &document.body)?;

    Ok(DocumentView {
        path: document.path.clone(),
        url,
        title: document.title.clone(),
        date,
        date_display,
        reading_time,
    })
}

/// Write the posts index consumed by the host templating layer.
fn write_posts_index(views: &[DocumentView], config: &SiteConfig) -> Result<()> {
    let path = config.build.output.join(POSTS_INDEX);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(views)?;
    fs::write(&path, json).with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(())
}
