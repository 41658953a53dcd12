//! `[build]` section configuration.
//!
//! Build paths, template engine identifier, URL prefix and passthrough list.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in signal.toml - build settings.
///
/// # Example
/// ```toml
/// [build]
/// input = "src"
/// output = "_site"
/// path_prefix = "/signal"
/// passthrough = ["css", "assets"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not usually in the file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Input directory containing posts, includes and passthrough sources.
    #[serde(default = "defaults::build::input")]
    #[educe(Default = defaults::build::input())]
    pub input: PathBuf,

    /// Output directory for the built site.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Template includes directory (consumed by the host templating layer).
    #[serde(default = "defaults::build::includes")]
    #[educe(Default = defaults::build::includes())]
    pub includes: PathBuf,

    /// Posts directory, relative to `input`.
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// Template engine identifier, passed through to the host framework.
    #[serde(default = "defaults::build::template_engine")]
    #[educe(Default = defaults::build::template_engine())]
    pub template_engine: String,

    /// URL path prefix prepended verbatim by the `url` filter.
    ///
    /// Must not end with `/`: the filter concatenates without
    /// normalization, so a trailing slash would produce `//` in links.
    #[serde(default = "defaults::build::path_prefix")]
    #[educe(Default = defaults::build::path_prefix())]
    pub path_prefix: String,

    /// Directories (relative to `input`) copied verbatim to the output tree.
    #[serde(default = "defaults::build::passthrough")]
    #[educe(Default = defaults::build::passthrough())]
    pub passthrough: Vec<PathBuf>,

    /// Clean output directory completely before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,
}
