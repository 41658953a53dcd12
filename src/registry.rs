//! Named filter and collection registration.
//!
//! The host templating layer calls filters by name with string arguments
//! and uses the returned string verbatim; collections are called once per
//! build with the full discovered document set. The pure functions live in
//! [`crate::content`]; this module only captures configured values (locale,
//! prefix, language) and wires names to closures.

use crate::config::SiteConfig;
use crate::content::filters::{
    FilterError, Locale, ReadingLang, estimate_reading_time, format_date, prefix_url,
};
use crate::content::{Collection, Document, build_collection};
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;

/// A named template filter: string in, string out
pub type FilterFn = Box<dyn Fn(&str) -> Result<String, FilterError> + Send + Sync>;

/// A named collection producer, called once per build
pub type CollectionFn = Box<dyn Fn(Vec<Document>) -> Collection + Send + Sync>;

/// Registered filters and collections, looked up by name.
#[derive(Default)]
pub struct Registry {
    filters: BTreeMap<String, FilterFn>,
    collections: BTreeMap<String, CollectionFn>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter under a name, replacing any previous registration
    pub fn add_filter(&mut self, name: impl Into<String>, filter: FilterFn) {
        self.filters.insert(name.into(), filter);
    }

    /// Register a collection producer under a name
    pub fn add_collection(&mut self, name: impl Into<String>, collection: CollectionFn) {
        self.collections.insert(name.into(), collection);
    }

    /// Apply a registered filter to a value
    pub fn apply_filter(&self, name: &str, value: &str) -> Result<String> {
        let Some(filter) = self.filters.get(name) else {
            bail!("no filter registered under `{name}`");
        };
        filter(value).with_context(|| format!("filter `{name}` failed"))
    }

    /// Run a registered collection producer over the discovered documents
    pub fn run_collection(&self, name: &str, documents: Vec<Document>) -> Result<Collection> {
        let Some(collection) = self.collections.get(name) else {
            bail!("no collection registered under `{name}`");
        };
        Ok(collection(documents))
    }

    /// Registered filter names, in lookup order
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}

/// Build the default registry from the site configuration:
///
/// - `posts` collection: reverse-discovery-order assembly
/// - `date_display` filter: locale long-form date
/// - `url` filter: path-prefix concatenation
/// - `reading_time` filter: reading-time label
///
/// Locale and language tags are parsed once here, so an unsupported value
/// fails the build up front instead of mid-render.
pub fn default_registry(config: &SiteConfig) -> Result<Registry> {
    let locale: Locale = config.base.locale.parse().context("[base.locale]")?;
    let lang: ReadingLang = config
        .base
        .reading_lang
        .parse()
        .context("[base.reading_lang]")?;
    let prefix = config.build.path_prefix.clone();

    let mut registry = Registry::new();
    registry.add_collection("posts", Box::new(build_collection));
    registry.add_filter(
        "date_display",
        Box::new(move |value| format_date(value, locale)),
    );
    registry.add_filter("url", Box::new(move |path| Ok(prefix_url(path, &prefix))));
    registry.add_filter(
        "reading_time",
        Box::new(move |body| Ok(estimate_reading_time(body, lang))),
    );

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DateTimeUtc;

    fn test_config() -> SiteConfig {
        SiteConfig::from_str(
            r#"
            [base]
            title = "Signal"
            description = "Signal blog"
        "#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_registry_wiring() {
        let registry = default_registry(&test_config()).unwrap();

        let names: Vec<_> = registry.filter_names().collect();
        assert_eq!(names, ["date_display", "reading_time", "url"]);

        assert_eq!(
            registry.apply_filter("date_display", "2024-03-05").unwrap(),
            "5 марта 2024 г."
        );
        assert_eq!(
            registry.apply_filter("url", "/posts/hello").unwrap(),
            "/signal/posts/hello"
        );
        assert_eq!(registry.apply_filter("reading_time", "").unwrap(), "1 мин");
    }

    #[test]
    fn test_unknown_filter_and_collection() {
        let registry = default_registry(&test_config()).unwrap();
        assert!(registry.apply_filter("slugify", "x").is_err());
        assert!(registry.run_collection("pages", vec![]).is_err());
    }

    #[test]
    fn test_malformed_date_propagates() {
        let registry = default_registry(&test_config()).unwrap();
        let err = registry
            .apply_filter("date_display", "05.03.2024")
            .unwrap_err();
        assert!(err.to_string().contains("date_display"));
    }

    #[test]
    fn test_posts_collection_reverses() {
        let registry = default_registry(&test_config()).unwrap();
        let docs = vec![
            Document {
                body: String::new(),
                publish_date: DateTimeUtc::from_ymd(2024, 1, 1),
                path: "/posts/a/".into(),
                title: None,
            },
            Document {
                body: String::new(),
                publish_date: DateTimeUtc::from_ymd(2024, 2, 1),
                path: "/posts/b/".into(),
                title: None,
            },
        ];

        let collection = registry.run_collection("posts", docs).unwrap();
        let paths: Vec<_> = collection.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, ["/posts/b/", "/posts/a/"]);
    }

    #[test]
    fn test_unsupported_locale_fails_up_front() {
        let mut config = test_config();
        config.base.locale = "fr-FR".into();
        assert!(default_registry(&config).is_err());
    }
}
