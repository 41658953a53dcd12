//! `[base]` section configuration.
//!
//! Contains basic site information like title, description and locale.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in signal.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Signal"
/// description = "A personal blog"
/// locale = "ru-RU"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in browser tab and headers.
    pub title: String,

    /// Site description for SEO meta tags.
    pub description: String,

    /// BCP 47 locale tag used by the `date_display` filter.
    #[serde(default = "defaults::base::locale")]
    #[educe(Default = defaults::base::locale())]
    pub locale: String,

    /// Language code for reading-time labels ("ru", "en").
    #[serde(default = "defaults::base::reading_lang")]
    #[educe(Default = defaults::base::reading_lang())]
    pub reading_lang: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Signal"
            description = "Signal blog"
            locale = "en-US"
            reading_lang = "en"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Signal");
        assert_eq!(config.base.description, "Signal blog");
        assert_eq!(config.base.locale, "en-US");
        assert_eq!(config.base.reading_lang, "en");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.locale, "ru-RU");
        assert_eq!(config.base.reading_lang, "ru");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
