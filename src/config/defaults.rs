//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn locale() -> String {
        "ru-RU".into()
    }

    pub fn reading_lang() -> String {
        "ru".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn input() -> PathBuf {
        "src".into()
    }

    pub fn output() -> PathBuf {
        "_site".into()
    }

    pub fn includes() -> PathBuf {
        "_includes".into()
    }

    pub fn posts() -> PathBuf {
        "posts".into()
    }

    pub fn template_engine() -> String {
        "njk".into()
    }

    pub fn path_prefix() -> String {
        "/signal".into()
    }

    pub fn passthrough() -> Vec<PathBuf> {
        vec!["css".into(), "assets".into()]
    }
}
