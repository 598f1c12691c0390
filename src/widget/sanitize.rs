//! Sanitization of submitted settings

use std::sync::LazyLock;

use regex::Regex;

use super::config::{CATEGORY_KEY, InstanceRecord, MAX_DEPTH_KEY, TITLE_KEY};

/// Markup tags and comments, including an unterminated trailing tag.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|$)|</?[A-Za-z?!][^>]*(?:>|$)")
        .expect("TAG_PATTERN regex is invalid")
});

/// Remove markup tags from `s`, keeping the text between them.
pub fn strip_tags(s: &str) -> String {
    TAG_PATTERN.replace_all(s, "").into_owned()
}

/// Build the record to persist from submitted form values.
///
/// Each field is tag-stripped; an absent or empty submission falls back to ""
/// (title, category) or "10" (max depth). The previous record is not consulted
/// and the category name is not checked against the store.
pub fn update(new: &InstanceRecord, _old: &InstanceRecord) -> InstanceRecord {
    let field = |key: &str, fallback: &str| match new.get(key) {
        Some(value) if !value.is_empty() => strip_tags(value),
        _ => fallback.to_string(),
    };

    let mut instance = InstanceRecord::new();
    instance.insert(TITLE_KEY.to_string(), field(TITLE_KEY, ""));
    instance.insert(CATEGORY_KEY.to_string(), field(CATEGORY_KEY, ""));
    instance.insert(MAX_DEPTH_KEY.to_string(), field(MAX_DEPTH_KEY, "10"));
    instance
}
