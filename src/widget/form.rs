//! Settings form shown in the host's widget editor

use std::io::Write;

use crate::error::Result;
use crate::model::Category;
use crate::output::escape_html;

use super::config::{CATEGORY_KEY, InstanceRecord, MAX_DEPTH_KEY, TITLE_KEY};

const DEFAULT_FORM_TITLE: &str = "New Title";
const DEFAULT_FORM_CATEGORY: &str = "Category";
const DEFAULT_FORM_MAX_DEPTH: &str = "10";

/// Generates form field names and ids scoped to one widget instance, so the
/// host can route submitted values back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub id_base: String,
    pub number: u32,
}

impl FieldNames {
    pub fn new(id_base: impl Into<String>, number: u32) -> Self {
        Self {
            id_base: id_base.into(),
            number,
        }
    }

    pub fn name(&self, field: &str) -> String {
        format!("widget-{}[{}][{}]", self.id_base, self.number, field)
    }

    pub fn id(&self, field: &str) -> String {
        format!("widget-{}-{}-{}", self.id_base, self.number, field)
    }
}

/// Write the three-field settings form pre-filled from `instance`.
///
/// The root category select lists `categories` in the given order, marking
/// the one whose name matches the stored value.
pub fn write_form<W: Write>(
    out: &mut W,
    instance: &InstanceRecord,
    categories: &[Category],
    fields: &FieldNames,
) -> Result<()> {
    let value = |key: &str, fallback: &str| {
        instance
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };
    let title = value(TITLE_KEY, DEFAULT_FORM_TITLE);
    let selected = value(CATEGORY_KEY, DEFAULT_FORM_CATEGORY);
    let max_depth = value(MAX_DEPTH_KEY, DEFAULT_FORM_MAX_DEPTH);

    let mut html = String::from("<p>");

    // Title
    html.push_str(&label(fields, TITLE_KEY, "Title:"));
    html.push_str(&input(fields, TITLE_KEY, "text", &title));

    // Root category
    html.push_str(&label(fields, CATEGORY_KEY, "Root Category:"));
    html.push_str(&format!(
        "<select class='widefat' id='{}' name='{}' >",
        fields.id(CATEGORY_KEY),
        fields.name(CATEGORY_KEY)
    ));
    for cat in categories {
        let name = escape_html(&cat.name);
        let marker = if cat.name == selected { "selected " } else { "" };
        html.push_str(&format!(
            "<option {}value='{}'>{}</option>",
            marker, name, name
        ));
    }
    html.push_str("</select>");

    // Max depth
    html.push_str(&label(fields, MAX_DEPTH_KEY, "Max Category Depth:"));
    html.push_str(&input(fields, MAX_DEPTH_KEY, "number", &max_depth));

    html.push_str("</p>");
    writeln!(out, "{}", html)?;
    Ok(())
}

fn label(fields: &FieldNames, field: &str, text: &str) -> String {
    format!("<label for='{}'>{}</label>", fields.name(field), text)
}

fn input(fields: &FieldNames, field: &str, kind: &str, value: &str) -> String {
    format!(
        "<input class='widefat' id='{}' name='{}' type='{}' value='{}' />",
        fields.id(field),
        fields.name(field),
        kind,
        escape_html(value)
    )
}
