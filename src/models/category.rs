use serde::{Deserialize, Serialize};

use super::record::Record;

/// Templates that turn a record into a display descriptor.
///
/// Placeholders are field names in braces, e.g. `Patient ID: {id} | {status}`.
/// Unknown or null fields render as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTemplate {
    pub title: String,
    pub subtitle: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub title: String,
    pub subtitle: String,
    pub link: String,
}

impl DisplayTemplate {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            link: link.into(),
        }
    }

    #[must_use]
    pub fn render(&self, record: &Record) -> Descriptor {
        Descriptor {
            title: render_template(&self.title, record),
            subtitle: render_template(&self.subtitle, record),
            link: render_template(&self.link, record),
        }
    }

    /// Every placeholder referenced by the three templates.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        [&self.title, &self.subtitle, &self.link]
            .into_iter()
            .flat_map(|t| placeholders(t))
    }
}

fn placeholders(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };
        found.push(&after[..end]);
        rest = &after[end + 1..];
    }
    found
}

pub fn render_template(template: &str, record: &Record) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                out.push_str(&record.display_value(&after[..end]));
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated placeholder is kept literally
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Declaration of a category: everything except its records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Registry key, e.g. `patients`.
    pub name: String,
    /// Result type reported by global search, e.g. `patient`.
    pub kind: String,
    /// Declared fields. Matching only looks at these.
    pub fields: Vec<String>,
    pub filter_fields: Vec<String>,
    pub display: DisplayTemplate,
}

impl CategorySpec {
    pub fn new(name: &str, kind: &str, fields: &[&str], filter_fields: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            fields: fields.iter().map(ToString::to_string).collect(),
            filter_fields: filter_fields.iter().map(ToString::to_string).collect(),
            display: DisplayTemplate::new("{name}", "", ""),
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayTemplate) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn declares(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// A registered category with its current record snapshot.
#[derive(Debug, Clone)]
pub struct Category {
    pub spec: CategorySpec,
    pub records: Vec<Record>,
}

impl Category {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.spec.name
    }
}
