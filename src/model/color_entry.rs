//! Named color value and its derived identity.

use serde::{Deserialize, Serialize};

/// Derive an identifier from a display name.
///
/// The name is lowercased and every run of whitespace becomes a single `-`.
/// Nothing is trimmed, so a leading or trailing run also becomes `-`.
pub fn make_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
                in_space = true;
            }
        } else {
            id.extend(c.to_lowercase());
            in_space = false;
        }
    }
    id
}

/// A named color in a draft or a committed palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawColorEntry")]
pub struct ColorEntry {
    /// Display name.
    pub name: String,
    /// Canonical hex value, e.g. `#4caf50`.
    pub value: String,
    /// Identity used for removal, derived from `name` at creation.
    pub id: String,
}

impl ColorEntry {
    /// Create an entry, deriving its id from `name`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let id = make_id(&name);
        Self {
            name,
            value: value.into(),
            id,
        }
    }

    /// Case-insensitive name comparison.
    pub fn same_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Exact value comparison.
    pub fn same_value(&self, value: &str) -> bool {
        self.value == value
    }
}

/// Wire form accepted on input. Older data files call the value `color`
/// and carry no id.
#[derive(Deserialize)]
struct RawColorEntry {
    name: String,
    #[serde(alias = "color")]
    value: String,
    #[serde(default)]
    id: Option<String>,
}

impl From<RawColorEntry> for ColorEntry {
    fn from(raw: RawColorEntry) -> Self {
        match raw.id {
            Some(id) => ColorEntry {
                name: raw.name,
                value: raw.value,
                id,
            },
            None => ColorEntry::new(raw.name, raw.value),
        }
    }
}
