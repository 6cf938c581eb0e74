//! Style choices sent alongside the photo.

use std::collections::BTreeMap;

/// Scenario presets offered in the picker.
pub const SCENARIOS: [&str; 5] = [
    "Lemon Fresh Morning",
    "Lavender Chill Evening",
    "Orange Grove Adventure",
    "Grapefruit Getaway",
    "Mahogany Coconut Lounge",
];

/// Clothing presets offered in the picker.
pub const CLOTHING: [&str; 5] = ["Hoodie", "Sweater", "Bandana", "Poncho", "Scarf"];

/// Named style parameters understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleField {
    Scenario,
    Clothing,
}

impl StyleField {
    /// Multipart field name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Scenario => "scenario",
            Self::Clothing => "clothing",
        }
    }

    /// Presets for this field.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Scenario => &SCENARIOS,
            Self::Clothing => &CLOTHING,
        }
    }

    pub const ALL: [StyleField; 2] = [Self::Scenario, Self::Clothing];
}

/// Flat mapping of style choices. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOptions {
    choices: BTreeMap<StyleField, String>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a choice; an empty value clears it.
    pub fn set(&mut self, field: StyleField, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.choices.remove(&field);
        } else {
            self.choices.insert(field, value);
        }
    }

    pub fn clear(&mut self, field: StyleField) {
        self.choices.remove(&field);
    }

    pub fn get(&self, field: StyleField) -> Option<&str> {
        self.choices.get(&field).map(String::as_str)
    }

    /// `(field name, value)` pairs in a stable order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.choices.iter().map(|(f, v)| (f.key(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
