//! Contact normalization: body rows plus a final mapping become contacts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::Row;
use crate::mapping::Mapping;

/// Country code prepended when requested.
pub const DEFAULT_COUNTRY_CODE: &str = "55";

/// Fewest digits a phone may have.
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 8;

/// A typed contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Digits only, optionally prefixed with the country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Extra columns keyed by header text, in mapping order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<IndexMap<String, String>>,
}

/// Normalization options.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Prefix phones with the country code when it is missing.
    pub add_country_code: bool,
    /// Literal prefix used by `add_country_code`.
    pub country_code: String,
    /// Minimum digits for a phone to be kept.
    pub min_phone_digits: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            add_country_code: false,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            min_phone_digits: DEFAULT_MIN_PHONE_DIGITS,
        }
    }
}

impl NormalizeOptions {
    /// Default options with the country code toggled.
    pub fn with_country_code(add_country_code: bool) -> Self {
        Self {
            add_country_code,
            ..Self::default()
        }
    }
}

/// Builds [`Contact`]s from body rows.
pub struct ContactNormalizer {
    options: NormalizeOptions,
}

impl ContactNormalizer {
    /// Create a normalizer with default options.
    pub fn new() -> Self {
        Self {
            options: NormalizeOptions::default(),
        }
    }

    /// Create a normalizer with custom options.
    pub fn with_options(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Normalize every row, preserving order. Rows with neither a name nor a
    /// valid phone are dropped. No deduplication.
    pub fn normalize(&self, body: &[Row], mapping: &Mapping, header: &[String]) -> Vec<Contact> {
        let contacts: Vec<Contact> = body
            .iter()
            .filter_map(|row| self.normalize_row(row, mapping, header))
            .collect();

        tracing::info!(
            rows = body.len(),
            contacts = contacts.len(),
            dropped = body.len() - contacts.len(),
            "normalized contacts"
        );

        contacts
    }

    /// Normalize one row. Out-of-range indices read as empty cells.
    pub fn normalize_row(&self, row: &[String], mapping: &Mapping, header: &[String]) -> Option<Contact> {
        let name = mapping
            .name
            .map(|idx| cell(row, idx).trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        let phone = mapping.phone.and_then(|idx| self.normalize_phone(cell(row, idx)));

        if name.is_none() && phone.is_none() {
            return None;
        }

        let mut extras = IndexMap::new();
        for &idx in &mapping.extras {
            let value = cell(row, idx).trim();
            if value.is_empty() {
                continue;
            }
            extras.insert(extra_key(header, idx), value.to_string());
        }

        Some(Contact {
            name,
            phone,
            extras: (!extras.is_empty()).then_some(extras),
        })
    }

    /// Strip a phone to digits; `None` when too short. Prepends the country
    /// code when configured and not already present.
    pub fn normalize_phone(&self, raw: &str) -> Option<String> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() < self.options.min_phone_digits {
            return None;
        }
        if self.options.add_country_code && !digits.starts_with(&self.options.country_code) {
            return Some(format!("{}{}", self.options.country_code, digits));
        }
        Some(digits)
    }
}

impl Default for ContactNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Header text for an extra column, or `Extra {n}` (1-based) when the
/// header has no such column.
fn extra_key(header: &[String], idx: usize) -> String {
    header
        .get(idx)
        .cloned()
        .unwrap_or_else(|| format!("Extra {}", idx + 1))
}
