//! Keyword tables, value patterns and thresholds for role inference.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::mapping::Role;

// =============================================================================
// KEYWORD TABLES
// =============================================================================

/// Header keywords that boost the `name` role (case-insensitive substring).
pub const NAME_KEYWORDS: &[&str] = &["name", "nome", "cliente", "pessoa", "contato"];

/// Header keywords that boost the `phone` role (case-insensitive substring).
pub const PHONE_KEYWORDS: &[&str] = &[
    "telefone", "phone", "celular", "fone", "mobile", "whatsapp", "ramal",
];

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Minimum combined score for a phone column.
pub const PHONE_THRESHOLD: f64 = 0.1;

/// Minimum combined score for a name column.
pub const NAME_THRESHOLD: f64 = 0.05;

/// Multiplier applied to the header boost before adding it to the pattern score.
pub const HEADER_BOOST_WEIGHT: f64 = 0.5;

/// Digits needed for a cell to count as a phone number.
pub const MIN_PHONE_DIGITS: usize = 8;

// =============================================================================
// VALUE PATTERNS
// =============================================================================

static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}{3,}").unwrap());
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{3,}").unwrap());

/// Number of ASCII digits in a cell.
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// A cell looks like a phone number when it has enough digits.
pub fn looks_like_phone(value: &str) -> bool {
    digit_count(value) >= MIN_PHONE_DIGITS
}

/// A cell looks like a name: a run of three letters and no run of three digits.
pub fn looks_like_name(value: &str) -> bool {
    LETTER_RUN.is_match(value) && !DIGIT_RUN.is_match(value)
}

// =============================================================================
// RULE TABLE
// =============================================================================

/// How one role is recognized.
#[derive(Debug, Clone)]
pub struct RoleRule {
    /// Role being assigned.
    pub role: Role,
    /// Header keywords giving a boost.
    pub keywords: Vec<String>,
    /// Minimum combined score to accept a column.
    pub threshold: f64,
}

impl RoleRule {
    /// Build a rule from static keywords.
    pub fn new(role: Role, keywords: &[&str], threshold: f64) -> Self {
        Self {
            role,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            threshold,
        }
    }

    /// Fraction-of-cells predicate for this role.
    pub fn matches_value(&self, value: &str) -> bool {
        match self.role {
            Role::Phone => looks_like_phone(value),
            Role::Name => looks_like_name(value),
        }
    }

    /// 1.0 when the header contains any keyword, else 0.0.
    pub fn header_boost(&self, header: &str) -> f64 {
        let header = header.to_lowercase();
        if self.keywords.iter().any(|k| header.contains(k.as_str())) {
            1.0
        } else {
            0.0
        }
    }
}

/// Rule table evaluated in order; earlier roles claim columns first.
#[derive(Debug, Clone)]
pub struct RoleRules {
    pub rules: Vec<RoleRule>,
    pub header_boost_weight: f64,
}

impl Default for RoleRules {
    fn default() -> Self {
        Self {
            rules: vec![
                RoleRule::new(Role::Phone, PHONE_KEYWORDS, PHONE_THRESHOLD),
                RoleRule::new(Role::Name, NAME_KEYWORDS, NAME_THRESHOLD),
            ],
            header_boost_weight: HEADER_BOOST_WEIGHT,
        }
    }
}
