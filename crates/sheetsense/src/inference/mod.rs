//! Inference engine for column roles.

mod roles;
mod rules;

pub use roles::{ColumnScore, RoleInferencer};
pub use rules::{
    HEADER_BOOST_WEIGHT, MIN_PHONE_DIGITS, NAME_KEYWORDS, NAME_THRESHOLD, PHONE_KEYWORDS,
    PHONE_THRESHOLD, RoleRule, RoleRules, digit_count, looks_like_name, looks_like_phone,
};
