mod money;
mod secret;

pub use money::{Cents, CentsConversionError};
pub use secret::Secret;

/// Parse a non-negative integer from a string value, or return the given default value otherwise.
pub fn parse_u64_or(value: Option<String>, default: u64) -> u64 {
    value.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
