//! Record ID prefixes and generation.
//!
//! IDs look like `prs-b7a3f9e2`: a three-letter prefix naming the record type
//! followed by eight random hex characters.

use crate::errors::CoreError;

pub const PREFIX_CAMPAIGN: &str = "cmp";
pub const PREFIX_PROSPECT: &str = "prs";
pub const PREFIX_OUTREACH: &str = "out";
pub const PREFIX_TEMPLATE: &str = "tpl";
pub const PREFIX_SEQUENCE: &str = "seq";
pub const PREFIX_ACTIVITY: &str = "act";

/// Generate a new prefixed ID.
///
/// # Errors
///
/// Returns [`CoreError::IdGeneration`] if the OS random source is unavailable.
pub fn gen_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{suffix}"))
}

/// Check whether `id` carries the given prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix_and_hex_suffix() {
        let id = gen_id(PREFIX_PROSPECT).unwrap();
        assert!(has_prefix(&id, PREFIX_PROSPECT));
        let suffix = id.trim_start_matches("prs-");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_differ() {
        let a = gen_id(PREFIX_CAMPAIGN).unwrap();
        let b = gen_id(PREFIX_CAMPAIGN).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn has_prefix_rejects_bare_prefix() {
        assert!(!has_prefix("cmp-", PREFIX_CAMPAIGN));
        assert!(!has_prefix("cmpx-12", PREFIX_CAMPAIGN));
        assert!(has_prefix("cmp-12", PREFIX_CAMPAIGN));
    }
}
