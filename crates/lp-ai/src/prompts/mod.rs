//! Prompt builders.
//!
//! Each builder is a pure function from typed input to a [`Prompt`]: the full
//! instruction text plus the JSON shape the model must answer with. The
//! provider has no structured-output mode, so the shape travels inside the
//! instruction and every prompt ends with [`RESPOND_DIRECTIVE`]; the response
//! parser depends on it. Builders never include record ids, owner ids, or
//! credentials.

mod brief;
mod draft;
mod score;
mod similar;

pub use brief::launch_brief;
pub use draft::email_draft;
pub use score::prospect_score;
pub use similar::find_similar;

use serde::Serialize;

/// Directive that every instruction carries verbatim.
pub const RESPOND_DIRECTIVE: &str = "Respond with ONLY a JSON object.";

/// Instruction text and the output shape embedded in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub instruction: String,
    pub schema_hint: &'static str,
}

impl Prompt {
    fn assemble(body: &str, schema_hint: &'static str) -> Self {
        Self {
            instruction: format!(
                "{}\n\n{RESPOND_DIRECTIVE} No prose before or after it. Use exactly this shape:\n{schema_hint}",
                body.trim_end()
            ),
            schema_hint,
        }
    }
}

/// The trimmed value, or `fallback` when missing or blank.
fn or_placeholder<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback)
}
