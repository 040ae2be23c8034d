//! Record structs for all LaunchPad domain objects.
//!
//! Each record maps to a row in the external store and carries an owner
//! (`user_id`) plus creation/update timestamps. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod activity;
mod campaign;
mod outreach;
mod prospect;
mod sequence;
mod template;

pub use activity::ActivityLog;
pub use campaign::Campaign;
pub use outreach::{METADATA_MESSAGE_ID, Outreach};
pub use prospect::{Prospect, ProspectInput};
pub use sequence::{Sequence, SequenceStep};
pub use template::Template;
