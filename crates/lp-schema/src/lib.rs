//! # lp-schema
//!
//! JSON Schema generation, validation, and registry for LaunchPad.
//!
//! Record and AI-response types are defined in `lp-core` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas into a
//! [`SchemaRegistry`] used for two things:
//! - validating raw model output right after JSON extraction, before it is
//!   decoded into typed values;
//! - exporting schemas for external tooling (`launchpad schema`).

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{SchemaRegistry, names};
