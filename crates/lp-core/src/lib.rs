//! # lp-core
//!
//! Core types, ID generation, and error types for LaunchPad.
//!
//! This crate provides the foundational types shared across all LaunchPad crates:
//! - Record structs owned by the external store (campaigns, prospects, outreach, ...)
//! - Status enums with state machine transitions
//! - AI-derived values (launch briefs, scores, similarity analyses, email drafts)
//! - ID prefix constants and generation
//! - Cross-cutting error types
//! - Dashboard aggregation over in-memory record collections
//! - CSV prospect import and validation

pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod generated;
pub mod ids;
pub mod import;
