//! Binding between record types and their collections in a [`Snapshot`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lp_core::entities::{ActivityLog, Campaign, Outreach, Prospect, Sequence, Template};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::snapshot::Snapshot;

/// A storable, owner-scoped record.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Entity name, also the schema registry name.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
    fn owner(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;

    fn collection(snapshot: &Snapshot) -> &BTreeMap<String, Self>;
    fn collection_mut(snapshot: &mut Snapshot) -> &mut BTreeMap<String, Self>;
}

macro_rules! impl_record {
    ($ty:ty, $entity:literal, $field:ident) => {
        impl Record for $ty {
            const ENTITY: &'static str = $entity;

            fn id(&self) -> &str {
                &self.id
            }

            fn owner(&self) -> &str {
                &self.user_id
            }

            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }

            fn collection(snapshot: &Snapshot) -> &BTreeMap<String, Self> {
                &snapshot.$field
            }

            fn collection_mut(snapshot: &mut Snapshot) -> &mut BTreeMap<String, Self> {
                &mut snapshot.$field
            }
        }
    };
}

impl_record!(Campaign, "campaign", campaigns);
impl_record!(Prospect, "prospect", prospects);
impl_record!(Outreach, "outreach", outreach);
impl_record!(Template, "template", templates);
impl_record!(Sequence, "sequence", sequences);
impl_record!(ActivityLog, "activity_log", activity);
