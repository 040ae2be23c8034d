pub mod campaign;
pub mod dashboard;
pub mod dispatch;
pub mod models;
pub mod outreach;
pub mod prospect;
pub mod schema;
pub mod sequence;
pub mod shared;
pub mod template;
