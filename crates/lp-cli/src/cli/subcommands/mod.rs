mod campaign;
mod models;
mod outreach;
mod prospect;
mod sequence;
mod template;

pub use campaign::CampaignCommands;
pub use models::ModelsCommands;
pub use outreach::OutreachCommands;
pub use prospect::ProspectCommands;
pub use sequence::SequenceCommands;
pub use template::TemplateCommands;
