use chrono::{DateTime, Utc};
use lp_core::entities::Prospect;
use lp_core::enums::{ActivityType, ProspectStatus};
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Field edits for one prospect. A blank value clears the field.
#[derive(Debug, Default)]
pub struct ProspectEdits<'a> {
    pub status: Option<&'a str>,
    pub name: Option<&'a str>,
    pub company: Option<&'a str>,
    pub title: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub notes: Option<&'a str>,
}

pub async fn run(
    id: &str,
    edits: ProspectEdits<'_>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let prospect = update(id, &edits, ctx, Utc::now())?;
    output(&prospect, flags.format)
}

/// Apply `edits`. Status changes follow the pipeline; a move to responded is
/// logged as a response.
fn update(
    id: &str,
    edits: &ProspectEdits<'_>,
    ctx: &mut AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<Prospect> {
    let status = edits
        .status
        .map(|value| parse_enum::<ProspectStatus>(value, "status"))
        .transpose()?;
    let mut prospect: Prospect = ctx.store.get(&ctx.owner_id, id)?;

    let fields = [
        (edits.name, &mut prospect.name),
        (edits.company, &mut prospect.company),
        (edits.title, &mut prospect.title),
        (edits.phone, &mut prospect.phone),
        (edits.notes, &mut prospect.notes),
    ];
    let mut changed = false;
    for (edit, field) in fields {
        if let Some(value) = edit {
            let value = value.trim();
            *field = (!value.is_empty()).then(|| value.to_string());
            changed = true;
        }
    }
    if let Some(next) = status {
        prospect.transition(next, now)?;
        changed = true;
    }
    if !changed {
        anyhow::bail!("nothing to update");
    }
    prospect.updated_at = now;

    let prospect = ctx.store.update(prospect)?;
    let (activity, description) = if status == Some(ProspectStatus::Responded) {
        (
            ActivityType::ResponseReceived,
            format!("{} responded", prospect.display_name()),
        )
    } else {
        (
            ActivityType::ProspectUpdated,
            format!("Updated {}", prospect.display_name()),
        )
    };
    ctx.log_activity(activity, "prospect", &prospect.id, description)?;
    tracing::info!(prospect = %prospect.id, status = %prospect.status, "prospect updated");
    Ok(prospect)
}
