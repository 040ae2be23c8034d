//! Derived dashboard statistics over already-loaded record collections.
//!
//! Everything here is a pure function of its inputs: no I/O, no clock reads
//! (callers pass `now`), no AI dependency.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Campaign, Outreach, Prospect, Template};
use crate::enums::{OutreachChannel, OutreachStatus, ProspectStatus};

/// Headline numbers for the dashboard.
///
/// Rates are percentages rendered to one decimal place, or `"0"` when the
/// denominator is zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_campaigns: usize,
    pub total_prospects: usize,
    pub new_prospects: usize,
    pub contacted_prospects: usize,
    pub responded_prospects: usize,
    pub converted_prospects: usize,
    pub emails_sent: usize,
    pub emails_opened: usize,
    pub emails_replied: usize,
    pub response_rate: String,
    pub open_rate: String,
    pub conversion_rate: String,
    pub prospects_by_status: BTreeMap<ProspectStatus, usize>,
    pub outreach_by_channel: BTreeMap<OutreachChannel, usize>,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(campaigns: &[Campaign], prospects: &[Prospect], outreach: &[Outreach]) -> Self {
        let mut prospects_by_status: BTreeMap<ProspectStatus, usize> =
            ProspectStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for prospect in prospects {
            *prospects_by_status.entry(prospect.status).or_default() += 1;
        }
        let status_count = |status| prospects_by_status.get(&status).copied().unwrap_or(0);

        let mut outreach_by_channel = BTreeMap::new();
        for item in outreach {
            *outreach_by_channel.entry(item.channel).or_default() += 1;
        }

        let emails = || outreach.iter().filter(|o| o.channel == OutreachChannel::Email);
        let emails_sent = emails().filter(|o| o.status.was_sent()).count();
        let emails_opened = emails().filter(|o| o.status.was_opened()).count();
        let emails_replied = emails().filter(|o| o.status.was_replied()).count();

        let new_prospects = status_count(ProspectStatus::New);
        let contacted_prospects = status_count(ProspectStatus::Contacted);
        let responded_prospects = status_count(ProspectStatus::Responded);
        let converted = status_count(ProspectStatus::Converted);

        Self {
            active_campaigns: campaigns.iter().filter(|c| c.is_active).count(),
            total_prospects: prospects.len(),
            new_prospects,
            contacted_prospects,
            responded_prospects,
            converted_prospects: converted,
            emails_sent,
            emails_opened,
            emails_replied,
            response_rate: format_rate(emails_replied, emails_sent),
            open_rate: format_rate(emails_opened, emails_sent),
            conversion_rate: format_rate(converted, prospects.len()),
            prospects_by_status,
            outreach_by_channel,
        }
    }
}

/// `numerator / denominator` as a percentage with one decimal, `"0"` on zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_rate(numerator: usize, denominator: usize) -> String {
    if denominator == 0 {
        return "0".to_string();
    }
    format!("{:.1}", numerator as f64 / denominator as f64 * 100.0)
}

/// Active templates ordered by usage, most used first. Ties keep input order.
#[must_use]
pub fn top_templates(templates: &[Template], limit: usize) -> Vec<&Template> {
    let mut active: Vec<&Template> = templates.iter().filter(|t| t.is_active).collect();
    active.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    active.truncate(limit);
    active
}

/// Scheduled outreach due at or after `now`, soonest first.
#[must_use]
pub fn upcoming_schedule(outreach: &[Outreach], now: DateTime<Utc>, limit: usize) -> Vec<&Outreach> {
    let mut upcoming: Vec<&Outreach> = outreach
        .iter()
        .filter(|o| o.status == OutreachStatus::Scheduled)
        .filter(|o| o.scheduled_at.is_some_and(|at| at >= now))
        .collect();
    upcoming.sort_by_key(|o| o.scheduled_at);
    upcoming.truncate(limit);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ProspectInput;
    use crate::generated::EmailDraft;
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn outreach(n: usize, status: OutreachStatus, channel: OutreachChannel) -> Vec<Outreach> {
        (0..n)
            .map(|i| {
                let mut o = Outreach::from_draft(
                    format!("out-{i:08}"),
                    "usr-1".into(),
                    None,
                    None,
                    EmailDraft {
                        subject: "s".into(),
                        body: "b".into(),
                    },
                    Utc::now(),
                );
                o.status = status;
                o.channel = channel;
                o
            })
            .collect()
    }

    fn prospects(statuses: &[ProspectStatus]) -> Vec<Prospect> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut p = Prospect::new(
                    format!("prs-{i:08}"),
                    "usr-1".into(),
                    None,
                    ProspectInput {
                        email: format!("p{i}@example.com"),
                        ..ProspectInput::default()
                    },
                    Utc::now(),
                );
                p.status = *status;
                p
            })
            .collect()
    }

    fn template(name: &str, usage_count: u32, is_active: bool) -> Template {
        let mut t = Template::new(
            format!("tpl-{name}"),
            "usr-1".into(),
            name.into(),
            OutreachChannel::Email,
            None,
            "body".into(),
            Utc::now(),
        );
        t.usage_count = usage_count;
        t.is_active = is_active;
        t
    }

    #[rstest]
    #[case(0, 0, "0")]
    #[case(5, 0, "0")]
    #[case(3, 10, "30.0")]
    #[case(1, 3, "33.3")]
    #[case(2, 3, "66.7")]
    #[case(4, 4, "100.0")]
    fn rate_formatting(#[case] num: usize, #[case] den: usize, #[case] expected: &str) {
        assert_eq!(format_rate(num, den), expected);
    }

    #[test]
    fn empty_collections_yield_zero_rates() {
        let stats = DashboardStats::compute(&[], &[], &[]);
        assert_eq!(stats.emails_sent, 0);
        assert_eq!(stats.response_rate, "0");
        assert_eq!(stats.open_rate, "0");
        assert_eq!(stats.conversion_rate, "0");
    }

    #[test]
    fn ten_sent_three_replied_is_thirty_percent() {
        let mut items = outreach(7, OutreachStatus::Sent, OutreachChannel::Email);
        items.extend(outreach(3, OutreachStatus::Replied, OutreachChannel::Email));
        items.extend(outreach(2, OutreachStatus::Draft, OutreachChannel::Email));
        items.extend(outreach(4, OutreachStatus::Sent, OutreachChannel::Linkedin));

        let stats = DashboardStats::compute(&[], &[], &items);
        assert_eq!(stats.emails_sent, 10);
        assert_eq!(stats.emails_replied, 3);
        assert_eq!(stats.emails_opened, 3);
        assert_eq!(stats.response_rate, "30.0");
        assert_eq!(stats.open_rate, "30.0");
        assert_eq!(stats.outreach_by_channel[&OutreachChannel::Email], 12);
        assert_eq!(stats.outreach_by_channel[&OutreachChannel::Linkedin], 4);
    }

    #[test]
    fn prospect_counts_and_conversion() {
        let list = prospects(&[
            ProspectStatus::New,
            ProspectStatus::New,
            ProspectStatus::Contacted,
            ProspectStatus::Converted,
        ]);
        let stats = DashboardStats::compute(&[], &list, &[]);
        assert_eq!(stats.total_prospects, 4);
        assert_eq!(stats.new_prospects, 2);
        assert_eq!(stats.contacted_prospects, 1);
        assert_eq!(stats.responded_prospects, 0);
        assert_eq!(stats.converted_prospects, 1);
        assert_eq!(stats.conversion_rate, "25.0");
        assert_eq!(stats.prospects_by_status[&ProspectStatus::NotInterested], 0);
    }

    #[test]
    fn top_templates_skips_inactive_and_orders_by_usage() {
        let templates = vec![
            template("a", 2, true),
            template("b", 9, true),
            template("c", 50, false),
            template("d", 5, true),
        ];
        let names: Vec<&str> = top_templates(&templates, 2)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn upcoming_schedule_orders_future_items() {
        let now = Utc::now();
        let mut items = outreach(3, OutreachStatus::Scheduled, OutreachChannel::Email);
        items[0].scheduled_at = Some(now + Duration::days(3));
        items[1].scheduled_at = Some(now - Duration::days(1));
        items[2].scheduled_at = Some(now + Duration::hours(2));

        let ids: Vec<&str> = upcoming_schedule(&items, now, 10)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["out-00000002", "out-00000000"]);
    }
}
