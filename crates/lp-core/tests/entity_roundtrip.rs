//! Serde roundtrip and JsonSchema validation tests for records and AI-derived values.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use lp_core::dashboard::DashboardStats;
use lp_core::entities::*;
use lp_core::enums::*;
use lp_core::generated::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_brief() -> LaunchBrief {
    LaunchBrief {
        channels: vec![
            Channel {
                name: "Google Maps".into(),
                rank: 1,
                rationale: "Every practice is listed with a phone number.".into(),
                methods: vec!["Scrape listings".into(), "Call front desk".into()],
                estimated_volume: "2,000+ practices".into(),
                expected_response_rate: "8-12%".into(),
                actor_id: Some("compass/crawler-google-places".into()),
                sample_queries: vec!["dentist in Austin TX".into()],
            },
            Channel {
                name: "Dental Facebook groups".into(),
                rank: 2,
                rationale: "Office managers swap software tips.".into(),
                methods: vec!["Join groups".into()],
                estimated_volume: "40 groups".into(),
                expected_response_rate: "3-5%".into(),
                actor_id: None,
                sample_queries: Vec::new(),
            },
        ],
        first_week_plan: vec![DayPlan {
            day: "Day 1".into(),
            tasks: vec!["Pull 200 practices".into()],
        }],
        key_insights: vec!["HIPAA anxiety is the hook".into()],
    }
}

roundtrip_and_validate!(launch_brief_roundtrip, LaunchBrief, sample_brief());

roundtrip_and_validate!(
    score_result_roundtrip,
    ScoreResult,
    ScoreResult::from_raw(72.0, Some("Complete profile with LinkedIn.".into()))
);

roundtrip_and_validate!(
    similarity_roundtrip,
    SimilarityAnalysis,
    SimilarityAnalysis {
        patterns: vec!["Multi-location practices".into()],
        recommended_sources: vec![RecommendedSource {
            source: "Google Maps".into(),
            method: "Search by metro".into(),
            query: "pediatric dentist Dallas".into(),
            estimated_volume: "300".into(),
            actor_id: None,
        }],
        queries: vec!["pediatric dentist Houston".into()],
    }
);

roundtrip_and_validate!(
    email_draft_roundtrip,
    EmailDraft,
    EmailDraft {
        subject: "Quick question about Bright Smiles".into(),
        body: "Hi Dana, ...".into(),
    }
);

roundtrip_and_validate!(campaign_roundtrip, Campaign, {
    let mut campaign = Campaign::draft(
        "cmp-a3f8b2c1".into(),
        "usr-1".into(),
        "Dental launch".into(),
        BriefRequest {
            product_description: "HIPAA-compliant dental software".into(),
            target_buyer: "dental office managers".into(),
            price_point: Some("$299/mo".into()),
            geography: Some("US".into()),
        },
        Utc::now(),
    );
    campaign.attach_brief(sample_brief(), Utc::now()).unwrap();
    campaign
});

roundtrip_and_validate!(prospect_roundtrip, Prospect, {
    let mut prospect = Prospect::new(
        "prs-a3f8b2c1".into(),
        "usr-1".into(),
        Some("cmp-a3f8b2c1".into()),
        ProspectInput {
            email: "dana@brightsmiles.example".into(),
            name: Some("Dana Ruiz".into()),
            company: Some("Bright Smiles".into()),
            title: Some("Office Manager".into()),
            linkedin_url: Some("https://linkedin.com/in/danaruiz".into()),
            ..ProspectInput::default()
        },
        Utc::now(),
    );
    prospect.score = Some(72);
    prospect
        .custom_fields
        .insert("locations".into(), serde_json::json!(3));
    prospect
});

roundtrip_and_validate!(outreach_roundtrip, Outreach, {
    let mut outreach = Outreach::from_draft(
        "out-a3f8b2c1".into(),
        "usr-1".into(),
        Some("prs-a3f8b2c1".into()),
        None,
        EmailDraft {
            subject: "Hello".into(),
            body: "Body".into(),
        },
        Utc::now(),
    );
    outreach.mark_sent("re_abc123", Utc::now()).unwrap();
    outreach
});

roundtrip_and_validate!(
    template_roundtrip,
    Template,
    Template::new(
        "tpl-a3f8b2c1".into(),
        "usr-1".into(),
        "Dentist opener".into(),
        OutreachChannel::Email,
        Some("Quick question".into()),
        "Hi {{name}}".into(),
        Utc::now(),
    )
);

roundtrip_and_validate!(
    sequence_roundtrip,
    Sequence,
    Sequence {
        id: "seq-a3f8b2c1".into(),
        user_id: "usr-1".into(),
        campaign_id: None,
        name: "Three touches".into(),
        steps: vec![
            SequenceStep {
                template_id: "tpl-1".into(),
                delay_days: 0,
                channel: OutreachChannel::Email,
            },
            SequenceStep {
                template_id: "tpl-2".into(),
                delay_days: 3,
                channel: OutreachChannel::Linkedin,
            },
        ],
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now() + Duration::seconds(1),
    }
);

roundtrip_and_validate!(
    activity_roundtrip,
    ActivityLog,
    ActivityLog::new(
        "act-a3f8b2c1".into(),
        "usr-1".into(),
        ActivityType::CampaignCreated,
        "campaign",
        "cmp-a3f8b2c1".into(),
        "Created campaign Dental launch".into(),
        Utc::now(),
    )
);

roundtrip_and_validate!(dashboard_stats_roundtrip, DashboardStats, {
    let mut by_status = BTreeMap::new();
    by_status.insert(ProspectStatus::New, 3);
    DashboardStats {
        total_prospects: 3,
        new_prospects: 3,
        response_rate: "0".into(),
        open_rate: "0".into(),
        conversion_rate: "0".into(),
        prospects_by_status: by_status,
        ..DashboardStats::default()
    }
});

#[test]
fn model_tier_accepts_legacy_labels() {
    let tier: ModelTier = serde_json::from_str("\"sonnet\"").unwrap();
    assert_eq!(tier, ModelTier::Balanced);
    assert_eq!(serde_json::to_string(&tier).unwrap(), "\"balanced\"");
}

#[test]
fn brief_ignores_unknown_fields() {
    let json = serde_json::json!({
        "channels": [{"name": "Reddit", "rank": 1, "confidence": "high"}],
        "first_week_plan": [],
        "key_insights": [],
        "extra": true
    });
    let brief: LaunchBrief = serde_json::from_value(json).unwrap();
    assert_eq!(brief.channels[0].name, "Reddit");
    assert!(brief.channels[0].methods.is_empty());
}
