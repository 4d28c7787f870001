//! Identity category — A2A identity document compliance.
//!
//! Weighted double in the composite, and the source of the skill
//! count consumed by the skills boost.

use std::collections::BTreeMap;

use folio_core::{Category, CategoryScore, ProfileRecord, RawScore};

use crate::metric::MetricWeight;

/// Flat 30 points for hosting an identity document at all.
pub const CARD_PRESENT: MetricWeight = MetricWeight::new(30.0, 30.0);
/// Flat 10 points for structurally valid document content.
pub const CARD_VALID: MetricWeight = MetricWeight::new(10.0, 10.0);
/// Flat 10 points when name, description, and capabilities are all present.
pub const REQUIRED_FIELDS: MetricWeight = MetricWeight::new(10.0, 10.0);
/// Flat 10 points for a registry document (agents.json).
pub const AGENTS_JSON: MetricWeight = MetricWeight::new(10.0, 10.0);
/// Flat 20 points when the document is hosted on its declared domain.
pub const DOMAIN_VERIFIED: MetricWeight = MetricWeight::new(20.0, 20.0);
/// Flat 10 points for a capability manifest (llms.txt).
pub const LLMS_TXT: MetricWeight = MetricWeight::new(10.0, 10.0);
/// Flat 10 points when a known agent-runtime installation is detected.
pub const INSTALL_DETECTED: MetricWeight = MetricWeight::new(10.0, 10.0);

pub fn calculate(profile: &ProfileRecord) -> CategoryScore {
    let Some(signals) = profile.platform(Category::Identity) else {
        return CategoryScore::empty(Category::Identity);
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "card_present".to_string(),
        CARD_PRESENT.binary(signals.flag("card_present")),
    );
    breakdown.insert(
        "card_valid".to_string(),
        CARD_VALID.binary(signals.flag("card_valid")),
    );
    breakdown.insert(
        "required_fields".to_string(),
        REQUIRED_FIELDS.binary(signals.flag("required_fields_present")),
    );
    breakdown.insert(
        "agents_json".to_string(),
        AGENTS_JSON.binary(signals.flag("agents_json_present")),
    );
    breakdown.insert(
        "domain_verified".to_string(),
        DOMAIN_VERIFIED.binary(signals.flag("domain_verified")),
    );
    breakdown.insert(
        "llms_txt".to_string(),
        LLMS_TXT.binary(signals.flag("llms_txt_present")),
    );
    breakdown.insert(
        "install_detected".to_string(),
        INSTALL_DETECTED.binary(signals.flag("install_detected")),
    );

    let total: f64 = breakdown.values().sum();
    CategoryScore {
        category: Category::Identity,
        raw: RawScore::new(total),
        breakdown,
        last_activity: signals.timestamp("updated_at"),
        skill_count: Some(signals.list_len("skills") as u32),
    }
}
