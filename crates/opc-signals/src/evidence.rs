use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use opc_core::models::EvidenceItem;

/// Aggregate view of an entity's evidence items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceSummary {
    pub item_count: usize,
    /// Sum of engagement magnitudes, saturating.
    #[ts(type = "number")]
    pub total_engagement: u64,
    #[ts(type = "number")]
    pub total_replies: u64,
    /// Distinct source communities in first-seen order.
    pub sources: Vec<String>,
    pub most_recent: Option<DateTime<Utc>>,
}

impl EvidenceSummary {
    pub fn from_items(items: &[EvidenceItem]) -> Self {
        let mut summary = Self {
            item_count: items.len(),
            ..Self::default()
        };
        for item in items {
            summary.total_engagement = summary.total_engagement.saturating_add(item.engagement);
            summary.total_replies = summary
                .total_replies
                .saturating_add(u64::from(item.reply_count));
            if !summary.sources.contains(&item.source) {
                summary.sources.push(item.source.clone());
            }
            summary.most_recent = summary.most_recent.max(Some(item.created_at));
        }
        summary
    }
}
