use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ThresholdTable;

/// Certificate issuance and the certification threshold table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationConfig {
    /// Issuing authority prefix of certificate identifiers.
    pub authority: String,
    /// Epoch segment of certificate identifiers (e.g. the certification year).
    pub epoch_label: String,
    /// Tiers with certification classes. Default: 90/75/60.
    pub thresholds: ThresholdTable,
}

impl Default for CertificationConfig {
    fn default() -> Self {
        Self {
            authority: defaults::DEFAULT_CERT_AUTHORITY.to_string(),
            epoch_label: defaults::DEFAULT_EPOCH_LABEL.to_string(),
            thresholds: ThresholdTable::certification(),
        }
    }
}
