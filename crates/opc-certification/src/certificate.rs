//! Certificate identifiers: `<AUTHORITY>-<epoch>-<5 digits>`.
//!
//! The number is display-grade pseudo-randomness, not an identity authority.
//! Distinct identities collide with probability about 1/90000, and the
//! scheme offers no collision or preimage resistance. The fold below is kept
//! bit-exact so identifiers match other implementations of the same rule:
//! a 32-bit signed polynomial rolling hash (`acc = acc * 31 + unit`,
//! wrapping) over the identity's UTF-16 code units, then
//! `|acc| mod 90000 + 10000`.

use opc_core::config::{defaults, CertificationConfig};
use opc_core::constants::{
    CERTIFICATE_HASH_MULTIPLIER, CERTIFICATE_NUMBER_MODULUS, CERTIFICATE_NUMBER_OFFSET,
};
use opc_core::models::Tier;

/// Fold `identity` into a wrapping 32-bit signed accumulator.
fn rolling_hash(identity: &str) -> i32 {
    identity.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(CERTIFICATE_HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    })
}

/// Five-digit certificate number in `10000..=99999`.
pub fn certificate_number(identity: &str) -> u32 {
    // Widen before abs(): i32::MIN has no positive i32 counterpart.
    let magnitude = i64::from(rolling_hash(identity)).unsigned_abs();
    (magnitude % u64::from(CERTIFICATE_NUMBER_MODULUS)) as u32 + CERTIFICATE_NUMBER_OFFSET
}

/// Derive the identifier for `identity` in `epoch_label` under the default
/// authority. Use a [`CertificateIssuer`] for a configured authority.
pub fn derive_certificate_id(identity: &str, epoch_label: &str) -> String {
    format_certificate_id(defaults::DEFAULT_CERT_AUTHORITY, identity, epoch_label)
}

fn format_certificate_id(authority: &str, identity: &str, epoch_label: &str) -> String {
    format!(
        "{}-{}-{:05}",
        authority,
        epoch_label,
        certificate_number(identity)
    )
}

/// Issues identifiers for one authority and epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateIssuer {
    authority: String,
    epoch_label: String,
}

impl CertificateIssuer {
    pub fn new(authority: impl Into<String>, epoch_label: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
            epoch_label: epoch_label.into(),
        }
    }

    pub fn from_config(config: &CertificationConfig) -> Self {
        Self::new(config.authority.clone(), config.epoch_label.clone())
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn epoch_label(&self) -> &str {
        &self.epoch_label
    }

    /// Identifier for `identity`, regardless of tier.
    pub fn certificate_id(&self, identity: &str) -> String {
        format_certificate_id(&self.authority, identity, &self.epoch_label)
    }

    /// Identifier for a certified tier, `None` when the tier carries no class.
    pub fn issue(&self, identity: &str, tier: &Tier) -> Option<String> {
        tier.is_certified().then(|| self.certificate_id(identity))
    }
}

impl Default for CertificateIssuer {
    fn default() -> Self {
        Self::from_config(&CertificationConfig::default())
    }
}
