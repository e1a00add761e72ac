/// Highest score on the composite scale.
pub const SCORE_MAX: f64 = 100.0;

// ---- Certificate identifiers ----

/// Multiplier of the polynomial rolling hash used for certificate numbers.
pub const CERTIFICATE_HASH_MULTIPLIER: i32 = 31;

/// Certificate numbers are reduced modulo this value...
pub const CERTIFICATE_NUMBER_MODULUS: u32 = 90_000;

/// ...and shifted by this offset, so they always have five digits.
pub const CERTIFICATE_NUMBER_OFFSET: u32 = 10_000;

// ---- Environment variables ----

/// Per-target log filter, `EnvFilter` syntax.
pub const ENV_LOG: &str = "OPC_LOG";

/// Overrides `certification.authority`.
pub const ENV_CERT_AUTHORITY: &str = "OPC_CERT_AUTHORITY";

/// Overrides `certification.epoch_label`.
pub const ENV_EPOCH_LABEL: &str = "OPC_EPOCH_LABEL";

/// Overrides `buckets.distinguished_min_score`.
pub const ENV_DISTINGUISHED_MIN_SCORE: &str = "OPC_DISTINGUISHED_MIN_SCORE";

/// Overrides `buckets.flagged_below_score`.
pub const ENV_FLAGGED_BELOW_SCORE: &str = "OPC_FLAGGED_BELOW_SCORE";
