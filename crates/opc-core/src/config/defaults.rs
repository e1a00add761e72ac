// Single source of truth for all default values.

// --- Certification ---
pub const DEFAULT_CERT_AUTHORITY: &str = "OPC";
pub const DEFAULT_EPOCH_LABEL: &str = "2026";

// --- Buckets ---
pub const DEFAULT_DISTINGUISHED_MIN_SCORE: f64 = 85.0;
pub const DEFAULT_FLAGGED_BELOW_SCORE: f64 = 50.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Config files ---
pub const DEFAULT_CONFIG_FILENAME: &str = "opc.toml";
