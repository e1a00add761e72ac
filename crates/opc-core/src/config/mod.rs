pub mod bucket_config;
pub mod certification_config;
pub mod defaults;
pub mod leaderboard_config;
pub mod observability_config;
pub mod opc_config;

pub use bucket_config::BucketConfig;
pub use certification_config::CertificationConfig;
pub use leaderboard_config::LeaderboardConfig;
pub use observability_config::ObservabilityConfig;
pub use opc_config::{OpcConfig, ThresholdContext};
