/// HueSight version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prior Beta(α, β) parameters for every category: a weak belief centred on 0.5.
pub const DEFAULT_PRIOR_ALPHA: f64 = 2.0;
pub const DEFAULT_PRIOR_BETA: f64 = 2.0;

/// Global confidence at which the reliability advisor reports reliable data.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.85;

/// Responses required before reliability is considered at all.
pub const DEFAULT_MIN_QUESTIONS: usize = 8;

/// Soft ceiling on session length. Never enforced by the engine.
pub const DEFAULT_MAX_QUESTIONS: usize = 25;

/// Severity reported before any non-control category has been observed.
pub const UNINFORMED_SEVERITY: f64 = 0.5;

/// Baseline category excluded from severity and confidence.
pub const CONTROL_CATEGORY: &str = "control";

/// Exploration bonus for a category that has never been asked.
pub const UNTESTED_BONUS: f64 = 0.5;
/// Bonus for the first observed question, decaying linearly per observation.
pub const OBSERVED_BONUS_BASE: f64 = 0.2;
pub const OBSERVED_BONUS_DECAY: f64 = 0.05;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "HUESIGHT_LOG";

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "huesight.toml";
