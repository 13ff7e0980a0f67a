use crate::error::IntakeError;
use std::str::FromStr;
use tailor_client::ClientConfig;

/// How derived lines react to a change of the selected set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineRegeneration {
    /// Rebuild every line from the selection, dropping manual edits
    #[default]
    Replace,
    /// Rebuild, but keep quantity and fee of lines whose material is still selected
    PreserveById,
}

impl FromStr for LineRegeneration {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(LineRegeneration::Replace),
            "preserve_by_id" | "preserve" => Ok(LineRegeneration::PreserveById),
            other => Err(IntakeError::Config(format!(
                "unknown line regeneration policy: {}",
                other
            ))),
        }
    }
}

/// Which derived amounts are floored at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClampPolicy {
    /// balance = max(0, total - advance)
    pub negative_balance: bool,
    /// counterpart of a split edit = max(0, total - edited)
    pub negative_split: bool,
}

/// Intake configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DEFAULT_LINE_REMARKS | Custom tailoring service | remarks of derived lines when the order has none |
/// | AD_HOC_LINE_LABEL | New Item | label of a hand-added line |
/// | AD_HOC_LINE_REMARKS | Custom item | remarks of a hand-added line |
/// | FALLBACK_MATERIAL_ID | 1 | material sent for hand-added lines |
/// | LINE_REGENERATION | replace | replace / preserve_by_id |
/// | CLAMP_NEGATIVE_BALANCE | false | floor balance at zero |
/// | CLAMP_NEGATIVE_SPLIT | false | floor split counterpart at zero |
/// | API_BASE_URL | http://localhost:8000/api | back office REST base |
/// | API_TOKEN | - | bearer token |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | LOG_LEVEL | info | tracing filter |
/// | LOG_DIR | - | daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// LINE_REGENERATION=preserve_by_id intake-replay order.json
/// ```
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub default_line_remarks: String,
    pub ad_hoc_line_label: String,
    pub ad_hoc_line_remarks: String,
    pub fallback_material_id: i64,
    pub line_regeneration: LineRegeneration,
    pub clamp: ClampPolicy,
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl IntakeConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_line_remarks: std::env::var("DEFAULT_LINE_REMARKS")
                .unwrap_or(defaults.default_line_remarks),
            ad_hoc_line_label: std::env::var("AD_HOC_LINE_LABEL")
                .unwrap_or(defaults.ad_hoc_line_label),
            ad_hoc_line_remarks: std::env::var("AD_HOC_LINE_REMARKS")
                .unwrap_or(defaults.ad_hoc_line_remarks),
            fallback_material_id: std::env::var("FALLBACK_MATERIAL_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fallback_material_id),
            line_regeneration: match std::env::var("LINE_REGENERATION") {
                Ok(v) => v.parse().unwrap_or_else(|e: IntakeError| {
                    tracing::warn!(error = %e, "Falling back to replace");
                    LineRegeneration::Replace
                }),
                Err(_) => defaults.line_regeneration,
            },
            clamp: ClampPolicy {
                negative_balance: std::env::var("CLAMP_NEGATIVE_BALANCE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.clamp.negative_balance),
                negative_split: std::env::var("CLAMP_NEGATIVE_SPLIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.clamp.negative_split),
            },
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            api_token: std::env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    pub fn with_line_regeneration(mut self, policy: LineRegeneration) -> Self {
        self.line_regeneration = policy;
        self
    }

    pub fn with_clamp_policy(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }

    /// HTTP client settings for the back office
    pub fn client_config(&self) -> ClientConfig {
        let config =
            ClientConfig::new(self.api_base_url.clone()).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            default_line_remarks: "Custom tailoring service".into(),
            ad_hoc_line_label: "New Item".into(),
            ad_hoc_line_remarks: "Custom item".into(),
            fallback_material_id: 1,
            line_regeneration: LineRegeneration::Replace,
            clamp: ClampPolicy::default(),
            api_base_url: "http://localhost:8000/api".into(),
            api_token: None,
            request_timeout_secs: 30,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
