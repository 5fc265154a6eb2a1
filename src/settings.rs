use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub codec: Codec,
    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Codec {
    /// Reject flat maps carrying keys outside the registry instead of ignoring them.
    #[serde(default)]
    pub strict_keys: bool,
    /// Emit every registry key when flattening, with the sentinel for unset leaves.
    #[serde(default)]
    pub emit_unset: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for Output {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("codec.strict_keys", Codec::default().strict_keys)
            .into_diagnostic()?
            .set_default("codec.emit_unset", Codec::default().emit_unset)
            .into_diagnostic()?
            .set_default("output.pretty", Output::default().pretty)
            .into_diagnostic()?;

        // Optional file
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment overrides: RESTRICTION__CODEC__STRICT_KEYS=true, etc.
        builder =
            builder.add_source(config::Environment::with_prefix("RESTRICTION").separator("__"));

        let cfg = builder.build().into_diagnostic()?;
        cfg.try_deserialize().into_diagnostic()
    }
}
