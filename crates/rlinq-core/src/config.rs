//! Query configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Hard cap (in bytes) on all live materialized buffers of one context.
    /// `None` means unbounded.
    pub materialize_cap_bytes: Option<usize>,

    /// Emit a trace event for every materialization.
    pub trace_materialization: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            materialize_cap_bytes: None,
            trace_materialization: false,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `RLINQ_MATERIALIZE_CAP_BYTES`: materialization cap in bytes
    /// - `RLINQ_TRACE_MATERIALIZATION`: `true`/`1` to trace materializations
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("RLINQ_MATERIALIZE_CAP_BYTES") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.materialize_cap_bytes = Some(v);
            }
        }

        if let Ok(s) = std::env::var("RLINQ_TRACE_MATERIALIZATION") {
            cfg.trace_materialization = matches!(s.trim(), "1" | "true" | "TRUE" | "yes");
        }

        cfg
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_cap(mut self, bytes: usize) -> Self {
        self.materialize_cap_bytes = Some(bytes);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.materialize_cap_bytes == Some(0) {
            return Err(Error::Config(
                "materialize_cap_bytes must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
