//! Scheduler Configuration
//!
//! Knobs for the choices the scheduling algorithm leaves open.
//!
//! ```rust
//! use miniflow_core::config::{CyclePolicy, ReadyOrder, SchedulerConfig};
//!
//! let config = SchedulerConfig::from_json(r#"{"ready_order": "lifo"}"#).unwrap();
//! assert_eq!(config.ready_order, ReadyOrder::Lifo);
//! assert_eq!(config.on_cycle, CyclePolicy::Error);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which ready node the scheduler takes next when several are ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyOrder {
    /// Oldest first: fed inputs in feed order, then nodes in the order they became ready.
    #[default]
    Fifo,

    /// Newest first.
    Lifo,
}

/// What to do when scheduling ends with nodes that never became ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Fail with `CycleDetected`.
    #[default]
    Error,

    /// Log a warning and return the incomplete order.
    Truncate,
}

/// Scheduler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub ready_order: ReadyOrder,

    #[serde(default)]
    pub on_cycle: CyclePolicy,
}

impl SchedulerConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_ready_order(mut self, ready_order: ReadyOrder) -> Self {
        self.ready_order = ready_order;
        self
    }

    pub fn with_cycle_policy(mut self, on_cycle: CyclePolicy) -> Self {
        self.on_cycle = on_cycle;
        self
    }
}
