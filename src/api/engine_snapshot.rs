use serde::{Deserialize, Serialize};

use crate::core::{TimeScope, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{CrosshairMode, CursorState, InteractionMode};
use crate::render::Renderer;

use super::{ScopeReadout, TickDensity, TimelineEngine};

pub const TIMELINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable engine state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub viewport: Viewport,
    pub scope: TimeScope,
    pub default_scope: TimeScope,
    pub cursor: CursorState,
    pub interaction_mode: InteractionMode,
    pub crosshair_mode: CrosshairMode,
    pub tick_density: TickDensity,
    pub tick_count: usize,
    pub readout: ScopeReadout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimelineSnapshot,
}

impl TimelineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = TimelineSnapshotJsonContractV1 {
            schema_version: TIMELINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<TimelineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: TimelineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != TIMELINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            viewport: self.viewport,
            scope: self.scope(),
            default_scope: self.default_scope(),
            cursor: self.cursor_state(),
            interaction_mode: self.interaction_mode(),
            crosshair_mode: self.crosshair_mode(),
            tick_density: self.tick_density,
            tick_count: self.tick_points().len(),
            readout: self.scope_readout(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
