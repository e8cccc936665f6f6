use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Panning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrosshairMode {
    /// Crosshair tracks the pointer and rests at the scope center otherwise.
    #[default]
    FollowCursor,
    /// Crosshair is never drawn.
    Hidden,
}

/// Public crosshair state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorState {
    /// Pointer x in viewport pixels while inside the timeline.
    pub pointer_x: Option<f64>,
    /// Years BP under the pointer, `None` when the pointer is outside.
    pub years_bp: Option<f64>,
}

/// Pointer and drag state held next to the scope.
///
/// Button handlers read the tracked cursor from here instead of any
/// process-wide "last pointer" value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    crosshair_mode: CrosshairMode,
    cursor: CursorState,
    drag_last_x: Option<f64>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn crosshair_mode(self) -> CrosshairMode {
        self.crosshair_mode
    }

    pub fn set_crosshair_mode(&mut self, mode: CrosshairMode) {
        self.crosshair_mode = mode;
    }

    #[must_use]
    pub fn cursor(self) -> CursorState {
        self.cursor
    }

    pub fn on_pointer_move(&mut self, x: f64, years_bp: f64) {
        self.cursor.pointer_x = Some(x);
        self.cursor.years_bp = Some(years_bp);
    }

    /// Re-resolves the cursor year after the scope moved under a still pointer.
    pub fn refresh_cursor_years(&mut self, years_bp_at: impl FnOnce(f64) -> f64) {
        if let Some(x) = self.cursor.pointer_x {
            self.cursor.years_bp = Some(years_bp_at(x));
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = CursorState::default();
    }

    pub fn on_pan_start(&mut self, x: f64) {
        self.mode = InteractionMode::Panning;
        self.drag_last_x = Some(x);
    }

    /// Records the new drag position and returns the pixel delta since the
    /// previous one, or `None` when no drag is active.
    pub fn on_pan_move(&mut self, x: f64) -> Option<f64> {
        if self.mode != InteractionMode::Panning {
            return None;
        }
        let previous = self.drag_last_x.replace(x)?;
        Some(x - previous)
    }

    pub fn on_pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
        self.drag_last_x = None;
    }
}
