//! Swipe-to-delete gesture state machine
//!
//! One record at most is tracked at a time. Offsets grow as the finger moves
//! left from where it went down and are clamped to the configured limit;
//! releasing past the threshold commits the delete, anything short of it
//! springs back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SwipeConfig;
use crate::employee::EmployeeId;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SwipeState {
    #[default]
    Idle,
    Swiping {
        id: EmployeeId,
        start_x: f64,
        offset: f64, // always within [0, limit]
    },
}

/// What a touch-end resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum SwipeOutcome {
    /// Not the tracked record, or nothing tracked
    Ignored,
    /// Released short of the threshold; the card springs back
    Cancelled(EmployeeId),
    /// Released past the threshold; the record must be removed
    Committed(EmployeeId),
}

impl SwipeState {
    /// Finger down on a card. Starts tracking `id`, dropping any other record.
    pub fn touch_start(&mut self, id: EmployeeId, x: f64) {
        if let Self::Swiping { id: previous, .. } = *self {
            if previous != id {
                debug!(%previous, %id, "swipe target switched");
            }
        }
        *self = Self::Swiping {
            id,
            start_x: x,
            offset: 0.0,
        };
    }

    /// Finger moved. Returns true when the offset changed.
    pub fn touch_move(&mut self, id: EmployeeId, x: f64, config: &SwipeConfig, card_width: f64) -> bool {
        let Self::Swiping {
            id: tracked,
            start_x,
            offset,
        } = self
        else {
            return false;
        };
        if *tracked != id {
            return false;
        }

        let limit = config.limit.resolve(card_width).max(0.0);
        let delta = *start_x - x;
        let next = if delta.is_finite() { delta.clamp(0.0, limit) } else { 0.0 };

        if next == *offset {
            return false;
        }
        *offset = next;
        true
    }

    /// Finger lifted. Always returns to `Idle` when `id` was being tracked.
    pub fn touch_end(&mut self, id: EmployeeId, config: &SwipeConfig, card_width: f64) -> SwipeOutcome {
        let Self::Swiping {
            id: tracked,
            offset,
            ..
        } = *self
        else {
            return SwipeOutcome::Ignored;
        };
        if tracked != id {
            return SwipeOutcome::Ignored;
        }

        *self = Self::Idle;
        let threshold = config.threshold.resolve(card_width);
        if offset > threshold {
            debug!(%id, offset, threshold, "swipe committed");
            SwipeOutcome::Committed(id)
        } else {
            debug!(%id, offset, threshold, "swipe cancelled");
            SwipeOutcome::Cancelled(id)
        }
    }

    /// Drop tracking if it refers to `id`. Returns true when something was cleared.
    pub fn clear_if(&mut self, id: EmployeeId) -> bool {
        if self.swiping_id() == Some(id) {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }

    pub fn swiping_id(&self) -> Option<EmployeeId> {
        match self {
            Self::Idle => None,
            Self::Swiping { id, .. } => Some(*id),
        }
    }

    /// Current offset of a record; zero for anything not being swiped
    pub fn offset_for(&self, id: EmployeeId) -> f64 {
        match self {
            Self::Swiping {
                id: tracked,
                offset,
                ..
            } if *tracked == id => *offset,
            _ => 0.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether releasing `id` right now would delete it
    pub fn would_commit(&self, id: EmployeeId, config: &SwipeConfig, card_width: f64) -> bool {
        self.swiping_id() == Some(id) && self.offset_for(id) > config.threshold.resolve(card_width)
    }
}

/// How a card should be drawn for a given offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeVisual {
    pub translate_x: f64,
    pub opacity: f64,
}

impl SwipeVisual {
    pub const REST: SwipeVisual = SwipeVisual {
        translate_x: 0.0,
        opacity: 1.0,
    };

    pub fn new(offset: f64, card_width: f64, fade: bool) -> Self {
        let opacity = if fade && card_width > 0.0 {
            (1.0 - offset / card_width).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            translate_x: if offset == 0.0 { 0.0 } else { -offset },
            opacity,
        }
    }

    /// Inline CSS for the card. Transitions are disabled while a finger is down
    /// so the card tracks it exactly.
    pub fn style(&self, dragging: bool) -> String {
        let transition = if dragging {
            "none"
        } else {
            "transform 0.2s, opacity 0.2s"
        };
        format!(
            "transform: translateX({}px); opacity: {}; transition: {};",
            self.translate_x, self.opacity, transition
        )
    }
}
