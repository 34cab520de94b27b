use serde::{Deserialize, Serialize};

use crate::{DisplayMode, prelude::*};

/// What a finished vertical drag on the calendar asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragOutcome {
    #[display(fmt = "stay")]
    Stay,
    #[display(fmt = "switch to week")]
    SwitchToWeek,
    #[display(fmt = "switch to month")]
    SwitchToMonth,
}

impl DragOutcome {
    /// Mode requested by the drag, if any
    pub const fn target_mode(self) -> Option<DisplayMode> {
        match self {
            Self::Stay => None,
            Self::SwitchToWeek => Some(DisplayMode::Week),
            Self::SwitchToMonth => Some(DisplayMode::Month),
        }
    }
}

/// Classifies a drag by its total vertical displacement.
///
/// Dragging up (negative `delta`) collapses to a single week, dragging down
/// expands to the month. The displacement must strictly exceed `threshold`.
pub fn classify_drag(delta: f32, threshold: f32) -> DragOutcome {
    if delta.is_nan() || delta.abs() <= threshold {
        DragOutcome::Stay
    } else if delta < 0.0 {
        DragOutcome::SwitchToWeek
    } else {
        DragOutcome::SwitchToMonth
    }
}
