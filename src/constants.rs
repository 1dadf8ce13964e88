//! Sizing, color, and timing constants for the selector.

#[cfg(feature = "animate")]
use std::time::Duration;

use floem::peniko::Color;

/// Broadcast topic carrying an index to re-sync every selector to.
pub const FONT_SIZE_TOPIC: &str = "change_font_size";

/// Widget height; leaves room for the indicator above and below the baseline.
pub const SELECTOR_HEIGHT: f32 = 24.0;

/// Baseline thickness
pub const BASELINE_HEIGHT: f64 = 4.0;

/// Tick mark size
pub const TICK_WIDTH: f64 = 2.0;
pub const TICK_HEIGHT: f64 = 10.0;
pub const TICK_RADIUS: f64 = 1.0;

/// Selection indicator size
pub const INDICATOR_WIDTH: f64 = 6.0;
pub const INDICATOR_HEIGHT: f64 = 20.0;
pub const INDICATOR_RADIUS: f64 = 3.0;

pub const BASELINE_COLOR: Color = Color::rgb8(0xCC, 0xCC, 0xCC);
pub const TICK_COLOR: Color = Color::rgb8(0xB5, 0xB5, 0xB5);
pub const INDICATOR_COLOR: Color = Color::rgb8(0xD0, 0xD0, 0xD0);

/// Length of the pointer-down indicator transition.
#[cfg(feature = "animate")]
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Repaint interval while a transition is running (~60 fps).
#[cfg(feature = "animate")]
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
