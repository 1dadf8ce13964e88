//! # floem-font-size
//!
//! A discrete font size selector widget for [Floem](https://github.com/lapce/floem).
//!
//! The selector looks like a slider with one tick per font size. Clicking
//! snaps the indicator to the nearest tick, dragging walks it tick by tick,
//! and any part of the app can move it by posting an index to
//! [`FONT_SIZE_TOPIC`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_font_size::{font_size_selector, FontSizeSelector};
//!
//! let selected = RwSignal::new(1usize);
//! // Bound to a signal:
//! let _ = font_size_selector([12.0, 14.0, 16.0, 18.0, 24.0], selected);
//! // Or with a plain handler:
//! let _ = FontSizeSelector::new([12.0, 14.0, 16.0], 0)
//!     .map(|s| s.on_select(|index| println!("picked {index}")));
//! ```

pub mod broadcast;
mod constants;
mod error;
mod math;
mod selection;
mod selector;
#[cfg(feature = "animate")]
mod transition;

pub use constants::FONT_SIZE_TOPIC;
pub use error::SelectorError;
pub use selector::{font_size_selector, FontSizeSelector};

/// Moves every live selector to `index` without calling their
/// [`on_select`](FontSizeSelector::on_select) handlers.
///
/// Must be called on the UI thread.
pub fn sync_font_size_index(index: usize) {
    broadcast::post(FONT_SIZE_TOPIC, &index);
}
