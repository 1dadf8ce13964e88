//! Selection state: the font size options, the selected index, and the
//! pointer gesture that drives changes.

use crate::error::SelectorError;
use crate::math;

/// Pointer gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Gesture {
    #[default]
    Idle,
    Dragging,
}

/// How the indicator should reach its new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Motion {
    Animated,
    Immediate,
}

/// A committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Change {
    pub from: usize,
    pub to: usize,
    #[cfg_attr(not(feature = "animate"), allow(dead_code))]
    pub motion: Motion,
}

#[derive(Debug, Clone)]
pub(crate) struct Selection {
    sizes: Vec<f32>,
    index: usize,
    gesture: Gesture,
}

impl Selection {
    /// Validates `sizes` and clamps `initial` into range.
    pub fn new(sizes: Vec<f32>, initial: usize) -> Result<Self, SelectorError> {
        if sizes.is_empty() {
            return Err(SelectorError::NoOptions);
        }
        if let Some((index, &size)) = sizes
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s <= 0.0)
        {
            return Err(SelectorError::InvalidSize { index, size });
        }
        let index = initial.min(sizes.len() - 1);
        if index != initial {
            log::debug!(
                "initial font size index {initial} out of range for {} options, using {index}",
                sizes.len()
            );
        }
        Ok(Self {
            sizes,
            index,
            gesture: Gesture::Idle,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> f32 {
        self.sizes[self.index]
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// A single option leaves nothing to pick.
    pub fn is_interactive(&self) -> bool {
        self.sizes.len() > 1
    }

    /// Moves the selection to `target` (clamped). Returns `None` when the
    /// index is already selected.
    pub fn select(&mut self, target: usize, motion: Motion) -> Option<Change> {
        let to = target.min(self.len() - 1);
        if to == self.index {
            return None;
        }
        let from = std::mem::replace(&mut self.index, to);
        Some(Change { from, to, motion })
    }

    /// Starts a drag and snaps to the tick under `x`.
    pub fn pointer_down(&mut self, x: f64, width: f64) -> Option<Change> {
        self.gesture = Gesture::Dragging;
        self.select_at(x, width, Motion::Animated)
    }

    /// Follows the pointer while dragging; ignored when idle.
    pub fn pointer_drag(&mut self, x: f64, width: f64) -> Option<Change> {
        if self.gesture != Gesture::Dragging {
            return None;
        }
        self.select_at(x, width, Motion::Immediate)
    }

    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Adopts an index pushed from elsewhere in the app. Returns whether
    /// the selection moved.
    pub fn resync(&mut self, index: i64) -> bool {
        let index = math::clamp_index(index, self.len());
        if index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    fn select_at(&mut self, x: f64, width: f64, motion: Motion) -> Option<Change> {
        let target = math::index_at(x, self.len(), width)?;
        self.select(target, motion)
    }
}
