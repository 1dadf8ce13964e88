//! The font size selector view.
//!
//! Paints a baseline, one tick per font size, and an indicator on the
//! selected tick. Pointer-down jumps (animated) to the nearest tick, dragging
//! follows the pointer tick by tick, and indices posted to
//! [`FONT_SIZE_TOPIC`](crate::FONT_SIZE_TOPIC) re-sync the selection quietly.

#[cfg(feature = "animate")]
use std::time::Instant;

use floem::kurbo::Rect;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::broadcast::{self, Subscription};
use crate::constants;
use crate::error::SelectorError;
use crate::math;
use crate::selection::{Change, Gesture, Selection};
#[cfg(feature = "animate")]
use crate::selection::Motion;
#[cfg(feature = "animate")]
use crate::transition::IndicatorTransition;

enum SelectorUpdate {
    Resync(i64),
}

pub struct FontSizeSelector {
    id: ViewId,
    selection: Selection,
    size: floem::taffy::prelude::Size<f32>,
    observers: Vec<Box<dyn Fn(usize)>>,
    #[cfg(feature = "animate")]
    transition: Option<IndicatorTransition>,
    /// Dropped with the view, which unsubscribes from the topic.
    _subscription: Subscription,
}

impl FontSizeSelector {
    /// Creates a selector over `sizes` with `initial_index` selected.
    ///
    /// `initial_index` is clamped into range. Fails when `sizes` is empty or
    /// holds a size that is not a positive finite number.
    pub fn new(sizes: impl Into<Vec<f32>>, initial_index: usize) -> Result<Self, SelectorError> {
        let selection = Selection::new(sizes.into(), initial_index)?;
        let interactive = selection.is_interactive();
        let id = ViewId::new();

        let subscription = broadcast::subscribe(constants::FONT_SIZE_TOPIC, move |payload| {
            match broadcast::payload_index(payload) {
                Some(index) => id.update_state(SelectorUpdate::Resync(index)),
                None => log::trace!("ignoring non-integer font size payload"),
            }
        });

        Ok(FontSizeSelector {
            id,
            selection,
            size: Default::default(),
            observers: Vec::new(),
            #[cfg(feature = "animate")]
            transition: None,
            _subscription: subscription,
        }
        .style(move |s| {
            let s = s
                .height(constants::SELECTOR_HEIGHT)
                .min_width(constants::INDICATOR_WIDTH as f32 * 2.0);
            if interactive {
                s.cursor(floem::style::CursorStyle::Pointer)
            } else {
                s
            }
        }))
    }

    /// Adds a handler called with the new index after every user-driven
    /// change. Re-syncs through the broadcast topic do not call it.
    pub fn on_select(mut self, handler: impl Fn(usize) + 'static) -> Self {
        self.observers.push(Box::new(handler));
        self
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    /// The font size under the indicator.
    pub fn selected_size(&self) -> f32 {
        self.selection.size()
    }

    pub fn sizes(&self) -> &[f32] {
        self.selection.sizes()
    }

    fn width(&self) -> f64 {
        self.size.width as f64
    }

    #[cfg(feature = "animate")]
    fn tick_x(&self, index: usize) -> f64 {
        math::tick_x(index, self.selection.len(), self.width())
    }

    /// Pointer pressed at local `x`. Returns whether the press was taken.
    fn press(&mut self, x: f64) -> bool {
        if !self.selection.is_interactive() {
            return false;
        }
        if let Some(change) = self.selection.pointer_down(x, self.width()) {
            self.apply(change);
        }
        true
    }

    /// Pointer moved to local `x`. Returns whether a drag consumed it.
    fn drag(&mut self, x: f64) -> bool {
        match self.selection.pointer_drag(x, self.width()) {
            Some(change) => {
                self.apply(change);
                true
            }
            None => self.selection.gesture() == Gesture::Dragging,
        }
    }

    fn release(&mut self) {
        self.selection.pointer_up();
    }

    /// Passive re-sync; moves the indicator without notifying observers.
    fn resync(&mut self, index: i64) {
        if self.selection.resync(index) {
            log::debug!("font size selector re-synced to {}", self.selection.index());
            #[cfg(feature = "animate")]
            {
                self.transition = None;
            }
            self.id.request_paint();
        }
    }

    fn apply(&mut self, change: Change) {
        #[cfg(feature = "animate")]
        {
            self.transition = match change.motion {
                Motion::Animated => {
                    let from_x = self.displayed_x(change.from, Instant::now());
                    Some(IndicatorTransition::begin(from_x))
                }
                Motion::Immediate => None,
            };
        }
        log::debug!("font size selection {} -> {}", change.from, change.to);

        self.id.request_paint();
        for observer in &self.observers {
            observer(change.to);
        }
    }

    /// Where the indicator is drawn right now, given the index it was
    /// heading to.
    #[cfg(feature = "animate")]
    fn displayed_x(&self, index: usize, now: Instant) -> f64 {
        let target = self.tick_x(index);
        match &self.transition {
            Some(transition) => transition.sample(now, target).x,
            None => target,
        }
    }

    /// Indicator x while a transition is running. Finishing the
    /// transition returns `None`, which snaps to the exact tick frame.
    #[cfg(feature = "animate")]
    fn transition_x(&mut self) -> Option<f64> {
        let transition = self.transition?;
        let target = self.tick_x(self.selection.index());
        let sample = transition.sample(Instant::now(), target);
        if sample.finished {
            log::trace!("indicator settled on tick {}", self.selection.index());
            self.transition = None;
            return None;
        }
        let id = self.id;
        floem::action::exec_after(constants::FRAME_INTERVAL, move |_| {
            id.request_paint();
        });
        Some(sample.x)
    }

    #[cfg(not(feature = "animate"))]
    fn transition_x(&mut self) -> Option<f64> {
        None
    }
}

/// Creates a selector bound to `selected`.
///
/// User selections are written to the signal. Writes to the signal from
/// elsewhere move the indicator without echoing back.
pub fn font_size_selector(
    sizes: impl Into<Vec<f32>>,
    selected: RwSignal<usize>,
) -> Result<FontSizeSelector, SelectorError> {
    let selector = FontSizeSelector::new(sizes, selected.get_untracked())?;
    let id = selector.id;

    create_effect(move |_| {
        let index = selected.get();
        id.update_state(SelectorUpdate::Resync(
            i64::try_from(index).unwrap_or(i64::MAX),
        ));
    });

    Ok(selector.on_select(move |index| {
        if selected.get_untracked() != index {
            selected.set(index);
        }
    }))
}

impl View for FontSizeSelector {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SelectorUpdate>() {
            match *update {
                SelectorUpdate::Resync(index) => self.resync(index),
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if !self.press(e.pos.x) {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.drag(e.pos.x) {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.release();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        if layout.size != self.size {
            #[cfg(feature = "animate")]
            {
                self.transition = None;
            }
            self.size = layout.size;
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let count = self.selection.len();

        // End indicators hang half outside the bounds; nothing clips them.
        // Baseline spans the whole widget
        let baseline = Rect::new(
            0.0,
            (h - constants::BASELINE_HEIGHT) / 2.0,
            w,
            (h + constants::BASELINE_HEIGHT) / 2.0,
        );
        cx.fill(&baseline, constants::BASELINE_COLOR, 0.0);

        for index in 0..count {
            let tick = math::tick_rect(index, count, w, h);
            cx.fill(
                &tick.to_rounded_rect(constants::TICK_RADIUS),
                constants::TICK_COLOR,
                0.0,
            );
        }

        let indicator = match self.transition_x() {
            Some(x) => math::indicator_rect_at(x, h),
            None => math::indicator_rect(self.selection.index(), count, w, h),
        };
        cx.fill(
            &indicator.to_rounded_rect(constants::INDICATOR_RADIUS),
            constants::INDICATOR_COLOR,
            0.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const SIZES: [f32; 5] = [12.0, 14.0, 16.0, 18.0, 24.0];

    fn recorded(sizes: &[f32], initial: usize) -> (FontSizeSelector, Rc<RefCell<Vec<usize>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut selector = FontSizeSelector::new(sizes.to_vec(), initial)
            .unwrap()
            .on_select(move |index| sink.borrow_mut().push(index));
        selector.size = floem::taffy::prelude::Size {
            width: 200.0,
            height: 24.0,
        };
        (selector, calls)
    }

    #[test]
    fn press_notifies_observers_once() {
        let (mut selector, calls) = recorded(&SIZES, 1);
        assert!(selector.press(180.0));
        assert_eq!(selector.selected_index(), 4);
        assert_eq!(selector.selected_size(), 24.0);
        assert_eq!(*calls.borrow(), vec![4]);
    }

    #[test]
    fn press_uses_full_widget_width() {
        // 75 / 50 = 1.5 rounds up
        let (mut selector, calls) = recorded(&SIZES, 1);
        selector.press(75.0);
        assert_eq!(selector.selected_index(), 2);
        assert_eq!(*calls.borrow(), vec![2]);

        let rect = math::indicator_rect(1, SIZES.len(), selector.width(), 24.0);
        assert_eq!(rect.center().x, 50.0);
    }

    #[test]
    fn press_on_current_tick_stays_quiet() {
        let (mut selector, calls) = recorded(&SIZES, 1);
        selector.press(52.0);
        assert_eq!(selector.selected_index(), 1);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn drag_follows_pointer_until_release() {
        let (mut selector, calls) = recorded(&SIZES, 0);
        selector.press(0.0);
        assert!(selector.drag(100.0));
        assert!(selector.drag(150.0));
        selector.release();
        assert!(!selector.drag(200.0));
        assert_eq!(*calls.borrow(), vec![2, 3]);
    }

    #[test]
    fn resync_never_notifies_observers() {
        let (mut selector, calls) = recorded(&SIZES, 1);
        selector.resync(2);
        assert_eq!(selector.selected_index(), 2);
        selector.resync(2);
        assert_eq!(selector.selected_index(), 2);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn single_option_ignores_pointer() {
        let (mut selector, calls) = recorded(&[14.0], 0);
        assert!(!selector.press(150.0));
        assert!(!selector.drag(190.0));
        assert_eq!(selector.selected_index(), 0);
        assert!(calls.borrow().is_empty());
    }
}
