//! Topic-keyed broadcast channel for the UI thread.
//!
//! Any part of the app can [`post`] a payload to a topic without holding a
//! reference to the views listening on it. Payloads are type-erased; each
//! subscriber decides what it understands. Topics do not address a single
//! subscriber, so every handler must filter for itself.
//!
//! The registry lives on the thread that uses it. Floem views are built and
//! driven on the UI thread, so that is where selectors subscribe and where
//! posts must happen.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

type Handler = Rc<dyn Fn(&dyn Any)>;

#[derive(Default)]
struct Registry {
    topics: HashMap<String, Vec<(u64, Handler)>>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Keeps a handler registered; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    topic: String,
    id: u64,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The registry may already be gone during thread teardown.
        let _ = REGISTRY.try_with(|registry| {
            let mut registry = registry.borrow_mut();
            if let Some(handlers) = registry.topics.get_mut(&self.topic) {
                handlers.retain(|(id, _)| *id != self.id);
                if handlers.is_empty() {
                    registry.topics.remove(&self.topic);
                }
            }
        });
    }
}

/// Registers `handler` for every payload posted to `topic`.
pub fn subscribe(topic: &str, handler: impl Fn(&dyn Any) + 'static) -> Subscription {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    REGISTRY.with(|registry| {
        registry
            .borrow_mut()
            .topics
            .entry(topic.to_string())
            .or_default()
            .push((id, Rc::new(handler)));
    });
    Subscription {
        topic: topic.to_string(),
        id,
    }
}

/// Delivers `payload` to every handler subscribed to `topic`.
///
/// Handlers run synchronously, in subscription order. They may subscribe or
/// unsubscribe while being called; such changes apply to the next post.
pub fn post(topic: &str, payload: &dyn Any) {
    let handlers: Vec<Handler> = REGISTRY.with(|registry| {
        registry
            .borrow()
            .topics
            .get(topic)
            .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    });
    log::trace!("posting to {topic} ({} handlers)", handlers.len());
    for handler in handlers {
        handler(payload);
    }
}

/// Reads an integer payload of any primitive integer type.
///
/// Values outside the `i64` range saturate. Returns `None` for any other
/// payload type.
pub fn payload_index(payload: &dyn Any) -> Option<i64> {
    macro_rules! signed {
        ($($t:ty),*) => {
            $(if let Some(v) = payload.downcast_ref::<$t>() {
                return Some(*v as i64);
            })*
        };
    }
    macro_rules! unsigned {
        ($($t:ty),*) => {
            $(if let Some(v) = payload.downcast_ref::<$t>() {
                return Some(i64::try_from(*v).unwrap_or(i64::MAX));
            })*
        };
    }
    signed!(i8, i16, i32, i64, isize);
    unsigned!(u8, u16, u32, u64, usize);
    if let Some(v) = payload.downcast_ref::<i128>() {
        return Some((*v).clamp(i64::MIN as i128, i64::MAX as i128) as i64);
    }
    if let Some(v) = payload.downcast_ref::<u128>() {
        return Some(i64::try_from(*v).unwrap_or(i64::MAX));
    }
    None
}
