//! Host platform abstraction
//!
//! The embedding host supplies viewport control, theme colors and a
//! key-value store behind a narrow trait, so the game core never touches a
//! concrete runtime. [`MemoryHost`] is the pure in-memory implementation used
//! by tests and the native demo; the wasm build adds [`web::WebHost`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Display colors supplied by the host, with stock fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: String,
    pub wall: String,
    pub player: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            wall: "#3390ec".to_string(),
            player: "#000000".to_string(),
        }
    }
}

#[derive(Debug)]
enum FetchState {
    Pending,
    Ready(Option<String>),
    Taken,
}

/// Handle to an in-flight key-value read. The host fulfills it whenever the
/// backing store answers; the frame loop polls [`Fetch::take`] until then.
/// Resolves at most once.
#[derive(Debug, Clone)]
pub struct Fetch {
    cell: Rc<RefCell<FetchState>>,
}

impl Fetch {
    pub fn pending() -> Self {
        Self {
            cell: Rc::new(RefCell::new(FetchState::Pending)),
        }
    }

    /// A fetch that already has its answer (synchronous stores).
    pub fn ready(value: Option<String>) -> Self {
        Self {
            cell: Rc::new(RefCell::new(FetchState::Ready(value))),
        }
    }

    /// Deliver the store's answer. Deliveries after the first are dropped.
    pub fn fulfill(&self, value: Option<String>) {
        let mut state = self.cell.borrow_mut();
        if matches!(*state, FetchState::Pending) {
            *state = FetchState::Ready(value);
        }
    }

    /// `Some(result)` exactly once after the store has answered.
    pub fn take(&self) -> Option<Option<String>> {
        let mut state = self.cell.borrow_mut();
        match std::mem::replace(&mut *state, FetchState::Taken) {
            FetchState::Ready(value) => Some(value),
            other => {
                *state = other;
                None
            }
        }
    }
}

/// Capabilities the embedding host provides to the game.
pub trait HostBridge {
    /// Signal that the game finished booting.
    fn ready(&self) {}

    /// Ask the host to maximize the playable viewport.
    fn expand_viewport(&self) {}

    fn theme(&self) -> Theme {
        Theme::default()
    }

    /// Begin an asynchronous read of `key`. Must never block the frame cycle.
    fn fetch_value(&self, key: &str) -> Fetch;

    /// Fire-and-forget write. Failures stay on the host side of the fence.
    fn store_value(&self, key: &str, value: &str);
}

/// In-memory host for tests and headless runs. Reads resolve immediately.
#[derive(Debug, Default)]
pub struct MemoryHost {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a stored value, as if written by a previous session.
    pub fn seed(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl HostBridge for MemoryHost {
    fn fetch_value(&self, key: &str) -> Fetch {
        Fetch::ready(self.values.borrow().get(key).cloned())
    }

    fn store_value(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebHost;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_resolves_once() {
        let fetch = Fetch::pending();
        assert_eq!(fetch.take(), None);

        fetch.fulfill(Some("42".to_string()));
        assert_eq!(fetch.take(), Some(Some("42".to_string())));
        assert_eq!(fetch.take(), None);
    }

    #[test]
    fn test_fetch_keeps_first_delivery() {
        let fetch = Fetch::pending();
        fetch.fulfill(Some("first".to_string()));
        fetch.fulfill(Some("second".to_string()));
        assert_eq!(fetch.take(), Some(Some("first".to_string())));
    }

    #[test]
    fn test_fetch_ready_for_absent_value() {
        let fetch = Fetch::ready(None);
        assert_eq!(fetch.take(), Some(None));
    }

    #[test]
    fn test_memory_host_round_trip() {
        let host = MemoryHost::new().seed("highScore", "50");
        assert_eq!(host.fetch_value("highScore").take(), Some(Some("50".to_string())));
        assert_eq!(host.fetch_value("missing").take(), Some(None));

        host.store_value("highScore", "60");
        assert_eq!(host.stored("highScore").as_deref(), Some("60"));
    }
}
