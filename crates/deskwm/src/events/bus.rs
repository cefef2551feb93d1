//! Observer-list event bus

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{error, trace};

use super::{EventSink, WindowEvent, WindowEventKind};

/// Callback invoked for each delivered event
pub type Listener = Rc<dyn Fn(&WindowEvent) -> anyhow::Result<()>>;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous fan-out of window events to subscribed listeners
///
/// Listeners for a kind run in subscription order. The listener list is
/// snapshotted before dispatch, so a listener may subscribe or unsubscribe
/// (itself included) without disturbing the delivery in progress. A listener
/// returning `Err` is logged and skipped; the remaining listeners still run.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<HashMap<WindowEventKind, Vec<(SubscriptionId, Listener)>>>,
    next_id: Cell<u64>,
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one kind of event
    pub fn subscribe<F>(&self, kind: WindowEventKind, listener: F) -> SubscriptionId
    where
        F: Fn(&WindowEvent) -> anyhow::Result<()> + 'static,
    {
        self.subscribe_kinds(&[kind], Rc::new(listener))
    }

    /// Subscribe one listener to every kind of event
    pub fn subscribe_all<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&WindowEvent) -> anyhow::Result<()> + 'static,
    {
        self.subscribe_kinds(&WindowEventKind::ALL, Rc::new(listener))
    }

    fn subscribe_kinds(&self, kinds: &[WindowEventKind], listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let mut listeners = self.listeners.borrow_mut();
        for kind in kinds {
            listeners.entry(*kind).or_default().push((id, Rc::clone(&listener)));
        }
        id
    }

    /// Remove a subscription. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut removed = false;
        let mut listeners = self.listeners.borrow_mut();
        for list in listeners.values_mut() {
            let before = list.len();
            list.retain(|(sub, _)| *sub != id);
            removed |= list.len() != before;
        }
        listeners.retain(|_, list| !list.is_empty());
        removed
    }

    /// Number of listeners that would receive an event of `kind`
    pub fn listener_count(&self, kind: WindowEventKind) -> usize {
        self.listeners.borrow().get(&kind).map_or(0, Vec::len)
    }

    /// Drop every subscription
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl EventSink for EventBus {
    fn publish(&self, event: &WindowEvent) {
        let kind = event.kind();
        let targets = match self.listeners.borrow().get(&kind) {
            Some(list) => list.clone(),
            None => return,
        };

        trace!(?kind, window = %event.window_id(), listeners = targets.len(), "dispatching window event");
        for (id, listener) in targets {
            if let Err(err) = listener(event) {
                error!(subscription = id.0, ?kind, window = %event.window_id(), "event listener failed: {err:#}");
            }
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let counts: HashMap<_, _> = listeners.iter().map(|(kind, list)| (*kind, list.len())).collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}
