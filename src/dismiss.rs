//! Closing the date picker when the user interacts with anything else on the
//! page.
//!
//! The host owns an [InteractionSource] that reports every pointer-down on
//! its surface. A [DismissMonitor] holds a [Subscription] to that source only
//! while its widget is open, and the subscription is released as soon as the
//! guard is dropped.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

/// Identifies a node in the host's interaction tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap an identifier assigned by the host.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// A process-unique identifier, used for widget roots.
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1 << 32);

        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pointer-down somewhere on the host's surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// The target node first, followed by each of its ancestors.
    path: Vec<NodeId>,
}

impl Interaction {
    /// A pointer-down on the first node of `path`, which continues with that
    /// node's ancestors.
    pub fn pointer_down(path: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            path: path.into_iter().collect(),
        }
    }

    /// Whether the interaction landed on `node` or one of its descendants.
    pub fn is_within(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }
}

/// A callback notified of every [Interaction].
pub type Listener = Rc<dyn Fn(&Interaction)>;

/// Identifies a listener registered with an [InteractionSource].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Something that reports interactions to registered listeners.
///
/// Listeners only observe. An implementation must not call a listener after
/// it has been unsubscribed.
pub trait InteractionSource {
    /// Register `listener` and return the id to unsubscribe it with.
    fn subscribe(&self, listener: Listener) -> ListenerId;

    /// Remove the listener registered under `id`. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

/// An in-process [InteractionSource].
///
/// The host calls [InteractionHub::dispatch] for each pointer-down on its
/// surface.
#[derive(Default)]
pub struct InteractionHub {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
}

impl InteractionHub {
    /// A hub with no listeners.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Notify every subscribed listener of `interaction`.
    ///
    /// Listeners may subscribe or unsubscribe while the dispatch runs. A
    /// listener that is unsubscribed before its turn is skipped, one
    /// subscribed during the dispatch is first called for the next
    /// interaction.
    pub fn dispatch(&self, interaction: &Interaction) {
        let snapshot: Vec<(ListenerId, Listener)> = self.listeners.borrow().clone();

        for (id, listener) in snapshot {
            if self.is_subscribed(id) {
                listener(interaction);
            }
        }
    }

    /// The number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn is_subscribed(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }
}

impl InteractionSource for InteractionHub {
    fn subscribe(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));

        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// A registration with an [InteractionSource], removed when dropped.
#[must_use = "the listener is unsubscribed as soon as the subscription is dropped"]
pub struct Subscription {
    source: Rc<dyn InteractionSource>,
    id: ListenerId,
}

impl Subscription {
    /// Register `listener` with `source`.
    pub fn new(source: Rc<dyn InteractionSource>, listener: Listener) -> Self {
        let id = source.subscribe(listener);

        Self { source, id }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.source.unsubscribe(self.id);
    }
}

/// Watches for interactions outside the widget rooted at `root`.
///
/// Without a source the monitor never fires, which suits hosts that have no
/// page-wide pointer events.
pub struct DismissMonitor {
    root: NodeId,
    source: Option<Rc<dyn InteractionSource>>,
    subscription: Option<Subscription>,
}

impl DismissMonitor {
    /// A monitor for the widget rooted at `root`. It starts inactive.
    pub fn new(root: NodeId, source: Option<Rc<dyn InteractionSource>>) -> Self {
        Self {
            root,
            source,
            subscription: None,
        }
    }

    /// Start calling `on_outside` for every interaction outside the widget.
    ///
    /// Does nothing if the monitor is already active or has no source.
    pub fn activate(&mut self, on_outside: impl Fn() + 'static) {
        if self.subscription.is_some() {
            return;
        }

        let Some(source) = self.source.clone() else {
            return;
        };

        let root = self.root;
        let listener: Listener = Rc::new(move |interaction: &Interaction| {
            if !interaction.is_within(root) {
                on_outside();
            }
        });

        self.subscription = Some(Subscription::new(source, listener));
        tracing::debug!("dismiss monitor for widget {root} subscribed");
    }

    /// Stop listening. Safe to call when inactive.
    pub fn release(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("dismiss monitor for widget {} released", self.root);
        }
    }

    /// Whether the monitor currently holds a subscription.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }
}
