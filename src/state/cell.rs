//! StateCell - Observable Shared Value
//!
//! A single-threaded value with an ordered list of subscribers. Writing the
//! value notifies every subscriber synchronously, in registration order.
//!
//! ```text
//! select(key) → StateCell::set → subscribers(&value) → Invalidation → Runtime re-render
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
}

/// Shared, observable value
///
/// Clones share the same underlying value and subscriber list.
pub struct StateCell<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + 'static> StateCell<T> {
    /// Create a cell holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Overwrite the value and notify all subscribers
    ///
    /// Subscribers receive a snapshot, so they may call `set` again.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Modify the value in place and notify all subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.get();
        // Collected first so callbacks can subscribe or unsubscribe.
        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in callbacks {
            callback(&snapshot);
        }
    }

    /// Register a callback invoked after every write
    ///
    /// The callback stays registered for as long as the returned
    /// [`Subscription`] lives, or forever once it is detached.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));

        tracing::trace!(subscription = id, "state cell subscribed");

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Whether two cells share the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

/// Handle to a registered subscriber; unsubscribes on drop
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the subscriber registered for the lifetime of the cell
    pub fn detach(mut self) {
        self.unsubscribe.take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Dirty flag shared between a runtime and the cells its tree reads
#[derive(Clone, Debug, Default)]
pub struct Invalidation {
    dirty: Rc<Cell<bool>>,
}

impl Invalidation {
    /// Create a clean flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the tree as needing a re-render
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Whether a re-render is pending
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the flag, returning whether it was set
    pub fn take(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Subscribe this flag to `cell`
    pub fn watch<T: Clone + 'static>(&self, cell: &StateCell<T>) -> Subscription {
        let flag = self.clone();
        cell.subscribe(move |_| flag.invalidate())
    }

    /// Whether both handles share one flag
    pub fn same_as(&self, other: &Invalidation) -> bool {
        Rc::ptr_eq(&self.dirty, &other.dirty)
    }
}

/// Keeps a cell bound to the invalidation flag of the tree it was last rendered in
///
/// Components call [`RenderBinding::bind`] on every render; only the first
/// render in a given tree subscribes.
#[derive(Debug, Default)]
pub struct RenderBinding {
    current: RefCell<Option<(Invalidation, Subscription)>>,
}

impl RenderBinding {
    /// Create an unbound binding
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `cell` to `invalidation`, replacing any binding to another tree
    pub fn bind<T: Clone + 'static>(&self, cell: &StateCell<T>, invalidation: &Invalidation) {
        let mut current = self.current.borrow_mut();
        if matches!(&*current, Some((bound, _)) if bound.same_as(invalidation)) {
            return;
        }
        *current = Some((invalidation.clone(), invalidation.watch(cell)));
    }

    /// Whether the binding currently targets some tree
    pub fn is_bound(&self) -> bool {
        self.current.borrow().is_some()
    }
}
