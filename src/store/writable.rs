use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

pub(super) struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
    // Deliveries not yet made, in order. Writes from inside a callback land
    // here and are drained by the outermost `replace`.
    pending: RefCell<VecDeque<(u64, Callback<T>, T)>>,
    draining: Cell<bool>,
}

impl<T: Clone + 'static> Inner<T> {
    pub(super) fn new(value: T) -> Rc<Self> {
        Rc::new(Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            pending: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        })
    }

    fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value` and notify every current subscriber.
    pub(super) fn replace(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.enqueue();
        if !self.draining.replace(true) {
            self.drain();
            self.draining.set(false);
        }
    }

    fn enqueue(&self) {
        let value = self.get();
        let subscribers = self.subscribers.borrow();
        let mut pending = self.pending.borrow_mut();
        for (id, cb) in subscribers.iter() {
            pending.push_back((*id, cb.clone(), value.clone()));
        }
    }

    fn drain(&self) {
        loop {
            // The queue borrow ends before the callback runs.
            let next = self.pending.borrow_mut().pop_front();
            let Some((id, cb, value)) = next else {
                break;
            };
            if !self.subscribers.borrow().iter().any(|(sid, _)| *sid == id) {
                continue;
            }
            if let Ok(mut f) = cb.try_borrow_mut() {
                (*f)(&value);
            }
        }
    }

    fn subscribe<F>(self: &Rc<Self>, f: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let cb: Callback<T> = Rc::new(RefCell::new(f));
        let current = self.get();
        (*cb.borrow_mut())(&current);
        self.subscribers.borrow_mut().push((id, cb));

        let weak: Weak<Self> = Rc::downgrade(self);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
            }
        })
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// Guard returned by `subscribe`. Dropping it removes the callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Remove the callback now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Keep the callback registered for as long as the cell lives.
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// A mutable, observable value.
///
/// Cloning a `Writable` yields another handle to the same cell.
pub struct Writable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Inner::new(value),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn set(&self, value: T) {
        self.inner.replace(value);
    }

    /// Replace the value with `f(current)`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.inner.replace(next);
    }

    /// Register `f`. It is called once right away with the current value and
    /// then after every `set`/`update`, in subscription order.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        self.inner.subscribe(f)
    }

    /// Read-only view of this cell.
    pub fn readable(&self) -> Readable<T> {
        Readable {
            inner: self.inner.clone(),
            _sources: Rc::new(Vec::new()),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Writable").field(&self.get()).finish()
    }
}

/// A read-only observable value, either a view of a `Writable` or the
/// output of `derived2`.
pub struct Readable<T> {
    inner: Rc<Inner<T>>,
    // Subscriptions to upstream cells that keep a derived value fresh.
    _sources: Rc<Vec<Subscription>>,
}

impl<T> Clone for Readable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _sources: self._sources.clone(),
        }
    }
}

impl<T: Clone + 'static> Readable<T> {
    pub(super) fn from_parts(inner: Rc<Inner<T>>, sources: Vec<Subscription>) -> Self {
        Self {
            inner,
            _sources: Rc::new(sources),
        }
    }

    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        self.inner.subscribe(f)
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Readable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Readable").field(&self.get()).finish()
    }
}
