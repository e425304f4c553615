//! Single-threaded observable with drop-scoped subscriptions.
//!
//! A [`Subscription`] removes its callback when dropped, so a subscriber's
//! lifetime is tied to whatever owns the guard. Callbacks may drop
//! subscriptions or subscribe new ones while an emit is in progress; new
//! subscribers first see the next emit. A callback may also emit again: the
//! nested emit reaches only subscribers added during the outer one, and
//! drops recorded at any depth hold until the outermost emit finishes.

#[cfg(test)]
#[path = "observable_test.rs"]
mod tests;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Registry<T> {
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    depth: usize,
    dropped: Vec<u64>,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        if self.depth > 0 && self.subscribers.len() == before {
            self.dropped.push(id);
        }
    }
}

pub struct Observable<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Observable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                subscribers: Vec::new(),
                depth: 0,
                dropped: Vec::new(),
            })),
        }
    }

    /// Register `callback`; it stays registered until the returned guard drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.push((id, Box::new(callback)));
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Deliver `value` to every live subscriber in subscription order.
    pub fn emit(&self, value: &T) {
        let mut current = {
            let mut registry = self.registry.borrow_mut();
            registry.depth += 1;
            std::mem::take(&mut registry.subscribers)
        };

        for (id, callback) in &mut current {
            let dropped = self.registry.borrow().dropped.contains(id);
            if !dropped {
                callback(value);
            }
        }

        let mut registry = self.registry.borrow_mut();
        registry.depth -= 1;
        current.retain(|(id, _)| !registry.dropped.contains(id));
        if registry.depth == 0 {
            registry.dropped.clear();
        }
        let added = std::mem::take(&mut registry.subscribers);
        registry.subscribers = current;
        registry.subscribers.extend(added);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

impl<T: 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard returned by [`Observable::subscribe`].
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe now rather than at drop.
    pub fn cancel(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}
