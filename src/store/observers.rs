// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Observer registry and detach handles.

use std::{
    fmt,
    sync::{Arc, Mutex, Weak},
};

use log::trace;

use super::{Field, PlaybackState, StateChange, lock};

pub(crate) type Observer<S> = Arc<dyn Fn(&StateChange, &PlaybackState<S>) + Send + Sync>;

struct Entry<S> {
    id: u64,
    /// `None` observes every field.
    field: Option<Field>,
    observer: Observer<S>,
}

/// Registered observers, kept in registration order.
pub(crate) struct Observers<S> {
    next_id: u64,
    entries: Vec<Entry<S>>,
}

impl<S> Observers<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, field: Option<Field>, observer: Observer<S>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            field,
            observer,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Observers to notify for `change`, in registration order.
    pub(crate) fn interested(&self, change: &StateChange) -> Vec<Observer<S>> {
        let field = change.field();
        self.entries
            .iter()
            .filter(|entry| entry.field.is_none_or(|f| f == field))
            .map(|entry| Arc::clone(&entry.observer))
            .collect()
    }
}

/// Handle to a registered observer.
///
/// The observer stays registered until [`Subscription::unsubscribe`] is
/// called or the handle is dropped.
#[must_use = "dropping a Subscription detaches its observer"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub(crate) fn new<S: 'static>(observers: Weak<Mutex<Observers<S>>>, id: u64) -> Self {
        Self {
            detach: Some(Box::new(move || {
                // The store may already be gone
                if let Some(observers) = observers.upgrade() {
                    if lock(&observers).remove(id) {
                        trace!("Observer {id} detached");
                    }
                }
            })),
        }
    }

    /// Detaches the observer. Notifications already in flight may still
    /// reach it.
    pub fn unsubscribe(mut self) {
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

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}
