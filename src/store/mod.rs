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

//! Observable playback state container.
//!
//! A [`Store`] holds exactly one [`PlaybackState`] and is the only way to
//! change it. Collaborators such as the playback engine or UI components
//! receive a cloned store handle from the composition root and call the
//! mutation operations; observers registered with [`Store::subscribe`],
//! [`Store::subscribe_field`] or [`Store::subscribe_channel`] are notified
//! synchronously once each mutation has been applied.
//!
//! # Ordering
//!
//! Mutations are serialized by a single writer lock that is held while the
//! change is applied and every interested observer has been called. An
//! observer therefore always sees a complete snapshot, and mutation `n` is
//! fully observed before mutation `n + 1` starts.
//!
//! Observers may read the store and may mutate it. A mutation issued from an
//! observer is queued and applied once the current notification round has
//! finished, before the outer mutation call returns. An observer that panics
//! is logged and skipped, the remaining observers are still notified.

mod change;
mod observers;
mod state;

pub use change::{Field, StateChange};
pub use observers::Subscription;
pub use state::PlaybackState;

use std::{
    collections::VecDeque,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex, MutexGuard, PoisonError, mpsc::Sender},
    thread::{self, ThreadId},
};

use log::{debug, trace, warn};

use crate::{config::AppConfig, model::Song};
use observers::{Observer, Observers};

/// Locks a mutex, recovering the guard if a panicking observer poisoned it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

type Mutation<S> = Box<dyn FnOnce(&mut PlaybackState<S>) -> StateChange + Send>;

struct Inner<S> {
    writer: Mutex<()>,
    /// Thread holding `writer`, if any.
    writing: Mutex<Option<ThreadId>>,
    /// Mutations issued by observers while their thread holds `writer`.
    pending: Mutex<VecDeque<Mutation<S>>>,
    state: Mutex<Arc<PlaybackState<S>>>,
    observers: Arc<Mutex<Observers<S>>>,
}

/// Marks the current thread as the writer until dropped.
struct WritingGuard<'a, S> {
    inner: &'a Inner<S>,
}

impl<'a, S> WritingGuard<'a, S> {
    fn enter(inner: &'a Inner<S>, thread: ThreadId) -> Self {
        *lock(&inner.writing) = Some(thread);
        Self { inner }
    }
}

impl<S> Drop for WritingGuard<'_, S> {
    fn drop(&mut self) {
        *lock(&self.inner.writing) = None;
        lock(&self.inner.pending).clear();
    }
}

/// Handle to the playback state container.
///
/// Cloning a store is cheap and every clone refers to the same state.
pub struct Store<S = Song> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> Default for Store<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Store<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates a store holding an empty, stopped playback state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                writer: Mutex::new(()),
                writing: Mutex::new(None),
                pending: Mutex::new(VecDeque::new()),
                state: Mutex::new(Arc::new(PlaybackState::default())),
                observers: Arc::new(Mutex::new(Observers::new())),
            }),
        }
    }

    /// Replaces the song list. The current song is left untouched.
    pub fn set_songs(&self, songs: Vec<S>) {
        self.mutate(move |state| {
            state.songs = songs;
            StateChange::SongsReplaced {
                len: state.songs.len(),
            }
        });
    }

    /// Appends a song to the end of the song list.
    pub fn add_song(&self, song: S) {
        self.mutate(move |state| {
            state.songs.push(song);
            StateChange::SongAdded {
                index: state.songs.len() - 1,
            }
        });
    }

    /// Selects a song, or clears the selection with `None`.
    ///
    /// The song is not required to be in the song list.
    pub fn set_current_song(&self, song: Option<S>) {
        self.mutate(move |state| {
            state.current_song = song;
            StateChange::CurrentSongChanged
        });
    }

    pub fn set_playing(&self, playing: bool) {
        self.mutate(move |state| {
            state.playing = playing;
            StateChange::PlayingChanged(playing)
        });
    }

    pub fn set_randomize(&self, randomize: bool) {
        self.mutate(move |state| {
            state.randomize = randomize;
            StateChange::RandomizeChanged(randomize)
        });
    }

    /// Applies saved preferences through the regular mutation operations.
    pub fn apply_config(&self, cfg: &AppConfig) {
        self.set_randomize(cfg.randomize);
    }

    /// A snapshot of the current state.
    ///
    /// Snapshots are immutable and unaffected by later mutations.
    pub fn state(&self) -> Arc<PlaybackState<S>> {
        Arc::clone(&lock(&self.inner.state))
    }

    pub fn songs(&self) -> Vec<S> {
        self.state().songs.clone()
    }

    pub fn current_song(&self) -> Option<S> {
        self.state().current_song.clone()
    }

    pub fn playing(&self) -> bool {
        self.state().playing
    }

    pub fn randomize(&self) -> bool {
        self.state().randomize
    }

    /// Registers an observer of every change to the state.
    ///
    /// The observer receives the change and the state as it was right after
    /// that change was applied.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&StateChange, &PlaybackState<S>) + Send + Sync + 'static,
    {
        self.register(None, Arc::new(observer))
    }

    /// Registers an observer of changes to a single field.
    pub fn subscribe_field<F>(&self, field: Field, observer: F) -> Subscription
    where
        F: Fn(&StateChange, &PlaybackState<S>) + Send + Sync + 'static,
    {
        self.register(Some(field), Arc::new(observer))
    }

    /// Forwards every change into a channel.
    ///
    /// Sends happen synchronously during notification, so the receiver sees
    /// changes in mutation order.
    pub fn subscribe_channel(&self, sender: Sender<StateChange>) -> Subscription {
        self.subscribe(move |change, _| {
            if sender.send(*change).is_err() {
                warn!("Dropped {change:?}, channel receiver disconnected");
            }
        })
    }

    /// The number of registered observers.
    pub fn observer_count(&self) -> usize {
        lock(&self.inner.observers).len()
    }

    fn register(&self, field: Option<Field>, observer: Observer<S>) -> Subscription {
        let id = lock(&self.inner.observers).add(field, observer);
        trace!("Observer {id} attached for {field:?}");

        Subscription::new(Arc::downgrade(&self.inner.observers), id)
    }

    fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut PlaybackState<S>) -> StateChange + Send + 'static,
    {
        let current = thread::current().id();
        if *lock(&self.inner.writing) == Some(current) {
            trace!("Queued mutation issued during notification");
            lock(&self.inner.pending).push_back(Box::new(apply));
            return;
        }

        let _writer = lock(&self.inner.writer);
        let _writing = WritingGuard::enter(&self.inner, current);

        let mut next: Mutation<S> = Box::new(apply);
        loop {
            self.apply_and_notify(next);

            match lock(&self.inner.pending).pop_front() {
                Some(mutation) => next = mutation,
                None => break,
            }
        }
    }

    fn apply_and_notify(&self, apply: Mutation<S>) {
        let (change, snapshot) = {
            let mut state = lock(&self.inner.state);
            // Copies the state only while an older snapshot is still held
            let change = apply(Arc::make_mut(&mut state));
            (change, Arc::clone(&state))
        };

        debug!("Applied {change:?}");

        let observers = lock(&self.inner.observers).interested(&change);
        for observer in observers {
            let notified = panic::catch_unwind(AssertUnwindSafe(|| observer(&change, &snapshot)));
            if notified.is_err() {
                warn!("Observer panicked while handling {change:?}");
            }
        }
    }
}
