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

//! # Playback state store.
//!
//! Client-side state for a music player front-end.
//!
//! * [`Store`] holds the [`PlaybackState`] (song list, current song, playing
//!   and randomize flags) and notifies registered observers synchronously
//!   after every mutation.
//! * [`format_time`] renders elapsed seconds as `MM:SS` or `HH:MM:SS`.
//!
//! ## Architecture
//!
//! There is no global store. The application's composition root constructs a
//! [`Store`], optionally applies saved preferences with
//! [`Store::apply_config`], and passes cloned handles to the playback engine
//! and UI components. Components that render state register an observer and
//! keep the returned [`Subscription`] for as long as they are interested.
//!
//! ```
//! use playback_store::{Field, Song, Store, format_time};
//!
//! let store: Store = Store::new();
//! let _subscription = store.subscribe_field(Field::Playing, |_, state| {
//!     println!("playing: {}", state.playing);
//! });
//!
//! store.add_song(Song::new(1, "Intro"));
//! store.set_current_song(Some(Song::new(1, "Intro")));
//! store.set_playing(true);
//!
//! assert_eq!(store.songs().len(), 1);
//! assert_eq!(format_time(3605.0), "01:00:05");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod util;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use model::Song;
pub use store::{Field, PlaybackState, StateChange, Store, Subscription};
pub use util::format::{format_duration, format_secs, format_time};
