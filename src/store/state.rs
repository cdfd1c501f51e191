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

//! The playback state shape held by the [`Store`](super::Store).

use crate::model::Song;

/// Playback state for the player front-end.
///
/// A store hands out immutable snapshots of this value; the only way to
/// change the state it holds is through the store's mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState<S = Song> {
    /// Songs in playback and display order.
    pub songs: Vec<S>,
    /// The selected song, if any. Not required to be a member of `songs`.
    pub current_song: Option<S>,
    pub playing: bool,
    /// Whether next-track selection should be randomized.
    pub randomize: bool,
}

impl<S> Default for PlaybackState<S> {
    fn default() -> Self {
        Self {
            songs: Vec::new(),
            current_song: None,
            playing: false,
            randomize: false,
        }
    }
}
