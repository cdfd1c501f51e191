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

//! Change notifications published by the store.

/// A field of the playback state, used to subscribe to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Songs,
    CurrentSong,
    Playing,
    Randomize,
}

/// Describes a mutation that has been fully applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// The song list was replaced and now holds `len` songs.
    SongsReplaced { len: usize },
    /// A song was appended at `index`.
    SongAdded { index: usize },
    CurrentSongChanged,
    PlayingChanged(bool),
    RandomizeChanged(bool),
}

impl StateChange {
    /// The field this change touched.
    pub fn field(&self) -> Field {
        match self {
            StateChange::SongsReplaced { .. } | StateChange::SongAdded { .. } => Field::Songs,
            StateChange::CurrentSongChanged => Field::CurrentSong,
            StateChange::PlayingChanged(_) => Field::Playing,
            StateChange::RandomizeChanged(_) => Field::Randomize,
        }
    }
}
