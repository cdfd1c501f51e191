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

//! Domain models.
//!
//! The store treats songs as opaque values and is generic over the song type,
//! [`Song`] is the track entity used when a collaborator has no richer type of
//! its own.

use serde::{Deserialize, Serialize};

use crate::util::format::format_secs;

/// A playable track and the metadata shown alongside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length of the track in whole seconds.
    pub duration: u64,
    pub path: String,
}

impl Song {
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// The track length as a clock string, for example `"03:41"`.
    pub fn formatted_duration(&self) -> String {
        format_secs(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_song_has_empty_metadata() {
        let song = Song::new(7, "Blue in Green");
        assert_eq!(song.id, 7);
        assert_eq!(song.title, "Blue in Green");
        assert!(song.artist.is_empty());
        assert_eq!(song.duration, 0);
    }

    #[test]
    fn formatted_duration_uses_clock_format() {
        let song = Song {
            duration: 221,
            ..Song::new(1, "So What")
        };
        assert_eq!(song.formatted_duration(), "03:41");

        let long = Song {
            duration: 3725,
            ..Song::new(2, "Bitches Brew")
        };
        assert_eq!(long.formatted_duration(), "01:02:05");
    }
}
