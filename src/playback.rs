// SPDX-License-Identifier: MPL-2.0
//! Bookkeeping for which video sources are currently playing.
//!
//! The showcase never decodes video itself; this registry is the single
//! source of truth the widgets consult when rendering a playback surface.
//! Slide changes pause a carousel's own videos, and opening or closing the
//! lightbox pauses everything, matching how the published site stopped every
//! `<video>` on those transitions.

use std::collections::BTreeSet;

/// Play/pause state per video source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackRegistry {
    playing: BTreeSet<String>,
}

impl PlaybackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that playback of `src` started.
    pub fn mark_playing(&mut self, src: &str) {
        self.playing.insert(src.to_string());
    }

    /// Pauses `src`. Pausing an unknown or already-paused source is a no-op.
    pub fn pause(&mut self, src: &str) {
        self.playing.remove(src);
    }

    /// Toggles playback of `src`.
    pub fn toggle(&mut self, src: &str) {
        if !self.playing.remove(src) {
            self.playing.insert(src.to_string());
        }
    }

    /// Pauses a scoped set of sources, e.g. one carousel's own videos.
    pub fn pause_many<I, S>(&mut self, sources: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for src in sources {
            self.playing.remove(src.as_ref());
        }
    }

    /// Pauses every known source.
    pub fn pause_all(&mut self) {
        self.playing.clear();
    }

    pub fn is_playing(&self, src: &str) -> bool {
        self.playing.contains(src)
    }

    pub fn playing_count(&self) -> usize {
        self.playing.len()
    }
}
