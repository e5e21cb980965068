// SPDX-License-Identifier: MPL-2.0
//! Media descriptors and the ordered lists the carousels and lightbox
//! navigate over.
//!
//! A [`MediaList`] is always built fresh from the catalog at the moment a
//! widget needs it; it is never cached across filter changes, so the list a
//! viewer session navigates is exactly what was on screen when it opened.

pub mod collector;

/// Kind of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One image or video descriptor with its caption text.
///
/// Immutable once constructed. The `src` identifies the item within its
/// owning list for lookup purposes; it is not globally unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    pub title: String,
    pub description: String,
}

impl MediaItem {
    pub fn new(
        kind: MediaKind,
        src: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            src: src.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ordered collection of media items shown by one carousel or one lightbox
/// session. Empty lists are valid and disable navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaList {
    items: Vec<MediaItem>,
}

impl MediaList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }

    /// Index of the first item whose `src` matches, if any.
    pub fn position_of_src(&self, src: &str) -> Option<usize> {
        self.items.iter().position(|item| item.src == src)
    }

    /// Sources of every video item in the list.
    pub fn video_sources(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|item| item.kind == MediaKind::Video)
            .map(|item| item.src.as_str())
    }
}

impl From<Vec<MediaItem>> for MediaList {
    fn from(items: Vec<MediaItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<MediaItem> for MediaList {
    fn from_iter<I: IntoIterator<Item = MediaItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> MediaList {
        MediaList::from(vec![
            MediaItem::new(MediaKind::Image, "a.jpg", "A", ""),
            MediaItem::new(MediaKind::Video, "b.mp4", "B", ""),
            MediaItem::new(MediaKind::Image, "c.jpg", "C", ""),
        ])
    }

    #[test]
    fn empty_list_is_valid() {
        let list = MediaList::new();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
        assert_eq!(list.position_of_src("a.jpg"), None);
    }

    #[test]
    fn position_of_src_finds_first_match() {
        let list = sample_list();
        assert_eq!(list.position_of_src("b.mp4"), Some(1));
        assert_eq!(list.position_of_src("missing.jpg"), None);
    }

    #[test]
    fn video_sources_lists_only_videos() {
        let list = sample_list();
        let videos: Vec<&str> = list.video_sources().collect();
        assert_eq!(videos, vec!["b.mp4"]);
    }
}
