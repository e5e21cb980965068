// SPDX-License-Identifier: MPL-2.0
//! Builds media lists from catalog regions.
//!
//! Two deliberately separate strategies:
//!
//! - [`collect_product`] reads the caption once from the owning product and
//!   copies it onto every item, the way a product card shares one title
//!   across its whole carousel.
//! - [`collect_visible_gallery`] reads captions per entry and only includes
//!   entries visible under the active filter.
//!
//! An entry whose source cannot be resolved is dropped; it never enters a
//! list. Both functions are pure reads of the catalog.

use crate::catalog::{GalleryEntry, Product, Slide};
use crate::media::{MediaItem, MediaKind, MediaList};
use crate::ui::gallery::GalleryFilter;

/// Collects a product's slides into a media list with shared captions.
pub fn collect_product(product: &Product) -> MediaList {
    product
        .slides
        .iter()
        .filter_map(|slide| {
            let (kind, src) = match slide {
                Slide::Image(source) => (MediaKind::Image, source.resolve()?),
                Slide::Video(source) => (MediaKind::Video, source.resolve()?),
            };
            Some(MediaItem::new(
                kind,
                src,
                product.title.as_str(),
                product.description.as_str(),
            ))
        })
        .collect()
}

/// Collects the currently visible gallery entries, captions per entry.
pub fn collect_visible_gallery(entries: &[GalleryEntry], filter: &GalleryFilter) -> MediaList {
    entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .filter_map(|entry| {
            let src = entry.image.resolve()?;
            Some(MediaItem::new(
                MediaKind::Image,
                src,
                entry.title.as_str(),
                entry.description.as_str(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageSource, NestedSource, VideoSource};

    fn image(src: &str) -> Slide {
        Slide::Image(ImageSource {
            src: Some(src.to_string()),
            data_src: None,
        })
    }

    fn deferred_image(data_src: &str) -> Slide {
        Slide::Image(ImageSource {
            src: None,
            data_src: Some(data_src.to_string()),
        })
    }

    fn nested_video(nested: &str) -> Slide {
        Slide::Video(VideoSource {
            src: None,
            data_src: None,
            sources: vec![NestedSource {
                src: Some(nested.to_string()),
                data_src: None,
            }],
        })
    }

    fn entry(category: &str, title: &str, src: Option<&str>) -> GalleryEntry {
        GalleryEntry {
            category: category.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            image: ImageSource {
                src: src.map(String::from),
                data_src: None,
            },
        }
    }

    #[test]
    fn product_captions_are_shared_across_items() {
        let product = Product {
            title: "Polished Pebbles".to_string(),
            description: "Tumbled smooth.".to_string(),
            slides: vec![image("p1.jpg"), deferred_image("p2.jpg")],
        };

        let list = collect_product(&product);
        assert_eq!(list.len(), 2);
        for item in list.iter() {
            assert_eq!(item.title, "Polished Pebbles");
            assert_eq!(item.description, "Tumbled smooth.");
        }
        assert_eq!(list.get(1).unwrap().src, "p2.jpg");
    }

    #[test]
    fn unresolvable_slides_are_dropped() {
        let product = Product {
            title: "Mixed".to_string(),
            description: String::new(),
            slides: vec![
                image("keep.jpg"),
                Slide::Image(ImageSource::default()),
                Slide::Video(VideoSource::default()),
                nested_video("clip.mp4"),
            ],
        };

        let list = collect_product(&product);
        let sources: Vec<&str> = list.iter().map(|item| item.src.as_str()).collect();
        assert_eq!(sources, vec!["keep.jpg", "clip.mp4"]);
        assert_eq!(list.get(1).unwrap().kind, MediaKind::Video);
    }

    #[test]
    fn gallery_captions_are_per_entry() {
        let entries = vec![
            entry("stone", "Pebble bed", Some("g1.jpg")),
            entry("sand", "Sand pit", Some("g2.jpg")),
        ];

        let list = collect_visible_gallery(&entries, &GalleryFilter::All);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().title, "Pebble bed");
        assert_eq!(list.get(1).unwrap().title, "Sand pit");
        assert_eq!(list.get(1).unwrap().description, "Sand pit description");
    }

    #[test]
    fn gallery_collection_respects_filter() {
        let entries = vec![
            entry("stone", "One", Some("g1.jpg")),
            entry("sand", "Two", Some("g2.jpg")),
            entry("stone", "Three", Some("g3.jpg")),
        ];

        let filter = GalleryFilter::Category("stone".to_string());
        let list = collect_visible_gallery(&entries, &filter);
        let sources: Vec<&str> = list.iter().map(|item| item.src.as_str()).collect();
        assert_eq!(sources, vec!["g1.jpg", "g3.jpg"]);
    }

    #[test]
    fn gallery_entries_without_source_are_dropped() {
        let entries = vec![
            entry("stone", "One", Some("g1.jpg")),
            entry("stone", "Broken", None),
        ];

        let list = collect_visible_gallery(&entries, &GalleryFilter::All);
        assert_eq!(list.len(), 1);
    }
}
