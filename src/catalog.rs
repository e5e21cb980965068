// SPDX-License-Identifier: MPL-2.0
//! The authored content model: products with ordered media slides and a
//! gallery of captioned entries, loaded from a TOML manifest.
//!
//! Source descriptors carry an eager `src` plus an optional deferred
//! `data-src`, and videos additionally carry nested fallback sources. This
//! mirrors how the published site layers its attributes, so a manifest can
//! defer heavy media without losing it from the showcase. Resolution always
//! prefers the eager source, then the deferred one, then (for videos) the
//! nested entries, and treats empty strings as absent.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete showcase manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub gallery: Vec<GalleryEntry>,
}

/// One product card: shared caption text plus an ordered list of slides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// One carousel slide: either an image or a video descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Slide {
    Image(ImageSource),
    Video(VideoSource),
}

/// Image source with an optional deferred-load fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(
        default,
        rename = "data-src",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_src: Option<String>,
}

/// Video source with deferred-load and nested-source fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(
        default,
        rename = "data-src",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_src: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<NestedSource>,
}

/// A nested fallback source inside a video descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NestedSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(
        default,
        rename = "data-src",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_src: Option<String>,
}

/// One gallery grid entry with its own caption text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryEntry {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: ImageSource,
}

fn non_empty(source: &Option<String>) -> Option<&str> {
    source.as_deref().filter(|s| !s.is_empty())
}

impl ImageSource {
    /// Resolves to the eager source, falling back to the deferred one.
    pub fn resolve(&self) -> Option<&str> {
        non_empty(&self.src).or_else(|| non_empty(&self.data_src))
    }
}

impl VideoSource {
    /// Resolves to the eager source, then the deferred one, then the first
    /// resolvable nested source.
    pub fn resolve(&self) -> Option<&str> {
        non_empty(&self.src)
            .or_else(|| non_empty(&self.data_src))
            .or_else(|| self.sources.iter().find_map(NestedSource::resolve))
    }
}

impl NestedSource {
    pub fn resolve(&self) -> Option<&str> {
        non_empty(&self.src).or_else(|| non_empty(&self.data_src))
    }
}

impl Catalog {
    /// Distinct gallery categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for entry in &self.gallery {
            if !entry.category.is_empty() && !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }
}

/// Loads a catalog manifest from disk.
pub fn load(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)?;
    let catalog = toml::from_str(&contents)
        .map_err(|err| crate::error::Error::Catalog(err.to_string()))?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const SAMPLE_MANIFEST: &str = r#"
[[products]]
title = "Natural Pebbles"
description = "Hand-sorted river pebbles."

[[products.slides]]
image = { src = "images/natural-1.jpg" }

[[products.slides]]
image = { "data-src" = "images/natural-2.jpg" }

# no eager or deferred source on the video element itself
[[products.slides]]
video = { sources = [{ "data-src" = "videos/natural.mp4" }] }

[[gallery]]
category = "stone"
title = "Polished finish"
description = "Close-up of the polished range."
image = { src = "images/polished.jpg" }

[[gallery]]
category = "sand"
title = "River sand"
image = { "data-src" = "images/sand.jpg" }
"#;

    #[test]
    fn parses_sample_manifest() {
        let catalog: Catalog = toml::from_str(SAMPLE_MANIFEST).expect("parse failed");
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products[0].slides.len(), 3);
        assert_eq!(catalog.gallery.len(), 2);
    }

    #[test]
    fn image_resolution_prefers_eager_source() {
        let source = ImageSource {
            src: Some("eager.jpg".into()),
            data_src: Some("deferred.jpg".into()),
        };
        assert_eq!(source.resolve(), Some("eager.jpg"));
    }

    #[test]
    fn image_resolution_falls_back_to_deferred_source() {
        let source = ImageSource {
            src: None,
            data_src: Some("deferred.jpg".into()),
        };
        assert_eq!(source.resolve(), Some("deferred.jpg"));
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let source = ImageSource {
            src: Some(String::new()),
            data_src: Some("deferred.jpg".into()),
        };
        assert_eq!(source.resolve(), Some("deferred.jpg"));
    }

    #[test]
    fn video_resolution_falls_back_to_nested_sources() {
        let source = VideoSource {
            src: None,
            data_src: None,
            sources: vec![
                NestedSource {
                    src: None,
                    data_src: None,
                },
                NestedSource {
                    src: Some("videos/clip.mp4".into()),
                    data_src: None,
                },
            ],
        };
        assert_eq!(source.resolve(), Some("videos/clip.mp4"));
    }

    #[test]
    fn unresolvable_video_yields_none() {
        let source = VideoSource::default();
        assert_eq!(source.resolve(), None);
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let catalog: Catalog = toml::from_str(
            r#"
[[gallery]]
category = "stone"
image = { src = "a.jpg" }
[[gallery]]
category = "sand"
image = { src = "b.jpg" }
[[gallery]]
category = "stone"
image = { src = "c.jpg" }
"#,
        )
        .expect("parse failed");
        assert_eq!(catalog.categories(), vec!["stone", "sand"]);
    }

    #[test]
    fn load_reads_manifest_from_disk() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        let mut file = fs::File::create(&path).expect("failed to create manifest");
        file.write_all(SAMPLE_MANIFEST.as_bytes())
            .expect("failed to write manifest");

        let catalog = load(&path).expect("load failed");
        assert_eq!(catalog.products[0].title, "Natural Pebbles");
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
