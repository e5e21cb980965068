// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a desktop product showcase built with the Iced GUI
//! framework.
//!
//! It renders a catalog of products with media carousels, a filterable image
//! gallery, and a single shared lightbox for full-size viewing, driven by a
//! TOML catalog manifest and user preferences.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod media;
pub mod playback;
pub mod ui;
