// SPDX-License-Identifier: MPL-2.0
//! UI components: the per-product carousels, the gallery grid, the shared
//! lightbox, and the binder wiring activations between them.

pub mod binder;
pub mod carousel;
pub mod gallery;
pub mod lightbox;
