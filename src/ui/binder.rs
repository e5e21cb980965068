// SPDX-License-Identifier: MPL-2.0
//! Explicit table wiring activation triggers to lightbox open requests.
//!
//! Each eligible surface (a product's carousel, a gallery entry) holds at
//! most one binding; re-binding after a filter change must not attach a
//! second one to the same trigger. Activation re-collects the media list
//! fresh every time, so a gallery session opened after filtering sees
//! exactly the entries that are visible right now.

use crate::catalog::Catalog;
use crate::media::collector;
use crate::media::MediaList;
use crate::ui::gallery::GalleryFilter;

/// An activatable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    ProductCarousel(usize),
    GalleryEntry(usize),
}

/// A resolved activation, ready for `lightbox::State::open`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenRequest {
    pub items: MediaList,
    pub start_src: String,
}

/// Attached bindings, in attachment order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binder {
    bound: Vec<Trigger>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a binding unless the trigger already holds one. Returns
    /// whether a new binding was attached.
    pub fn bind(&mut self, trigger: Trigger) -> bool {
        if self.bound.contains(&trigger) {
            return false;
        }
        self.bound.push(trigger);
        true
    }

    /// Binds every product carousel once, at startup.
    pub fn bind_products(&mut self, catalog: &Catalog) {
        for product in 0..catalog.products.len() {
            self.bind(Trigger::ProductCarousel(product));
        }
    }

    /// Binds the currently visible gallery entries. Called once at startup
    /// and again after every filter activation; already-bound entries keep
    /// their single binding.
    pub fn rebind_gallery<I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for entry in visible {
            self.bind(Trigger::GalleryEntry(entry));
        }
    }

    pub fn is_bound(&self, trigger: Trigger) -> bool {
        self.bound.contains(&trigger)
    }

    pub fn binding_count(&self) -> usize {
        self.bound.len()
    }

    /// Resolves a product carousel activation. The list is collected fresh
    /// from the product's slides; an empty result yields no request.
    pub fn activate_product(
        &self,
        product: usize,
        clicked_src: &str,
        catalog: &Catalog,
    ) -> Option<OpenRequest> {
        if !self.is_bound(Trigger::ProductCarousel(product)) {
            return None;
        }
        let items = collector::collect_product(catalog.products.get(product)?);
        if items.is_empty() || clicked_src.is_empty() {
            return None;
        }
        Some(OpenRequest {
            items,
            start_src: clicked_src.to_string(),
        })
    }

    /// Resolves a gallery entry activation. The list is collected fresh
    /// from the entries visible under the active filter; a hidden or
    /// unresolvable entry yields no request.
    pub fn activate_gallery(
        &self,
        entry: usize,
        catalog: &Catalog,
        filter: &GalleryFilter,
    ) -> Option<OpenRequest> {
        if !self.is_bound(Trigger::GalleryEntry(entry)) {
            return None;
        }
        let clicked = catalog.gallery.get(entry)?;
        if !filter.matches(clicked) {
            return None;
        }
        let start_src = clicked.image.resolve()?.to_string();
        let items = collector::collect_visible_gallery(&catalog.gallery, filter);
        Some(OpenRequest { items, start_src })
    }
}
