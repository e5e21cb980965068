// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: category filtering and entry activation.
//!
//! The filter decides which entries are visible; the visible set feeds both
//! the gallery collection strategy and the binder's re-bind pass, so the
//! list a lightbox session opens over always matches what is on screen.

use crate::catalog::GalleryEntry;
use iced::{
    mouse,
    widget::{button, container, image, mouse_area, Column, Row, Text},
    Element, Length,
};

const GRID_COLUMNS: usize = 3;

/// Visibility filter over gallery entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Category(String),
}

impl GalleryFilter {
    /// Returns `true` if the entry is visible under this filter.
    pub fn matches(&self, entry: &GalleryEntry) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => entry.category == *category,
        }
    }

    /// Returns `true` if this filter hides anything (not `All`).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

/// Messages from the filter buttons and the grid.
#[derive(Debug, Clone)]
pub enum Message {
    FilterPressed(GalleryFilter),
    EntryPressed(usize),
}

/// Side effects the application should perform after a gallery update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The visible set changed; bindings must be refreshed.
    Rebind,
    /// A visible entry was activated; resolve it through the binder.
    Activated { entry: usize },
}

/// Gallery state: the active filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    filter: GalleryFilter,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    /// Indices of the entries visible under the active filter.
    pub fn visible_ids(&self, entries: &[GalleryEntry]) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.filter.matches(entry))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::FilterPressed(filter) => {
                self.filter = filter;
                Effect::Rebind
            }
            Message::EntryPressed(entry) => Effect::Activated { entry },
        }
    }

    pub fn view<'a>(
        &'a self,
        entries: &'a [GalleryEntry],
        categories: &'a [String],
    ) -> Element<'a, Message> {
        let mut filters = Row::new()
            .spacing(8)
            .push(self.filter_button("All", GalleryFilter::All));
        for category in categories {
            filters = filters.push(
                self.filter_button(category, GalleryFilter::Category(category.clone())),
            );
        }

        let mut grid = Column::new().spacing(12);
        let mut row = Row::new().spacing(12);
        let mut in_row = 0;
        for (id, entry) in entries.iter().enumerate() {
            if !self.filter.matches(entry) {
                continue;
            }
            row = row.push(entry_card(id, entry));
            in_row += 1;
            if in_row == GRID_COLUMNS {
                grid = grid.push(row);
                row = Row::new().spacing(12);
                in_row = 0;
            }
        }
        if in_row > 0 {
            grid = grid.push(row);
        }

        Column::new()
            .spacing(16)
            .push(Text::new("Gallery").size(24))
            .push(filters)
            .push(grid)
            .into()
    }

    fn filter_button<'a>(
        &self,
        label: &'a str,
        filter: GalleryFilter,
    ) -> Element<'a, Message> {
        let style = if self.filter == filter {
            button::primary
        } else {
            button::secondary
        };
        button(Text::new(label))
            .style(style)
            .on_press(Message::FilterPressed(filter))
            .padding([6, 12])
            .into()
    }
}

fn entry_card<'a>(id: usize, entry: &'a GalleryEntry) -> Element<'a, Message> {
    let mut card = Column::new().spacing(4);
    if let Some(src) = entry.image.resolve() {
        card = card.push(image(image::Handle::from_path(src)).width(Length::Fixed(200.0)));
    }
    if !entry.title.is_empty() {
        card = card.push(Text::new(entry.title.as_str()).size(14));
    }
    if !entry.description.is_empty() {
        card = card.push(Text::new(entry.description.as_str()).size(12));
    }

    mouse_area(container(card).style(container::bordered_box).padding(8))
        .on_press(Message::EntryPressed(id))
        .interaction(mouse::Interaction::Pointer)
        .into()
}
