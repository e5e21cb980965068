// SPDX-License-Identifier: MPL-2.0
//! The single shared modal viewer.
//!
//! One lightbox instance serves every carousel and the gallery. It is
//! constructed once at application start, owned by the `App`, and mutated
//! only through its own methods; widgets hand it a freshly collected media
//! list when they open it and never touch its internals afterwards.
//!
//! Showing a video bumps `video_session` so the playback surface is rebuilt
//! and reloads the swapped source; swapping the source alone would keep
//! stale buffering state.

use crate::media::{MediaKind, MediaList};
use crate::playback::PlaybackRegistry;
use iced::{
    alignment::Vertical,
    widget::{button, center, container, image, mouse_area, Column, Row, Text},
    Color, Element, Length,
};

/// Messages from the lightbox's own controls, the backdrop, and keyboard
/// routing. Every one of them is a no-op while the lightbox is closed.
#[derive(Debug, Clone)]
pub enum Message {
    NextPressed,
    PreviousPressed,
    ClosePressed,
    BackdropPressed,
    /// Press landed on the modal content; shields the backdrop handler.
    ContentPressed,
    VideoToggled,
}

/// Side effects the application should perform after a lightbox transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Pause every known video, not only the opener's.
    PauseAllVideos,
    /// Pause one video, used when navigating away from it.
    PauseVideo { src: String },
    /// Toggle playback of the current video.
    ToggleVideo { src: String },
}

/// What the modal currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage<'a> {
    Image { src: &'a str },
    Video { src: &'a str, session: u64 },
}

/// Lightbox state: `Closed`, or `Open` over a list and index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    items: MediaList,
    current: usize,
    open: bool,
    video_session: u64,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn items(&self) -> &MediaList {
        &self.items
    }

    /// Monotonic counter identifying the current video playback surface.
    pub fn video_session(&self) -> u64 {
        self.video_session
    }

    /// Opens the modal over `items`, starting at the first item whose source
    /// equals `start_src` (index 0 when absent). An empty list is a no-op
    /// and the state stays closed.
    pub fn open(&mut self, items: MediaList, start_src: &str) -> Effect {
        if items.is_empty() {
            return Effect::None;
        }
        self.current = items.position_of_src(start_src).unwrap_or(0);
        self.items = items;
        self.open = true;
        if self.current_kind() == Some(MediaKind::Video) {
            self.video_session += 1;
        }
        Effect::PauseAllVideos
    }

    /// Closes the modal. Pauses everything again so a mid-play lightbox
    /// video does not keep running invisibly.
    pub fn close(&mut self) -> Effect {
        if !self.open {
            return Effect::None;
        }
        self.open = false;
        Effect::PauseAllVideos
    }

    pub fn next(&mut self) -> Effect {
        self.navigate(1)
    }

    pub fn prev(&mut self) -> Effect {
        self.navigate(self.items.len().saturating_sub(1))
    }

    fn navigate(&mut self, forward_by: usize) -> Effect {
        if !self.open || self.items.is_empty() {
            return Effect::None;
        }
        let leaving_video = match self.items.get(self.current) {
            Some(item) if item.kind == MediaKind::Video => Some(item.src.clone()),
            _ => None,
        };
        self.current = (self.current + forward_by) % self.items.len();
        if self.current_kind() == Some(MediaKind::Video) {
            self.video_session += 1;
        }
        // The departed video's surface is torn down; its playback state must
        // follow, even when another video takes its place.
        let arrived = self.items.get(self.current).map(|item| item.src.as_str());
        match leaving_video {
            Some(src) if arrived != Some(src.as_str()) => Effect::PauseVideo { src },
            _ => Effect::None,
        }
    }

    fn current_kind(&self) -> Option<MediaKind> {
        self.items.get(self.current).map(|item| item.kind)
    }

    /// The render rule for the current item; `None` while closed.
    pub fn stage(&self) -> Option<Stage<'_>> {
        if !self.open {
            return None;
        }
        let item = self.items.get(self.current)?;
        Some(match item.kind {
            MediaKind::Image => Stage::Image { src: &item.src },
            MediaKind::Video => Stage::Video {
                src: &item.src,
                session: self.video_session,
            },
        })
    }

    pub fn update(&mut self, message: Message) -> Effect {
        if !self.open {
            return Effect::None;
        }
        match message {
            Message::NextPressed => self.next(),
            Message::PreviousPressed => self.prev(),
            Message::ClosePressed | Message::BackdropPressed => self.close(),
            Message::ContentPressed => Effect::None,
            Message::VideoToggled => match self.items.get(self.current) {
                Some(item) if item.kind == MediaKind::Video => Effect::ToggleVideo {
                    src: item.src.clone(),
                },
                _ => Effect::None,
            },
        }
    }

    /// The modal overlay. Only meaningful while open; renders nothing
    /// otherwise.
    pub fn view<'a>(&'a self, playback: &PlaybackRegistry) -> Element<'a, Message> {
        let Some(item) = self.items.get(self.current).filter(|_| self.open) else {
            return Column::new().into();
        };

        let surface: Element<'a, Message> = match item.kind {
            MediaKind::Image => image(image::Handle::from_path(item.src.as_str()))
                .width(Length::Fixed(640.0))
                .into(),
            MediaKind::Video => {
                let label = if playback.is_playing(&item.src) {
                    "Pause"
                } else {
                    "Play"
                };
                container(
                    Column::new()
                        .spacing(8)
                        .push(Text::new("Video").size(14))
                        .push(Text::new(item.src.as_str()).size(12))
                        .push(button(Text::new(label)).on_press(Message::VideoToggled)),
                )
                .style(container::bordered_box)
                .padding(24)
                .width(Length::Fixed(640.0))
                .into()
            }
        };

        let mut caption = Column::new().spacing(4);
        if !item.title.is_empty() {
            caption = caption.push(Text::new(item.title.as_str()).size(18));
        }
        if !item.description.is_empty() {
            caption = caption.push(Text::new(item.description.as_str()).size(14));
        }

        let controls = Row::new()
            .spacing(12)
            .align_y(Vertical::Center)
            .push(button(Text::new("<")).on_press(Message::PreviousPressed))
            .push(button(Text::new("Close")).on_press(Message::ClosePressed))
            .push(button(Text::new(">")).on_press(Message::NextPressed));

        let card = container(
            Column::new()
                .spacing(12)
                .push(surface)
                .push(caption)
                .push(controls),
        )
        .style(container::rounded_box)
        .padding(16);

        let content = mouse_area(card).on_press(Message::ContentPressed);

        mouse_area(
            container(center(content))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
                    ..container::Style::default()
                }),
        )
        .on_press(Message::BackdropPressed)
        .into()
    }
}
