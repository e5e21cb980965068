// SPDX-License-Identifier: MPL-2.0
//! Per-product carousel: a state machine cycling through a fixed ordered
//! media list, driven by manual controls, pointer swipes, and an
//! auto-advance timer.
//!
//! The auto-advance handle is explicit: arming always cancels any stale
//! handle first, so rapid pointer enter/leave cycles can never leave two
//! live timers advancing the same widget. An empty carousel is inert; every
//! operation is a no-op.

use crate::media::{MediaKind, MediaList};
use crate::playback::PlaybackRegistry;
use iced::{
    alignment::Vertical,
    mouse,
    widget::{button, container, image, mouse_area, Column, Container, Row, Text},
    Element, Length, Point,
};

/// Messages emitted by the carousel's widgets and pointer tracking.
#[derive(Debug, Clone)]
pub enum Message {
    NextPressed,
    PreviousPressed,
    PointerEntered,
    PointerExited,
    PointerMoved(Point),
    Pressed,
    Released,
    VideoToggled,
}

/// Side effects the application should perform after a carousel transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Pause every video in this carousel's own item list.
    PauseVideos { sources: Vec<String> },
    /// The current slide was activated; open the lightbox at this source.
    Activated { src: String },
    /// Toggle playback of the current slide's video.
    ToggleVideo { src: String },
}

/// Explicit optional auto-advance handle.
///
/// Arming is always "cancel-if-present, then set new"; cancellation is never
/// assumed idempotent by the caller. Handle ids are monotonically increasing
/// so a stale handle can never be confused with the live one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceTimer {
    armed: Option<u64>,
    last_id: u64,
}

impl AdvanceTimer {
    pub fn arm(&mut self) {
        self.cancel();
        self.last_id += 1;
        self.armed = Some(self.last_id);
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The live handle id, if armed.
    pub fn handle(&self) -> Option<u64> {
        self.armed
    }
}

/// Complete carousel state for one product card.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    items: MediaList,
    current: usize,
    timer: AdvanceTimer,
    cursor: Option<Point>,
    press_origin: Option<Point>,
    swipe_threshold: f32,
}

impl State {
    /// Creates a carousel over a fixed item list. A non-empty carousel
    /// starts on slide 0 with auto-advance armed; an empty one is inert.
    pub fn new(items: MediaList, swipe_threshold: f32) -> Self {
        let mut timer = AdvanceTimer::default();
        if !items.is_empty() {
            timer.arm();
        }
        Self {
            items,
            current: 0,
            timer,
            cursor: None,
            press_origin: None,
            swipe_threshold,
        }
    }

    pub fn items(&self) -> &MediaList {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_inert(&self) -> bool {
        self.items.is_empty()
    }

    pub fn auto_advance_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// The live auto-advance handle id, for tests and diagnostics.
    pub fn timer_handle(&self) -> Option<u64> {
        self.timer.handle()
    }

    /// Activates slide `index mod len` and requests a pause of every video
    /// in the container, not only the previously active one.
    pub fn show_slide(&mut self, index: usize) -> Effect {
        if self.items.is_empty() {
            return Effect::None;
        }
        self.current = index % self.items.len();
        Effect::PauseVideos {
            sources: self.items.video_sources().map(String::from).collect(),
        }
    }

    pub fn next(&mut self) -> Effect {
        if self.items.is_empty() {
            return Effect::None;
        }
        self.show_slide(self.current + 1)
    }

    pub fn prev(&mut self) -> Effect {
        if self.items.is_empty() {
            return Effect::None;
        }
        self.show_slide(self.current + self.items.len() - 1)
    }

    /// One auto-advance tick. Advances only while a handle is armed.
    pub fn tick(&mut self) -> Effect {
        if !self.timer.is_armed() {
            return Effect::None;
        }
        self.next()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        if self.items.is_empty() {
            return Effect::None;
        }
        match message {
            Message::NextPressed => self.next(),
            Message::PreviousPressed => self.prev(),
            Message::PointerEntered => {
                self.timer.cancel();
                Effect::None
            }
            Message::PointerExited => {
                self.timer.arm();
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                Effect::None
            }
            Message::Pressed => {
                self.press_origin = self.cursor;
                Effect::None
            }
            Message::Released => self.finish_press(),
            Message::VideoToggled => match self.items.get(self.current) {
                Some(item) if item.kind == MediaKind::Video => Effect::ToggleVideo {
                    src: item.src.clone(),
                },
                _ => Effect::None,
            },
        }
    }

    /// Resolves a press/release pair into a swipe or a click.
    ///
    /// A horizontal drag past the threshold swipes; a vertical drag past the
    /// threshold is ignored; anything shorter activates the current slide.
    fn finish_press(&mut self) -> Effect {
        let (Some(origin), Some(cursor)) = (self.press_origin.take(), self.cursor) else {
            return Effect::None;
        };
        let dx = cursor.x - origin.x;
        let dy = cursor.y - origin.y;

        if dx < -self.swipe_threshold {
            self.next()
        } else if dx > self.swipe_threshold {
            self.prev()
        } else if dy.abs() >= self.swipe_threshold {
            Effect::None
        } else {
            match self.items.get(self.current) {
                Some(item) => Effect::Activated {
                    src: item.src.clone(),
                },
                None => Effect::None,
            }
        }
    }

    pub fn view<'a>(&'a self, playback: &PlaybackRegistry) -> Element<'a, Message> {
        let Some(item) = self.items.get(self.current) else {
            return Container::new(Text::new("No media").size(14))
                .padding(12)
                .width(Length::Fill)
                .into();
        };

        let surface: Element<'a, Message> = match item.kind {
            MediaKind::Image => image(image::Handle::from_path(item.src.as_str()))
                .width(Length::Fill)
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
                .padding(16)
                .width(Length::Fill)
                .into()
            }
        };

        let position = Text::new(format!("{} / {}", self.current + 1, self.items.len())).size(12);
        let controls = Row::new()
            .spacing(10)
            .align_y(Vertical::Center)
            .push(button(Text::new("<")).on_press(Message::PreviousPressed))
            .push(position)
            .push(button(Text::new(">")).on_press(Message::NextPressed));

        let content = Column::new().spacing(8).push(surface).push(controls);

        mouse_area(content)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerExited)
            .on_move(Message::PointerMoved)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .interaction(mouse::Interaction::Pointer)
            .into()
    }
}
