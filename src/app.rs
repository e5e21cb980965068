// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the showcase widgets.
//!
//! The `App` struct owns one of everything: the catalog, one carousel per
//! product, the gallery filter state, the binder, the playback registry, and
//! the single shared lightbox. Component updates return effects; this file
//! translates them into side effects on the shared pieces (pausing videos,
//! opening the lightbox), so the policy of who may touch what stays in one
//! place and is easy to audit.

use crate::catalog::{self, Catalog};
use crate::config::{self, Config, ThemeMode};
use crate::media::collector;
use crate::playback::PlaybackRegistry;
use crate::ui::binder::{Binder, OpenRequest};
use crate::ui::{carousel, gallery, lightbox};
use iced::{
    event, keyboard, time,
    widget::{container, Column, Scrollable, Stack, Text},
    window, Element, Length, Subscription, Task, Theme,
};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

const DEFAULT_CATALOG_FILE: &str = "catalog.toml";

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional path to the catalog manifest; defaults to `catalog.toml`.
    pub catalog_path: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(usize, carousel::Message),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    AutoAdvanceTick(std::time::Instant),
}

/// Root Iced application state.
pub struct App {
    catalog: Catalog,
    categories: Vec<String>,
    carousels: Vec<carousel::State>,
    gallery: gallery::State,
    lightbox: lightbox::State,
    binder: Binder,
    playback: PlaybackRegistry,
    theme_mode: ThemeMode,
    auto_advance: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("products", &self.carousels.len())
            .field("gallery_entries", &self.catalog.gallery.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(Catalog::default(), &Config::default())
    }
}

impl App {
    /// Initializes application state from the config and catalog manifest.
    ///
    /// A missing or unreadable catalog degrades to an empty showcase rather
    /// than failing; the window still opens with inert widgets.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_dir.as_deref() {
            Some(dir) => config::load_from_dir(Path::new(dir)),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            eprintln!("Failed to load config: {}", err);
            Config::default()
        });

        let catalog_path = flags
            .catalog_path
            .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string());
        let catalog = catalog::load(Path::new(&catalog_path)).unwrap_or_else(|err| {
            eprintln!("Failed to load catalog {:?}: {}", catalog_path, err);
            Catalog::default()
        });

        let app = Self::from_parts(catalog, &config);
        (app, Task::none())
    }

    /// Assembles the widget tree for a catalog: one carousel per product,
    /// bindings for every product and every initially visible gallery entry.
    fn from_parts(catalog: Catalog, config: &Config) -> Self {
        let swipe_threshold = config.swipe_threshold();
        let carousels = catalog
            .products
            .iter()
            .map(|product| {
                carousel::State::new(collector::collect_product(product), swipe_threshold)
            })
            .collect();
        let gallery = gallery::State::new();
        let mut binder = Binder::new();
        binder.bind_products(&catalog);
        binder.rebind_gallery(gallery.visible_ids(&catalog.gallery));
        let categories = catalog.categories();

        Self {
            catalog,
            categories,
            carousels,
            gallery,
            lightbox: lightbox::State::new(),
            binder,
            playback: PlaybackRegistry::new(),
            theme_mode: config.general.theme_mode,
            auto_advance: Duration::from_millis(config.auto_advance_ms()),
        }
    }

    fn title(&self) -> String {
        "Vitrine Product Showcase".to_string()
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // One shared tick; each carousel gates it on its own armed handle.
        let tick = if self
            .carousels
            .iter()
            .any(|carousel| carousel.auto_advance_armed())
        {
            time::every(self.auto_advance).map(Message::AutoAdvanceTick)
        } else {
            Subscription::none()
        };

        let keyboard_events = event::listen_with(|event, status, _window| {
            match status {
                event::Status::Captured => return None,
                event::Status::Ignored => {}
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::Lightbox(lightbox::Message::ClosePressed)),
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                    ..
                }) => Some(Message::Lightbox(lightbox::Message::PreviousPressed)),
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                    ..
                }) => Some(Message::Lightbox(lightbox::Message::NextPressed)),
                _ => None,
            }
        });

        Subscription::batch([tick, keyboard_events])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(index, carousel_message) => {
                let Some(carousel) = self.carousels.get_mut(index) else {
                    return Task::none();
                };
                let effect = carousel.update(carousel_message);
                self.apply_carousel_effect(index, effect);
            }
            Message::Gallery(gallery_message) => match self.gallery.update(gallery_message) {
                gallery::Effect::Rebind => {
                    let visible = self.gallery.visible_ids(&self.catalog.gallery);
                    self.binder.rebind_gallery(visible);
                }
                gallery::Effect::Activated { entry } => {
                    if let Some(request) =
                        self.binder
                            .activate_gallery(entry, &self.catalog, self.gallery.filter())
                    {
                        self.open_lightbox(request);
                    }
                }
                gallery::Effect::None => {}
            },
            Message::Lightbox(lightbox_message) => {
                let effect = self.lightbox.update(lightbox_message);
                self.apply_lightbox_effect(effect);
            }
            Message::AutoAdvanceTick(_instant) => {
                for index in 0..self.carousels.len() {
                    let effect = self.carousels[index].tick();
                    self.apply_carousel_effect(index, effect);
                }
            }
        }
        Task::none()
    }

    fn apply_carousel_effect(&mut self, index: usize, effect: carousel::Effect) {
        match effect {
            carousel::Effect::PauseVideos { sources } => self.playback.pause_many(sources),
            carousel::Effect::Activated { src } => {
                if let Some(request) = self.binder.activate_product(index, &src, &self.catalog) {
                    self.open_lightbox(request);
                }
            }
            carousel::Effect::ToggleVideo { src } => self.playback.toggle(&src),
            carousel::Effect::None => {}
        }
    }

    fn apply_lightbox_effect(&mut self, effect: lightbox::Effect) {
        match effect {
            lightbox::Effect::PauseAllVideos => self.playback.pause_all(),
            lightbox::Effect::PauseVideo { src } => self.playback.pause(&src),
            lightbox::Effect::ToggleVideo { src } => self.playback.toggle(&src),
            lightbox::Effect::None => {}
        }
    }

    fn open_lightbox(&mut self, request: OpenRequest) {
        let effect = self.lightbox.open(request.items, &request.start_src);
        self.apply_lightbox_effect(effect);
    }

    fn view(&self) -> Element<'_, Message> {
        let mut products = Column::new().spacing(24);
        for (index, product) in self.catalog.products.iter().enumerate() {
            let Some(carousel) = self.carousels.get(index) else {
                continue;
            };
            let card = Column::new()
                .spacing(8)
                .push(Text::new(product.title.as_str()).size(20))
                .push(Text::new(product.description.as_str()).size(14))
                .push(
                    carousel
                        .view(&self.playback)
                        .map(move |message| Message::Carousel(index, message)),
                );
            products = products.push(
                container(card)
                    .style(container::bordered_box)
                    .padding(12)
                    .width(Length::Fill),
            );
        }

        let content = Column::new()
            .spacing(32)
            .padding(24)
            .push(Text::new("Products").size(24))
            .push(products)
            .push(
                self.gallery
                    .view(&self.catalog.gallery, &self.categories)
                    .map(Message::Gallery),
            );

        let base: Element<'_, Message> = Scrollable::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.lightbox.is_open() {
            Stack::new()
                .push(base)
                .push(self.lightbox.view(&self.playback).map(Message::Lightbox))
                .into()
        } else {
            base
        }
    }
}
