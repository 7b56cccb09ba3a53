// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the scan session, the live capture
//! source, localization, and the notification overlay, and translates
//! messages into side effects like dialog tasks and clipboard writes. This
//! module keeps policy decisions (window sizing, teardown order) close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::error::CaptureError;
use crate::i18n::fluent::I18n;
use crate::scanner::{CaptureHandle, Session, VideoFrame};
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Lifecycle of the live capture source, as seen from the UI.
#[derive(Debug, Default)]
pub enum CaptureState {
    /// Subscription not yet started (or restarting after a reset).
    #[default]
    Starting,
    /// Camera worker running; holds the teardown handle and the latest
    /// viewfinder frame.
    Active {
        handle: CaptureHandle,
        frame: Option<VideoFrame>,
    },
    /// Camera could not be acquired or died; the session continues in a
    /// degraded upload-only mode.
    Unavailable(CaptureError),
}

impl CaptureState {
    pub fn latest_frame(&self) -> Option<&VideoFrame> {
        match self {
            CaptureState::Active { frame, .. } => frame.as_ref(),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CaptureState::Unavailable(_))
    }

    pub fn handle(&self) -> Option<&CaptureHandle> {
        match self {
            CaptureState::Active { handle, .. } => Some(handle),
            _ => None,
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    pub(crate) session: Session,
    pub(crate) capture: CaptureState,
    pub(crate) notifications: notifications::Manager,
    pub(crate) camera_index: u32,
    pub(crate) mirror_preview: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("scanning", &self.session.is_scanning())
            .field("capture", &self.capture)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            session: Session::new(),
            capture: CaptureState::Starting,
            notifications: notifications::Manager::new(),
            camera_index: config::DEFAULT_CAMERA_INDEX,
            mirror_preview: true,
        }
    }
}

impl App {
    /// Initializes application state from config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            camera_index: flags
                .camera
                .or(config.camera_index)
                .unwrap_or(config::DEFAULT_CAMERA_INDEX),
            mirror_preview: config.mirror_preview.unwrap_or(true),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

/// Builds the window settings.
///
/// Close requests are intercepted (`exit_on_close_request: false`) so the
/// camera handle is released before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
