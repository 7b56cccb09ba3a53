// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{DecodeError, Error};
use crate::media::ImagePreview;
use crate::scanner::{CaptureEvent, UploadTicket};
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants cover the
/// capture source, the upload decode path, the two user actions, and the
/// ambient UI machinery, keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// An event from the live capture source.
    Capture(CaptureEvent),
    /// Trigger the upload file dialog.
    UploadImage,
    /// Result from the upload file dialog.
    UploadFileChosen(Option<PathBuf>),
    /// The preview image for an upload attempt finished loading.
    PreviewLoaded {
        ticket: UploadTicket,
        result: Result<ImagePreview, Error>,
    },
    /// The one-shot decode of an uploaded image completed.
    UploadDecoded {
        ticket: UploadTicket,
        result: Result<String, DecodeError>,
    },
    /// The "scan another" action on the result card.
    ScanAnother,
    /// Copy the decoded text to the system clipboard.
    CopyResult,
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Window close was requested; the camera must be released first.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional camera device index override.
    pub camera: Option<u32>,
}
