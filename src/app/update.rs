// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, CaptureState, Message};
use crate::error::Error;
use crate::media;
use crate::scanner::{decode, CaptureEvent, UploadTicket};
use crate::ui::notifications::Notification;
use iced::{window, Task};
use std::path::PathBuf;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Capture(event) => handle_capture_event(app, event),
        Message::UploadImage => open_upload_dialog(),
        Message::UploadFileChosen(path) => handle_upload_chosen(app, path),
        Message::PreviewLoaded { ticket, result } => {
            handle_preview_loaded(app, ticket, result);
            Task::none()
        }
        Message::UploadDecoded { ticket, result } => {
            handle_upload_decoded(app, ticket, result);
            Task::none()
        }
        Message::ScanAnother => {
            app.session.reset();
            Task::none()
        }
        Message::CopyResult => {
            handle_copy_result(app);
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
        Message::WindowCloseRequested(id) => handle_close_requested(app, id),
    }
}

fn handle_capture_event(app: &mut App, event: CaptureEvent) -> Task<Message> {
    match event {
        CaptureEvent::Started(handle) => {
            app.capture = CaptureState::Active {
                handle,
                frame: None,
            };
        }
        CaptureEvent::Frame(new_frame) => {
            // The feed keeps playing behind the result card, so frames are
            // stored regardless of session state.
            if let CaptureState::Active { frame, .. } = &mut app.capture {
                *frame = Some(new_frame);
            }
        }
        CaptureEvent::Decoded(text) => {
            // The capture source keeps sampling after a result; decode
            // events while `Resolved` are dropped by the session.
            if !app.session.live_decoded(text) {
                log::debug!("ignoring live decode while a result is displayed");
            }
        }
        CaptureEvent::Unavailable(err) => {
            log::error!("live capture unavailable: {err}");
            app.capture = CaptureState::Unavailable(err.clone());
            app.notifications
                .push(Notification::warning(err.i18n_key()));
        }
    }
    Task::none()
}

fn open_upload_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Select an image containing a QR code")
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf())
        },
        Message::UploadFileChosen,
    )
}

fn handle_upload_chosen(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none(); // dialog cancelled
    };

    if !media::is_image_file(&path) {
        log::error!("rejected upload, not an image: {}", path.display());
        app.notifications
            .push(Notification::warning("notification-invalid-file"));
        return Task::none();
    }

    // One logical attempt: the preview load and the decode race, but both
    // carry this ticket so a superseded attempt can never commit anything.
    let ticket = app.session.begin_upload();
    Task::batch([
        load_preview_task(ticket, path.clone()),
        decode_upload_task(ticket, path),
    ])
}

fn load_preview_task(ticket: UploadTicket, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_preview(&path))
                .await
                .unwrap_or_else(|err| Err(Error::Io(err.to_string())))
        },
        move |result| Message::PreviewLoaded { ticket, result },
    )
}

fn decode_upload_task(ticket: UploadTicket, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || decode::scan_image_file(&path))
                .await
                .unwrap_or_else(|err| {
                    Err(crate::error::DecodeError::InvalidImage(err.to_string()))
                })
        },
        move |result| Message::UploadDecoded { ticket, result },
    )
}

fn handle_preview_loaded(
    app: &mut App,
    ticket: UploadTicket,
    result: Result<media::ImagePreview, Error>,
) {
    match result {
        Ok(preview) => app.session.preview_ready(ticket, preview),
        // A missing preview is cosmetic; the decode decides the outcome.
        Err(err) => log::warn!("upload preview failed to load: {err}"),
    }
}

fn handle_upload_decoded(
    app: &mut App,
    ticket: UploadTicket,
    result: Result<String, crate::error::DecodeError>,
) {
    match result {
        Ok(text) => {
            if !app.session.upload_decoded(ticket, text) {
                log::debug!("ignoring stale or late upload decode");
            }
        }
        Err(err) => {
            log::error!("upload decode failed: {err}");
            if app.session.upload_failed(ticket) {
                app.notifications
                    .push(Notification::warning("notification-decode-failed"));
            }
        }
    }
}

fn handle_copy_result(app: &mut App) {
    // Guarded: without a result there is nothing to write.
    let Some(text) = app.session.result() else {
        return;
    };

    match crate::clipboard::copy_text(text) {
        Ok(()) => {
            app.notifications
                .push(Notification::success("notification-copy-success"));
        }
        Err(err) => {
            log::error!("clipboard write failed: {err}");
            app.notifications.push(
                Notification::error("notification-copy-failed").with_arg("error", err.to_string()),
            );
        }
    }
}

/// Teardown: the camera handle must be released before the window closes;
/// this is the one piece of cleanup the whole system requires.
fn handle_close_requested(app: &mut App, id: window::Id) -> Task<Message> {
    if let Some(handle) = app.capture.handle() {
        handle.stop();
    }
    window::close(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_without_result_touches_neither_clipboard_nor_toasts() {
        let mut app = App::default();
        assert!(app.session.result().is_none());

        let _ = update(&mut app, Message::CopyResult);

        // The guard returns before any clipboard access; with no write
        // attempted there is no success or failure toast either.
        assert!(!app.notifications.has_notifications());
        assert!(app.session.is_scanning());
    }
}
