// SPDX-License-Identifier: MPL-2.0
//! The live capture source: camera acquisition, continuous decode loop, and
//! the Iced subscription that delivers its events to the UI thread.
//!
//! A blocking worker owns the camera for its whole lifetime: acquired once
//! when the subscription starts, released when the stop flag is raised or
//! the event channel closes. The worker emits viewfinder frames on every
//! sample and runs a decode attempt on a fixed cadence; it never stops
//! itself after a successful decode, so the session controller is the one
//! deciding what a late or duplicate decode event means.

use crate::error::CaptureError;
use crate::scanner::decode;
use iced::futures::SinkExt;
use iced::stream;
use iced::widget::image;
use iced::Subscription;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Run a decode attempt every Nth camera frame. Viewfinder frames are
/// forwarded on every sample; decoding each one would just burn CPU for a
/// symbol that moves at hand speed.
const DECODE_EVERY_N_FRAMES: u64 = 5;

/// Consecutive frame-read failures tolerated before the source gives up
/// and reports itself unavailable.
const MAX_FRAME_FAILURES: u32 = 30;

/// Subscription identity: one capture source per camera index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CaptureId(u32);

/// A viewfinder frame ready for display.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Handle for tearing down the capture source from the UI.
///
/// Raising the stop flag makes the worker release the camera and exit.
/// Stopping is idempotent; stopping an already-finished worker is a no-op.
#[derive(Debug, Clone)]
pub struct CaptureHandle {
    stop: Arc<AtomicBool>,
}

impl CaptureHandle {
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Events emitted by the capture source.
#[derive(Debug, Clone)]
pub enum CaptureEvent {
    /// The subscription is live; the handle tears the camera down.
    Started(CaptureHandle),
    /// A new viewfinder frame.
    Frame(VideoFrame),
    /// A QR symbol was decoded from the live feed.
    Decoded(String),
    /// The camera could not be acquired or stopped delivering frames.
    /// Non-fatal: the upload path stays available.
    Unavailable(CaptureError),
}

/// Creates the capture subscription for the given camera.
///
/// The first event is always [`CaptureEvent::Started`] carrying the stop
/// handle; the app must invoke it on teardown so the camera handle is not
/// leaked past window close.
pub fn subscription(camera_index: u32, mirror: bool) -> Subscription<CaptureEvent> {
    Subscription::run_with(
        (CaptureId(camera_index), mirror),
        |&(CaptureId(camera_index), mirror)| {
            stream::channel(
                16,
                move |mut output: iced::futures::channel::mpsc::Sender<CaptureEvent>| async move {
                    let (tx, mut rx) = mpsc::unbounded_channel();
                    let stop = Arc::new(AtomicBool::new(false));
                    let handle = CaptureHandle {
                        stop: Arc::clone(&stop),
                    };

                    let worker_stop = Arc::clone(&stop);
                    tokio::task::spawn_blocking(move || {
                        run_camera(camera_index, mirror, &worker_stop, &tx);
                    });

                    let _ = output.send(CaptureEvent::Started(handle)).await;

                    while let Some(event) = rx.recv().await {
                        if output.send(event).await.is_err() {
                            break;
                        }
                    }

                    // Worker gone (unavailable) or receiver gone (app teardown).
                    stop.store(true, Ordering::Relaxed);
                    iced::futures::future::pending::<()>().await;
                },
            )
        },
    )
}

/// Blocking camera loop. Owns the device handle exclusively from
/// acquisition to release; every exit path stops the stream.
fn run_camera(
    camera_index: u32,
    mirror: bool,
    stop: &AtomicBool,
    tx: &mpsc::UnboundedSender<CaptureEvent>,
) {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    let mut camera = match Camera::new(CameraIndex::Index(camera_index), requested) {
        Ok(camera) => camera,
        Err(err) => {
            log::error!("camera {camera_index} could not be acquired: {err}");
            let _ = tx.send(CaptureEvent::Unavailable(CaptureError::DeviceNotFound));
            return;
        }
    };

    if let Err(err) = camera.open_stream() {
        log::error!("camera {camera_index} stream failed to open: {err}");
        let _ = tx.send(CaptureEvent::Unavailable(CaptureError::StreamOpenFailed(
            err.to_string(),
        )));
        return;
    }

    let mut frame_count: u64 = 0;
    let mut consecutive_failures: u32 = 0;

    while !stop.load(Ordering::Relaxed) && !tx.is_closed() {
        let rgb = match camera
            .frame()
            .and_then(|buf| buf.decode_image::<RgbFormat>())
        {
            Ok(rgb) => {
                consecutive_failures = 0;
                rgb
            }
            Err(err) => {
                consecutive_failures += 1;
                log::warn!("frame read failed ({consecutive_failures}): {err}");
                if consecutive_failures >= MAX_FRAME_FAILURES {
                    let _ = tx.send(CaptureEvent::Unavailable(CaptureError::FrameReadFailed(
                        err.to_string(),
                    )));
                    break;
                }
                continue;
            }
        };

        let width = rgb.width();
        let height = rgb.height();
        let raw = rgb.into_raw();

        let rgba = rgb_to_rgba(&raw, width, mirror);
        let _ = tx.send(CaptureEvent::Frame(VideoFrame {
            handle: image::Handle::from_rgba(width, height, rgba),
            width,
            height,
        }));

        // Decode from the unmirrored pixels; QR symbols are not
        // mirror-invariant.
        if frame_count % DECODE_EVERY_N_FRAMES == 0 {
            let luma = rgb_to_luma(&raw);
            if let Ok(text) = decode::decode_luma(width, height, &luma) {
                let _ = tx.send(CaptureEvent::Decoded(text));
            }
        }

        frame_count += 1;
    }

    if let Err(err) = camera.stop_stream() {
        log::warn!("camera stream did not stop cleanly: {err}");
    }
    log::debug!("camera {camera_index} released");
}

/// Expands packed RGB into RGBA, optionally mirroring each row so the
/// viewfinder behaves like a mirror.
fn rgb_to_rgba(rgb: &[u8], width: u32, mirror: bool) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    let row_len = width as usize * 3;
    for row in rgb.chunks_exact(row_len) {
        if mirror {
            for pixel in row.chunks_exact(3).rev() {
                rgba.extend_from_slice(pixel);
                rgba.push(255);
            }
        } else {
            for pixel in row.chunks_exact(3) {
                rgba.extend_from_slice(pixel);
                rgba.push(255);
            }
        }
    }
    rgba
}

/// BT.601 integer luma approximation.
fn rgb_to_luma(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .map(|px| {
            let r = u32::from(px[0]);
            let g = u32::from(px[1]);
            let b = u32::from(px[2]);
            ((r * 299 + g * 587 + b * 114) / 1000) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_handle_is_idempotent() {
        let handle = CaptureHandle {
            stop: Arc::new(AtomicBool::new(false)),
        };
        assert!(!handle.is_stopped());
        handle.stop();
        handle.stop();
        assert!(handle.is_stopped());
    }

    #[test]
    fn stop_handle_clones_share_the_flag() {
        let handle = CaptureHandle {
            stop: Arc::new(AtomicBool::new(false)),
        };
        let clone = handle.clone();
        clone.stop();
        assert!(handle.is_stopped());
    }

    #[test]
    fn rgb_to_rgba_appends_opaque_alpha() {
        let rgb = [1, 2, 3, 4, 5, 6];
        let rgba = rgb_to_rgba(&rgb, 2, false);
        assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn rgb_to_rgba_mirrors_rows() {
        let rgb = [1, 2, 3, 4, 5, 6];
        let rgba = rgb_to_rgba(&rgb, 2, true);
        assert_eq!(rgba, vec![4, 5, 6, 255, 1, 2, 3, 255]);
    }

    #[test]
    fn rgb_to_luma_matches_bt601_weights() {
        let luma = rgb_to_luma(&[255, 255, 255, 0, 0, 0, 255, 0, 0]);
        assert_eq!(luma[0], 255);
        assert_eq!(luma[1], 0);
        assert_eq!(luma[2], 76); // 0.299 * 255
    }
}
