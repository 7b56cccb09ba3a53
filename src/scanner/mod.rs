// SPDX-License-Identifier: MPL-2.0
//! Scan-session state machine, QR decode capability, and the live capture
//! source.
//!
//! The split mirrors the responsibilities in the session lifecycle:
//!
//! - [`session`] owns the `Scanning`/`Resolved` record and its transitions,
//!   as pure functions on the UI thread
//! - [`decode`] wraps the external QR decoder (`rqrr`)
//! - [`capture`] drives the camera on a worker thread and surfaces frames
//!   and decode events as an Iced subscription

pub mod capture;
pub mod decode;
pub mod session;

pub use capture::{CaptureEvent, CaptureHandle, VideoFrame};
pub use session::{Session, UploadTicket};
