// SPDX-License-Identifier: MPL-2.0
//! `iced_scan` is a QR-code scanner built with the Iced GUI framework.
//!
//! It streams the system camera into a viewfinder, decodes QR symbols from
//! the live feed or from an uploaded image, and presents the decoded text
//! with copy and scan-again actions. Decoding is delegated to `rqrr`;
//! camera acquisition to `nokhwa`.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod scanner;
pub mod ui;
