// SPDX-License-Identifier: MPL-2.0
//! UI components: the viewfinder, the two mutually-exclusive session views
//! (scanning pill and result card), toast notifications, and shared styles.

pub mod notifications;
pub mod result_card;
pub mod scan_panel;
pub mod styles;
pub mod viewfinder;
