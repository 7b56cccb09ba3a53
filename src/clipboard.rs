// SPDX-License-Identifier: MPL-2.0
//! System clipboard access for the copy-result action.

use crate::error::{Error, Result};

/// Copies the literal decoded text to the system clipboard.
///
/// # Errors
///
/// Returns `Error::Clipboard` when the clipboard cannot be opened or the
/// write fails. This can happen on headless systems or if permissions are
/// denied; the caller surfaces it to the user and takes no corrective
/// action.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))
}
