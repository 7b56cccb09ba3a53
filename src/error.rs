// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Decode(DecodeError),
    Clipboard(String),
}

/// Specific error types for camera acquisition and streaming.
/// None of these are fatal: the app keeps running with the live
/// decode path disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No camera device was found at the requested index.
    DeviceNotFound,
    /// The device exists but the stream could not be opened
    /// (busy, permission denied, unsupported format).
    StreamOpenFailed(String),
    /// A frame could not be read after the stream was opened.
    FrameReadFailed(String),
}

impl CaptureError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CaptureError::DeviceNotFound => "error-capture-no-device",
            CaptureError::StreamOpenFailed(_) => "error-capture-stream",
            CaptureError::FrameReadFailed(_) => "error-capture-frame",
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DeviceNotFound => write!(f, "No camera device found"),
            CaptureError::StreamOpenFailed(msg) => {
                write!(f, "Failed to open camera stream: {msg}")
            }
            CaptureError::FrameReadFailed(msg) => write!(f, "Failed to read camera frame: {msg}"),
        }
    }
}

/// Errors from the QR decode capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The image was readable but contained no decodable QR symbol.
    NoSymbol,
    /// A symbol was detected but its payload could not be decoded.
    Unreadable(String),
    /// The file could not be opened or parsed as an image.
    InvalidImage(String),
    /// The file's type is not an image type; no decode was attempted.
    NotAnImage,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NoSymbol => write!(f, "No QR symbol found"),
            DecodeError::Unreadable(msg) => write!(f, "QR symbol could not be decoded: {msg}"),
            DecodeError::InvalidImage(msg) => write!(f, "Not a readable image: {msg}"),
            DecodeError::NotAnImage => write!(f, "File is not an image"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
            Error::Decode(err) => write!(f, "{err}"),
            Error::Clipboard(msg) => write!(f, "Clipboard error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}
