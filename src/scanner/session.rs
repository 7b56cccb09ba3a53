// SPDX-License-Identifier: MPL-2.0
//! The scan session record and its state transitions.
//!
//! The session is either `Scanning` (no result held) or `Resolved` (a
//! decoded payload is held, optionally with the upload preview that produced
//! it). All transitions are synchronous methods called from the single UI
//! update loop; asynchronous completions identify themselves with an
//! [`UploadTicket`] so results from a superseded upload are discarded
//! instead of being committed against a newer attempt.

use crate::media::ImagePreview;

/// Identifies one logical upload attempt. Tickets are handed out
/// monotonically; only completions carrying the newest ticket are honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

/// In-memory scan session. Created `Scanning`; cycles between `Scanning`
/// and `Resolved` for the life of the application.
#[derive(Debug, Default)]
pub struct Session {
    /// Last successfully decoded payload. `None` means the session is
    /// scanning; holding a value is what `Resolved` means.
    result: Option<String>,
    /// Preview committed together with an upload-path result.
    preview: Option<ImagePreview>,
    /// Preview loaded for the in-flight upload, waiting for its decode.
    pending_preview: Option<ImagePreview>,
    /// Monotonic counter backing [`UploadTicket`].
    upload_seq: u64,
    /// Ticket of the upload that produced the current result, when the
    /// result came from the upload path.
    resolved_upload: Option<u64>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while awaiting a decode result.
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.result.is_none()
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    /// A decode event from the live feed. Commits the result without a
    /// preview. Events arriving while already `Resolved` are ignored (the
    /// capture source keeps sampling until teardown, so late callbacks are
    /// expected); returns whether the event was honored.
    pub fn live_decoded(&mut self, text: String) -> bool {
        if self.result.is_some() {
            return false;
        }
        self.result = Some(text);
        self.preview = None;
        self.resolved_upload = None;
        true
    }

    /// Starts a new logical upload attempt, superseding any in-flight one.
    /// Completions from older attempts become stale and are ignored.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.upload_seq += 1;
        self.pending_preview = None;
        UploadTicket(self.upload_seq)
    }

    /// The preview image for an upload attempt finished loading.
    ///
    /// Preview loading and decoding race; whichever finishes second must
    /// still pair with its own attempt. A preview for the current ticket is
    /// staged while the decode is outstanding, or attached directly when
    /// that ticket's decode already resolved the session.
    pub fn preview_ready(&mut self, ticket: UploadTicket, preview: ImagePreview) {
        if ticket.0 != self.upload_seq {
            return; // stale attempt
        }
        if self.resolved_upload == Some(ticket.0) {
            self.preview = Some(preview);
        } else if self.result.is_none() {
            self.pending_preview = Some(preview);
        }
    }

    /// A decode success for an upload attempt. Commits the result together
    /// with whatever preview that same attempt has produced so far; returns
    /// whether the event was honored.
    pub fn upload_decoded(&mut self, ticket: UploadTicket, text: String) -> bool {
        if ticket.0 != self.upload_seq || self.result.is_some() {
            return false;
        }
        self.result = Some(text);
        self.preview = self.pending_preview.take();
        self.resolved_upload = Some(ticket.0);
        true
    }

    /// A decode failure for an upload attempt. Re-enters `Scanning` with the
    /// attempt's preview discarded; returns whether the event was honored.
    pub fn upload_failed(&mut self, ticket: UploadTicket) -> bool {
        if ticket.0 != self.upload_seq {
            return false;
        }
        self.pending_preview = None;
        if self.result.is_some() {
            // Resolved in the meantime (e.g. by the live feed); a stale
            // failure must not knock the session out of `Resolved`.
            return false;
        }
        // Already `Scanning`; no preview may survive a failed attempt.
        self.preview = None;
        self.resolved_upload = None;
        true
    }

    /// The "scan another" action: back to the initial `Scanning` state.
    /// The sequence advances so completions from an upload begun before the
    /// reset are stale and cannot commit into the fresh session.
    pub fn reset(&mut self) {
        self.upload_seq += 1;
        self.result = None;
        self.preview = None;
        self.pending_preview = None;
        self.resolved_upload = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview() -> ImagePreview {
        ImagePreview::from_rgba(2, 2, vec![255; 16])
    }

    #[test]
    fn initial_state_is_scanning_without_result_or_preview() {
        let session = Session::new();
        assert!(session.is_scanning());
        assert!(session.result().is_none());
        assert!(session.preview().is_none());
    }

    #[test]
    fn live_decode_commits_result_without_preview() {
        let mut session = Session::new();
        assert!(session.live_decoded("ABC123".to_string()));
        assert_eq!(session.result(), Some("ABC123"));
        assert!(session.preview().is_none());
        assert!(!session.is_scanning());
    }

    #[test]
    fn live_decode_while_resolved_is_ignored() {
        let mut session = Session::new();
        assert!(session.live_decoded("first".to_string()));
        assert!(!session.live_decoded("second".to_string()));
        assert_eq!(session.result(), Some("first"));
    }

    #[test]
    fn upload_decode_commits_result_with_preview() {
        let mut session = Session::new();
        let ticket = session.begin_upload();
        session.preview_ready(ticket, preview());
        assert!(session.upload_decoded(ticket, "HELLO".to_string()));

        assert_eq!(session.result(), Some("HELLO"));
        assert!(session.preview().is_some());
        assert!(!session.is_scanning());
    }

    #[test]
    fn upload_decode_before_preview_still_attaches_it() {
        let mut session = Session::new();
        let ticket = session.begin_upload();
        assert!(session.upload_decoded(ticket, "HELLO".to_string()));
        assert!(session.preview().is_none());

        // File read completed after the decode; same attempt, so it lands.
        session.preview_ready(ticket, preview());
        assert!(session.preview().is_some());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = Session::new();
        let ticket = session.begin_upload();
        session.preview_ready(ticket, preview());
        session.upload_decoded(ticket, "HELLO".to_string());

        session.reset();
        assert!(session.is_scanning());
        assert!(session.result().is_none());
        assert!(session.preview().is_none());
    }

    #[test]
    fn upload_failure_resets_cleanly_even_with_loaded_preview() {
        let mut session = Session::new();
        let ticket = session.begin_upload();
        session.preview_ready(ticket, preview());
        assert!(session.upload_failed(ticket));

        assert!(session.is_scanning());
        assert!(session.result().is_none());
        assert!(session.preview().is_none());

        // A preview arriving after the failure is dropped too.
        session.preview_ready(ticket, preview());
        let later = session.begin_upload();
        assert!(session.upload_decoded(later, "OK".to_string()));
        assert!(session.preview().is_none());
    }

    #[test]
    fn reset_invalidates_in_flight_upload_tickets() {
        let mut session = Session::new();
        let ticket = session.begin_upload();
        session.live_decoded("LIVE".to_string());
        session.reset();

        // Completions from the abandoned attempt arrive after the reset.
        assert!(!session.upload_decoded(ticket, "STALE".to_string()));
        session.preview_ready(ticket, preview());
        assert!(session.is_scanning());
        assert!(session.result().is_none());
        assert!(session.preview().is_none());

        let fresh = session.begin_upload();
        assert!(session.upload_decoded(fresh, "NEW".to_string()));
        assert_eq!(session.result(), Some("NEW"));
    }

    #[test]
    fn stale_upload_completions_are_discarded() {
        let mut session = Session::new();
        let first = session.begin_upload();
        let second = session.begin_upload();

        // Slow completions from the superseded attempt.
        session.preview_ready(first, preview());
        assert!(!session.upload_decoded(first, "OLD".to_string()));
        assert!(session.is_scanning());

        assert!(session.upload_decoded(second, "NEW".to_string()));
        assert_eq!(session.result(), Some("NEW"));
        // The committed preview must not come from the first attempt.
        assert!(session.preview().is_none());
    }

    #[test]
    fn stale_failure_does_not_disturb_newer_attempt() {
        let mut session = Session::new();
        let first = session.begin_upload();
        let second = session.begin_upload();
        session.preview_ready(second, preview());

        assert!(!session.upload_failed(first));
        assert!(session.upload_decoded(second, "NEW".to_string()));
        assert!(session.preview().is_some());
    }

    #[test]
    fn upload_failure_after_live_resolution_keeps_result() {
        let mut session = Session::new();
        let ticket = session.begin_upload();
        session.live_decoded("LIVE".to_string());

        assert!(!session.upload_failed(ticket));
        assert_eq!(session.result(), Some("LIVE"));
        assert!(!session.is_scanning());
    }

    #[test]
    fn upload_decode_while_resolved_is_ignored() {
        let mut session = Session::new();
        let ticket = session.begin_upload();
        session.live_decoded("LIVE".to_string());

        assert!(!session.upload_decoded(ticket, "UPLOAD".to_string()));
        assert_eq!(session.result(), Some("LIVE"));
        assert!(session.preview().is_none());
    }
}
