//! Display state tracking.
//!
//! The tracker owns the single "current display" record. Two rules keep it
//! coherent under rapid resubmission:
//!
//! - state is an explicit struct replaced wholesale per completed
//!   operation, never field-by-field
//! - every submission carries a sequence number, and a completing lookup
//!   commits only if its number is still the latest issued. Overlapping
//!   submissions therefore resolve to the last request *sent*, never to
//!   whichever response happened to arrive last.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::debug;

use crate::error_handling::LookupError;
use crate::geo::GeolocationRecord;

/// User-facing message for input that fails classification.
pub const WRONG_ADDRESS_FORMAT_MSG: &str = "Wrong address format! Try again.";

/// The current display state: one record, one error, a loading count.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    /// Last successfully looked-up record, retained across failed lookups.
    pub record: Option<GeolocationRecord>,
    /// Error from the most recent completed or rejected submission.
    pub error: Option<String>,
    /// Number of submissions currently in flight.
    pub loading: usize,
}

/// What happened to a completing lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The result was the latest issued and is now displayed.
    Applied,
    /// A newer submission was issued meanwhile; this result was discarded.
    Stale,
}

/// Tracks display state across submissions.
#[derive(Debug, Default)]
pub struct TrackerState {
    issued: AtomicU64,
    inner: Mutex<DisplayState>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a sequence number for a new submission and marks it in
    /// flight. The number must be handed back to [`commit`](Self::commit).
    pub fn begin_submission(&self) -> u64 {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.lock();
        state.loading += 1;
        seq
    }

    /// Completes the submission identified by `seq`.
    ///
    /// If a newer submission was issued in the meantime the result is
    /// discarded and the display is untouched (apart from the loading
    /// count). Otherwise a success replaces the record wholesale and clears
    /// any error; a failure keeps the previous record and surfaces the
    /// error.
    pub fn commit(
        &self,
        seq: u64,
        result: Result<GeolocationRecord, LookupError>,
    ) -> CommitOutcome {
        let mut state = self.lock();
        state.loading = state.loading.saturating_sub(1);

        if seq != self.issued.load(Ordering::SeqCst) {
            debug!("Discarding stale response for submission #{seq}");
            return CommitOutcome::Stale;
        }

        match result {
            Ok(record) => {
                state.record = Some(record);
                state.error = None;
            }
            Err(e) => {
                state.error = Some(e.to_string());
            }
        }
        CommitOutcome::Applied
    }

    /// Records a rejected submission (failed classification).
    ///
    /// No sequence number is issued and no network call happens; the
    /// previous record stays displayed under the error message.
    pub fn reject_input(&self) {
        let mut state = self.lock();
        state.error = Some(WRONG_ADDRESS_FORMAT_MSG.to_string());
    }

    /// Current state, copied out for rendering.
    pub fn snapshot(&self) -> DisplayState {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DisplayState> {
        // A poisoned lock means a panic mid-update; the state is still
        // coherent (updates are wholesale), so keep serving it.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ip: &str) -> GeolocationRecord {
        GeolocationRecord {
            ip: ip.to_string(),
            ..Default::default()
        }
    }

    fn lookup_failed() -> LookupError {
        LookupError::Provider("quota exceeded".to_string())
    }

    #[test]
    fn test_successful_commit_replaces_record() {
        let tracker = TrackerState::new();
        let seq = tracker.begin_submission();
        assert_eq!(tracker.snapshot().loading, 1);

        let outcome = tracker.commit(seq, Ok(record("8.8.8.8")));
        assert_eq!(outcome, CommitOutcome::Applied);

        let state = tracker.snapshot();
        assert_eq!(state.record.unwrap().ip, "8.8.8.8");
        assert!(state.error.is_none());
        assert_eq!(state.loading, 0);
    }

    #[test]
    fn test_failed_lookup_retains_previous_record() {
        let tracker = TrackerState::new();
        let seq = tracker.begin_submission();
        tracker.commit(seq, Ok(record("8.8.8.8")));

        let seq = tracker.begin_submission();
        let outcome = tracker.commit(seq, Err(lookup_failed()));
        assert_eq!(outcome, CommitOutcome::Applied);

        let state = tracker.snapshot();
        // Last good record survives the failure; the error is surfaced
        assert_eq!(state.record.unwrap().ip, "8.8.8.8");
        assert!(state.error.unwrap().contains("quota exceeded"));
        assert_eq!(state.loading, 0);
    }

    #[test]
    fn test_stale_response_discarded() {
        let tracker = TrackerState::new();
        let first = tracker.begin_submission();
        let second = tracker.begin_submission();

        // The older submission completes after the newer one was issued:
        // its response must not reach the display
        let outcome = tracker.commit(first, Ok(record("1.1.1.1")));
        assert_eq!(outcome, CommitOutcome::Stale);
        assert!(tracker.snapshot().record.is_none());

        let outcome = tracker.commit(second, Ok(record("8.8.8.8")));
        assert_eq!(outcome, CommitOutcome::Applied);
        assert_eq!(tracker.snapshot().record.unwrap().ip, "8.8.8.8");
    }

    #[test]
    fn test_stale_error_discarded_too() {
        let tracker = TrackerState::new();
        let first = tracker.begin_submission();
        let second = tracker.begin_submission();

        assert_eq!(tracker.commit(first, Err(lookup_failed())), CommitOutcome::Stale);
        assert!(tracker.snapshot().error.is_none());

        tracker.commit(second, Ok(record("8.8.8.8")));
        assert!(tracker.snapshot().error.is_none());
    }

    #[test]
    fn test_loading_count_drains_for_stale_commits() {
        let tracker = TrackerState::new();
        let first = tracker.begin_submission();
        let second = tracker.begin_submission();
        assert_eq!(tracker.snapshot().loading, 2);

        tracker.commit(first, Ok(record("1.1.1.1")));
        tracker.commit(second, Ok(record("8.8.8.8")));
        // Never left stuck in a loading state
        assert_eq!(tracker.snapshot().loading, 0);
    }

    #[test]
    fn test_reject_input_sets_message_without_touching_record() {
        let tracker = TrackerState::new();
        let seq = tracker.begin_submission();
        tracker.commit(seq, Ok(record("8.8.8.8")));

        tracker.reject_input();

        let state = tracker.snapshot();
        assert_eq!(state.error.as_deref(), Some(WRONG_ADDRESS_FORMAT_MSG));
        assert_eq!(state.record.unwrap().ip, "8.8.8.8");
    }

    #[test]
    fn test_success_clears_prior_error() {
        let tracker = TrackerState::new();
        tracker.reject_input();
        assert!(tracker.snapshot().error.is_some());

        let seq = tracker.begin_submission();
        tracker.commit(seq, Ok(record("8.8.8.8")));
        assert!(tracker.snapshot().error.is_none());
    }
}
