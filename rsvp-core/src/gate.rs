//! Submission gating: rate limiting and bot filtering.

use chrono::{DateTime, Utc};

use crate::error::{RsvpError, RsvpResult};

/// Minimum spacing between permitted submission attempts, in milliseconds.
pub const RATE_LIMIT_MS: i64 = 30_000;

/// True iff the honeypot field carries a value. The field is invisible to
/// humans, so any content marks the submission as automated. Checked
/// before any network interaction, independently of the rate limiter.
pub fn is_bot_trap(honeypot: &str) -> bool {
    !honeypot.is_empty()
}

/// Pure window check: an attempt is allowed unless a prior permitted
/// attempt happened within the rate-limit window.
pub fn can_submit(now: DateTime<Utc>, last: Option<DateTime<Utc>>) -> bool {
    match last {
        Some(last) => now.timestamp_millis() - last.timestamp_millis() >= RATE_LIMIT_MS,
        None => true,
    }
}

/// Storage for the single "last permitted attempt" timestamp.
///
/// The flow never touches the mechanism directly, so it can be swapped
/// (memory for tests and ephemeral hosts, a state file for the CLI).
pub trait AttemptStore {
    fn last_attempt(&self) -> RsvpResult<Option<DateTime<Utc>>>;
    fn record_attempt(&mut self, at: DateTime<Utc>) -> RsvpResult<()>;
}

/// In-memory store; forgets everything on drop.
#[derive(Debug, Default)]
pub struct MemoryAttemptStore {
    last: Option<DateTime<Utc>>,
}

impl MemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last(last: DateTime<Utc>) -> Self {
        MemoryAttemptStore { last: Some(last) }
    }
}

impl AttemptStore for MemoryAttemptStore {
    fn last_attempt(&self) -> RsvpResult<Option<DateTime<Utc>>> {
        Ok(self.last)
    }

    fn record_attempt(&mut self, at: DateTime<Utc>) -> RsvpResult<()> {
        self.last = Some(at);
        Ok(())
    }
}

/// Rate limiter over a swappable attempt store.
pub struct SubmissionGate<S: AttemptStore> {
    store: S,
}

impl<S: AttemptStore> SubmissionGate<S> {
    pub fn new(store: S) -> Self {
        SubmissionGate { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check the window and, on allow, record `now` before returning.
    ///
    /// Recording happens before the caller dispatches anything, so a slow
    /// round trip cannot let a second attempt slip through the window.
    pub fn try_acquire(&mut self, now: DateTime<Utc>) -> RsvpResult<()> {
        let last = self.store.last_attempt()?;

        if !can_submit(now, last) {
            let elapsed = match last {
                Some(last) => now.timestamp_millis() - last.timestamp_millis(),
                None => 0,
            };
            let wait_secs = ((RATE_LIMIT_MS - elapsed).max(0) as u64).div_ceil(1000);
            return Err(RsvpError::RateLimited { wait_secs });
        }

        self.store.record_attempt(now)?;
        Ok(())
    }
}
