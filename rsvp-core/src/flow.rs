//! The guest-facing RSVP flow.
//!
//! A tagged state per view, so invalid combinations (an error on the
//! confirmation screen, form values while choosing) cannot be
//! represented. The flow owns the submission gate and the form bridge;
//! the host renders states and feeds user actions back in.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RsvpError;
use crate::form::{FormBridge, Transport};
use crate::gate::{self, AttemptStore, SubmissionGate};
use crate::record::{FormFields, RsvpStatus};

/// Pause between the completion signal and showing the confirmation.
pub const COMPLETION_DEBOUNCE: Duration = Duration::from_millis(200);

/// How long the confirmation stays up before the host navigates away.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Which view the "not sure yet" choice leads to. Product configuration:
/// either a tentative-RSVP form or a calendar-reminder prompt, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TentativeFlow {
    #[default]
    Form,
    CalendarPrompt,
}

/// A recoverable submission failure, attached to the form it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    RateLimited { wait_secs: u64 },
    InvalidField(String),
    Transport(String),
    Config(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::RateLimited { wait_secs } => {
                write!(f, "Please wait {}s before submitting again.", wait_secs)
            }
            SubmitError::InvalidField(message) => write!(f, "{}.", message),
            SubmitError::Transport(_) => write!(
                f,
                "An unexpected error occurred. Please try again or contact the event organizer."
            ),
            SubmitError::Config(_) => {
                write!(f, "Configuration error. Please contact the event organizer.")
            }
        }
    }
}

impl From<RsvpError> for SubmitError {
    fn from(err: RsvpError) -> Self {
        match err {
            RsvpError::RateLimited { wait_secs } => SubmitError::RateLimited { wait_secs },
            RsvpError::InvalidField(message) => SubmitError::InvalidField(message),
            RsvpError::Config(message) => SubmitError::Config(message),
            other => SubmitError::Transport(other.to_string()),
        }
    }
}

/// A form view: the values entered so far and, after a failed attempt,
/// the error to display. Values survive a denial so the guest never
/// retypes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub error: Option<SubmitError>,
}

/// The view the guest is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Choice,
    FormConfirmed(FormState),
    FormTentative(FormState),
    Submitting,
    Submitted,
    CalendarPrompt,
}

/// Drives a guest from choice to confirmation.
pub struct RsvpFlow<S: AttemptStore, T: Transport> {
    state: ViewState,
    gate: SubmissionGate<S>,
    bridge: FormBridge<T>,
    tentative_flow: TentativeFlow,
}

impl<S: AttemptStore, T: Transport> RsvpFlow<S, T> {
    pub fn new(
        gate: SubmissionGate<S>,
        bridge: FormBridge<T>,
        tentative_flow: TentativeFlow,
    ) -> Self {
        RsvpFlow {
            state: ViewState::Choice,
            gate,
            bridge,
            tentative_flow,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn gate(&self) -> &SubmissionGate<S> {
        &self.gate
    }

    /// "I'll be there"
    pub fn choose_attending(&mut self) {
        if self.state == ViewState::Choice {
            self.state = ViewState::FormConfirmed(FormState::default());
        }
    }

    /// "Not sure yet" - successor view depends on product configuration.
    pub fn choose_unsure(&mut self) {
        if self.state == ViewState::Choice {
            self.state = match self.tentative_flow {
                TentativeFlow::Form => ViewState::FormTentative(FormState::default()),
                TentativeFlow::CalendarPrompt => ViewState::CalendarPrompt,
            };
        }
    }

    /// Back to the choice view. Entered values are discarded; `Submitting`
    /// and `Submitted` have no way back.
    pub fn back(&mut self) {
        if matches!(
            self.state,
            ViewState::FormConfirmed(_) | ViewState::FormTentative(_) | ViewState::CalendarPrompt
        ) {
            self.state = ViewState::Choice;
        }
    }

    /// Drive a submission from the current form view.
    ///
    /// Settles in `Submitted`, or back in the originating form with an
    /// error attached and the entered values preserved. While the future
    /// is pending the flow sits in `Submitting`, which has no
    /// user-triggered exits; dropping the future discards the attempt.
    pub async fn submit(&mut self, fields: FormFields) -> &ViewState {
        self.submit_at(fields, Utc::now()).await
    }

    async fn submit_at(&mut self, fields: FormFields, now: DateTime<Utc>) -> &ViewState {
        let status = match &self.state {
            ViewState::FormConfirmed(_) => RsvpStatus::Confirmed,
            ViewState::FormTentative(_) => RsvpStatus::Tentative,
            _ => return &self.state,
        };

        self.state = ViewState::Submitting;

        // Trapped submissions are absorbed: fake the round trip, send
        // nothing, report success so the sender learns nothing.
        if gate::is_bot_trap(&fields.honeypot) {
            self.bridge.absorb_bot().await;
            tokio::time::sleep(COMPLETION_DEBOUNCE).await;
            self.state = ViewState::Submitted;
            return &self.state;
        }

        let record = match fields.to_record(status) {
            Ok(record) => record,
            Err(err) => return self.fail_back(status, fields, err),
        };

        // Record-then-act: the gate stamps the attempt before the wire
        // call, closing the window a slow round trip would leave open.
        if let Err(err) = self.gate.try_acquire(now) {
            return self.fail_back(status, fields, err);
        }

        match self.bridge.submit(&record).await {
            Ok(()) => {
                tokio::time::sleep(COMPLETION_DEBOUNCE).await;
                self.state = ViewState::Submitted;
            }
            Err(err) => {
                self.fail_back(status, fields, err);
            }
        }

        &self.state
    }

    fn fail_back(
        &mut self,
        status: RsvpStatus,
        fields: FormFields,
        err: RsvpError,
    ) -> &ViewState {
        let form = FormState {
            fields,
            error: Some(SubmitError::from(err)),
        };

        self.state = match status {
            RsvpStatus::Confirmed => ViewState::FormConfirmed(form),
            RsvpStatus::Tentative => ViewState::FormTentative(form),
        };

        &self.state
    }
}
