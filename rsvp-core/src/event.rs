//! Calendar event types.
//!
//! Events here are built on demand for link/document generation, never
//! stored. The celebration itself is a fixed instance; the RSVP-reminder
//! pseudo-event backs the calendar-prompt variant of the tentative path.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{RsvpError, RsvpResult};

/// Reminder offsets applied to every generated calendar artifact, in
/// minutes before the event start: one week and one day.
pub const REMINDER_MINUTES: [i64; 2] = [10080, 1440];

/// A calendar event with an inclusive time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    /// Build an event, rejecting a window that ends before it starts.
    pub fn new(
        title: &str,
        description: &str,
        location: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RsvpResult<Self> {
        if end < start {
            return Err(RsvpError::InvalidEventWindow);
        }

        Ok(CalendarEvent {
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            start,
            end,
        })
    }
}

/// The walima celebration: May 3rd 2025, 6:30 PM to 9:30 PM.
pub fn walima_event() -> CalendarEvent {
    CalendarEvent {
        title: "Mazin's Walima Celebration".to_string(),
        description: "Join us for our special day. Please adhere to islamic modesty \
                      principles. We are requesting no pictures to protect the privacy \
                      of bride, groom and other guests."
            .to_string(),
        location: "Muslim Educational Trust, 10330 SW Scholls Ferry Rd, Tigard, OR 97223"
            .to_string(),
        start: Utc.with_ymd_and_hms(2025, 5, 3, 18, 30, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2025, 5, 3, 21, 30, 0).unwrap(),
    }
}

/// Reminder pseudo-event offered on the tentative path: a short block two
/// weeks ahead of the celebration for replying to the invitation.
pub fn rsvp_reminder_event() -> CalendarEvent {
    CalendarEvent {
        title: "RSVP: Mazin's Walima Celebration".to_string(),
        description: "Reply to Mazin's walima invitation.".to_string(),
        location: String::new(),
        start: Utc.with_ymd_and_hms(2025, 4, 19, 17, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2025, 4, 19, 17, 30, 0).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_reversed_window() {
        let start = Utc.with_ymd_and_hms(2025, 5, 3, 21, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 5, 3, 18, 30, 0).unwrap();

        let result = CalendarEvent::new("Walima", "", "", start, end);
        assert!(matches!(result, Err(RsvpError::InvalidEventWindow)));
    }

    #[test]
    fn test_new_accepts_zero_length_window() {
        let at = Utc.with_ymd_and_hms(2025, 5, 3, 18, 30, 0).unwrap();
        assert!(CalendarEvent::new("Walima", "", "", at, at).is_ok());
    }

    #[test]
    fn test_fixed_events_are_well_formed() {
        for event in [walima_event(), rsvp_reminder_event()] {
            assert!(event.end >= event.start);
            assert!(!event.title.is_empty());
        }
    }
}
