//! ICS document generation.

use chrono::{Duration, Utc};
use icalendar::{Alarm, Calendar, Component, EventLike, Property, Trigger};

use crate::error::{RsvpError, RsvpResult};
use crate::event::{CalendarEvent, REMINDER_MINUTES};

/// Generate a single-event .ics document with the two fixed reminders.
///
/// Everything except DTSTAMP is deterministic for a given event; DTSTAMP
/// carries wall-clock generation time as RFC 5545 requires.
pub fn generate_ics(event: &CalendarEvent) -> RsvpResult<String> {
    if event.end < event.start {
        return Err(RsvpError::InvalidEventWindow);
    }

    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@walima-rsvp", slug::slugify(&event.title)));
    ics_event.summary(&event.title);

    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    ics_event.add_property("DTSTART", event.start.format("%Y%m%dT%H%M%SZ").to_string());
    ics_event.add_property("DTEND", event.end.format("%Y%m%dT%H%M%SZ").to_string());

    ics_event.description(&event.description);
    if !event.location.is_empty() {
        ics_event.location(&event.location);
    }

    ics_event.add_property("STATUS", "CONFIRMED");
    ics_event.add_property("SEQUENCE", "0");

    // One VALARM per reminder offset, each a display alarm echoing the title
    for minutes in REMINDER_MINUTES {
        let trigger = Trigger::before_start(Duration::minutes(minutes));
        let alarm = Alarm::display(&format!("Reminder: {}", event.title), trigger);
        ics_event.alarm(alarm);
    }

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    Ok(normalize_ics(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with this application's identifier
/// - Remove DTSTAMP and UID inside VALARM sections (not required by RFC 5545)
/// - Drop the RELATED=START trigger parameter (START is the RFC default)
fn normalize_ics(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:-//Walima RSVP//EN\r\n");
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        if let Some(value) = line.strip_prefix("TRIGGER;RELATED=START:") {
            result.push_str("TRIGGER:");
            result.push_str(value);
            result.push_str("\r\n");
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Suggested filename for a downloaded document: whitespace runs become
/// underscores, plus the .ics suffix.
pub fn ics_filename(title: &str) -> String {
    let stem: Vec<&str> = title.split_whitespace().collect();
    format!("{}.ics", stem.join("_"))
}
