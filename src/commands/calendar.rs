//! Calendar link and file commands.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use rsvp_core::event::CalendarEvent;
use rsvp_core::ics::{generate_ics, ics_filename};
use rsvp_core::link::google_calendar_link;
use rsvp_core::{rsvp_reminder_event, walima_event};

/// Open a pre-filled Google Calendar event for the celebration.
pub fn google() -> Result<()> {
    open_in_browser(&walima_event())
}

/// Write the celebration .ics for Apple Calendar and friends.
pub fn ics(out: Option<PathBuf>) -> Result<()> {
    write_ics(&walima_event(), out)
}

/// RSVP-reminder variants used by the tentative calendar prompt.
pub fn open_reminder() -> Result<()> {
    open_in_browser(&rsvp_reminder_event())
}

pub fn write_reminder() -> Result<()> {
    write_ics(&rsvp_reminder_event(), None)
}

fn open_in_browser(event: &CalendarEvent) -> Result<()> {
    let url = google_calendar_link(event)?;

    if open::that(&url).is_err() {
        println!("Open this URL in your browser:");
        println!("{}", url);
    } else {
        println!(
            "{}",
            format!("Opened Google Calendar for: {}", event.title).green()
        );
    }

    Ok(())
}

// Best effort, like a browser download: a failed write is reported but
// never fails the process.
fn write_ics(event: &CalendarEvent, out: Option<PathBuf>) -> Result<()> {
    let document = generate_ics(event)?;
    let path = out.unwrap_or_else(|| PathBuf::from(ics_filename(&event.title)));

    match std::fs::write(&path, &document) {
        Ok(()) => println!("{}", format!("Wrote {}", path.display()).green()),
        Err(e) => eprintln!(
            "{}",
            format!("Could not write {}: {}", path.display(), e).red()
        ),
    }

    Ok(())
}
