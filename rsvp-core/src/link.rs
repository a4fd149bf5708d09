//! Google Calendar deep links.

use url::Url;

use crate::error::{RsvpError, RsvpResult};
use crate::event::{CalendarEvent, REMINDER_MINUTES};

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Build a pre-filled Google Calendar event link.
///
/// The window is rendered as compact UTC timestamps and the two fixed
/// popup reminders ride along as `add` parameters. Pure: no clock, no IO.
pub fn google_calendar_link(event: &CalendarEvent) -> RsvpResult<String> {
    if event.end < event.start {
        return Err(RsvpError::InvalidEventWindow);
    }

    let dates = format!(
        "{}/{}",
        event.start.format("%Y%m%dT%H%M%SZ"),
        event.end.format("%Y%m%dT%H%M%SZ")
    );

    let mut url = Url::parse(RENDER_URL).expect("valid render URL");
    url.query_pairs_mut()
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &event.title)
        .append_pair("dates", &dates)
        .append_pair("details", &event.description)
        .append_pair("location", &event.location)
        .append_pair("add", &format!("POPUP={}", REMINDER_MINUTES[0]))
        .append_pair("add", &format!("POPUP={}", REMINDER_MINUTES[1]))
        .append_pair("sf", "true")
        .append_pair("output", "xml");

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::walima_event;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_walima_link_has_compact_utc_window() {
        let link = google_calendar_link(&walima_event()).unwrap();

        assert!(link.contains("20250503T183000Z"), "link: {}", link);
        assert!(link.contains("20250503T213000Z"), "link: {}", link);
    }

    #[test]
    fn test_walima_link_layout() {
        let link = google_calendar_link(&walima_event()).unwrap();

        assert!(link.starts_with("https://calendar.google.com/calendar/render?"));
        assert!(link.contains("action=TEMPLATE"));
        assert!(link.contains("text=Mazin%27s+Walima+Celebration"));
        assert!(link.contains("location=Muslim+Educational+Trust"));
    }

    #[test]
    fn test_walima_link_has_both_reminders() {
        let link = google_calendar_link(&walima_event()).unwrap();

        assert!(link.contains("10080"), "missing week reminder: {}", link);
        assert!(link.contains("1440"), "missing day reminder: {}", link);
        assert_eq!(link.matches("add=POPUP").count(), 2, "link: {}", link);
    }

    #[test]
    fn test_reversed_window_is_rejected() {
        let mut event = walima_event();
        event.end = Utc.with_ymd_and_hms(2025, 5, 3, 12, 0, 0).unwrap();

        assert!(matches!(
            google_calendar_link(&event),
            Err(RsvpError::InvalidEventWindow)
        ));
    }
}
