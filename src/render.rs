//! Terminal rendering for core types.
//!
//! Extension trait adding colored output to rsvp-core types, keeping
//! owo_colors out of the core crate.

use owo_colors::OwoColorize;
use rsvp_core::flow::SubmitError;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for SubmitError {
    fn render(&self) -> String {
        match self {
            // Waiting out the window is routine, not alarming
            SubmitError::RateLimited { .. } => self.to_string().yellow().to_string(),
            _ => self.to_string().red().to_string(),
        }
    }
}

/// Manual escape hatch shown under errors that block the online path.
pub fn fallback_line(contact_phone: &str) -> String {
    format!("Please text {} to RSVP instead", contact_phone)
}
