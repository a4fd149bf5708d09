//! The interactive RSVP flow.
//!
//! Renders each `ViewState` in turn and feeds the guest's actions back
//! into the flow. Submission happens through the core flow driver; this
//! module only prompts and prints.

use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use rsvp_core::config::AppConfig;
use rsvp_core::flow::{REDIRECT_DELAY, RsvpFlow, SubmitError, ViewState};
use rsvp_core::form::{FormBridge, HttpTransport};
use rsvp_core::gate::SubmissionGate;
use rsvp_core::record::FormFields;
use rsvp_core::state::FileAttemptStore;

use super::create_spinner;
use crate::render::{Render, fallback_line};

pub async fn run(honeypot: &str) -> Result<()> {
    let config = AppConfig::load()?;
    let store = FileAttemptStore::open_default()?;
    let mut flow = RsvpFlow::new(
        SubmissionGate::new(store),
        FormBridge::new(config.form.clone(), HttpTransport::new()),
        config.tentative_flow,
    );

    println!("{}", "Mazin Ashfaq's Walima Celebration".bold());
    println!();

    loop {
        match flow.state().clone() {
            ViewState::Choice => {
                let selection = Select::new()
                    .with_prompt("Will you be attending?")
                    .items(&["I'll be there", "Not sure yet", "Walima details", "Quit"])
                    .default(0)
                    .interact()?;

                match selection {
                    0 => flow.choose_attending(),
                    1 => flow.choose_unsure(),
                    2 => {
                        println!();
                        super::details::run()?;
                    }
                    _ => return Ok(()),
                }
            }

            ViewState::FormConfirmed(form) | ViewState::FormTentative(form) => {
                let confirmed = matches!(flow.state(), ViewState::FormConfirmed(_));
                if confirmed {
                    println!("{}", "Confirm your attendance".bold());
                    println!("We're excited to have you join us!");
                } else {
                    println!("{}", "Tentative RSVP".bold());
                    println!("We'll send you a reminder closer to the date");
                }

                if let Some(err) = &form.error {
                    println!();
                    println!("{}", err.render());
                    if matches!(err, SubmitError::Transport(_) | SubmitError::Config(_)) {
                        println!("{}", fallback_line(&config.contact_phone));
                    }
                }
                println!();

                let fields = prompt_fields(&form.fields, honeypot)?;

                let action = Select::new()
                    .items(&["Submit", "Back"])
                    .default(0)
                    .interact()?;

                if action == 1 {
                    flow.back();
                } else {
                    let spinner = create_spinner("Submitting your RSVP...".to_string());
                    flow.submit(fields).await;
                    spinner.finish_and_clear();
                }
            }

            ViewState::CalendarPrompt => {
                println!("No problem! Put an RSVP reminder on your calendar instead.");
                let selection = Select::new()
                    .with_prompt("Add a reminder")
                    .items(&["Google Calendar", "Download .ics file", "Back"])
                    .default(0)
                    .interact()?;

                match selection {
                    0 => super::calendar::open_reminder()?,
                    1 => super::calendar::write_reminder()?,
                    _ => flow.back(),
                }
            }

            // submit() settles in a final state before returning, so the
            // loop never observes an in-flight submission
            ViewState::Submitting => {}

            ViewState::Submitted => {
                println!("{}", "Thank you for your RSVP!".green());
                println!("Taking you to the walima details...");
                tokio::time::sleep(REDIRECT_DELAY).await;
                println!();
                super::details::run()?;
                return Ok(());
            }
        }

        println!();
    }
}

fn prompt_fields(previous: &FormFields, honeypot: &str) -> Result<FormFields> {
    let name: String = Input::new()
        .with_prompt("Full name")
        .with_initial_text(previous.name.as_str())
        .interact_text()?;

    let phone: String = Input::new()
        .with_prompt("Phone number")
        .with_initial_text(previous.phone.as_str())
        .interact_text()?;

    let party_size: String = Input::new()
        .with_prompt("Number of guests")
        .with_initial_text(previous.party_size.as_str())
        .interact_text()?;

    Ok(FormFields {
        name,
        phone,
        party_size,
        honeypot: honeypot.to_string(),
    })
}
