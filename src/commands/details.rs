//! The celebration-details view.

use anyhow::Result;
use owo_colors::OwoColorize;
use rsvp_core::config::AppConfig;
use rsvp_core::walima_event;

pub fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let event = walima_event();

    println!("{}", "Mr. and Mrs. Ashfaq's Wedding Celebration".bold());
    println!("Join us on our special day");
    println!();

    println!(
        "  Date   {}",
        event.start.format("%A, %B %-d, %Y")
    );
    println!(
        "  Time   {} - Walima start",
        event.start.format("%-I:%M %p")
    );
    println!("  Venue  {}", event.location);
    println!("  Gifts  Your presence is the greatest gift of all.");
    println!();

    println!("{}", "Additional notes".bold());
    println!("  - Please adhere to islamic modesty principles");
    println!("  - We are requesting no pictures to protect the privacy of bride,");
    println!("    groom and other guests.");
    println!("  - Please arrive on time.");
    println!();

    println!(
        "Add to calendar: {} | {}",
        "rsvp calendar google".cyan(),
        "rsvp calendar ics".cyan()
    );
    println!("Questions? Text {}", config.contact_phone);

    Ok(())
}
