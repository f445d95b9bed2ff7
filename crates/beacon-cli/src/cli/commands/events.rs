//! Events command handler.

use anyhow::Result;
use beacon_core::catalog::EVENTS;
use comfy_table::{ContentArrangement, Table};

/// Prints the event catalog as a table, in carousel order.
pub fn list(links: bool) -> Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["#", "Event", "Date", "Time", "Venue", "Discipline"];
    if links {
        header.push("Registration");
    }
    table.set_header(header);

    for event in EVENTS {
        let mut row = vec![
            event.id.to_string(),
            event.title.to_string(),
            event.date.to_string(),
            event.time.to_string(),
            event.venue.to_string(),
            event.discipline.to_string(),
        ];
        if links {
            row.push(event.registration_url.to_string());
        }
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
