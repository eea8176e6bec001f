use std::io::BufRead;

use crate::error::AppResult;
use crate::session::ApiSession;
use crate::slots::SlotClient;
use crate::tour::Tour;

/// Drives the walkthrough interactively: the device snapshot decides the
/// branch once, then each step is printed and advanced on Enter.
pub(crate) async fn run_tour(session: &ApiSession) -> AppResult<()> {
    let devices = SlotClient::new(session).list_active_devices().await?;

    let mut tour = Tour::new();
    tour.start(!devices.is_empty());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(step) = tour.current() {
        println!();
        println!("== {} ==", step.title);
        if !step.anchor.is_empty() {
            println!("   (see: cassette {})", step.anchor);
        }
        println!("{}", step.text);
        println!("[Enter to continue, Ctrl-C to quit]");
        if lines.next().transpose()?.is_none() {
            // stdin closed; dismiss the rest of the run
            break;
        }
        tour.next();
    }
    println!("Tour finished.");
    Ok(())
}
