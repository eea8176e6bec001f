//! Command executors behind the CLI surface.
mod render;
mod tour_walk;

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::info;

use crate::args::ConsentAction;
use crate::consent::{ConsentGate, ConsentStore};
use crate::error::{AppError, AppResult, ValidationError};
use crate::session::ApiSession;
use crate::slots::SlotClient;

pub(crate) use tour_walk::run_tour;

pub(crate) async fn run_devices(session: &ApiSession) -> AppResult<()> {
    let devices = SlotClient::new(session).list_active_devices().await?;
    render::print_devices(&devices);
    Ok(())
}

pub(crate) async fn run_list(session: &ApiSession) -> AppResult<()> {
    let slots = SlotClient::new(session).list_slots().await?;
    render::print_slots(&slots);
    Ok(())
}

pub(crate) async fn run_suspend(session: &ApiSession) -> AppResult<()> {
    SlotClient::new(session).store_new_slot().await?;
    info!("Stored the current player state in a new slot.");
    run_list(session).await
}

pub(crate) async fn run_overwrite(session: &ApiSession, slot: usize) -> AppResult<()> {
    SlotClient::new(session).update_slot(slot).await?;
    info!(slot, "Overwrote the slot with the current player state.");
    run_list(session).await
}

pub(crate) async fn run_delete(session: &ApiSession, slot: usize) -> AppResult<()> {
    SlotClient::new(session).delete_slot(slot).await?;
    info!(slot, "Removed the slot.");
    run_list(session).await
}

pub(crate) async fn run_resume(
    session: &ApiSession,
    slot: usize,
    device: Option<&str>,
) -> AppResult<()> {
    SlotClient::new(session).restore_slot(slot, device).await?;
    info!(slot, "Resumed playback from the slot.");
    Ok(())
}

pub(crate) async fn run_export(session: &ApiSession, output: Option<&Path>) -> AppResult<()> {
    let data = SlotClient::new(session).export_user_data().await?;
    let rendered = serde_json::to_string_pretty(&data)?;
    let Some(path) = output else {
        println!("{}", rendered);
        return Ok(());
    };
    std::fs::write(path, rendered)?;
    info!(path = %path.display(), "Wrote the exported data.");
    Ok(())
}

pub(crate) async fn run_erase<S>(
    session: &ApiSession,
    gate: &mut ConsentGate<S>,
    yes: bool,
) -> AppResult<()>
where
    S: ConsentStore,
{
    if !yes && !confirm_erase()? {
        return Err(AppError::validation(ValidationError::EraseNotConfirmed));
    }
    SlotClient::new(session).erase_user_data().await?;
    // The server no longer holds anything; drop the local grant as well.
    gate.withdraw()?;
    println!("All your data has been removed from the server; consent withdrawn.");
    Ok(())
}

pub(crate) fn run_consent<S>(gate: &mut ConsentGate<S>, action: &ConsentAction) -> AppResult<()>
where
    S: ConsentStore,
{
    match action {
        ConsentAction::Grant => {
            gate.grant()?;
            println!("Consent recorded.");
        }
        ConsentAction::Withdraw => {
            gate.withdraw()?;
            println!("Consent withdrawn. Run 'cassette erase' to also remove server-side data.");
        }
        ConsentAction::Status => {
            if gate.has_consent()? {
                let granted = gate
                    .granted_at()?
                    .map_or_else(|| "an unknown time".to_owned(), render::format_timestamp);
                println!("Consent granted at {}.", granted);
            } else {
                println!("Consent not given.");
            }
        }
    }
    Ok(())
}

fn confirm_erase() -> AppResult<bool> {
    print!("This removes ALL your data from the server. Type 'yes' to continue: ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
