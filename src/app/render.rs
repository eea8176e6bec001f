use chrono::{DateTime, TimeZone, Utc};

use crate::slots::{ActiveDevice, DisplaySlot};

pub(crate) fn print_devices(devices: &[ActiveDevice]) {
    if devices.is_empty() {
        println!("No active devices. Make sure your player is currently playing.");
        return;
    }
    println!("{:<24} {:<12} {:>6}  ID", "NAME", "TYPE", "VOL%");
    for device in devices {
        println!(
            "{:<24} {:<12} {:>6}  {}",
            device.name, device.kind, device.volume_percent, device.id
        );
    }
}

pub(crate) fn print_slots(slots: &[DisplaySlot]) {
    if slots.is_empty() {
        println!("No slots yet. Run 'cassette suspend' while something is playing.");
        return;
    }
    println!(
        "{:>4}  {:<28} {:<24} {:<20} {:>13}  SUSPENDED",
        "SLOT", "TRACK", "ALBUM/PLAYLIST", "ARTIST", "POSITION"
    );
    for slot in slots {
        let state = &slot.state;
        let context = if state.playlist_name.is_empty() {
            &state.album_name
        } else {
            &state.playlist_name
        };
        println!(
            "{:>4}  {:<28} {:<24} {:<20} {:>13}  {}",
            slot.slot_number,
            truncate(&state.track_name, 28),
            truncate(context, 24),
            truncate(&state.artist_name, 20),
            format_position(state.progress, state.duration),
            format_epoch(state.suspended_at_ts),
        );
    }
}

pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn format_epoch(ts: i64) -> String {
    Utc.timestamp_opt(ts, 0)
        .single()
        .map_or_else(|| "-".to_owned(), format_timestamp)
}

/// `mm:ss / mm:ss` from millisecond positions.
fn format_position(progress_ms: u64, duration_ms: u64) -> String {
    format!("{} / {}", mmss(progress_ms), mmss(duration_ms))
}

fn mmss(ms: u64) -> String {
    let total_secs = ms.checked_div(1000).unwrap_or(0);
    let mins = total_secs.checked_div(60).unwrap_or(0);
    let secs = total_secs.checked_rem(60).unwrap_or(0);
    format!("{}:{:02}", mins, secs)
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    let kept: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_formats_as_minutes_and_seconds() -> Result<(), String> {
        let rendered = format_position(93_000, 1_260_000);
        if rendered != "1:33 / 21:00" {
            return Err(format!("Unexpected position: {}", rendered));
        }
        Ok(())
    }

    #[test]
    fn truncate_keeps_short_values() -> Result<(), String> {
        if truncate("short", 10) != "short" {
            return Err("Expected short values untouched".to_owned());
        }
        let long = truncate("a very long track title indeed", 10);
        if long.chars().count() != 10 {
            return Err(format!("Unexpected truncation: {}", long));
        }
        Ok(())
    }

    #[test]
    fn epoch_zero_is_renderable() -> Result<(), String> {
        if format_epoch(0) != "1970-01-01 00:00 UTC" {
            return Err(format!("Unexpected render: {}", format_epoch(0)));
        }
        Ok(())
    }
}
