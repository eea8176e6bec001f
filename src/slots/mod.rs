//! Slot repository client.
//!
//! Slots are server-held playback snapshots addressed by their position in
//! the server's array. The client re-sorts them for display (most recently
//! suspended first) but keeps the server index attached, since every write
//! operation must address the server's ordering, not the displayed one.
mod client;
mod projection;
mod types;


pub use client::SlotClient;
pub use projection::project_display_order;
pub use types::{ActiveDevice, DisplaySlot, PlayerState};
