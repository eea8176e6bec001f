use serde::{Deserialize, Serialize};

/// One saved playback snapshot, as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub playlist_name: String,
    #[serde(default)]
    pub context_type: String,
    #[serde(default)]
    pub link_to_context: String,
    #[serde(default, rename = "albumArtLargeURL")]
    pub album_art_large_url: String,
    #[serde(default, rename = "albumArtMediumURL")]
    pub album_art_medium_url: String,
    #[serde(default)]
    pub track_index: u32,
    #[serde(default)]
    pub total_tracks: u32,
    /// Position within the current track, milliseconds.
    #[serde(default)]
    pub progress: u64,
    /// Track length, milliseconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub shuffle_activated: bool,
    /// When this snapshot was taken, Unix seconds.
    #[serde(default)]
    pub suspended_at_ts: i64,
}

/// A slot paired with its server index, captured before display sorting.
///
/// `slot_number` is the value every write operation must use. It is only
/// stable until a deletion shifts the server's array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySlot {
    pub slot_number: usize,
    pub state: PlayerState,
}

/// Read-only reflection of one of the backend's live playback devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDevice {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "is_active")]
    pub active: bool,
    #[serde(default, rename = "is_restricted")]
    pub restricted: bool,
    #[serde(default, rename = "volume_percent")]
    pub volume_percent: u32,
}

#[cfg(test)]
impl PlayerState {
    pub(crate) fn suspended_at(ts: i64) -> Self {
        Self {
            track_name: String::new(),
            album_name: String::new(),
            artist_name: String::new(),
            playlist_name: String::new(),
            context_type: String::new(),
            link_to_context: String::new(),
            album_art_large_url: String::new(),
            album_art_medium_url: String::new(),
            track_index: 0,
            total_tracks: 0,
            progress: 0,
            duration: 0,
            shuffle_activated: false,
            suspended_at_ts: ts,
        }
    }
}
