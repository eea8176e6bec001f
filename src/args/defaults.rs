use std::path::PathBuf;

/// Default location of the local consent store:
/// `~/.cassette/consent.json`, falling back to the working directory when no
/// home directory is known.
#[must_use]
pub fn default_consent_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".cassette").join("consent.json"),
        |home| PathBuf::from(home).join(".cassette").join("consent.json"),
    )
}
