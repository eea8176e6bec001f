use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing server URL (set --server, CASSETTE_SERVER, or provide in config).")]
    MissingServerUrl,
    #[error("Consent has not been given yet. Run 'cassette consent grant' first.")]
    ConsentRequired,
    #[error("Request timeout must be > 0 seconds.")]
    TimeoutZero,
    #[error("Aborted: erase was not confirmed.")]
    EraseNotConfirmed,
}
