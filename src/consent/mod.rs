//! Consent gate and its persistence backends.
//!
//! All data access is gated behind an explicit consent decision. The decision
//! is a single persisted value: a grant timestamp (Unix seconds) or the
//! withdrawal marker. Absence of the value means no consent was ever given.
mod gate;
mod store;


pub use gate::ConsentGate;
pub use store::{ConsentStore, FileStore, MemoryStore, StoredValue};

/// Key the consent decision is stored under; doubles as the cookie name the
/// backend's consent middleware looks for.
pub const CONSENT_COOKIE_NAME: &str = "cassette_consent";

/// Marker value written on withdrawal.
pub const WITHDRAWN_MARKER: &str = "OPTED_OUT";

/// 10 years, keep this in sync with the backend's consent middleware.
pub const CONSENT_MAX_AGE_SECS: u64 = 315_360_000;
