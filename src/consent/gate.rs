use chrono::{DateTime, TimeZone, Utc};

use crate::error::ConsentError;

use super::store::{ConsentStore, StoredValue};
use super::{CONSENT_COOKIE_NAME, CONSENT_MAX_AGE_SECS, WITHDRAWN_MARKER};

/// Predicate and mutators over the single persisted consent decision.
///
/// Default-deny: no stored value means no consent. The gate never performs
/// network I/O; granting takes effect immediately for later `has_consent`
/// calls.
#[derive(Debug)]
pub struct ConsentGate<S> {
    store: S,
}

impl<S> ConsentGate<S>
where
    S: ConsentStore,
{
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// True iff a consent value exists and does not contain the withdrawal
    /// marker.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    pub fn has_consent(&self) -> Result<bool, ConsentError> {
        Ok(self
            .store
            .get(CONSENT_COOKIE_NAME)?
            .is_some_and(|entry| !entry.value.contains(WITHDRAWN_MARKER)))
    }

    /// Records consent as of now, with the ten-year retention window.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    pub fn grant(&mut self) -> Result<(), ConsentError> {
        let now = Utc::now().timestamp();
        self.store.set(
            CONSENT_COOKIE_NAME,
            StoredValue {
                value: now.to_string(),
                max_age_secs: Some(CONSENT_MAX_AGE_SECS),
            },
        )
    }

    /// Overwrites the consent value with the withdrawal marker.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    pub fn withdraw(&mut self) -> Result<(), ConsentError> {
        self.store.set(
            CONSENT_COOKIE_NAME,
            StoredValue {
                value: WITHDRAWN_MARKER.to_owned(),
                max_age_secs: None,
            },
        )
    }

    /// The grant time, when consent is present and parses as a timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    pub fn granted_at(&self) -> Result<Option<DateTime<Utc>>, ConsentError> {
        let Some(entry) = self.store.get(CONSENT_COOKIE_NAME)? else {
            return Ok(None);
        };
        if entry.value.contains(WITHDRAWN_MARKER) {
            return Ok(None);
        }
        let Ok(ts) = entry.value.parse::<i64>() else {
            return Ok(None);
        };
        Ok(Utc.timestamp_opt(ts, 0).single())
    }

    /// The raw value to replay as the consent cookie, when consent is
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    pub fn cookie_value(&self) -> Result<Option<String>, ConsentError> {
        Ok(self
            .store
            .get(CONSENT_COOKIE_NAME)?
            .filter(|entry| !entry.value.contains(WITHDRAWN_MARKER))
            .map(|entry| entry.value))
    }
}
