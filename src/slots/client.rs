use reqwest::{Method, Url};

use crate::error::ApiError;
use crate::session::ApiSession;

use super::projection::project_display_order;
use super::types::{ActiveDevice, DisplaySlot, PlayerState};

/// CRUD and restore operations over the server's ordered slot collection.
///
/// Every operation goes through the session's CSRF-bearing transport. No
/// retries and no optimistic local state: after a write the caller re-fetches
/// to observe the result.
#[derive(Debug)]
pub struct SlotClient<'session> {
    session: &'session ApiSession,
}

impl<'session> SlotClient<'session> {
    #[must_use]
    pub const fn new(session: &'session ApiSession) -> Self {
        Self { session }
    }

    /// Lists the backend's live playback devices, untransformed.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable response.
    pub async fn list_active_devices(&self) -> Result<Vec<ActiveDevice>, ApiError> {
        let url = self.session.endpoint(&["activeDevices"])?;
        let response = self.session.execute(Method::GET, url.clone()).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::DecodeFailed {
                url: url.to_string(),
                source: err,
            })
    }

    /// Fetches the raw slot array and applies the display projection.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable response.
    pub async fn list_slots(&self) -> Result<Vec<DisplaySlot>, ApiError> {
        let url = self.session.endpoint(&["playerStates"])?;
        let response = self.session.execute(Method::GET, url.clone()).await?;
        let raw: Vec<PlayerState> =
            response
                .json()
                .await
                .map_err(|err| ApiError::DecodeFailed {
                    url: url.to_string(),
                    source: err,
                })?;
        Ok(project_display_order(raw))
    }

    /// Appends a new slot from the current live playback. The new slot is
    /// only observable through a subsequent [`Self::list_slots`].
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn store_new_slot(&self) -> Result<(), ApiError> {
        let url = self.session.endpoint(&["playerStates"])?;
        self.session.execute(Method::POST, url).await?;
        Ok(())
    }

    /// Overwrites the slot at the given server index with the current live
    /// playback state.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn update_slot(&self, slot_number: usize) -> Result<(), ApiError> {
        let url = self
            .session
            .endpoint(&["playerStates", &slot_number.to_string()])?;
        self.session.execute(Method::PUT, url).await?;
        Ok(())
    }

    /// Removes the slot at the given server index. All later indices shift
    /// down by one on the server; stale numbers above the deleted slot must
    /// not be reused without a re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_slot(&self, slot_number: usize) -> Result<(), ApiError> {
        let url = self
            .session
            .endpoint(&["playerStates", &slot_number.to_string()])?;
        self.session.execute(Method::DELETE, url).await?;
        Ok(())
    }

    /// Resumes playback from the slot at the given server index, optionally
    /// on a specific device.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn restore_slot(
        &self,
        slot_number: usize,
        device_id: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self.restore_url(slot_number, device_id)?;
        self.session.execute(Method::POST, url).await?;
        Ok(())
    }

    /// Downloads everything the backend stores about the user, as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable response.
    pub async fn export_user_data(&self) -> Result<serde_json::Value, ApiError> {
        let url = self.session.endpoint(&["you"])?;
        let response = self.session.execute(Method::GET, url.clone()).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::DecodeFailed {
                url: url.to_string(),
                source: err,
            })
    }

    /// Erases all data the backend holds about the user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn erase_user_data(&self) -> Result<(), ApiError> {
        let url = self.session.endpoint(&["you"])?;
        self.session.execute(Method::DELETE, url).await?;
        Ok(())
    }

    pub(crate) fn restore_url(
        &self,
        slot_number: usize,
        device_id: Option<&str>,
    ) -> Result<Url, ApiError> {
        let mut url =
            self.session
                .endpoint(&["playerStates", &slot_number.to_string(), "restore"])?;
        if let Some(device_id) = device_id {
            url.query_pairs_mut().append_pair("deviceID", device_id);
        }
        Ok(url)
    }
}
