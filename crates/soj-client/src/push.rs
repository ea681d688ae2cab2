//! Push-notification registration endpoints.
//!
//! The backend expects camelCase field names on these payloads.

use serde::Serialize;

use crate::ApiClient;
use crate::error::ApiError;
use crate::http::check_response;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterPayload<'a> {
    token: &'a str,
    platform: &'a str,
    device_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnregisterPayload<'a> {
    token: &'a str,
    device_id: &'a str,
}

impl ApiClient {
    /// `POST /noti/push/register` — register a device push token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn register_push(
        &self,
        token: &str,
        platform: &str,
        device_id: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/noti/push/register", self.base_url());
        let resp = self
            .post(&url)
            .json(&RegisterPayload {
                token,
                platform,
                device_id,
            })
            .send()
            .await?;
        check_response(resp).await?;
        tracing::debug!(device_id, platform, "push token registered");
        Ok(())
    }

    /// `POST /noti/push/unregister` — drop a device push token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn unregister_push(&self, token: &str, device_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/noti/push/unregister", self.base_url());
        let resp = self
            .post(&url)
            .json(&UnregisterPayload { token, device_id })
            .send()
            .await?;
        check_response(resp).await?;
        tracing::debug!(device_id, "push token unregistered");
        Ok(())
    }
}
