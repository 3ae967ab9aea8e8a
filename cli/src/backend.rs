//! HTTP backend handle for the four-endpoint chat surface.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use events::{ConnectReply, ServerEvent};

use crate::CliError;

/// Cheap-to-clone handle over one backend base URL.
#[derive(Clone, Debug)]
pub struct Backend {
    base_url: String,
    http: reqwest::Client,
}

impl Backend {
    /// Build a handle for `base_url` (trailing slashes tolerated).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue `POST /connect` for `username`.
    ///
    /// # Errors
    ///
    /// [`CliError::Rejected`] when the backend answers with a non-ok status
    /// field; [`CliError::Http`] when the request could not be completed.
    pub async fn connect(&self, username: &str) -> Result<(), CliError> {
        let reply = self
            .http
            .post(self.endpoint("/connect"))
            .json(&serde_json::json!({ "username": username }))
            .send()
            .await?
            .json::<ConnectReply>()
            .await?;

        if reply.is_ok() {
            Ok(())
        } else {
            Err(CliError::Rejected(reply.rejection().to_owned()))
        }
    }

    /// Issue a best-effort `POST /disconnect`; the response and any failure
    /// are ignored.
    pub async fn disconnect(&self) {
        let _ = self.http.post(self.endpoint("/disconnect")).send().await;
    }

    /// Issue `POST /send` with the raw outgoing text; the response body is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Http`] when the request could not be completed.
    pub async fn send_message(&self, text: &str) -> Result<(), CliError> {
        self.http
            .post(self.endpoint("/send"))
            .json(&serde_json::json!({ "message": text }))
            .send()
            .await?;
        Ok(())
    }

    /// Issue `GET /poll` and decode pending events in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::PollStatus`] on a non-success response,
    /// [`CliError::Http`] on transport failure, and [`CliError::Decode`]
    /// when the body is not an event array.
    pub async fn poll(&self) -> Result<Vec<ServerEvent>, CliError> {
        let response = self.http.get(self.endpoint("/poll")).send().await?;
        if !response.status().is_success() {
            return Err(CliError::PollStatus(response.status().as_u16()));
        }
        let body = response.json::<serde_json::Value>().await?;
        Ok(events::decode_events(&body)?)
    }
}
