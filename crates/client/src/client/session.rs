//! Attaching credentials to outgoing requests.

use reqwest::RequestBuilder;

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;

impl SplunkClient {
    /// Add the `Authorization` header for the configured strategy.
    ///
    /// Session auth logs in on first use; concurrent callers wait on the
    /// session lock and reuse the key.
    pub(crate) async fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let credential = self
            .session_manager
            .credential(|username, password| {
                endpoints::login(&self.http, &self.base_url, username, password)
            })
            .await?;
        Ok(credential.apply(builder))
    }

    /// Log in now instead of on the first request. No-op for other strategies.
    pub async fn login(&self) -> Result<()> {
        if self.session_manager.uses_login() {
            self.session_manager.clear_session().await;
            self.session_manager
                .credential(|username, password| {
                    endpoints::login(&self.http, &self.base_url, username, password)
                })
                .await?;
        }
        Ok(())
    }
}
