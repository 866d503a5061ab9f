//! Sporecasts API.

use crate::client::SporeClient;
use crate::document::XmlDocument;
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::types::Page;

/// Sporecasts API client.
pub struct SporecastsApi {
    client: SporeClient,
}

impl SporecastsApi {
    pub(crate) fn new(client: SporeClient) -> Self {
        Self { client }
    }

    /// Assets contained in a sporecast.
    pub async fn assets(&self, sporecast_id: u64, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::SporecastAssets { sporecast_id, page })
            .await
    }
}
