//! Atom feeds API.

use crate::client::SporeClient;
use crate::document::XmlDocument;
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::types::Page;

/// Feeds API client.
pub struct FeedsApi {
    client: SporeClient,
}

impl FeedsApi {
    pub(crate) fn new(client: SporeClient) -> Self {
        Self { client }
    }

    /// All assets of a user, with PNG and XML links.
    pub async fn user_assets(&self, username: &str) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::UserAssetsFeed { username })
            .await
    }

    /// Recent events for a user.
    pub async fn user_events(&self, username: &str) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::UserEventsFeed { username })
            .await
    }

    /// Recent events for an asset.
    pub async fn asset_events(&self, asset_id: u64) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::AssetEventsFeed { asset_id })
            .await
    }

    /// Assets in a sporecast with the date each was added.
    pub async fn sporecast(&self, sporecast_id: u64) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::SporecastFeed { sporecast_id })
            .await
    }

    /// Listing for a search view.
    pub async fn search(&self, view: impl AsRef<str>, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::SearchFeed {
                view: view.as_ref(),
                page,
            })
            .await
    }
}
