//! Assets API.

use std::path::Path;

use crate::client::SporeClient;
use crate::document::XmlDocument;
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::types::Page;

/// Assets API client.
pub struct AssetsApi {
    client: SporeClient,
}

impl AssetsApi {
    pub(crate) fn new(client: SporeClient) -> Self {
        Self { client }
    }

    /// Name, description, tags, latest comments, type, parent, rating,
    /// creation date and author of an asset.
    pub async fn info(&self, asset_id: u64) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::AssetInfo { asset_id })
            .await
    }

    /// Height, diet, abilities and other stats of a creature.
    pub async fn creature_stats(&self, asset_id: u64) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::CreatureStats { asset_id })
            .await
    }

    /// Comments, sender names and comment dates.
    pub async fn comments(&self, asset_id: u64, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::AssetComments { asset_id, page })
            .await
    }

    /// List creations for a view.
    pub async fn search(&self, view: impl AsRef<str>, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::Search {
                view: view.as_ref(),
                page,
                asset_type: None,
            })
            .await
    }

    /// List creations of one asset type for a view.
    pub async fn search_by_type(
        &self,
        view: impl AsRef<str>,
        page: Page,
        asset_type: impl AsRef<str>,
    ) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::Search {
                view: view.as_ref(),
                page,
                asset_type: Some(asset_type.as_ref()),
            })
            .await
    }

    /// The model XML of an asset.
    pub async fn model_xml(&self, asset_id: u64) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::ModelXml { asset_id })
            .await
    }

    /// Save the model XML of an asset exactly as served.
    ///
    /// Unlike [`model_xml`](Self::model_xml) the body is not parsed, so
    /// comments and formatting survive.
    pub async fn download_model_xml(&self, asset_id: u64, dest: impl AsRef<Path>) -> Result<u64> {
        self.client
            .download(Endpoint::ModelXml { asset_id }, dest.as_ref())
            .await
    }

    /// Save the large PNG of an asset (viewing only, not usable in game).
    pub async fn download_large_image(&self, asset_id: u64, dest: impl AsRef<Path>) -> Result<u64> {
        self.client
            .download(Endpoint::LargeImage { asset_id }, dest.as_ref())
            .await
    }

    /// Save the thumbnail PNG of an asset, which embeds the in-game model.
    pub async fn download_thumbnail(&self, asset_id: u64, dest: impl AsRef<Path>) -> Result<u64> {
        self.client
            .download(Endpoint::Thumbnail { asset_id }, dest.as_ref())
            .await
    }
}
