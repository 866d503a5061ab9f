//! Users API.

use crate::client::SporeClient;
use crate::document::XmlDocument;
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::types::Page;

/// Users API client.
pub struct UsersApi {
    client: SporeClient,
}

impl UsersApi {
    pub(crate) fn new(client: SporeClient) -> Self {
        Self { client }
    }

    /// Profile pic, tagline, user id and creation date for a username.
    pub async fn profile(&self, username: &str) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::ProfileInfo { username })
            .await
    }

    /// Id, name, creation date, type, parent and rating of assets created by a user.
    pub async fn assets(&self, username: &str, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::UserAssets { username, page })
            .await
    }

    /// Achievement count plus achievement ids and unlock dates.
    pub async fn achievements(&self, username: &str, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::UserAchievements { username, page })
            .await
    }

    /// Buddy names and ids, with the total buddy count.
    pub async fn buddies(&self, username: &str, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::UserBuddies { username, page })
            .await
    }

    /// Users who have added this username as a buddy.
    pub async fn subscribers(&self, username: &str, page: Page) -> Result<XmlDocument> {
        self.client
            .get_document(Endpoint::UserSubscribers { username, page })
            .await
    }
}
