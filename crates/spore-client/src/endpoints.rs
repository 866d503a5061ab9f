//! Catalog of every resource path exposed by the content service.
//!
//! Paths are relative to the service origin. Text segments (usernames, view
//! and asset-type tokens) are percent-encoded so caller input can never add or
//! remove path segments; numeric segments are written verbatim.

use crate::error::{Error, Result};
use crate::types::Page;

/// Minimum number of decimal digits an id needs for static-content sharding.
const SHARD_DIGITS: usize = 9;

/// A single logical operation together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/rest/stats`
    DailyStats,
    /// `/rest/creature/{assetId}`
    CreatureStats { asset_id: u64 },
    /// `/rest/user/{username}`
    ProfileInfo { username: &'a str },
    /// `/rest/assets/user/{username}/{start}/{len}`
    UserAssets { username: &'a str, page: Page },
    /// `/rest/assets/sporecast/{sporecastId}/{start}/{len}`
    SporecastAssets { sporecast_id: u64, page: Page },
    /// `/rest/achievements/{username}/{start}/{len}`
    UserAchievements { username: &'a str, page: Page },
    /// `/rest/asset/{assetId}`
    AssetInfo { asset_id: u64 },
    /// `/rest/comments/{assetId}/{start}/{len}`
    AssetComments { asset_id: u64, page: Page },
    /// `/rest/users/buddies/{username}/{start}/{len}`
    UserBuddies { username: &'a str, page: Page },
    /// `/rest/users/subscribers/{username}/{start}/{len}`
    UserSubscribers { username: &'a str, page: Page },
    /// `/rest/assets/search/{view}/{start}/{len}[/{assetType}]`
    Search {
        view: &'a str,
        page: Page,
        asset_type: Option<&'a str>,
    },
    /// `/static/model/{g1}/{g2}/{g3}/{id}.xml`
    ModelXml { asset_id: u64 },
    /// `/static/image/{g1}/{g2}/{g3}/{id}_lrg.png`
    LargeImage { asset_id: u64 },
    /// `/static/thumb/{g1}/{g2}/{g3}/{id}.png`
    Thumbnail { asset_id: u64 },
    /// `/atom/assets/user/{username}`
    UserAssetsFeed { username: &'a str },
    /// `/atom/events/user/{username}`
    UserEventsFeed { username: &'a str },
    /// `/atom/events/asset/{assetId}`
    AssetEventsFeed { asset_id: u64 },
    /// `/atom/sporecast/{sporecastId}`
    SporecastFeed { sporecast_id: u64 },
    /// `/atom/assets/view/{view}/{start}/{len}`
    SearchFeed { view: &'a str, page: Page },
}

impl Endpoint<'_> {
    /// Render the absolute path (leading `/`) for this endpoint.
    ///
    /// Fails only for the static-content endpoints, whose ids must have at
    /// least 9 digits.
    pub fn path(&self) -> Result<String> {
        let path = match *self {
            Endpoint::DailyStats => "/rest/stats".to_string(),
            Endpoint::CreatureStats { asset_id } => format!("/rest/creature/{asset_id}"),
            Endpoint::ProfileInfo { username } => format!("/rest/user/{}", segment(username)),
            Endpoint::UserAssets { username, page } => {
                format!("/rest/assets/user/{}/{}", segment(username), page)
            }
            Endpoint::SporecastAssets { sporecast_id, page } => {
                format!("/rest/assets/sporecast/{sporecast_id}/{page}")
            }
            Endpoint::UserAchievements { username, page } => {
                format!("/rest/achievements/{}/{}", segment(username), page)
            }
            Endpoint::AssetInfo { asset_id } => format!("/rest/asset/{asset_id}"),
            Endpoint::AssetComments { asset_id, page } => {
                format!("/rest/comments/{asset_id}/{page}")
            }
            Endpoint::UserBuddies { username, page } => {
                format!("/rest/users/buddies/{}/{}", segment(username), page)
            }
            Endpoint::UserSubscribers { username, page } => {
                format!("/rest/users/subscribers/{}/{}", segment(username), page)
            }
            Endpoint::Search {
                view,
                page,
                asset_type,
            } => {
                let mut path = format!("/rest/assets/search/{}/{}", segment(view), page);
                if let Some(asset_type) = asset_type {
                    path.push('/');
                    path.push_str(&segment(asset_type));
                }
                path
            }
            Endpoint::ModelXml { asset_id } => static_path("model", asset_id, ".xml")?,
            Endpoint::LargeImage { asset_id } => static_path("image", asset_id, "_lrg.png")?,
            Endpoint::Thumbnail { asset_id } => static_path("thumb", asset_id, ".png")?,
            Endpoint::UserAssetsFeed { username } => {
                format!("/atom/assets/user/{}", segment(username))
            }
            Endpoint::UserEventsFeed { username } => {
                format!("/atom/events/user/{}", segment(username))
            }
            Endpoint::AssetEventsFeed { asset_id } => format!("/atom/events/asset/{asset_id}"),
            Endpoint::SporecastFeed { sporecast_id } => format!("/atom/sporecast/{sporecast_id}"),
            Endpoint::SearchFeed { view, page } => {
                format!("/atom/assets/view/{}/{}", segment(view), page)
            }
        };
        Ok(path)
    }
}

/// Split an id into the three 3-digit directory groups used by static content.
///
/// `123456789012` becomes `["123", "456", "789"]`. Ids with fewer than 9
/// digits are rejected rather than padded.
pub fn shard(id: u64) -> Result<[String; 3]> {
    let digits = id.to_string();
    if digits.len() < SHARD_DIGITS {
        return Err(Error::InvalidAssetId(id));
    }
    Ok([
        digits[0..3].to_string(),
        digits[3..6].to_string(),
        digits[6..9].to_string(),
    ])
}

fn static_path(kind: &str, id: u64, suffix: &str) -> Result<String> {
    let [g1, g2, g3] = shard(id)?;
    Ok(format!("/static/{kind}/{g1}/{g2}/{g3}/{id}{suffix}"))
}

fn segment(raw: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(start: u32, length: u32) -> Page {
        Page::new(start, length)
    }

    #[test]
    fn test_rest_paths() {
        let cases = [
            (Endpoint::DailyStats, "/rest/stats"),
            (
                Endpoint::CreatureStats { asset_id: 500267423060 },
                "/rest/creature/500267423060",
            ),
            (
                Endpoint::ProfileInfo { username: "MaxisCactus" },
                "/rest/user/MaxisCactus",
            ),
            (
                Endpoint::UserAssets {
                    username: "MaxisCactus",
                    page: page(0, 10),
                },
                "/rest/assets/user/MaxisCactus/0/10",
            ),
            (
                Endpoint::SporecastAssets {
                    sporecast_id: 500190457259,
                    page: page(20, 5),
                },
                "/rest/assets/sporecast/500190457259/20/5",
            ),
            (
                Endpoint::UserAchievements {
                    username: "MaxisCactus",
                    page: page(0, 5),
                },
                "/rest/achievements/MaxisCactus/0/5",
            ),
            (
                Endpoint::AssetInfo { asset_id: 500267423060 },
                "/rest/asset/500267423060",
            ),
            (
                Endpoint::AssetComments {
                    asset_id: 500267423060,
                    page: page(0, 3),
                },
                "/rest/comments/500267423060/0/3",
            ),
            (
                Endpoint::UserBuddies {
                    username: "MaxisCactus",
                    page: page(0, 10),
                },
                "/rest/users/buddies/MaxisCactus/0/10",
            ),
            (
                Endpoint::UserSubscribers {
                    username: "MaxisCactus",
                    page: page(0, 10),
                },
                "/rest/users/subscribers/MaxisCactus/0/10",
            ),
        ];

        for (endpoint, expected) in cases {
            assert_eq!(endpoint.path().unwrap(), expected, "{endpoint:?}");
        }
    }

    #[test]
    fn test_search_paths() {
        let plain = Endpoint::Search {
            view: "NEWEST",
            page: page(0, 10),
            asset_type: None,
        };
        assert_eq!(plain.path().unwrap(), "/rest/assets/search/NEWEST/0/10");

        let typed = Endpoint::Search {
            view: "NEWEST",
            page: page(0, 10),
            asset_type: Some("CREATURE"),
        };
        assert_eq!(
            typed.path().unwrap(),
            "/rest/assets/search/NEWEST/0/10/CREATURE"
        );
    }

    #[test]
    fn test_static_paths_for_nine_digit_id() {
        assert_eq!(
            Endpoint::ModelXml { asset_id: 123456789 }.path().unwrap(),
            "/static/model/123/456/789/123456789.xml"
        );
        assert_eq!(
            Endpoint::LargeImage { asset_id: 123456789 }.path().unwrap(),
            "/static/image/123/456/789/123456789_lrg.png"
        );
        assert_eq!(
            Endpoint::Thumbnail { asset_id: 123456789 }.path().unwrap(),
            "/static/thumb/123/456/789/123456789.png"
        );
    }

    #[test]
    fn test_static_paths_for_twelve_digit_id() {
        assert_eq!(
            Endpoint::Thumbnail { asset_id: 500267423060 }.path().unwrap(),
            "/static/thumb/500/267/423/500267423060.png"
        );
    }

    #[test]
    fn test_short_id_rejected() {
        let err = Endpoint::ModelXml { asset_id: 12345678 }.path().unwrap_err();
        assert!(matches!(err, Error::InvalidAssetId(12345678)));
        assert!(shard(0).is_err());
    }

    #[test]
    fn test_feed_paths() {
        let cases = [
            (
                Endpoint::UserAssetsFeed { username: "MaxisCactus" },
                "/atom/assets/user/MaxisCactus",
            ),
            (
                Endpoint::UserEventsFeed { username: "MaxisCactus" },
                "/atom/events/user/MaxisCactus",
            ),
            (
                Endpoint::AssetEventsFeed { asset_id: 500267423060 },
                "/atom/events/asset/500267423060",
            ),
            (
                Endpoint::SporecastFeed { sporecast_id: 500190457259 },
                "/atom/sporecast/500190457259",
            ),
            (
                Endpoint::SearchFeed {
                    view: "TOP_RATED",
                    page: page(5, 15),
                },
                "/atom/assets/view/TOP_RATED/5/15",
            ),
        ];

        for (endpoint, expected) in cases {
            assert_eq!(endpoint.path().unwrap(), expected, "{endpoint:?}");
        }
    }

    #[test]
    fn test_username_is_percent_encoded() {
        let endpoint = Endpoint::ProfileInfo { username: "a b/c?" };
        assert_eq!(endpoint.path().unwrap(), "/rest/user/a%20b%2Fc%3F");
    }

    #[test]
    fn test_unknown_view_forwarded_verbatim() {
        let endpoint = Endpoint::Search {
            view: "NOT_A_VIEW",
            page: page(0, 1),
            asset_type: Some("BANANA"),
        };
        assert_eq!(
            endpoint.path().unwrap(),
            "/rest/assets/search/NOT_A_VIEW/0/1/BANANA"
        );
    }
}
