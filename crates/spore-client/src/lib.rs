//! HTTP client SDK for the Spore content service.
//!
//! This crate provides a typed client for the service's REST, static-content
//! and Atom endpoints. Every document endpoint returns a parsed
//! [`XmlDocument`]; image endpoints are saved straight to disk.
//!
//! # Example
//!
//! ```no_run
//! use spore_client::{Page, SporeClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = SporeClient::builder()
//!     .base_url("http://www.spore.com")
//!     .build()?;
//!
//! // Profile and first page of creations
//! let profile = client.users().profile("MaxisCactus").await?;
//! println!("{profile}");
//!
//! let assets = client.users().assets("MaxisCactus", Page::new(0, 10)).await?;
//! for asset in assets.asset_summaries() {
//!     client
//!         .assets()
//!         .download_thumbnail(asset.id, format!("{}.png", asset.id))
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Stats**: daily service stats
//! - **Users**: profile, assets, achievements, buddies, subscribers
//! - **Assets**: info, creature stats, comments, search, model XML, images
//! - **Sporecasts**: asset listings
//! - **Feeds**: user assets/events, asset events, sporecast, search

pub mod api;
pub mod client;
pub mod document;
pub mod endpoints;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, SporeClient};
pub use document::{AssetSummary, XmlDocument};
pub use endpoints::{Endpoint, shard};
pub use error::{Error, Result};
pub use types::*;
