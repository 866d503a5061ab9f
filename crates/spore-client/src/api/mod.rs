//! API endpoint implementations.

mod assets;
mod feeds;
mod sporecasts;
mod users;

pub use assets::AssetsApi;
pub use feeds::FeedsApi;
pub use sporecasts::SporecastsApi;
pub use users::UsersApi;
