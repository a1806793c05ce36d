pub mod asset_url;
pub mod photo_pairing;

pub use asset_url::AssetUrlHelper;
