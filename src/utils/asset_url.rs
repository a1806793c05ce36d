use crate::config::AssetsConfig;

/// Builds public URLs for stored assets (avatars, plan images).
#[derive(Clone, Debug)]
pub struct AssetUrlHelper {
    base_url: String,
    base_url_with_slash: String,
}

impl AssetUrlHelper {
    pub fn new(assets_config: &AssetsConfig) -> Self {
        let base_url = assets_config.base_url.clone();
        let base_url_with_slash = if base_url.ends_with('/') {
            base_url.clone()
        } else {
            format!("{}/", base_url)
        };

        Self {
            base_url,
            base_url_with_slash,
        }
    }

    pub fn build_url(&self, path: &str) -> String {
        let clean_path = path.trim_start_matches('/');
        format!("{}{}", self.base_url_with_slash, clean_path)
    }

    /// Absolute URLs pass through untouched, relative paths get the asset
    /// base prefixed.
    pub fn process_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with(&self.base_url) {
            url.to_string()
        } else {
            self.build_url(url)
        }
    }
}
