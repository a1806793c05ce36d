pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod services;
pub mod utils;
pub mod validation;

use std::sync::Arc;

use crate::config::Config;
use crate::db::DbPool;
use crate::middleware::auth::AuthService;
use crate::services::notifications::{InviteNotifier, LoggingNotifier};
use crate::utils::AssetUrlHelper;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub asset_helper: AssetUrlHelper,
    pub auth_service: Arc<AuthService>,
    pub notifier: Arc<dyn InviteNotifier>,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let asset_helper = AssetUrlHelper::new(&config.assets());
        let auth_service = Arc::new(AuthService::new(&config.auth()));
        Self {
            db,
            config: Arc::new(config),
            asset_helper,
            auth_service,
            notifier: Arc::new(LoggingNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn InviteNotifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

pub fn init_tracing(config: &Config) {
    let level_filter = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    unsafe {
        std::env::set_var("RUST_LOG", level_filter);
    }

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().init();
        }
        _ => {
            tracing_subscriber::fmt().init();
        }
    }
}
