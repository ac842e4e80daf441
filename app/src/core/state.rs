use sea_orm::DatabaseConnection;

use crate::config::config::Config;
use crate::core::token_cache::TokenCache;

#[derive(Clone, Debug)]
pub struct AppState {
    pub database: DatabaseConnection,
    pub config: Config,
    pub tokens: TokenCache,
}
