use std::{collections::HashMap, sync::Arc};

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::user::{Entity as UserEntity, Model as User};

/// Authenticated identity resolved from an access token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: i32,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, AuthUser>,
    is_initialized: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenCacheStats {
    pub is_initialized: bool,
    pub user_count: usize,
}

/// In-memory access-token lookup, loaded from the users table at startup
/// and reloaded whenever a user is created, updated or deleted.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    state: Arc<RwLock<CacheState>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState::default())),
        }
    }

    pub async fn initialize(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let users = UserEntity::find().all(db).await?;
        let count = users.len();
        self.load(users).await;
        info!("Token cache initialized with {} users", count);
        Ok(())
    }

    /// Reload the cache after a user mutation.
    pub async fn refresh(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let users = UserEntity::find().all(db).await?;
        self.load(users).await;
        Ok(())
    }

    async fn load(&self, users: Vec<User>) {
        let mut state = self.state.write().await;
        state.entries = users
            .into_iter()
            .map(|u| {
                (
                    u.access_token,
                    AuthUser {
                        id: u.id,
                        full_name: u.full_name,
                        email: u.email,
                    },
                )
            })
            .collect();
        state.is_initialized = true;
    }

    pub async fn lookup(&self, token: &str) -> Option<AuthUser> {
        let state = self.state.read().await;
        state.entries.get(token).cloned()
    }

    pub async fn stats(&self) -> TokenCacheStats {
        let state = self.state.read().await;
        TokenCacheStats {
            is_initialized: state.is_initialized,
            user_count: state.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, token: &str) -> User {
        User {
            id,
            full_name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            access_token: token.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn lookup_finds_loaded_token() {
        let cache = TokenCache::new();
        cache.load(vec![user(1, "tok-a"), user(2, "tok-b")]).await;

        let found = cache.lookup("tok-b").await.unwrap();
        assert_eq!(found.id, 2);
        assert!(cache.lookup("tok-unknown").await.is_none());
    }

    #[tokio::test]
    async fn stats_reflect_initialization() {
        let cache = TokenCache::new();
        assert!(!cache.stats().await.is_initialized);

        cache.load(vec![user(1, "tok-a")]).await;
        let stats = cache.stats().await;
        assert!(stats.is_initialized);
        assert_eq!(stats.user_count, 1);
    }

    #[tokio::test]
    async fn reload_replaces_stale_tokens() {
        let cache = TokenCache::new();
        cache.load(vec![user(1, "tok-old")]).await;
        cache.load(vec![user(1, "tok-new")]).await;

        assert!(cache.lookup("tok-old").await.is_none());
        assert!(cache.lookup("tok-new").await.is_some());
    }
}
