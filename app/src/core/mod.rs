pub mod server;
pub mod state;
pub mod token_cache;
