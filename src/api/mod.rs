pub mod battle_apis;
pub mod config;
pub mod pokemon_apis;
pub mod stats_apis;
