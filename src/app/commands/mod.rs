pub mod migrate_config;
pub mod rename;
pub mod specs;
