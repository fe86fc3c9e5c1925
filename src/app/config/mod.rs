//! Project-backed configuration loaders.
//!
//! Pure parsing lives in `domain::config`; these functions only locate and
//! read the files through the `ProjectFilesystem` port.

mod load_legacy_config;
mod load_settings;

pub use load_legacy_config::{load_legacy_config, load_legacy_config_or_default};
pub use load_settings::load_settings;
