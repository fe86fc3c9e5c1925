pub mod config;
pub mod error;
pub mod schema;
pub mod spec_path;
pub mod testing_type;

pub use config::{ConfigModuleOptions, LegacyConfig, MigrationSettings, ModuleFlavor};
pub use error::AppError;
pub use spec_path::{FilePart, RelativeSpecWithTestingType, SpecPattern, rename_spec_path};
pub use testing_type::TestingType;
