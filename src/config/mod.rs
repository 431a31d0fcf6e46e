mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{
    BoxConfig, Config, DEFAULT_DIR, DEFAULT_EXTENSION, LOCAL_CONFIG_NAME, ScanConfig,
};
pub use validation::validate_config_semantics;
