//! md2pdf engine: config storage, file discovery and the conversion client.
mod config;
mod convert;
mod engine;
mod persist;
mod scan;
mod types;

pub use config::{
    app_config_dir, config_home, config_home_from, Config, ConfigError, ConfigStore,
    GotenbergConfig, APP_DIR, CONFIG_FILE, CONFIG_HOME_ENV,
};
pub use convert::{
    output_path_for, ConvertError, Converter, GotenbergConverter, CONVERT_ROUTE, FORM_FIELD,
    INDEX_HTML, OUTPUT_EXTENSION, SOURCE_FILENAME, TEMPLATE_FILENAME,
};
pub use engine::EngineHandle;
pub use persist::{ensure_dir, write_atomic, PersistError, StagedFile};
pub use scan::{scan, ScanIssue, ScanReport, SourceFile, DEFAULT_SUFFIX};
pub use types::{EngineEvent, JobId};
