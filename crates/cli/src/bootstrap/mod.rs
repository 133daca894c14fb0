pub mod config;
pub mod logging;

pub use config::{config_paths, load_config};
pub use logging::init_logging;
