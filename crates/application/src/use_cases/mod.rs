pub mod config;

pub use config::{LoadConfigUseCase, LoadOutcome, PreloadSettingsUseCase, SaveConfigUseCase};
