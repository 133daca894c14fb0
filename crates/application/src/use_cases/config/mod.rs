pub mod load;
pub mod preload;
pub mod save;

pub use load::{LoadConfigUseCase, LoadOutcome};
pub use preload::PreloadSettingsUseCase;
pub use save::SaveConfigUseCase;
