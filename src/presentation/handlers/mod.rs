mod artifacts;
mod health;
mod preview;

pub use artifacts::artifact_handler;
pub use health::health_handler;
pub use preview::preview_handler;
