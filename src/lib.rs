pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::GalleryConfig;

pub use adapters::{load_all, save_all, JsonFileStore};
pub use app::Menu;
pub use self::core::{Applied, Gallery, Sale};
pub use domain::{Artwork, Exhibition, ExhibitionKind, ExhibitionStore, Pricing, Sellable, Visitable};
pub use utils::error::{GalleryError, Result};
