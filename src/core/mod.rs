pub mod gallery;

pub use gallery::{Applied, Gallery, Sale};
