// Domain layer: exhibition model, pricing rule and the storage port.

pub mod model;
pub mod ports;
pub mod pricing;

pub use model::{format_currency, Artwork, Exhibition, ExhibitionKind, Sellable, Visitable};
pub use ports::ExhibitionStore;
pub use pricing::{current_year, Pricing};
