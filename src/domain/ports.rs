use crate::domain::model::Exhibition;
use crate::utils::error::Result;

/// Persists the whole ordered collection. Each call is an independent,
/// complete transform; implementations keep no state between calls.
pub trait ExhibitionStore {
    /// A missing backing file is an empty collection, not an error.
    fn load_all(&self) -> Result<Vec<Exhibition>>;

    /// Replaces the stored collection with `exhibitions`.
    fn save_all(&self, exhibitions: &[Exhibition]) -> Result<()>;

    /// Human-readable location, used in logs and messages.
    fn location(&self) -> String;
}
