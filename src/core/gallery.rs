use crate::domain::{Exhibition, ExhibitionStore, Sellable, Visitable};
use crate::utils::error::{GalleryError, Result};
use crate::utils::validation::validate_index;

/// Result of a mutation that was applied in memory. `persisted` reports the
/// save that followed it; on failure the in-memory collection still holds the
/// change and the next mutation saves again.
#[derive(Debug)]
pub struct Applied<T> {
    pub outcome: T,
    pub persisted: Result<()>,
}

impl<T> Applied<T> {
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub exhibition: Exhibition,
    pub final_price: f64,
    pub narrative: String,
}

/// The in-memory collection and the store backing it. Positions are 1-based
/// and follow insertion order.
pub struct Gallery<S: ExhibitionStore> {
    store: S,
    exhibitions: Vec<Exhibition>,
}

impl<S: ExhibitionStore> Gallery<S> {
    /// Loads the stored collection. A load failure is handed back alongside an
    /// empty gallery so the caller can warn and carry on.
    pub fn open(store: S) -> (Self, Option<GalleryError>) {
        match store.load_all() {
            Ok(exhibitions) => {
                tracing::info!(
                    "📁 Loaded {} exhibitions from {}",
                    exhibitions.len(),
                    store.location()
                );
                (Self::with_exhibitions(store, exhibitions), None)
            }
            Err(e) => {
                tracing::warn!("⚠️ {}; starting with an empty collection", e);
                (Self::with_exhibitions(store, Vec::new()), Some(e))
            }
        }
    }

    pub fn with_exhibitions(store: S, exhibitions: Vec<Exhibition>) -> Self {
        Self { store, exhibitions }
    }

    pub fn exhibitions(&self) -> &[Exhibition] {
        &self.exhibitions
    }

    pub fn len(&self) -> usize {
        self.exhibitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibitions.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Exhibition> {
        validate_index(index, self.exhibitions.len())?;
        Ok(&self.exhibitions[index - 1])
    }

    pub fn visit(&self, index: usize) -> Result<String> {
        Ok(self.get(index)?.visit())
    }

    /// Appends and saves. Returns the new record's position.
    pub fn add(&mut self, exhibition: Exhibition) -> Applied<usize> {
        tracing::info!("➕ Adding {}", exhibition.summary_line());
        self.exhibitions.push(exhibition);
        Applied {
            outcome: self.exhibitions.len(),
            persisted: self.save(),
        }
    }

    /// Sells the record at `index`, removes it and saves.
    pub fn sell(&mut self, index: usize, custom_price: Option<f64>) -> Result<Applied<Sale>> {
        let exhibition = self.get(index)?;
        let final_price = exhibition.final_price(custom_price);
        let narrative = exhibition.sell(custom_price);

        let exhibition = self.exhibitions.remove(index - 1);
        tracing::info!("💰 {}", narrative);

        Ok(Applied {
            outcome: Sale {
                exhibition,
                final_price,
                narrative,
            },
            persisted: self.save(),
        })
    }

    /// Removes the record at `index` and saves.
    pub fn delete(&mut self, index: usize) -> Result<Applied<Exhibition>> {
        validate_index(index, self.exhibitions.len())?;
        let removed = self.exhibitions.remove(index - 1);
        tracing::info!("🗑️ Deleted {}", removed.summary_line());

        Ok(Applied {
            outcome: removed,
            persisted: self.save(),
        })
    }

    /// Writes the whole collection to the store.
    pub fn save(&self) -> Result<()> {
        match self.store.save_all(&self.exhibitions) {
            Ok(()) => {
                tracing::debug!(
                    "Saved {} exhibitions to {}",
                    self.exhibitions.len(),
                    self.store.location()
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                Err(e)
            }
        }
    }
}
