use crate::domain::{Exhibition, ExhibitionStore};
use crate::utils::error::{GalleryError, Result, StorageFailure};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads the collection stored at `path`.
///
/// A missing file yields an empty collection. A file that exists but cannot be
/// read or decoded is a `LoadError`; nothing is returned in that case, so a
/// corrupt file never turns into a partial collection.
pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<Exhibition>> {
    let path = path.as_ref();
    let load_error = |source: StorageFailure| GalleryError::LoadError {
        path: path.display().to_string(),
        source,
    };

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No data file at {}, starting with an empty collection", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(load_error(e.into())),
    };

    let exhibitions: Vec<Exhibition> =
        serde_json::from_slice(&data).map_err(|e| load_error(e.into()))?;

    tracing::debug!("Loaded {} exhibitions from {}", exhibitions.len(), path.display());
    Ok(exhibitions)
}

/// Overwrites `path` with the full collection, creating parent directories as
/// needed. A non-finite price is rejected before the file is touched. The
/// write is not atomic: an interrupted save can leave a truncated
/// file behind.
pub fn save_all<P: AsRef<Path>>(exhibitions: &[Exhibition], path: P) -> Result<()> {
    let path = path.as_ref();
    let save_error = |source: StorageFailure| GalleryError::SaveError {
        path: path.display().to_string(),
        source,
    };

    if let Some(bad) = exhibitions.iter().find(|e| !e.price().is_finite()) {
        return Err(save_error(StorageFailure::NonFinitePrice {
            title: bad.title().to_string(),
            price: bad.price(),
        }));
    }

    let data = serde_json::to_vec_pretty(exhibitions).map_err(|e| save_error(e.into()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| save_error(e.into()))?;
    }

    fs::write(path, data).map_err(|e| save_error(e.into()))?;

    tracing::debug!("Saved {} exhibitions to {}", exhibitions.len(), path.display());
    Ok(())
}

/// JSON file backing a gallery collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExhibitionStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Exhibition>> {
        load_all(&self.path)
    }

    fn save_all(&self, exhibitions: &[Exhibition]) -> Result<()> {
        save_all(exhibitions, &self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_layout_is_tagged_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.json");

        let exhibitions = vec![
            Exhibition::painting("Starry Night", "Vincent", 1889, 7850.0),
            Exhibition::sculpture("The Thinker", "Rodin", 1904, 4660.0),
        ];
        save_all(&exhibitions, &path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let items = raw.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], "painting");
        assert_eq!(items[1]["type"], "sculpture");
        assert_eq!(items[1]["artist"], "Rodin");
        assert_eq!(items[1]["price"], 4660.0);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/gallery.json");
        let store = JsonFileStore::new(&path);

        store
            .save_all(&[Exhibition::painting("Irises", "Vincent", 1889, 7850.0)])
            .unwrap();

        assert!(path.exists());
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("gallery.json"));

        store
            .save_all(&[
                Exhibition::painting("A", "X", 2000, 2300.0),
                Exhibition::painting("B", "Y", 2001, 2250.0),
            ])
            .unwrap();
        store.save_all(&[]).unwrap();

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_price_is_rejected_before_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.json");
        let kept = vec![Exhibition::sculpture("The Thinker", "Rodin", 1904, 4660.0)];
        save_all(&kept, &path).unwrap();

        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = save_all(
                &[
                    Exhibition::painting("Irises", "Vincent", 1889, 7850.0),
                    Exhibition::painting("Broken", "Nobody", 2000, price),
                ],
                &path,
            );
            assert!(matches!(
                result,
                Err(GalleryError::SaveError {
                    source: StorageFailure::NonFinitePrice { ref title, .. },
                    ..
                }) if title == "Broken"
            ));
            // 先前的檔案保持不變
            assert_eq!(load_all(&path).unwrap(), kept);
        }
    }

    #[test]
    fn test_unreadable_path_is_load_error() {
        let dir = TempDir::new().unwrap();
        // 目錄無法當作檔案讀取
        let result = load_all(dir.path());
        assert!(matches!(
            result,
            Err(GalleryError::LoadError {
                source: StorageFailure::Io(_),
                ..
            })
        ));
    }
}
