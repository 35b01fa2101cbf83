// crates/countrydex-core/src/store/file.rs
use crate::error::{CountryDexError, Result};
use crate::traits::KeyValueStore;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(not(feature = "compact"))]
const VALUE_SUFFIX: &str = "json";
#[cfg(feature = "compact")]
const VALUE_SUFFIX: &str = "json.gz";

/// One file per key inside a data directory.
///
/// With the `compact` feature values are gzipped. Writes go to a temporary
/// sibling first and are renamed into place, so a single `set` is never
/// observed half-written.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CountryDexError::StorageUnavailable(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self.dir.join(format!("{key}.{VALUE_SUFFIX}")))
    }
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
fn open_stream(path: &Path) -> std::io::Result<Box<dyn Read>> {
    let reader = BufReader::new(File::open(path)?);

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

fn write_stream(path: &Path, value: &str) -> std::io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    #[cfg(feature = "compact")]
    let mut encoder = GzEncoder::new(writer, Compression::default());
    #[cfg(not(feature = "compact"))]
    let mut encoder = writer;

    encoder.write_all(value.as_bytes())?;

    #[cfg(feature = "compact")]
    encoder.finish()?.flush()?;
    #[cfg(not(feature = "compact"))]
    encoder.flush()?;

    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let mut reader = match open_stream(&path) {
            Ok(r) => r,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CountryDexError::StorageUnavailable(format!(
                    "{}: {e}",
                    path.display()
                )))
            }
        };

        let mut value = String::new();
        reader.read_to_string(&mut value).map_err(|e| {
            CountryDexError::StorageUnavailable(format!("{}: {e}", path.display()))
        })?;
        tracing::debug!(key, bytes = value.len(), "storage read");
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("tmp");
        write_stream(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(key, bytes = value.len(), "storage write");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn set_then_get_in_a_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("data"));

        store.set("favorites", r#"["FRA"]"#).unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some(r#"["FRA"]"#));

        store.set("favorites", "[]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path())
            .set("countriesData", "[1,2,3]")
            .unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(
            reopened.get("countriesData").unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", "x"),
            Err(CountryDexError::StorageUnavailable(_))
        ));
        assert!(store.get("").is_err());
    }
}
