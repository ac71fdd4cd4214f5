//! Library data-source loading.
//!
//! The catalog is populated once at startup from a JSON array of
//! `{ id, title, tags }` records. Where that JSON comes from (a file on
//! disk, an embedded asset) is the caller's concern.

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::errors::LibraryError;
use crate::video::VideoRecord;

/// Parses library JSON into a catalog.
///
/// # Errors
/// - `LibraryError::Parse` - Malformed JSON or records
/// - `LibraryError::DuplicateVideoId` - Two records share an id
pub fn load_from_str(data: &str) -> Result<Catalog, LibraryError> {
    let records: Vec<VideoRecord> = serde_json::from_str(data)?;
    let catalog = Catalog::from_records(records)?;
    tracing::info!("loaded {} videos into catalog", catalog.len());
    Ok(catalog)
}

/// Reads and parses a library file into a catalog.
///
/// # Errors
/// - `LibraryError::Io` - File could not be read
/// - `LibraryError::Parse` - Malformed JSON or records
/// - `LibraryError::DuplicateVideoId` - Two records share an id
pub fn load_from_path(path: &Path) -> Result<Catalog, LibraryError> {
    tracing::debug!("loading library from {}", path.display());
    let data = fs::read_to_string(path)?;
    load_from_str(&data)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r##"[
        { "id": "amazing_cats_video_id", "title": "Amazing Cats", "tags": ["#cat", "#animal"] },
        { "id": "funny_dogs_video_id", "title": "Funny Dogs", "tags": ["#dog", "#animal"] }
    ]"##;

    #[test]
    fn test_load_from_str() {
        let catalog = load_from_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let cats = catalog.get(&"amazing_cats_video_id".into()).unwrap();
        assert_eq!(cats.title(), "Amazing Cats");
        assert_eq!(cats.tags(), ["#cat", "#animal"]);
    }

    #[test]
    fn test_tags_default_to_empty() {
        let catalog =
            load_from_str(r#"[{ "id": "bare_id", "title": "No Tags Here" }]"#).unwrap();
        assert!(catalog.get(&"bare_id".into()).unwrap().tags().is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            load_from_str("not json"),
            Err(LibraryError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_from_path(Path::new("/definitely/not/a/library.json"));
        assert!(matches!(result, Err(LibraryError::Io(_))));
    }
}
