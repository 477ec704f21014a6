//! Playlist discovery and metadata loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::types::Track;

/// File inside a playlist folder holding the track records.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Sub-folder of a playlist folder holding rendered card images.
pub const CARDS_DIR_NAME: &str = "cards";

/// One track record as stored in `metadata.json`.
///
/// The upstream normalizer may leave `release_year` empty when the source had
/// no usable date; such records cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    #[serde(default)]
    pub name_original: String,
    pub name_cleaned: String,
    pub artists: String,
    #[serde(default)]
    pub album: String,
    pub release_year: Option<i32>,
    #[serde(default)]
    pub spotify_uri: String,
}

impl TrackRecord {
    /// Convert into a playable [`Track`], or `None` without a release year.
    pub fn into_track(self) -> Option<Track> {
        let release_year = self.release_year?;
        Some(Track {
            name_original: self.name_original,
            name_cleaned: self.name_cleaned,
            artists: self.artists,
            album: self.album,
            release_year,
            spotify_uri: self.spotify_uri,
        })
    }
}

/// Keep only records with a release year.
pub fn into_tracks(records: Vec<TrackRecord>) -> Vec<Track> {
    records
        .into_iter()
        .filter_map(|record| {
            let name = record.name_cleaned.clone();
            let track = record.into_track();
            if track.is_none() {
                warn!("[Storage] skipping '{}': no release year", name);
            }
            track
        })
        .collect()
}

/// Sorted names of folders under `playlists_dir` that contain `metadata.json`.
///
/// A missing directory is not an error: it simply holds no playlists yet.
pub fn available_playlists(playlists_dir: &Path) -> Result<Vec<String>> {
    if !playlists_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(playlists_dir)
        .with_context(|| format!("reading playlists dir {}", playlists_dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() && path.join(METADATA_FILE_NAME).exists() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Read the records of one playlist folder.
///
/// Returns `Ok(None)` when the folder has no `metadata.json`.
pub fn load_playlist_metadata(folder: &Path) -> Result<Option<Vec<TrackRecord>>> {
    let path = folder.join(METADATA_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<TrackRecord> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    info!("[Storage] loaded {} records from {}", records.len(), path.display());
    Ok(Some(records))
}

/// Load a playlist folder straight into playable tracks.
pub fn load_playlist_tracks(folder: &Path) -> Result<Option<Vec<Track>>> {
    Ok(load_playlist_metadata(folder)?.map(into_tracks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, year: Option<i32>) -> TrackRecord {
        TrackRecord {
            name_original: name.to_string(),
            name_cleaned: name.to_string(),
            artists: "Artist".to_string(),
            album: String::new(),
            release_year: year,
            spotify_uri: String::new(),
        }
    }

    #[test]
    fn test_into_tracks_drops_missing_years() {
        let tracks = into_tracks(vec![
            record("a", Some(1999)),
            record("b", None),
            record("c", Some(2004)),
        ]);
        let names: Vec<_> = tracks.iter().map(|t| t.name_cleaned.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_record_parses_null_year() {
        let json = r#"{"name_cleaned": "x", "artists": "y", "release_year": null}"#;
        let record: TrackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.release_year, None);
        assert_eq!(record.album, "");
    }

    #[test]
    fn test_missing_dir_has_no_playlists() {
        let dir = tempfile::tempdir().unwrap();
        let names = available_playlists(&dir.path().join("nope")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_available_playlists_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["rock", "eighties", "empty"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("rock").join(METADATA_FILE_NAME), "[]").unwrap();
        fs::write(dir.path().join("eighties").join(METADATA_FILE_NAME), "[]").unwrap();
        fs::write(dir.path().join("stray.json"), "[]").unwrap();

        let names = available_playlists(dir.path()).unwrap();
        assert_eq!(names, vec!["eighties".to_string(), "rock".to_string()]);
    }

    #[test]
    fn test_load_without_metadata_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_playlist_metadata(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(METADATA_FILE_NAME), "{not json").unwrap();
        let err = load_playlist_metadata(dir.path()).unwrap_err();
        assert!(err.to_string().contains("parsing"));
    }

    #[test]
    fn test_load_playlist_tracks() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![record("Yellow", Some(2000)), record("Unknown", None)];
        fs::write(
            dir.path().join(METADATA_FILE_NAME),
            serde_json::to_string(&records).unwrap(),
        )
        .unwrap();

        let tracks = load_playlist_tracks(dir.path()).unwrap().unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].release_year, 2000);
    }
}
