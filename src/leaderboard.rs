// leaderboard.rs
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Native stand-in for the browser localStorage slot the scores used to
/// live under.
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

pub const MAX_ENTRIES: usize = 3;

const DEFAULT_NAME: &str = "Player";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Entry {
    pub name: String,
    pub score: i64,
}

/// Top-3 score table, persisted as a JSON array of `{name, score}`.
///
/// Every disk failure is absorbed here: a broken file loads as an empty
/// table and a failed write leaves the in-memory table updated anyway.
#[derive(Resource)]
pub struct Leaderboard {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::load(LEADERBOARD_FILE)
    }
}

impl Leaderboard {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self { path, entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Inserts one finished game and persists the updated table. An empty
    /// name falls back to a placeholder.
    pub fn record(&mut self, name: &str, score: i64) {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        self.entries.push(Entry {
            name: name.to_string(),
            score,
        });
        // Stable sort keeps insertion order for equal scores.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);

        if let Err(err) = self.persist() {
            warn!("could not persist leaderboard to {:?}: {err}", self.path);
        }
    }

    /// Write-then-rename so a crash mid-write never corrupts the existing
    /// table.
    fn persist(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec(&self.entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp_path)?;
        file.write_all(&data)?;
        file.sync_all()?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Reads the persisted blob, keeping only entries with a non-empty string
/// name and an integer score. Anything unreadable yields an empty table.
fn read_entries(path: &Path) -> Vec<Entry> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw) else {
        warn!("ignoring malformed leaderboard file at {path:?}");
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        warn!("ignoring non-array leaderboard file at {path:?}");
        return Vec::new();
    };

    let mut entries: Vec<Entry> = items
        .iter()
        .filter_map(|item| {
            let name = item.get("name")?.as_str()?;
            let score = item.get("score")?.as_i64()?;
            if name.is_empty() {
                return None;
            }
            Some(Entry {
                name: name.to_string(),
                score,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> String {
        let dir = format!("/tmp/fare_frenzy_leaderboard_test_{name}");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn board_path(dir: &str) -> String {
        format!("{dir}/leaderboard.json")
    }

    #[test]
    fn load_missing_file_yields_empty_table() {
        let dir = test_dir("missing");
        let board = Leaderboard::load(board_path(&dir));
        assert!(board.entries().is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_corrupted_blob_yields_empty_table() {
        let dir = test_dir("corrupted");
        let path = board_path(&dir);
        fs::write(&path, "{{{ not json").unwrap();
        assert!(Leaderboard::load(&path).entries().is_empty());

        fs::write(&path, "{\"name\":\"solo\",\"score\":1}").unwrap();
        assert!(
            Leaderboard::load(&path).entries().is_empty(),
            "a non-array root is discarded"
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_filters_malformed_entries() {
        let dir = test_dir("filters");
        let path = board_path(&dir);
        fs::write(
            &path,
            r#"[
                {"name": "Ana", "score": 300},
                {"name": "", "score": 900},
                {"name": 42, "score": 100},
                {"name": "NoScore"},
                {"name": "Float", "score": 1.5},
                {"name": "Bo", "score": 200}
            ]"#,
        )
        .unwrap();

        let board = Leaderboard::load(&path);
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bo"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn record_keeps_top_three_sorted_descending() {
        let dir = test_dir("top_three");
        let mut board = Leaderboard::load(board_path(&dir));

        board.record("Ana", 100);
        board.record("Bo", 400);
        board.record("Cy", 200);
        board.record("Di", 300);

        let scores: Vec<i64> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![400, 300, 200]);
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let dir = test_dir("stable_ties");
        let mut board = Leaderboard::load(board_path(&dir));

        board.record("First", 200);
        board.record("Second", 200);
        board.record("Third", 200);

        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_name_gets_placeholder() {
        let dir = test_dir("placeholder");
        let mut board = Leaderboard::load(board_path(&dir));
        board.record("", 50);
        assert_eq!(board.entries()[0].name, DEFAULT_NAME);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn record_round_trips_through_disk() {
        let dir = test_dir("round_trip");
        let path = board_path(&dir);

        let mut board = Leaderboard::load(&path);
        board.record("Ana", 300);
        board.record("Bo", 100);

        let reloaded = Leaderboard::load(&path);
        assert_eq!(reloaded.entries(), board.entries());
        assert!(
            !Path::new(&format!("{path}.tmp")).exists(),
            "no temp file is left behind"
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_persist_still_updates_memory() {
        let dir = test_dir("failed_persist");
        // Point the board below a regular file so create_dir_all fails.
        let blocker = format!("{dir}/blocker");
        fs::write(&blocker, b"file, not a directory").unwrap();

        let mut board = Leaderboard::load(format!("{blocker}/leaderboard.json"));
        board.record("Ana", 100);

        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].score, 100);
        let _ = fs::remove_dir_all(&dir);
    }
}
