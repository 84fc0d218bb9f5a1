use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::court::{Play, PlaySnapshot};
use crate::roster::Player;

/// Fixed logical keys, carried over from the original app's local storage
pub const PLAYERS_KEY: &str = "coach_pro_players";
pub const PLAYS_KEY: &str = "coach_pro_plays";
pub const DEFAULT_LAYOUT_KEY: &str = "coach_pro_default_layout";

/// File-backed key-value store: one JSON document per key, kept in a data
/// directory. An absent key means "no data yet", never an error.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, Box<dyn Error>> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Box<dyn Error>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), Box<dyn Error>> {
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), raw)?;
        Ok(())
    }

    pub fn load_players(&self) -> Result<Option<Vec<Player>>, Box<dyn Error>> {
        self.read_key(PLAYERS_KEY)
    }

    pub fn save_players(&self, players: &[Player]) -> Result<(), Box<dyn Error>> {
        self.write_key(PLAYERS_KEY, &players)
    }

    pub fn load_plays(&self) -> Result<Option<Vec<Play>>, Box<dyn Error>> {
        self.read_key(PLAYS_KEY)
    }

    pub fn save_plays(&self, plays: &[Play]) -> Result<(), Box<dyn Error>> {
        self.write_key(PLAYS_KEY, &plays)
    }

    pub fn load_default_layout(&self) -> Result<Option<Vec<PlaySnapshot>>, Box<dyn Error>> {
        self.read_key(DEFAULT_LAYOUT_KEY)
    }

    pub fn save_default_layout(&self, layout: &[PlaySnapshot]) -> Result<(), Box<dyn Error>> {
        self.write_key(DEFAULT_LAYOUT_KEY, &layout)
    }
}
