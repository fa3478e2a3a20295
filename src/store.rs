use crate::constants::*;
use crate::error::{Error, Result};
use chrono::{Local, NaiveDateTime, SubsecRound, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const DATE_FORMAT_PARSE: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    players: BTreeMap<String, Player>,
    matches: Vec<Match>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Store {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match Self::read(&path) {
            Err(Error::StoreNotFound { .. }) => {
                debug!(path = %path.display(), "no data file, starting empty");
                Ok(Self {
                    path: Some(path),
                    ..Self::default()
                })
            }
            res => res,
        }
    }

    pub fn require(path: impl Into<PathBuf>) -> Result<Self> {
        Self::read(&path.into())
    }

    fn read(path: &Path) -> Result<Self> {
        let storage = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::StoreNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        let buf = BufReader::new(storage);
        let mut store: Self = serde_json::from_reader(buf)?;
        store.path = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            players = store.players.len(),
            matches = store.matches.len(),
            "loaded data file"
        );
        Ok(store)
    }

    /// In-memory stores skip the write.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let storage = File::create(path)?;
        let mut buf = BufWriter::new(storage);
        serde_json::to_writer_pretty(&mut buf, self)?;
        buf.flush()?;
        debug!(path = %path.display(), "saved data file");
        Ok(())
    }

    /// Returns whether `id` was newly created.
    pub fn ensure_player(&mut self, id: &str) -> Result<bool> {
        if self.players.contains_key(id) {
            return Ok(false);
        }
        self.players.insert(id.to_string(), Player::new());
        info!(player = id, "added player");
        self.save()?;
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Result<&Player> {
        self.players
            .get(id)
            .ok_or_else(|| Error::PlayerNotFound { id: id.to_string() })
    }

    pub fn all(&self) -> &BTreeMap<String, Player> {
        &self.players
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn player_mut(&mut self, id: &str) -> Result<&mut Player> {
        self.players
            .get_mut(id)
            .ok_or_else(|| Error::PlayerNotFound { id: id.to_string() })
    }

    pub(crate) fn push_match(&mut self, m: Match) {
        self.matches.push(m);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rating: f64,
    pub matches: u32,
    pub wins: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rating: ELO_BASE,
            matches: 0,
            wins: 0,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.wins as f64 / self.matches as f64 * 100.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub date: Timestamp,
    pub team1_players: [String; 2],
    pub team2_players: [String; 2],
    pub team1_score: u32,
    pub team2_score: u32,
}

impl Match {
    pub fn team1_won(&self) -> bool {
        self.team1_score > self.team2_score
    }
}

/// Local wall-clock time of a match, kept at microsecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(Local::now().naive_local().trunc_subsecs(6))
    }

    pub fn parse(s: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(s, DATE_FORMAT_PARSE)
            .map(Self)
            .map_err(|_| Error::InvalidTimestamp {
                input: s.to_string(),
            })
    }

    pub fn format(&self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl std::fmt::Display for Timestamp {
    // Fractional seconds are printed only when present.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = if self.0.nanosecond() == 0 {
            DATE_FORMAT
        } else {
            DATE_FORMAT_MICROS
        };
        write!(f, "{}", self.0.format(fmt))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
