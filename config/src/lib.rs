use anyhow::{anyhow, Error};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, Error> {
        self.level
            .parse()
            .map_err(|_| anyhow!("Unknown log level '{}'", self.level))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    pub history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".into(),
            history: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: i32,
    pub title: String,
}

// Scores stay raw here, they're validated when the dataset is registered
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RatingRecord {
    pub user: i32,
    pub movie: i32,
    pub score: i64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub movies: Vec<MovieRecord>,
    pub ratings: Vec<RatingRecord>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.movies.is_empty() && self.ratings.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub repl: ReplConfig,
    pub dataset: Dataset,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Error> {
        let parsed: Self = toml::from_str(contents)?;
        Ok(parsed)
    }
}
