use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Identifier accepted by single-item lookups in place of a numeric id.
pub const RANDOM_ID: &str = "random";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Joke,
    Motivation,
    Proverb,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Joke, Self::Motivation, Self::Proverb];

    /// Name used in single-item routes, e.g. `/joke/12`.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Joke => "joke",
            Self::Motivation => "motivation",
            Self::Proverb => "proverb",
        }
    }

    /// Name used in list routes, e.g. `/jokes/?page=2`.
    pub fn route(self) -> &'static str {
        match self {
            Self::Joke => "jokes",
            Self::Motivation => "motivations",
            Self::Proverb => "proverbs",
        }
    }

    pub fn fixture_file(self) -> &'static str {
        match self {
            Self::Joke => "pidgin-jokes.json",
            Self::Motivation => "pidgin-motivations.json",
            Self::Proverb => "pidgin-proverbs.json",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "joke" => Some(Self::Joke),
            "motivation" => Some(Self::Motivation),
            "proverb" => Some(Self::Proverb),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// One content item. Apart from `id` the fields are passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new<'a>(id: i64, fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Self { id, fields }
    }

    /// Text field by name; missing or non-string fields read as empty.
    pub fn text(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {kind} fixture: {path}: {source}")]
    Read {
        kind: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} fixture: {path}: {source}")]
    Parse {
        kind: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id {id} in {path}")]
    DuplicateId {
        kind: &'static str,
        id: i64,
        path: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct ResourceStore {
    jokes: Vec<Record>,
    motivations: Vec<Record>,
    proverbs: Vec<Record>,
}

impl ResourceStore {
    pub fn new(jokes: Vec<Record>, motivations: Vec<Record>, proverbs: Vec<Record>) -> Self {
        Self {
            jokes,
            motivations,
            proverbs,
        }
    }

    pub fn load_dir(dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            jokes: load_fixture(dir, ResourceKind::Joke)?,
            motivations: load_fixture(dir, ResourceKind::Motivation)?,
            proverbs: load_fixture(dir, ResourceKind::Proverb)?,
        })
    }

    pub fn records(&self, kind: ResourceKind) -> &[Record] {
        match kind {
            ResourceKind::Joke => &self.jokes,
            ResourceKind::Motivation => &self.motivations,
            ResourceKind::Proverb => &self.proverbs,
        }
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.records(kind).len()
    }

    pub fn find(&self, kind: ResourceKind, id: i64) -> Option<&Record> {
        self.records(kind).iter().find(|r| r.id == id)
    }
}

fn load_fixture(dir: &Path, kind: ResourceKind) -> Result<Vec<Record>, StoreError> {
    let path = dir.join(kind.fixture_file());
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
        kind: kind.singular(),
        path: display.clone(),
        source,
    })?;
    let records: Vec<Record> =
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            kind: kind.singular(),
            path: display.clone(),
            source,
        })?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(StoreError::DuplicateId {
                kind: kind.singular(),
                id: record.id,
                path: display,
            });
        }
    }
    Ok(records)
}
