use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::BenchmarkingResult;
use crate::store::ResultStore;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("cannot read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed file {} is not a valid seed document: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("seed record #{index} is invalid: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level shape; records are kept raw so a failure can name its index.
#[derive(Deserialize)]
struct SeedDocument {
    #[serde(default)]
    benchmarking_results: Vec<serde_json::Value>,
}

/// Reads the seed file at `path` into a [`ResultStore`], keeping file order.
///
/// All or nothing: the first unreadable byte or invalid record fails the
/// whole load.
pub fn load(path: impl AsRef<Path>) -> Result<ResultStore, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_owned(),
        source,
    })?;
    let store = parse(&raw, path)?;

    tracing::info!(path = %path.display(), records = store.len(), "seed data loaded");
    Ok(store)
}

fn parse(raw: &str, path: &Path) -> Result<ResultStore, SeedError> {
    let doc: SeedDocument = serde_json::from_str(raw).map_err(|source| SeedError::Json {
        path: path.to_owned(),
        source,
    })?;

    let results = doc
        .benchmarking_results
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            BenchmarkingResult::deserialize(value)
                .map_err(|source| SeedError::Record { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResultStore::new(results))
}
