use std::{io, path::PathBuf};

use thiserror::Error;

use crate::feature::ValueError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error("office list is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("office list has no `offices` key")]
    MissingOffices,
    #[error("`offices` is not an array")]
    OfficesNotArray,
    #[error("office #{index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("office #{index}: {source}")]
    Value {
        index: usize,
        #[source]
        source: ValueError,
    },
    #[error("failed to encode feature collection: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
