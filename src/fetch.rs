use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde_json::Value;
use ureq::{Agent, AgentBuilder};

use crate::{
    error::{Error, Result},
    office::RawOffice,
};

pub const ENDPOINT: &str = "https://www.afp.com/en/afp/map/getoffice/427";

/// Where the office list is read from.
#[derive(Debug, Clone)]
pub enum Source {
    Http(String),
    File(PathBuf),
}

impl Source {
    pub fn load(&self, agent: &Agent) -> Result<Vec<RawOffice>> {
        match self {
            Self::Http(url) => fetch_offices(agent, url),
            Self::File(path) => read_offices(path),
        }
    }
}

pub fn agent(timeout: Option<Duration>) -> Agent {
    let mut builder = AgentBuilder::new().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

pub fn fetch_offices(agent: &Agent, url: &str) -> Result<Vec<RawOffice>> {
    log::info!("Fetching offices from {url}...");
    let body = agent
        .get(url)
        .call()
        .map_err(|source| Error::Network {
            url: url.to_string(),
            source: Box::new(source),
        })?
        .into_string()
        .map_err(|source| Error::Read {
            origin: url.to_string(),
            source,
        })?;

    parse_offices(&body)
}

pub fn read_offices(path: &Path) -> Result<Vec<RawOffice>> {
    log::info!("Reading offices from {}...", path.display());
    let body = fs::read_to_string(path).map_err(|source| Error::Read {
        origin: path.display().to_string(),
        source,
    })?;

    parse_offices(&body)
}

pub fn parse_offices(body: &str) -> Result<Vec<RawOffice>> {
    let mut document: Value = serde_json::from_str(body).map_err(Error::Decode)?;

    let offices = match document.get_mut("offices").map(Value::take) {
        Some(Value::Array(x)) => x,
        Some(_) => return Err(Error::OfficesNotArray),
        None => return Err(Error::MissingOffices),
    };

    offices
        .into_iter()
        .enumerate()
        .map(|(index, x)| {
            serde_json::from_value(x).map_err(|source| Error::Record { index, source })
        })
        .collect()
}
