//! Input loading for indexes and triple lists
//!
//! Reads JSON from stdin, a local file, or a URL and decodes it into an
//! [`Index`] or a list of [`Triple`]s.

use std::io::Read;
use std::path::PathBuf;

use tracing::info;
use url::Url;

use crate::error::SerializeError;
use crate::index::{Index, Triple};

/// Where to read input from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
    Url(String),
}

impl InputSource {
    /// Interpret a command-line argument: "-" is stdin, http(s) URLs are
    /// fetched, anything else is a local path
    pub fn parse(arg: &str) -> Result<Self, SerializeError> {
        if arg == "-" {
            return Ok(InputSource::Stdin);
        }
        if arg.starts_with("http://") || arg.starts_with("https://") {
            let url = Url::parse(arg).map_err(|e| SerializeError::LoadError {
                path: arg.to_string(),
                reason: format!("Invalid URL: {}", e),
            })?;
            return Ok(InputSource::Url(url.to_string()));
        }
        Ok(InputSource::Path(PathBuf::from(arg)))
    }

    /// Human-readable origin used in error messages
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Path(p) => p.display().to_string(),
            InputSource::Url(u) => u.clone(),
        }
    }
}

/// Read the raw text of a source
pub fn read_source(source: &InputSource) -> Result<String, SerializeError> {
    info!(source = %source.describe(), "reading input");
    match source {
        InputSource::Stdin => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
        InputSource::Path(path) => {
            if !path.is_file() {
                return Err(SerializeError::InvalidPath(path.clone()));
            }
            std::fs::read_to_string(path).map_err(|e| SerializeError::LoadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        InputSource::Url(url) => fetch_url(url),
    }
}

/// Decode an index from JSON text
pub fn parse_index(content: &str, origin: &str) -> Result<Index, SerializeError> {
    serde_json::from_str(content).map_err(|e| SerializeError::InvalidInput {
        origin: origin.to_string(),
        reason: e.to_string(),
    })
}

/// Decode a triple list from JSON text
pub fn parse_triples(content: &str, origin: &str) -> Result<Vec<Triple>, SerializeError> {
    serde_json::from_str(content).map_err(|e| SerializeError::InvalidInput {
        origin: origin.to_string(),
        reason: e.to_string(),
    })
}

/// Load an index from any source
pub fn load_index(source: &InputSource) -> Result<Index, SerializeError> {
    let content = read_source(source)?;
    let index = parse_index(&content, &source.describe())?;
    info!(subjects = index.len(), triples = index.triple_count(), "loaded index");
    Ok(index)
}

/// Load a triple list from any source
pub fn load_triples(source: &InputSource) -> Result<Vec<Triple>, SerializeError> {
    let content = read_source(source)?;
    let triples = parse_triples(&content, &source.describe())?;
    info!(triples = triples.len(), "loaded triples");
    Ok(triples)
}

fn fetch_url(url: &str) -> Result<String, SerializeError> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|e| SerializeError::LoadError {
            path: url.to_string(),
            reason: format!("HTTP request failed: {}", e),
        })?
        .text()
        .map_err(|e| SerializeError::LoadError {
            path: url.to_string(),
            reason: format!("Failed to read response: {}", e),
        })
}
