//! Saving and loading graphs.
//!
//! Two encodings of the same `GraphImage`: compact postcard binary and
//! serde_json. File-based helpers choose by extension, `.json` meaning JSON
//! and anything else binary.

mod binary;
mod error;
mod image;
mod json;


use std::fs;
use std::hash::Hash;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::graph::SequenceGraph;

pub use error::PersistError;
pub use image::{FORMAT_VERSION, GraphImage, NodeImage};

/// On-disk encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Binary,
    Json,
}

impl Format {
    /// Pick the encoding from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Binary,
        }
    }
}

impl<T> SequenceGraph<T>
where
    T: Clone + Eq + Hash + Serialize,
{
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let format = Format::from_path(path);
        let bytes = match format {
            Format::Binary => self.to_binary()?,
            Format::Json => self.to_json()?.into_bytes(),
        };
        fs::write(path, &bytes)?;
        info!(
            path = %path.display(),
            ?format,
            nodes = self.len(),
            bytes = bytes.len(),
            "graph saved"
        );
        Ok(())
    }
}

impl<T> SequenceGraph<T>
where
    T: Clone + Eq + Hash + DeserializeOwned,
{
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let path = path.as_ref();
        let format = Format::from_path(path);
        let graph = match format {
            Format::Binary => Self::from_binary(&fs::read(path)?)?,
            Format::Json => Self::from_json(&fs::read_to_string(path)?)?,
        };
        info!(
            path = %path.display(),
            ?format,
            nodes = graph.len(),
            "graph loaded"
        );
        Ok(graph)
    }
}
