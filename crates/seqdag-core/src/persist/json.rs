//! JSON serialization, mainly for inspection and interchange.

use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::PersistError;
use super::image::GraphImage;
use crate::graph::SequenceGraph;

impl<T> SequenceGraph<T>
where
    T: Clone + Eq + Hash + Serialize,
{
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(&self.to_image())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(&self.to_image())?)
    }
}

impl<T> SequenceGraph<T>
where
    T: Clone + Eq + Hash + DeserializeOwned,
{
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let image: GraphImage<T> = serde_json::from_str(json)?;
        Self::from_image(image)
    }
}
