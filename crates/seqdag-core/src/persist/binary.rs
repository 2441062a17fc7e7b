//! Binary serialization using postcard.

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
    /// Serialize graph to binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, PersistError> {
        Ok(postcard::to_allocvec(&self.to_image())?)
    }
}

impl<T> SequenceGraph<T>
where
    T: Clone + Eq + Hash + DeserializeOwned,
{
    /// Deserialize graph from binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, PersistError> {
        let image: GraphImage<T> = postcard::from_bytes(bytes)?;
        Self::from_image(image)
    }
}
