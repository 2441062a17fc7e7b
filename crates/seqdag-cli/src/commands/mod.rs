pub mod build;
pub mod contains;
pub mod dump;
pub mod input;
pub mod search;
pub mod stats;
