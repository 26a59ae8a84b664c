#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Maps free-text exercise names to curated exercise resources and
//! illustrations.
//!
//! Resolution never fails: every name yields a record, falling back to the
//! `default` record of the respective catalog.

pub mod catalog;
mod data;
pub mod error;
pub mod illustration;
pub mod index;
pub mod knowledge_base;
pub mod name;
pub mod resolver;
pub mod resource;

pub use catalog::{Alias, Catalog, DEFAULT_ID, Record};
pub use error::IntegrityError;
pub use illustration::IllustrationAsset;
pub use knowledge_base::KnowledgeBase;
pub use name::{Slug, normalize};
pub use resolver::{Fallback, Match, Resolution, Resolver};
pub use resource::{
    Difficulty, ExerciseResource, Image, Media, Video, VideoProvider, body_part_fallback,
};
