use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

use crate::{Catalog, DEFAULT_ID, Record, Slug};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseResource {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub body_part: &'static str,
    pub difficulty: Difficulty,
    pub media: Media,
    pub instructions: &'static [&'static str],
    pub conditions: &'static [&'static str],
}

impl ExerciseResource {
    #[must_use]
    pub fn has_condition(&self, condition: &str) -> bool {
        self.conditions.iter().any(|c| *c == condition)
    }
}

impl Record for ExerciseResource {
    fn id(&self) -> &str {
        self.id
    }
}

#[derive(
    AsRefStr, Display, EnumIter, Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// External references shown next to the instructions. Opaque to resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Media {
    pub image: Option<Image>,
    pub video: Option<Video>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub url: &'static str,
    pub alt: &'static str,
    pub credit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub provider: VideoProvider,
    pub id: &'static str,
    pub title: &'static str,
    pub channel: &'static str,
}

#[derive(AsRefStr, Display, Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VideoProvider {
    YouTube,
}

/// First record, in catalog order, whose body part occurs as whole words in the
/// normalized query. The default record never matches.
#[must_use]
pub fn body_part_fallback<'c>(
    catalog: &'c Catalog<ExerciseResource>,
    query: &Slug,
) -> Option<&'c ExerciseResource> {
    catalog
        .iter()
        .filter(|r| r.id != DEFAULT_ID && !r.body_part.is_empty())
        .find(|r| query.contains_words(r.body_part))
}
