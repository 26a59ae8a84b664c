use std::collections::BTreeMap;

use crate::{IntegrityError, Slug};

/// Identifier of the terminal fallback record every catalog must contain.
pub const DEFAULT_ID: &str = "default";

pub trait Record {
    fn id(&self) -> &str;
}

/// Immutable collection of records keyed by canonical identifier.
///
/// Iteration follows declaration order, which is significant for the
/// attribute fallback of the resolver and for index queries.
#[derive(Debug)]
pub struct Catalog<R> {
    records: Vec<R>,
    positions: BTreeMap<String, usize>,
    default: usize,
}

impl<R: Record> Catalog<R> {
    pub fn new(records: impl IntoIterator<Item = R>) -> Result<Self, IntegrityError> {
        let records = records.into_iter().collect::<Vec<_>>();
        let mut positions = BTreeMap::new();

        for (position, record) in records.iter().enumerate() {
            let id = record.id();
            if id.is_empty() || Slug::new(id).as_str() != id {
                return Err(IntegrityError::NonCanonicalID(id.to_string()));
            }
            if positions.insert(id.to_string(), position).is_some() {
                return Err(IntegrityError::DuplicateID(id.to_string()));
            }
        }

        let default = *positions
            .get(DEFAULT_ID)
            .ok_or(IntegrityError::MissingDefault)?;

        Ok(Self {
            records,
            positions,
            default,
        })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.position(id).map(|position| &self.records[position])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    #[must_use]
    pub fn default_record(&self) -> &R {
        &self.records[self.default]
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`, a valid catalog holds at least its default record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub(crate) fn at(&self, position: usize) -> &R {
        &self.records[position]
    }
}

/// Entry of an alias table, mapping a free-text fragment to a record id.
///
/// Alias tables are ordered slices and the resolver stops at the first entry
/// that matches. A generic keyword placed before a more specific one shadows
/// it, so specific keywords have to come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub keyword: &'static str,
    pub target: &'static str,
}

impl Alias {
    #[must_use]
    pub const fn new(keyword: &'static str, target: &'static str) -> Self {
        Self { keyword, target }
    }
}
