use std::collections::BTreeSet;

use crate::{Catalog, ExerciseResource};

pub type Entry<'c> = (&'c str, &'c ExerciseResource);

#[must_use]
pub fn for_condition<'c>(
    catalog: &'c Catalog<ExerciseResource>,
    condition: &str,
) -> Vec<Entry<'c>> {
    catalog
        .iter()
        .filter(|r| r.has_condition(condition))
        .map(|r| (r.id, r))
        .collect()
}

#[must_use]
pub fn for_body_part<'c>(
    catalog: &'c Catalog<ExerciseResource>,
    body_part: &str,
) -> Vec<Entry<'c>> {
    catalog
        .iter()
        .filter(|r| r.body_part == body_part)
        .map(|r| (r.id, r))
        .collect()
}

#[must_use]
pub fn conditions(catalog: &Catalog<ExerciseResource>) -> BTreeSet<&'static str> {
    catalog
        .iter()
        .flat_map(|r| r.conditions.iter().copied())
        .collect()
}

#[must_use]
pub fn body_parts(catalog: &Catalog<ExerciseResource>) -> BTreeSet<&'static str> {
    catalog
        .iter()
        .map(|r| r.body_part)
        .filter(|b| !b.is_empty())
        .collect()
}
