//! Built-in exercise knowledge base.
//!
//! Resource records are grouped by body region, the default record comes last.
//! Illustrations are SVG documents under `assets/illustrations`, one file per
//! identifier.

pub(crate) mod illustrations;
pub(crate) mod resources;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::{illustrations::*, resources::*};
    use crate::{Alias, DEFAULT_ID, Slug};

    fn assert_canonical_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert_eq!(Slug::new(id).as_str(), id, "non-canonical id");
            assert!(seen.insert(id), "duplicate id {id}");
        }
        assert!(seen.contains(DEFAULT_ID), "missing default");
    }

    fn assert_aliases<'a>(aliases: &[Alias], ids: &HashSet<&'a str>) {
        let mut keywords = HashSet::new();
        for alias in aliases {
            assert!(keywords.insert(alias.keyword), "duplicate keyword {}", alias.keyword);
            assert_eq!(alias.keyword.to_lowercase(), alias.keyword);
            assert_ne!(alias.target, DEFAULT_ID);
            assert!(
                ids.contains(alias.target),
                "unknown target {} for \"{}\"",
                alias.target,
                alias.keyword
            );
        }
    }

    #[test]
    fn test_resources() {
        assert_canonical_unique_ids(RESOURCES.iter().map(|r| r.id));

        for resource in &RESOURCES {
            assert!(!resource.name.is_empty(), "{}", resource.id);
            assert!(!resource.category.is_empty(), "{}", resource.id);
            assert!(!resource.body_part.is_empty(), "{}", resource.id);
            assert!(!resource.instructions.is_empty(), "{}", resource.id);
            assert!(!resource.conditions.is_empty(), "{}", resource.id);
            assert!(resource.media.image.is_some(), "{}", resource.id);

            let conditions = resource.conditions.iter().collect::<HashSet<_>>();
            assert_eq!(
                conditions.len(),
                resource.conditions.len(),
                "duplicate condition for \"{}\"",
                resource.id
            );
            for condition in resource.conditions {
                assert_eq!(Slug::new(condition).as_str(), *condition);
            }
        }
    }

    #[test]
    fn test_default_resource() {
        let default = RESOURCES.iter().find(|r| r.id == DEFAULT_ID).unwrap();
        assert_eq!(default.name, "General Exercise");
        assert_eq!(default.media.video, None);
        assert_eq!(RESOURCES.last().map(|r| r.id), Some(DEFAULT_ID));
    }

    #[test]
    fn test_resource_aliases() {
        let ids = RESOURCES.iter().map(|r| r.id).collect::<HashSet<_>>();
        assert_aliases(&RESOURCE_ALIASES, &ids);
    }

    #[test]
    fn test_illustrations() {
        assert_canonical_unique_ids(ILLUSTRATIONS.iter().map(|i| i.id));

        for illustration in &ILLUSTRATIONS {
            assert!(
                illustration.markup.trim_start().starts_with("<svg"),
                "{}",
                illustration.id
            );
            assert!(
                illustration.markup.trim_end().ends_with("</svg>"),
                "{}",
                illustration.id
            );
            assert!(!illustration.caption.is_empty(), "{}", illustration.id);
        }
    }

    #[test]
    fn test_illustration_aliases() {
        let ids = ILLUSTRATIONS.iter().map(|i| i.id).collect::<HashSet<_>>();
        assert_aliases(&ILLUSTRATION_ALIASES, &ids);
    }

    #[test]
    fn test_catalogs_diverge() {
        let resources = RESOURCES.iter().map(|r| r.id).collect::<HashSet<_>>();
        let illustrations = ILLUSTRATIONS.iter().map(|i| i.id).collect::<HashSet<_>>();

        assert!(resources.contains("ankle-circles"));
        assert!(!illustrations.contains("ankle-circles"));
        assert!(illustrations.contains("ankle-alphabet"));
        assert!(!resources.contains("ankle-alphabet"));
    }
}
