use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::{Alias, Catalog, DEFAULT_ID, IntegrityError, Record, Slug};

/// Additional tier consulted after the alias table and before the default
/// record.
pub type Fallback<R> = for<'c> fn(&'c Catalog<R>, &Slug) -> Option<&'c R>;

/// How a name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum Match {
    /// The input was empty.
    Empty,
    /// The normalized input is a record id.
    Exact,
    /// An alias keyword occurs in the input.
    Alias { keyword: &'static str },
    /// The catalog specific fallback step found a record.
    Fallback,
    /// Nothing matched.
    Default,
}

impl Match {
    #[must_use]
    pub fn is_default(self) -> bool {
        matches!(self, Match::Empty | Match::Default)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Empty => write!(f, "empty input"),
            Match::Exact => write!(f, "exact"),
            Match::Alias { keyword } => write!(f, "alias \"{keyword}\""),
            Match::Fallback => write!(f, "fallback"),
            Match::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Resolution<'a, R> {
    pub record: &'a R,
    pub matched: Match,
}

#[derive(Debug)]
struct Keyword {
    text: &'static str,
    slug: String,
    target: usize,
}

impl Keyword {
    fn matches(&self, normalized: &Slug, lowercase: &str) -> bool {
        normalized.contains(self.slug.as_str()) || lowercase.contains(self.text)
    }
}

/// Maps free-text names onto the records of one catalog.
///
/// Tiers are tried in order: empty input, exact id, alias table in table
/// order, optional fallback, default record. The first tier that produces a
/// record wins.
#[derive(Debug)]
pub struct Resolver<R> {
    catalog: Catalog<R>,
    keywords: Vec<Keyword>,
    fallback: Option<Fallback<R>>,
}

impl<R: Record> Resolver<R> {
    pub fn new(
        catalog: Catalog<R>,
        aliases: &[Alias],
        fallback: Option<Fallback<R>>,
    ) -> Result<Self, IntegrityError> {
        let keywords = aliases
            .iter()
            .map(|alias| {
                if alias.keyword.trim().is_empty() || alias.keyword.to_lowercase() != alias.keyword {
                    return Err(IntegrityError::InvalidKeyword(alias.keyword.to_string()));
                }
                if alias.target == DEFAULT_ID {
                    return Err(IntegrityError::AliasToDefault(alias.keyword.to_string()));
                }
                let target = catalog.position(alias.target).ok_or_else(|| {
                    IntegrityError::DanglingAlias {
                        keyword: alias.keyword.to_string(),
                        target: alias.target.to_string(),
                    }
                })?;
                Ok(Keyword {
                    text: alias.keyword,
                    slug: alias.keyword.split_whitespace().collect::<Vec<_>>().join("-"),
                    target,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            catalog,
            keywords,
            fallback,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog<R> {
        &self.catalog
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> &R {
        self.explain(name).record
    }

    #[must_use]
    pub fn explain(&self, name: &str) -> Resolution<'_, R> {
        let resolution = self.find(name);
        if resolution.matched.is_default() {
            debug!("no record for \"{name}\", using default");
        } else {
            trace!(
                "resolved \"{name}\" to \"{}\" ({:?})",
                resolution.record.id(),
                resolution.matched
            );
        }
        resolution
    }

    fn find(&self, name: &str) -> Resolution<'_, R> {
        if name.is_empty() {
            return Resolution {
                record: self.catalog.default_record(),
                matched: Match::Empty,
            };
        }

        let normalized = Slug::new(name);

        if let Some(record) = self.catalog.get(&normalized) {
            return Resolution {
                record,
                matched: Match::Exact,
            };
        }

        let lowercase = name.to_lowercase();

        if let Some(keyword) = self
            .keywords
            .iter()
            .find(|k| k.matches(&normalized, &lowercase))
        {
            return Resolution {
                record: self.catalog.at(keyword.target),
                matched: Match::Alias {
                    keyword: keyword.text,
                },
            };
        }

        if let Some(record) = self
            .fallback
            .and_then(|fallback| fallback(&self.catalog, &normalized))
        {
            return Resolution {
                record,
                matched: Match::Fallback,
            };
        }

        Resolution {
            record: self.catalog.default_record(),
            matched: Match::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::catalog::tests::Entry;

    fn catalog() -> Catalog<Entry> {
        Catalog::new([
            Entry("squats"),
            Entry("chair-squats"),
            Entry("wall-sits"),
            Entry("default"),
        ])
        .unwrap()
    }

    const ALIASES: [Alias; 3] = [
        Alias::new("squat", "squats"),
        Alias::new("chair squat", "chair-squats"),
        Alias::new("wall sit", "wall-sits"),
    ];

    fn wall_fallback<'c>(catalog: &'c Catalog<Entry>, query: &Slug) -> Option<&'c Entry> {
        if query.contains_words("wall") {
            catalog.get("wall-sits")
        } else {
            None
        }
    }

    #[rstest]
    #[case("", "default", Match::Empty)]
    #[case("Squats", "squats", Match::Exact)]
    #[case("Chair Squats", "chair-squats", Match::Exact)]
    #[case("  WALL-SITS!  ", "wall-sits", Match::Exact)]
    #[case("wall sit hold", "wall-sits", Match::Alias { keyword: "wall sit" })]
    #[case("wall-sit hold", "wall-sits", Match::Alias { keyword: "wall sit" })]
    #[case("goblet squat", "squats", Match::Alias { keyword: "squat" })]
    #[case("lunges", "default", Match::Default)]
    #[case("!!!", "default", Match::Default)]
    #[case("   ", "default", Match::Default)]
    fn test_resolver_explain(
        #[case] name: &str,
        #[case] expected_id: &str,
        #[case] expected_match: Match,
    ) {
        let resolver = Resolver::new(catalog(), &ALIASES, None).unwrap();
        let resolution = resolver.explain(name);
        assert_eq!(resolution.record.id(), expected_id);
        assert_eq!(resolution.matched, expected_match);
        assert_eq!(resolver.resolve(name).id(), expected_id);
    }

    #[test]
    fn test_resolver_first_alias_wins() {
        let resolver = Resolver::new(catalog(), &ALIASES, None).unwrap();

        // "squat" precedes "chair squat", so the specific keyword is shadowed.
        assert_eq!(
            resolver.explain("seated chair squat"),
            Resolution {
                record: &Entry("squats"),
                matched: Match::Alias { keyword: "squat" },
            }
        );

        let reordered = [ALIASES[1], ALIASES[0], ALIASES[2]];
        let resolver = Resolver::new(catalog(), &reordered, None).unwrap();

        assert_eq!(
            resolver.explain("seated chair squat"),
            Resolution {
                record: &Entry("chair-squats"),
                matched: Match::Alias {
                    keyword: "chair squat"
                },
            }
        );
    }

    #[test]
    fn test_resolver_exact_match_precedes_aliases() {
        let aliases = [Alias::new("squat", "squats")];
        let resolver = Resolver::new(catalog(), &aliases, None).unwrap();

        assert_eq!(resolver.explain("chair squats").matched, Match::Exact);
        assert_eq!(resolver.resolve("chair squats"), &Entry("chair-squats"));
    }

    #[test]
    fn test_resolver_raw_input_keyword() {
        // The normalized form drops the apostrophe, the raw input keeps it.
        let aliases = [Alias::new("child's", "squats")];
        let resolver = Resolver::new(catalog(), &aliases, None).unwrap();

        assert_eq!(resolver.resolve("Child's Pose"), &Entry("squats"));
        assert_eq!(resolver.resolve("Childs Pose"), &Entry("default"));
    }

    #[test]
    fn test_resolver_fallback() {
        let resolver = Resolver::new(catalog(), &[], Some(wall_fallback)).unwrap();

        assert_eq!(
            resolver.explain("wall push up"),
            Resolution {
                record: &Entry("wall-sits"),
                matched: Match::Fallback,
            }
        );
        assert_eq!(resolver.explain("wallet").matched, Match::Default);

        let resolver = Resolver::new(catalog(), &ALIASES, Some(wall_fallback)).unwrap();

        assert_eq!(
            resolver.explain("wall squat").matched,
            Match::Alias { keyword: "squat" }
        );
    }

    #[test]
    fn test_resolver_without_fallback() {
        let resolver = Resolver::new(catalog(), &[], None).unwrap();

        assert_eq!(resolver.explain("wall push up").matched, Match::Default);
    }

    #[rstest]
    #[case(
        Alias::new("lunge", "lunges"),
        IntegrityError::DanglingAlias {
            keyword: "lunge".to_string(),
            target: "lunges".to_string()
        }
    )]
    #[case(
        Alias::new("exercise", "default"),
        IntegrityError::AliasToDefault("exercise".to_string())
    )]
    #[case(Alias::new("", "squats"), IntegrityError::InvalidKeyword(String::new()))]
    #[case(Alias::new("  ", "squats"), IntegrityError::InvalidKeyword("  ".to_string()))]
    #[case(
        Alias::new("SLR", "squats"),
        IntegrityError::InvalidKeyword("SLR".to_string())
    )]
    fn test_resolver_new_invalid(#[case] alias: Alias, #[case] expected: IntegrityError) {
        assert_eq!(
            Resolver::new(catalog(), &[alias], None).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_match_is_default() {
        assert!(Match::Empty.is_default());
        assert!(Match::Default.is_default());
        assert!(!Match::Exact.is_default());
        assert!(!Match::Alias { keyword: "x" }.is_default());
        assert!(!Match::Fallback.is_default());
    }

    #[rstest]
    #[case(Match::Empty, "empty input")]
    #[case(Match::Exact, "exact")]
    #[case(Match::Alias { keyword: "sit to stand" }, "alias \"sit to stand\"")]
    #[case(Match::Fallback, "fallback")]
    #[case(Match::Default, "default")]
    fn test_match_display(#[case] matched: Match, #[case] expected: &str) {
        assert_eq!(matched.to_string(), expected);
    }
}
