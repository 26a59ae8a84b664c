use std::{collections::BTreeSet, sync::LazyLock};

use log::{debug, error};

use crate::{
    Catalog, ExerciseResource, IllustrationAsset, IntegrityError, Resolution, Resolver, data,
    index::{self, Entry},
    resource::body_part_fallback,
};

static KNOWLEDGE_BASE: LazyLock<Result<KnowledgeBase, IntegrityError>> =
    LazyLock::new(KnowledgeBase::builtin);

/// Validated built-in knowledge base, shared by the whole process.
///
/// A process should call this once at startup and refuse to run when the
/// built-in tables are inconsistent.
pub fn init() -> Result<&'static KnowledgeBase, IntegrityError> {
    match &*KNOWLEDGE_BASE {
        Ok(knowledge_base) => Ok(knowledge_base),
        Err(err) => {
            error!("invalid knowledge base: {err}");
            Err(err.clone())
        }
    }
}

/// Resource and illustration catalogs together with their resolvers.
///
/// All queries are total: unknown names resolve to the default records and
/// unknown conditions or body parts yield empty lists.
#[derive(Debug)]
pub struct KnowledgeBase {
    resources: Resolver<ExerciseResource>,
    illustrations: Resolver<IllustrationAsset>,
}

impl KnowledgeBase {
    #[must_use]
    pub fn new(
        resources: Resolver<ExerciseResource>,
        illustrations: Resolver<IllustrationAsset>,
    ) -> Self {
        Self {
            resources,
            illustrations,
        }
    }

    pub fn builtin() -> Result<Self, IntegrityError> {
        let resources = Resolver::new(
            Catalog::new(data::resources::RESOURCES)?,
            &data::resources::RESOURCE_ALIASES,
            Some(body_part_fallback),
        )?;
        let illustrations = Resolver::new(
            Catalog::new(data::illustrations::ILLUSTRATIONS)?,
            &data::illustrations::ILLUSTRATION_ALIASES,
            None,
        )?;

        debug!(
            "loaded {} exercise resources and {} illustrations",
            resources.catalog().len(),
            illustrations.catalog().len()
        );

        Ok(Self::new(resources, illustrations))
    }

    #[must_use]
    pub fn resources(&self) -> &Catalog<ExerciseResource> {
        self.resources.catalog()
    }

    #[must_use]
    pub fn illustrations(&self) -> &Catalog<IllustrationAsset> {
        self.illustrations.catalog()
    }

    #[must_use]
    pub fn resolve_resource(&self, name: &str) -> &ExerciseResource {
        self.resources.resolve(name)
    }

    #[must_use]
    pub fn explain_resource(&self, name: &str) -> Resolution<'_, ExerciseResource> {
        self.resources.explain(name)
    }

    #[must_use]
    pub fn resolve_illustration(&self, name: &str) -> &IllustrationAsset {
        self.illustrations.resolve(name)
    }

    #[must_use]
    pub fn explain_illustration(&self, name: &str) -> Resolution<'_, IllustrationAsset> {
        self.illustrations.explain(name)
    }

    #[must_use]
    pub fn resources_for_condition(&self, condition: &str) -> Vec<Entry<'_>> {
        index::for_condition(self.resources(), condition)
    }

    #[must_use]
    pub fn resources_for_body_part(&self, body_part: &str) -> Vec<Entry<'_>> {
        index::for_body_part(self.resources(), body_part)
    }

    #[must_use]
    pub fn conditions(&self) -> BTreeSet<&'static str> {
        index::conditions(self.resources())
    }

    #[must_use]
    pub fn body_parts(&self) -> BTreeSet<&'static str> {
        index::body_parts(self.resources())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{DEFAULT_ID, Match, Record, Slug};

    const INPUTS: [&str; 20] = [
        "",
        " ",
        "!!!",
        "\t\n",
        "Quad Sets",
        "quad-set",
        "QUAD_SETS",
        "Straight Leg Raise (SLR)",
        "SIT-TO-STAND",
        "Chair Squat",
        "some totally unknown exercise xyz",
        "Ankle Circles",
        "Warm Up",
        "gentle knee bends",
        "Child's Pose",
        "Heel toe walk",
        "Doorway pec stretch",
        "Ünïcödé ✓ 🦵",
        "a-b-c-d-e-f-g",
        "default",
    ];

    fn knowledge_base() -> &'static KnowledgeBase {
        init().unwrap()
    }

    #[test]
    fn test_init() {
        let knowledge_base = knowledge_base();
        assert_eq!(knowledge_base.resources().len(), 74);
        assert_eq!(knowledge_base.illustrations().len(), 22);
        assert!(std::ptr::eq(knowledge_base, init().unwrap()));
    }

    #[rstest]
    #[case("Quad Sets", "quad-sets", Match::Exact)]
    #[case("quad-set", "quad-sets", Match::Alias { keyword: "quad set" })]
    #[case("SIT-TO-STAND", "chair-squats", Match::Alias { keyword: "sit to stand" })]
    #[case(
        "Straight Leg Raise (SLR)",
        "straight-leg-raises",
        Match::Alias { keyword: "straight leg raise" }
    )]
    #[case("Child's Pose", "child-pose", Match::Alias { keyword: "child" })]
    #[case("Cat-Cow", "cat-cow-stretch", Match::Alias { keyword: "cat cow" })]
    #[case("Figure 4 stretch", "piriformis-stretch", Match::Alias { keyword: "figure 4" })]
    #[case("Terminal Knee Extension (TKE)", "terminal-knee-extension", Match::Alias { keyword: "terminal knee" })]
    #[case("gentle knee bends", "quad-sets", Match::Fallback)]
    #[case("Lower back stretch", "pelvic-tilts", Match::Fallback)]
    #[case("Neck stretches", "neck-range-of-motion", Match::Fallback)]
    #[case("some totally unknown exercise xyz", "default", Match::Default)]
    #[case("", "default", Match::Empty)]
    #[case("!!!", "default", Match::Default)]
    fn test_explain_resource(
        #[case] name: &str,
        #[case] expected_id: &str,
        #[case] expected_match: Match,
    ) {
        let resolution = knowledge_base().explain_resource(name);
        assert_eq!(resolution.record.id, expected_id);
        assert_eq!(resolution.matched, expected_match);
    }

    #[test]
    fn test_resolve_resource_default() {
        let resource = knowledge_base().resolve_resource("some totally unknown exercise xyz");
        assert_eq!(resource.id, DEFAULT_ID);
        assert_eq!(resource.name, "General Exercise");
    }

    #[test]
    fn test_resolve_resource_alias_order() {
        // "squat" is listed before "chair squat" and "tandem" after "walk", so
        // the generic keywords shadow the specific ones.
        let knowledge_base = knowledge_base();
        assert_eq!(
            knowledge_base.explain_resource("Chair Squat").matched,
            Match::Alias { keyword: "squat" }
        );
        assert_eq!(knowledge_base.resolve_resource("Chair Squat").id, "bodyweight-squats");
        assert_eq!(knowledge_base.resolve_resource("tandem walk").id, "walking");
        assert_eq!(knowledge_base.resolve_resource("Chair Squats").id, "chair-squats");
    }

    #[test]
    fn test_resolve_resource_body_part_whole_words() {
        // "warm" contains the body part "arm", which must not select
        // "nerve-glides-median".
        assert_eq!(knowledge_base().resolve_resource("Warm Up").id, DEFAULT_ID);
        assert_eq!(knowledge_base().resolve_resource("arm swings").id, "nerve-glides-median");
    }

    #[rstest]
    #[case("Ankle Circles", "default", Match::Default)]
    #[case("Quad Sets", "quad-sets", Match::Exact)]
    #[case("Quadriceps stretch", "quad-sets", Match::Alias { keyword: "quad" })]
    #[case("SIT-TO-STAND", "chair-squats", Match::Alias { keyword: "sit to stand" })]
    #[case("Toe raises", "calf-raises", Match::Alias { keyword: "toe raise" })]
    #[case("Diaphragmatic breathing", "deep-breathing", Match::Alias { keyword: "breathing" })]
    #[case("Doorway pec stretch", "stretching-routine", Match::Alias { keyword: "stretch" })]
    #[case("Morning Walk", "morning-walk", Match::Exact)]
    #[case("gentle knee bends", "default", Match::Default)]
    #[case("", "default", Match::Empty)]
    fn test_explain_illustration(
        #[case] name: &str,
        #[case] expected_id: &str,
        #[case] expected_match: Match,
    ) {
        let resolution = knowledge_base().explain_illustration(name);
        assert_eq!(resolution.record.id, expected_id);
        assert_eq!(resolution.matched, expected_match);
    }

    #[test]
    fn test_resolve_illustration_default() {
        let illustration = knowledge_base().resolve_illustration("Ankle Circles");
        assert_eq!(illustration.id, DEFAULT_ID);
        assert!(illustration.markup.contains("Follow your physical therapist"));
    }

    #[test]
    fn test_resolution_is_total_and_deterministic() {
        let knowledge_base = knowledge_base();
        for input in INPUTS {
            let resource = knowledge_base.resolve_resource(input);
            let illustration = knowledge_base.resolve_illustration(input);
            assert!(knowledge_base.resources().contains(resource.id()));
            assert!(knowledge_base.illustrations().contains(illustration.id()));
            assert!(std::ptr::eq(resource, knowledge_base.resolve_resource(input)));
            assert!(std::ptr::eq(
                illustration,
                knowledge_base.resolve_illustration(input)
            ));
        }
    }

    #[test]
    fn test_exact_match_priority() {
        let knowledge_base = knowledge_base();
        for resource in knowledge_base.resources().iter() {
            let resolution = knowledge_base.explain_resource(resource.id);
            assert_eq!(resolution.record.id, resource.id);
            assert_eq!(resolution.matched, Match::Exact);
        }
        for illustration in knowledge_base.illustrations().iter() {
            let resolution = knowledge_base.explain_illustration(illustration.id);
            assert_eq!(resolution.record.id, illustration.id);
            assert_eq!(resolution.matched, Match::Exact);
        }
    }

    #[test]
    fn test_normalized_inputs_resolve_alike() {
        let knowledge_base = knowledge_base();
        for input in INPUTS {
            let normalized = Slug::new(input);
            assert_eq!(
                knowledge_base.resolve_resource(input).id,
                knowledge_base.resolve_resource(&normalized).id,
                "{input}"
            );
            assert_eq!(
                knowledge_base.resolve_illustration(input).id,
                knowledge_base.resolve_illustration(&normalized).id,
                "{input}"
            );
        }
    }

    #[test]
    fn test_resources_for_condition() {
        let ids = knowledge_base()
            .resources_for_condition("carpal-tunnel")
            .into_iter()
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "wrist-range-of-motion",
                "wrist-flexion-stretch",
                "wrist-extension-stretch",
                "finger-spreads",
                "finger-tendon-glides",
                "grip-strengthening",
                "thumb-opposition",
                "nerve-glides-median",
            ]
        );
    }

    #[test]
    fn test_condition_index_correctness() {
        let knowledge_base = knowledge_base();
        for condition in knowledge_base.conditions() {
            let entries = knowledge_base.resources_for_condition(condition);
            assert!(entries.iter().all(|(_, r)| r.has_condition(condition)));
            let expected = knowledge_base
                .resources()
                .iter()
                .filter(|r| r.has_condition(condition))
                .map(|r| r.id)
                .collect::<Vec<_>>();
            assert_eq!(
                entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
                expected
            );
        }
        assert!(knowledge_base.resources_for_condition("unknown").is_empty());
    }

    #[test]
    fn test_resources_for_body_part() {
        let knowledge_base = knowledge_base();
        assert_eq!(
            knowledge_base
                .resources_for_body_part("wrist")
                .into_iter()
                .map(|(id, _)| id)
                .collect::<Vec<_>>(),
            vec![
                "wrist-range-of-motion",
                "wrist-flexion-stretch",
                "wrist-extension-stretch"
            ]
        );
        assert!(knowledge_base.resources_for_body_part("Wrist").is_empty());

        let total = knowledge_base
            .body_parts()
            .into_iter()
            .map(|b| knowledge_base.resources_for_body_part(b).len())
            .sum::<usize>();
        assert_eq!(total, knowledge_base.resources().len());
    }
}
