use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

use anyhow::Result;
use caribou_domain::{
    DEFAULT_ID, Difficulty, ExerciseResource, IllustrationAsset, KnowledgeBase, Match,
    Resolution, Video, VideoProvider,
};
use serde::Serialize;

use crate::settings::OutputFormat;

pub fn render<T: Serialize + Display>(report: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

#[derive(Serialize)]
pub struct ResourceReport<'a> {
    pub query: &'a str,
    pub matched: Match,
    pub resource: &'a ExerciseResource,
}

impl<'a> ResourceReport<'a> {
    #[must_use]
    pub fn new(query: &'a str, resolution: Resolution<'a, ExerciseResource>) -> Self {
        Self {
            query,
            matched: resolution.matched,
            resource: resolution.record,
        }
    }
}

impl Display for ResourceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resource = self.resource;
        writeln!(f, "{} ({})", resource.id, self.matched)?;
        writeln!(f, "  name:       {}", resource.name)?;
        writeln!(f, "  category:   {}", resource.category)?;
        writeln!(f, "  body part:  {}", resource.body_part)?;
        writeln!(f, "  difficulty: {}", resource.difficulty)?;
        writeln!(f, "  conditions: {}", resource.conditions.join(", "))?;
        if let Some(image) = &resource.media.image {
            writeln!(f, "  image:      {} ({})", image.url, image.credit)?;
        }
        if let Some(video) = &resource.media.video {
            writeln!(
                f,
                "  video:      {} \"{}\" by {}",
                video_url(video),
                video.title,
                video.channel
            )?;
        }
        writeln!(f, "  instructions:")?;
        for (number, step) in resource.instructions.iter().enumerate() {
            writeln!(f, "    {}. {step}", number + 1)?;
        }
        Ok(())
    }
}

fn video_url(video: &Video) -> String {
    match video.provider {
        VideoProvider::YouTube => format!("https://www.youtube.com/watch?v={}", video.id),
    }
}

#[derive(Serialize)]
pub struct IllustrationReport<'a> {
    pub query: &'a str,
    pub matched: Match,
    pub id: &'a str,
    pub caption: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<&'a str>,
}

impl<'a> IllustrationReport<'a> {
    #[must_use]
    pub fn new(
        query: &'a str,
        resolution: Resolution<'a, IllustrationAsset>,
        with_markup: bool,
    ) -> Self {
        let illustration = resolution.record;
        Self {
            query,
            matched: resolution.matched,
            id: illustration.id,
            caption: illustration.caption,
            markup: with_markup.then_some(illustration.markup),
        }
    }
}

impl Display for IllustrationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.id, self.matched)?;
        writeln!(f, "  caption: {}", self.caption)?;
        if let Some(markup) = self.markup {
            writeln!(f, "{}", markup.trim_end())?;
        }
        Ok(())
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Summary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub body_part: &'a str,
    pub difficulty: Difficulty,
}

/// Resources sharing a condition or body part.
#[derive(Serialize)]
pub struct ResourceList<'a> {
    pub key: &'a str,
    pub resources: Vec<Summary<'a>>,
}

impl<'a> ResourceList<'a> {
    #[must_use]
    pub fn new(key: &'a str, entries: Vec<(&'a str, &'a ExerciseResource)>) -> Self {
        Self {
            key,
            resources: entries
                .into_iter()
                .map(|(id, resource)| Summary {
                    id,
                    name: resource.name,
                    body_part: resource.body_part,
                    difficulty: resource.difficulty,
                })
                .collect(),
        }
    }
}

impl Display for ResourceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resources.is_empty() {
            return writeln!(f, "no resources for \"{}\"", self.key);
        }
        for summary in &self.resources {
            writeln!(
                f,
                "{:<30} {:<12} {:<12} {}",
                summary.id, summary.body_part, summary.difficulty, summary.name
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct Vocabulary(pub BTreeSet<&'static str>);

impl Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.0 {
            writeln!(f, "{term}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct AuditEntry<'a> {
    pub name: &'a str,
    pub resource: &'static str,
    pub resource_match: Match,
    pub illustration: &'static str,
    pub illustration_match: Match,
}

/// Resolution outcome for a list of exercise names, e.g. a prescription
/// export. Names that end up on a default record are silently degraded in
/// the app and are counted separately, whatever tier led there.
#[derive(Serialize, Debug, PartialEq)]
pub struct Audit<'a> {
    pub entries: Vec<AuditEntry<'a>>,
    pub resource_defaults: usize,
    pub illustration_defaults: usize,
}

impl<'a> Audit<'a> {
    /// Blank lines are skipped.
    #[must_use]
    pub fn run(knowledge_base: &'static KnowledgeBase, input: &'a str) -> Self {
        let entries = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|name| {
                let resource = knowledge_base.explain_resource(name);
                let illustration = knowledge_base.explain_illustration(name);
                AuditEntry {
                    name,
                    resource: resource.record.id,
                    resource_match: resource.matched,
                    illustration: illustration.record.id,
                    illustration_match: illustration.matched,
                }
            })
            .collect::<Vec<_>>();
        let resource_defaults = entries
            .iter()
            .filter(|e| e.resource == DEFAULT_ID)
            .count();
        let illustration_defaults = entries
            .iter()
            .filter(|e| e.illustration == DEFAULT_ID)
            .count();

        Self {
            entries,
            resource_defaults,
            illustration_defaults,
        }
    }
}

impl Display for Audit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry.name)?;
            writeln!(
                f,
                "  resource:     {} ({})",
                entry.resource, entry.resource_match
            )?;
            writeln!(
                f,
                "  illustration: {} ({})",
                entry.illustration, entry.illustration_match
            )?;
        }
        writeln!(
            f,
            "{} names, {} without resource, {} without illustration",
            self.entries.len(),
            self.resource_defaults,
            self.illustration_defaults
        )
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Verification {
    pub resources: usize,
    pub illustrations: usize,
    pub conditions: usize,
    pub body_parts: usize,
}

impl Verification {
    #[must_use]
    pub fn new(knowledge_base: &KnowledgeBase) -> Self {
        Self {
            resources: knowledge_base.resources().len(),
            illustrations: knowledge_base.illustrations().len(),
            conditions: knowledge_base.conditions().len(),
            body_parts: knowledge_base.body_parts().len(),
        }
    }
}

impl Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "knowledge base ok: {} resources, {} illustrations, {} conditions, {} body parts",
            self.resources, self.illustrations, self.conditions, self.body_parts
        )
    }
}

#[cfg(test)]
mod tests {
    use caribou_domain::knowledge_base;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn knowledge_base() -> &'static KnowledgeBase {
        knowledge_base::init().unwrap()
    }

    #[test]
    fn test_resource_report_text() {
        let report =
            ResourceReport::new("quad-set", knowledge_base().explain_resource("quad-set"));
        let text = report.to_string();

        assert!(text.starts_with("quad-sets (alias \"quad set\")\n"), "{text}");
        assert!(text.contains("\n  body part:  knee\n"), "{text}");
        assert!(text.contains("\n    1. "), "{text}");
    }

    #[test]
    fn test_resource_report_json() {
        let report = ResourceReport::new(
            "SIT-TO-STAND",
            knowledge_base().explain_resource("SIT-TO-STAND"),
        );
        let json = serde_json::from_str::<serde_json::Value>(
            &render(&report, OutputFormat::Json).unwrap(),
        )
        .unwrap();

        assert_eq!(json["query"], "SIT-TO-STAND");
        assert_eq!(
            json["matched"],
            serde_json::json!({ "tier": "alias", "keyword": "sit to stand" })
        );
        assert_eq!(json["resource"]["id"], "chair-squats");
        assert_eq!(json["resource"]["difficulty"], "beginner");
    }

    #[test]
    fn test_video_url() {
        let video = Video {
            provider: VideoProvider::YouTube,
            id: "mQLFKu0mXIo",
            title: "Wrist Stretches",
            channel: "AskDoctorJo",
        };
        assert_eq!(
            video_url(&video),
            "https://www.youtube.com/watch?v=mQLFKu0mXIo"
        );
    }

    #[rstest]
    #[case(false, None)]
    #[case(true, Some(true))]
    fn test_illustration_report_markup(
        #[case] with_markup: bool,
        #[case] expected: Option<bool>,
    ) {
        let report = IllustrationReport::new(
            "Ankle Circles",
            knowledge_base().explain_illustration("Ankle Circles"),
            with_markup,
        );

        assert_eq!(report.id, "default");
        assert_eq!(report.matched, Match::Default);
        assert_eq!(report.markup.map(|m| m.starts_with("<svg")), expected);

        let json = render(&report, OutputFormat::Json).unwrap();
        assert_eq!(json.contains("\"markup\""), with_markup);
    }

    #[test]
    fn test_resource_list() {
        let list = ResourceList::new("wrist", knowledge_base().resources_for_body_part("wrist"));

        assert_eq!(
            list.resources.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![
                "wrist-range-of-motion",
                "wrist-flexion-stretch",
                "wrist-extension-stretch"
            ]
        );
        assert_eq!(list.to_string().lines().count(), 3);
    }

    #[test]
    fn test_resource_list_empty() {
        let list = ResourceList::new("Wrist", knowledge_base().resources_for_body_part("Wrist"));

        assert_eq!(list.to_string(), "no resources for \"Wrist\"\n");
        assert_eq!(
            render(&list, OutputFormat::Json).unwrap(),
            "{\n  \"key\": \"Wrist\",\n  \"resources\": []\n}"
        );
    }

    #[test]
    fn test_vocabulary() {
        let vocabulary = Vocabulary(BTreeSet::from(["knee", "ankle"]));

        assert_eq!(vocabulary.to_string(), "ankle\nknee\n");
        assert_eq!(
            serde_json::to_string(&vocabulary).unwrap(),
            "[\"ankle\",\"knee\"]"
        );
    }

    #[test]
    fn test_audit() {
        let audit = Audit::run(
            knowledge_base(),
            "Quad Sets\n\nsome totally unknown exercise xyz\r\n  \nAnkle Circles\n",
        );

        assert_eq!(
            audit,
            Audit {
                entries: vec![
                    AuditEntry {
                        name: "Quad Sets",
                        resource: "quad-sets",
                        resource_match: Match::Exact,
                        illustration: "quad-sets",
                        illustration_match: Match::Exact,
                    },
                    AuditEntry {
                        name: "some totally unknown exercise xyz",
                        resource: "default",
                        resource_match: Match::Default,
                        illustration: "default",
                        illustration_match: Match::Default,
                    },
                    AuditEntry {
                        name: "Ankle Circles",
                        resource: "ankle-circles",
                        resource_match: Match::Exact,
                        illustration: "default",
                        illustration_match: Match::Default,
                    },
                ],
                resource_defaults: 1,
                illustration_defaults: 2,
            }
        );
        assert!(
            audit
                .to_string()
                .ends_with("3 names, 1 without resource, 2 without illustration\n")
        );
    }

    #[test]
    fn test_audit_counts_default_by_exact_match() {
        let audit = Audit::run(knowledge_base(), "default\nDEFAULT!!\nQuad Sets\n");

        assert_eq!(
            audit
                .entries
                .iter()
                .map(|e| (e.resource, e.resource_match))
                .collect::<Vec<_>>(),
            vec![
                ("default", Match::Exact),
                ("default", Match::Exact),
                ("quad-sets", Match::Exact),
            ]
        );
        assert_eq!(audit.resource_defaults, 2);
        assert_eq!(audit.illustration_defaults, 2);
    }

    #[test]
    fn test_audit_empty_input() {
        let audit = Audit::run(knowledge_base(), "");

        assert!(audit.entries.is_empty());
        assert_eq!(
            audit.to_string(),
            "0 names, 0 without resource, 0 without illustration\n"
        );
    }

    #[test]
    fn test_verification() {
        let verification = Verification::new(knowledge_base());

        assert_eq!(verification.resources, 74);
        assert_eq!(verification.illustrations, 22);
        assert!(verification.conditions > 0);
        assert!(
            verification
                .to_string()
                .starts_with("knowledge base ok: 74 resources, 22 illustrations, ")
        );
    }
}
