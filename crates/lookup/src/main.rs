#![warn(clippy::pedantic)]

//! Shows how exercise names resolve against the built-in knowledge base.
//!
//! Usage:
//!   caribou-lookup resource "Straight Leg Raise (SLR)"
//!   caribou-lookup --output json illustration "Ankle Circles"
//!   caribou-lookup audit prescriptions.txt

mod log;
mod report;
mod settings;

use std::{
    fs::File,
    io::{Read, stdin},
    path::{Path, PathBuf},
};

use ::log::{LevelFilter, debug, info};
use anyhow::{Context, Result};
use caribou_domain::knowledge_base;
use clap::{Parser, Subcommand};

use crate::{
    report::{
        Audit, IllustrationReport, ResourceList, ResourceReport, Verification, Vocabulary, render,
    },
    settings::{OutputFormat, Settings},
};

#[derive(Parser, Debug)]
#[command(name = "caribou-lookup", version)]
#[command(about = "Resolve exercise names to exercise resources and illustrations")]
struct Cli {
    /// Settings file (TOML); defaults to $CARIBOU_LOOKUP_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format, overrides the settings file.
    #[arg(long, global = true)]
    output: Option<OutputFormat>,
    /// Increase log verbosity (repeatable).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve an exercise name to an exercise resource.
    Resource { name: String },
    /// Resolve an exercise name to an illustration.
    Illustration {
        name: String,
        /// Include the SVG markup.
        #[arg(long)]
        markup: bool,
    },
    /// List the resources tagged with a condition.
    Condition { id: String },
    /// List the resources for a body part.
    BodyPart { part: String },
    /// List all condition identifiers.
    Conditions,
    /// List all body parts.
    BodyParts,
    /// Resolve one exercise name per line; reads stdin when no file is given.
    Audit { file: Option<PathBuf> },
    /// Check the consistency of the built-in knowledge base.
    Verify,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config)?;
    let level = settings.log_level.raised(cli.verbose);
    log::init(LevelFilter::from(level)).context("initializing logger")?;
    debug!("{settings:?}");
    let format = cli.output.unwrap_or(settings.output);

    let knowledge_base = knowledge_base::init().context("loading knowledge base")?;
    info!(
        "using {} resources and {} illustrations",
        knowledge_base.resources().len(),
        knowledge_base.illustrations().len()
    );

    let output = match &cli.command {
        Command::Resource { name } => render(
            &ResourceReport::new(name, knowledge_base.explain_resource(name)),
            format,
        )?,
        Command::Illustration { name, markup } => render(
            &IllustrationReport::new(name, knowledge_base.explain_illustration(name), *markup),
            format,
        )?,
        Command::Condition { id } => render(
            &ResourceList::new(id, knowledge_base.resources_for_condition(id)),
            format,
        )?,
        Command::BodyPart { part } => render(
            &ResourceList::new(part, knowledge_base.resources_for_body_part(part)),
            format,
        )?,
        Command::Conditions => render(&Vocabulary(knowledge_base.conditions()), format)?,
        Command::BodyParts => render(&Vocabulary(knowledge_base.body_parts()), format)?,
        Command::Audit { file } => {
            let input = read_input(file.as_deref())?;
            render(&Audit::run(knowledge_base, &input), format)?
        }
        Command::Verify => render(&Verification::new(knowledge_base), format)?,
    };

    print(&output, format);
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading exercise names from stdin")?;
    }
    Ok(buf)
}

fn print(output: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{output}"),
        OutputFormat::Json => println!("{output}"),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["caribou-lookup", "resource", "Quad Sets"], 0, None)]
    #[case(&["caribou-lookup", "-vv", "conditions"], 2, None)]
    #[case(&["caribou-lookup", "verify", "--output", "json"], 0, Some(OutputFormat::Json))]
    #[case(&["caribou-lookup", "--output", "text", "audit"], 0, Some(OutputFormat::Text))]
    fn test_cli_parse(
        #[case] args: &[&str],
        #[case] verbose: u8,
        #[case] output: Option<OutputFormat>,
    ) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        assert_eq!(cli.verbose, verbose);
        assert_eq!(cli.output, output);
    }

    #[test]
    fn test_cli_parse_illustration() {
        let cli = Cli::try_parse_from(["caribou-lookup", "illustration", "Bridges", "--markup"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Illustration { ref name, markup: true } if name == "Bridges"
        ));
    }

    #[rstest]
    #[case(&["caribou-lookup"])]
    #[case(&["caribou-lookup", "resource"])]
    #[case(&["caribou-lookup", "--output", "yaml", "verify"])]
    fn test_cli_parse_invalid(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args.iter().copied()).is_err());
    }
}
