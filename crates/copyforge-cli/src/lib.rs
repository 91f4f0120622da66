//! Copyforge command line
//!
//! Argument parsing and command dispatch for the `copyforge` binary. Output is
//! written to caller-supplied sinks so commands can be exercised in tests.

#![warn(unreachable_pub)]
#![warn(missing_docs)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use copyforge_archetype::{ArchetypeLibrary, CopyDeck, SeededNumbers};
use copyforge_assembly::{export, max_start_day, Engine, ExportFormat, GenerationRequest, Progress};
use copyforge_gate::{steps_for, GateError, ReadyProfile};
use copyforge_model::{AdPlatform, ArtifactKind, BusinessProfile, CompetitiveInsight, ProfileField};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command completed
    Done,
    /// Profile did not pass the gate
    Incomplete,
}

impl Outcome {
    /// Process exit code
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Done => ExitCode::SUCCESS,
            Self::Incomplete => ExitCode::from(2),
        }
    }
}

/// Command definition
#[must_use]
pub fn cli() -> Command {
    Command::new("copyforge")
        .version(copyforge_assembly::VERSION)
        .about("Archetype-based marketing copy generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("text")
                .value_parser(["text", "json"])
                .help("Log output format (logs go to stderr)"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate content for a business profile")
                .arg(kind_arg().required(true))
                .arg(
                    Arg::new("profile")
                        .long("profile")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Business profile (.json, .yaml or .yml)"),
                )
                .arg(
                    Arg::new("insight")
                        .long("insight")
                        .value_parser(value_parser!(PathBuf))
                        .help("Competitive insight snapshot (.json, .yaml or .yml)"),
                )
                .arg(
                    Arg::new("copy-deck")
                        .long("copy-deck")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML copy deck overriding fallbacks and site chrome"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Seed for numeric placeholders; random when omitted"),
                )
                .arg(
                    Arg::new("platform")
                        .long("platform")
                        .default_value("facebook")
                        .help("Ad platform (ads only)"),
                )
                .arg(
                    Arg::new("archetype")
                        .long("archetype")
                        .help("Generate a single archetype by id"),
                )
                .arg(
                    Arg::new("start-day")
                        .long("start-day")
                        .default_value("1")
                        .value_parser(value_parser!(u16).range(1..=i64::from(max_start_day())))
                        .help("Day of the first email (emails only)"),
                )
                .arg(
                    Arg::new("full-site")
                        .long("full-site")
                        .action(ArgAction::SetTrue)
                        .help("Also build the static site bundle (websites only)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("Export format: json, markdown or html"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Write to this file, or into this directory under the suggested name"),
                ),
        )
        .subcommand(
            Command::new("archetypes")
                .about("List archetypes")
                .arg(kind_arg()),
        )
        .subcommand(
            Command::new("steps")
                .about("List input steps and required fields")
                .arg(kind_arg().required(true)),
        )
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .short('k')
        .help("Artifact kind: ad, website, email, social or sales")
}

/// Install the tracing subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        warn!("tracing subscriber already installed");
    }
}

/// Dispatch parsed arguments
///
/// # Errors
/// Returns load, parse, library or export failures with context
pub fn run(matches: &ArgMatches, out: &mut dyn Write, err: &mut dyn Write) -> Result<Outcome> {
    match matches.subcommand() {
        Some(("generate", args)) => generate(args, out, err),
        Some(("archetypes", args)) => archetypes(args, out),
        Some(("steps", args)) => steps(args, out),
        _ => Ok(Outcome::Done),
    }
}

fn parse_kind(args: &ArgMatches) -> Result<Option<ArtifactKind>> {
    args.get_one::<String>("kind")
        .map(|name| ArchetypeLibrary::new().kind_named(name))
        .transpose()
        .context("invalid --kind")
}

fn required_kind(args: &ArgMatches) -> Result<ArtifactKind> {
    parse_kind(args)?.context("--kind is required")
}

fn generate(args: &ArgMatches, out: &mut dyn Write, err: &mut dyn Write) -> Result<Outcome> {
    let kind = required_kind(args)?;

    let profile_path = args
        .get_one::<PathBuf>("profile")
        .context("--profile is required")?;
    let profile = BusinessProfile::from_path(profile_path)
        .with_context(|| format!("failed to load profile {}", profile_path.display()))?;
    let insight = args
        .get_one::<PathBuf>("insight")
        .map(|path| {
            CompetitiveInsight::from_path(path)
                .with_context(|| format!("failed to load insight {}", path.display()))
        })
        .transpose()?;
    let deck = match args.get_one::<PathBuf>("copy-deck") {
        Some(path) => CopyDeck::from_path(path)
            .with_context(|| format!("failed to load copy deck {}", path.display()))?,
        None => CopyDeck::default(),
    };
    let numbers = match args.get_one::<u64>("seed") {
        Some(seed) => SeededNumbers::new(*seed),
        None => SeededNumbers::from_entropy(),
    };

    let ready = match ReadyProfile::check(kind, profile.clone()) {
        Ok(ready) => ready,
        Err(GateError::IncompleteProfile { .. }) => {
            return report_incomplete(kind, &profile, profile_path, err);
        }
        Err(other) => return Err(other.into()),
    };

    let mut request = GenerationRequest::new(kind)
        .with_full_site(args.get_flag("full-site"))
        .with_start_day(args.get_one::<u16>("start-day").copied().unwrap_or(1));
    if let Some(platform) = args.get_one::<String>("platform") {
        let platform: AdPlatform = platform.parse().context("invalid --platform")?;
        request = request.with_platform(platform);
    }
    if let Some(id) = args.get_one::<String>("archetype") {
        request = request.with_archetype(id.clone());
    }
    let format: ExportFormat = args
        .get_one::<String>("format")
        .map_or(Ok(ExportFormat::Json), |f| f.parse())
        .context("invalid --format")?;

    info!(seed = numbers.seed(), %kind, "starting generation");
    let engine = Engine::new(deck, numbers);
    let generation = engine
        .generate_with_progress(&request, &ready, insight.as_ref(), |p: Progress| {
            info!(
                completed = p.completed,
                total = p.total,
                archetype = p.archetype,
                "progress"
            );
        })
        .context("generation failed")?;
    let rendered = export::export(&generation, format).context("export failed")?;

    match args.get_one::<PathBuf>("output") {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(export::file_name_for(&generation, format))
            } else {
                path.clone()
            };
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(err, "wrote {}", path.display())?;
        }
        None => {
            out.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(Outcome::Done)
}

/// Prints every incomplete step, not just the first
fn report_incomplete(
    kind: ArtifactKind,
    profile: &BusinessProfile,
    path: &Path,
    err: &mut dyn Write,
) -> Result<Outcome> {
    writeln!(
        err,
        "profile {} is not ready for {} generation:",
        path.display(),
        kind.label()
    )?;
    for (i, step) in steps_for(kind).iter().enumerate() {
        let missing = step.missing(profile);
        if !missing.is_empty() {
            writeln!(
                err,
                "  step {} ({}): missing {}",
                i + 1,
                step.title,
                field_names(&missing)
            )?;
        }
    }
    Ok(Outcome::Incomplete)
}

fn field_names(fields: &[ProfileField]) -> String {
    fields.iter().map(|f| f.key()).collect::<Vec<_>>().join(", ")
}

fn archetypes(args: &ArgMatches, out: &mut dyn Write) -> Result<Outcome> {
    let library = ArchetypeLibrary::new();
    let kinds = match parse_kind(args)? {
        Some(kind) => vec![kind],
        None => ArtifactKind::ALL.to_vec(),
    };
    for kind in kinds {
        writeln!(out, "{}:", kind.label())?;
        for archetype in library.archetypes(kind) {
            writeln!(out, "  {:<40} {}", library.numbered_title(archetype), archetype.id)?;
        }
    }
    Ok(Outcome::Done)
}

fn steps(args: &ArgMatches, out: &mut dyn Write) -> Result<Outcome> {
    let kind = required_kind(args)?;
    writeln!(out, "{} steps:", kind.label())?;
    for (i, step) in steps_for(kind).iter().enumerate() {
        writeln!(out, "  {}. {}: {}", i + 1, step.title, field_names(step.required))?;
    }
    Ok(Outcome::Done)
}
