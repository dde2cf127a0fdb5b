use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use config::Settings;
use kinship_graph::FamilyGraph;
use kinship_relationship::{
    AncestryCalculator, KinshipNameCalculator, NamingTable, PropertiesTable,
    RelationshipCalculator,
};
use response::{
    AncestorsOutput, CommandResponse, CommonAncestorsOutput, GenerationsOutput, NameOutput,
    PersonRef, RelateOutput, RelationshipOutput, StatsOutput,
};
use serde_json::Value;
use std::io;
use std::path::PathBuf;

mod config;
mod response;

#[derive(Parser)]
#[command(name = "kinship")]
#[command(about = "Kinship queries over a family tree snapshot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Config file (overrides KINSHIP_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Family tree snapshot (JSON)
    #[arg(long, global = true)]
    tree: Option<PathBuf>,

    /// Naming table in properties format (defaults to built-in English)
    #[arg(long, global = true)]
    names: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extended ancestry of a person: ancestors, their spouses and the spouses' ancestry
    Ancestors {
        /// Person xref
        person: String,
    },

    /// Generations between a descendant and one of their ancestors
    Generations {
        descendant: String,
        ancestor: String,
    },

    /// Nearest ancestors shared by two people
    CommonAncestors { first: String, second: String },

    /// Step-by-step relationship chains from one person to another
    Relate {
        from: String,
        to: String,

        /// Skip simplification and return raw parent/child/spouse steps
        #[arg(long)]
        raw: bool,
    },

    /// Kinship label for what the second person is to the first
    Name { from: String, to: String },

    /// Individual and family counts
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let response = match run(&cli) {
        Ok(data) => CommandResponse::ok(data),
        Err(err) => {
            log::debug!("Command failed: {err:?}");
            CommandResponse::error(format!("{err:#}"))
        }
    };

    print_stdout(&serde_json::to_string_pretty(&response)?)?;
    if response.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<Value> {
    let settings =
        Settings::load(cli.config.as_deref())?.with_overrides(cli.tree.clone(), cli.names.clone());

    let tree = settings.tree()?;
    log::debug!("Loading family tree from {}", tree.display());
    let graph = FamilyGraph::load_json(tree)
        .with_context(|| format!("Failed to load family tree {}", tree.display()))?;

    let value = match &cli.command {
        Commands::Ancestors { person } => {
            let (id, _) = graph.require(person)?;
            let ancestors = AncestryCalculator::new(&graph).extended_ancestry(id);
            serde_json::to_value(AncestorsOutput {
                person: PersonRef::new(&graph, id),
                ancestors: PersonRef::sorted(&graph, ancestors),
            })?
        }
        Commands::Generations {
            descendant,
            ancestor,
        } => {
            let (descendant, _) = graph.require(descendant)?;
            let (ancestor, _) = graph.require(ancestor)?;
            let generations = AncestryCalculator::new(&graph)
                .generation_count(descendant, ancestor)
                .with_context(|| {
                    format!(
                        "{} is not an ancestor of {}",
                        graph.display_name(ancestor),
                        graph.display_name(descendant)
                    )
                })?;
            serde_json::to_value(GenerationsOutput {
                descendant: PersonRef::new(&graph, descendant),
                ancestor: PersonRef::new(&graph, ancestor),
                generations,
            })?
        }
        Commands::CommonAncestors { first, second } => {
            let (first, _) = graph.require(first)?;
            let (second, _) = graph.require(second)?;
            let ancestors = AncestryCalculator::new(&graph).lowest_common_ancestors(first, second);
            serde_json::to_value(CommonAncestorsOutput {
                first: PersonRef::new(&graph, first),
                second: PersonRef::new(&graph, second),
                ancestors: PersonRef::sorted(&graph, ancestors),
            })?
        }
        Commands::Relate { from, to, raw } => {
            let (from, _) = graph.require(from)?;
            let (to, _) = graph.require(to)?;
            let simplified = settings.simplify && !raw;
            let relationships = RelationshipCalculator::new(&graph)
                .calculate_relationships(from, to, simplified)
                .iter()
                .map(|relationship| RelationshipOutput::new(&graph, relationship))
                .collect();
            serde_json::to_value(RelateOutput {
                from: PersonRef::new(&graph, from),
                to: PersonRef::new(&graph, to),
                simplified,
                relationships,
            })?
        }
        Commands::Name { from, to } => {
            let (from, _) = graph.require(from)?;
            let (to, _) = graph.require(to)?;
            let name = match &settings.names {
                Some(path) => {
                    let table = PropertiesTable::load(path).with_context(|| {
                        format!("Failed to load naming table {}", path.display())
                    })?;
                    kinship_name(KinshipNameCalculator::new(&graph, table), from, to)
                }
                None => kinship_name(KinshipNameCalculator::english(&graph), from, to),
            };
            serde_json::to_value(NameOutput {
                from: PersonRef::new(&graph, from),
                to: PersonRef::new(&graph, to),
                name,
            })?
        }
        Commands::Stats => serde_json::to_value(StatsOutput {
            individuals: graph.individual_count(),
            families: graph.family_count(),
        })?,
    };
    Ok(value)
}

fn kinship_name<T: NamingTable>(
    calculator: KinshipNameCalculator<'_, T>,
    from: kinship_graph::PersonId,
    to: kinship_graph::PersonId,
) -> Option<String> {
    calculator.relationship_name(from, to)
}

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
