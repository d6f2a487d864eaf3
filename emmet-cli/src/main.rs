//! Command-line interface for emmet
//!
//! Expands an abbreviation given as argument (or read from stdin) and prints the
//! result in one of the registered formats.
//!
//! Usage:
//!   emmet `<abbreviation>` [--jumps] [--stacked] [--indent `<str>`] [--format `<format>`]
//!   emmet `<abbreviation>` --preview      - silent preview, `---`, then the tab-stop render;
//!                                           always tag markup, so it cannot be combined with --format
//!   emmet --list-formats                  - list available output formats

mod error;

use clap::{Arg, ArgAction, ArgMatches, Command};
use emmet::abbrev::formats::{FormatError, FormatRegistry};
use emmet::{parse, RenderMode, TagRenderer};
use emmet_config::{EmmetConfig, Loader};
use error::{CliError, Result};
use std::io::Read;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const SYNTAX_HELP: &str = "Syntax: http://docs.emmet.io/abbreviations/syntax/";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        if let Some(diagnostic) = e.diagnostic() {
            eprintln!("{}", diagnostic);
        }
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("emmet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand emmet abbreviations into markup")
        .arg(
            Arg::new("abbreviation")
                .help("Abbreviation to expand (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("jumps")
                .long("jumps")
                .short('j')
                .help("Emit $N tab stops for a snippet engine")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stacked")
                .long("stacked")
                .short('s')
                .help("Keep numbering across nested multiplications")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .short('i')
                .value_name("STR")
                .help("Indentation unit (default: tab)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (tag, treeviz, json)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the defaults and .emmet.toml"),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .help("Print the silent preview and the tab-stop render of the same tree (always tag markup)")
                .conflicts_with("format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser decisions to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn run() -> Result<()> {
    let matches = cli().get_matches();

    init_tracing(matches.get_flag("verbose"))?;

    let config = load_config(&matches)?;
    tracing::debug!(?config, "loaded configuration");
    let registry = FormatRegistry::with_defaults(config.render.options());

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }
    if !registry.has(&config.cli.format) {
        return Err(FormatError::FormatNotFound(config.cli.format.clone()).into());
    }

    let abbreviation = match matches.get_one::<String>("abbreviation") {
        Some(abbreviation) => abbreviation.clone(),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };
    let abbreviation = abbreviation.trim();

    if abbreviation.is_empty() {
        println!("{}", SYNTAX_HELP);
        return Ok(());
    }

    let tree = parse(abbreviation).map_err(|e| CliError::parse(e, abbreviation))?;

    if matches.get_flag("preview") {
        handle_preview_command(&tree, &config);
        return Ok(());
    }

    println!("{}", registry.serialize(&tree, &config.cli.format)?);
    Ok(())
}

/// Verbose logs at DEBUG; otherwise honor `RUST_LOG` and stay silent by default
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

/// Project file name looked up in the working directory
const PROJECT_CONFIG: &str = ".emmet.toml";

/// Defaults, then `.emmet.toml`, then the `--config` file, then command-line flags
fn load_config(matches: &ArgMatches) -> Result<EmmetConfig> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("jumps") {
        loader = loader.set_override("render.jumps", true)?;
    }
    if matches.get_flag("stacked") {
        loader = loader.set_override("render.numbering", "stacked")?;
    }
    if let Some(indent) = matches.get_one::<String>("indent") {
        loader = loader.set_override("render.indent_string", indent.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("cli.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

/// Render the same tree twice: what an editor shows while typing, then what it
/// hands to the snippet engine on confirmation
fn handle_preview_command(tree: &emmet::Tree, config: &EmmetConfig) {
    let options = config.render.options();
    let mut preview = options.clone();
    preview.mode = RenderMode::Silent;
    let mut finalized = options;
    finalized.mode = RenderMode::Counting;

    println!("{}", TagRenderer::new(preview).render(tree));
    println!("---");
    println!("{}", TagRenderer::new(finalized).render(tree));
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {:<8} {}", name, description);
    }
}
