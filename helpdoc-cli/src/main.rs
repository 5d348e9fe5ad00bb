//! Command-line interface for helpdoc
//! This binary renders a serialized element tree (JSON) into a plain-text help file.
//!
//! Usage:
//!   helpdoc `<path>` [--config `<file>`] [--width `<n>`] [--output `<file>`]   - Render a source file
//!   helpdoc - < source.json                                                - Render from stdin

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use helpdoc_config::{HelpdocConfig, Loader};
use helpdoc_dom::{ElementTree, SourceElement};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};

fn main() {
    let matches = Command::new("helpdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render helpdoc sources into plain-text help files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the JSON source, or '-' to read stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .help("Display width (overrides publishing.display_width)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the help file here instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (-vv for trace output)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let path = matches
        .get_one::<String>("path")
        .context("missing source path")?;
    let source = read_source(path)?;
    let rendered = render(&source, &config).with_context(|| format!("failed to render {}", path))?;

    match matches.get_one::<String>("output") {
        Some(output) => {
            fs::write(output, &rendered)
                .with_context(|| format!("failed to write {}", output))?;
            info!("wrote {} bytes to {}", rendered.len(), output);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<HelpdocConfig> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        debug!("layering configuration from {}", file);
        loader = loader.with_file(file);
    }
    if let Some(width) = matches.get_one::<u32>("width") {
        loader = loader.with_display_width(*width)?;
    }
    loader.build().context("invalid configuration")
}

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
    }
}

/// Parses a JSON source and publishes it with the configured rules.
fn render(source: &str, config: &HelpdocConfig) -> Result<String> {
    let source: SourceElement = serde_json::from_str(source).context("invalid source")?;
    let (tree, root) = ElementTree::from_source(&source)?;
    debug!("loaded {} elements", tree.len());

    let mut rendered = helpdoc_publish::publish(&tree, root, &config.publishing)?;
    if config.output.trailing_newline && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
