use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lintdelta::cli::{self, Cli};
use lintdelta::config::{self, LintDeltaConfig};
use lintdelta::engine::{self, Summarizer};
use lintdelta::parsers::Registry;
use lintdelta::{listing, report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the JSON document
    let filter = if cli.verbose {
        EnvFilter::new("lintdelta=debug")
    } else if cli.quiet {
        EnvFilter::new("lintdelta=error")
    } else {
        EnvFilter::new("lintdelta=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    info!("lintdelta v{}", env!("CARGO_PKG_VERSION"));

    let config = if cli.no_config {
        None
    } else {
        LintDeltaConfig::load(&std::env::current_dir()?)
    };
    let registry = Registry::with_builtins();

    match &cli.command {
        cli::Commands::Parse(args) => {
            let summarizer = Summarizer::new(&registry, args, config.as_ref())?;
            let summary = summarizer.run(args.input.as_deref())?;

            let json = report::json::render(&summary)?;
            match output_format(args.format.as_deref(), config.as_ref()) {
                "terminal" => {
                    report::terminal::render_summary(&summary);
                    if let Some(ref path) = args.out {
                        write_json(&json, Some(path.as_path()))?;
                    }
                }
                _ => write_json(&json, args.out.as_deref())?,
            }
        }
        cli::Commands::Compare(args) => {
            let comparison = engine::compare_files(&args.before, &args.after)?;

            let json = report::json::render(&comparison)?;
            match output_format(args.format.as_deref(), config.as_ref()) {
                "terminal" => {
                    report::terminal::render_comparison(&comparison);
                    if let Some(ref path) = args.out {
                        write_json(&json, Some(path.as_path()))?;
                    }
                }
                _ => write_json(&json, args.out.as_deref())?,
            }

            // Exit code based on regressions
            let ignore_warnings = args.ignore_warnings
                || config.as_ref().is_some_and(|c| c.compare.ignore_warnings);
            if comparison.should_fail(ignore_warnings) {
                std::process::exit(1);
            }
        }
        cli::Commands::List => {
            listing::list_parsers(&registry);
        }
        cli::Commands::Init => {
            config::init_config(&std::env::current_dir()?)?;
        }
    }

    Ok(())
}

fn output_format<'a>(flag: Option<&'a str>, config: Option<&'a LintDeltaConfig>) -> &'a str {
    flag.or_else(|| config.map(|c| c.output.format.as_str()))
        .unwrap_or("json")
}

fn write_json(output: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, format!("{}\n", output))?;
            info!("Written to {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}
