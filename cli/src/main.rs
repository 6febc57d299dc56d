//! `resgen` command-line interface

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use resgen::{parse_platforms, platform_rows, Settings, SettingsOverrides};
use resgen_core::{ConsoleReporter, Reporter, SilentReporter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn generate_args() -> Vec<Arg> {
    vec![
        Arg::new("icon")
            .long("icon")
            .value_parser(value_parser!(PathBuf))
            .help("Master icon image [default: resources/icon.png]"),
        Arg::new("splash")
            .long("splash")
            .value_parser(value_parser!(PathBuf))
            .help("Master splash image [default: resources/splash.png]"),
        Arg::new("platforms")
            .long("platforms")
            .help("Comma-separated platforms to generate [default: ios,android]"),
        Arg::new("output")
            .long("output")
            .value_parser(value_parser!(PathBuf))
            .help("Directory output paths are relative to [default: .]"),
        Arg::new("config")
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .help("Config file [default: ./resgen.toml when present]"),
        Arg::new("quiet")
            .long("quiet")
            .short('q')
            .action(ArgAction::SetTrue)
            .help("Suppress progress output"),
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the run report as JSON"),
    ]
}

fn cli() -> Command {
    Command::new("resgen")
        .version(resgen::VERSION)
        .about("Generate platform icons and splash screens from two master images")
        .args(generate_args())
        .subcommand(
            Command::new("generate")
                .about("Generate icons and splash screens (default)")
                .args(generate_args()),
        )
        .subcommand(Command::new("platforms").about("List built-in platforms"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RESGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let matches = cli().get_matches();
    let result = match matches.subcommand() {
        Some(("platforms", _)) => {
            print_platforms();
            Ok(())
        }
        Some(("generate", args)) => generate(args).await,
        _ => generate(&matches).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn flag_overrides(args: &ArgMatches) -> SettingsOverrides {
    SettingsOverrides {
        icon_source: args.get_one::<PathBuf>("icon").cloned(),
        splash_source: args.get_one::<PathBuf>("splash").cloned(),
        active_platforms: args
            .get_one::<String>("platforms")
            .map(|list| parse_platforms(list)),
        output_root: args.get_one::<PathBuf>("output").cloned(),
    }
}

async fn generate(args: &ArgMatches) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot read working directory")?;
    let config = args.get_one::<PathBuf>("config");
    let from_file = resgen::load_config(config.map(PathBuf::as_path), &cwd)
        .await
        .context("failed to load configuration")?;

    let settings = Settings::default().apply(from_file.merge(flag_overrides(args)));
    tracing::debug!(?settings, "resolved settings");

    let reporter: Arc<dyn Reporter> = if args.get_flag("quiet") {
        Arc::new(SilentReporter)
    } else {
        Arc::new(ConsoleReporter)
    };
    let report = resgen::generate_with(&settings, reporter).await;

    if args.get_flag("json") {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    }
    Ok(())
}

fn print_platforms() {
    println!("{:<10} {:<7} {:>6}  {:<26} DENSITIES", "PLATFORM", "LANE", "ASSETS", "OUTPUT");
    for row in platform_rows() {
        let name = if row.default {
            format!("{}*", row.name)
        } else {
            row.name
        };
        let densities = if row.densities.is_empty() {
            "-".to_string()
        } else {
            row.densities.join(",")
        };
        println!(
            "{:<10} {:<7} {:>6}  {:<26} {}",
            name,
            row.kind.label(),
            row.assets,
            row.output_dir.display().to_string(),
            densities
        );
    }
    println!();
    println!("* generated when --platforms is not given");
}
