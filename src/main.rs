use std::path::PathBuf;
use std::process::ExitCode;

use steamshelf::config::load_cfg;
use steamshelf::{InstalledGame, default_steam_root, discover_games_in};
use tracing_subscriber::EnvFilter;

struct Args {
    root: Option<PathBuf>,
    json: bool,
    ids_only: bool,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut root = None;
    if let Some(root_index) = args.iter().position(|arg| arg == "--root") {
        match args.get(root_index + 1) {
            Some(next_arg) if !next_arg.starts_with("--") => root = Some(PathBuf::from(next_arg)),
            _ => return Err("--root needs a path".to_string()),
        }
    }

    let known = ["--root", "--json", "--ids", "--verbose", "--help"];
    let mut skip_value = false;
    for arg in args.iter().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }
        if arg == "--root" {
            skip_value = true;
        } else if !known.contains(&arg.as_str()) {
            return Err(format!("Unknown option: {}", arg));
        }
    }

    Ok(Args {
        root,
        json: args.iter().any(|arg| arg == "--json"),
        ids_only: args.iter().any(|arg| arg == "--ids"),
        verbose: args.iter().any(|arg| arg == "--verbose"),
    })
}

fn print_games(games: &[InstalledGame], args: &Args) -> Result<(), serde_json::Error> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(games)?);
        return Ok(());
    }

    for game in games {
        if args.ids_only {
            println!("{}", game.app_id);
            continue;
        }
        let path = game
            .install_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}\t{}\t{}",
            game.app_id,
            game.name.as_deref().unwrap_or("Unknown"),
            path
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();

    if raw_args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        return ExitCode::SUCCESS;
    }

    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("[steamshelf] {}", e);
            eprintln!("{}", USAGE_TEXT);
            return ExitCode::FAILURE;
        }
    };

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cfg = load_cfg();
    let root = args
        .root
        .clone()
        .or_else(|| cfg.steam_root())
        .unwrap_or_else(default_steam_root);
    tracing::info!("Scanning Steam root {}", root.display());

    let games = match discover_games_in(&root, &cfg.extra_libraries()) {
        Ok(games) => games,
        Err(e) => {
            eprintln!("[steamshelf] {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_games(&games, &args) {
        eprintln!("[steamshelf] Failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

static USAGE_TEXT: &str = r#"
Usage: steamshelf [OPTIONS]

Lists Steam games that are installed on disk.

Options:
    --root <path>   Steam installation to scan. Defaults to the "steam_root" setting, then auto-detection.
    --ids           Print only app ids
    --json          Print the installed games as JSON
    --verbose       Log every manifest that is accepted or skipped
    --help          Show this text
"#;
