use super::render;
use super::setup::{init_logging, Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use loaderconf::{FsStorage, LoaderConf};
use std::process::ExitCode;

/// Exit status when the file could not be written for lack of permission.
const EXIT_PERMISSION_DENIED: u8 = 2;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let storage = match &cli.root {
        Some(root) => FsStorage::with_root(root),
        None => FsStorage::new(),
    };
    let mut conf = LoaderConf::open(storage, cli.file.clone())
        .with_context(|| format!("could not open {}", cli.file.display()))?;
    tracing::debug!(
        file = %cli.file.display(),
        root = ?cli.root,
        loaded = conf.is_loaded(),
        "Opened loader configuration"
    );

    match cli.command {
        Commands::Show { json } => {
            if json {
                println!("{}", render::show_json(&conf)?);
            } else {
                print!("{}", render::show_text(&conf));
            }
        }
        Commands::Get { attribute } => {
            println!("{}", conf.get(&attribute)?);
        }
        Commands::Set { attribute, value } => {
            conf.set_checked(&attribute, value)?;
            let message = format!("{} set to {}", attribute, conf.get(&attribute)?);
            return save(&mut conf, &message);
        }
        Commands::Unset { attribute } => {
            if !conf.unset(&attribute)? {
                println!("{} is not set", attribute);
                return Ok(ExitCode::SUCCESS);
            }
            let message = format!("{} removed", attribute);
            return save(&mut conf, &message);
        }
        Commands::Cat => {
            print!("{}", conf.to_text());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn save(conf: &mut LoaderConf, message: &str) -> Result<ExitCode> {
    if conf.save()? {
        println!("{}", message.green());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} permission denied when writing to {}; nothing was changed",
            "Warning:".yellow(),
            conf.path().display()
        );
        Ok(ExitCode::from(EXIT_PERMISSION_DENIED))
    }
}
