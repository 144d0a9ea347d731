//! Pattern Studio CLI
//!
//! The command-line interface for authoring block patterns and syncing them
//! with a theme's pattern files.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;

use cli::{AddArgs, Cli, Commands};
use error::Result;
use pattern_core::PatternQuery;
use pattern_meta::Mode;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Pattern Studio CLI", "patterns".green().bold());
            println!();
            println!("Run {} for available commands.", "patterns --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init {
            mode,
            directory,
            force,
        } => cmd_init(mode, &directory, force),
        Commands::Add(args) => cmd_add(args),
        Commands::Show { slug } => cmd_show(&slug),
        Commands::Export { slugs } => cmd_export(&slugs),
        Commands::Import { files, all } => {
            let cwd = std::env::current_dir()?;
            commands::run_import(&cwd, &files, all)
        }
        Commands::Status => cmd_status(),
        Commands::List => cmd_list(),
        Commands::Query {
            search,
            category,
            page,
            per_page,
        } => cmd_query(PatternQuery {
            page,
            per_page,
            search,
            category,
        }),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn cmd_init(mode: Option<Mode>, directory: &str, force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_init(&cwd, mode, directory, force)
}

fn cmd_add(args: AddArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_add(&cwd, args)
}

fn cmd_show(slug: &str) -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_show(&cwd, slug)
}

fn cmd_export(slugs: &[String]) -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_export(&cwd, slugs)
}

fn cmd_status() -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_status(&cwd)
}

fn cmd_list() -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_list(&cwd)
}

fn cmd_query(query: PatternQuery) -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_query(&cwd, query)
}

fn cmd_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
