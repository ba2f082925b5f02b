//! guesswho library root.
//! Exposes the CLI parser, the high-level run() function, and the board,
//! store and game modules it is built on.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config {
            print_config,
            edit_config,
            editor,
        } => commands::config::handle(*print_config, *edit_config, editor.as_deref(), cfg),
        Commands::List => commands::list::handle(cfg),
        Commands::Show { id } => commands::show::handle(id, cfg),
        Commands::Create { .. } => commands::create::handle(&cli.command, cfg),
        Commands::Import { file, force } => commands::import::handle(file, *force, cfg),
        Commands::Export { id, dir, force } => {
            commands::export::handle(id, dir.as_deref(), *force, cfg)
        }
        Commands::Del { id, yes } => commands::del::handle(id, *yes, cfg),
        Commands::Play {
            board,
            link,
            example,
        } => commands::play::handle(board.as_deref(), link.as_deref(), *example, cfg),
        Commands::Log { print } => commands::log::handle(*print, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line store override
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
