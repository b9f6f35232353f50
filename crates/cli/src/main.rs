use std::process::ExitCode;

use clap::Parser;
use history_book_cli::cli_args::{Args, Verb};
use history_book_cli::commands;
use history_book_cli::interrupt;
use history_book_cli::prompter::DialoguerPrompter;
use history_book_core::config;
use history_book_core::error::Result;
use history_book_core::store::CommandStore;
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();

    let commands_path = config::get_commands_path(&args.commands_path);
    debug!("Commands path: `{commands_path}`");
    let store = CommandStore::new(commands_path);

    match args.verb {
        Verb::Add => {
            let prompter = DialoguerPrompter::new();
            commands::add(&store, &prompter)
        }
        Verb::List { tags } => commands::list(&store, tags.as_deref()),
        Verb::Run { names, quiet } => {
            interrupt::install();
            commands::run(&store, &names, quiet, &config::get_shell())
        }
        Verb::Edit => {
            let prompter = DialoguerPrompter::new();
            commands::edit(&store, &prompter)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
