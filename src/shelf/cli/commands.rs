use super::menu::Session;
use super::print::{write_book_table, write_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use log::warn;
use shelf::api::{CmdMessage, CmdResult, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::Result;
use shelf::model::Locale;
use shelf::store::fs::FileBackend;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

struct AppContext {
    api: ShelfApi<FileBackend>,
    locale: Locale,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (config_dir, data_dir) = app_dirs();
    let config = load_config(&config_dir);

    let locale = cli.lang.unwrap_or(config.locale);
    let data_file = config.resolve_data_file(cli.file, &data_dir);

    let command = match cli.command {
        None | Some(Commands::Menu) => return run_menu(data_file, locale),
        Some(Commands::Config { key, value }) => {
            return handle_config(config, &config_dir, key, value)
        }
        Some(command) => command,
    };

    let mut ctx = AppContext {
        api: ShelfApi::open(&data_file)?,
        locale,
    };

    match command {
        Commands::Add {
            title,
            author,
            year,
        } => {
            let result = ctx.api.add_book(&title, &author, &year)?;
            print_result(&ctx, &result)
        }
        Commands::Delete { id } => {
            let result = ctx.api.delete_book(&id)?;
            print_result(&ctx, &result)
        }
        Commands::Search {
            title,
            author,
            year,
        } => {
            let result = ctx.api.search_books(&title, &author, &year)?;
            print_result(&ctx, &result)
        }
        Commands::List => {
            let result = ctx.api.list_books()?;
            print_result(&ctx, &result)
        }
        Commands::Status { id, status } => {
            let result = ctx.api.set_status(&id, &status)?;
            print_result(&ctx, &result)
        }
        // Dispatched above, before the store is opened.
        Commands::Menu | Commands::Config { .. } => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Config and data directories, falling back to the working directory.
fn app_dirs() -> (PathBuf, PathBuf) {
    match ProjectDirs::from("com", "shelf", "shelf") {
        Some(dirs) => (
            dirs.config_dir().to_path_buf(),
            dirs.data_dir().to_path_buf(),
        ),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            (cwd.clone(), cwd)
        }
    }
}

fn load_config(config_dir: &Path) -> ShelfConfig {
    ShelfConfig::load(config_dir).unwrap_or_else(|e| {
        warn!(
            "Ignoring config in {}: {}; using defaults",
            config_dir.display(),
            e
        );
        ShelfConfig::default()
    })
}

fn handle_config(
    mut config: ShelfConfig,
    config_dir: &Path,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match (key, value) {
        (None, _) => {
            for (key, value) in config.list_all() {
                writeln!(out, "{} = {}", key, value)?;
            }
        }
        (Some(key), None) => writeln!(out, "{}", config.get(&key)?)?,
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            let path = config.save(config_dir)?;
            let message = CmdMessage::success(format!(
                "{} set to {} in {}",
                key,
                config.get(&key)?,
                path.display()
            ));
            write_messages(&mut out, &[message])?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_menu(data_file: PathBuf, locale: Locale) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), locale)
        .with_clear_screen(Term::stdout().is_term());

    if let Some(mut api) = session.open_store(data_file)? {
        session.run(&mut api)?;
    }
    Ok(())
}

fn print_result(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    let mut out = io::stdout().lock();
    write_messages(&mut out, &result.messages)?;
    write_book_table(&mut out, &result.listed_books, ctx.locale)?;
    out.flush()?;
    Ok(())
}
