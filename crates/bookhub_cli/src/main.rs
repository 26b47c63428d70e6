//! BookHub interactive catalog shell.
//!
//! # Responsibility
//! - Wire configuration, logging, store and catalog into a stdin loop.
//! - Keep the exit code meaningful for scripted use.

mod commands;
mod config;
mod notify;
mod render;

use commands::{CommandRegistry, Flow};
use config::RuntimeConfig;
use render::{render_books, render_stats, Surface};

use bookhub_core::{
    core_version, init_logging, open_store, CatalogService, CatalogStore, SqliteBlobStore,
};
use log::info;
use std::error::Error;
use std::io::{self, BufRead, Write};

fn main() {
    let config = RuntimeConfig::from_env();

    if let Some(log_dir) = &config.log_dir {
        // Logging stays optional for ad-hoc shells; a bad directory must not
        // keep the catalog from opening.
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("bookhub: logging disabled: {err}");
        }
    }

    if let Err(err) = run(&config) {
        eprintln!("bookhub: {err}");
        std::process::exit(1);
    }
}

fn run(config: &RuntimeConfig) -> Result<(), Box<dyn Error>> {
    let conn = open_store(&config.db_path)?;
    let store = SqliteBlobStore::try_new(&conn)?;
    let catalog = CatalogStore::open(store)?;
    let mut service = CatalogService::new(catalog);
    let registry = CommandRegistry::new();

    info!(
        "event=shell_start module=cli status=ok version={} db={}",
        core_version(),
        config.db_path.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "BookHub catalog shell v{} (type `help`)", core_version())?;
    render_books(&mut out, &service.list_books(), Surface::AllBooks)?;
    render_stats(&mut out, service.stats())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if registry.dispatch(&mut service, &line, &mut out)? == Flow::Quit {
            break;
        }
        out.flush()?;
    }

    info!("event=shell_stop module=cli status=ok");
    Ok(())
}
