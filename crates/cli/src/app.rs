// crates/cli/src/app.rs
use crate::args::Args;
use crate::clipboard;
use crate::config;
use crate::error::{AppError, Result};
use crate::store::{JsonFileStore, default_state_path};
use rg_helper_engine::command::synthesize;
use rg_helper_engine::error::StoreError;
use rg_helper_engine::options::Options;
use rg_helper_engine::presets;
use rg_helper_engine::store::OptionsStore;

pub fn run(args: &Args) -> Result<()> {
    if args.behavior.list_templates {
        list_templates();
        return Ok(());
    }

    let path = args
        .behavior
        .state_file
        .clone()
        .or_else(default_state_path)
        .ok_or(AppError::NoStateDir)?;
    let store = JsonFileStore::new(path);

    let mut options = if args.behavior.reset {
        Options::default()
    } else {
        load_or_default(&store)?
    };

    config::apply(args, &mut options)?;

    let command = synthesize(&options);
    println!("{command}");

    if !args.behavior.no_clipboard {
        if let Err(e) = clipboard::copy(&command) {
            eprintln!("Warning: clipboard unavailable: {e}");
        }
    }
    if !args.behavior.no_save {
        store.save(&options)?;
    }

    Ok(())
}

/// A corrupt options document falls back to defaults with a warning; only
/// real I/O failures abort the run.
fn load_or_default(store: &JsonFileStore) -> Result<Options> {
    match store.load() {
        Ok(saved) => Ok(saved.unwrap_or_default()),
        Err(StoreError::Json(e)) => {
            eprintln!(
                "Warning: ignoring corrupt options file {}: {e}",
                store.path().display()
            );
            Ok(Options::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn list_templates() {
    for template in presets::TEMPLATES {
        println!(
            "{:<16} {}",
            template.name,
            template.included_extensions.join(", ")
        );
    }
}
