mod app;
mod export;

use std::io::{BufRead, Write, stdin, stdout};
use std::path::PathBuf;
use std::{env, process};

use anyhow::Result;
use app::{App, HELP, Outcome};
use grid_playground_config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Config from CLI argument, else the default location, else defaults
    let args: Vec<String> = env::args().collect();
    let loaded = match args.len() {
        1 => Config::load(),
        2 => Config::load_from_path(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [config-file]", args[0]);
            process::exit(1);
        }
    };

    let config = match loaded {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!(
                "No config file found at {}, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut app = App::new(config);
    println!("{HELP}\n");
    println!("{}", app::render_structure(&app.layout().snapshot()));

    let mut stdout = stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin().lock().lines() {
        let line = line?;
        match app.handle_line(&line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue(output)) if output.is_empty() => {}
            Ok(Outcome::Continue(output)) => println!("{output}"),
            Err(e) => eprintln!("Error: {e:#}"),
        }
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
