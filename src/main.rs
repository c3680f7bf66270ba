// wixgen: list a build output directory and print a WiX component fragment.
// Usage: wixgen --dir "..\App\bin\$(Configuration)\net8.0-windows" [--config Release] [--output Components.wxs]

use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;

use wixgen::cli::Args;
use wixgen::generator;
use wixgen::logging;
use wixgen::settings::Settings;

fn load_settings(args: &Args) -> Result<Settings> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let settings = Settings::discover(args.settings.as_deref(), &cwd)
        .context("failed to load settings")?;
    Ok(settings)
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings = match load_settings(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit(1);
        }
    };
    let config = args.into_config(&settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = generator::run(&config, &mut out) {
        let label = if e.is_warning() { "warning" } else { "error" };
        eprintln!("{}: {}", label, e);
        exit(e.exit_code());
    }
}
