//! Command line surface of the `wixgen` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::generator::GeneratorConfig;
use crate::settings::Settings;
use crate::template::Variables;

/// Generate a WiX component fragment listing the files of a build output
/// directory.
#[derive(Debug, Parser)]
#[command(name = "wixgen", version)]
pub struct Args {
    /// Directory to list; `$(Configuration)` and other `$(Name)` variables
    /// are substituted before listing.
    #[arg(long)]
    pub dir: String,

    /// Build configuration bound to `$(Configuration)` [default: Release]
    #[arg(long)]
    pub config: Option<String>,

    /// Write the fragment to this file instead of standard output.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// `Id` of the generated ComponentGroup [default: FrameResizerComponents]
    #[arg(long)]
    pub group_id: Option<String>,

    /// `Directory` of the generated ComponentGroup [default: INSTALLFOLDER]
    #[arg(long)]
    pub directory_id: Option<String>,

    /// Extra template variable, e.g. `--var Platform=x64`. Repeatable.
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Settings file (TOML). Defaults to `wixgen.toml` in the working
    /// directory when present.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty variable name in `{}`", s));
    }
    Ok((key.to_owned(), value.to_owned()))
}

impl Args {
    /// Combine the flags with `settings`; flags win.
    pub fn into_config(self, settings: &Settings) -> GeneratorConfig {
        let mut config = GeneratorConfig::from_settings(self.dir, settings);
        if let Some(c) = self.config {
            config.configuration = c;
        }
        if let Some(id) = self.group_id {
            config.group.id = id;
        }
        if let Some(directory) = self.directory_id {
            config.group.directory = directory;
        }
        let vars: Variables = self.vars.into_iter().collect();
        config.variables.extend(vars);
        config.output = self.output;
        config
    }
}
