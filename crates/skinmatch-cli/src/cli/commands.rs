//! Config and catalog wiring, then dispatch to the API.

use std::path::PathBuf;

use anyhow::{Context, bail};
use directories::ProjectDirs;
use skinmatch::api::{SearchOptions, SkinmatchApi};
use skinmatch::catalog::fs::JsonCatalog;
use skinmatch::commands::CmdResult;
use skinmatch::config::{CONFIG_FILENAME, SkinmatchConfig};
use tracing::debug;

use super::print;
use super::setup::{Cli, Commands};

pub fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let catalog = cli.catalog.as_ref();

    let result = match cli.command {
        Commands::Config { template } => return show_config(&config, template, cli.json),
        Commands::Search {
            names,
            policy,
            tiebreak,
            limit,
        } => open(catalog, config, false)?.search(
            &names,
            SearchOptions {
                policy: policy.map(Into::into),
                tiebreak: tiebreak.map(Into::into),
                limit,
            },
        )?,
        Commands::Preview { names, policy } => {
            open(catalog, config, false)?.preview(&names, policy.map(Into::into))?
        }
        Commands::Decode { mask } => open(catalog, config, false)?.decode(&mask)?,
        Commands::Attributes => open(catalog, config, false)?.attributes()?,
        Commands::SetStock { id, stock } => open(catalog, config, true)?.set_stock(&id, stock)?,
        Commands::SetPrice { id, cents } => open(catalog, config, true)?.set_price(&id, cents)?,
    };

    render(&result, cli.json)
}

/// Open the catalog file. Edits are written back only when `persist` is set.
fn open(
    catalog: Option<&PathBuf>,
    config: SkinmatchConfig,
    persist: bool,
) -> anyhow::Result<SkinmatchApi<JsonCatalog>> {
    let path = catalog.context("no catalog given: pass --catalog or set SKINMATCH_CATALOG")?;
    let store = JsonCatalog::open(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?
        .with_persist(persist);
    Ok(SkinmatchApi::new(store, config))
}

fn show_config(config: &SkinmatchConfig, template: bool, json: bool) -> anyhow::Result<()> {
    if template {
        print!("{}", SkinmatchConfig::template());
    } else if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print::print_config(config);
    }
    Ok(())
}

/// `--config` first, then `skinmatch.toml` in the platform config directory.
fn config_files(explicit: Option<&PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        files.push(path.clone());
    }
    if let Some(dirs) = ProjectDirs::from("com", "skinmatch", "skinmatch") {
        files.push(dirs.config_dir().join(CONFIG_FILENAME));
    }
    Ok(files)
}

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<SkinmatchConfig> {
    let files = config_files(explicit)?;
    debug!(?files, "loading config");
    SkinmatchConfig::load(&files).context("failed to load configuration")
}

fn render(result: &CmdResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if !result.chips.is_empty() && result.hints.is_empty() {
        print::print_chips(&result.chips);
    }
    print::print_listed(&result.listed_items);
    print::print_hints(&result.hints);
    print::print_attributes(&result.attributes);
    print::print_affected(&result.affected_items);
    print::print_messages(&result.messages);
    Ok(())
}
