use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;

use recipe_ranker::{
    find_by_recipe_id, load_records, FilterMode, LinkStyle, Listing, RankerConfig, Ranker, Recipe,
    RecipeCard,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    cli::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Rank {
            input,
            query,
            mode,
            limit,
            config,
            link_style,
            json,
        } => {
            let config = resolve_config(config.as_deref(), limit, link_style)?;
            let records = read_records(input.as_deref())?;
            run_rank(&records, &query, mode, config, json)
        }
        Commands::Show {
            input,
            recipe_id,
            link_style,
        } => {
            let records = read_records(input.as_deref())?;
            let recipe = find_by_recipe_id(&records, &recipe_id)?;
            let card = RecipeCard::new(recipe, link_style);
            display::print_recipe(recipe, &card);
            Ok(())
        }
        Commands::Validate { input } => {
            let records = read_records(input.as_deref())?;
            display::print_valid(input.as_deref().unwrap_or("<stdin>"), records.len());
            Ok(())
        }
    }
}

/// Defaults, then the config file, then flags.
fn resolve_config(
    path: Option<&str>,
    limit: Option<usize>,
    link_style: Option<LinkStyle>,
) -> Result<RankerConfig> {
    let mut config = match path {
        Some(path) => RankerConfig::load(path)?,
        None => RankerConfig::default(),
    };
    if let Some(limit) = limit {
        config.limit = limit;
    }
    if let Some(link_style) = link_style {
        config.link_style = link_style;
    }
    config.validate()?;
    Ok(config)
}

fn read_records(input: Option<&str>) -> Result<Vec<Recipe>> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe payload {}", path))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read recipe payload from stdin")?;
            raw
        }
    };
    let source = input.unwrap_or("<stdin>");
    load_records(&raw).with_context(|| format!("invalid recipe payload {}", source))
}

fn run_rank(
    records: &[Recipe],
    query: &str,
    mode: FilterMode,
    config: RankerConfig,
    json: bool,
) -> Result<()> {
    let ranker = Ranker::new(config);
    let ranked = ranker.rank(records, query, mode);
    let listing = Listing::from_ranked(&ranked, ranker.config().link_style);

    if json {
        println!("{}", serde_json::to_string_pretty(listing.cards())?);
    } else {
        display::print_listing(&listing, mode, query, records.len());
    }
    Ok(())
}
