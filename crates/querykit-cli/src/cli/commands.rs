use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use querykit::attributes::{ExtendedAttribute, ExtendedAttributeRecord};
use querykit::query::query_extended_attributes;
use querykit::store::{InMemoryRepository, Repository};
use querykit::validation::{
    ExtendedAttributeFilterValidator, ExtendedAttributePaginationFilter, Validator,
};
use querykit::QueryConfig;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use super::schema;
use super::setup::{Cli, Commands};

type Filter = ExtendedAttributePaginationFilter<Uuid>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = QueryConfig::load(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Validate { filter } => handle_validate(&filter, &config),
        Commands::Query { records, filter } => handle_query(&records, &filter, &config),
        Commands::Schema { host, base_path } => {
            let doc = schema::document(&host, &base_path, &config);
            println!("{}", serde_json::to_string_pretty(&*doc)?);
            Ok(())
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("QUERYKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_validate(path: &Path, config: &QueryConfig) -> Result<()> {
    let filter: Filter = read_json(path)?;
    let errors = ExtendedAttributeFilterValidator::<Uuid>::new(config).validate(&filter);
    if errors.is_empty() {
        println!("valid");
        return Ok(());
    }
    for error in errors.iter() {
        println!("{}", error);
    }
    bail!("{} validation error(s) in {}", errors.len(), path.display())
}

fn handle_query(records: &Path, filter: &Path, config: &QueryConfig) -> Result<()> {
    let rows: Vec<ExtendedAttributeRecord<Uuid>> = read_json(records)?;
    let filter: Filter = read_json(filter)?;

    let store = InMemoryRepository::<ExtendedAttribute<Uuid>>::new();
    for (index, row) in rows.into_iter().enumerate() {
        let attr = ExtendedAttribute::try_from(row)
            .with_context(|| format!("record {} in {}", index, records.display()))?;
        store.insert(attr)?;
    }
    tracing::debug!(rows = store.len()?, "records loaded");

    let page = query_extended_attributes(&store, &filter, config)?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
