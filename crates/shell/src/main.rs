use anyhow::Context;
use clap::Parser;

use stockroom_catalog::Catalog;
use stockroom_shell::{Config, Session};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    stockroom_observability::init(config.log_format);

    let mut catalog = Catalog::named(config.catalog.clone());
    tracing::info!(catalog = %catalog.name(), "catalog shell started");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let end = Session::new(&mut catalog, config.currency.clone())
        .with_prompt(config.prompt)
        .run(stdin.lock(), &mut stdout)
        .context("catalog session failed")?;

    tracing::info!(?end, items = catalog.len(), "catalog shell finished");
    Ok(())
}
