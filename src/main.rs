use clap::Parser;
use quote_engine::utils::{logger, validation::Validate};
use quote_engine::{
    format_currency, render_proposal, AgencyProfile, Catalog, CatalogFile, CatalogStore,
    CliConfig, LocalStorage, Quote, QuoteSession, Result, Storage,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quote-engine CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let (catalog, profile) = match load_catalog(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.list {
        print_catalog(&catalog, &profile);
        return Ok(());
    }

    match run(&config, &catalog, &profile) {
        Ok(Some(path)) => {
            tracing::info!("Proposal saved to: {}", path);
            println!("📁 Proposal saved to: {}", path);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Quote estimation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn load_catalog(config: &CliConfig) -> Result<(CatalogStore, AgencyProfile)> {
    match &config.catalog {
        Some(path) => {
            tracing::debug!("Loading catalog from: {}", path);
            let file = CatalogFile::from_file(path)?;
            file.validate()?;
            Ok(file.into_catalog())
        }
        None => Ok((CatalogStore::default(), AgencyProfile::default())),
    }
}

/// Builds the session, applies the requested selection, prints the quote
/// and exports the proposal. Returns the written proposal path, if any.
fn run(
    config: &CliConfig,
    catalog: &CatalogStore,
    profile: &AgencyProfile,
) -> Result<Option<String>> {
    let mut session = QuoteSession::new(catalog)?;
    session.set_complexity_tier(&config.tier)?;
    session.set_timeline(config.months)?;
    if let Some(service) = &config.service {
        session.select_service(service)?;
    }
    for id in &config.add_ons {
        session.toggle_add_on(id)?;
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(session.current_quote())?);
    } else {
        print_breakdown(session.current_quote(), profile);
    }

    // Nothing worth proposing without a service.
    if config.no_export || config.service.is_none() {
        return Ok(None);
    }

    let proposal = render_proposal(session.selection(), session.current_quote(), catalog, profile)?;
    let filename = format!(
        "proposal_{}.txt",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let storage = LocalStorage::new(config.output_path.clone());
    storage.write_file(&filename, proposal.as_bytes())?;

    let written = Path::new(&config.output_path).join(&filename);
    Ok(Some(written.display().to_string()))
}

fn print_breakdown(quote: &Quote, profile: &AgencyProfile) {
    if quote.breakdown.is_empty() {
        println!("No service selected; total is {}0", profile.currency_symbol);
        return;
    }

    println!("Quote breakdown:");
    for item in &quote.breakdown {
        println!(
            "  {:<36} {}{}",
            item.label,
            profile.currency_symbol,
            format_currency(&item.amount)
        );
    }
    println!(
        "  {:<36} {}{}",
        "Total",
        profile.currency_symbol,
        format_currency(&quote.total)
    );
}

fn print_catalog(catalog: &CatalogStore, profile: &AgencyProfile) {
    println!("{} service catalog\n", profile.name);

    println!("Services:");
    for service in catalog.services() {
        println!(
            "  {:<20} {:<28} {}{} (baseline x{})",
            service.id,
            service.name,
            profile.currency_symbol,
            format_currency(&service.base_price),
            service.base_multiplier
        );
    }

    println!("\nComplexity tiers:");
    for tier in catalog.complexity_tiers() {
        println!("  {:<20} {:<28} x{}", tier.id, tier.name, tier.multiplier);
    }

    println!("\nAdd-ons:");
    for add_on in catalog.add_ons() {
        println!(
            "  {:<20} {:<28} {}{} - {}",
            add_on.id,
            add_on.name,
            profile.currency_symbol,
            format_currency(&add_on.price),
            add_on.description
        );
    }
}
