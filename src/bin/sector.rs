use anyhow::Context;
use clap::Parser;
use traveller_worldgen::config::cli::load_config;
use traveller_worldgen::utils::{logger, validation::Validate};
use traveller_worldgen::{Dice, Sector, WorldGenerator};

#[derive(Parser, Debug)]
#[command(name = "sector")]
#[command(about = "Roll up a subsector and list its worlds by hex")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// CSV file of tech level modifiers
    #[arg(long)]
    tech_table: Option<String>,

    /// Minimum 1d6 roll for a hex to hold a world
    #[arg(long)]
    density: Option<i32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let mut config = load_config(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;

    if let Some(seed) = args.seed {
        config.generator.seed = Some(seed);
    }
    if let Some(path) = args.tech_table {
        config.generator.tech_table = Some(path);
    }
    if let Some(density) = args.density {
        config.sector.density = density;
        tracing::info!("🔧 Density overridden to: {}", density);
    }

    config.validate().context("configuration validation failed")?;

    let table = config
        .load_tech_table()
        .context("failed to load tech level table")?;
    let generator = WorldGenerator::with_names(&table, config.generator.names.clone())?;
    let mut dice = match config.generator.seed {
        Some(seed) => Dice::seeded(seed),
        None => Dice::from_entropy(),
    };

    let sector = Sector::generate(&generator, &mut dice, &config.layout())
        .context("sector generation failed")?;
    print!("{}", sector);

    Ok(())
}
