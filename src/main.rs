use clap::Parser;
use std::io::Write;
use traveller_worldgen::utils::{logger, validation::Validate};
use traveller_worldgen::{CliConfig, Dice, Result, TomlConfig, WorldGenError, WorldGenerator};

fn main() {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        report_and_exit(&e);
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.resolve()?;
    config.validate()?;

    let table = config.load_tech_table()?;
    let generator = WorldGenerator::with_names(&table, config.generator.names.clone())?;
    let mut dice = dice_for(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..cli.count {
        let world = generator.generate(&mut dice)?;
        if cli.json {
            serde_json::to_writer(&mut out, &world)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", world)?;
        }
    }

    tracing::debug!("✅ Generated {} worlds", cli.count);
    Ok(())
}

fn dice_for(config: &TomlConfig) -> Dice<rand_chacha::ChaCha8Rng> {
    match config.generator.seed {
        Some(seed) => {
            tracing::info!("🎲 Using seed {}", seed);
            Dice::seeded(seed)
        }
        None => Dice::from_entropy(),
    }
}

fn report_and_exit(e: &WorldGenError) -> ! {
    tracing::error!("❌ World generation failed: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
