use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use stow_ga::config::GaConfig;
use stow_ga::io::cli::Cli;
use stow_ga::io::output::GaOutput;
use stow_ga::io::read_instance;
use stow_ga::opt::ga::GaOptimizer;
use stow_ga::{EPOCH, io};
use stow_rs::io::export::export_solution;
use stow_rs::io::import::Importer;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GaConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    config.validate().context("invalid configuration")?;

    info!("Successfully parsed GaConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = read_instance(args.input_file.as_path())?;
    let instance = Importer::new()
        .import_instance(&ext_instance)
        .context("invalid instance")?;
    info!(
        "[MAIN] {} container with {} item types ({} items)",
        instance.dimensionality(),
        instance.items.len(),
        instance.total_item_qty()
    );

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let instance = Arc::new(instance);
    let result = GaOptimizer::new(instance.clone(), config, rng)?.solve()?;

    let output = GaOutput {
        instance: ext_instance,
        solution: export_solution(&instance, &result.solution),
        encoding: result.encoding,
        config,
        history: result.history,
        run_time_sec: EPOCH.elapsed().as_secs(),
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
