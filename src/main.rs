// main.rs - CLI entry point

use mlstdist::prelude::*;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        print!("{}", Config::generate_sample());
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    init_logging(args.quiet);

    let input = args
        .input
        .clone()
        .ok_or_else(|| MlstDistError::config("an input profile table is required"))?;

    // Validate all arguments before touching the input
    let validation = validate_args(&args)?;
    let run_config = validation.run_config;

    log::info!("🚀 mlstdist v{}", mlstdist::VERSION);

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| MlstDistError::config(format!("failed to configure thread pool: {}", e)))?;
        log::info!("🧵 Threads: {}", n);
    } else {
        log::info!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    log::info!(
        "🎯 Metric: {} ({}), layout: {}, order: {}, format: {}",
        run_config.metric,
        run_config.metric.description(),
        run_config.layout,
        run_config.order,
        run_config.format
    );

    let total_start = Instant::now();

    let table = ProfileTable::from_delimited_file(Path::new(&input), &validation.loader_options)?;
    let summary = table.summary();
    log::info!(
        "📏 Dimensions: {} samples × {} loci, {} distinct allele tokens ({:.1} per locus)",
        summary.samples,
        summary.loci,
        summary.distinct_alleles,
        summary.avg_unique_alleles
    );

    if args.dry_run {
        log::info!("✅ Dry run completed successfully");
        return Ok(());
    }

    let matrix = run_pipeline(&table, &run_config)?;

    // Nothing reaches stdout until the whole matrix is assembled
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_matrix(&mut writer, run_config.format, &matrix)?;
    writer.flush()?;

    log::info!(
        "🎉 Completed in {:.2}s ({} rows written)",
        total_start.elapsed().as_secs_f64(),
        matrix.len()
    );

    Ok(())
}
