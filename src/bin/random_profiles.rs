// random_profiles.rs - Generate random allelic profiles for test fixtures

use argh::FromArgs;
use mlstdist::data::{generate_random_profiles, write_profiles_tsv};
use mlstdist::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufWriter, Write};

#[derive(FromArgs)]
/// random_profiles - write a random allele-call table (calls 0-9) to stdout
struct Args {
    /// number of samples
    #[argh(positional)]
    samples: usize,

    /// number of loci
    #[argh(positional)]
    loci: usize,

    /// random seed for reproducible output
    #[argh(option)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let args: Args = argh::from_env();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let table = generate_random_profiles(args.samples, args.loci, &mut rng)?;
    log::info!(
        "🎲 Generated {} samples × {} loci",
        table.len(),
        table.n_loci()
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_profiles_tsv(&table, &mut writer)?;
    writer.flush()?;
    Ok(())
}
