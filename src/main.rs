use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ljbox::{output::FileRecorder, SimulationConfig};

#[derive(Parser, Debug)]
#[command(about = "Lennard-Jones gas in a periodic 2D box")]
struct Args {
    /// YAML run configuration; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory for trajectory.dat and observables.dat
    #[arg(short, long, default_value = "results")]
    output_dir: PathBuf,
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    match &args.config {
        Some(path) => SimulationConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(SimulationConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let output = config.output()?;
    let mut sim = config.build()?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;
    let trajectory = BufWriter::new(File::create(args.output_dir.join("trajectory.dat"))?);
    let observables = BufWriter::new(File::create(args.output_dir.join("observables.dat"))?);
    let mut recorder = FileRecorder::new(trajectory, observables)?;

    let summary = sim.run(config.timestep, config.num_steps(), &output, &mut recorder)?;
    recorder.flush()?;

    info!(
        "{} samples over t = {:.6}, energy drift {:e}",
        summary.samples,
        summary.final_time,
        summary.final_energy - summary.initial_energy
    );
    info!("Results written to {}", args.output_dir.display());
    Ok(())
}
