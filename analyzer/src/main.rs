use anyhow::Context;
use clap::Parser;
use generator::signal::{build_window, SignalConfig};
use std::path::PathBuf;
use workflow::config::AnalyzerConfig;
use workflow::runner::{GeometryInput, Runner};

mod acquisition;
mod generator;
mod storage;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "WoodSense pole health workflow driver")]
struct Args {
    /// Load analyzer configuration from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Sensor CSV to analyze (overrides the configured path)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Fetch fresh samples from the sensor endpoint before analyzing
    #[arg(long, default_value_t = false)]
    fetch: bool,
    /// Sensor endpoint URL (overrides the configured one)
    #[arg(long)]
    url: Option<String>,
    /// Measured circumference of the pole at ground level (m)
    #[arg(long)]
    circumference: Option<f64>,
    /// Free length of the pole above ground (m)
    #[arg(long)]
    free_length: Option<f64>,
    /// Height of the lateral support connection above ground (m)
    #[arg(long)]
    support_height: Option<f64>,
    /// Analyze a synthetic signal at the theoretical frequency instead of
    /// sensor data
    #[arg(long, default_value_t = false)]
    synthetic: bool,
    /// Result log path (overrides the configured one)
    #[arg(long)]
    results: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        AnalyzerConfig::load(path)?
    } else {
        AnalyzerConfig::default()
    };

    let input = match (args.circumference, args.free_length) {
        (Some(circumference), None) => GeometryInput::Circumference(circumference),
        (None, Some(free_length)) => GeometryInput::FreeLength(free_length),
        _ => anyhow::bail!("provide exactly one of --circumference or --free-length"),
    };

    let runner = Runner::new(config.clone())?;
    let csv_path = args
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_source.sensor_csv));

    if args.fetch {
        let url = args
            .url
            .clone()
            .unwrap_or_else(|| config.data_source.api_url.clone());
        match acquisition::fetch::fetch_sensor_data(&url, &csv_path) {
            Ok(count) => println!("Fetched {} samples from {}", count, url),
            Err(err) => eprintln!("Fetch failed ({err:#}); continuing with existing data"),
        }
    }

    let window = if args.synthetic {
        let geometry = runner.resolve_free_length(input)?;
        let frequency = runner.model().free_frequency(geometry.free_length_m);
        anyhow::ensure!(
            frequency.is_finite(),
            "theoretical frequency not computable for this geometry"
        );
        build_window(&SignalConfig {
            frequency_hz: frequency,
            ..Default::default()
        })
        .context("building synthetic signal")?
    } else {
        acquisition::csv::read_sensor_csv(&csv_path)?
    };

    let support = args
        .support_height
        .map(|height_m| polecore::prelude::SupportConfig { height_m });
    let record = runner.execute(input, support, &window)?;

    println!(
        "Free length {:.2} m | sampling {:.2} Hz",
        record.free_length_m, record.sampling_hz
    );
    println!(
        "FFT peaks: {}",
        record
            .peak_frequencies_hz
            .iter()
            .map(|f| format!("{f:.2} Hz"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Theoretical free {:.2} Hz -> matched {:.2} Hz ({:+.2}%)",
        record.free.theoretical_hz, record.free.measured_hz, record.free.deviation_percent
    );
    if let Some(supported) = &record.supported {
        println!(
            "Theoretical supported {:.2} Hz -> matched {:.2} Hz ({:+.2}%)",
            supported.theoretical_hz, supported.measured_hz, supported.deviation_percent
        );
    }
    println!(
        "Damage level: {:?} | {}",
        record.damage_level, record.condition_summary
    );
    println!("Suggested action: {}", record.recommended_action);

    let results_path = args
        .results
        .unwrap_or_else(|| PathBuf::from(&config.data_source.results_json));
    storage::append_record(&results_path, &record)?;
    println!("Record appended to {}", results_path.display());

    Ok(())
}
