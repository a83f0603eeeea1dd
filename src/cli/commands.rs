use tracing::{debug, info};

use crate::cli::args::{Cli, Commands, FetchArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::processors::{CollectionReport, SnapshotCollector};
use crate::readers::{HttpFetcher, StationFetcher};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::progress::ProgressReporter;
use crate::writers::{publish, JsonWriter};

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_else(|| Commands::Fetch(FetchArgs::default())) {
        Commands::Fetch(args) => {
            let mut settings = Settings::load(args.config.as_deref())?;
            if let Some(output) = args.output {
                settings.output_path = output;
            }
            settings.publish_dirs.extend(args.publish_dirs);

            let clock = SystemClock::new(settings.tz()?);
            let fetcher = HttpFetcher::new(settings.request_timeout())?;
            let progress = ProgressReporter::new(
                settings.stations.len() as u64,
                "Fetching stations...",
                !args.progress,
            );

            let report = fetch_snapshot(&settings, fetcher, &clock, Some(&progress)).await?;
            progress.finish_with_message(&format!(
                "{} of {} stations accepted",
                report.accepted_count(),
                settings.stations.len()
            ));

            if cli.verbose {
                println!("\n{}", report.generate_summary());
            }
        }

        Commands::Validate { config } => {
            let settings = Settings::load(config.as_deref())?;

            println!(
                "Registry OK: {} stations, timezone {}, freshness window {} min",
                settings.stations.len(),
                settings.timezone,
                settings.freshness_window_minutes
            );
            for (i, station) in settings.stations.iter().enumerate() {
                println!(
                    "{:>3}. {} ({}, {}) {}",
                    i + 1,
                    station.name,
                    station.latitude,
                    station.longitude,
                    station.url
                );
            }
        }

        Commands::Info { file, stations } => {
            println!("Analyzing snapshot file: {}", file.display());

            let writer = JsonWriter::new();
            let file_info = writer.get_file_info(&file)?;
            println!("\n{}", file_info.summary());

            if stations {
                let snapshot = writer.read_snapshot(&file)?;
                println!("\n{}", snapshot.summary());
            }
        }
    }

    Ok(())
}

/// One complete run: poll, write, publish.
///
/// Station failures end up in the returned report; only settings, output and
/// publication errors are returned as `Err`.
pub async fn fetch_snapshot<F, C>(
    settings: &Settings,
    fetcher: F,
    clock: &C,
    progress: Option<&ProgressReporter>,
) -> Result<CollectionReport>
where
    F: StationFetcher,
    C: Clock,
{
    let now = clock.now();
    debug!(stations = settings.stations.len(), "Starting run at {}", now);

    let collector = SnapshotCollector::new(fetcher, settings)?;
    let report = collector.collect(&settings.stations, now, progress).await;

    JsonWriter::new().write_snapshot(&report.snapshot, &settings.output_path)?;
    info!(
        "Weather data saved to '{}' at {}",
        settings.output_path.display(),
        report.snapshot.metadata.generated_at
    );

    publish(&settings.output_path, &settings.publish_dirs)?;

    Ok(report)
}
