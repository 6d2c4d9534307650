// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `mars-clock`: Local True Solar Time board for Mars surface stations.
//!
//! ```text
//! mars-clock                                # catalog board, now
//! mars-clock --at 2024-06-01T12:00:00Z      # catalog board at an instant
//! mars-clock --station "gale crater" --detail
//! mars-clock --lat 18.4 --lon 77.5 --watch  # custom site, refresh every second
//! ```
//!
//! Log verbosity is controlled by the `MARS_CLOCK_LOG` environment filter
//! (default `warn`).

use std::io::Write;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use areochron::{parse_timestamp, stations, ConversionService, Longitude, Station};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MARS_CLOCK_LOG";

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "mars-clock", version)]
#[command(about = "Mars Local True Solar Time for surface stations")]
struct Cli {
    /// UTC instant (ISO-8601 / RFC 3339, or YYYY-MM-DD); defaults to now
    #[arg(long, conflicts_with = "watch")]
    at: Option<String>,

    /// Catalog station name (repeatable, case-insensitive)
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    station: Vec<String>,

    /// Latitude of a custom site, degrees north
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of a custom site, degrees east (or west with --west)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Interpret --lon as west-positive
    #[arg(long, requires = "lon")]
    west: bool,

    /// Print every stage of the conversion for each site
    #[arg(long)]
    detail: bool,

    /// Redraw every second until interrupted
    #[arg(long)]
    watch: bool,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn selected_sites(cli: &Cli) -> anyhow::Result<Vec<Station>> {
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        let longitude = if cli.west {
            Longitude::west(lon)?
        } else {
            Longitude::east(lon)?
        };
        return Ok(vec![Station::new(
            "Custom site",
            lat,
            longitude.degrees_east(),
        )]);
    }
    if cli.station.is_empty() {
        return Ok(stations::CATALOG.to_vec());
    }
    cli.station
        .iter()
        .map(|name| {
            stations::find(name)
                .copied()
                .ok_or_else(|| anyhow!("unknown station '{name}'"))
        })
        .collect()
}

fn render(
    out: &mut impl Write,
    service: &ConversionService,
    sites: &[Station],
    at: DateTime<Utc>,
    cli: &Cli,
) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => render_json(out, service, sites, at)?,
        OutputFormat::Table => {
            let board = service.station_clocks(sites, at)?;
            writeln!(out, "==== Mars Local True Solar Time ====")?;
            writeln!(out, "UTC: {}", at.format("%Y-%m-%d %H:%M:%S"))?;
            writeln!(out)?;
            writeln!(out, "{:20} {:>8} {:>8}", "Site", "LMST", "LTST")?;
            writeln!(out, "{}", "-".repeat(38))?;
            for clock in &board {
                writeln!(
                    out,
                    "{:20} {:>8} {:>8}",
                    clock.station.name,
                    clock.lmst.to_string(),
                    clock.ltst.to_string()
                )?;
            }
            if cli.detail {
                for site in sites {
                    let r = service.reading_at(site.latitude, site.longitude_east, at)?;
                    writeln!(out)?;
                    writeln!(out, "{} ({}, {})", site.name, r.latitude, r.longitude)?;
                    writeln!(out, "  {}", r.julian_date)?;
                    writeln!(out, "  {}", r.terrestrial)?;
                    writeln!(out, "  {} (sol {})", r.sol_date, r.sol)?;
                    writeln!(out, "  MTC  {}", r.mtc)?;
                    writeln!(out, "  {}", r.solar_longitude)?;
                    writeln!(out, "  {}", r.equation_of_time)?;
                    writeln!(out, "  LMST {}  LTST {}", r.lmst, r.ltst)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn render_json(
    out: &mut impl Write,
    service: &ConversionService,
    sites: &[Station],
    at: DateTime<Utc>,
) -> anyhow::Result<()> {
    let readings = sites
        .iter()
        .map(|s| service.reading_at(s.latitude, s.longitude_east, at))
        .collect::<Result<Vec<_>, _>>()?;
    serde_json::to_writer_pretty(&mut *out, &readings)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn render_json(
    _out: &mut impl Write,
    _service: &ConversionService,
    _sites: &[Station],
    _at: DateTime<Utc>,
) -> anyhow::Result<()> {
    bail!("JSON output requires the `serde` feature")
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let service = ConversionService::new();
    let sites = selected_sites(cli)?;
    info!(sites = sites.len(), "station board configured");

    if !cli.watch {
        let at = match &cli.at {
            Some(text) => parse_timestamp(text)
                .with_context(|| format!("cannot read --at '{text}'"))?,
            None => Utc::now(),
        };
        info!(%at, "rendering board");
        return render(out, &service, &sites, at, cli);
    }

    if matches!(cli.format, OutputFormat::Json) {
        bail!("--watch only supports table output");
    }
    loop {
        let at = Utc::now();
        debug!(%at, "refresh");
        // Clear screen and home the cursor.
        write!(out, "\x1b[2J\x1b[H")?;
        render(out, &service, &sites, at, cli)?;
        writeln!(out, "\nUpdating every second (Ctrl-C to quit)")?;
        out.flush()?;
        std::thread::sleep(Duration::from_secs(1));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let stdout = std::io::stdout();
    if let Err(err) = run(&cli, &mut stdout.lock()) {
        error!("{err:#}");
        return Err(err);
    }
    Ok(())
}
