use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wadokei_core::{Instant, Reading, Wadokei, WadokeiConfig, WadokeiError, render};
use wadokei_time::UtcTime;

#[derive(Parser)]
#[command(name = "wadokei", about = "Japanese unequal-hour clock")]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default, Clone)]
struct GlobalOpts {
    /// Latitude in degrees, north positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Output template (%T %s %b %m %H %M %h %p %%)
    #[arg(long, global = true)]
    format: Option<String>,
    /// TOML config file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Traditional time now
    Now,
    /// Traditional time at a UTC instant
    At {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Sunrise, transit and sunset for the solar day of a UTC instant
    Sun {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Render a template for now, or for --date
    Render {
        #[arg(long)]
        template: String,
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = resolve_config(&cli.opts).unwrap_or_else(|e| fail(e));
    debug!(?config, "resolved configuration");
    let mut clock = Wadokei::new(config).unwrap_or_else(|e| fail(e));

    match cli.command {
        Commands::Now => {
            let reading = clock.now().unwrap_or_else(|e| fail(e));
            print_reading(&clock, &reading);
        }

        Commands::At { date } => {
            let instant = parse_instant(&date).unwrap_or_else(|e| fail(e));
            let reading = clock.at(instant).unwrap_or_else(|e| fail(e));
            print_reading(&clock, &reading);
        }

        Commands::Sun { date } => {
            let instant = parse_instant(&date).unwrap_or_else(|e| fail(e));
            let events = clock.sun_events(instant).unwrap_or_else(|e| fail(e));
            let loc = clock.location();
            println!(
                "Solar events for {} at {:.4}°N, {:.4}°E:\n",
                date,
                loc.latitude_deg(),
                loc.longitude_deg()
            );
            match events.sunrise {
                Some(t) => println!("  {:10} {}", "Sunrise", t),
                None => println!("  {:10} none (polar day or night)", "Sunrise"),
            }
            println!("  {:10} {}", "Transit", events.transit);
            match events.sunset {
                Some(t) => println!("  {:10} {}", "Sunset", t),
                None => println!("  {:10} none (polar day or night)", "Sunset"),
            }
        }

        Commands::Render { template, date } => {
            let instant = match date {
                Some(d) => parse_instant(&d).unwrap_or_else(|e| fail(e)),
                None => Instant::now(),
            };
            let reading = clock.at(instant).unwrap_or_else(|e| fail(e));
            println!("{}", render(&template, &reading.time));
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Config file (if any) overlaid with command-line flags.
fn resolve_config(opts: &GlobalOpts) -> Result<WadokeiConfig, WadokeiError> {
    let mut config = match &opts.config {
        Some(path) => WadokeiConfig::from_file(path)?,
        None => WadokeiConfig::default(),
    };
    if let Some(lat) = opts.lat {
        config.latitude_deg = lat;
    }
    if let Some(lon) = opts.lon {
        config.longitude_deg = lon;
    }
    if let Some(format) = &opts.format {
        config.format = format.clone();
    }
    config.validate()?;
    Ok(config)
}

fn parse_instant(s: &str) -> Result<Instant, WadokeiError> {
    let utc: UtcTime = s.parse()?;
    Ok(utc.to_instant()?)
}

fn print_reading(clock: &Wadokei, reading: &Reading) {
    let time = &reading.time;
    println!("{}", clock.render(time));
    println!("  {:12} {}", "Instant", time.instant);
    println!("  {:12} {:.4}", "Hour", time.hour);
    println!("  {:12} {:?}", "Segment", time.segment);
    println!("  {:12} {}", "Bell count", time.hour_number);
    println!("  {:12} {} ({})", "Stem", time.stem_glyph(), time.stem);
    if let Some(strikes) = time.bell_strikes() {
        println!("  {:12} {}", "Bell", strikes);
    }
    println!("  {:12} {} ms", "Next update", reading.schedule_delay_ms);
}

fn fail(e: WadokeiError) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let opts = GlobalOpts {
            lat: Some(51.5),
            lon: Some(-0.12),
            format: Some("%H".to_string()),
            config: None,
        };
        let c = resolve_config(&opts).unwrap();
        assert_eq!(c.latitude_deg, 51.5);
        assert_eq!(c.longitude_deg, -0.12);
        assert_eq!(c.format, "%H");
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let opts = GlobalOpts {
            lat: Some(100.0),
            ..GlobalOpts::default()
        };
        assert!(matches!(resolve_config(&opts), Err(WadokeiError::Config(_))));
    }

    #[test]
    fn missing_config_file() {
        let opts = GlobalOpts {
            config: Some(PathBuf::from("/nonexistent/wadokei.toml")),
            ..GlobalOpts::default()
        };
        assert!(matches!(resolve_config(&opts), Err(WadokeiError::Io(_))));
    }

    #[test]
    fn parses_instants() {
        assert_eq!(
            parse_instant("2024-06-21T06:00:00Z").unwrap().as_millis(),
            1_718_949_600_000
        );
        assert!(matches!(
            parse_instant("yesterday"),
            Err(WadokeiError::Time(_))
        ));
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wadokei", "at", "--date", "2024-06-21T06:00:00Z", "--lat", "-33.9", "--lon", "151.2",
        ])
        .unwrap();
        assert_eq!(cli.opts.lat, Some(-33.9));
        assert!(matches!(cli.command, Commands::At { .. }));
    }
}
