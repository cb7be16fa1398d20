use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticket_query::domain::{TrainCategory, TrainTypeFilter};
use ticket_query::fetch::{FetcherConfig, HttpFetcher};
use ticket_query::query::{DEFAULT_QUERY_ENDPOINT, TicketPipeline, TicketRequest};
use ticket_query::render::{Color, Palette};
use ticket_query::stations::{
    DEFAULT_STATIONS_URL, StationCache, StationClientConfig, StationSource,
};

/// Query remaining train tickets between two stations.
#[derive(Debug, Parser)]
#[command(name = "train", version)]
struct Args {
    /// Origin station, as pinyin (beijingnan, bjn) or Chinese name (北京南)
    from: String,

    /// Destination station, as pinyin or Chinese name
    to: String,

    /// Travel date: 2016-07-18, 20160718 or 2016-7-18 [default: today]
    date: Option<String>,

    /// Only high-speed trains (G)
    #[arg(short = 'g', long)]
    high_speed: bool,

    /// Only bullet trains (D)
    #[arg(short = 'd', long)]
    bullet: bool,

    /// Only intercity trains (C)
    #[arg(short = 'c', long)]
    intercity: bool,

    /// Only direct express trains (Z)
    #[arg(short = 'z', long)]
    direct: bool,

    /// Only express trains (T)
    #[arg(short = 't', long)]
    express: bool,

    /// Only fast trains (K)
    #[arg(short = 'k', long)]
    fast: bool,

    /// Ticket query endpoint
    #[arg(long, env = "TRAIN_QUERY_ENDPOINT", default_value = DEFAULT_QUERY_ENDPOINT)]
    endpoint: String,

    /// Station dataset URL
    #[arg(long, env = "TRAIN_STATIONS_URL", default_value = DEFAULT_STATIONS_URL)]
    stations_url: String,

    /// Local station_name.js file; skips the cache and download
    #[arg(long, env = "TRAIN_STATIONS_FILE")]
    stations_file: Option<PathBuf>,

    /// Station cache file
    #[arg(long, env = "TRAIN_STATIONS_CACHE")]
    stations_cache: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, env = "TRAIN_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn train_types(&self) -> TrainTypeFilter {
        let enabled: Vec<TrainCategory> = [
            (TrainCategory::HighSpeed, self.high_speed),
            (TrainCategory::Bullet, self.bullet),
            (TrainCategory::Intercity, self.intercity),
            (TrainCategory::Direct, self.direct),
            (TrainCategory::Express, self.express),
            (TrainCategory::Fast, self.fast),
        ]
        .into_iter()
        .filter_map(|(category, on)| on.then_some(category))
        .collect();
        TrainTypeFilter::from_enabled(&enabled)
    }

    fn palette(&self) -> Palette {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if self.no_color || no_color_env {
            Palette::plain()
        } else {
            Palette::colored()
        }
    }

    fn station_source(&self) -> StationSource {
        let cache = match &self.stations_cache {
            Some(path) => StationCache::new(path),
            None => StationCache::default(),
        };
        StationSource {
            file: self.stations_file.clone(),
            cache,
            client: StationClientConfig::new()
                .with_url(&self.stations_url)
                .with_timeout(self.timeout_secs),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let palette = args.palette();

    let stations = match args.station_source().load().await {
        Ok(stations) => stations,
        Err(e) => {
            eprintln!(
                "{}",
                palette.paint(&format!("failed to load stations: {e}"), Color::Red)
            );
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match HttpFetcher::new(FetcherConfig::new().with_timeout(args.timeout_secs)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("{}", palette.paint(&e.to_string(), Color::Red));
            return ExitCode::FAILURE;
        }
    };

    let request = TicketRequest {
        from: args.from.clone(),
        to: args.to.clone(),
        train_types: args.train_types(),
        date: args.date.clone(),
    };

    let pipeline = TicketPipeline::new(&stations, &fetcher)
        .with_endpoint(&args.endpoint)
        .with_palette(palette);

    let mut stdout = std::io::stdout();
    if pipeline.query_tickets(&request, &mut stdout).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
