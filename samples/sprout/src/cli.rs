use std::path::PathBuf;

use clap::ValueHint;
use vinemesh::TubeConfig;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,vinemesh=info,sprout=info",
        env = "SPROUT_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Skeleton to extrude, as a JSON array of `{id, position, children}` records
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "seed")]
    pub skeleton: Option<PathBuf>,
    /// Grow a random skeleton from this seed instead of reading one
    #[arg(short, long, conflicts_with = "skeleton")]
    pub seed: Option<u64>,
    /// Most edges a random skeleton may have
    #[arg(short, long, default_value_t = 100)]
    pub budget: u32,
    /// Base tube configuration, as a JSON object; missing fields take default values
    #[arg(short, long, value_hint = ValueHint::FilePath, env = "SPROUT_CONFIG")]
    pub config: Option<PathBuf>,
    /// Tube radius
    #[arg(long, env = "SPROUT_RADIUS")]
    pub radius: Option<f32>,
    /// Vertices per tube ring
    #[arg(long, env = "SPROUT_RADIUS_SEGMENTS")]
    pub radius_segments: Option<u32>,
    /// Approximate number of tube divisions across the whole skeleton
    #[arg(long, env = "SPROUT_SEGMENTS")]
    pub segments: Option<u32>,
    /// Growth level to report visible faces for, in 0..=1
    #[arg(short, long, env = "SPROUT_GROWTH")]
    pub growth: Option<f32>,
    /// Where to write the Wavefront OBJ mesh; `-` for stdout
    #[arg(short, long, default_value = "sprout.obj", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
    /// Also write the skeleton as JSON records to this path
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub dump_skeleton: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides to `base`.
    pub fn tube_config(&self, base: TubeConfig) -> TubeConfig {
        TubeConfig {
            radius: self.radius.unwrap_or(base.radius),
            radius_segments: self.radius_segments.unwrap_or(base.radius_segments),
            target_segment_count: self.segments.unwrap_or(base.target_segment_count),
            growth: self.growth.unwrap_or(base.growth),
        }
    }
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
