use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use orb_renderer::RenderConfig;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a scene of spheres with a Monte Carlo path tracer
#[derive(Debug, Parser)]
#[command(name = "orb", version)]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Samples per pixel
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: u32,

    /// Seed for the random generator; omit for a different image every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON scene file; the random cover scene is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output image (.png, or PPM for anything else); "-" writes PPM to stdout
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Also write the scene that was rendered as JSON
    #[arg(long)]
    pub dump_scene: Option<PathBuf>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_samples(self.samples)
    }

    /// True when the image should go to stdout.
    pub fn output_is_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
