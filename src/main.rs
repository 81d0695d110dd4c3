// src/main.rs
mod analysis;
mod video;
use std::path::PathBuf;
use std::process;
use anyhow::Context;
use clap::Parser;
use log::{debug, error, LevelFilter};
use crate::analysis::{estimator, plot, Channel, PlotStyle, RegionOfInterest};
/// Estimates a heart rate from a recorded video by tracking the periodic
/// color changes that blood flow leaves on skin.
#[derive(Parser, Debug)]
#[command(name = "pulsecam", version)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
    /// Directory holding the decoded PNG frames and their video.json metadata.
    #[arg(short = 'p', long = "video-path", default_value = "./video")]
    video_path: PathBuf,
    /// Top row of the region of interest.
    #[arg(long, allow_negative_numbers = true)]
    roi_top: i64,
    /// Bottom row of the region of interest (exclusive).
    #[arg(long, allow_negative_numbers = true)]
    roi_bottom: i64,
    /// Left column of the region of interest.
    #[arg(long, allow_negative_numbers = true)]
    roi_left: i64,
    /// Right column of the region of interest (exclusive).
    #[arg(long, allow_negative_numbers = true)]
    roi_right: i64,
    /// Lower edge of the heart-rate band, in Hz.
    #[arg(long, default_value_t = 0.4)]
    min_freq: f64,
    /// Upper edge of the heart-rate band, in Hz.
    #[arg(long, default_value_t = 7.0)]
    max_freq: f64,
    /// Color channel to analyze: R, G or B.
    #[arg(short = 'c', long, default_value = "G")]
    channel: String,
    /// Also write a PNG plot of the filtered spectrum to this path.
    #[arg(long)]
    spectrum_png: Option<PathBuf>,
}
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        error!("{err:#}");
        process::exit(1);
    }
}
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();
}
fn run(cli: &Cli) -> anyhow::Result<()> {
    let channel: Channel = cli.channel.parse()?;
    let roi = RegionOfInterest::new(cli.roi_top, cli.roi_bottom, cli.roi_left, cli.roi_right);
    debug!("video path '{}', roi {}", cli.video_path.display(), roi);
    let video = video::load(&cli.video_path).context("could not load video")?;
    let bpm = match &cli.spectrum_png {
        Some(path) => {
            let estimate = estimator::analyze(&video, roi, cli.min_freq, cli.max_freq, channel)
                .context("could not measure heart beat rate")?;
            let png = plot::render_spectrum_png(&estimate, PlotStyle::default())
                .context("could not render spectrum plot")?;
            std::fs::write(path, png)
                .with_context(|| format!("could not write '{}'", path.display()))?;
            estimate.bpm
        }
        None => estimator::measure(&video, roi, cli.min_freq, cli.max_freq, channel)
            .context("could not measure heart beat rate")?,
    };
    println!("Average heart beat rate is {bpm}");
    Ok(())
}
