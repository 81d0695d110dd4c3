// src/analysis/mod.rs
pub mod error;
pub mod estimator;
pub mod fft;
pub mod filter;
pub mod plot;
pub mod signal;
pub mod source;
pub use error::AnalysisError;
pub use estimator::{analyze, measure, PulseEstimate};
pub use filter::{apply_all, BandpassFilter, SpectrumFilter};
pub use plot::{render_spectrum_png, PlotStyle};
pub use signal::RegionOfInterest;
pub use source::{Channel, Video};
