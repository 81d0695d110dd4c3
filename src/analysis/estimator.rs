use log::{debug, info};
use num_complex::Complex64;
use crate::analysis::error::AnalysisError;
use crate::analysis::fft;
use crate::analysis::filter::{self, BandpassFilter};
use crate::analysis::signal::{self, RegionOfInterest};
use crate::analysis::source::{Channel, Video};
/// Conversion factor from Hz to beats per minute.
pub const HERTZ_TO_BPM: f64 = 60.0;
/// Everything the pipeline learned from one video.
#[derive(Clone, Debug)]
pub struct PulseEstimate {
    /// Estimated heart rate in beats per minute.
    pub bpm: f64,
    /// Frequency of the winning spectral bin, in Hz.
    pub peak_frequency_hz: f64,
    /// Centred frequency axis matching `power`, in Hz.
    pub frequencies_hz: Vec<f64>,
    /// Band-filtered power spectrum of the region-of-interest signal.
    pub power: Vec<f64>,
}
/// Centred frequency axis for a spectrum of `len` bins sampled at `fps`.
///
/// Bin `k` maps to `(k - len / 2) * fps / len` Hz, strictly increasing, with
/// bin `len / 2` at exactly zero.
pub fn frequency_axis(len: usize, fps: f64) -> Vec<f64> {
    let half = (len / 2) as f64;
    (0..len)
        .map(|k| (k as f64 - half) * fps / len as f64)
        .collect()
}
/// Squared magnitude of the centred spectrum of a real signal.
pub fn power_spectrum(signal: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    let series: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    let spectrum = fft::shift(&fft::transform(&series)?);
    Ok(spectrum.iter().map(|bin| bin.norm_sqr()).collect())
}
/// Runs the full pipeline on one video and returns the detailed result.
///
/// The frame window is truncated to the largest power of two available, the
/// region-of-interest signal is extracted from the chosen channel, its power
/// spectrum is band-filtered, and the strongest remaining bin becomes the
/// estimate.
pub fn analyze(
    video: &Video,
    roi: RegionOfInterest,
    min_freq: f64,
    max_freq: f64,
    channel: Channel,
) -> Result<PulseEstimate, AnalysisError> {
    if video.frame_count() == 0 {
        return Err(AnalysisError::EmptyVideo);
    }
    // The transform only accepts power-of-two lengths, so excess frames are
    // dropped rather than zero-padded.
    let window_len = 1usize << video.frame_count().ilog2();
    debug!(
        "analyzing {} of {} frames at {} fps, channel {}",
        window_len,
        video.frame_count(),
        video.fps(),
        channel
    );
    let frequencies_hz = frequency_axis(window_len, video.fps());
    let frames = &video.channel(channel)[..window_len];
    let samples = signal::extract(frames, roi, video.frame_height(), video.frame_width())?;
    let spectrum = power_spectrum(&samples)?;
    let bandpass = BandpassFilter::new(&frequencies_hz, min_freq, max_freq)?;
    let power = filter::apply_all(&spectrum, &[&bandpass])?;
    let peak = peak_index(&power);
    let peak_frequency_hz = frequencies_hz[peak];
    let bpm = peak_frequency_hz.abs() * HERTZ_TO_BPM;
    info!("peak at {peak_frequency_hz:.3} Hz (bin {peak}), {bpm:.1} bpm");
    Ok(PulseEstimate {
        bpm,
        peak_frequency_hz,
        frequencies_hz,
        power,
    })
}
/// Estimated heart rate of the person in the video, in beats per minute.
pub fn measure(
    video: &Video,
    roi: RegionOfInterest,
    min_freq: f64,
    max_freq: f64,
    channel: Channel,
) -> Result<f64, AnalysisError> {
    Ok(analyze(video, roi, min_freq, max_freq, channel)?.bpm)
}
/// Index of the largest value; on ties the earliest bin wins.
fn peak_index(power: &[f64]) -> usize {
    let mut best = 0;
    for (index, &value) in power.iter().enumerate().skip(1) {
        if value > power[best] {
            best = index;
        }
    }
    best
}
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;
    const FPS: f64 = 30.0;
    /// Width of one spectral bin for a 256-frame window, in bpm.
    const BIN_BPM: f64 = FPS / 256.0 * HERTZ_TO_BPM;
    fn full_roi(height: usize, width: usize) -> RegionOfInterest {
        RegionOfInterest::new(0, height as i64 - 1, 0, width as i64 - 1)
    }
    fn planes(levels: &[u8], height: usize, width: usize) -> Vec<Array2<u8>> {
        levels
            .iter()
            .map(|&v| Array2::from_elem((height, width), v))
            .collect()
    }
    /// Grayscale video whose every pixel follows the per-frame levels.
    fn uniform_video(levels: &[u8], height: usize, width: usize) -> Video {
        let frames = planes(levels, height, width);
        Video::new(FPS, frames.clone(), frames.clone(), frames).unwrap()
    }
    fn sine_levels(freq_hz: f64, frames: usize, amplitude: f64) -> Vec<u8> {
        (0..frames)
            .map(|i| {
                let t = i as f64 / FPS;
                (128.0 + amplitude * (2.0 * PI * freq_hz * t).sin()).round() as u8
            })
            .collect()
    }
    #[test]
    fn frequency_axis_is_centred_and_increasing() {
        let axis = frequency_axis(8, 8.0);
        assert_eq!(axis, vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
        assert!(axis.windows(2).all(|w| w[0] < w[1]));
    }
    #[test]
    fn frequency_axis_of_one_bin_is_zero() {
        assert_eq!(frequency_axis(1, 30.0), vec![0.0]);
    }
    #[test]
    fn power_spectrum_of_silence_is_zero() {
        let spectrum = power_spectrum(&[0.0; 16]).unwrap();
        assert!(spectrum.iter().all(|&p| p == 0.0));
    }
    #[test]
    fn dc_energy_lands_on_the_centre_bin() {
        let spectrum = power_spectrum(&[1.0; 8]).unwrap();
        assert_eq!(peak_index(&spectrum), 4);
    }
    #[test]
    fn first_maximal_bin_wins_ties() {
        assert_eq!(peak_index(&[1.0, 4.0, 4.0, 2.0]), 1);
        assert_eq!(peak_index(&[0.0, 0.0, 0.0]), 0);
    }
    #[test]
    fn detects_a_two_hertz_pulse() {
        let video = uniform_video(&sine_levels(2.0, 256, 60.0), 32, 32);
        let bpm = measure(&video, full_roi(32, 32), 0.4, 7.0, Channel::G).unwrap();
        assert!((bpm - 120.0).abs() <= BIN_BPM, "got {bpm}");
    }
    #[test]
    fn survives_sensor_noise() {
        let mut rng = StdRng::seed_from_u64(7);
        let levels: Vec<u8> = sine_levels(2.0, 256, 40.0)
            .into_iter()
            .map(|v| (f64::from(v) + rng.gen_range(-8.0..8.0)).clamp(0.0, 255.0).round() as u8)
            .collect();
        let video = uniform_video(&levels, 16, 16);
        let bpm = measure(&video, full_roi(16, 16), 0.4, 7.0, Channel::G).unwrap();
        assert!((bpm - 120.0).abs() <= BIN_BPM, "got {bpm}");
    }
    #[test]
    fn truncates_to_the_previous_power_of_two() {
        let video = uniform_video(&sine_levels(2.0, 300, 60.0), 16, 16);
        let estimate = analyze(&video, full_roi(16, 16), 0.4, 7.0, Channel::G).unwrap();
        assert_eq!(estimate.frequencies_hz.len(), 256);
        assert_eq!(estimate.power.len(), 256);
        assert!((estimate.bpm - 120.0).abs() <= BIN_BPM, "got {}", estimate.bpm);
    }
    #[test]
    fn selected_channel_drives_the_estimate() {
        let r = planes(&sine_levels(1.0, 256, 60.0), 8, 8);
        let g = planes(&sine_levels(2.5, 256, 60.0), 8, 8);
        let b = planes(&[128; 256], 8, 8);
        let video = Video::new(FPS, r, g, b).unwrap();
        let bpm_r = measure(&video, full_roi(8, 8), 0.4, 7.0, Channel::R).unwrap();
        let bpm_g = measure(&video, full_roi(8, 8), 0.4, 7.0, Channel::G).unwrap();
        assert!((bpm_r - 60.0).abs() <= BIN_BPM, "got {bpm_r}");
        assert!((bpm_g - 150.0).abs() <= BIN_BPM, "got {bpm_g}");
    }
    #[test]
    fn flat_video_falls_back_to_the_first_bin() {
        // A flat clip has an all-zero spectrum; the tie-break picks the
        // lowest frequency, which is the most negative bin.
        let video = uniform_video(&[128; 64], 8, 8);
        let estimate = analyze(&video, full_roi(8, 8), 0.4, 7.0, Channel::G).unwrap();
        assert_eq!(estimate.peak_frequency_hz, -FPS / 2.0);
        assert_eq!(estimate.bpm, FPS / 2.0 * HERTZ_TO_BPM);
    }
    #[test]
    fn empty_video_is_rejected() {
        let video = Video::new(FPS, vec![], vec![], vec![]).unwrap();
        let err = measure(&video, full_roi(8, 8), 0.4, 7.0, Channel::G).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyVideo));
    }
    #[test]
    fn inverted_band_fails_before_peak_picking() {
        let video = uniform_video(&sine_levels(2.0, 64, 60.0), 8, 8);
        let err = measure(&video, full_roi(8, 8), 7.0, 0.4, Channel::G).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidFrequencyRange { .. }));
    }
}
