use crate::analysis::error::AnalysisError;
/// A frequency-domain filter applied to a real-valued power spectrum.
///
/// Implementations must keep the signal length; [`apply_all`] rejects any
/// that do not.
pub trait SpectrumFilter {
    fn apply(&self, signal: &[f64]) -> Vec<f64>;
}
/// Keeps bins whose frequency falls inside an inclusive band, zeroes the rest.
#[derive(Clone, Debug)]
pub struct BandpassFilter {
    freqs: Vec<f64>,
    min_freq: f64,
    max_freq: f64,
}
impl BandpassFilter {
    pub fn new(freqs: &[f64], min_freq: f64, max_freq: f64) -> Result<Self, AnalysisError> {
        if min_freq > max_freq {
            return Err(AnalysisError::InvalidFrequencyRange {
                min: min_freq,
                max: max_freq,
            });
        }
        Ok(Self {
            freqs: freqs.to_vec(),
            min_freq,
            max_freq,
        })
    }
}
impl SpectrumFilter for BandpassFilter {
    fn apply(&self, signal: &[f64]) -> Vec<f64> {
        signal
            .iter()
            .zip(&self.freqs)
            .map(|(&value, &freq)| {
                if (self.min_freq..=self.max_freq).contains(&freq) {
                    value
                } else {
                    0.0
                }
            })
            .collect()
    }
}
/// Runs the signal through each filter in order, checking the length after
/// every step. An empty filter list returns the signal unchanged.
pub fn apply_all(
    signal: &[f64],
    filters: &[&dyn SpectrumFilter],
) -> Result<Vec<f64>, AnalysisError> {
    let mut current = signal.to_vec();
    for filter in filters {
        let filtered = filter.apply(&current);
        if filtered.len() != current.len() {
            return Err(AnalysisError::FilterShapeMismatch {
                expected: current.len(),
                actual: filtered.len(),
            });
        }
        current = filtered;
    }
    Ok(current)
}
