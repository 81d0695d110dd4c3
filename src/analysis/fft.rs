use std::f64::consts::PI;
use num_complex::Complex64;
use crate::analysis::error::AnalysisError;
/// Discrete Fourier transform via recursive radix-2 decimation in time.
///
/// Bins come out in standard DFT order: index 0 holds the zero-frequency
/// component, then positive frequencies ascend and wrap around to the
/// negative ones. Inputs of length zero or one pass through unchanged; any
/// other length must be a power of two.
pub fn transform(x: &[Complex64]) -> Result<Vec<Complex64>, AnalysisError> {
    let n = x.len();
    if n <= 1 {
        return Ok(x.to_vec());
    }
    if !n.is_power_of_two() {
        return Err(AnalysisError::LengthNotPowerOfTwo { len: n });
    }
    let even: Vec<Complex64> = x.iter().copied().step_by(2).collect();
    let odd: Vec<Complex64> = x.iter().copied().skip(1).step_by(2).collect();
    let mut bins = transform(&even)?;
    bins.extend(transform(&odd)?);
    let half = n / 2;
    for k in 0..half {
        let twiddle = Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n as f64);
        let even_term = bins[k];
        let odd_term = twiddle * bins[k + half];
        bins[k] = even_term + odd_term;
        bins[k + half] = even_term - odd_term;
    }
    Ok(bins)
}
/// Rotates a spectrum so the zero-frequency bin sits at index `len / 2`.
///
/// Circular right-rotation by half the length, the usual fftshift
/// convention, valid for even and odd lengths alike.
pub fn shift(x: &[Complex64]) -> Vec<Complex64> {
    let mut shifted = x.to_vec();
    shifted.rotate_right(x.len() / 2);
    shifted
}
