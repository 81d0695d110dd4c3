use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use crate::analysis::error::AnalysisError;
use crate::analysis::estimator::PulseEstimate;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub line: RGBColor,
    pub marker: RGBColor,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            background: RGBColor(10, 10, 10),
            line: GREEN,
            marker: RED,
        }
    }
}
/// Renders the filtered power spectrum as a PNG, with a vertical marker on
/// the winning bin. The chart carries no text: only the plotters bitmap
/// backend is compiled in, which cannot rasterize fonts.
pub fn render_spectrum_png(
    estimate: &PulseEstimate,
    style: PlotStyle,
) -> Result<Vec<u8>, AnalysisError> {
    if estimate.power.is_empty() {
        return Err(AnalysisError::Plot("spectrum has no bins".into()));
    }
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let x_min = estimate.frequencies_hz.first().copied().unwrap_or(0.0);
        let x_max = estimate.frequencies_hz.last().copied().unwrap_or(1.0);
        let y_max = estimate
            .power
            .iter()
            .fold(0.0f64, |acc, &v| acc.max(v))
            .max(1e-3);
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;
        chart
            .configure_mesh()
            .light_line_style(&WHITE.mix(0.1))
            .draw()?;
        let series = estimate
            .frequencies_hz
            .iter()
            .cloned()
            .zip(estimate.power.iter().cloned());
        chart.draw_series(LineSeries::new(series, &style.line))?;
        chart.draw_series(LineSeries::new(
            [
                (estimate.peak_frequency_hz, 0.0),
                (estimate.peak_frequency_hz, y_max),
            ],
            &style.marker,
        ))?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AnalysisError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| AnalysisError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
