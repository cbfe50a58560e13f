use plotters::prelude::*;
use printpdf::image_crate;

use crate::application::ports::RenderError;
use crate::domain::DataTable;

pub const CHART_WIDTH_PX: u32 = 400;
pub const CHART_HEIGHT_PX: u32 = 400;

// Matplotlib's default category colors, which the report's readers expect.
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];

/// Renders a grouped bar chart of the first two numeric columns, one group
/// per row, no legend, fixed size. Returns `None` when the table has no
/// numeric column.
pub fn render_bar_chart(table: &DataTable) -> Result<Option<Vec<u8>>, RenderError> {
    let numeric = table.numeric_columns();
    if numeric.is_empty() {
        return Ok(None);
    }

    let selected: Vec<usize> = numeric.into_iter().take(2).collect();
    let rows = table.row_count();
    let series: Vec<Vec<f64>> = selected
        .iter()
        .map(|&i| {
            (0..rows)
                .map(|r| {
                    table.columns()[i]
                        .values
                        .get(r)
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    let mut y_min = 0.0f64;
    let mut y_max = 0.0f64;
    for values in &series {
        for &v in values {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_max = y_min + 1.0;
    }

    let mut buffer = vec![0u8; (CHART_WIDTH_PX * CHART_HEIGHT_PX * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH_PX, CHART_HEIGHT_PX))
                .into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .build_cartesian_2d(0f64..rows as f64, y_min..y_max)
            .map_err(to_chart_error)?;

        // Each row owns the unit interval [r, r+1); bars share it with a
        // 10% gutter on either side.
        let bar_width = 0.8 / series.len() as f64;
        for (s, values) in series.iter().enumerate() {
            let color = SERIES_COLORS[s % SERIES_COLORS.len()];
            chart
                .draw_series(values.iter().enumerate().map(|(r, &v)| {
                    let x0 = r as f64 + 0.1 + s as f64 * bar_width;
                    Rectangle::new([(x0, 0.0), (x0 + bar_width, v)], color.filled())
                }))
                .map_err(to_chart_error)?;
        }

        root.present().map_err(to_chart_error)?;
    }

    let image = image_crate::RgbImage::from_raw(CHART_WIDTH_PX, CHART_HEIGHT_PX, buffer)
        .ok_or_else(|| RenderError::Chart("chart buffer size mismatch".to_string()))?;

    let mut png = Vec::new();
    image_crate::DynamicImage::ImageRgb8(image)
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image_crate::ImageOutputFormat::Png,
        )
        .map_err(|e| RenderError::Chart(e.to_string()))?;

    Ok(Some(png))
}

fn to_chart_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Chart(e.to_string())
}
