use std::ops::Range;

use lmx_core::{LmxError, WeightSeriesRecord};
use lmx_stat::BoxSummary;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::figure::{draw_err, Chart};

const MEDIAN_COLOR: RGBColor = RGBColor(255, 127, 14);

/// Both hamming-weight series of one binary against gate index.
#[derive(Debug, Clone, Copy)]
pub struct LineChart<'a> {
    /// Series to draw.
    pub record: &'a WeightSeriesRecord,
}

/// Box-and-whisker glyph of one phase, outliers included.
#[derive(Debug, Clone, Copy)]
pub struct BoxChart<'a> {
    /// Chart caption.
    pub title: &'a str,
    /// Category label under the box.
    pub label: &'a str,
    /// Y axis description.
    pub y_desc: &'a str,
    /// `None` draws empty axes.
    pub summary: Option<&'a BoxSummary>,
}

/// Samples of one phase against step index.
#[derive(Debug, Clone, Copy)]
pub struct ScatterChart<'a> {
    /// Chart caption.
    pub title: &'a str,
    /// Legend entry.
    pub label: &'a str,
    /// Samples in step order.
    pub samples: &'a [u64],
}

impl Chart for LineChart<'_> {
    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), LmxError> {
        let x_range = index_range(self.record.max_len());
        let y_range = value_range(self.record.max_weight());

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Index")
            .y_desc("Hamming Weight")
            .axis_desc_style(("sans-serif", 14))
            .draw()
            .map_err(draw_err)?;

        let one = RED.mix(0.5);
        chart
            .draw_series(LineSeries::new(indexed(&self.record.circuit_one), &one))
            .map_err(draw_err)?;
        chart
            .draw_series(
                indexed(&self.record.circuit_one).map(|point| Circle::new(point, 4, one.filled())),
            )
            .map_err(draw_err)?
            .label("circuit 1")
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, one.filled()));

        let two = BLUE.mix(0.5);
        chart
            .draw_series(LineSeries::new(indexed(&self.record.circuit_two), &two))
            .map_err(draw_err)?;
        chart
            .draw_series(
                indexed(&self.record.circuit_two)
                    .map(|point| TriangleMarker::new(point, 5, two.filled())),
            )
            .map_err(draw_err)?
            .label("circuit 2")
            .legend(move |(x, y)| TriangleMarker::new((x + 10, y), 5, two.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(("sans-serif", 10))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)
    }
}

impl Chart for BoxChart<'_> {
    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), LmxError> {
        let (low, high) = self
            .summary
            .map(BoxSummary::extent)
            .unwrap_or((0.0, 1.0));
        let pad = ((high - low) * 0.05).max(0.5);

        let mut chart = ChartBuilder::on(area)
            .caption(self.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0f64..2.0f64, (low - pad)..(high + pad))
            .map_err(draw_err)?;

        let label = self.label;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(3)
            .x_label_formatter(&|x: &f64| {
                if (*x - 1.0).abs() < 1e-6 {
                    label.to_string()
                } else {
                    String::new()
                }
            })
            .y_desc(self.y_desc)
            .draw()
            .map_err(draw_err)?;

        let Some(summary) = self.summary else {
            return Ok(());
        };
        let q = summary.quartiles;
        let (left, right) = (0.75, 1.25);
        let (cap_left, cap_right) = (0.875, 1.125);

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(left, q.q1), (right, q.q3)],
                BLACK.stroke_width(1),
            )))
            .map_err(draw_err)?;

        let whiskers = vec![
            vec![(1.0, q.q1), (1.0, summary.whisker_low)],
            vec![(1.0, q.q3), (1.0, summary.whisker_high)],
            vec![
                (cap_left, summary.whisker_low),
                (cap_right, summary.whisker_low),
            ],
            vec![
                (cap_left, summary.whisker_high),
                (cap_right, summary.whisker_high),
            ],
        ];
        chart
            .draw_series(
                whiskers
                    .into_iter()
                    .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
            )
            .map_err(draw_err)?;

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(left, q.median), (right, q.median)],
                MEDIAN_COLOR.stroke_width(2),
            )))
            .map_err(draw_err)?;

        chart
            .draw_series(
                summary
                    .outliers
                    .iter()
                    .map(|value| Circle::new((1.0, *value), 3, BLACK.stroke_width(1))),
            )
            .map_err(draw_err)?;
        Ok(())
    }
}

impl Chart for ScatterChart<'_> {
    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), LmxError> {
        let x_range = index_range(self.samples.len());
        let y_range = value_range(self.samples.iter().copied().max());

        let mut chart = ChartBuilder::on(area)
            .caption(self.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Step")
            .y_desc("n_circuits_sampled")
            .draw()
            .map_err(draw_err)?;

        let color = BLUE.mix(0.7);
        chart
            .draw_series(
                indexed(self.samples).map(move |point| Circle::new(point, 2, color.filled())),
            )
            .map_err(draw_err)?
            .label(self.label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)
    }
}

fn indexed(values: &[u64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| (idx as f64, *value as f64))
}

fn index_range(len: usize) -> Range<f64> {
    -0.5..(len.max(1) as f64 - 0.5)
}

fn value_range(max: Option<u64>) -> Range<f64> {
    let top = max.unwrap_or(0) as f64;
    0.0..(top * 1.05).max(1.0)
}
