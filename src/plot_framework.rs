// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Polygon, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    ANGLE_ARC_SAMPLES, DASH_GAP_V, DASH_LENGTH_V, FONT_SIZE_ANGLE_LABEL, FONT_SIZE_ANNOTATION,
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_TICK_LABEL,
    FONT_SIZE_VECTOR_LABEL, LINE_WIDTH_ARC, LINE_WIDTH_AXIS, LINE_WIDTH_LEGEND, PLOT_HEIGHT,
    PLOT_WIDTH,
};
use crate::font_config::ensure_font_registered;

type DiagramChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// How an arrow terminates.
#[derive(Clone, Copy)]
pub enum ArrowHead {
    /// Filled triangular head; width and length in data units.
    Filled { width: f64, length: f64 },
    /// Bare shaft, used for overlay vectors.
    None,
}

/// A directed line segment in data space.
#[derive(Clone)]
pub struct VectorArrow {
    pub start: (f64, f64),
    pub end: (f64, f64),
    /// Legend entry; empty string means no entry.
    pub label: String,
    pub color: RGBColor,
    pub opacity: f64,
    pub stroke_width: u32,
    pub dashed: bool,
    pub head: ArrowHead,
}

#[derive(Clone, Copy)]
pub enum LabelAnchor {
    Center,
    Left,
}

/// A single text label at a data-space position.
#[derive(Clone)]
pub struct ValueLabel {
    pub text: String,
    pub position: (f64, f64),
    pub color: RGBColor,
    pub anchor: LabelAnchor,
}

/// Circular arc from the positive real axis to `angle_rad`, centered on the
/// origin.
#[derive(Clone)]
pub struct AngleArc {
    pub radius: f64,
    pub angle_rad: f64,
    pub label: String,
    pub label_position: (f64, f64),
}

/// Multi-line text block on a translucent background rectangle. The anchor
/// position is the box's top-left corner in data space.
#[derive(Clone)]
pub struct AnnotationBox {
    pub lines: Vec<String>,
    pub position: (f64, f64),
    pub fill: RGBColor,
    pub fill_opacity: f64,
}

#[derive(Clone)]
pub struct DiagramConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub arrows: Vec<VectorArrow>,
    pub labels: Vec<ValueLabel>,
    pub arc: Option<AngleArc>,
    pub annotations: Vec<AnnotationBox>,
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Stretches one of the two ranges about its midpoint so a data unit maps to
/// the same pixel count on both axes. Arrowheads and the angle arc are
/// specified in data units and would shear under anisotropic scaling.
pub fn equalize_aspect(
    x_range: Range<f64>,
    y_range: Range<f64>,
    width: u32,
    height: u32,
) -> (Range<f64>, Range<f64>) {
    let x_span = x_range.end - x_range.start;
    let y_span = y_range.end - y_range.start;
    if x_span <= 0.0 || y_span <= 0.0 || width == 0 || height == 0 {
        return (x_range, y_range);
    }
    let target = width as f64 / height as f64;
    if x_span / y_span < target {
        let new_span = y_span * target;
        let mid = (x_range.start + x_range.end) / 2.0;
        (mid - new_span / 2.0..mid + new_span / 2.0, y_range)
    } else {
        let new_span = x_span / target;
        let mid = (y_range.start + y_range.end) / 2.0;
        (x_range, mid - new_span / 2.0..mid + new_span / 2.0)
    }
}

/// Raw bounds of a point cloud. Returns `None` for an empty or non-finite
/// input.
pub fn point_bounds(points: &[(f64, f64)]) -> Option<((f64, f64), (f64, f64))> {
    let xs = Array1::from(points.iter().map(|p| p.0).collect::<Vec<f64>>());
    let ys = Array1::from(points.iter().map(|p| p.1).collect::<Vec<f64>>());
    let x_bounds = match (xs.min(), xs.max()) {
        (Ok(min), Ok(max)) => (*min, *max),
        _ => return None,
    };
    let y_bounds = match (ys.min(), ys.max()) {
        (Ok(min), Ok(max)) => (*min, *max),
        _ => return None,
    };
    if !x_bounds.0.is_finite() || !x_bounds.1.is_finite() || !y_bounds.0.is_finite()
        || !y_bounds.1.is_finite()
    {
        return None;
    }
    Some((x_bounds, y_bounds))
}

/// Renders a complete vector diagram to `output_path`.
pub fn draw_vector_diagram(output_path: &str, config: &DiagramConfig) -> Result<(), Box<dyn Error>> {
    ensure_font_registered()?;

    // Surface an unwritable destination before the backend buffers anything.
    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(format!("output directory '{}' does not exist", parent.display()).into());
        }
    }

    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_MAIN_TITLE))
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(130)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(8)
        .light_line_style(BLACK.mix(0.12))
        .bold_line_style(BLACK.mix(0.25))
        .axis_desc_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .label_style(("sans-serif", FONT_SIZE_TICK_LABEL))
        .draw()?;

    draw_zero_axes(&mut chart, config)?;

    for arrow in &config.arrows {
        draw_arrow(&mut chart, arrow)?;
    }

    if let Some(arc) = &config.arc {
        draw_angle_arc(&mut chart, arc)?;
    }

    for label in &config.labels {
        draw_value_label(&chart, label)?;
    }

    if config.arrows.iter().any(|a| !a.label.is_empty()) {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    for annotation in &config.annotations {
        draw_annotation_box(&root_area, &chart, annotation)?;
    }

    root_area.present()?;
    Ok(())
}

/// Thin black lines marking the real and imaginary axes through the origin,
/// when the origin is inside the plotted ranges.
fn draw_zero_axes(chart: &mut DiagramChart, config: &DiagramConfig) -> Result<(), Box<dyn Error>> {
    let x = &config.x_range;
    let y = &config.y_range;
    if y.start <= 0.0 && y.end >= 0.0 {
        chart.draw_series(LineSeries::new(
            vec![(x.start, 0.0), (x.end, 0.0)],
            BLACK.stroke_width(LINE_WIDTH_AXIS),
        ))?;
    }
    if x.start <= 0.0 && x.end >= 0.0 {
        chart.draw_series(LineSeries::new(
            vec![(0.0, y.start), (0.0, y.end)],
            BLACK.stroke_width(LINE_WIDTH_AXIS),
        ))?;
    }
    Ok(())
}

fn draw_arrow(chart: &mut DiagramChart, arrow: &VectorArrow) -> Result<(), Box<dyn Error>> {
    let (x0, y0) = arrow.start;
    let (x1, y1) = arrow.end;
    let dx = x1 - x0;
    let dy = y1 - y0;
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        // Null vector, nothing to draw.
        return Ok(());
    }
    let (ux, uy) = (dx / length, dy / length);

    let color = arrow.color.mix(arrow.opacity);

    // Shaft stops short of the tip when a head is drawn over it.
    let (shaft_end, head) = match arrow.head {
        ArrowHead::Filled { width, length: head_len } if length > head_len => {
            ((x1 - ux * head_len, y1 - uy * head_len), Some(width))
        }
        _ => ((x1, y1), None),
    };

    let shaft_segments = if arrow.dashed {
        dash_segments((x0, y0), shaft_end, DASH_LENGTH_V, DASH_GAP_V)
    } else {
        vec![[(x0, y0), shaft_end]]
    };

    let mut legend_pending = !arrow.label.is_empty();
    for segment in shaft_segments {
        let series = chart.draw_series(LineSeries::new(
            segment.to_vec(),
            color.stroke_width(arrow.stroke_width),
        ))?;
        if legend_pending {
            let legend_color = color;
            series.label(&arrow.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 60, y)],
                    legend_color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_pending = false;
        }
    }

    if let Some(head_width) = head {
        let (px, py) = (-uy, ux);
        let half = head_width / 2.0;
        let points = vec![
            (x1, y1),
            (shaft_end.0 + px * half, shaft_end.1 + py * half),
            (shaft_end.0 - px * half, shaft_end.1 - py * half),
        ];
        chart.draw_series(std::iter::once(Polygon::new(points, color.filled())))?;
    }
    Ok(())
}

/// Splits a span into evenly spaced on-segments for a dashed shaft.
fn dash_segments(
    start: (f64, f64),
    end: (f64, f64),
    dash: f64,
    gap: f64,
) -> Vec<[(f64, f64); 2]> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let length = dx.hypot(dy);
    if length <= f64::EPSILON || dash <= 0.0 || gap < 0.0 {
        return vec![[start, end]];
    }
    let (ux, uy) = (dx / length, dy / length);
    let mut segments = Vec::new();
    let mut pos = 0.0;
    while pos < length {
        let seg_end = (pos + dash).min(length);
        segments.push([
            (start.0 + ux * pos, start.1 + uy * pos),
            (start.0 + ux * seg_end, start.1 + uy * seg_end),
        ]);
        pos = seg_end + gap;
    }
    segments
}

fn draw_angle_arc(chart: &mut DiagramChart, arc: &AngleArc) -> Result<(), Box<dyn Error>> {
    // A degenerate phase angle has no sensible sweep; the label still goes
    // out so the undefined value is visible on the figure.
    if arc.angle_rad.is_finite() {
        let theta = Array1::linspace(0.0, arc.angle_rad, ANGLE_ARC_SAMPLES);
        let points: Vec<(f64, f64)> = theta
            .iter()
            .map(|&t| (arc.radius * t.cos(), arc.radius * t.sin()))
            .collect();
        chart.draw_series(LineSeries::new(points, BLACK.stroke_width(LINE_WIDTH_ARC)))?;
    }

    let style = ("sans-serif", FONT_SIZE_ANGLE_LABEL).into_font().color(&BLACK);
    chart
        .plotting_area()
        .draw(&Text::new(arc.label.clone(), arc.label_position, style))?;
    Ok(())
}

fn draw_value_label(chart: &DiagramChart, label: &ValueLabel) -> Result<(), Box<dyn Error>> {
    let anchor = match label.anchor {
        LabelAnchor::Center => Pos::new(HPos::Center, VPos::Center),
        LabelAnchor::Left => Pos::new(HPos::Left, VPos::Center),
    };
    let style = ("sans-serif", FONT_SIZE_VECTOR_LABEL)
        .into_font()
        .color(&label.color)
        .pos(anchor);
    chart
        .plotting_area()
        .draw(&Text::new(label.text.clone(), label.position, style))?;
    Ok(())
}

/// Draws a multi-line annotation on a translucent background. The background
/// extent is estimated from character counts; the anchor is converted to
/// pixel space so line spacing stays uniform regardless of data ranges.
fn draw_annotation_box(
    root_area: &DrawingArea<BitMapBackend, Shift>,
    chart: &DiagramChart,
    annotation: &AnnotationBox,
) -> Result<(), Box<dyn Error>> {
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.55;
    const LINE_SPACING_PX: i32 = 10;
    const PADDING_PX: i32 = 18;

    let (anchor_x, anchor_y) = chart.backend_coord(&annotation.position);

    let char_width = (FONT_SIZE_ANNOTATION as f32 * CHAR_WIDTH_RATIO) as i32;
    let line_height = FONT_SIZE_ANNOTATION + LINE_SPACING_PX;
    let max_line_length = annotation
        .lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as i32;
    let box_width = max_line_length * char_width + 2 * PADDING_PX;
    let box_height = annotation.lines.len() as i32 * line_height + 2 * PADDING_PX;

    root_area.draw(&Rectangle::new(
        [(anchor_x, anchor_y), (anchor_x + box_width, anchor_y + box_height)],
        annotation.fill.mix(annotation.fill_opacity).filled(),
    ))?;
    root_area.draw(&Rectangle::new(
        [(anchor_x, anchor_y), (anchor_x + box_width, anchor_y + box_height)],
        BLACK.mix(0.4).stroke_width(2),
    ))?;

    let style = ("sans-serif", FONT_SIZE_ANNOTATION).into_font().color(&BLACK);
    for (i, line) in annotation.lines.iter().enumerate() {
        root_area.draw(&Text::new(
            line.clone(),
            (
                anchor_x + PADDING_PX,
                anchor_y + PADDING_PX + i as i32 * line_height,
            ),
            style.clone(),
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_by_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - -1.5).abs() < 1e-9);
        assert!((max - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_handles_degenerate_span() {
        let (min, max) = calculate_range(5.0, 5.0);
        assert!((min - 4.5).abs() < 1e-9);
        assert!((max - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_accepts_swapped_input() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < 0.0 && max > 10.0);
    }

    #[test]
    fn test_equalize_aspect_matches_pixels_per_unit() {
        let (x, y) = equalize_aspect(0.0..10.0, 0.0..10.0, 3000, 2400);
        let px_per_x_unit = 3000.0 / (x.end - x.start);
        let px_per_y_unit = 2400.0 / (y.end - y.start);
        assert!((px_per_x_unit - px_per_y_unit).abs() < 1e-9);
        // The square input must widen on x for a 5:4 canvas, not shrink on y.
        assert!((y.end - y.start - 10.0).abs() < 1e-9);
        assert!(x.end - x.start > 10.0);
    }

    #[test]
    fn test_equalize_aspect_keeps_midpoints() {
        let (x, _y) = equalize_aspect(2.0..4.0, 0.0..10.0, 1000, 1000);
        assert!(((x.start + x.end) / 2.0 - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_bounds() {
        let bounds = point_bounds(&[(0.0, 0.0), (10.3, 7.0), (2.5, -0.5)]);
        let ((min_x, max_x), (min_y, max_y)) = bounds.unwrap();
        assert_eq!((min_x, max_x), (0.0, 10.3));
        assert_eq!((min_y, max_y), (-0.5, 7.0));

        assert!(point_bounds(&[]).is_none());
        assert!(point_bounds(&[(f64::NAN, 0.0)]).is_none());
    }

    #[test]
    fn test_dash_segments_cover_the_span() {
        let segments = dash_segments((0.0, 0.0), (10.0, 0.0), 1.0, 0.5);
        assert!(!segments.is_empty());
        // First segment starts at the origin, last one ends at or before the tip.
        assert_eq!(segments[0][0], (0.0, 0.0));
        let last = segments.last().unwrap();
        assert!(last[1].0 <= 10.0 + 1e-9);
        // All dashes stay inside the span and keep the dash length.
        for seg in &segments {
            assert!(seg[0].0 >= -1e-9 && seg[1].0 <= 10.0 + 1e-9);
            assert!(seg[1].0 - seg[0].0 <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_dash_segments_degenerate_falls_back_to_solid() {
        let segments = dash_segments((1.0, 1.0), (1.0, 1.0), 1.0, 0.5);
        assert_eq!(segments.len(), 1);
    }
}

// src/plot_framework.rs
