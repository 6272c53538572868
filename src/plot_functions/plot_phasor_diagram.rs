// src/plot_functions/plot_phasor_diagram.rs

use std::error::Error;

use crate::circuit_analysis::PhasorSolution;
use crate::constants::{
    ANGLE_ARC_RADIUS_V, ARROW_HEAD_LENGTH_V, ARROW_HEAD_WIDTH_V, COLOR_ANNOTATION_LIGHTBLUE,
    COLOR_ANNOTATION_WHEAT, COLOR_V_COIL, COLOR_V_COIL_INDUCTIVE, COLOR_V_COIL_RESISTIVE,
    COLOR_V_RESISTOR, COLOR_V_TOTAL, LINE_WIDTH_COIL_VECTOR, LINE_WIDTH_TOTAL_VECTOR,
    LINE_WIDTH_VECTOR, OPACITY_V_COIL, OPACITY_V_TOTAL, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::measurements::CircuitMeasurements;
use crate::phasor::Phasor;
use crate::plot_framework::{
    calculate_range, draw_vector_diagram, equalize_aspect, point_bounds, AngleArc, AnnotationBox,
    ArrowHead, DiagramConfig, LabelAnchor, ValueLabel, VectorArrow,
};

/// Renders the annotated phasor diagram for one measurement set.
pub fn plot_phasor_diagram(
    measurements: &CircuitMeasurements,
    solution: &PhasorSolution,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let config = build_diagram_config(measurements, solution);
    draw_vector_diagram(output_path, &config)
}

fn default_head() -> ArrowHead {
    ArrowHead::Filled {
        width: ARROW_HEAD_WIDTH_V,
        length: ARROW_HEAD_LENGTH_V,
    }
}

/// Pure assembly of the diagram description; rendering is the caller's side
/// effect. The current phasor is the phase reference, so every voltage
/// vector is laid out relative to the real axis.
pub fn build_diagram_config(m: &CircuitMeasurements, s: &PhasorSolution) -> DiagramConfig {
    let v_resistor = Phasor::new(m.v_resistor, 0.0);
    let v_coil_resistive = Phasor::new(s.v_coil_resistive, 0.0);
    let v_coil_inductive = Phasor::new(0.0, s.v_coil_inductive);

    let origin = (0.0, 0.0);
    let vr_tip = v_resistor.tip_from(origin);
    let in_phase_tip = v_coil_resistive.tip_from(vr_tip);
    let diagonal_tip = v_coil_inductive.tip_from(in_phase_tip);

    let arrows = vec![
        // External resistor drop, in phase with the current.
        VectorArrow {
            start: origin,
            end: vr_tip,
            label: "VR (external resistor)".to_string(),
            color: *COLOR_V_RESISTOR,
            opacity: 1.0,
            stroke_width: LINE_WIDTH_VECTOR,
            dashed: false,
            head: default_head(),
        },
        // Coil internal resistance drop, continuing along the real axis.
        VectorArrow {
            start: vr_tip,
            end: in_phase_tip,
            label: "Vr (coil internal resistance)".to_string(),
            color: *COLOR_V_COIL_RESISTIVE,
            opacity: 1.0,
            stroke_width: LINE_WIDTH_VECTOR,
            dashed: false,
            head: default_head(),
        },
        // Inductive drop, perpendicular from the in-phase sum's tip.
        VectorArrow {
            start: in_phase_tip,
            end: diagonal_tip,
            label: "VL (inductive reactance)".to_string(),
            color: *COLOR_V_COIL_INDUCTIVE,
            opacity: 1.0,
            stroke_width: LINE_WIDTH_VECTOR,
            dashed: false,
            head: default_head(),
        },
        // The coil vector is drawn from the origin with the total-voltage
        // geometry, and VT overlays the same span below. The two coinciding
        // on the figure is what the diagram is meant to show.
        VectorArrow {
            start: origin,
            end: diagonal_tip,
            label: "VZL (coil impedance)".to_string(),
            color: *COLOR_V_COIL,
            opacity: OPACITY_V_COIL,
            stroke_width: LINE_WIDTH_COIL_VECTOR,
            dashed: true,
            head: default_head(),
        },
        VectorArrow {
            start: origin,
            end: diagonal_tip,
            label: "VT (total)".to_string(),
            color: *COLOR_V_TOTAL,
            opacity: OPACITY_V_TOTAL,
            stroke_width: LINE_WIDTH_TOTAL_VECTOR,
            dashed: false,
            head: ArrowHead::None,
        },
    ];

    let labels = vec![
        ValueLabel {
            text: format!("VR = {:.2} V", m.v_resistor),
            position: (vr_tip.0 / 2.0, -0.6),
            color: *COLOR_V_RESISTOR,
            anchor: LabelAnchor::Center,
        },
        ValueLabel {
            text: format!("Vr = {:.2} V", s.v_coil_resistive),
            position: (vr_tip.0 + s.v_coil_resistive / 2.0, -0.6),
            color: *COLOR_V_COIL_RESISTIVE,
            anchor: LabelAnchor::Center,
        },
        ValueLabel {
            text: format!("VL = {:.2} V", s.v_coil_inductive),
            position: (in_phase_tip.0 + 0.8, diagonal_tip.1 / 2.0),
            color: *COLOR_V_COIL_INDUCTIVE,
            anchor: LabelAnchor::Left,
        },
        ValueLabel {
            text: format!("VZL = {:.2} V", m.v_coil),
            position: (in_phase_tip.0 / 2.0 - 1.0, diagonal_tip.1 / 2.0 + 0.5),
            color: *COLOR_V_COIL,
            anchor: LabelAnchor::Center,
        },
    ];

    let arc = AngleArc {
        radius: ANGLE_ARC_RADIUS_V,
        angle_rad: s.phase_rad,
        label: format!("φ = {:.1}°", s.phase_deg),
        label_position: (ANGLE_ARC_RADIUS_V + 0.5, 0.8),
    };

    // Ranges from everything the figure has to contain.
    let mut extent_points = vec![origin, vr_tip, in_phase_tip, diagonal_tip];
    extent_points.push((ANGLE_ARC_RADIUS_V, 0.0));
    if s.phase_rad.is_finite() {
        extent_points.push((
            ANGLE_ARC_RADIUS_V * s.phase_rad.cos(),
            ANGLE_ARC_RADIUS_V * s.phase_rad.sin(),
        ));
    }
    let ((min_x, max_x), (min_y, max_y)) =
        point_bounds(&extent_points).unwrap_or(((0.0, 1.0), (0.0, 1.0)));
    let (x_lo, x_hi) = calculate_range(min_x, max_x);
    let (y_lo, y_hi) = calculate_range(min_y, max_y);
    let (x_range, y_range) = equalize_aspect(x_lo..x_hi, y_lo..y_hi, PLOT_WIDTH, PLOT_HEIGHT);

    let x_span = x_range.end - x_range.start;
    let y_span = y_range.end - y_range.start;

    let annotations = vec![
        // Boxed VT callout below the diagonal's midpoint, pairing the derived
        // magnitude with the meter reading.
        AnnotationBox {
            lines: vec![
                format!("VT ≈ {:.2} V", s.v_total_calc),
                format!("(measured: {} V)", m.v_total),
            ],
            position: (in_phase_tip.0 / 2.0 + 1.5, diagonal_tip.1 / 2.0 - 0.8),
            fill: COLOR_ANNOTATION_WHEAT,
            fill_opacity: 0.5,
        },
        // Coordinate listing in the upper-left region, clear of the legend.
        AnnotationBox {
            lines: vec![
                "Coordinates (real, imaginary):".to_string(),
                format!("VR: ({:.2}, 0)", m.v_resistor),
                format!("Vr: ({:.2}, 0) from VR tip", s.v_coil_resistive),
                format!("VL: (0, {:.2}) from VR+Vr tip", s.v_coil_inductive),
                format!("VZL: ({:.2}, {:.2})", in_phase_tip.0, diagonal_tip.1),
            ],
            position: (x_range.start + 0.04 * x_span, y_range.end - 0.42 * y_span),
            fill: COLOR_ANNOTATION_LIGHTBLUE,
            fill_opacity: 0.8,
        },
    ];

    DiagramConfig {
        title: "Phasor Diagram - Series R-L Circuit".to_string(),
        x_label: "Real axis (V)".to_string(),
        y_label: "Imaginary axis (V)".to_string(),
        x_range,
        y_range,
        arrows,
        labels,
        arc: Some(arc),
        annotations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit_analysis::solve;

    fn bench_config() -> DiagramConfig {
        let m = CircuitMeasurements::default();
        let s = solve(&m);
        build_diagram_config(&m, &s)
    }

    #[test]
    fn test_five_vectors_with_expected_geometry() {
        let config = bench_config();
        assert_eq!(config.arrows.len(), 5);

        // VR from the origin along the real axis.
        assert_eq!(config.arrows[0].start, (0.0, 0.0));
        assert!((config.arrows[0].end.0 - 5.18).abs() < 1e-9);
        assert_eq!(config.arrows[0].end.1, 0.0);

        // Vr continues from VR's tip.
        assert_eq!(config.arrows[1].start, config.arrows[0].end);
        assert!((config.arrows[1].end.0 - 10.32605).abs() < 1e-9);

        // VL rises perpendicular from the in-phase sum's tip.
        assert_eq!(config.arrows[2].start, config.arrows[1].end);
        assert!((config.arrows[2].end.1 - 7.0151764).abs() < 1e-6);

        // VZL and VT overlay the same span from the origin.
        assert_eq!(config.arrows[3].start, (0.0, 0.0));
        assert_eq!(config.arrows[4].start, (0.0, 0.0));
        assert_eq!(config.arrows[3].end, config.arrows[2].end);
        assert_eq!(config.arrows[4].end, config.arrows[3].end);
        assert!(config.arrows[3].dashed);
        assert!(!config.arrows[4].dashed);
        assert!(matches!(config.arrows[4].head, ArrowHead::None));
    }

    #[test]
    fn test_labels_carry_formatted_values() {
        let config = bench_config();
        let texts: Vec<&str> = config.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "VR = 5.18 V",
                "Vr = 5.15 V",
                "VL = 7.02 V",
                "VZL = 8.75 V",
            ]
        );

        let arc = config.arc.as_ref().unwrap();
        assert_eq!(arc.label, "φ = 34.2°");
        assert!((arc.radius - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_ranges_contain_all_vectors_with_equal_aspect() {
        let config = bench_config();
        for arrow in &config.arrows {
            assert!(config.x_range.contains(&arrow.end.0));
            assert!(config.y_range.contains(&arrow.end.1));
        }
        let px_per_x = f64::from(PLOT_WIDTH) / (config.x_range.end - config.x_range.start);
        let px_per_y = f64::from(PLOT_HEIGHT) / (config.y_range.end - config.y_range.start);
        assert!((px_per_x - px_per_y).abs() < 1e-9);
    }

    #[test]
    fn test_annotations_list_coordinates() {
        let config = bench_config();
        assert_eq!(config.annotations.len(), 2);
        assert_eq!(config.annotations[0].lines[0], "VT ≈ 12.48 V");
        assert_eq!(config.annotations[0].lines[1], "(measured: 12.55 V)");
        assert_eq!(config.annotations[1].lines[4], "VZL: (10.33, 7.02)");
    }
}

// src/plot_functions/plot_phasor_diagram.rs
