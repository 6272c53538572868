// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// Default measurement set: series R-L lab bench on 50 Hz mains.
pub const DEFAULT_CURRENT_A: f64 = 0.1015;
pub const DEFAULT_V_RESISTOR: f64 = 5.18;
pub const DEFAULT_V_COIL: f64 = 8.75;
pub const DEFAULT_V_TOTAL: f64 = 12.55;
pub const DEFAULT_RESISTANCE_OHM: f64 = 51.5;
pub const DEFAULT_COIL_RESISTANCE_OHM: f64 = 50.7;
pub const DEFAULT_INDUCTANCE_H: f64 = 0.22;
pub const DEFAULT_FREQUENCY_HZ: f64 = 50.0;

// Output resolution: a 10x8 in figure at 300 DPI.
pub const PLOT_WIDTH: u32 = 3000;
pub const PLOT_HEIGHT: u32 = 2400;

pub const DEFAULT_OUTPUT_FILENAME: &str = "phasor_diagram.png";
pub const OUTPUT_PATH_ENV_VAR: &str = "PHASOR_DIAGRAM_OUT";

// Arrow geometry in data units (volts).
pub const ARROW_HEAD_WIDTH_V: f64 = 0.3;
pub const ARROW_HEAD_LENGTH_V: f64 = 0.4;
pub const DASH_LENGTH_V: f64 = 0.35;
pub const DASH_GAP_V: f64 = 0.25;

// Phase-angle arc sweeping from the positive real axis.
pub const ANGLE_ARC_RADIUS_V: f64 = 2.5;
pub const ANGLE_ARC_SAMPLES: usize = 30;

// Stroke widths in pixels at 300 DPI.
pub const LINE_WIDTH_VECTOR: u32 = 8;
pub const LINE_WIDTH_COIL_VECTOR: u32 = 10;
pub const LINE_WIDTH_TOTAL_VECTOR: u32 = 12;
pub const LINE_WIDTH_ARC: u32 = 5;
pub const LINE_WIDTH_AXIS: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 6;

// Font sizes in pixels at 300 DPI (11 pt is roughly 46 px).
pub const FONT_SIZE_MAIN_TITLE: i32 = 58;
pub const FONT_SIZE_AXIS_LABEL: i32 = 50;
pub const FONT_SIZE_TICK_LABEL: i32 = 38;
pub const FONT_SIZE_VECTOR_LABEL: i32 = 46;
pub const FONT_SIZE_ANGLE_LABEL: i32 = 50;
pub const FONT_SIZE_LEGEND: i32 = 42;
pub const FONT_SIZE_ANNOTATION: i32 = 38;

// --- Vector Color Assignments ---
pub const COLOR_V_RESISTOR: &RGBColor = &BLUE;
pub const COLOR_V_COIL_RESISTIVE: &RGBColor = &GREEN;
pub const COLOR_V_COIL_INDUCTIVE: &RGBColor = &RED;
pub const COLOR_V_COIL: &RGBColor = &PURPLE;
pub const COLOR_V_TOTAL: &RGBColor = &ORANGE;

pub const OPACITY_V_COIL: f64 = 0.7;
pub const OPACITY_V_TOTAL: f64 = 0.5;

// Annotation box backgrounds.
pub const COLOR_ANNOTATION_WHEAT: RGBColor = RGBColor(245, 222, 179);
pub const COLOR_ANNOTATION_LIGHTBLUE: RGBColor = RGBColor(173, 216, 230);

// src/constants.rs
