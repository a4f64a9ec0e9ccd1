// Host-side tests for input parsing and unit conversion.

use array_core::*;

#[test]
fn parse_mm_accepts_plain_numbers() {
    assert_eq!(parse_mm("1200", DEFAULT_WIDTH_MM), 1200.0);
    assert_eq!(parse_mm("  42.5 ", DEFAULT_HEIGHT_MM), 42.5);
    assert_eq!(parse_mm("1e3", DEFAULT_HEIGHT_MM), 1000.0);
}

#[test]
fn parse_mm_falls_back_on_unusable_text() {
    for text in ["", "   ", "abc", "12abc", "NaN", "inf", "-5", "0"] {
        assert_eq!(parse_mm(text, 77.0), 77.0, "input {:?}", text);
    }
}

#[test]
fn empty_width_and_text_height_use_defaults() {
    let config = ArrayConfig::from_inputs("", "abc");
    assert!((config.width_mm() - 1000.0).abs() < 1e-3);
    assert!((config.height_mm() - 80.0).abs() < 1e-3);
    assert_eq!(config, ArrayConfig::default());
}

#[test]
fn config_converts_millimeters_to_meters() {
    let config = ArrayConfig::from_inputs("2500", "750");
    assert!((config.desired_width - 2.5).abs() < 1e-6);
    assert!((config.desired_height - 0.75).abs() < 1e-6);
}

#[test]
fn default_config_is_one_meter_by_eighty_millimeters() {
    let config = ArrayConfig::default();
    assert!((config.desired_width - 1.0).abs() < 1e-6);
    assert!((config.desired_height - 0.08).abs() < 1e-6);
}
