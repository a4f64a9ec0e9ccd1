// Host-side tests for the DOM wiring constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn selectors_are_well_formed() {
    assert!(PROGRESS_BAR_SELECTOR.starts_with('.'));
    assert!(UPDATE_BAR_SELECTOR.starts_with('.'));
    assert_ne!(PROGRESS_BAR_SELECTOR, UPDATE_BAR_SELECTOR);
    assert!(!VIEWER_SELECTOR.is_empty());
}

#[test]
fn input_ids_are_distinct_bare_ids() {
    assert_ne!(WIDTH_INPUT_ID, HEIGHT_INPUT_ID);
    for id in [WIDTH_INPUT_ID, HEIGHT_INPUT_ID] {
        assert!(!id.starts_with('#'));
        assert!(!id.contains(' '));
    }
}

#[test]
fn template_attribute_is_a_data_attribute() {
    assert!(TEMPLATE_NAME_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_defaults_are_positive() {
    assert!(array_core::DEFAULT_WIDTH_MM > 0.0);
    assert!(array_core::DEFAULT_HEIGHT_MM > 0.0);
    assert_eq!(array_core::MM_PER_METER, 1000.0);
}
