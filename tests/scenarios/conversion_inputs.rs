//! Scenario: conversion panel input handling

use crate::helpers::*;
use thermoci::surface::Element;

#[tokio::test]
async fn zero_celsius_shows_defaults_and_badge() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("0").await;

    assert_conversion(&surface, "32.00°F", "273.15K").await;
    assert!(surface.lock().await.is_visible(Element::FreezingBadge));
}

#[tokio::test]
async fn boiling_point_hides_badge() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("100").await;

    assert_conversion(&surface, "212.00°F", "373.15K").await;
    assert!(!surface.lock().await.is_visible(Element::FreezingBadge));
}

#[tokio::test]
async fn minus_forty_converges() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("-40").await;

    assert_conversion(&surface, "-40.00°F", "233.15K").await;
    assert!(surface.lock().await.is_visible(Element::FreezingBadge));
}

#[tokio::test]
async fn empty_input_resets_to_defaults() {
    let (mut panel, surface) = panel_fixture();

    // Put the panel in an error state first, then clear the field
    panel.on_input_changed("-300").await;
    panel.on_input_changed("").await;

    assert_conversion(&surface, "32.00°F", "273.15K").await;
    assert!(surface.lock().await.is_visible(Element::FreezingBadge));
}

#[tokio::test]
async fn non_numeric_input_shows_validation_error() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("abc").await;

    assert_error(&surface, "Validation Error: Input must be a number.").await;
}

#[tokio::test]
async fn below_absolute_zero_shows_physics_error() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("-300").await;

    assert_error(&surface, "Absolute Zero").await;
}

#[tokio::test]
async fn permissive_prefix_converts_leading_number() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("12abc").await;

    assert_conversion(&surface, "53.60°F", "285.15K").await;
}

#[tokio::test]
async fn error_is_superseded_by_next_input() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("abc").await;
    panel.on_input_changed("5").await;

    assert_conversion(&surface, "41.00°F", "278.15K").await;
    assert!(!surface.lock().await.is_visible(Element::FreezingBadge));
}

#[tokio::test]
async fn resupplying_input_is_idempotent() {
    let (mut panel, surface) = panel_fixture();

    panel.on_input_changed("21.5").await;
    let first = {
        let s = surface.lock().await;
        (
            s.text(Element::FahrenheitValue).to_string(),
            s.text(Element::KelvinValue).to_string(),
            s.is_visible(Element::FreezingBadge),
            s.is_visible(Element::ErrorBanner),
        )
    };

    panel.on_input_changed("21.5").await;
    let second = {
        let s = surface.lock().await;
        (
            s.text(Element::FahrenheitValue).to_string(),
            s.text(Element::KelvinValue).to_string(),
            s.is_visible(Element::FreezingBadge),
            s.is_visible(Element::ErrorBanner),
        )
    };

    assert_eq!(first, second);
    assert_eq!(first.0, "70.70°F");
}
