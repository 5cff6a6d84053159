//! Design System Component Tests

use crate::components::design_system::button::ButtonVariant;

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_classes_non_empty() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];

    for variant in variants {
        assert!(!variant.class().is_empty(), "Variant {:?} should have class", variant);
    }
}

#[test]
fn test_primary_uses_accent_color() {
    assert!(ButtonVariant::Primary.class().contains("bg-indigo-500"));
    assert!(!ButtonVariant::Outline.class().contains("bg-indigo-500"));
}

#[test]
fn test_spinner_sizes() {
    use crate::components::design_system::SpinnerSize;

    assert_eq!(SpinnerSize::default(), SpinnerSize::Medium);
    assert!(SpinnerSize::Small.class().contains("w-4 h-4"));
    assert_ne!(SpinnerSize::Small.class(), SpinnerSize::Medium.class());
}
