//! Integration tests for configured tweens
//!
//! These tests verify that:
//! - Tweens for every blendable value type load from TOML config
//! - Curve names in config are validated, never defaulted
//! - A caller-owned clock drives a tween frame by frame, overshoot included

use serde::Deserialize;
use tween_animation::{ease, Curve, CurveError, Quat, Tween, Vec3};

#[derive(Debug, Deserialize)]
struct PanelConfig {
    slide: Tween<Vec3>,
    fade: Tween<f32>,
    spin: Tween<Quat>,
}

const PANEL_TOML: &str = r#"
[slide]
from = { x = 0.0, y = -40.0, z = 0.0 }
to = { x = 0.0, y = 0.0, z = 0.0 }
curve = "ease_out_back"

[fade]
from = 0.0
to = 1.0
curve = "ease_in_out_sine"

[spin]
from = { x = 0.0, y = 0.0, z = 0.0, w = 1.0 }
to = { x = 0.0, y = 0.70710677, z = 0.0, w = 0.70710677 }
curve = "ease_out_elastic"
"#;

/// Test that a full panel animation config loads
#[test]
fn test_panel_config_loads() {
    let config: PanelConfig = toml::from_str(PANEL_TOML).unwrap();

    assert_eq!(config.slide.curve, Curve::EaseOutBack);
    assert_eq!(config.slide.from, Vec3::new(0.0, -40.0, 0.0));
    assert_eq!(config.fade.curve, Curve::EaseInOutSine);
    assert_eq!(config.spin.from, Quat::IDENTITY);
    assert_eq!(config.spin.curve, Curve::EaseOutElastic);
}

/// Test that an unknown curve name fails the whole config
#[test]
fn test_unknown_curve_rejected() {
    let bad = PANEL_TOML.replace("ease_in_out_sine", "ease_in_out_wobble");
    let err = toml::from_str::<PanelConfig>(&bad).unwrap_err();
    assert!(err.to_string().contains("ease_in_out_wobble"));
}

/// Test that curve names from user input go through the same catalog
#[test]
fn test_user_supplied_curve_names() {
    let curve: Curve = "Ease-Out-Back".parse().unwrap();
    let tween = Tween::new(0.0f32, 100.0, curve);
    assert!(tween.sample(0.9) > 100.0);

    assert_eq!(
        "springy".parse::<Curve>(),
        Err(CurveError::InvalidCurve("springy".to_string()))
    );
    assert_eq!(Curve::try_from(42u8), Err(CurveError::InvalidCurveId(42)));
}

/// Test driving a tween with an external clock, one frame at a time
#[test]
fn test_frame_driven_slide_overshoots_then_settles() {
    let config: PanelConfig = toml::from_str(PANEL_TOML).unwrap();
    let duration_ms = 300.0;
    let frame_ms = 1000.0 / 60.0;

    let mut elapsed = 0.0f32;
    let mut max_y = f32::MIN;
    let mut last = config.slide.sample(0.0);

    // Run past the end to make sure progress saturates
    while elapsed < duration_ms + 5.0 * frame_ms {
        elapsed += frame_ms;
        last = config.slide.sample(elapsed / duration_ms);
        max_y = max_y.max(last.y);
    }

    // Back-out carries the panel past its resting position...
    assert!(max_y > 0.0, "expected overshoot, max y was {max_y}");
    // ...and lands exactly on it once progress saturates
    assert_eq!(last, config.slide.to);
}

/// Test that a rotation tween ends on its target and passes through it
#[test]
fn test_spin_reaches_quarter_turn() {
    let config: PanelConfig = toml::from_str(PANEL_TOML).unwrap();
    let quarter = std::f32::consts::FRAC_PI_2;

    let end = config.spin.sample(1.0);
    assert!((Quat::IDENTITY.angle_between(end) - quarter).abs() < 5e-3);

    // Elastic-out swings beyond the target early on
    let swung = (1..100)
        .map(|i| config.spin.sample(i as f32 / 100.0))
        .map(|q| Quat::IDENTITY.angle_between(q))
        .any(|angle| angle > quarter + 1e-3);
    assert!(swung);
}

/// Test that all blendable types share one easing path
#[test]
fn test_ease_is_generic_over_values() {
    let curve = Curve::EaseInOutQuad;
    let t = 0.25;

    let scalar = ease(0.0f32, 10.0, curve, t);
    let vector = ease(Vec3::ZERO, Vec3::new(10.0, 20.0, 0.0), curve, t);

    assert_eq!(scalar, 1.25);
    assert_eq!(vector, Vec3::new(1.25, 2.5, 0.0));
}
