// tests/blend_weights.rs
use listing_risk::{blend, GapScore, DEFAULT_BLEND_WEIGHT};

#[test]
fn boundary_weights_reduce_to_pure_inputs() {
    let g = Some(GapScore::Score(0.2));
    assert!((blend(Some(0.8), g, 0.0) - 0.2).abs() < 1e-12);
    assert!((blend(Some(0.8), g, 1.0) - 0.8).abs() < 1e-12);
}

#[test]
fn both_missing_is_zero() {
    assert_eq!(blend(None, None, DEFAULT_BLEND_WEIGHT), 0.0);
}

#[test]
fn default_weight_is_plain_average() {
    let v = blend(Some(0.9), Some(GapScore::Score(1.0)), DEFAULT_BLEND_WEIGHT);
    assert!((v - 0.95).abs() < 1e-12);
}

#[test]
fn undefined_gap_and_missing_gap_blend_the_same() {
    let a = blend(Some(0.7), None, 0.3);
    let b = blend(Some(0.7), Some(GapScore::Undefined), 0.3);
    assert_eq!(a, b);
}

#[test]
fn nan_gap_score_blends_as_zero() {
    for (p, w) in [(0.4, 0.5), (0.9, 0.2), (0.0, 0.7), (1.0, 1.0), (0.6, 0.0)] {
        let v = blend(Some(p), Some(GapScore::Score(f64::NAN)), w);
        assert!((v - w * p).abs() < 1e-12, "p {p} w {w} → {v}");
        assert_eq!(v, blend(Some(p), None, w));
    }
}

#[test]
fn weight_is_clamped_not_rejected() {
    let g = Some(GapScore::Score(0.4));
    for w in [-10.0, -0.01, 1.01, 42.0, f64::INFINITY, f64::NEG_INFINITY] {
        let v = blend(Some(0.6), g, w);
        assert!((0.0..=1.0).contains(&v), "weight {w} → {v}");
    }
}
