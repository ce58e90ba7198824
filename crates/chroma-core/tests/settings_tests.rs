// Host-side tests for transition settings clamping and persistence.

use chroma_core::normalize_velocity;
use chroma_core::settings::{clamp_decay, parse_decay_input};
use chroma_core::{EffectKind, MemoryStore, SettingsStore, TransitionSettings};

#[test]
fn decay_clamp_stays_in_range_and_preserves_valid_values() {
    for d in -1000..=5000 {
        let c = clamp_decay(d as f64);
        assert!((400..=2200).contains(&c), "clamp({d}) = {c}");
        if (400..=2200).contains(&d) {
            assert_eq!(c, d as u32);
        }
    }
    assert_eq!(clamp_decay(f64::NAN), 1100);
    assert_eq!(clamp_decay(f64::INFINITY), 1100);
    assert_eq!(clamp_decay(1234.4), 1234);
}

#[test]
fn decay_text_input_is_parsed_then_clamped() {
    assert_eq!(parse_decay_input("9999"), 2200);
    assert_eq!(parse_decay_input(" 800 "), 800);
    assert_eq!(parse_decay_input("10"), 400);
    assert_eq!(parse_decay_input("fast"), 1100);
    assert_eq!(parse_decay_input(""), 1100);
}

#[test]
fn velocity_factor_matches_clamped_ratio() {
    for v in 0..=127 {
        let expected = (v as f32 / 127.0).clamp(0.25, 1.0);
        assert_eq!(normalize_velocity(v), expected);
    }
    assert_eq!(normalize_velocity(0), 0.25);
    assert_eq!(normalize_velocity(127), 1.0);
    assert_eq!(normalize_velocity(300), 1.0);
    assert_eq!(normalize_velocity(-8), 0.25);
    assert!((normalize_velocity(100) - 0.787).abs() < 1e-3);
}

#[test]
fn effect_strings_coerce_to_ripple() {
    assert_eq!(EffectKind::from_input("swirl"), EffectKind::Swirl);
    assert_eq!(EffectKind::from_input("ripple"), EffectKind::Ripple);
    assert_eq!(EffectKind::from_input("SWIRL"), EffectKind::Ripple);
    assert_eq!(EffectKind::from_input(""), EffectKind::Ripple);
}

#[test]
fn settings_serialize_to_flat_record() {
    let s = TransitionSettings::new(1500.0, EffectKind::Swirl);
    assert_eq!(s.to_json().unwrap(), r#"{"decayMs":1500,"effect":"swirl"}"#);
    let d = TransitionSettings::default();
    assert_eq!(d.to_json().unwrap(), r#"{"decayMs":1100,"effect":"ripple"}"#);
}

#[test]
fn settings_round_trip_through_store() {
    for decay in (400..=2200).step_by(150) {
        for effect in [EffectKind::Ripple, EffectKind::Swirl] {
            let s = TransitionSettings::new(decay as f64, effect);
            let mut store = MemoryStore::new();
            store.save(&s).unwrap();
            assert_eq!(store.load(), Some(s));
        }
    }
}

#[test]
fn lenient_decoding_falls_back_per_field() {
    let cases = [
        (r#"{}"#, 1100, EffectKind::Ripple),
        (r#"{"decayMs":null,"effect":"swirl"}"#, 1100, EffectKind::Swirl),
        (r#"{"decayMs":"9999"}"#, 2200, EffectKind::Ripple),
        (r#"{"decayMs":50,"effect":"bloom"}"#, 400, EffectKind::Ripple),
        (r#"{"decayMs":true,"effect":7}"#, 1100, EffectKind::Ripple),
        (r#"{"decayMs":900.6,"effect":"swirl","extra":1}"#, 901, EffectKind::Swirl),
    ];
    for (raw, decay, effect) in cases {
        let s = TransitionSettings::from_json(raw).unwrap();
        assert_eq!(s.decay_ms, decay, "{raw}");
        assert_eq!(s.effect, effect, "{raw}");
    }
}

#[test]
fn malformed_records_load_as_none() {
    assert_eq!(MemoryStore::with_raw("not json").load(), None);
    assert_eq!(MemoryStore::with_raw("42").load(), None);
    assert_eq!(MemoryStore::new().load(), None);
}
