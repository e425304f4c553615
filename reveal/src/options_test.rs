use super::*;

#[test]
fn default_options_encode_to_bare_direction() {
    assert_eq!(RevealOptions::default().encode(), "up");
    assert_eq!(RevealOptions::new(Direction::Scale).encode(), "scale");
}

#[test]
fn encode_includes_non_default_fields() {
    let options = RevealOptions::new(Direction::Left)
        .threshold(0.25)
        .delay_ms(120)
        .debounce_ms(40)
        .once();
    assert_eq!(options.encode(), "left t=0.25 delay=120 debounce=40 once");
}

#[test]
fn decode_reads_what_encode_writes() {
    let options = RevealOptions::new(Direction::Right).threshold(0.3).delay_ms(200).once();
    let decoded = RevealOptions::decode(&options.encode()).unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn decode_tolerates_extra_whitespace() {
    let decoded = RevealOptions::decode("  fade   delay=60  ").unwrap();
    assert_eq!(decoded.direction, Direction::Fade);
    assert_eq!(decoded.delay_ms, 60);
    assert!(!decoded.once);
}

#[test]
fn decode_rejects_bad_input() {
    assert_eq!(RevealOptions::decode("   "), Err(RevealParseError::Empty));
    assert_eq!(
        RevealOptions::decode("sideways"),
        Err(RevealParseError::UnknownDirection("sideways".into()))
    );
    assert_eq!(RevealOptions::decode("up speed=3"), Err(RevealParseError::UnknownOption("speed".into())));
    assert_eq!(RevealOptions::decode("up loud"), Err(RevealParseError::UnknownOption("loud".into())));
    assert_eq!(
        RevealOptions::decode("up delay=soon"),
        Err(RevealParseError::InvalidValue { key: "delay".into(), value: "soon".into() })
    );
}

#[test]
fn threshold_is_clamped() {
    assert!((RevealOptions::default().threshold(4.0).threshold - 1.0).abs() < f64::EPSILON);
    assert!(RevealOptions::default().threshold(-1.0).threshold.abs() < f64::EPSILON);
    let decoded = RevealOptions::decode("up t=7").unwrap();
    assert!((decoded.threshold - 1.0).abs() < f64::EPSILON);
}

#[test]
fn staggered_multiplies_index_by_step() {
    assert_eq!(RevealOptions::default().staggered(0, 120).delay_ms, 0);
    assert_eq!(RevealOptions::default().staggered(3, 120).delay_ms, 360);
}

#[test]
fn style_is_empty_without_delay() {
    assert_eq!(RevealOptions::default().style(), "");
    assert_eq!(RevealOptions::default().delay_ms(90).style(), "--reveal-delay: 90ms");
}

#[test]
fn alternating_direction_flips_by_parity() {
    assert_eq!(Direction::alternating(0), Direction::Left);
    assert_eq!(Direction::alternating(1), Direction::Right);
    assert_eq!(Direction::alternating(2), Direction::Left);
}
