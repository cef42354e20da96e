#![allow(clippy::unwrap_used, reason = "tests unwrap fixture parsing")]

use css_media_queries::{Breakpoint, Orientation, compile};
use serde_json::from_str;

fn condition(breakpoint: &Breakpoint) -> Option<String> {
    compile(breakpoint).into_inner()
}

#[test]
fn orientation_keyword() {
    let breakpoint = Breakpoint::default().ratio("landscape");
    assert_eq!(
        condition(&breakpoint).as_deref(),
        Some("(orientation: landscape)")
    );
}

#[test]
fn device_flag_ignored_for_orientation() {
    let breakpoint = Breakpoint::default()
        .ratio(Orientation::Portrait)
        .device(true);
    assert_eq!(
        condition(&breakpoint).as_deref(),
        Some("(orientation: portrait)")
    );
}

#[test]
fn bare_ratio_is_minimum() {
    let breakpoint = Breakpoint::default().ratio("1/1");
    assert_eq!(
        condition(&breakpoint).as_deref(),
        Some("(min-aspect-ratio: 1/1)")
    );
}

#[test]
fn zero_minimum_ratio_is_maximum_only() {
    let breakpoint = Breakpoint::default().ratio(("0", "1/1"));
    assert_eq!(
        condition(&breakpoint).as_deref(),
        Some("(max-aspect-ratio: 1/1)")
    );
}

#[test]
fn bare_width_is_minimum() {
    let breakpoint = Breakpoint::default().width("800px");
    assert_eq!(condition(&breakpoint).as_deref(), Some("(min-width: 800px)"));
}

#[test]
fn ratio_then_width() {
    let breakpoint = Breakpoint::default().width("800px").ratio("2/1");
    assert_eq!(
        condition(&breakpoint).as_deref(),
        Some("(min-aspect-ratio: 2/1) and (min-width: 800px)")
    );
}

#[test]
fn defaults_compile_to_nothing() {
    let compiled = compile(&Breakpoint::default());
    assert!(compiled.is_empty());
    assert_eq!(compiled.to_string(), "");
}

#[test]
fn all_three_families_in_order() {
    let breakpoint = Breakpoint::default()
        .ratio(["4/3", "16/9"])
        .width(("0", "1024px"))
        .density(2.0)
        .device(true);
    let text = condition(&breakpoint).unwrap();
    assert!(text.starts_with(
        "(min-device-aspect-ratio: 4/3) and (max-device-aspect-ratio: 16/9) and (max-width: 1024px) and "
    ));
    assert!(text.ends_with("(min-device-pixel-ratio: 2), (min-resolution: 2dppx)"));
    assert!(!text.ends_with(" and "));
    assert!(!text.starts_with(" and "));
}

#[test]
fn width_and_ratio_never_carry_vendor_prefixes() {
    let breakpoint = Breakpoint::default().ratio(["1/1", "2/1"]).width(["1px", "2px"]);
    let text = condition(&breakpoint).unwrap();
    assert!(!text.contains("-webkit-"));
    assert!(!text.contains(", "));
}

#[test]
fn invalid_literals_pass_through() {
    let breakpoint = Breakpoint::default().width(["wide", "narrow"]);
    assert_eq!(
        condition(&breakpoint).as_deref(),
        Some("(min-width: wide) and (max-width: narrow)")
    );
}

#[test]
fn deserializes_short_keys() {
    let breakpoint: Breakpoint = from_str(r#"{"r": "16/9", "w": [0, "600px"], "pd": [1.5, 0]}"#).unwrap();
    assert_eq!(
        breakpoint,
        Breakpoint::default()
            .ratio("16/9")
            .width(("0", "600px"))
            .density([1.5, 0.0])
    );
    let text = condition(&breakpoint).unwrap();
    assert!(text.starts_with("(min-aspect-ratio: 16/9) and (max-width: 600px) and "));
    assert!(!text.contains("max-resolution"));
}

#[test]
fn deserializes_long_keys_and_keywords() {
    let breakpoint: Breakpoint =
        from_str(r#"{"ratio": "landscape", "width": ["800px"], "device": true}"#).unwrap();
    assert_eq!(
        condition(&breakpoint).as_deref(),
        Some("(orientation: landscape) and (min-width: 800px)")
    );
}

#[test]
fn rejects_overlong_ranges_and_unknown_keys() {
    let overlong = from_str::<Breakpoint>(r#"{"w": ["1px", "2px", "3px"]}"#)
        .map_err(|error| error.to_string())
        .err()
        .unwrap();
    assert!(overlong.contains("found a list of 3"));
    let unknown = from_str::<Breakpoint>(r#"{"height": "1px"}"#)
        .map_err(|error| error.to_string())
        .err()
        .unwrap();
    assert!(unknown.contains("height"));
}
