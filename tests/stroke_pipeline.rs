//! Integration tests for extraction and stroke loading on KanjiVG data

use kanji_stroke::{
    extract, load_path_data, load_strokes, load_strokes_with_config, parse_path, Point, Segment,
    StrokeConfig, ViewBox,
};

const MOON: &str = include_str!("fixtures/06708.svg");

#[test]
fn test_extract_kanjivg_document() {
    let values = extract(MOON);
    assert_eq!(
        values,
        vec![
            "M34.25,16.25c1,1,1.48,2.38,1.5,4c0.38,33.62,2.38,59.38-11,73.25",
            "M36.25,19c4.12-0.62,31.49-4.78,33.25-5c4-0.5,5.5,1.12,5.5,4.75c0,2.76-0.5,49.25-0.5,69.5c0,13-6.25,4-8.75,1.75",
            "M37.25,38c10.25-1.5,27.25-3.75,36.25-4.5",
            "M37,58.25c8.75-1.12,27-3.5,36.25-4",
        ]
    );
}

#[test]
fn test_extract_ignores_doctype_and_text() {
    let doc = r#"<!DOCTYPE svg [ <!ATTLIST path kvg:type CDATA #IMPLIED > ]>
        <text transform="matrix(1 0 0 1 27.50 25.63)">1</text>"#;
    assert!(extract(doc).is_empty());
}

#[test]
fn test_load_moon_strokes() {
    let strokes = load_strokes(MOON).expect("Should load");
    assert_eq!(strokes.len(), 4);

    for (i, stroke) in strokes.iter().enumerate() {
        assert_eq!(stroke.index, i);
        assert!(stroke.length > 0.0);
        assert!(matches!(stroke.path.segments[0], Segment::MoveTo(_)));
    }

    // The long hooked second stroke is the longest
    let longest = strokes
        .iter()
        .max_by(|a, b| a.length.total_cmp(&b.length))
        .unwrap();
    assert_eq!(longest.index, 1);
}

#[test]
fn test_stroke_length_bounded_by_chord_and_control_polygon() {
    // Third stroke of 月 is a single, nearly flat cubic
    let strokes = load_path_data(
        &["M37.25,38c10.25-1.5,27.25-3.75,36.25-4.5"],
        &StrokeConfig::default(),
    )
    .unwrap();
    let length = strokes[0].length;

    let chord = (36.25f64.powi(2) + 4.5f64.powi(2)).sqrt();
    let polygon = (10.25f64.hypot(1.5)) + (17.0f64.hypot(2.25)) + (9.0f64.hypot(0.75));
    assert!(length >= chord - 1e-6, "{} < chord {}", length, chord);
    assert!(length <= polygon + 1e-6, "{} > polygon {}", length, polygon);
}

#[test]
fn test_target_size_scales_geometry_not_length() {
    let plain = load_strokes(MOON).unwrap();
    let config = StrokeConfig::new().with_target_size(218.0, 218.0);
    let scaled = load_strokes_with_config(MOON, &config).unwrap();

    assert_eq!(plain.len(), scaled.len());
    for (a, b) in plain.iter().zip(&scaled) {
        assert_eq!(a.length, b.length);
        let (Segment::MoveTo(pa), Segment::MoveTo(pb)) = (a.path.segments[0], b.path.segments[0])
        else {
            panic!("strokes must start with a move");
        };
        assert_eq!(pb, Point::new(pa.x * 2.0, pa.y * 2.0));
    }
}

#[test]
fn test_config_from_toml_drives_pipeline() {
    let config = StrokeConfig::from_toml(
        r#"
        [viewbox]
        width = 109
        height = 109

        [target]
        x = 10
        y = 10
        width = 109
        height = 109
        "#,
    )
    .unwrap();
    assert_eq!(config.target, Some(ViewBox::new(10.0, 10.0, 109.0, 109.0)));

    let strokes = load_path_data(&["M0,0 L1,1"], &config).unwrap();
    assert_eq!(
        strokes[0].path.segments,
        vec![
            Segment::MoveTo(Point::new(10.0, 10.0)),
            Segment::LineTo(Point::new(11.0, 11.0))
        ]
    );
}

#[test]
fn test_finger_position_along_stroke() {
    let path = parse_path("M37,58.25c8.75-1.12,27-3.5,36.25-4").unwrap();
    let length = path.length(1e-6);

    let start = path.point_at(0.0, 1e-6).unwrap();
    let end = path.point_at(length, 1e-6).unwrap();
    assert_eq!(start, Point::new(37.0, 58.25));
    assert!((end.x - 73.25).abs() < 1e-3 && (end.y - 54.25).abs() < 1e-3);

    let mid = path.point_at(length / 2.0, 1e-6).unwrap();
    assert!(mid.x > 37.0 && mid.x < 73.25);
}
