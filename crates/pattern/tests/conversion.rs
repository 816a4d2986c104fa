//! Integration tests for antenna pattern conversion and lookup

use echotools_pattern::{
    csv_to_binary, read_pattern, read_pattern_file, AnalyticalPattern, AntennaPattern, Error,
    SampledPattern,
};
use rstest::{fixture, rstest};

#[fixture]
fn reference() -> SampledPattern {
    read_pattern_file("./data/pattern.bin").unwrap()
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(250)]
fn row_count_is_patched(#[case] rows: usize) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rows.csv");
    let output = dir.path().join("rows.bin");

    let text = (0..rows)
        .map(|i| format!("{},{}\n", i as f32 * 0.01, 1.0 / (i + 1) as f32))
        .collect::<String>();
    std::fs::write(&input, text).unwrap();

    assert_eq!(csv_to_binary(&input, &output).unwrap(), rows);

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(bytes[0], 0);
    assert_eq!(i32::from_le_bytes(bytes[1..5].try_into().unwrap()), rows as i32);
    assert_eq!(bytes.len(), 5 + rows * 8);
}

#[rstest]
fn matches_reference_binary(reference: SampledPattern) {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pattern.bin");

    let count = csv_to_binary("./data/pattern.csv", &output).unwrap();
    assert_eq!(count, reference.len());
    assert_eq!(
        std::fs::read(&output).unwrap(),
        std::fs::read("./data/pattern.bin").unwrap()
    );
}

#[test]
fn parse_error_reports_position() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("bad.bin");

    let error = csv_to_binary("./data/bad_field.csv", &output).unwrap_err();
    assert!(matches!(
        error,
        Error::InputParse {
            line: 3,
            column: 1,
            ..
        }
    ));

    // the two good rows are still accounted for in the header
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(i32::from_le_bytes(bytes[1..5].try_into().unwrap()), 2);
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = csv_to_binary("./data/missing.csv", dir.path().join("out.bin")).unwrap_err();
    assert!(matches!(error, Error::IOError(_)));
}

#[test]
fn truncated_pattern() {
    let error = read_pattern_file("./data/truncated.bin").unwrap_err();
    assert!(matches!(error, Error::IOError(_)));
}

#[rstest]
#[case(&[0, 0, 0, 0, 0])] // no samples
#[case(&[0, 0xFF, 0xFF, 0xFF, 0xFF])] // count of -1
fn unusable_headers(#[case] bytes: &[u8]) {
    assert!(read_pattern(bytes).is_err());
}

#[rstest]
fn reference_limits(reference: SampledPattern) {
    let analytical = AnalyticalPattern;
    assert!((reference.angle_min() - analytical.angle_min()).abs() < 1e-5);
    assert!((reference.angle_max() - analytical.angle_max()).abs() < 1e-5);
}

#[rstest]
#[case(-0.7)]
#[case(-0.3)]
#[case(0.0)]
#[case(0.05)]
#[case(0.6)]
fn sampled_tracks_analytical(reference: SampledPattern, #[case] azimuth: f32) {
    // reference file is the analytical pattern sampled every π/40
    let expected = AnalyticalPattern.gain(azimuth, 0.0);
    assert!((reference.gain(azimuth, 0.0) - expected).abs() < 0.06);
}

#[rstest]
fn sampled_clamps_outside_range(reference: SampledPattern) {
    let first = reference.gains()[0];
    let last = reference.gains()[reference.len() - 1];
    assert_eq!(reference.gain(-3.0, 0.0), first);
    assert_eq!(reference.gain(3.0, 0.0), last);
}
