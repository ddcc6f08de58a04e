//! Config file to demo trace, end to end

use accessors_config::{AccessorsConfig, ConfigError};
use accessors_core::{TraceLine, run_demo};

use crate::common::config_file;

#[test]
fn default_config_reproduces_walkthrough() {
    let trace = run_demo(AccessorsConfig::default().demo()).unwrap();
    let rendered = trace.to_string();
    assert!(rendered.starts_with("square.area: 25\nThe area of this square is 25\n"));
    assert!(rendered.contains("derived.side_length (after rejected area = 0): 8\n"));
    assert!(rendered.ends_with("person.first_name (after first_name = Hea@)@(!$)ther): Heather\n"));
}

#[test]
fn config_file_drives_trace() {
    let file = config_file(
        r#"
[log]
level = "debug"

[demo]
side_length = 4.0
cube_input = 2.0
hypotenuse_legs = [6.0, 8.0]
first_name = "ma#ry"
"#,
    );
    let config = AccessorsConfig::load_from(file.path()).unwrap().unwrap();
    assert_eq!(config.log_level(), Some("debug"));

    let trace = run_demo(config.demo()).unwrap();
    let lines = trace.rendered();
    assert_eq!(lines[0], "square.area: 16");
    assert_eq!(lines[2], "cube: 8");
    assert_eq!(lines[3], "hypotenuse: 10");
    assert!(lines.contains(&r#"person: {"first_name":"Mary","last_name":"Freeling"}"#.to_string()));
}

#[test]
fn trace_lines_are_structured() {
    let trace = run_demo(AccessorsConfig::default().demo()).unwrap();
    assert_eq!(
        trace.lines()[0],
        TraceLine::Value {
            label: "square.area".to_string(),
            value: "25".to_string(),
        }
    );
    assert_eq!(
        trace.lines()[1],
        TraceLine::Text("The area of this square is 25".to_string())
    );
}

#[test]
fn invalid_side_length_in_file_is_an_error() {
    let file = config_file("[demo]\nside_length = -5.0\n");
    let err = AccessorsConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSideLength { .. }));
    assert!(err.to_string().starts_with("invalid demo.side_length"));
}

#[test]
fn malformed_file_is_parse_error() {
    let file = config_file("[demo\nside_length = 3\n");
    let err = AccessorsConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
