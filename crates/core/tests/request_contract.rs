use maze_core::{GenerateError, generate, handle_generate, health};
use serde_json::{Value, json};

#[test]
fn health_payload_matches_route_contract() {
    let body = serde_json::to_string(&health()).expect("health should serialize");
    assert_eq!(body, r#"{"status":"ok"}"#);
}

#[test]
fn generate_response_has_the_documented_shape() {
    let maze = handle_generate(r#"{"rows": 3, "cols": 4, "seed": 5}"#).expect("valid request");
    let json: Value = serde_json::to_value(&maze).expect("maze should serialize");

    let object = json.as_object().expect("response is an object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["cells", "cols", "end", "rows", "start"]);

    let cells = json["cells"].as_array().expect("cells is an array");
    assert_eq!(cells.len(), 12);
    for (index, cell) in cells.iter().enumerate() {
        assert_eq!(cell["x"], json!(index % 4));
        assert_eq!(cell["y"], json!(index / 4));
        let cell_keys = cell.as_object().map(|fields| fields.len());
        assert_eq!(cell_keys, Some(3), "cells expose only x, y and walls: {cell}");
    }

    for endpoint in ["start", "end"] {
        assert!(json[endpoint]["x"].is_u64());
        assert!(json[endpoint]["y"].is_u64());
    }
}

#[test]
fn golden_request_body_matches_library_call() {
    let via_json = handle_generate(r#"{"rows": 3, "cols": 3, "seed": 1, "loop_ratio": 0}"#)
        .expect("valid request");
    let direct = generate(3, 3, Some(1), 0.0).expect("valid request");
    assert_eq!(via_json, direct);
}

#[test]
fn rejected_requests_leave_later_requests_unaffected() {
    let err = handle_generate(r#"{"rows": 0, "cols": 5}"#).expect_err("zero rows are invalid");
    assert!(matches!(err, GenerateError::InvalidDimensions { .. }));

    let maze = handle_generate(r#"{"rows": 2, "cols": 5, "seed": 3}"#).expect("valid request");
    assert_eq!(maze.cells.len(), 10);
}

#[test]
fn oversized_requests_are_refused_and_serving_continues() {
    let err = handle_generate(r#"{"rows": 1099511627776, "cols": 1, "seed": 1}"#)
        .expect_err("grid above the cell limit");
    assert!(matches!(err, GenerateError::InvalidDimensions { field: "rows", .. }), "{err:?}");

    let maze = handle_generate(r#"{"rows": 3, "cols": 3, "seed": -7}"#).expect("valid request");
    assert_eq!(maze.cells.len(), 9);
}
