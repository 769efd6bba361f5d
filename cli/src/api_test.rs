use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let api = ApiClient::new("http://127.0.0.1:3000");
    assert_eq!(api.endpoint("/board/add"), "http://127.0.0.1:3000/board/add");
}

#[test]
fn endpoint_trims_trailing_slash() {
    let api = ApiClient::new("http://127.0.0.1:3000/");
    assert_eq!(api.endpoint("/board/points"), "http://127.0.0.1:3000/board/points");
}

#[test]
fn status_error_names_operation_and_code() {
    let error = ApiError::Status { operation: "fetch points", status: 503 };
    assert_eq!(error.to_string(), "server returned HTTP 503 for fetch points");
}
