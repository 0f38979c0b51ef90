use super::*;

#[test]
fn login_endpoint_appends_path() {
    assert_eq!(login_endpoint("https://reqres.in/api"), "https://reqres.in/api/login");
}

#[test]
fn users_page_endpoint_formats_query() {
    assert_eq!(users_page_endpoint("https://reqres.in/api", 2), "https://reqres.in/api/users?page=2");
}

#[test]
fn user_endpoint_formats_id() {
    assert_eq!(user_endpoint("http://localhost:9000", 12), "http://localhost:9000/users/12");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("QpwL5tke4Pnpja7X4"), "Bearer QpwL5tke4Pnpja7X4");
}

#[test]
fn status_error_classifies_auth_failures() {
    assert_eq!(status_error(400), ApiError::Status(400));
    assert_eq!(status_error(401), ApiError::Unauthorized(401));
    assert_eq!(status_error(403), ApiError::Unauthorized(403));
    assert_eq!(status_error(404), ApiError::NotFound);
    assert_eq!(status_error(500), ApiError::Status(500));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Unauthorized(401).to_string(), "not authorized (status 401)");
    assert_eq!(ApiError::Status(502).to_string(), "request failed: 502");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}

#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpUserApi::new(&ClientConfig::default());
    let creds = Credentials { email: "eve.holt@reqres.in".to_owned(), password: "cityslicka".to_owned() };
    let result = futures::executor::block_on(api.login(&creds));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(api.list_users(1, None));
    assert_eq!(result, Err(ApiError::Unavailable));
}
