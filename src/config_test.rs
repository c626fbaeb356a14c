use super::*;

#[test]
fn api_url_joins_under_api_v1() {
    let config = ServerConfig {
        server: "http://localhost:3000".to_string(),
    };
    assert_eq!(
        config.api_url("/user/login"),
        "http://localhost:3000/api/v1/user/login"
    );
}

#[test]
fn api_url_tolerates_trailing_slash() {
    let config = ServerConfig {
        server: "https://ping.example.com/".to_string(),
    };
    assert_eq!(
        config.api_url("/user/logout"),
        "https://ping.example.com/api/v1/user/logout"
    );
}
