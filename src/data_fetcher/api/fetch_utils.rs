//! Single-shot HTTP fetching with status classification

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::constants::AUTH_HEADER;
use crate::error::AppError;

/// Performs exactly one authenticated GET and returns the parsed JSON body.
///
/// No retries and no caching: every call is one request to the upstream.
///
/// # Errors
/// * `AppError::UpstreamStatus` - the upstream answered with a non-2xx status
/// * `AppError::MalformedUpstreamData` - the 2xx body was empty or not JSON
/// * `AppError::NetworkTimeout` / `AppError::NetworkConnection` - transport failures
/// * `AppError::ApiFetch` - any other reqwest error
#[instrument(skip(client, api_key))]
pub(super) async fn fetch_json(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.header(AUTH_HEADER, key);
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(AppError::upstream_status(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    if response_text.trim().is_empty() {
        error!("Empty response body (URL: {})", url);
        return Err(AppError::malformed_upstream_data(format!(
            "Response body is empty (URL: {url})"
        )));
    }

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            &response_text.chars().take(200).collect::<String>()
        );
        AppError::malformed_upstream_data(format!("Response is not valid JSON: {e} (URL: {url})"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::{create_http_client, create_test_http_client};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_fetch_json_success_sends_auth_header() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competitions/2021/standings"))
            .and(header("X-Auth-Token", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/competitions/2021/standings", mock_server.uri());
        let value = fetch_json(&client, &url, Some("test-key")).await.unwrap();

        assert_eq!(value, json!({"standings": []}));
    }

    #[tokio::test]
    async fn test_fetch_json_without_key_omits_header() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competitions/2021/scorers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"scorers": []})))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competitions/2021/scorers", mock_server.uri());
        fetch_json(&client, &url, None).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("x-auth-token"));
    }

    #[tokio::test]
    async fn test_fetch_json_forwards_status_without_retry() {
        for status in [400u16, 403, 404, 429, 500, 503] {
            let mock_server = MockServer::start().await;
            let client = create_test_http_client();

            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .expect(1)
                .mount(&mock_server)
                .await;

            let url = format!("{}/competitions/2019/standings", mock_server.uri());
            let result = fetch_json(&client, &url, Some("k")).await;

            match result {
                Err(AppError::UpstreamStatus {
                    status: got, url: got_url, ..
                }) => {
                    assert_eq!(got, status);
                    assert_eq!(got_url, url);
                }
                other => panic!("Expected UpstreamStatus for {status}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_json_non_json_body_is_malformed() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competitions/2002/standings", mock_server.uri());
        let result = fetch_json(&client, &url, None).await;

        assert!(matches!(result, Err(AppError::MalformedUpstreamData { .. })));
    }

    #[tokio::test]
    async fn test_fetch_json_empty_body_is_malformed() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competitions/2015/scorers", mock_server.uri());
        let result = fetch_json(&client, &url, None).await;

        match result {
            Err(AppError::MalformedUpstreamData { message }) => {
                assert!(message.contains("empty"), "unexpected message: {message}")
            }
            other => panic!("Expected MalformedUpstreamData, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_json_connection_refused() {
        let client = create_test_http_client();
        // Bind and immediately drop a listener to get a port nobody listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let url = format!("http://127.0.0.1:{port}/competitions/2021/standings");
        let result = fetch_json(&client, &url, None).await;

        assert!(
            matches!(result, Err(AppError::NetworkConnection { .. })),
            "Expected NetworkConnection, got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_fetch_json_slow_upstream_is_timeout() {
        let mock_server = MockServer::start().await;
        let client = create_http_client(Some(1)).unwrap();

        Mock::given(method("GET"))
            .and(path("/competitions/2021/standings"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"standings": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/competitions/2021/standings", mock_server.uri());
        let result = fetch_json(&client, &url, Some("k")).await;

        match result {
            Err(AppError::NetworkTimeout { url: got_url }) => assert_eq!(got_url, url),
            other => panic!("Expected NetworkTimeout, got {other:?}"),
        }
    }
}
