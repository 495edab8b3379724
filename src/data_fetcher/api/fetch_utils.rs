//! Generic HTTP fetching with cancellation and status classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and decodes the JSON body, racing the request against `token`.
///
/// When the token fires first the in-flight request future is dropped, which
/// aborts the transfer, and the call resolves to [`AppError::Cancelled`].
/// There is no retry: any transport failure or non-success status is returned
/// to the caller as is.
#[instrument(skip(client, token))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &CancellationToken,
) -> Result<T, AppError> {
    if token.is_cancelled() {
        debug!("Skipping request for already cancelled token: {url}");
        return Err(AppError::cancelled(url));
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("Request cancelled while in flight: {url}");
            Err(AppError::cancelled(url))
        }
        result = fetch_json(client, url) => result,
    }
}

async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::TeamsByLeagueResponse;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn serve(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lookup_all_teams.php"))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn teams_url(server: &MockServer) -> String {
        format!("{}/lookup_all_teams.php", server.uri())
    }

    #[tokio::test]
    async fn test_status_codes_are_classified() {
        let cases = [
            (404, "ApiNotFound"),
            (429, "ApiRateLimit"),
            (400, "ApiClientError"),
            (503, "ApiServiceUnavailable"),
            (500, "ApiServerError"),
        ];

        for (status, expected) in cases {
            let server = serve(ResponseTemplate::new(status)).await;
            let url = teams_url(&server);
            let client = create_test_http_client();

            let error = fetch::<TeamsByLeagueResponse>(&client, &url, &CancellationToken::new())
                .await
                .unwrap_err();

            let matched = match expected {
                "ApiNotFound" => matches!(error, AppError::ApiNotFound { .. }),
                "ApiRateLimit" => matches!(error, AppError::ApiRateLimit { .. }),
                "ApiClientError" => matches!(error, AppError::ApiClientError { .. }),
                "ApiServiceUnavailable" => matches!(error, AppError::ApiServiceUnavailable { .. }),
                _ => matches!(error, AppError::ApiServerError { .. }),
            };
            assert!(matched, "status {status} mapped to {error:?}");
            assert_eq!(error.status_code(), Some(status));
            assert!(error.to_string().contains(&url));
        }
    }

    #[tokio::test]
    async fn test_body_errors_are_classified() {
        let client = create_test_http_client();
        let token = CancellationToken::new();

        let server = serve(ResponseTemplate::new(200).set_body_string("")).await;
        let error = fetch::<TeamsByLeagueResponse>(&client, &teams_url(&server), &token)
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiNoData { .. }));

        let server = serve(ResponseTemplate::new(200).set_body_string("<html>down</html>")).await;
        let error = fetch::<TeamsByLeagueResponse>(&client, &teams_url(&server), &token)
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiMalformedJson { .. }));

        let server =
            serve(ResponseTemplate::new(200).set_body_string(r#"{"teams": "nope"}"#)).await;
        let error = fetch::<TeamsByLeagueResponse>(&client, &teams_url(&server), &token)
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiUnexpectedStructure { .. }));
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_skips_request() {
        let server = serve(ResponseTemplate::new(200).set_body_string(r#"{"teams": null}"#)).await;
        let client = create_test_http_client();
        let token = CancellationToken::new();
        token.cancel();

        let error = fetch::<TeamsByLeagueResponse>(&client, &teams_url(&server), &token)
            .await
            .unwrap_err();

        assert!(error.is_cancelled());
        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_cancel_while_in_flight() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"teams": null}"#)
                .set_delay(Duration::from_secs(5)),
        )
        .await;
        let client = create_test_http_client();
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let error = fetch::<TeamsByLeagueResponse>(&client, &teams_url(&server), &token)
            .await
            .unwrap_err();

        assert!(error.is_cancelled());
    }
}
