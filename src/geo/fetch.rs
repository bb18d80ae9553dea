//! Geolocation fetch path.
//!
//! One HTTP GET per submission: no retries, no backoff, no queueing. A
//! failed lookup is reported and the user decides whether to resubmit.

use log::{debug, warn};

use crate::classify::ClassificationResult;
use crate::error_handling::{categorize_lookup_error, LookupError};
use crate::geo::{Endpoint, GeolocationRecord};

/// Looks up `query` against the configured provider endpoint.
///
/// `kind` is the query's classification; keyed providers template the URL
/// differently for domains than for IP literals. An empty `query` performs
/// the provider's self lookup.
///
/// # Errors
///
/// Returns a [`LookupError`] for transport failures, non-2xx statuses,
/// in-band provider failures, and unparseable bodies. Every failure is also
/// logged with its diagnostic category.
pub async fn fetch_geolocation(
    client: &reqwest::Client,
    endpoint: &Endpoint,
    query: &str,
    kind: ClassificationResult,
) -> Result<GeolocationRecord, LookupError> {
    let url = endpoint.lookup_url(query, kind);
    debug!(
        "Querying {} for {}",
        endpoint.provider(),
        if query.is_empty() { "<self>" } else { query }
    );

    let result = request(client, endpoint, &url).await;
    if let Err(ref e) = result {
        warn!(
            "Lookup failed for '{}' via {}: {} [{}]",
            query,
            endpoint.provider(),
            e,
            categorize_lookup_error(e)
        );
    }
    result
}

async fn request(
    client: &reqwest::Client,
    endpoint: &Endpoint,
    url: &str,
) -> Result<GeolocationRecord, LookupError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    endpoint.parse(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to create HTTP client")
    }

    fn endpoint_for(server: &Server) -> Endpoint {
        let config = Config {
            api_base: Some(server.url_str("/json")),
            ..Default::default()
        };
        Endpoint::from_config(&config).expect("endpoint")
    }

    #[tokio::test]
    async fn test_fetch_geolocation_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/8.8.8.8")).respond_with(
                status_code(200).body(
                    r#"{"status":"success","query":"8.8.8.8","city":"Ashburn","regionName":"Virginia","zip":"20149","countryCode":"US","lat":39.03,"lon":-77.5,"timezone":"America/New_York","isp":"Google LLC"}"#,
                ),
            ),
        );

        let endpoint = endpoint_for(&server);
        let record = fetch_geolocation(
            &test_client(),
            &endpoint,
            "8.8.8.8",
            ClassificationResult::IPv4,
        )
        .await
        .unwrap();

        assert_eq!(record.ip, "8.8.8.8");
        assert_eq!(record.city.as_deref(), Some("Ashburn"));
        assert_eq!(record.isp.as_deref(), Some("Google LLC"));
    }

    #[tokio::test]
    async fn test_fetch_geolocation_self_lookup() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/")).respond_with(
                status_code(200)
                    .body(r#"{"status":"success","query":"203.0.113.7","city":"Oslo"}"#),
            ),
        );

        let endpoint = endpoint_for(&server);
        let record = fetch_geolocation(&test_client(), &endpoint, "", ClassificationResult::Empty)
            .await
            .unwrap();

        assert_eq!(record.ip, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_fetch_geolocation_http_error_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/8.8.8.8"))
                .respond_with(status_code(503).body("overloaded")),
        );

        let endpoint = endpoint_for(&server);
        let err = fetch_geolocation(
            &test_client(),
            &endpoint,
            "8.8.8.8",
            ClassificationResult::IPv4,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, LookupError::Request(_)));
    }

    #[tokio::test]
    async fn test_fetch_geolocation_in_band_failure() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/999.999.999.999"))
                .respond_with(
                    status_code(200)
                        .body(r#"{"status":"fail","message":"invalid query","query":"999.999.999.999"}"#),
                ),
        );

        let endpoint = endpoint_for(&server);
        // Syntactically valid per the loose IPv4 rule, so the request is
        // made and the provider is the one that rejects it
        let err = fetch_geolocation(
            &test_client(),
            &endpoint,
            "999.999.999.999",
            ClassificationResult::IPv4,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, LookupError::Provider(ref m) if m == "invalid query"));
    }

    #[tokio::test]
    async fn test_fetch_geolocation_malformed_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/8.8.8.8"))
                .respond_with(status_code(200).body("<html>maintenance</html>")),
        );

        let endpoint = endpoint_for(&server);
        let err = fetch_geolocation(
            &test_client(),
            &endpoint,
            "8.8.8.8",
            ClassificationResult::IPv4,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, LookupError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_fetch_geolocation_connection_refused() {
        let config = Config {
            api_base: Some("http://127.0.0.1:1/json".to_string()),
            ..Default::default()
        };
        let endpoint = Endpoint::from_config(&config).unwrap();
        let err = fetch_geolocation(
            &test_client(),
            &endpoint,
            "8.8.8.8",
            ClassificationResult::IPv4,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, LookupError::Request(_)));
    }
}
