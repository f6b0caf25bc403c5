// ABOUTME: CMA SDK library wrapping the Cleveland Museum of Art Open Access API
// ABOUTME: Provides the HTTP client, artwork operations, filters, and ASCII previews

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

pub mod builder;
pub mod constants;
pub mod error;
pub mod filters;
pub mod render;

pub use builder::CmaClientConfig;
pub use error::CmaError;
pub use filters::ArtworkFilters;
pub use render::{AsciiRenderer, PreviewOptions};

use constants::{http, urls};

pub type Result<T> = std::result::Result<T, CmaError>;

/// Successful responses wrap the payload in a top-level `data` field.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Value,
}

/// Client for the CMA Open Access API.
///
/// Artwork records are passed through as opaque JSON; the only mutation the
/// client ever performs is injecting a `"preview"` key when an ASCII preview
/// is requested and an image is available.
pub struct CmaClient {
    client: reqwest::Client,
    base_url: String,
    // Accepted for forward compatibility; the upstream API has no auth yet.
    _api_key: Option<SecretString>,
}

impl CmaClient {
    /// Create a client against the public API with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub(crate) fn from_config(config: CmaClientConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| urls::CMA_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        Url::parse(&base_url)
            .map_err(|e| CmaError::Configuration(format!("Invalid base URL: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(http::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(http::MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            base_url,
            _api_key: config.api_key,
        })
    }

    /// Search the artwork collection. Returns the envelope's `data` payload,
    /// normally an array of artwork records.
    pub async fn get_artworks(&self, filters: &ArtworkFilters) -> Result<Value> {
        let mut url = self.endpoint("artworks/")?;
        // The flag segment leads the query string, value pairs follow.
        if let Some(flags) = filters.flag_segment() {
            url.set_query(Some(&flags));
        }
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
        self.api_get(url).await
    }

    /// Fetch a single artwork record by id. With `preview` options the record
    /// gains a `"preview"` key holding the rendered ASCII block, provided the
    /// record carries a web image; without them it is returned unmodified.
    pub async fn get_artwork(&self, id: &str, preview: Option<&PreviewOptions>) -> Result<Value> {
        let id = normalize_artwork_id(id)?;
        let url = self.endpoint(&format!("artworks/{id}"))?;
        let mut artwork = self.api_get(url).await?;

        if let Some(options) = preview {
            if let Some(text) = self.artwork_preview(&artwork, options).await? {
                if let Value::Object(record) = &mut artwork {
                    record.insert("preview".to_string(), Value::String(text));
                }
            }
        }

        Ok(artwork)
    }

    /// Curator lookups are not part of the open access API yet.
    pub async fn get_curators(&self) -> Result<Value> {
        Err(CmaError::Unsupported("curator"))
    }

    /// Exhibition lookups are not part of the open access API yet.
    pub async fn get_exhibitions(&self) -> Result<Value> {
        Err(CmaError::Unsupported("exhibition"))
    }

    async fn artwork_preview(
        &self,
        artwork: &Value,
        options: &PreviewOptions,
    ) -> Result<Option<String>> {
        let Some(image_url) = artwork.pointer("/images/web/url").and_then(Value::as_str) else {
            // Records without a web image simply have no preview.
            return Ok(None);
        };
        let renderer = AsciiRenderer::new(options.clone())?;
        let bytes = self.fetch_image(image_url).await?;
        Ok(Some(renderer.render(&bytes)?))
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmaError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn api_get(&self, url: Url) -> Result<Value> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CmaError::Http {
                status: status.as_u16(),
                body,
            });
        }
        let envelope: Envelope = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| CmaError::Configuration(format!("Invalid request URL: {e}")))
    }
}

/// Artwork ids are numeric: integers, or floats when they contain a `.`.
fn normalize_artwork_id(raw: &str) -> Result<String> {
    let id = raw.trim();
    let numeric = if id.contains('.') {
        id.parse::<f64>().is_ok()
    } else {
        id.parse::<i64>().is_ok()
    };
    if numeric {
        Ok(id.to_string())
    } else {
        Err(CmaError::InvalidParameter(format!(
            "artwork id must be numeric, got {raw:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> CmaClient {
        CmaClient::builder()
            .base_url(Some(server.url()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(CmaClient::new().is_ok());
    }

    #[test]
    fn test_normalize_artwork_id() {
        assert_eq!(normalize_artwork_id("1234").unwrap(), "1234");
        assert_eq!(normalize_artwork_id(" 1234 ").unwrap(), "1234");
        assert_eq!(normalize_artwork_id("94979.0").unwrap(), "94979.0");
        assert!(matches!(
            normalize_artwork_id("abc"),
            Err(CmaError::InvalidParameter(_))
        ));
        assert!(matches!(
            normalize_artwork_id("12a4"),
            Err(CmaError::InvalidParameter(_))
        ));
        assert!(matches!(
            normalize_artwork_id(""),
            Err(CmaError::InvalidParameter(_))
        ));
    }

    #[tokio::test]
    async fn test_unsupported_endpoints() {
        let client = CmaClient::new().unwrap();
        assert!(matches!(
            client.get_curators().await,
            Err(CmaError::Unsupported("curator"))
        ));
        assert!(matches!(
            client.get_exhibitions().await,
            Err(CmaError::Unsupported("exhibition"))
        ));
    }

    #[tokio::test]
    async fn test_get_artwork_passes_record_through_unchanged() {
        let mut server = Server::new_async().await;
        let record = serde_json::json!({
            "id": 1234,
            "title": "Twilight in the Wilderness",
            "type": "Painting",
            "creators": [{"description": "Frederic Edwin Church (American, 1826-1900)"}],
            "culture": ["America, 19th century"],
        });
        let mock = server
            .mock("GET", "/artworks/1234")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "data": record }).to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let artwork = client.get_artwork("1234", None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(artwork, record);
        assert!(artwork.get("preview").is_none());
    }

    #[tokio::test]
    async fn test_invalid_id_fails_before_any_request() {
        let client = CmaClient::new().unwrap();
        let result = client.get_artwork("not-an-id", None).await;
        assert!(matches!(result, Err(CmaError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_non_success_status_carries_response_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artworks/99999999")
            .with_status(404)
            .with_body(r#"{"detail": "artwork not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.get_artwork("99999999", None).await;

        mock.assert_async().await;
        match result {
            Err(CmaError::Http { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("artwork not found"));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_envelope_is_invalid_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artworks/1")
            .with_status(200)
            .with_body(r#"{"artworks": []}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.get_artwork("1", None).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(CmaError::InvalidResponse)));
    }

    #[tokio::test]
    async fn test_get_artworks_serializes_filters_and_flags() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artworks/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "vase".into()),
                Matcher::UrlEncoded("limit".into(), "5".into()),
                Matcher::Regex("cc0".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"data": [{"id": 1}, {"id": 2}]}"#)
            .create_async()
            .await;

        let filters = ArtworkFilters {
            q: Some("vase".to_string()),
            limit: Some(5),
            cc0: true,
            ..Default::default()
        };

        let client = client_for(&server);
        let results = client.get_artworks(&filters).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_artworks_with_flags_only() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artworks/")
            .match_query(Matcher::Exact("cc0&female_artists".to_string()))
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let filters = ArtworkFilters {
            cc0: true,
            female_artists: true,
            ..Default::default()
        };

        let client = client_for(&server);
        let results = client.get_artworks(&filters).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_omitted_filters_do_not_reach_the_wire() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artworks/")
            .match_query(Matcher::Exact("q=vase".to_string()))
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        // limit: 0 is dropped by the omission rule, cc0 stays unset.
        let filters = ArtworkFilters {
            q: Some("vase".to_string()),
            limit: Some(0),
            department: Some(String::new()),
            ..Default::default()
        };

        let client = client_for(&server);
        client.get_artworks(&filters).await.unwrap();

        mock.assert_async().await;
    }
}
