// API client module: a small blocking HTTP client that talks to the
// prediction backend. One `ApiClient` is built at startup and passed to
// whoever needs it; it holds no mutable state, so cloning it is cheap
// and sharing it is safe.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend address.
pub const BASE_URL_ENV: &str = "HOUSE_PRICE_API_URL";

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the backend. Every request carries `Content-Type: application/json`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

/// Prediction request. Fields mirror what the backend model expects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HouseData {
    pub location: String,
    pub sqft: f64,
    pub bhk: u32,
    pub bath: u32,
}

/// Prediction result as returned by `/predict`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PricePrediction {
    pub estimated_price: f64,
}

/// Body of `/`, kept exactly as the backend sent it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct HealthStatus {
    pub body: serde_json::Map<String, serde_json::Value>,
}

impl HealthStatus {
    /// The greeting the backend puts in `message`, when it is a string.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(serde_json::Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.body.get(key)
    }
}

#[derive(Deserialize, Debug)]
struct LocationsResponse {
    locations: Vec<String>,
}

impl ApiClient {
    /// Build a client for the backend at `base_url`. A path prefix such as
    /// `http://host/api` is kept and endpoints are resolved below it. A
    /// query string or fragment is rejected since joining would drop it.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Build)?;

        Ok(ApiClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /locations and unwrap the `locations` envelope.
    pub fn get_locations(&self) -> Result<Vec<String>, ApiError> {
        let res: LocationsResponse = self.request(Method::GET, "locations", None::<&()>)?;
        tracing::debug!(count = res.locations.len(), "fetched locations");
        Ok(res.locations)
    }

    /// POST /predict with `data` as the JSON body.
    pub fn predict_price(&self, data: &HouseData) -> Result<PricePrediction, ApiError> {
        self.request(Method::POST, "predict", Some(data))
    }

    /// GET / as a liveness probe. Any failure is reported as
    /// `ApiError::Unavailable`; the underlying cause only reaches the log.
    pub fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.request(Method::GET, "", None::<&()>).map_err(|err| {
            tracing::debug!(error = ?err, "health check failed");
            ApiError::Unavailable
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    fn request<T, R>(&self, method: Method, path: &str, body: Option<&T>) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "sending request");

        let mut req = self.client.request(method, url.clone());
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        let res = check_status(res)?;

        let bytes = res.bytes().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::UnexpectedShape {
            url: url.to_string(),
            source,
        })
    }
}

fn check_status(res: Response) -> Result<Response, ApiError> {
    if res.status().is_success() {
        return Ok(res);
    }
    let status = res.status();
    let body = res.text().unwrap_or_else(|err| {
        tracing::debug!(error = ?err, "could not read error response body");
        String::new()
    });
    tracing::warn!(%status, "backend returned an error status");
    Err(ApiError::Status { status, body })
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not supported".into()));
    }
    // Url::join replaces the last segment unless the path ends with '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
