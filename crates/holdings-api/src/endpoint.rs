//! Request description for the HTTP client.

use url::Url;

use crate::errors::ApiError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// A single remote resource the client knows how to request.
pub trait Endpoint: Send + Sync {
    /// Absolute base URL, e.g. `https://example.com/api/`.
    fn base_url(&self) -> &str;

    /// Path appended to the base URL. May be empty.
    fn path(&self) -> &str;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Builds the full request URL.
    ///
    /// Path segments are appended to the base URL's path rather than
    /// replacing its last segment. Only `http` and `https` are accepted.
    fn url(&self) -> Result<Url, ApiError> {
        let mut url = Url::parse(self.base_url())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                self.base_url()
            )));
        }

        let path = self.path().trim_matches('/');
        if !path.is_empty() {
            url.path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base_url().to_string()))?
                .pop_if_empty()
                .extend(path.split('/'));
        }
        Ok(url)
    }
}
