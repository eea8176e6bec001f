use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid server URL '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Server URL '{url}' cannot serve as an API root.")]
    ServerUrlNotABase { url: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Consent value is not usable as a cookie: {source}")]
    InvalidConsentValue {
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Token endpoint did not return the '{header}' header.")]
    TokenHeaderMissing { header: &'static str },
    #[error("Server rejected the request ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to decode response from {url}: {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
