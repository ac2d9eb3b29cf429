use url::Url;

/// A fetched HTML document, already decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    /// Name of the encoding the body was decoded from.
    pub encoding: &'static str,
    pub body: String,
}
