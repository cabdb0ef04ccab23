//! Shared transport interop for browser bridge domains.
//!
//! Calls route to the `wasm` implementation in the browser and to `non_wasm` stand-ins for
//! native builds, so higher-level adapters compile and test on both.

use platform_host::UploadFile;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// HTTP verbs used by the REST adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Status and text body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub async fn send_json(
    method: HttpMethod,
    url: &str,
    json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    imp::send_json(method, url, json_body).await
}

pub async fn post_file_form(
    url: &str,
    file: &UploadFile,
    fields: &[(&str, &str)],
) -> Result<HttpResponse, String> {
    imp::post_file_form(url, file, fields).await
}
