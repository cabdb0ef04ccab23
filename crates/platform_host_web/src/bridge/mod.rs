//! Browser transport bridge for `platform_host_web` service adapters.
//!
//! Adapters call through here instead of touching `web_sys` directly so that every browser API
//! has a native stand-in with identical signatures.

mod interop;

pub(crate) use interop::{HttpMethod, HttpResponse};

use platform_host::UploadFile;

pub(crate) async fn send_json(
    method: HttpMethod,
    url: &str,
    json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    interop::send_json(method, url, json_body).await
}

pub(crate) async fn post_file_form(
    url: &str,
    file: &UploadFile,
    fields: &[(&str, &str)],
) -> Result<HttpResponse, String> {
    interop::post_file_form(url, file, fields).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn transport_public_api_non_wasm_parity() {
        let expected = "Browser fetch APIs are only available when compiled for wasm32".to_string();
        assert_eq!(
            block_on(send_json(HttpMethod::Get, "https://example.test", None))
                .expect_err("fetch should fail"),
            expected
        );
        let file = UploadFile {
            file_name: "a.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: Vec::new(),
        };
        assert_eq!(
            block_on(post_file_form("https://example.test", &file, &[]))
                .expect_err("form post should fail"),
            expected
        );
    }

    #[test]
    fn success_range_is_2xx() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let missing = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
