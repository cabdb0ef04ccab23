use super::*;

fn unsupported() -> String {
    "Browser fetch APIs are only available when compiled for wasm32".to_string()
}

pub async fn send_json(
    _method: HttpMethod,
    _url: &str,
    _json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    Err(unsupported())
}

pub async fn post_file_form(
    _url: &str,
    _file: &UploadFile,
    _fields: &[(&str, &str)],
) -> Result<HttpResponse, String> {
    Err(unsupported())
}
