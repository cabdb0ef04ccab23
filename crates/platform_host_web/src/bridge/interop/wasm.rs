use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::*;

fn js_error(context: &str, err: JsValue) -> String {
    format!("{context}: {err:?}")
}

async fn fetch(request: Request) -> Result<HttpResponse, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| js_error("fetch failed", err))?;
    let response: Response = value
        .dyn_into()
        .map_err(|err| js_error("fetch returned a non-response", err))?;
    let text = response
        .text()
        .map_err(|err| js_error("response body unavailable", err))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|err| js_error("response body read failed", err))?
        .as_string()
        .unwrap_or_default();
    Ok(HttpResponse {
        status: response.status(),
        body,
    })
}

pub async fn send_json(
    method: HttpMethod,
    url: &str,
    json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);

    if let Some(body) = json_body {
        let headers = Headers::new().map_err(|err| js_error("headers unavailable", err))?;
        headers
            .append("Content-Type", "application/json")
            .map_err(|err| js_error("header rejected", err))?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| js_error("request construction failed", err))?;
    fetch(request).await
}

pub async fn post_file_form(
    url: &str,
    file: &UploadFile,
    fields: &[(&str, &str)],
) -> Result<HttpResponse, String> {
    let parts = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
    let bag = BlobPropertyBag::new();
    bag.set_type(&file.content_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)
        .map_err(|err| js_error("blob construction failed", err))?;

    let form = FormData::new().map_err(|err| js_error("form data unavailable", err))?;
    form.append_with_blob_and_filename("file", &blob, &file.file_name)
        .map_err(|err| js_error("file part rejected", err))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|err| js_error("form field rejected", err))?;
    }

    let opts = RequestInit::new();
    opts.set_method(HttpMethod::Post.as_str());
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| js_error("request construction failed", err))?;
    fetch(request).await
}
