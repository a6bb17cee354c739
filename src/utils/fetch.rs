//! JSON over the Fetch API.
//!
//! Every request is raced against [`FETCH_TIMEOUT_MS`]; a request that loses
//! the race surfaces as [`FetchError::Timeout`]. The abandoned fetch is not
//! aborted, its result is simply dropped.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// HTTP methods the API client uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = send(Method::Get, url, None).await?;
    decode(&text)
}

/// POST `body` as JSON to `url` and decode the JSON response.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let payload =
        serde_json::to_string(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;
    let text = send(Method::Post, url, Some(&payload)).await?;
    decode(&text)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Settle `promise`, or fail with [`FetchError::Timeout`] after `timeout_ms`.
///
/// The timer resolves to `undefined`, which no fetch ever resolves to, so
/// the two outcomes cannot be confused.
pub async fn with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });
    let contenders = Array::of2(&promise, &timer);

    let settled = JsFuture::from(Promise::race(&contenders))
        .await
        .map_err(|e| FetchError::NetworkError(describe(&e)))?;

    if settled.is_undefined() {
        Err(FetchError::Timeout)
    } else {
        Ok(settled)
    }
}

/// Human-readable text for a rejected promise value.
fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

fn build_request(method: Method, url: &str, json_body: Option<&str>) -> Result<Request, FetchError> {
    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_mode(RequestMode::Cors);

    if let Some(body) = json_body {
        let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));
    }

    Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)
}

/// Issue one request and return the body of a 2xx response as text.
async fn send(method: Method, url: &str, json_body: Option<&str>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let request = build_request(method, url, json_body)?;

    tracing::debug!(method = method.as_str(), %url, "fetch");
    let settled = with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await?;
    let response: Response = settled.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        tracing::debug!(status = response.status(), %url, "fetch rejected");
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LookupResponse;

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
    }

    #[test]
    fn test_decode_reports_parse_errors() {
        let err = decode::<LookupResponse>("{\"domain\":").unwrap_err();
        assert!(matches!(err, FetchError::JsonParseError(_)));
    }
}
