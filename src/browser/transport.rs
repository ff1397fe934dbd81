//! no-cors multipart `POST` via `gloo-net`.

use std::future::Future;

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{FormData, RequestMode};

use crate::form::{FormSnapshot, FormTransport, SendOutcome, Sent, TransportError};

/// Posts form snapshots with `fetch` in no-cors mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl FormTransport for FetchTransport {
    fn send(&self, endpoint: &str, fields: &FormSnapshot) -> impl Future<Output = SendOutcome> {
        let endpoint = endpoint.to_owned();
        let body = multipart_body(fields);
        async move {
            let request = Request::post(&endpoint)
                .mode(RequestMode::NoCors)
                .body(body?)
                .map_err(|e| TransportError::Build(e.to_string()))?;
            // The opaque response carries no status; reaching here is the whole signal.
            request
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(Sent)
        }
    }
}

fn multipart_body(fields: &FormSnapshot) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(build_error)?;
    for (name, value) in fields.iter() {
        data.append_with_str(name, value).map_err(build_error)?;
    }
    Ok(data)
}

fn build_error(err: JsValue) -> TransportError {
    TransportError::Build(format!("{err:?}"))
}
