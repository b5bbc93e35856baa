//! HTTP gateway to the orchestrator API.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! Non-2xx responses are errors; bodies are decoded in [`super::wire`].

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use aura_core::ports::*;
use aura_types::{
    ConsoleError, Result,
    config::ClientConfig,
    dataset::{DatasetContext, DatasetUpload},
};
use super::wire::{self, ApiApprovalRequest, ApiQueryRequest, ApiSessionRequest};

pub struct HttpGateway {
    config: ClientConfig,
}

impl HttpGateway {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[async_trait(?Send)]
impl GatewayPort for HttpGateway {
    async fn create_session(&self, user_id: &str) -> Result<SessionGrant> {
        let response = Request::post(&self.url("sessions"))
            .json(&ApiSessionRequest { user_id })
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        wire::decode_session(&read_body(response).await?)
    }

    async fn send_query(&self, req: QueryRequest) -> Result<QueryResponse> {
        let response = Request::post(&self.url("orchestrator/query"))
            .json(&ApiQueryRequest::from(&req))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        wire::decode_query_response(&read_body(response).await?)
    }

    async fn upload_dataset(&self, upload: DatasetUpload) -> Result<DatasetContext> {
        let form = multipart(&upload)?;
        let response = Request::post(&self.url("data/upload"))
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        wire::decode_dataset(&read_body(response).await?)
    }

    async fn approve_order(&self, order_id: &str, session_id: &str) -> Result<bool> {
        let response = Request::post(&self.url(&format!("orders/{}/approve", order_id)))
            .json(&ApiApprovalRequest { session_id })
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        wire::decode_approval(&read_body(response).await?)
    }

    async fn check_health(&self) -> Result<HealthStatus> {
        let response = Request::get(&self.url("health/"))
            .send()
            .await
            .map_err(network)?;
        wire::decode_health(&read_body(response).await?)
    }
}

fn network(e: gloo_net::Error) -> ConsoleError {
    ConsoleError::Network(e.to_string())
}

fn js_err(e: JsValue) -> ConsoleError {
    ConsoleError::JsInterop(format!("{:?}", e))
}

/// The response text, or `ConsoleError::Http` for a non-2xx status.
async fn read_body(response: Response) -> Result<String> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ConsoleError::Http { status, body });
    }
    response.text().await.map_err(network)
}

/// `multipart/form-data` with the file under the `file` field.
fn multipart(upload: &DatasetUpload) -> Result<FormData> {
    let bytes = Uint8Array::from(upload.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if let Some(content_type) = &upload.content_type {
        options.set_type(content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("file", &blob, &upload.filename)
        .map_err(js_err)?;
    Ok(form)
}
