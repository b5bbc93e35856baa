//! JS-facing console handle — owns the controller and the UI projection.
//!
//! Async operations are spawned as promises; the page calls `poll()` to
//! drain pending events into the view state and `view()` to read it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Promise, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use aura_core::controller::SessionController;
use aura_core::event_bus::EventBus;
use aura_platform::{HttpGateway, TimerClock};
use aura_types::{config::ClientConfig, dataset::DatasetUpload, ConsoleError};
use aura_ui::state::UiState;

#[wasm_bindgen]
pub struct AuraConsole {
    controller: Rc<SessionController>,
    ui_state: Rc<RefCell<UiState>>,
}

#[wasm_bindgen]
impl AuraConsole {
    /// Build a console from an optional JSON config; missing fields use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<AuraConsole, JsValue> {
        let config = match config_json {
            Some(json) => ClientConfig::from_json(&json).map_err(to_js)?,
            None => {
                let config = ClientConfig::default();
                config.validate().map_err(to_js)?;
                config
            }
        };
        log::info!("Using API base {}", config.api_base);

        let event_bus = EventBus::new();
        let gateway = Rc::new(HttpGateway::new(config.clone()));
        let controller = SessionController::new(config, gateway, Rc::new(TimerClock), event_bus);

        Ok(Self {
            controller: Rc::new(controller),
            ui_state: Rc::new(RefCell::new(UiState::new())),
        })
    }

    /// Resolves to the session id (local if the backend is unreachable).
    /// Calling it again returns the same id.
    pub fn initialize(&self) -> Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            let session = controller.initialize_session().await.map_err(to_js)?;
            Ok(JsValue::from_str(&session.session_id))
        })
    }

    /// Run one turn. Rejects if a turn is already running.
    #[wasm_bindgen(js_name = sendMessage)]
    pub fn send_message(&self, text: String) -> Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            match controller.send_message(&text).await {
                Ok(summary) => {
                    log::info!(
                        "Turn done: {} succeeded, {} failed",
                        summary.agents_succeeded,
                        summary.agents_failed
                    );
                    Ok(JsValue::from_str(&summary.plan_message_id))
                }
                Err(e) => {
                    log::error!("Turn error: {}", e);
                    Err(to_js(e))
                }
            }
        })
    }

    /// Read a picked file and upload it as the active dataset.
    #[wasm_bindgen(js_name = uploadFile)]
    pub fn upload_file(&self, file: web_sys::File) -> Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            let buffer = JsFuture::from(file.array_buffer()).await?;
            let mut upload = DatasetUpload::new(file.name(), Uint8Array::new(&buffer).to_vec());
            let content_type = file.type_();
            if !content_type.is_empty() {
                upload.content_type = Some(content_type);
            }
            let dataset = controller.upload_dataset(upload).await.map_err(to_js)?;
            JsValue::from_serde(&dataset).map_err(|e| to_js(e.into()))
        })
    }

    #[wasm_bindgen(js_name = approveOrder)]
    pub fn approve_order(&self, order_id: String) -> Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            let approved = controller.approve_order(&order_id).await.map_err(to_js)?;
            Ok(JsValue::from_bool(approved))
        })
    }

    #[wasm_bindgen(js_name = checkHealth)]
    pub fn check_health(&self) -> Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            let health = controller.check_health().await.map_err(to_js)?;
            Ok(JsValue::from_bool(health.is_healthy()))
        })
    }

    /// Start over within the same session.
    pub fn reset(&self) -> Result<(), JsValue> {
        self.controller.reset_session().map_err(to_js)
    }

    /// Pin the detail panel to an agent, or pass nothing to follow the reveal.
    #[wasm_bindgen(js_name = selectAgent)]
    pub fn select_agent(&self, agent: Option<String>) -> bool {
        let mut ui = self.ui_state.borrow_mut();
        match agent {
            Some(name) => ui.select_agent(&name),
            None => {
                ui.clear_selection();
                true
            }
        }
    }

    #[wasm_bindgen(js_name = toggleSidebar)]
    pub fn toggle_sidebar(&self) {
        self.ui_state.borrow_mut().toggle_sidebar();
    }

    #[wasm_bindgen(js_name = toggleDetailPanel)]
    pub fn toggle_detail_panel(&self) {
        self.ui_state.borrow_mut().toggle_detail_panel();
    }

    /// Drain pending events. Returns true if the view changed.
    pub fn poll(&self) -> bool {
        self.ui_state
            .borrow_mut()
            .sync(self.controller.event_bus())
    }

    /// Current view state as a plain JS object.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.ui_state.borrow().view()).map_err(|e| to_js(e.into()))
    }

    #[wasm_bindgen(js_name = isBusy)]
    pub fn is_busy(&self) -> bool {
        self.controller.is_busy()
    }
}

fn to_js(e: ConsoleError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
