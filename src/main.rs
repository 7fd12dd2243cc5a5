//! Browser entry point: reads the inline config, starts logging, mounts the app.

use console_error_panic_hook as _;
use console_log as _;
use gloo_net as _;
use js_sys as _;
use leptos::prelude::*;
use leptos_meta as _;
use leptos_router as _;
use log::{debug, warn};
use odin_web::{App, AppConfig, init_logging};
use rand as _;
use serde as _;
use serde_json as _;
use thiserror as _;
use wasm_bindgen as _;
use web_sys as _;

#[cfg(test)]
use futures as _;

fn main() {
	let (config, config_err) = AppConfig::from_document();
	init_logging(config.log_level);
	match config_err {
		Some(err) => warn!("Ignoring malformed app config, using defaults: {err}"),
		None => debug!("Loaded {config:?}"),
	}

	mount_to_body(move || view! { <App config=config /> })
}
