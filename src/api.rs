//! REST API Client
//!
//! Frontend bindings to the items endpoint. Each wrapper issues one fetch and
//! decodes the JSON body; non-2xx statuses pass through untreated, so only a
//! body that fails to parse surfaces as an error.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{Item, ItemFields};

/// Base URL of the items API
pub const API_BASE: &str = "http://localhost:3000";

// ========================
// URL Helpers
// ========================

/// Collection endpoint filtered to non-deleted items
pub fn list_url() -> String {
    format!("{API_BASE}/items?deleted=false")
}

/// Collection endpoint for creates
pub fn collection_url() -> String {
    format!("{API_BASE}/items")
}

/// Single-item endpoint for updates and deletes
pub fn item_url(id: u32) -> String {
    format!("{API_BASE}/items/{id}")
}

// ========================
// Fetch Plumbing
// ========================

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Issue one request and parse the response body as JSON
async fn send(method: &str, url: &str, body: Option<String>) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method(method);

    let headers = Headers::new().map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;
    if let Some(body) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
        opts.set_body(&JsValue::from_str(&body));
    }
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)
}

// ========================
// Item Operations
// ========================

pub async fn list_items() -> Result<Vec<Item>, String> {
    let result = send("GET", &list_url(), None).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_item(fields: &ItemFields) -> Result<Item, String> {
    let body = serde_json::to_string(fields).map_err(|e| e.to_string())?;
    let result = send("POST", &collection_url(), Some(body)).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_item(id: u32, fields: &ItemFields) -> Result<Item, String> {
    let body = serde_json::to_string(fields).map_err(|e| e.to_string())?;
    let result = send("PATCH", &item_url(id), Some(body)).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_item(id: u32) -> Result<(), String> {
    // The confirmation body is parsed and discarded
    let _ = send("DELETE", &item_url(id), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_filters_deleted() {
        assert_eq!(list_url(), "http://localhost:3000/items?deleted=false");
    }

    #[test]
    fn test_collection_url_has_no_filter() {
        assert_eq!(collection_url(), "http://localhost:3000/items");
    }

    #[test]
    fn test_item_url_targets_resource() {
        assert_eq!(item_url(7), "http://localhost:3000/items/7");
    }
}
