//! Confession API Bindings
//!
//! Frontend bindings to the two remote endpoints via the browser fetch API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{Confession, ListEnvelope, NewConfession, SubmitEnvelope};

const GET_CONFESSIONS_URL: &str =
    "https://zyy44ecr46.execute-api.us-east-1.amazonaws.com/dev";
const ADD_CONFESSION_URL: &str =
    "https://3hxft73hv1.execute-api.us-east-1.amazonaws.com/dev";

fn js_err(e: impl std::fmt::Debug) -> String {
    format!("{:?}", e)
}

/// POST a JSON request and return the decoded JSON response value.
async fn post_json(url: &str, body: Option<String>) -> Result<JsValue, String> {
    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;
    JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)
}

/// Fetch every stored confession. The read endpoint takes an empty POST.
pub async fn fetch_confessions() -> Result<Vec<Confession>, String> {
    let value = post_json(GET_CONFESSIONS_URL, None).await?;
    let envelope: ListEnvelope =
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;
    Ok(envelope.body.items)
}

/// Submit a new confession and return the record the endpoint created.
pub async fn submit_confession(title: &str, confession: &str) -> Result<Confession, String> {
    let payload = serde_json::to_string(&NewConfession { title, confession })
        .map_err(|e| e.to_string())?;
    let value = post_json(ADD_CONFESSION_URL, Some(payload)).await?;
    let envelope: SubmitEnvelope =
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;
    envelope.into_confession()
}
