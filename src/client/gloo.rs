//! Activities API over the browser's `fetch`, through `gloo_net`.

use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{ActivitiesApi, HttpClient};
use crate::model::dtos::{SignupReply, SignupRequest};
use crate::model::structs::ActivityMap;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

use super::{signup_path, ACTIVITIES_PATH};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    config: ClientConfig,
}

impl HttpClient for WasmClient {
    fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self { config })
    }
}

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(method: &str, url: &str) -> RequestBuilder {
        let builder = match method {
            "POST" => Request::post(url),
            _ => Request::get(url),
        };

        builder
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
    }
}

impl ActivitiesApi for WasmClient {
    async fn fetch_activities(&self) -> Result<ActivityMap> {
        let url = self.config.endpoint(ACTIVITIES_PATH);

        let resp = Self::build_request("GET", &url).send().await?;

        log::debug!("Activities response status: {:?}", resp.status());

        if !resp.ok() {
            return Err(ErrorKind::ServerError {
                status: resp.status(),
            }
            .into());
        }

        resp.json::<ActivityMap>().await.map_err(Into::into)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReply> {
        let url = self.config.endpoint(&signup_path(activity));

        let mut req = Self::build_request("POST", &url);
        if self.config.email_in_query {
            req = req.query([("email", email)]);
        }

        let resp = req.json(&SignupRequest { email })?.send().await?;

        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await?;

        log::debug!("Signup response status: {status}, body length: {}", text.len());

        let body = serde_json::from_str::<Value>(&text)?;
        Ok(SignupReply::from_body(ok, status, body)?)
    }
}
