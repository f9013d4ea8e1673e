//! Activities API over `reqwest`, used by the terminal front end.

use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{ActivitiesApi, HttpClient};
use crate::model::dtos::{SignupReply, SignupRequest};
use crate::model::structs::ActivityMap;
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;

use super::{signup_path, ACTIVITIES_PATH};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient for NoWasmClient {
    fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }
}

impl ActivitiesApi for NoWasmClient {
    async fn fetch_activities(&self) -> Result<ActivityMap> {
        let url = self.config.endpoint(ACTIVITIES_PATH);
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ErrorKind::ServerError {
                status: status.as_u16(),
            }
            .into());
        }

        Ok(resp.json::<ActivityMap>().await?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReply> {
        let url = self.config.endpoint(&signup_path(activity));
        log::debug!("POST {url}");

        let mut req = self.client.post(&url).header(ACCEPT, "application/json");
        if self.config.email_in_query {
            req = req.query(&[("email", email)]);
        }

        let resp = req.json(&SignupRequest { email }).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        log::debug!("Signup response status: {status}, body length: {}", text.len());

        let body = serde_json::from_str::<Value>(&text)?;
        Ok(SignupReply::from_body(
            status.is_success(),
            status.as_u16(),
            body,
        )?)
    }
}
