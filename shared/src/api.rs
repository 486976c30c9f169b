use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    ClientConfig, Error,
    models::{ApiMessage, CreatedShift, NewShift, Shift, ShiftQuery},
};

/// The two calls the page makes against the shift service.
#[async_trait(?Send)]
pub trait ShiftApi {
    async fn list_shifts(&self, query: ShiftQuery) -> Result<Vec<Shift>, Error>;
    async fn create_shift(&self, shift: &NewShift) -> Result<CreatedShift, Error>;
}

pub struct HttpShiftApi {
    client: Client,
    base_url: String,
}

impl HttpShiftApi {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ShiftApi for HttpShiftApi {
    async fn list_shifts(&self, query: ShiftQuery) -> Result<Vec<Shift>, Error> {
        tracing::debug!(
            "GET /shifts user_id={} year={} month={}",
            query.user_id,
            query.year,
            query.month
        );
        let response = self
            .client
            .get(self.url("/shifts"))
            .query(&query)
            .send()
            .await?;
        let response = reject_on_error_status(response).await?;
        parse_body(response).await
    }

    async fn create_shift(&self, shift: &NewShift) -> Result<CreatedShift, Error> {
        tracing::debug!("POST /shifts for {} {}-{}", shift.date, shift.start_time, shift.end_time);
        let response = self
            .client
            .post(self.url("/shifts"))
            .json(shift)
            .send()
            .await?;
        let response = reject_on_error_status(response).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(CreatedShift::default());
        }
        serde_json::from_str(&body).map_err(|e| Error::Malformed(e.to_string()))
    }
}

/// Turns a non-2xx response into `Error::Rejected`, keeping the service's
/// `message` when the body carries one.
async fn reject_on_error_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .ok()
        .and_then(|body| body.message);
    tracing::warn!("Shift service rejected request with {}: {:?}", status, message);
    Err(Error::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Failed to parse shift service response: {}", e);
        Error::Malformed(e.to_string())
    })
}
