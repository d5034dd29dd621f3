use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use ezytix_booking::flow::{BookingApi, BookingApiError};
use ezytix_booking::payload::{CreateBookingRequest, CreateBookingResponse};
use ezytix_core::airport::Airport;
use ezytix_core::flight::{Flight, FlightSearchQuery};
use ezytix_core::user::User;

use crate::client_config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Every backend response wraps its body in `data`; error bodies carry a
/// `message` instead.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Typed client for the Ezytix REST backend.
#[derive(Clone)]
pub struct EzytixClient {
    http: Client,
    base_url: String,
}

impl EzytixClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// GET /airports
    pub async fn get_airports(&self) -> ApiResult<Vec<Airport>> {
        self.get_json("/airports", &[]).await
    }

    /// GET /flights with the search query string.
    pub async fn search_flights(&self, query: &FlightSearchQuery) -> ApiResult<Vec<Flight>> {
        self.get_json("/flights", &query.to_query_pairs()).await
    }

    /// GET /flights/{id}
    pub async fn get_flight(&self, id: i64) -> ApiResult<Flight> {
        self.get_json(&format!("/flights/{}", id), &[]).await
    }

    /// POST /bookings
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> ApiResult<CreateBookingResponse> {
        tracing::info!(items = request.items.len(), "submitting booking");
        let response = self
            .http
            .post(format!("{}/bookings", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(response).await
    }

    /// GET /auth/me. A 401 means "not signed in" and is a state here, not
    /// an error.
    pub async fn me(&self) -> ApiResult<Option<User>> {
        let response = self
            .http
            .get(format!("{}/auth/me", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        match Self::decode::<User>(response).await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Unauthorized) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        tracing::debug!(path, "fetching");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(response).await
    }

    /// Unwrap the `{ data: ... }` envelope or map the status onto the
    /// error taxonomy, pulling the backend's `message` out of the body
    /// when there is one.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let envelope = response
                .json::<Envelope<T>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            return Ok(envelope.data);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(message)),
            status => Err(ApiError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

#[async_trait]
impl BookingApi for EzytixClient {
    async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<CreateBookingResponse, BookingApiError> {
        match EzytixClient::create_booking(self, request).await {
            Ok(response) => Ok(response),
            Err(err) => match err.backend_message() {
                Some(message) => Err(BookingApiError::Rejected(message.to_string())),
                None => Err(BookingApiError::Transport(Box::new(err))),
            },
        }
    }
}
