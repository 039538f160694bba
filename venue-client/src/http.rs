//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ServiceResponse;
use shared::models::{Booking, BookingStatus, StatusCount, Venue, VenueStatus};
use shared::request::{BulkDeleteRequest, BulkStatusUpdateRequest, ListFilters, StatusUpdateRequest};

const NO_QUERY: [(&str, &str); 0] = [];

/// HTTP client for making network requests to the admin backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", t)),
            None => request,
        }
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the envelope's error string when the backend sent one
            let message = serde_json::from_str::<ServiceResponse<serde_json::Value>>(&text)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(text);
            tracing::warn!(status = %status, message = %message, "Admin API request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Venue API ==========

    /// GET /api/admin/venues
    pub async fn list_venues(
        &self,
        status: Option<VenueStatus>,
        filters: &ListFilters,
    ) -> ClientResult<ServiceResponse<Vec<Venue>>> {
        let mut query = filters.query_pairs();
        if let Some(s) = status {
            query.push(("status", s.as_str().to_string()));
        }
        self.get("/api/admin/venues", &query).await
    }

    /// PUT /api/admin/venues/{id}/status
    pub async fn update_venue_status(
        &self,
        id: i64,
        request: &StatusUpdateRequest<VenueStatus>,
    ) -> ClientResult<ServiceResponse<()>> {
        let resp = self
            .put(&format!("/api/admin/venues/{}/status", id), request)
            .await?;
        Ok(discard_data(resp))
    }

    /// POST /api/admin/venues/bulk-status
    pub async fn bulk_update_venue_status(
        &self,
        request: &BulkStatusUpdateRequest<VenueStatus>,
    ) -> ClientResult<ServiceResponse<()>> {
        let resp = self.post("/api/admin/venues/bulk-status", request).await?;
        Ok(discard_data(resp))
    }

    /// DELETE /api/admin/venues/{id}
    pub async fn delete_venue(&self, id: i64) -> ClientResult<ServiceResponse<()>> {
        let resp = self.delete(&format!("/api/admin/venues/{}", id)).await?;
        Ok(discard_data(resp))
    }

    /// POST /api/admin/venues/bulk-delete
    pub async fn bulk_delete_venues(
        &self,
        request: &BulkDeleteRequest,
    ) -> ClientResult<ServiceResponse<()>> {
        let resp = self.post("/api/admin/venues/bulk-delete", request).await?;
        Ok(discard_data(resp))
    }

    /// GET /api/admin/venues/stats
    pub async fn venue_status_stats(
        &self,
    ) -> ClientResult<ServiceResponse<Vec<StatusCount<VenueStatus>>>> {
        self.get("/api/admin/venues/stats", &NO_QUERY).await
    }

    // ========== Booking API ==========

    /// GET /api/admin/bookings
    pub async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        filters: &ListFilters,
    ) -> ClientResult<ServiceResponse<Vec<Booking>>> {
        let mut query = filters.query_pairs();
        if let Some(s) = status {
            query.push(("status", s.as_str().to_string()));
        }
        self.get("/api/admin/bookings", &query).await
    }

    /// PUT /api/admin/bookings/{id}/status
    pub async fn update_booking_status(
        &self,
        id: i64,
        request: &StatusUpdateRequest<BookingStatus>,
    ) -> ClientResult<ServiceResponse<()>> {
        let resp = self
            .put(&format!("/api/admin/bookings/{}/status", id), request)
            .await?;
        Ok(discard_data(resp))
    }

    /// POST /api/admin/bookings/bulk-status
    pub async fn bulk_update_booking_status(
        &self,
        request: &BulkStatusUpdateRequest<BookingStatus>,
    ) -> ClientResult<ServiceResponse<()>> {
        let resp = self.post("/api/admin/bookings/bulk-status", request).await?;
        Ok(discard_data(resp))
    }

    /// GET /api/admin/bookings/stats
    pub async fn booking_status_stats(
        &self,
    ) -> ClientResult<ServiceResponse<Vec<StatusCount<BookingStatus>>>> {
        self.get("/api/admin/bookings/stats", &NO_QUERY).await
    }
}

/// Mutation endpoints may echo a payload; the console only needs the outcome
fn discard_data(resp: ServiceResponse<serde_json::Value>) -> ServiceResponse<()> {
    ServiceResponse {
        success: resp.success,
        data: None,
        error: resp.error,
        code: resp.code,
    }
}
