//! HTTP client for a REST dish collection.
//!
//! Maps the four capabilities onto a collection URL:
//! `GET U`, `POST U`, `PUT U/{id}` and `DELETE U/{id}`.

use reqwest::{Method, RequestBuilder, Response};

use super::{ApiError, DishApi, Operation};
use crate::config::Config;
use crate::models::{Dish, DishId, NewDish};

/// Dish collection reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpDishApi {
    client: reqwest::Client,
    collection_url: String,
    api_key: Option<String>,
}

impl HttpDishApi {
    /// Creates a client for the collection at `collection_url`.
    pub fn new(collection_url: impl Into<String>) -> Self {
        let collection_url = collection_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            collection_url,
            api_key: None,
        }
    }

    /// Sends `Authorization: Bearer <key>` with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn from_config(config: &Config) -> Self {
        let api = Self::new(config.server_url.value.clone());
        match &config.api_key.value {
            Some(key) => api.with_api_key(key.clone()),
            None => api,
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: DishId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(key) => builder.header("Authorization", format!("Bearer {}", key)),
            None => builder,
        }
    }

    /// Sends a request and rejects non-success statuses.
    async fn send(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::new(operation, e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::new(
                operation,
                format!("Server returned status {}", response.status()),
            ));
        }

        Ok(response)
    }
}

impl DishApi for HttpDishApi {
    async fn list(&self) -> Result<Vec<Dish>, ApiError> {
        let builder = self.request(Method::GET, &self.collection_url);
        let response = self.send(Operation::List, builder).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::new(Operation::List, e.to_string()))
    }

    async fn create(&self, dish: &NewDish) -> Result<Dish, ApiError> {
        let builder = self.request(Method::POST, &self.collection_url).json(dish);
        let response = self.send(Operation::Create, builder).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::new(Operation::Create, e.to_string()))
    }

    async fn update(&self, id: DishId, dish: &Dish) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, &self.item_url(id)).json(dish);
        self.send(Operation::Update, builder).await?;
        Ok(())
    }

    async fn delete(&self, id: DishId) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &self.item_url(id));
        self.send(Operation::Delete, builder).await?;
        Ok(())
    }
}
