//! CRUD and search client for the hero API.
//!
//! # Design
//! `HeroClient` holds a `base_url` plus the two injected collaborators and
//! carries no other state between calls. Each operation builds a plain-data
//! `HttpRequest`, lets the [`Transport`] execute the round-trip, and decodes
//! the `HttpResponse`, so request building stays unit-testable without a
//! network.
//!
//! Failures never reach the caller: every operation converts any
//! [`ApiError`] into a per-operation fallback value (empty vec or `None`)
//! and records one `<operation> failed: <reason>` line in the message sink.
//! The only observable traces of a failure are that line and the missing
//! data.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::messages::MessageSink;
use crate::transport::Transport;
use crate::types::{Hero, NewHero};

/// Asynchronous client for the hero resource endpoint.
///
/// Every operation resolves to a value — on failure it resolves to the
/// documented fallback instead of an error. Outcomes, successful or not,
/// are reported as one line in the injected message sink, prefixed with
/// `HeroClient: `.
#[derive(Clone)]
pub struct HeroClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    messages: Arc<dyn MessageSink>,
}

impl HeroClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn Transport>,
        messages: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            messages,
        }
    }

    /// Fetch all heroes. Falls back to an empty vec.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        match self.send(self.build_get_heroes(), 200).await {
            Ok(heroes) => {
                self.log("fetched heroes".to_string());
                heroes
            }
            Err(err) => self.recover("get_heroes", err, Vec::new()),
        }
    }

    /// Fetch one hero by id. Falls back to `None`, including on 404.
    pub async fn get_hero(&self, id: u64) -> Option<Hero> {
        match self.send(self.build_get_hero(id), 200).await {
            Ok(hero) => {
                self.log(format!("fetched hero with id: {id}"));
                Some(hero)
            }
            Err(err) => self.recover("get_hero", err, None),
        }
    }

    /// Replace a hero's record. Falls back to `None`.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Hero> {
        let request = match self.build_update_hero(hero) {
            Ok(request) => request,
            Err(err) => return self.recover("update_hero", err, None),
        };
        match self.send(request, 200).await {
            Ok(updated) => {
                // Write-op lines keep the legacy " : " spacing that message
                // consumers match on.
                self.log(format!("updated hero with id : {}", hero.id));
                Some(updated)
            }
            Err(err) => self.recover("update_hero", err, None),
        }
    }

    /// Create a hero; the server assigns the id. Falls back to `None`.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        let request = match self.build_add_hero(hero) {
            Ok(request) => request,
            Err(err) => return self.recover("add_hero", err, None),
        };
        match self.send::<Hero>(request, 201).await {
            Ok(created) => {
                self.log(format!("added hero with id : {}", created.id));
                Some(created)
            }
            Err(err) => self.recover("add_hero", err, None),
        }
    }

    /// Delete a hero; the server echoes the deleted record back. Falls back
    /// to `None`.
    pub async fn delete_hero(&self, hero: &Hero) -> Option<Hero> {
        match self.send(self.build_delete_hero(hero.id), 200).await {
            Ok(deleted) => {
                self.log(format!("deleted hero with id : {}", hero.id));
                Some(deleted)
            }
            Err(err) => self.recover("delete_hero", err, None),
        }
    }

    /// Fetch heroes whose name contains `term`. A blank (trimmed-empty)
    /// term short-circuits to an empty vec without any transport call.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        match self
            .send::<Vec<Hero>>(self.build_search_heroes(term), 200)
            .await
        {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(format!("found no heroes matching {term}"));
                } else {
                    self.log(format!("found heroes matching {term}"));
                }
                heroes
            }
            Err(err) => self.recover("search_heroes", err, Vec::new()),
        }
    }

    fn build_get_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn build_get_hero(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    // The update endpoint takes the full record at the collection path; the
    // id travels in the body, not the URL.
    fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/heroes", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/heroes", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    fn build_delete_hero(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/heroes/{id}", self.base_url),
            headers: json_headers(),
            body: None,
        }
    }

    fn build_search_heroes(&self, term: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes?name={term}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Execute one round-trip and decode the body, expecting `expected`.
    async fn send<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        expected: u16,
    ) -> Result<T, ApiError> {
        let response = self.transport.execute(request).await?;
        check_status(&response, expected)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Swallow `err`: record one failure line and hand back the caller's
    /// fallback value.
    fn recover<T>(&self, operation: &str, err: ApiError, fallback: T) -> T {
        warn!(operation, error = %err, "hero API request failed");
        self.log(format!("{operation} failed: {err}"));
        fallback
    }

    fn log(&self, message: String) {
        self.messages.add(format!("HeroClient: {message}"));
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map non-expected status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
