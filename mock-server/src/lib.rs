//! In-memory hero backend used for development and integration tests.
//!
//! Implements the REST contract the client assumes: list with optional
//! case-insensitive name filtering, get/delete by id, create with
//! server-assigned ids, and full-record update at the collection path (the
//! id travels in the body). Delete echoes the removed record in the
//! response body.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize, Default)]
pub struct ListParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<u64, Hero>>>;

/// The seed hero set served by the standalone binary, ids 11..=20.
pub fn mock_heroes() -> Vec<Hero> {
    [
        (11, "Dr Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Router over an empty store. Tests control the state themselves.
pub fn app() -> Router {
    router(HashMap::new())
}

/// Router pre-populated with [`mock_heroes`].
pub fn app_with_seed() -> Router {
    router(mock_heroes().into_iter().map(|h| (h.id, h)).collect())
}

fn router(heroes: HashMap<u64, Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(heroes));
    Router::new()
        .route("/heroes", get(list_heroes).post(add_hero).put(update_hero))
        .route("/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let mut result: Vec<Hero> = match params.name {
        Some(term) => {
            let term = term.to_lowercase();
            heroes
                .values()
                .filter(|h| h.name.to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        None => heroes.values().cloned().collect(),
    };
    // HashMap iteration order is arbitrary; keep responses deterministic.
    result.sort_by_key(|h| h.id);
    Json(result)
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn add_hero(State(db): State<Db>, Json(input): Json<NewHero>) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    // Seed ids start at 11; new ids continue from the current maximum.
    let id = heroes.keys().max().map_or(11, |max| max + 1);
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    debug!(id, name = %hero.name, "hero created");
    (StatusCode::CREATED, Json(hero))
}

async fn update_hero(
    State(db): State<Db>,
    Json(input): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    let hero = heroes.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    hero.name = input.name;
    debug!(id = hero.id, "hero updated");
    Ok(Json(hero.clone()))
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    let removed = heroes.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(id, "hero deleted");
    Ok(Json(removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_serializes_to_json() {
        let hero = Hero {
            id: 11,
            name: "Dr Nice".to_string(),
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["id"], 11);
        assert_eq!(json["name"], "Dr Nice");
    }

    #[test]
    fn hero_roundtrips_through_json() {
        let hero = Hero {
            id: 15,
            name: "Magneta".to_string(),
        };
        let json = serde_json::to_string(&hero).unwrap();
        let back: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hero);
    }

    #[test]
    fn new_hero_rejects_missing_name() {
        let result: Result<NewHero, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn mock_heroes_covers_ids_11_through_20() {
        let heroes = mock_heroes();
        assert_eq!(heroes.len(), 10);
        assert_eq!(heroes.first().map(|h| h.id), Some(11));
        assert_eq!(heroes.last().map(|h| h.id), Some(20));
        assert_eq!(heroes[0].name, "Dr Nice");
    }
}
