//! Full CRUD lifecycle against the live mock hero server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP through `ReqwestTransport`. Because the client
//! swallows failures, assertions cover both the returned values and the
//! message-log lines the operations leave behind.

use std::sync::Arc;

use hero_core::{Hero, HeroClient, MessageLog, NewHero, ReqwestTransport};

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> (HeroClient, Arc<MessageLog>) {
    let messages = Arc::new(MessageLog::new());
    let client = HeroClient::new(base_url, Arc::new(ReqwestTransport::new()), messages.clone());
    (client, messages)
}

#[tokio::test]
async fn crud_lifecycle() {
    let base_url = spawn_server().await;
    let (client, messages) = client(&base_url);

    // Step 1: list — should be empty.
    let heroes = client.get_heroes().await;
    assert!(heroes.is_empty(), "expected empty list");

    // Step 2: create a hero; the server assigns the first id.
    let created = client
        .add_hero(&NewHero {
            name: "Integration Hero".to_string(),
        })
        .await
        .expect("create should succeed");
    assert_eq!(created.id, 11);
    assert_eq!(created.name, "Integration Hero");

    // Step 3: get the created hero.
    let fetched = client.get_hero(created.id).await.expect("hero should exist");
    assert_eq!(fetched, created);

    // Step 4: update the name.
    let renamed = Hero {
        id: created.id,
        name: "Renamed Hero".to_string(),
    };
    let updated = client.update_hero(&renamed).await.expect("update should succeed");
    assert_eq!(updated, renamed);

    // Step 5: list — should have one item.
    let heroes = client.get_heroes().await;
    assert_eq!(heroes, vec![renamed.clone()]);

    // Step 6: search with a matching and a non-matching term.
    let found = client.search_heroes("renamed").await;
    assert_eq!(found, vec![renamed.clone()]);
    let none = client.search_heroes("nobody").await;
    assert!(none.is_empty());

    // Step 7: delete — the server echoes the removed record.
    let deleted = client.delete_hero(&renamed).await.expect("delete should succeed");
    assert_eq!(deleted, renamed);

    // Step 8: get after delete — swallowed 404 surfaces as None.
    assert!(client.get_hero(renamed.id).await.is_none());

    // Step 9: list — empty again.
    assert!(client.get_heroes().await.is_empty());

    let lines = messages.messages();
    assert_eq!(
        lines,
        vec![
            "HeroClient: fetched heroes",
            "HeroClient: added hero with id : 11",
            "HeroClient: fetched hero with id: 11",
            "HeroClient: updated hero with id : 11",
            "HeroClient: fetched heroes",
            "HeroClient: found heroes matching renamed",
            "HeroClient: found no heroes matching nobody",
            "HeroClient: deleted hero with id : 11",
            "HeroClient: get_hero failed: resource not found",
            "HeroClient: fetched heroes",
        ]
    );
}

#[tokio::test]
async fn unreachable_server_yields_fallbacks_not_errors() {
    // Port from a listener we immediately drop — nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let (client, messages) = client(&base_url);

    assert!(client.get_heroes().await.is_empty());
    assert!(client.get_hero(11).await.is_none());
    assert!(client
        .add_hero(&NewHero {
            name: "Nobody".to_string()
        })
        .await
        .is_none());

    let lines = messages.messages();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("HeroClient: get_heroes failed:"));
    assert!(lines[1].starts_with("HeroClient: get_hero failed:"));
    assert!(lines[2].starts_with("HeroClient: add_hero failed:"));
}
