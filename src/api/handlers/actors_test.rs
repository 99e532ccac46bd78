//! Integration tests for Actor API endpoints.

use axum::{Router, http::StatusCode};
use serde_json::{Value, json};

use super::test_helpers::{create, get, json_body, test_app};

fn names(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect()
}

/// Two movies in different genres sharing one actor.
///
/// Returns (action_id, drama_id, heat_id, insider_id).
async fn seed_cast(app: &Router) -> (i64, i64, i64, i64) {
    let action = create(app, "/api/genres/", json!({"name": "Action"})).await;
    let drama = create(app, "/api/genres/", json!({"name": "Drama"})).await;
    let director = create(app, "/api/directors/", json!({"name": "Michael Mann"})).await;

    let pacino = create(app, "/api/actors/", json!({"name": "Al Pacino"})).await;
    let de_niro = create(app, "/api/actors/", json!({"name": "Robert De Niro"})).await;
    let crowe = create(app, "/api/actors/", json!({"name": "Russell Crowe"})).await;
    create(app, "/api/actors/", json!({"name": "Uncast"})).await;

    let heat = create(
        app,
        "/api/movies/",
        json!({
            "title": "Heat",
            "release_year": 1995,
            "director_id": director["id"],
            "actor_ids": [pacino["id"], de_niro["id"]],
            "genre_ids": [action["id"]]
        }),
    )
    .await;
    let insider = create(
        app,
        "/api/movies/",
        json!({
            "title": "The Insider",
            "release_year": 1999,
            "director_id": director["id"],
            "actor_ids": [pacino["id"], crowe["id"]],
            "genre_ids": [drama["id"]]
        }),
    )
    .await;

    (
        action["id"].as_i64().unwrap(),
        drama["id"].as_i64().unwrap(),
        heat["id"].as_i64().unwrap(),
        insider["id"].as_i64().unwrap(),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_actor() {
    let app = test_app().await;

    let created = create(
        &app,
        "/api/actors/",
        json!({"name": "Leonardo DiCaprio", "birth_year": 1974}),
    )
    .await;

    let response = get(&app, &format!("/api/actors/{}", created["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["name"], "Leonardo DiCaprio");
    assert_eq!(body["birth_year"], 1974);
    assert!(body["bio"].is_null());
    assert_eq!(body["movies"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_actor_lists_filmography() {
    let app = test_app().await;
    seed_cast(&app).await;

    let body = json_body(get(&app, "/api/actors/1").await).await;
    assert_eq!(body["name"], "Al Pacino");

    let titles: Vec<&str> = body["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Heat", "The Insider"]);
    assert_eq!(body["movies"][0]["director"]["name"], "Michael Mann");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_actors_without_filters_returns_all() {
    let app = test_app().await;
    seed_cast(&app).await;

    let list = json_body(get(&app, "/api/actors/").await).await;
    assert_eq!(
        names(&list),
        vec!["Al Pacino", "Robert De Niro", "Russell Crowe", "Uncast"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn list_actors_by_movie() {
    let app = test_app().await;
    let (_, _, heat, _) = seed_cast(&app).await;

    let list = json_body(get(&app, &format!("/api/actors/?movie_id={}", heat)).await).await;
    assert_eq!(names(&list), vec!["Al Pacino", "Robert De Niro"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_actors_by_genre_returns_each_actor_once() {
    let app = test_app().await;
    let (action, drama, _, _) = seed_cast(&app).await;

    let list = json_body(get(&app, &format!("/api/actors/?genre_id={}", action)).await).await;
    assert_eq!(names(&list), vec!["Al Pacino", "Robert De Niro"]);

    let list = json_body(get(&app, &format!("/api/actors/?genre_id={}", drama)).await).await;
    assert_eq!(names(&list), vec!["Al Pacino", "Russell Crowe"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_actors_by_movie_and_genre_intersects() {
    let app = test_app().await;
    let (action, drama, heat, insider) = seed_cast(&app).await;

    // Pacino is in The Insider and also in Heat, an Action movie
    let list = json_body(
        get(
            &app,
            &format!("/api/actors/?movie_id={}&genre_id={}", insider, action),
        )
        .await,
    )
    .await;
    assert_eq!(names(&list), vec!["Al Pacino"]);

    // Pacino's Insider credit qualifies him for Drama, De Niro has none
    let list = json_body(
        get(
            &app,
            &format!("/api/actors/?movie_id={}&genre_id={}", heat, drama),
        )
        .await,
    )
    .await;
    assert_eq!(names(&list), vec!["Al Pacino"]);

    // A cast with no credits in the genre
    let uncast = json_body(get(&app, "/api/actors/4").await).await;
    let director = create(&app, "/api/directors/", json!({"name": "Unknown"})).await;
    let short = create(
        &app,
        "/api/movies/",
        json!({
            "title": "Short",
            "release_year": 2001,
            "director_id": director["id"],
            "actor_ids": [uncast["id"]]
        }),
    )
    .await;
    let list = json_body(
        get(
            &app,
            &format!("/api/actors/?movie_id={}&genre_id={}", short["id"], action),
        )
        .await,
    )
    .await;
    assert_eq!(list, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_filter_values_mean_no_filter() {
    let app = test_app().await;
    seed_cast(&app).await;

    let response = get(&app, "/api/actors/?movie_id=&genre_id=").await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = json_body(response).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn non_numeric_filter_is_rejected() {
    let app = test_app().await;

    let response = get(&app, "/api/actors/?movie_id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_actor_returns_404() {
    let app = test_app().await;

    let response = get(&app, "/api/actors/3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body, json!({"detail": "Actor not found"}));
}
