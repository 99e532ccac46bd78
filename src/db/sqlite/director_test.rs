//! Tests for SqliteDirectorRepository.

use crate::db::{
    Database, DbError, DirectorRepository, MovieRepository, NewDirector, NewMovie, SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_director() {
    let db = setup_db().await;
    let repo = db.directors();

    let created = repo
        .create(&NewDirector {
            name: "Christopher Nolan".to_string(),
            birth_year: Some(1970),
            bio: Some("British-American film director".to_string()),
        })
        .await
        .expect("Create should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.name, "Christopher Nolan");
    assert_eq!(retrieved.birth_year, Some(1970));
    assert_eq!(
        retrieved.bio,
        Some("British-American film director".to_string())
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn director_optional_fields_stay_empty() {
    let db = setup_db().await;
    let repo = db.directors();

    let created = repo
        .create(&NewDirector {
            name: "Anonymous".to_string(),
            ..Default::default()
        })
        .await
        .expect("Create should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.birth_year, None);
    assert_eq!(retrieved.bio, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn director_names_need_not_be_unique() {
    let db = setup_db().await;
    let repo = db.directors();

    let director = NewDirector {
        name: "John Smith".to_string(),
        ..Default::default()
    };
    let first = repo.create(&director).await.expect("Create should succeed");
    let second = repo.create(&director).await.expect("Create should succeed");

    assert_ne!(first.id, second.id);
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_director_returns_not_found() {
    let db = setup_db().await;

    let result = db.directors().get(42).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));

    let result = db.directors().get_with_movies(42).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_with_movies_lists_only_their_movies() {
    let db = setup_db().await;

    let nolan = db
        .directors()
        .create(&NewDirector {
            name: "Christopher Nolan".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let tarantino = db
        .directors()
        .create(&NewDirector {
            name: "Quentin Tarantino".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    for (title, year, director_id) in [
        ("Inception", 2010, nolan.id),
        ("Pulp Fiction", 1994, tarantino.id),
        ("The Dark Knight", 2008, nolan.id),
    ] {
        db.movies()
            .create(&NewMovie {
                title: title.to_string(),
                release_year: year,
                director_id: Some(director_id),
                ..Default::default()
            })
            .await
            .expect("Create movie should succeed");
    }

    let result = db
        .directors()
        .get_with_movies(nolan.id)
        .await
        .expect("Get should succeed");

    assert_eq!(result.director, nolan);
    let titles: Vec<&str> = result.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Inception", "The Dark Knight"]);
    assert!(
        result
            .movies
            .iter()
            .all(|m| m.director.as_ref() == Some(&nolan))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn get_with_movies_for_director_without_movies() {
    let db = setup_db().await;

    let director = db
        .directors()
        .create(&NewDirector {
            name: "Greta Gerwig".to_string(),
            birth_year: Some(1983),
            bio: None,
        })
        .await
        .unwrap();

    let result = db.directors().get_with_movies(director.id).await.unwrap();
    assert!(result.movies.is_empty());
}
