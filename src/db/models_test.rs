//! Tests for domain models.

use crate::db::models::*;

fn sample_summary() -> MovieSummary {
    MovieSummary {
        id: 1,
        title: "Inception".to_string(),
        release_year: 2010,
        synopsis: None,
        duration: Some(148),
        director_id: Some(3),
        director: Some(Director {
            id: 3,
            name: "Christopher Nolan".to_string(),
            birth_year: Some(1970),
            bio: None,
        }),
    }
}

#[test]
fn movie_detail_from_parts_keeps_summary_fields() {
    let actor = Actor {
        id: 5,
        name: "Leonardo DiCaprio".to_string(),
        birth_year: Some(1974),
        bio: None,
    };
    let detail = MovieDetail::from_parts(sample_summary(), vec![actor.clone()], vec![]);

    assert_eq!(detail.id, 1);
    assert_eq!(detail.title, "Inception");
    assert_eq!(detail.duration, Some(148));
    assert_eq!(detail.director_id, Some(3));
    assert_eq!(detail.director.as_ref().map(|d| d.name.as_str()), Some("Christopher Nolan"));
    assert_eq!(detail.actors, vec![actor]);
    assert!(detail.genres.is_empty());
}

#[test]
fn new_movie_deserializes_without_association_ids() {
    let movie: NewMovie =
        serde_json::from_str(r#"{"title": "Heat", "release_year": 1995}"#).unwrap();
    assert!(movie.actor_ids.is_empty());
    assert!(movie.genre_ids.is_empty());
    assert_eq!(movie.director_id, None);
}

#[test]
fn empty_queries_report_empty() {
    assert!(ActorQuery::default().is_empty());
    assert!(MovieQuery::default().is_empty());

    let query = MovieQuery {
        release_year: Some(2010),
        ..Default::default()
    };
    assert!(!query.is_empty());
}
