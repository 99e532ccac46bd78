//! Sample catalog data for development databases.

use tracing::{debug, info};

use crate::db::{
    ActorRepository, Database, DbResult, DirectorRepository, GenreRepository, Id,
    MovieRepository, NewActor, NewDirector, NewGenre, NewMovie,
};

/// Result of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Genres were already present, nothing was written.
    AlreadySeeded,
    Seeded {
        genres: usize,
        directors: usize,
        actors: usize,
        movies: usize,
    },
}

const GENRES: [(&str, &str); 8] = [
    ("Action", "High-energy films with intense sequences"),
    ("Drama", "Character-driven narratives exploring human emotions"),
    ("Comedy", "Films designed to entertain and amuse"),
    ("Sci-Fi", "Science fiction and futuristic themes"),
    ("Thriller", "Suspenseful and tension-filled movies"),
    ("Romance", "Love stories and romantic relationships"),
    ("Horror", "Films designed to frighten and create suspense"),
    ("Adventure", "Exciting journeys and quests"),
];

const DIRECTORS: [(&str, i32, &str); 5] = [
    (
        "Christopher Nolan",
        1970,
        "British-American film director known for complex narratives and innovative cinematography",
    ),
    (
        "Quentin Tarantino",
        1963,
        "American director known for stylized violence and pop culture references",
    ),
    (
        "Steven Spielberg",
        1946,
        "American filmmaker and one of the most influential directors in cinema history",
    ),
    (
        "Martin Scorsese",
        1942,
        "American director known for crime films and character studies",
    ),
    (
        "Greta Gerwig",
        1983,
        "American actress and director known for coming-of-age films",
    ),
];

const ACTORS: [(&str, i32, &str); 8] = [
    (
        "Leonardo DiCaprio",
        1974,
        "American actor known for intense dramatic performances",
    ),
    ("Margot Robbie", 1990, "Australian actress known for versatile roles"),
    ("Christian Bale", 1974, "British actor known for physical transformations"),
    (
        "Scarlett Johansson",
        1984,
        "American actress known for action and dramatic roles",
    ),
    (
        "Ryan Gosling",
        1980,
        "Canadian actor known for romantic and dramatic roles",
    ),
    (
        "Emma Stone",
        1988,
        "American actress known for comedy and musical performances",
    ),
    ("Tom Hardy", 1977, "British actor known for intense character portrayals"),
    (
        "Samuel L. Jackson",
        1948,
        "American actor known for memorable character roles",
    ),
];

struct SampleMovie {
    title: &'static str,
    release_year: i32,
    synopsis: &'static str,
    duration: i32,
    /// Index into `DIRECTORS`
    director: usize,
    /// Indices into `ACTORS`
    actors: &'static [usize],
    /// Indices into `GENRES`
    genres: &'static [usize],
}

const MOVIES: [SampleMovie; 5] = [
    SampleMovie {
        title: "Inception",
        release_year: 2010,
        synopsis: "A thief who steals corporate secrets through dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        duration: 148,
        director: 0,
        actors: &[0, 3],
        genres: &[0, 3, 4],
    },
    SampleMovie {
        title: "The Dark Knight",
        release_year: 2008,
        synopsis: "Batman must face the Joker, a criminal mastermind who wants to plunge Gotham City into anarchy.",
        duration: 152,
        director: 0,
        actors: &[2, 6],
        genres: &[0, 1, 4],
    },
    SampleMovie {
        title: "Pulp Fiction",
        release_year: 1994,
        synopsis: "The lives of two mob hitmen, a boxer, and others intertwine in four tales of violence and redemption.",
        duration: 154,
        director: 1,
        actors: &[7],
        genres: &[1, 4],
    },
    SampleMovie {
        title: "Barbie",
        release_year: 2023,
        synopsis: "Barbie and Ken leave the perfect world of Barbieland and discover the joys and perils of the real world.",
        duration: 114,
        director: 4,
        actors: &[1, 4],
        genres: &[2, 7],
    },
    SampleMovie {
        title: "The Wolf of Wall Street",
        release_year: 2013,
        synopsis: "The story of Jordan Belfort's rise and fall on Wall Street and his life of crime, corruption and federal investigation.",
        duration: 180,
        director: 3,
        actors: &[0, 1],
        genres: &[1, 2],
    },
];

/// Populate an empty catalog with sample data.
///
/// Does nothing when any genre exists. Each movie is created in its own
/// transaction, so a failure part-way leaves the entities created before it.
pub async fn seed_database<D: Database>(db: &D) -> DbResult<SeedOutcome> {
    if !db.genres().list().await?.is_empty() {
        info!("Database already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut genre_ids: Vec<Id> = Vec::with_capacity(GENRES.len());
    for (name, description) in GENRES {
        let genre = db
            .genres()
            .create(&NewGenre {
                name: name.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
        genre_ids.push(genre.id);
    }

    let mut director_ids: Vec<Id> = Vec::with_capacity(DIRECTORS.len());
    for (name, birth_year, bio) in DIRECTORS {
        let director = db
            .directors()
            .create(&NewDirector {
                name: name.to_string(),
                birth_year: Some(birth_year),
                bio: Some(bio.to_string()),
            })
            .await?;
        director_ids.push(director.id);
    }

    let mut actor_ids: Vec<Id> = Vec::with_capacity(ACTORS.len());
    for (name, birth_year, bio) in ACTORS {
        let actor = db
            .actors()
            .create(&NewActor {
                name: name.to_string(),
                birth_year: Some(birth_year),
                bio: Some(bio.to_string()),
            })
            .await?;
        actor_ids.push(actor.id);
    }

    for sample in &MOVIES {
        let movie = db
            .movies()
            .create(&NewMovie {
                title: sample.title.to_string(),
                release_year: sample.release_year,
                director_id: Some(director_ids[sample.director]),
                synopsis: Some(sample.synopsis.to_string()),
                duration: Some(sample.duration),
                actor_ids: sample.actors.iter().map(|&i| actor_ids[i]).collect(),
                genre_ids: sample.genres.iter().map(|&i| genre_ids[i]).collect(),
            })
            .await?;
        debug!(id = movie.id, title = %movie.title, "seeded movie");
    }

    info!("Database seeded successfully");
    Ok(SeedOutcome::Seeded {
        genres: genre_ids.len(),
        directors: director_ids.len(),
        actors: actor_ids.len(),
        movies: MOVIES.len(),
    })
}
