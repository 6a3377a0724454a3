// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::catalog::Catalog;
use crate::parser::Statement;
use anyhow::Error;
use config::{Dataset, MovieRecord, RatingRecord, UserRecord};
use controller::{Entity, Rating, ToTable};
use engine::Recommender;
use rating_register::{
    models::{Movie, User},
    RatingRegister,
};
use std::convert::TryFrom;

/// A catalog of known entities plus the register their ratings go into.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    register: RatingRegister,
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Self, Error> {
        Ok(Self {
            catalog: Catalog::from_dataset(dataset)?,
            register: RatingRegister::from_dataset(dataset)?,
        })
    }

    pub fn register(&self) -> &RatingRegister {
        &self.register
    }

    /// Run a statement, returning what should be shown to the user
    pub fn execute(&mut self, statement: Statement) -> Result<String, Error> {
        let output = match statement {
            Statement::CreateUser(id, name) => {
                let user = self.catalog.add_user(User::new(id, name))?;
                format!("Created user {} with id({})", user.name(), user.id())
            }

            Statement::CreateMovie(id, title) => {
                let movie = self.catalog.add_movie(Movie::new(id, title))?;
                format!("Created movie '{}' with id({})", movie.title(), movie.id())
            }

            Statement::Rate(user, movie, score) => {
                let user = self.catalog.user(&user)?;
                let movie = self.catalog.movie(&movie)?;
                let rating = Rating::try_from(score)?;

                self.register.add_rating(user, movie, rating);
                format!("{} rated '{}' with {}", user.name(), movie.title(), rating)
            }

            Statement::Recommend(user) => {
                let user = self.catalog.user(&user)?;
                let recommender = Recommender::with_controller(&self.register);

                match recommender.recommend_movie_for(user) {
                    Some(recommendation) => format!(
                        "Recommended '{}' ({})",
                        recommendation.title(),
                        recommendation.strategy
                    ),
                    None => format!("No recommendation for id({})", user.id()),
                }
            }

            Statement::Average(movie) => {
                let movie = self.catalog.movie(&movie)?;
                let average = self.register.average_rating(movie);

                format!("Average rating of '{}' is {:.2}", movie.title(), average)
            }

            Statement::Similarity(user_a, user_b) => {
                let user_a = self.catalog.user(&user_a)?;
                let user_b = self.catalog.user(&user_b)?;
                let recommender = Recommender::with_controller(&self.register);

                match recommender.similarity_score(user_a, user_b) {
                    Some(score) => format!("Similarity score is {}", score),
                    None => format!(
                        "No movies in common between id({}) and id({})",
                        user_a.id(),
                        user_b.id()
                    ),
                }
            }

            Statement::QueryUser(user) => self.catalog.user(&user)?.to_table().to_string(),

            Statement::QueryMovie(movie) => self.catalog.movie(&movie)?.to_table().to_string(),

            Statement::QueryRatings(movie) => {
                let movie = self.catalog.movie(&movie)?;
                let ratings = self.register.movie_ratings(movie);

                if ratings.is_empty() {
                    format!("No ratings found for id({})", movie.id())
                } else {
                    ratings.to_table().to_string()
                }
            }

            Statement::Watched(user) => {
                let user = self.catalog.user(&user)?;
                let movies = self.register.user_movies(user);

                if movies.is_empty() {
                    format!("No ratings found for id({})", user.id())
                } else {
                    listing(movies)
                }
            }

            Statement::Users => empty_or(listing(self.register.users())),

            Statement::Movies => empty_or(listing(self.register.movies())),
        };

        Ok(output)
    }
}

fn listing<E>(entities: &[E]) -> String
where
    E: Entity,
    E::Id: ToString,
{
    entities
        .iter()
        .map(|entity| format!("id({}) {}", entity.get_id().to_string(), entity.get_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn empty_or(listing: String) -> String {
    if listing.is_empty() {
        "No ratings registered yet".into()
    } else {
        listing
    }
}

/// Three users and three movies, the last user hasn't rated anything.
pub fn demo_dataset() -> Dataset {
    let user = |id: i32, name: &str| UserRecord {
        id,
        name: name.into(),
    };

    let movie = |id: i32, title: &str| MovieRecord {
        id,
        title: title.into(),
    };

    let rating = |user, movie, score| RatingRecord { user, movie, score };

    Dataset {
        users: vec![user(1, "User 1"), user(2, "User 2"), user(3, "User 3")],
        movies: vec![
            movie(1, "Batman Begins"),
            movie(2, "Liar Liar"),
            movie(3, "The Godfather"),
        ],
        ratings: vec![
            rating(1, 1, 5),
            rating(1, 2, 2),
            rating(2, 2, 2),
            rating(2, 3, 4),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;
    use assert_approx_eq::assert_approx_eq;
    use controller::SearchBy;

    fn run(session: &mut Session, line: &str) -> Result<String, Error> {
        let statement = parse_line(line).expect("Valid statement");
        session.execute(statement)
    }

    #[test]
    fn demo_recommendations() -> Result<(), Error> {
        let mut session = Session::from_dataset(&demo_dataset())?;

        let output = run(&mut session, "recommend(id(1))")?;
        assert!(output.starts_with("Recommended 'The Godfather' (warm start"));

        let output = run(&mut session, "recommend(name('User 2'))")?;
        assert!(output.starts_with("Recommended 'Batman Begins' (warm start"));

        let output = run(&mut session, "recommend(id(3))")?;
        assert_eq!(
            output,
            "Recommended 'Batman Begins' (cold start, average rating 5.00)"
        );

        Ok(())
    }

    #[test]
    fn build_from_statements() -> Result<(), Error> {
        let mut session = Session::new();

        run(&mut session, "user(1, 'Ana')")?;
        run(&mut session, "user(2, 'Bob')")?;
        run(&mut session, "movie(10, 'Alien')")?;
        run(&mut session, "movie(20, 'Aliens')")?;

        let output = run(&mut session, "rate(id(1), id(10), 4)")?;
        assert_eq!(output, "Ana rated 'Alien' with 4");

        run(&mut session, "rate(name('Bob'), name('Alien'), 2)")?;
        run(&mut session, "rate(id(2), id(20), 5)")?;

        assert_approx_eq!(
            session
                .register()
                .average_rating(&Movie::new(10, "Alien")),
            3.0
        );

        let output = run(&mut session, "similarity(id(1), id(2))")?;
        assert_eq!(output, "Similarity score is 2");

        let output = run(&mut session, "recommend(id(1))")?;
        assert!(output.starts_with("Recommended 'Aliens'"));

        let output = run(&mut session, "users")?;
        assert_eq!(output, "id(1) Ana\nid(2) Bob");

        Ok(())
    }

    #[test]
    fn invalid_rating_is_rejected() -> Result<(), Error> {
        let mut session = Session::from_dataset(&demo_dataset())?;

        let err = run(&mut session, "rate(id(3), id(1), 6)").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rating 6, expected a value between 1 and 5"
        );
        let user = session.catalog.user(&SearchBy::id("3"))?;
        assert!(session.register().user_movies(user).is_empty());

        Ok(())
    }

    #[test]
    fn unknown_entities() -> Result<(), Error> {
        let mut session = Session::new();

        assert!(run(&mut session, "recommend(id(9))").is_err());
        assert!(run(&mut session, "average(name('Alien'))").is_err());

        Ok(())
    }

    #[test]
    fn empty_listings() -> Result<(), Error> {
        let mut session = Session::new();
        run(&mut session, "user(1, 'Ana')")?;
        run(&mut session, "movie(1, 'Alien')")?;

        assert_eq!(run(&mut session, "movies")?, "No ratings registered yet");
        assert_eq!(
            run(&mut session, "watched(id(1))")?,
            "No ratings found for id(1)"
        );
        assert_eq!(
            run(&mut session, "query_ratings(id(1))")?,
            "No ratings found for id(1)"
        );
        assert_eq!(
            run(&mut session, "recommend(id(1))")?,
            "No recommendation for id(1)"
        );

        Ok(())
    }

    #[test]
    fn watched_keeps_rating_order() -> Result<(), Error> {
        let mut session = Session::from_dataset(&demo_dataset())?;

        run(&mut session, "rate(id(1), id(1), 3)")?;
        assert_eq!(
            run(&mut session, "watched(id(1))")?,
            "id(1) Batman Begins\nid(2) Liar Liar\nid(1) Batman Begins"
        );

        Ok(())
    }
}
