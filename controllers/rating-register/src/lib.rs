// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod models;

use crate::models::{Movie, User};
use anyhow::Error;
use config::Dataset;
use controller::{error::ErrorKind, Controller, Rating, Ratings};
use std::collections::HashMap;
use std::convert::TryFrom;

/// In-memory store of who rated what.
///
/// Users and movies are registered lazily, the first time they take part
/// in a rating, and are never removed. Iteration over `users` and `movies`
/// follows that first-rating order.
#[derive(Debug, Clone, Default)]
pub struct RatingRegister {
    user_movies: HashMap<i32, Vec<Movie>>,
    movie_ratings: HashMap<i32, Ratings<i32>>,

    movies: Vec<Movie>,
    users: Vec<User>,
}

impl RatingRegister {
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a register from a seed dataset, ratings are applied in the
    /// order they're listed.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, Error> {
        let users: HashMap<_, _> = dataset
            .users
            .iter()
            .map(|record| (record.id, User::new(record.id, record.name.as_str())))
            .collect();

        let movies: HashMap<_, _> = dataset
            .movies
            .iter()
            .map(|record| (record.id, Movie::new(record.id, record.title.as_str())))
            .collect();

        let mut register = Self::new();
        for record in &dataset.ratings {
            let user = users
                .get(&record.user)
                .ok_or_else(|| ErrorKind::NotFoundById(record.user.to_string()))?;

            let movie = movies
                .get(&record.movie)
                .ok_or_else(|| ErrorKind::NotFoundById(record.movie.to_string()))?;

            let rating = Rating::try_from(record.score)?;
            register.add_rating(user, movie, rating);
        }

        log::info!(
            "Loaded {} ratings from {} users on {} movies",
            register.len(),
            register.users.len(),
            register.movies.len()
        );

        Ok(register)
    }

    /// Record that `user` rated `movie`, a previous rating on the same pair
    /// gets overwritten.
    pub fn add_rating(&mut self, user: &User, movie: &Movie, rating: Rating) {
        let movies = &mut self.movies;
        let ratings = self.movie_ratings.entry(movie.id()).or_insert_with(|| {
            log::debug!("Registering movie id({})", movie.id());
            movies.push(movie.clone());
            Ratings::new()
        });

        ratings.insert(user.id(), rating);

        let users = &mut self.users;
        self.user_movies
            .entry(user.id())
            .or_insert_with(|| {
                log::debug!("Registering user id({})", user.id());
                users.push(user.clone());
                Vec::new()
            })
            .push(movie.clone());

        log::trace!(
            "User id({}) rated movie id({}) with {}",
            user.id(),
            movie.id(),
            rating
        );
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn user_movies(&self, user: &User) -> &[Movie] {
        self.user_movies
            .get(&user.id())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn movie_ratings(&self, movie: &Movie) -> Ratings<i32> {
        self.movie_ratings
            .get(&movie.id())
            .cloned()
            .unwrap_or_default()
    }

    pub fn average_rating(&self, movie: &Movie) -> f64 {
        Controller::average_rating(self, movie)
    }

    /// Number of (movie, user) pairs with a current rating
    pub fn len(&self) -> usize {
        self.movie_ratings.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.movie_ratings.is_empty()
    }
}

impl Controller for RatingRegister {
    type User = User;
    type Item = Movie;

    fn users(&self) -> &[User] {
        &self.users
    }

    fn items(&self) -> &[Movie] {
        &self.movies
    }

    fn user_items(&self, user: &User) -> &[Movie] {
        self.user_movies(user)
    }

    fn item_ratings(&self, item: &Movie) -> Ratings<i32> {
        self.movie_ratings(item)
    }

    fn rating(&self, user: &User, item: &Movie) -> Option<Rating> {
        self.movie_ratings.get(&item.id())?.get(&user.id()).copied()
    }
}
