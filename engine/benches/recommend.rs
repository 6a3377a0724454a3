// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommendation-system.
//
// recommendation-system is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommendation-system is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommendation-system.  If not, see <http://www.gnu.org/licenses/>.

use controller::Rating;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::Recommender;
use rand::{seq::SliceRandom, thread_rng, Rng};
use rating_register::{
    models::{Movie, User},
    RatingRegister,
};
use std::convert::TryFrom;

fn generate_register(users: i32, movies: i32, per_user: usize) -> (RatingRegister, Vec<User>) {
    let mut rng = thread_rng();

    let users: Vec<_> = (0..users)
        .map(|id| User::new(id, format!("user {}", id)))
        .collect();
    let movies: Vec<_> = (0..movies)
        .map(|id| Movie::new(id, format!("movie {}", id)))
        .collect();

    let mut register = RatingRegister::new();
    for user in &users {
        for movie in movies.choose_multiple(&mut rng, per_user) {
            let rating = Rating::try_from(rng.gen_range(1u8, 6u8)).unwrap();
            register.add_rating(user, movie, rating);
        }
    }

    (register, users)
}

fn warm_start_1000(c: &mut Criterion) {
    let (register, users) = generate_register(1000, 500, 20);
    let recommender = Recommender::with_controller(&register);

    c.bench_function("warm start 1000 users", |bench| {
        bench.iter(|| recommender.recommend_movie(black_box(&users[0])))
    });
}

fn cold_start_1000(c: &mut Criterion) {
    let (register, _) = generate_register(1000, 500, 20);
    let recommender = Recommender::with_controller(&register);
    let newcomer = User::new(-1, "newcomer");

    c.bench_function("cold start 500 movies", |bench| {
        bench.iter(|| recommender.recommend_movie(black_box(&newcomer)))
    });
}

fn similarity_100(c: &mut Criterion) {
    let (register, users) = generate_register(2, 150, 100);
    let recommender = Recommender::with_controller(&register);

    c.bench_function("similarity 100 ratings", |bench| {
        bench.iter(|| recommender.similarity_score(black_box(&users[0]), black_box(&users[1])))
    });
}

criterion_group! {
    name = recommend;
    config = Criterion::default();
    targets = warm_start_1000, cold_start_1000, similarity_100
}

criterion_main!(recommend);
