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

pub mod distances;
pub mod recommendation;

pub use recommendation::{Recommendation, Strategy};

use controller::{eid, Controller, Entity, Rating, NOT_RATED};
use std::fmt::Debug;

pub type UserRecommendation<'a, C> =
    Recommendation<'a, <C as Controller>::Item, eid!(<C as Controller>::User)>;

pub struct Recommender<'a, C>
where
    C: Controller,
{
    controller: &'a C,
}

impl<'a, C> Recommender<'a, C>
where
    C: Controller,
    <C::User as Entity>::Id: PartialEq + Debug,
    <C::Item as Entity>::Id: Debug,
{
    pub fn with_controller(controller: &'a C) -> Self {
        Self { controller }
    }

    /// Title of the movie recommended to `user`, if there's any
    pub fn recommend_movie(&self, user: &C::User) -> Option<String> {
        self.recommend_movie_for(user)
            .map(|recommendation| recommendation.title().to_owned())
    }

    /// Users without ratings get the best rated movie overall, the rest get
    /// one from the reviewer whose ratings are closest to theirs.
    pub fn recommend_movie_for(&self, user: &C::User) -> Option<UserRecommendation<'a, C>> {
        if self.controller.user_items(user).is_empty() {
            log::debug!("User {:?} has no ratings, using cold start", user.get_id());
            self.recommend_movie_new_user()
        } else {
            log::debug!("User {:?} has ratings, using warm start", user.get_id());
            self.recommend_movie_existing_user(user)
        }
    }

    /// Movie with the highest positive average, the first one wins ties
    pub fn recommend_movie_new_user(&self) -> Option<UserRecommendation<'a, C>> {
        let controller: &'a C = self.controller;

        let mut best: Option<(&'a C::Item, f64)> = None;
        for item in controller.items() {
            let average = controller.average_rating(item);
            let best_average = best.map_or(NOT_RATED, |(_, average)| average);

            if average > best_average {
                best = Some((item, average));
            }
        }

        best.map(|(item, average)| Recommendation {
            item,
            strategy: Strategy::ColdStart { average },
        })
    }

    /// Walks every other user, each time a strictly more similar reviewer
    /// shows up its best unwatched movie replaces the current pick. A
    /// reviewer with nothing left to offer keeps the previous pick.
    pub fn recommend_movie_existing_user(
        &self,
        user: &C::User,
    ) -> Option<UserRecommendation<'a, C>> {
        let controller: &'a C = self.controller;
        let user_id = user.get_id();

        let mut best = None;
        let mut best_score: Option<u32> = None;

        for reviewer in controller.users() {
            let reviewer_id = reviewer.get_id();
            if reviewer_id == user_id {
                continue;
            }

            let score = match self.similarity_score(user, reviewer) {
                Some(score) => score,
                None => continue,
            };

            if best_score.map_or(false, |best_score| score >= best_score) {
                continue;
            }

            log::debug!(
                "Reviewer {:?} is the closest so far with score {}",
                reviewer_id,
                score
            );

            best_score = Some(score);
            if let Some((item, rating)) = self.recommend_unwatched_movie(user, reviewer) {
                log::debug!("Picking item {:?} rated {}", item.get_id(), rating);

                best = Some(Recommendation {
                    item,
                    strategy: Strategy::WarmStart {
                        reviewer: reviewer_id,
                        similarity: score,
                        rating,
                    },
                });
            }
        }

        best
    }

    pub fn similarity_score(&self, user_a: &C::User, user_b: &C::User) -> Option<u32> {
        distances::similarity_score(self.controller, user_a, user_b)
    }

    /// Highest rated movie of `reviewer` that `user` hasn't rated, the first
    /// one in the reviewer's rating order wins ties
    pub fn recommend_unwatched_movie(
        &self,
        user: &C::User,
        reviewer: &C::User,
    ) -> Option<(&'a C::Item, Rating)> {
        let controller: &'a C = self.controller;

        let mut best: Option<(&'a C::Item, Rating)> = None;
        for item in controller.user_items(reviewer) {
            if controller.rating(user, item).is_some() {
                continue;
            }

            let rating = match controller.rating(reviewer, item) {
                Some(rating) => rating,
                None => continue,
            };

            if best.map_or(true, |(_, best_rating)| rating > best_rating) {
                best = Some((item, rating));
            }
        }

        best
    }
}
