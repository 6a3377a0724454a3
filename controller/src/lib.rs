// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod rating;
pub mod searchby;

#[macro_export]
macro_rules! eid {
    ($e:ty) => {
        <$e as $crate::entity::Entity>::Id
    };
}

#[macro_export]
macro_rules! ratings {
    ($e:ty) => {
        $crate::Ratings<$crate::eid!($e)>
    };
}

use std::collections::HashMap;

pub use entity::{Entity, ToTable};
pub use rating::{Rating, NOT_RATED};
pub use searchby::SearchBy;

pub type Ratings<K, Value = Rating> = HashMap<K, Value>;

/// Read side of a ratings store, everything a recommender is allowed to see.
pub trait Controller {
    type User: Entity;
    type Item: Entity;

    /// Every user with at least one rating, in first-rating order
    fn users(&self) -> &[Self::User];

    /// Every item rated by at least one user, in first-rating order
    fn items(&self) -> &[Self::Item];

    /// Items rated by `user` in rating order, re-rated items show up once per rating
    fn user_items(&self, user: &Self::User) -> &[Self::Item];

    /// Maps User::Id => Rating for everyone who rated `item`
    fn item_ratings(&self, item: &Self::Item) -> ratings!(Self::User);

    /// Current rating of `user` on `item`, if any
    fn rating(&self, user: &Self::User, item: &Self::Item) -> Option<Rating>;

    /// Mean of all the ratings stored for `item`, `NOT_RATED` if there are none
    fn average_rating(&self, item: &Self::Item) -> f64 {
        let ratings = self.item_ratings(item);
        if ratings.is_empty() {
            return NOT_RATED;
        }

        let sum: u32 = ratings.values().map(|rating| rating.value()).sum();
        f64::from(sum) / ratings.len() as f64
    }
}
