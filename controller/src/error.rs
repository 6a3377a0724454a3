// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, DError)]
pub enum ErrorKind {
    #[error("Couldn't found entity with id({0})")]
    NotFoundById(String),

    #[error("Couldn't found entity with name({0})")]
    NotFoundByName(String),

    #[error("Invalid rating {0}, expected a value between 1 and 5")]
    InvalidRating(i64),

    #[error("There's already an entity with id({0})")]
    DuplicatedId(String),
}
