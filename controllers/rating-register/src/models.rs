// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod movies;
pub mod users;

pub use movies::Movie;
pub use users::User;
