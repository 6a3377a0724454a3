// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::entity::Entity;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchBy {
    Id(String),
    Name(String),
}

impl SearchBy {
    pub fn id(id: &str) -> Self {
        Self::Id(id.into())
    }

    pub fn name(name: &str) -> Self {
        Self::Name(name.into())
    }

    /// Whether `entity` is the one this criteria points to
    pub fn matches<E>(&self, entity: &E) -> bool
    where
        E: Entity,
        E::Id: ToString,
    {
        match self {
            SearchBy::Id(id) => entity.get_id().to_string() == *id,
            SearchBy::Name(name) => entity.get_name() == name.as_str(),
        }
    }
}

impl Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBy::Id(id) => write!(f, "id({})", id),
            SearchBy::Name(name) => write!(f, "name({})", name),
        }
    }
}
