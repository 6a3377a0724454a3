// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use config::Dataset;
use controller::{error::ErrorKind, Entity, SearchBy};
use rating_register::models::{Movie, User};

/// Every user and movie known to the shell, rated or not. The register only
/// learns about them once they take part in a rating.
#[derive(Debug, Default)]
pub struct Catalog {
    users: Vec<User>,
    movies: Vec<Movie>,
}

fn find<'a, E>(entities: &'a [E], by: &SearchBy) -> Result<&'a E, ErrorKind>
where
    E: Entity,
    E::Id: ToString,
{
    entities
        .iter()
        .find(|entity| by.matches(*entity))
        .ok_or_else(|| match by {
            SearchBy::Id(id) => ErrorKind::NotFoundById(id.clone()),
            SearchBy::Name(name) => ErrorKind::NotFoundByName(name.clone()),
        })
}

fn insert<E>(entities: &mut Vec<E>, entity: E) -> Result<&E, ErrorKind>
where
    E: Entity,
    E::Id: PartialEq + ToString,
{
    let id = entity.get_id();
    if entities.iter().any(|other| other.get_id() == id) {
        return Err(ErrorKind::DuplicatedId(id.to_string()));
    }

    entities.push(entity);
    Ok(&entities[entities.len() - 1])
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Self, Error> {
        let mut catalog = Self::new();

        for record in &dataset.users {
            catalog.add_user(User::new(record.id, record.name.as_str()))?;
        }

        for record in &dataset.movies {
            catalog.add_movie(Movie::new(record.id, record.title.as_str()))?;
        }

        Ok(catalog)
    }

    pub fn add_user(&mut self, user: User) -> Result<&User, ErrorKind> {
        insert(&mut self.users, user)
    }

    pub fn add_movie(&mut self, movie: Movie) -> Result<&Movie, ErrorKind> {
        insert(&mut self.movies, movie)
    }

    pub fn user(&self, by: &SearchBy) -> Result<&User, ErrorKind> {
        find(&self.users, by)
    }

    pub fn movie(&self, by: &SearchBy) -> Result<&Movie, ErrorKind> {
        find(&self.movies, by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_id_and_name() -> Result<(), Error> {
        let mut catalog = Catalog::new();
        catalog.add_user(User::new(1, "Patrick C"))?;
        catalog.add_movie(Movie::new(7, "Alien"))?;

        assert_eq!(catalog.user(&SearchBy::name("Patrick C"))?.id(), 1);
        assert_eq!(catalog.movie(&SearchBy::id("7"))?.title(), "Alien");

        Ok(())
    }

    #[test]
    fn missing_entities() {
        let catalog = Catalog::new();

        let err = catalog.user(&SearchBy::id("3")).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't found entity with id(3)");

        let err = catalog.movie(&SearchBy::name("Alien")).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't found entity with name(Alien)");
    }

    #[test]
    fn duplicated_ids_are_rejected() -> Result<(), Error> {
        let mut catalog = Catalog::new();
        catalog.add_movie(Movie::new(1, "Alien"))?;

        let err = catalog.add_movie(Movie::new(1, "Aliens")).unwrap_err();
        assert!(matches!(err, ErrorKind::DuplicatedId(id) if id == "1"));
        assert_eq!(catalog.movie(&SearchBy::id("1"))?.title(), "Alien");

        Ok(())
    }
}
