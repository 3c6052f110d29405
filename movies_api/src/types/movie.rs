//! Movie records, both as the API nests them and as the table shows them.

use serde::{Deserialize, Serialize};

use super::meta::Relation;

/// Flat movie record handed to the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub release_year: i32,
    /// Display name of the linked director, resolved at normalization time.
    pub director: String,
}

/// Attribute object of a movie entity.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MovieAttributes {
    pub name: String,

    pub release_year: i32,

    /// Present only when the request populated the `director` relation.
    pub director: Option<Relation<DirectorAttributes>>,
}

impl MovieAttributes {
    /// Walks `director.data.attributes.name`, returning `None` when any step is absent.
    pub fn director_name(&self) -> Option<&str> {
        self.director
            .as_ref()?
            .data
            .as_ref()
            .map(|related| related.attributes.name.as_str())
    }
}

/// Attribute object of a director entity.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DirectorAttributes {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(json: serde_json::Value) -> MovieAttributes {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn director_name_resolves_nested_path() {
        let attrs = attributes(serde_json::json!({
            "name": "Alien",
            "releaseYear": 1979,
            "director": {"data": {"id": 3, "attributes": {"name": "Ridley Scott"}}}
        }));
        assert_eq!(attrs.director_name(), Some("Ridley Scott"));
    }

    #[test]
    fn director_name_absent_when_relation_is_null() {
        let attrs = attributes(serde_json::json!({
            "name": "Alien",
            "releaseYear": 1979,
            "director": {"data": null}
        }));
        assert_eq!(attrs.director_name(), None);
    }

    #[test]
    fn director_name_absent_when_not_populated() {
        let attrs = attributes(serde_json::json!({
            "name": "Alien",
            "releaseYear": 1979
        }));
        assert_eq!(attrs.director_name(), None);
    }

    #[test]
    fn movie_serializes_camel_case() {
        let movie = Movie {
            id: 1,
            name: "A".to_string(),
            release_year: 2000,
            director: "D1".to_string(),
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["releaseYear"], 2000);
        assert!(value.get("release_year").is_none());
    }
}
