use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TUTORIALS_PREFIX: &str = "tutorials/";
const TUTORIAL_SUFFIX: &str = ".json";

/// A tutorial as stored in the bucket and returned over the API.
///
/// An `id` of zero means the tutorial has not been assigned an id yet.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
pub struct Tutorial {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub published: bool,
}

impl Tutorial {
    pub fn new(title: &str, description: &str, published: bool) -> Self {
        Self {
            id: 0,
            title: title.to_owned(),
            description: description.to_owned(),
            published,
        }
    }

    pub fn with_id(self, id: u64) -> Self {
        Self { id, ..self }
    }

    pub fn is_unassigned(&self) -> bool {
        self.id == 0
    }

    pub fn storage_key(&self) -> String {
        storage_key(self.id)
    }
}

pub fn storage_key(id: u64) -> String {
    format!("{TUTORIALS_PREFIX}{id}{TUTORIAL_SUFFIX}")
}

pub fn parse_storage_key(key: &str) -> Option<u64> {
    key.strip_prefix(TUTORIALS_PREFIX)?
        .strip_suffix(TUTORIAL_SUFFIX)?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key(42), "tutorials/42.json");

        let tutorial = Tutorial {
            id: 7,
            ..Tutorial::default()
        };
        assert_eq!(tutorial.storage_key(), "tutorials/7.json");
    }

    #[test]
    fn test_parse_storage_key() {
        assert_eq!(parse_storage_key("tutorials/42.json"), Some(42));
        assert_eq!(parse_storage_key(&storage_key(u64::MAX)), Some(u64::MAX));

        assert_eq!(parse_storage_key("tutorials/42.yaml"), None);
        assert_eq!(parse_storage_key("other/42.json"), None);
        assert_eq!(parse_storage_key("tutorials/abc.json"), None);
        assert_eq!(parse_storage_key("tutorials/-1.json"), None);
        assert_eq!(parse_storage_key("tutorials/.json"), None);
    }

    #[test]
    fn test_new_is_unassigned() {
        let tutorial = Tutorial::new("Rust", "ownership", true);

        assert!(tutorial.is_unassigned());
        assert_eq!(tutorial.title, "Rust");
        assert!(tutorial.published);
    }
}
