use std::fmt;

use serde::{Deserialize, Serialize};

/// A genre of book, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Genre {
    /// Short name, e.g. "Mystery"
    name: String,
    /// Longer description
    description: String,
}

impl Genre {
    /// Create a new genre
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self { name: name.to_string(), description: description.to_string() }
    }

    /// Name of the genre
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description of the genre
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nDescription: {}", self.name, self.description)
    }
}
