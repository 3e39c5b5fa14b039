use std::fmt;

use serde::{Deserialize, Serialize};

/// The author of a book
///
/// Authors compare by value: two records with the same name, nationality and
/// date of birth are the same author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Author {
    /// Full name
    name: String,
    /// Nationality, free-form
    nationality: String,
    /// Date of birth, free-form
    date_of_birth: String,
}

impl Author {
    /// Create a new author
    #[must_use]
    pub fn new(name: &str, nationality: &str, date_of_birth: &str) -> Self {
        Self {
            name: name.to_string(),
            nationality: nationality.to_string(),
            date_of_birth: date_of_birth.to_string(),
        }
    }

    /// Full name of the author
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nationality of the author
    #[must_use]
    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    /// Date of birth of the author
    #[must_use]
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nNationality: {}\nDate of Birth: {}",
            self.name, self.nationality, self.date_of_birth
        )
    }
}
