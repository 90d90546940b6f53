//! Sort specification

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The `sort` clause of a query.
///
/// # Example
///
/// ```
/// use igdb_lib::api::query::Sort;
///
/// assert_eq!(Sort::desc("rating").to_string(), "rating desc");
/// assert_eq!(Sort::from("first_release_date asc").to_string(), "first_release_date asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    field: String,
    direction: Option<Direction>,
}

impl Sort {
    /// Sorts ascending on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some(Direction::Asc),
        }
    }

    /// Sorts descending on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some(Direction::Desc),
        }
    }

    /// Uses a sort expression verbatim.
    pub fn raw(expression: impl Into<String>) -> Self {
        Self {
            field: expression.into(),
            direction: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns `true` if there is nothing to sort on.
    pub fn is_empty(&self) -> bool {
        self.field.trim().is_empty()
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{} {}", self.field, direction.as_str()),
            None => f.write_str(&self.field),
        }
    }
}

impl From<&str> for Sort {
    fn from(expression: &str) -> Self {
        Self::raw(expression)
    }
}

impl From<String> for Sort {
    fn from(expression: String) -> Self {
        Self::raw(expression)
    }
}
