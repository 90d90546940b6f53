//! The `find` query builder.

use super::Fields;
use super::Sort;
use crate::error::Error;

/// Largest `limit` the API accepts.
pub const MAX_LIMIT: u32 = 500;

/// Builder for a query against one IGDB endpoint.
///
/// Empty strings and a zero limit mean "not set"; those clauses are left out.
/// An id of `0` is a real id and is always sent.
///
/// # Example
///
/// ```
/// use igdb_lib::api::query::{FindQuery, Sort};
///
/// let query = FindQuery::new()
///     .entity("game")
///     .fields(["id", "name", "rating"])
///     .search("zelda")
///     .limit(10)
///     .sort(Sort::desc("rating"));
///
/// let prepared = query.prepare()?;
/// assert_eq!(prepared.command(), "game/");
/// assert_eq!(
///     prepared.clauses(),
///     ["fields id,name,rating", "search \"zelda\"", "limit 10", "sort rating desc"]
/// );
/// # Ok::<(), igdb_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    entity: Option<String>,
    fields: Fields,
    exclude: String,
    search: String,
    entity_id: Option<u64>,
    name: String,
    slug: String,
    filters: String,
    limit: u32,
    sort: Option<Sort>,
}

impl FindQuery {
    /// Creates an empty query. An entity must be set before it can be prepared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint to query (`"game"`, `"platform"`, ...).
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Specifies which fields to return.
    ///
    /// If not called, all fields are returned.
    pub fn fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Excludes fields from the result (comma-separated).
    pub fn exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = exclude.into();
        self
    }

    /// Full-text search.
    ///
    /// Pass the plain value. Embedded `"` and `\` are backslash-escaped when
    /// the clause is built, so do not escape them yourself.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Matches a single id.
    pub fn id(mut self, id: u64) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Matches the exact name.
    ///
    /// Escaped like [`search`](Self::search).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Matches the exact slug.
    ///
    /// Escaped like [`search`](Self::search).
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Adds a raw clause, sent verbatim (e.g. `where rating > 80`).
    pub fn filter(mut self, filters: impl Into<String>) -> Self {
        self.filters = filters.into();
        self
    }

    /// Limits the number of results. `0` leaves the server default.
    ///
    /// Values above [`MAX_LIMIT`] are clamped when the query is prepared.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the ordering of results.
    pub fn sort(mut self, sort: impl Into<Sort>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Returns the entity, if set.
    pub fn entity_name(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Builds the command path and the ordered clause list.
    ///
    /// Fails with [`Error::Parameter`] if no entity is set. A limit above
    /// [`MAX_LIMIT`] is clamped, logged at `warn` level, and reported in
    /// [`PreparedQuery::warnings`].
    pub fn prepare(&self) -> Result<PreparedQuery, Error> {
        let entity = self
            .entity
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| Error::parameter("Please specify entity (\"game\", \"platform\", etc)"))?;

        let mut clauses = vec![format!("fields {}", self.fields)];
        let mut warnings = Vec::new();

        if !self.exclude.is_empty() {
            clauses.push(format!("exclude {}", self.exclude));
        }
        if !self.search.is_empty() {
            clauses.push(format!("search \"{}\"", quote(&self.search)));
        }
        if let Some(id) = self.entity_id {
            clauses.push(format!("where id = {}", id));
        }
        if !self.name.is_empty() {
            clauses.push(format!("where name = \"{}\"", quote(&self.name)));
        }
        if !self.slug.is_empty() {
            clauses.push(format!("where slug = \"{}\"", quote(&self.slug)));
        }
        if !self.filters.is_empty() {
            clauses.push(self.filters.clone());
        }
        if self.limit > 0 {
            let mut limit = self.limit;
            if limit > MAX_LIMIT {
                log::warn!("Limit ({}) set to maximum allowed ({}).", limit, MAX_LIMIT);
                warnings.push(QueryWarning::LimitClamped {
                    requested: limit,
                    applied: MAX_LIMIT,
                });
                limit = MAX_LIMIT;
            }
            clauses.push(format!("limit {}", limit));
        }
        if let Some(sort) = self.sort.as_ref().filter(|s| !s.is_empty()) {
            clauses.push(format!("sort {}", sort));
        }

        Ok(PreparedQuery {
            command: format!("{}/", entity),
            clauses,
            warnings,
        })
    }
}

/// Escapes a value placed inside a double-quoted clause.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A non-fatal adjustment made while preparing a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryWarning {
    /// The requested limit exceeded [`MAX_LIMIT`].
    LimitClamped { requested: u32, applied: u32 },
}

impl std::fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LimitClamped { requested, applied } => {
                write!(f, "Limit ({}) set to maximum allowed ({}).", requested, applied)
            }
        }
    }
}

/// A query ready to send: command path plus ordered clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    command: String,
    clauses: Vec<String>,
    warnings: Vec<QueryWarning>,
}

impl PreparedQuery {
    /// Creates a query from a command path and clauses as-is.
    pub fn new(command: impl Into<String>, clauses: Vec<String>) -> Self {
        Self {
            command: command.into(),
            clauses,
            warnings: Vec::new(),
        }
    }

    /// The command path (e.g. `game/`).
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The clauses, in send order.
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// Adjustments made while preparing.
    pub fn warnings(&self) -> &[QueryWarning] {
        &self.warnings
    }

    /// The request body.
    pub fn body(&self) -> String {
        super::body(&self.clauses)
    }
}
