//! Find and meta operations on the client.

use super::query::FindQuery;
use super::query::PreparedQuery;
use crate::IgdbClient;
use crate::Response;
use crate::error::Error;
use crate::model::Value;

impl IgdbClient {
    /// Sends a prepared query and returns the raw response.
    pub fn execute(&self, query: &PreparedQuery) -> Result<Response, Error> {
        self.call(query.command(), query.clauses())
    }

    /// Runs a query and returns the collection view of the response.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let games = client.find(&FindQuery::new().entity("game").search("zelda").limit(5))?;
    /// for game in games.as_array().unwrap_or_default() {
    ///     println!("{:?}", game.get("name"));
    /// }
    /// ```
    pub fn find(&self, query: &FindQuery) -> Result<Value, Error> {
        self.execute(&query.prepare()?)?.as_collection()
    }

    /// Runs a query that should match at most one record.
    ///
    /// Returns `Ok(None)` when nothing matched and
    /// [`ApiError::UnexpectedCount`](crate::error::ApiError::UnexpectedCount)
    /// when more than one record came back.
    pub fn find_one(&self, query: &FindQuery) -> Result<Option<Value>, Error> {
        self.execute(&query.prepare()?)?.as_single_result()
    }

    /// Fetches the field list of an endpoint (`<entity>/meta`).
    pub fn meta(&self, entity: &str) -> Result<Value, Error> {
        if entity.trim().is_empty() {
            return Err(Error::parameter(
                "Please specify entity (\"game\", \"platform\", etc)",
            ));
        }
        self.call::<&str>(&format!("{}/meta", entity), &[])?
            .as_collection()
    }
}
