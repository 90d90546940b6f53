//! Query builder for IGDB's body-based query language.
//!
//! A query is a list of clauses such as `fields id,name` or `where id = 7`,
//! sent as the POST body. [`FindQuery`] builds them in a fixed order:
//!
//! 1. `fields` (always present, `*` by default)
//! 2. `exclude`
//! 3. `search "..."`
//! 4. `where id = ...`
//! 5. `where name = "..."`
//! 6. `where slug = "..."`
//! 7. raw filter clause
//! 8. `limit` (clamped to [`MAX_LIMIT`])
//! 9. `sort`

mod fields;
mod find;
mod order;

pub use fields::Fields;
pub use find::*;
pub use order::Direction;
pub use order::Sort;

/// Renders clauses as a request body.
///
/// Clauses are joined with `"; "` and terminated with `;`. No clauses gives an
/// empty body.
///
/// ```
/// use igdb_lib::api::query::body;
///
/// assert_eq!(body(&["fields *", "limit 10"]), "fields *; limit 10;");
/// assert_eq!(body::<&str>(&[]), "");
/// ```
pub fn body<S: AsRef<str>>(clauses: &[S]) -> String {
    if clauses.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = clauses.iter().map(|clause| clause.as_ref()).collect();
    format!("{};", joined.join("; "))
}
