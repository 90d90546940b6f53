//! Entity-scoped queries.

use super::query::FindQuery;
use crate::IgdbClient;
use crate::error::Error;
use crate::model::EntityKind;
use crate::model::EntityObject;
use crate::model::Value;

impl EntityKind {
    /// Runs `query` against this kind's endpoint.
    ///
    /// Any entity already set on the query is replaced.
    ///
    /// ```ignore
    /// let platforms = EntityKind::Platform.find(&client, FindQuery::new().fields("name").limit(50))?;
    /// ```
    pub fn find(&self, client: &IgdbClient, query: FindQuery) -> Result<Value, Error> {
        client.find(&query.entity(self.tag()))
    }

    /// Like [`find`](Self::find), expecting at most one record.
    pub fn find_one(&self, client: &IgdbClient, query: FindQuery) -> Result<Option<Value>, Error> {
        client.find_one(&query.entity(self.tag()))
    }

    /// Runs `query` and wraps every returned record as an [`EntityObject`].
    pub fn find_objects(&self, client: &IgdbClient, query: FindQuery) -> Result<Vec<EntityObject>, Error> {
        let prepared = query.entity(self.tag()).prepare()?;
        client
            .execute(&prepared)?
            .records()?
            .iter()
            .map(|record| EntityObject::from_record(self.clone(), record).map_err(Error::from))
            .collect()
    }

    /// Fetches this endpoint's field list.
    pub fn meta(&self, client: &IgdbClient) -> Result<Value, Error> {
        client.meta(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::transport::fake::FakeTransport;

    fn client(fake: &Arc<FakeTransport>) -> IgdbClient {
        IgdbClient::builder()
            .api_key("secret")
            .transport(Arc::clone(fake))
            .build()
            .unwrap()
    }

    #[test]
    fn test_find_uses_kind_tag() {
        let fake = Arc::new(FakeTransport::replying(200, "[]"));
        let query = FindQuery::new().entity("ignored").search("nintendo");

        EntityKind::Company.find(&client(&fake), query).unwrap();

        assert_eq!(fake.requests()[0].url, "https://api-v3.igdb.com/company/");
    }

    #[test]
    fn test_find_one_none() {
        let fake = Arc::new(FakeTransport::replying(200, "[]"));
        let result = EntityKind::Game
            .find_one(&client(&fake), FindQuery::new().slug("does-not-exist"))
            .unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn test_find_objects() {
        let fake = Arc::new(FakeTransport::replying(
            200,
            r#"[{"id": 6, "name": "PC (Microsoft Windows)"}, {"id": 48}]"#,
        ));
        let objects = EntityKind::Platform
            .find_objects(&client(&fake), FindQuery::new().fields(["id", "name"]))
            .unwrap();

        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].to_string(), "<Platform \"PC (Microsoft Windows)\" (6)>");
        assert_eq!(objects[1].to_string(), "<Platform (48)>");
        assert_ne!(objects[0], EntityObject::new(EntityKind::Game, 6));
    }

    #[test]
    fn test_meta_path() {
        let fake = Arc::new(FakeTransport::replying(200, "[]"));
        EntityKind::GameMode.meta(&client(&fake)).unwrap();

        assert_eq!(fake.requests()[0].url, "https://api-v3.igdb.com/game_mode/meta");
    }
}
