//! CRUD lifecycle shared by every managed resource
//!
//! | Operation | Remote call | NotFound handling |
//! |-----------|-------------|-------------------|
//! | create | `Create` | surfaced |
//! | read | `Get` | id cleared, success |
//! | update | `Update` | surfaced |
//! | delete | `Delete` | success |
//! | exists | `Get` | `false` |

use async_trait::async_trait;
use site24x7_core::{Endpoint, Site24x7Client};
use site24x7_domain::{ApiEntity, ApiError};
use tracing::{debug, info, instrument, warn};

use crate::error::{ProviderError, Result};
use crate::resource_data::ResourceData;
use crate::schema::Schema;

/// Conversion between a host tree and one entity family.
pub trait ResourceAdapter: Send + Sync + 'static {
    type Entity: ApiEntity;

    /// Host resource type name, e.g. `site24x7_tag`
    const TYPE_NAME: &'static str;

    fn schema(&self) -> Schema;

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<Self::Entity>;

    /// Build the full entity from a validated tree. The id is set by the lifecycle.
    fn to_entity(&self, data: &ResourceData) -> Result<Self::Entity>;

    /// Mirror a server entity into the tree.
    fn apply(&self, data: &mut ResourceData, entity: &Self::Entity);
}

fn validate<A: ResourceAdapter>(adapter: &A, data: &mut ResourceData) -> Result<()> {
    adapter
        .schema()
        .validate(data.values_mut())
        .map_err(|diagnostics| ProviderError::Schema { resource: A::TYPE_NAME, diagnostics })
}

fn entity_for<A: ResourceAdapter>(adapter: &A, data: &mut ResourceData) -> Result<A::Entity> {
    validate(adapter, data)?;
    let mut entity = adapter.to_entity(data)?;
    entity.set_id(data.id().to_string());
    Ok(entity)
}

#[instrument(skip_all, fields(resource = A::TYPE_NAME))]
pub async fn create<A: ResourceAdapter>(
    adapter: &A,
    client: &dyn Site24x7Client,
    data: &mut ResourceData,
) -> Result<()> {
    let entity = entity_for(adapter, data)?;
    let created = adapter.endpoint(client).create(&entity).await?;

    if created.id().is_empty() {
        return Err(ApiError::fatal(format!(
            "{} was created but the server returned no id",
            <A::Entity as ApiEntity>::RESOURCE
        ))
        .into());
    }

    data.set_id(created.id());
    info!(id = data.id(), "resource created");
    Ok(())
}

#[instrument(skip_all, fields(resource = A::TYPE_NAME, id = data.id()))]
pub async fn read<A: ResourceAdapter>(
    adapter: &A,
    client: &dyn Site24x7Client,
    data: &mut ResourceData,
) -> Result<()> {
    match adapter.endpoint(client).get(data.id()).await {
        Ok(entity) => {
            adapter.apply(data, &entity);
            debug!("resource refreshed");
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            warn!("resource no longer exists remotely, removing from state");
            data.clear_id();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[instrument(skip_all, fields(resource = A::TYPE_NAME, id = data.id()))]
pub async fn update<A: ResourceAdapter>(
    adapter: &A,
    client: &dyn Site24x7Client,
    data: &mut ResourceData,
) -> Result<()> {
    let entity = entity_for(adapter, data)?;
    let updated = adapter.endpoint(client).update(&entity).await?;

    if !updated.id().is_empty() {
        data.set_id(updated.id());
    }
    info!("resource updated");
    Ok(())
}

#[instrument(skip_all, fields(resource = A::TYPE_NAME, id = data.id()))]
pub async fn delete<A: ResourceAdapter>(
    adapter: &A,
    client: &dyn Site24x7Client,
    data: &mut ResourceData,
) -> Result<()> {
    match adapter.endpoint(client).delete(data.id()).await {
        Ok(()) => info!("resource deleted"),
        Err(err) if err.is_not_found() => debug!("resource already absent"),
        Err(err) => return Err(err.into()),
    }
    data.clear_id();
    Ok(())
}

#[instrument(skip_all, fields(resource = A::TYPE_NAME, id = data.id()))]
pub async fn exists<A: ResourceAdapter>(
    adapter: &A,
    client: &dyn Site24x7Client,
    data: &ResourceData,
) -> Result<bool> {
    match adapter.endpoint(client).get(data.id()).await {
        Ok(_) => Ok(true),
        Err(err) if err.is_not_found() => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Object-safe view of a resource type, used for dispatch by name.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    fn type_name(&self) -> &'static str;
    fn schema(&self) -> Schema;
    async fn create(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()>;
    async fn read(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()>;
    async fn update(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()>;
    async fn delete(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()>;
    async fn exists(&self, client: &dyn Site24x7Client, data: &ResourceData) -> Result<bool>;
}

/// Adapts any [`ResourceAdapter`] to [`ResourceHandler`].
pub struct Managed<A>(pub A);

#[async_trait]
impl<A: ResourceAdapter> ResourceHandler for Managed<A> {
    fn type_name(&self) -> &'static str {
        A::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        self.0.schema()
    }

    async fn create(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()> {
        create(&self.0, client, data).await
    }

    async fn read(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()> {
        read(&self.0, client, data).await
    }

    async fn update(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()> {
        update(&self.0, client, data).await
    }

    async fn delete(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()> {
        delete(&self.0, client, data).await
    }

    async fn exists(&self, client: &dyn Site24x7Client, data: &ResourceData) -> Result<bool> {
        exists(&self.0, client, data).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use site24x7_core::testing::{EndpointCall, MockClient};
    use site24x7_domain::{ErrorKind, Tag};

    use super::*;
    use crate::resources::TagResource;

    fn tag(id: &str) -> Tag {
        Tag {
            tag_id: id.to_string(),
            tag_name: "env".to_string(),
            tag_value: "prod".to_string(),
            tag_color: "#B7DA9E".to_string(),
            tag_type: None,
        }
    }

    fn config() -> ResourceData {
        ResourceData::from_value(json!({"tag_name": "env", "tag_value": "prod", "tag_color": "#B7DA9E"}))
    }

    #[tokio::test]
    async fn create_mirrors_server_id() {
        let client = MockClient::new();
        client.tags.add_create_response(Ok(tag("T1")));

        let mut data = config();
        create(&TagResource, &client, &mut data).await.unwrap();

        assert_eq!(data.id(), "T1");
        match &client.tags.calls()[0] {
            EndpointCall::Create(sent) => assert_eq!(sent, &tag("")),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_with_empty_server_id_is_fatal() {
        let client = MockClient::new();
        client.tags.add_create_response(Ok(tag("")));

        let mut data = config();
        let err = create(&TagResource, &client, &mut data).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Fatal);
        assert!(data.is_gone());
    }

    #[tokio::test]
    async fn read_clears_id_when_missing() {
        let client = MockClient::new();
        client.tags.add_get_response(Err(ApiError::not_found("Tag not found")));

        let mut data = config().with_id("T1");
        read(&TagResource, &client, &mut data).await.unwrap();

        assert!(data.is_gone());
    }

    #[tokio::test]
    async fn read_surfaces_other_errors_and_keeps_id() {
        let client = MockClient::new();
        client.tags.add_get_response(Err(ApiError::unauthorized("bad token")));

        let mut data = config().with_id("T1");
        let err = read(&TagResource, &client, &mut data).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(data.id(), "T1");
    }

    #[tokio::test]
    async fn update_sends_current_id() {
        let client = MockClient::new();
        client.tags.add_update_response(Ok(tag("T1")));

        let mut data = config().with_id("T1");
        update(&TagResource, &client, &mut data).await.unwrap();

        match &client.tags.calls()[0] {
            EndpointCall::Update(sent) => assert_eq!(sent.tag_id, "T1"),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_missing_resource_succeeds() {
        let client = MockClient::new();
        client.tags.add_delete_response(Err(ApiError::not_found("Tag not found").with_status(404)));

        let mut data = config().with_id("abc");
        delete(&TagResource, &client, &mut data).await.unwrap();

        assert!(data.is_gone());
        assert!(matches!(&client.tags.calls()[0], EndpointCall::Delete(id) if id == "abc"));
    }

    #[tokio::test]
    async fn delete_surfaces_other_errors() {
        let client = MockClient::new();
        client.tags.add_delete_response(Err(ApiError::transient("server error")));

        let mut data = config().with_id("abc");
        let err = delete(&TagResource, &client, &mut data).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transient);
        assert_eq!(data.id(), "abc");
    }

    #[tokio::test]
    async fn exists_maps_not_found_to_false() {
        let client = MockClient::new();
        client.tags.add_get_response(Ok(tag("T1")));
        client.tags.add_get_response(Err(ApiError::not_found("gone")));
        client.tags.add_get_response(Err(ApiError::fatal("boom")));

        let data = config().with_id("T1");
        assert!(exists(&TagResource, &client, &data).await.unwrap());
        assert!(!exists(&TagResource, &client, &data).await.unwrap());
        assert!(exists(&TagResource, &client, &data).await.is_err());
    }

    #[tokio::test]
    async fn invalid_config_never_reaches_the_api() {
        let client = MockClient::new();

        let mut data = ResourceData::from_value(json!({"tag_value": "prod"}));
        let err = create(&TagResource, &client, &mut data).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.diagnostics()[0].path, "tag_name");
        assert_eq!(client.total_calls(), 0);
    }
}
