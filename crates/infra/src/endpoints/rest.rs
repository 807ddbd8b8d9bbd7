//! Generic CRUD client bound to one path prefix

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use site24x7_core::Endpoint;
use site24x7_domain::{ApiEntity, ApiError, Result};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::http::Transport;

/// `Endpoint<T>` over `/<path>` and `/<path>/<id>`.
///
/// Families that share `/monitors` set [`ApiEntity::MONITOR_TYPE`]; listing
/// through such an endpoint keeps only entries of that type.
pub struct RestEndpoint<T> {
    transport: Arc<Transport>,
    path: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ApiEntity> RestEndpoint<T> {
    pub fn new(transport: Arc<Transport>, path: &'static str) -> Self {
        Self { transport, path, _entity: PhantomData }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    fn item_path(&self, id: &str) -> Result<String> {
        if id.trim().is_empty() {
            return Err(ApiError::validation(format!("{} id must not be empty", T::RESOURCE))
                .with_field("id"));
        }
        Ok(format!("{}/{}", self.path, encode(id)))
    }
}

impl<T> Clone for RestEndpoint<T> {
    fn clone(&self) -> Self {
        Self { transport: Arc::clone(&self.transport), path: self.path, _entity: PhantomData }
    }
}

/// Keep the entries whose `type` matches, compared before decoding so that
/// other monitor families with incompatible fields are never parsed.
fn filter_by_type(data: serde_json::Value, monitor_type: Option<&str>) -> Vec<serde_json::Value> {
    let entries = match data {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Null => Vec::new(),
        other => vec![other],
    };

    match monitor_type {
        None => entries,
        Some(wanted) => entries
            .into_iter()
            .filter(|entry| entry.get("type").and_then(serde_json::Value::as_str) == Some(wanted))
            .collect(),
    }
}

#[async_trait]
impl<T: ApiEntity> Endpoint<T> for RestEndpoint<T> {
    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn list(&self) -> Result<Vec<T>> {
        let data = self.transport.get::<serde_json::Value>(self.path).await?;
        let entries = filter_by_type(data, T::MONITOR_TYPE);
        debug!(count = entries.len(), "listed entities");

        entries
            .into_iter()
            .map(|entry| {
                serde_json::from_value(entry).map_err(|err| {
                    ApiError::fatal(format!("failed to decode {} from listing: {err}", T::RESOURCE))
                })
            })
            .collect()
    }

    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn get(&self, id: &str) -> Result<T> {
        let path = self.item_path(id)?;
        self.transport.get(&path).await
    }

    #[instrument(skip(self, entity), fields(resource = T::RESOURCE))]
    async fn create(&self, entity: &T) -> Result<T> {
        let created: T = self.transport.post(self.path, entity).await?;
        debug!(id = created.id(), "created entity");
        Ok(created)
    }

    #[instrument(skip(self, entity), fields(resource = T::RESOURCE, id = entity.id()))]
    async fn update(&self, entity: &T) -> Result<T> {
        let path = self.item_path(entity.id())?;
        self.transport.put(&path, entity).await
    }

    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.item_path(id)?;
        self.transport.delete(&path).await
    }
}
