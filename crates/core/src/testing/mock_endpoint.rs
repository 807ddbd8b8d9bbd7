//! Mock endpoint implementations

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use site24x7_domain::{
    ApiEntity, ApiError, CurrentStatus, CurrentStatusOptions, LocationTemplate, Result,
    ThirdPartyIntegration,
};

use crate::endpoints::ports::{
    CurrentStatusEndpoint, Endpoint, LocationTemplateEndpoint, ThirdPartyIntegrationsEndpoint,
};

/// FIFO of programmed results for one operation
#[derive(Debug)]
struct ResponseQueue<R> {
    operation: &'static str,
    queue: Mutex<VecDeque<Result<R>>>,
}

impl<R> ResponseQueue<R> {
    fn new(operation: &'static str) -> Self {
        Self { operation, queue: Mutex::new(VecDeque::new()) }
    }

    fn push(&self, response: Result<R>) {
        self.queue.lock().push_back(response);
    }

    fn next(&self, resource: &str) -> Result<R> {
        self.queue.lock().pop_front().unwrap_or_else(|| {
            Err(ApiError::fatal(format!(
                "no response programmed for {resource} {}",
                self.operation
            )))
        })
    }
}

/// Recorded invocation of a [`MockEndpoint`]
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointCall<T> {
    List,
    Get(String),
    Create(T),
    Update(T),
    Delete(String),
}

/// Mock CRUD endpoint for one resource family
#[derive(Debug)]
pub struct MockEndpoint<T> {
    calls: Mutex<Vec<EndpointCall<T>>>,
    list: ResponseQueue<Vec<T>>,
    get: ResponseQueue<T>,
    create: ResponseQueue<T>,
    update: ResponseQueue<T>,
    delete: ResponseQueue<()>,
}

impl<T> Default for MockEndpoint<T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            list: ResponseQueue::new("list"),
            get: ResponseQueue::new("get"),
            create: ResponseQueue::new("create"),
            update: ResponseQueue::new("update"),
            delete: ResponseQueue::new("delete"),
        }
    }
}

impl<T: Clone> MockEndpoint<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_list_response(&self, response: Result<Vec<T>>) {
        self.list.push(response);
    }

    pub fn add_get_response(&self, response: Result<T>) {
        self.get.push(response);
    }

    pub fn add_create_response(&self, response: Result<T>) {
        self.create.push(response);
    }

    pub fn add_update_response(&self, response: Result<T>) {
        self.update.push(response);
    }

    pub fn add_delete_response(&self, response: Result<()>) {
        self.delete.push(response);
    }

    /// All invocations so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<EndpointCall<T>> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: EndpointCall<T>) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl<T: ApiEntity> Endpoint<T> for MockEndpoint<T> {
    async fn list(&self) -> Result<Vec<T>> {
        self.record(EndpointCall::List);
        self.list.next(T::RESOURCE)
    }

    async fn get(&self, id: &str) -> Result<T> {
        self.record(EndpointCall::Get(id.to_string()));
        self.get.next(T::RESOURCE)
    }

    async fn create(&self, entity: &T) -> Result<T> {
        self.record(EndpointCall::Create(entity.clone()));
        self.create.next(T::RESOURCE)
    }

    async fn update(&self, entity: &T) -> Result<T> {
        self.record(EndpointCall::Update(entity.clone()));
        self.update.next(T::RESOURCE)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(EndpointCall::Delete(id.to_string()));
        self.delete.next(T::RESOURCE)
    }
}

/// Mock for the location template endpoint
#[derive(Debug)]
pub struct MockLocationTemplate {
    calls: Mutex<usize>,
    get: ResponseQueue<LocationTemplate>,
}

impl Default for MockLocationTemplate {
    fn default() -> Self {
        Self { calls: Mutex::new(0), get: ResponseQueue::new("get") }
    }
}

impl MockLocationTemplate {
    pub fn add_get_response(&self, response: Result<LocationTemplate>) {
        self.get.push(response);
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl LocationTemplateEndpoint for MockLocationTemplate {
    async fn get(&self) -> Result<LocationTemplate> {
        *self.calls.lock() += 1;
        self.get.next("location template")
    }
}

/// Mock for the current status endpoint; records the query options
#[derive(Debug)]
pub struct MockCurrentStatus {
    calls: Mutex<Vec<CurrentStatusOptions>>,
    list: ResponseQueue<CurrentStatus>,
}

impl Default for MockCurrentStatus {
    fn default() -> Self {
        Self { calls: Mutex::new(Vec::new()), list: ResponseQueue::new("list") }
    }
}

impl MockCurrentStatus {
    pub fn add_list_response(&self, response: Result<CurrentStatus>) {
        self.list.push(response);
    }

    #[must_use]
    pub fn calls(&self) -> Vec<CurrentStatusOptions> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl CurrentStatusEndpoint for MockCurrentStatus {
    async fn list(&self, options: CurrentStatusOptions) -> Result<CurrentStatus> {
        self.calls.lock().push(options);
        self.list.next("current status")
    }
}

/// Mock for the third-party integrations listing
#[derive(Debug)]
pub struct MockThirdPartyIntegrations {
    calls: Mutex<usize>,
    list: ResponseQueue<Vec<ThirdPartyIntegration>>,
}

impl Default for MockThirdPartyIntegrations {
    fn default() -> Self {
        Self { calls: Mutex::new(0), list: ResponseQueue::new("list") }
    }
}

impl MockThirdPartyIntegrations {
    pub fn add_list_response(&self, response: Result<Vec<ThirdPartyIntegration>>) {
        self.list.push(response);
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl ThirdPartyIntegrationsEndpoint for MockThirdPartyIntegrations {
    async fn list(&self) -> Result<Vec<ThirdPartyIntegration>> {
        *self.calls.lock() += 1;
        self.list.next("third-party integrations")
    }
}

#[cfg(test)]
mod tests {
    use site24x7_domain::{ErrorKind, Tag};

    use super::*;

    fn tag(id: &str) -> Tag {
        Tag { tag_id: id.to_string(), tag_name: "env".to_string(), ..Default::default() }
    }

    #[tokio::test]
    async fn unprogrammed_operation_is_fatal() {
        let endpoint = MockEndpoint::<Tag>::new();
        let err = endpoint.get("abc").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Fatal);
        assert!(err.message.contains("no response programmed for tag get"));
        assert_eq!(endpoint.calls(), vec![EndpointCall::Get("abc".to_string())]);
    }

    #[tokio::test]
    async fn programmed_responses_replay_in_order() {
        let endpoint = MockEndpoint::<Tag>::new();
        endpoint.add_get_response(Ok(tag("1")));
        endpoint.add_get_response(Err(ApiError::not_found("gone")));

        assert_eq!(endpoint.get("1").await.unwrap().tag_id, "1");
        assert!(endpoint.get("1").await.unwrap_err().is_not_found());
        assert_eq!(endpoint.get("1").await.unwrap_err().kind, ErrorKind::Fatal);
        assert_eq!(endpoint.call_count(), 3);
    }

    #[tokio::test]
    async fn create_records_entity() {
        let endpoint = MockEndpoint::<Tag>::new();
        endpoint.add_create_response(Ok(tag("99")));

        let created = endpoint.create(&tag("")).await.unwrap();
        assert_eq!(created.tag_id, "99");
        assert_eq!(endpoint.calls(), vec![EndpointCall::Create(tag(""))]);
    }

    #[tokio::test]
    async fn current_status_records_options() {
        let endpoint = MockCurrentStatus::default();
        endpoint.add_list_response(Ok(CurrentStatus::default()));
        let options = CurrentStatusOptions { apm_required: true, ..Default::default() };

        endpoint.list(options).await.unwrap();
        assert_eq!(endpoint.calls(), vec![options]);
    }
}
