//! Programmable in-memory client for tests
//!
//! Every mock endpoint records the arguments of each call and answers with
//! the next programmed response for that operation. With nothing programmed
//! it answers with a `Fatal` "no response programmed" error, so a fresh
//! [`MockClient`] also doubles as a tripwire for unexpected API traffic.

mod mock_client;
mod mock_endpoint;

pub use mock_client::MockClient;
pub use mock_endpoint::{
    EndpointCall, MockCurrentStatus, MockEndpoint, MockLocationTemplate,
    MockThirdPartyIntegrations,
};
