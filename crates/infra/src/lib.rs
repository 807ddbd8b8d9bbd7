//! # Site24x7 Infrastructure
//!
//! HTTP implementation of the `site24x7-core` ports.
//!
//! This crate contains:
//! - `http`: request pipeline (auth header, envelope decoding, refresh-on-401,
//!   backoff on 429/5xx, deadline scoping) and the error classifier
//! - `auth`: OAuth2 refresh-token source with single-flight refresh
//! - `endpoints`: one typed client per resource family
//! - `client`: the production `Site24x7Client` façade
//! - `config`: provider configuration loading

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod http;

pub use auth::{AccessTokenProvider, OAuthTokenSource};
pub use client::Site24x7ApiClient;
pub use http::{with_deadline, Transport};
