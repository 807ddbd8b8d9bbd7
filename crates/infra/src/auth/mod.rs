//! OAuth2 authentication against the Zoho accounts server

mod token_source;

pub use token_source::{
    AccessTokenProvider, OAuthTokenSource, OAuthTokenSourceBuilder, DEFAULT_EXPIRY_SKEW,
};
