//! Provider configuration loading
//!
//! The host hands over its provider block as a JSON-like tree. Credential
//! keys missing from it fall back to environment variables; a TOML or JSON
//! file can be used instead of the host block.

pub mod loader;

pub use loader::{
    load_from_env, load_from_file, load_from_tree, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_DATA_CENTER,
    ENV_REFRESH_TOKEN,
};
