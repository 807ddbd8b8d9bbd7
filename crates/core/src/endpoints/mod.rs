//! Endpoint capability traits

pub mod ports;
