//! HTTP request pipeline for the Site24x7 API

pub mod classify;
mod deadline;
mod transport;

pub use deadline::{current_deadline, with_deadline};
pub use transport::{Transport, TransportBuilder};
