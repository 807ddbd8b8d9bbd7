//! Client façade

pub mod ports;
