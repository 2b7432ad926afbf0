//! Configuration and message types shared by the worker.

pub mod config;
pub mod models;
pub mod remote_config;
