//! Server application core modules.
//!
//! This module contains all server-side functionality for the eco front-end: configuration,
//! the upstream API client and services, session models, form validation, the HTTP
//! controllers and the router that wires them together.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod view;
