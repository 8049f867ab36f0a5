//! docli: command-line client for the DigitalOcean REST API
//!
//! Each command issues one API call and renders the result either as a
//! colored table for people or as the raw resource in JSON for scripts.

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod types;
