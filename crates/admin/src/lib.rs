//! Stockroom Admin library.
//!
//! This crate provides the catalog administration panel as a library,
//! allowing it to be tested and reused.
//!
//! # Architecture
//!
//! - Axum web framework with askama server-side templates
//! - `PostgreSQL` for administrators, products, and sessions
//! - Session-cookie authentication (argon2-hashed passwords)
//! - External asset host for product images

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod search;
pub mod services;
pub mod state;
pub mod validation;
