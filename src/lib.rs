//! GameHub API - catalog backend for games and apps
//!
//! This crate provides the REST API for GameHub, enabling:
//! - Listing, fetching and creating games, plus their distinct categories
//! - Listing, fetching and creating apps, plus the fixed app category set

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod routes;
pub mod state;
