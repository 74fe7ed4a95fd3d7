#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod state;

pub mod api;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod auth;
