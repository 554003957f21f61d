//! Shared types between the menu frontend and the menu HTTP API.

pub mod domain;
pub mod enums;
