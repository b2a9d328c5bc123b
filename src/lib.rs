//! Web search tool for the agent runtime, backed by the SerpApi
//! search-results API.

pub mod config;
pub mod error;
pub mod model;
pub mod tool;
