//! Tools exposed to the agent runtime. Each submodule wraps a concrete tool
//! and implements the shared `ToolCall` trait so the runtime can invoke it
//! by name with JSON arguments.

pub mod serp_api;
pub mod tool;
pub mod web_search;
