//! Typed payloads exchanged with the search provider and handed back to the
//! agent.

pub mod search_result;
