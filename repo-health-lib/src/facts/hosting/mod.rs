//! Retrieval of repository data from the GitHub REST API.

mod client;
mod provider;

pub use provider::Provider;
