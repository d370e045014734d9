//! Subnoto API client adapter.

mod client;
mod factory;
mod types;

pub use client::{API_BASE_URL, SubnotoApiClient, envelope_list_body};
pub use factory::SubnotoClientFactory;
