//! Core domain entities: broker records and API pagination envelopes.

mod broker;
mod page;

pub use broker::Broker;
pub use page::{BrokerPage, PageRequest};
