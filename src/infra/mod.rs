//! Infrastructure concerns: HTTP transport and the remote API/store clients.

mod cvdw;
mod http;
mod supabase;

pub use cvdw::{BrokerSource, CvdwClient};
pub use supabase::{BrokerStore, SupabaseClient};
