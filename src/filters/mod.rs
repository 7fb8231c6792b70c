pub mod query;
pub mod state;

pub use query::{build_query, QueryPairs};
pub use state::{FilterState, FilterUpdate};
