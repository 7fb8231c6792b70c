pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::ImobiliariaClient;
pub use error::{DataSource, FetchError};
pub use traits::CatalogApi;
pub use types::{OptionKind, OptionSource};
