pub mod api;
pub mod contact;
pub mod detail;
pub mod filters;
pub mod format;
pub mod home;
pub mod models;
pub mod pagination;
pub mod panel;
pub mod settings;

pub use api::{CatalogApi, DataSource, FetchError, ImobiliariaClient, OptionKind, OptionSource};
pub use filters::{build_query, FilterState, FilterUpdate};
pub use models::{Modalidade, PageResponse, Property, PropertyCard};
pub use pagination::{compute_range, PageItem};
pub use panel::{FiltersPanel, PanelDriver};
pub use settings::Settings;
