pub mod driver;
pub mod manager;

pub use driver::PanelDriver;
pub use manager::{
    Command, Completion, FiltersPanel, InitState, OptionList, RequestId, SearchState,
};
