use crate::api::{DataSource, FetchError, OptionKind, OptionSource};
use crate::filters::{FilterState, FilterUpdate};
use crate::models::{PageResponse, PropertyCard};
use crate::pagination::page_request;
use tracing::{debug, info, warn};

/// Monotonic identifier attached to every request the panel issues
pub type RequestId = u64;

/// Work the panel asks its driver to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search { id: RequestId, filters: FilterState },
    LoadOptions { id: RequestId, source: OptionSource },
}

/// Result of a finished [`Command`], fed back through [`FiltersPanel::apply`]
#[derive(Debug, Clone)]
pub enum Completion {
    Search {
        id: RequestId,
        result: Result<PageResponse<PropertyCard>, FetchError>,
    },
    Options {
        id: RequestId,
        kind: OptionKind,
        result: Result<Vec<String>, FetchError>,
    },
}

/// One independently loaded option list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionList {
    pub options: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    latest: Option<RequestId>,
}

impl OptionList {
    fn begin(&mut self, id: RequestId) {
        self.loading = true;
        self.error = None;
        self.latest = Some(id);
    }

    /// Drop the list and forget any in-flight request
    fn clear(&mut self) {
        self.options.clear();
        self.loading = false;
        self.error = None;
        self.latest = None;
    }
}

/// Last search outcome
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub result: Option<PageResponse<PropertyCard>>,
    pub loading: bool,
    pub error: Option<String>,
    latest: Option<RequestId>,
}

/// One-shot initial load guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    /// Initial search issued, not answered yet
    Initializing,
    Ready,
}

/// State of the search filters panel.
///
/// Every operation mutates local state and returns the requests that must be
/// sent; responses come back through [`FiltersPanel::apply`]. Only the most
/// recently issued search and the most recently issued load of each list are
/// accepted, older responses are discarded.
#[derive(Debug, Clone)]
pub struct FiltersPanel {
    filters: FilterState,
    init: InitState,
    next_id: RequestId,
    cidades: OptionList,
    bairros: OptionList,
    tipos: OptionList,
    caract_internas: OptionList,
    caract_externas: OptionList,
    search: SearchState,
}

impl Default for FiltersPanel {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FiltersPanel {
    pub fn new(initial: Option<FilterState>) -> Self {
        Self {
            filters: FilterState::initial(initial),
            init: InitState::Uninitialized,
            next_id: 0,
            cidades: OptionList::default(),
            bairros: OptionList::default(),
            tipos: OptionList::default(),
            caract_internas: OptionList::default(),
            caract_externas: OptionList::default(),
            search: SearchState::default(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn init_state(&self) -> InitState {
        self.init
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn list(&self, kind: OptionKind) -> &OptionList {
        match kind {
            OptionKind::Cidades => &self.cidades,
            OptionKind::Bairros => &self.bairros,
            OptionKind::Tipos => &self.tipos,
            OptionKind::CaractInternas => &self.caract_internas,
            OptionKind::CaractExternas => &self.caract_externas,
        }
    }

    fn list_mut(&mut self, kind: OptionKind) -> &mut OptionList {
        match kind {
            OptionKind::Cidades => &mut self.cidades,
            OptionKind::Bairros => &mut self.bairros,
            OptionKind::Tipos => &mut self.tipos,
            OptionKind::CaractInternas => &mut self.caract_internas,
            OptionKind::CaractExternas => &mut self.caract_externas,
        }
    }

    fn issue_id(&mut self) -> RequestId {
        self.next_id += 1;
        self.next_id
    }

    fn search_command(&mut self) -> Command {
        let id = self.issue_id();
        self.search.loading = true;
        self.search.error = None;
        self.search.latest = Some(id);
        Command::Search {
            id,
            filters: self.filters.clone(),
        }
    }

    fn load_command(&mut self, source: OptionSource) -> Command {
        let id = self.issue_id();
        self.list_mut(source.kind()).begin(id);
        Command::LoadOptions { id, source }
    }

    /// First load: option lists plus exactly one search.
    ///
    /// Calling it again, whether the first load finished or not, issues nothing.
    pub fn initialize(&mut self) -> Vec<Command> {
        if self.init != InitState::Uninitialized {
            debug!("Initial load already {:?}, skipping", self.init);
            return Vec::new();
        }
        self.init = InitState::Initializing;

        let mut commands: Vec<Command> = OptionKind::STATIC
            .into_iter()
            .filter_map(OptionSource::unscoped)
            .map(|source| self.load_command(source))
            .collect();

        if let Some(cidade) = self.filters.trimmed_cidade().map(str::to_string) {
            commands.push(self.load_command(OptionSource::Bairros(cidade)));
        }

        info!("Initial search with page {}", self.filters.page());
        commands.push(self.search_command());
        commands
    }

    /// Change one filter field.
    ///
    /// Any field except `page` sends the page back to 0. A new city clears the
    /// selected neighborhood and reloads the neighborhood list, or empties it
    /// when the city is blank.
    pub fn set_field(&mut self, update: FilterUpdate) -> Vec<Command> {
        let previous_cidade = self.filters.cidade.clone();
        let is_cidade = matches!(update, FilterUpdate::Cidade(_));

        debug!("Filter {} updated", update.key());
        self.filters.apply(update);

        if !is_cidade || self.filters.cidade == previous_cidade {
            return Vec::new();
        }

        self.filters.bairro = None;

        match self.filters.trimmed_cidade().map(str::to_string) {
            Some(cidade) => vec![self.load_command(OptionSource::Bairros(cidade))],
            None => {
                self.bairros.clear();
                Vec::new()
            }
        }
    }

    /// Search with the current filters (the panel's submit button, also the
    /// retry action after a failed search).
    pub fn submit(&mut self) -> Vec<Command> {
        vec![self.search_command()]
    }

    /// Follow a page chosen outside the panel.
    ///
    /// Other filters stay as they are; nothing happens when the page is
    /// already current.
    pub fn sync_external_page(&mut self, page: Option<u32>) -> Vec<Command> {
        let Some(page) = page else {
            return Vec::new();
        };
        if self.filters.page() == page {
            return Vec::new();
        }

        self.filters.page = Some(page);
        vec![self.search_command()]
    }

    /// Page requested from the pagination bar, bounded by the last result
    pub fn go_to_page(&mut self, next: i64) -> Vec<Command> {
        let total = self.search.result.as_ref().map(|r| r.total_pages);
        match page_request(next, total) {
            Some(page) => self.sync_external_page(Some(page)),
            None => {
                debug!("Ignoring out-of-range page {}", next);
                Vec::new()
            }
        }
    }

    /// Reset every filter to its default and drop neighborhood data
    pub fn clear_all(&mut self) {
        self.filters = FilterState::cleared();
        self.bairros.clear();
    }

    /// Manual retry for one option list
    pub fn reload(&mut self, kind: OptionKind) -> Vec<Command> {
        let source = match OptionSource::unscoped(kind) {
            Some(source) => source,
            None => match self.filters.trimmed_cidade() {
                Some(cidade) => OptionSource::Bairros(cidade.to_string()),
                None => {
                    self.bairros.clear();
                    return Vec::new();
                }
            },
        };
        vec![self.load_command(source)]
    }

    /// Record the outcome of a finished request
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Search { id, result } => {
                if self.search.latest != Some(id) {
                    debug!("Discarding stale search response {}", id);
                    return;
                }
                self.search.loading = false;

                match result {
                    Ok(page) => {
                        debug!(
                            "Search {} returned {} of {} results",
                            id,
                            page.content.len(),
                            page.total_elements
                        );
                        self.search.error = None;
                        self.search.result = Some(page);
                    }
                    Err(err) => {
                        warn!("Search {} failed: {}", id, err);
                        self.search.error = Some(err.user_message_for(DataSource::Search));
                    }
                }

                if self.init == InitState::Initializing {
                    self.init = InitState::Ready;
                }
            }
            Completion::Options { id, kind, result } => {
                let list = self.list_mut(kind);
                if list.latest != Some(id) {
                    debug!("Discarding stale {} response {}", kind, id);
                    return;
                }
                list.loading = false;

                match result {
                    Ok(options) => {
                        list.error = None;
                        list.options = options;
                    }
                    Err(err) => {
                        warn!("Loading {} failed: {}", kind, err);
                        list.options.clear();
                        list.error = Some(err.user_message_for(DataSource::Options));
                    }
                }
            }
        }
    }
}
