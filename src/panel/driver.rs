use crate::api::{CatalogApi, FetchError, OptionKind};
use crate::filters::FilterUpdate;
use crate::panel::manager::{Command, Completion, FiltersPanel};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Runs a [`FiltersPanel`] against a live catalog.
///
/// Each command runs on its own task, so requests overlap freely; results are
/// applied one at a time as they arrive.
pub struct PanelDriver<A: CatalogApi + 'static> {
    api: Arc<A>,
    panel: FiltersPanel,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl<A: CatalogApi + 'static> PanelDriver<A> {
    pub fn new(api: Arc<A>, panel: FiltersPanel) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            panel,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn panel(&self) -> &FiltersPanel {
        &self.panel
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn initialize(&mut self) {
        let commands = self.panel.initialize();
        self.dispatch(commands);
    }

    pub fn set_field(&mut self, update: FilterUpdate) {
        let commands = self.panel.set_field(update);
        self.dispatch(commands);
    }

    pub fn submit(&mut self) {
        let commands = self.panel.submit();
        self.dispatch(commands);
    }

    pub fn sync_external_page(&mut self, page: Option<u32>) {
        let commands = self.panel.sync_external_page(page);
        self.dispatch(commands);
    }

    pub fn go_to_page(&mut self, next: i64) {
        let commands = self.panel.go_to_page(next);
        self.dispatch(commands);
    }

    pub fn clear_all(&mut self) {
        self.panel.clear_all();
    }

    pub fn reload(&mut self, kind: OptionKind) {
        let commands = self.panel.reload(kind);
        self.dispatch(commands);
    }

    fn dispatch(&mut self, commands: Vec<Command>) {
        for command in commands {
            let api = Arc::clone(&self.api);
            let tx = self.tx.clone();
            self.in_flight += 1;

            tokio::spawn(async move {
                let fallback = interrupted(&command);
                let request = tokio::spawn(async move { execute(&*api, command).await });
                let completion = match request.await {
                    Ok(completion) => completion,
                    Err(err) => {
                        warn!("Request task failed: {}", err);
                        fallback
                    }
                };
                // receiver gone means the driver was dropped
                let _ = tx.send(completion);
            });
        }
    }

    /// Wait for the next response and apply it.
    ///
    /// Returns `false` when nothing is in flight.
    pub async fn next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.rx.recv().await {
            Some(completion) => {
                self.in_flight -= 1;
                self.panel.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Apply responses until no request is left in flight
    pub async fn settle(&mut self) {
        while self.next().await {}
    }
}

async fn execute<A: CatalogApi + ?Sized>(api: &A, command: Command) -> Completion {
    match command {
        Command::Search { id, filters } => {
            debug!("[{}] search #{}", api.source_name(), id);
            Completion::Search {
                id,
                result: api.search(&filters).await,
            }
        }
        Command::LoadOptions { id, source } => {
            debug!("[{}] load {} #{}", api.source_name(), source.kind(), id);
            Completion::Options {
                id,
                kind: source.kind(),
                result: api.options(&source).await,
            }
        }
    }
}

/// Failed completion for a request whose task died before answering
fn interrupted(command: &Command) -> Completion {
    let err = || FetchError::Network("requisição interrompida".to_string());
    match command {
        Command::Search { id, .. } => Completion::Search {
            id: *id,
            result: Err(err()),
        },
        Command::LoadOptions { id, source } => Completion::Options {
            id: *id,
            kind: source.kind(),
            result: Err(err()),
        },
    }
}
