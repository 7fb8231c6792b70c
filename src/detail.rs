use crate::api::{CatalogApi, DataSource, FetchError};
use crate::contact::messages;
use crate::models::Property;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// A detail fetch handed out by [`DetailView::begin`]
#[derive(Debug, Clone)]
pub struct DetailRequest {
    pub generation: u64,
    pub id: String,
    pub token: CancellationToken,
}

/// How a detail fetch ended
#[derive(Debug)]
pub enum DetailOutcome {
    Loaded(Property),
    Failed(FetchError),
    Cancelled,
}

/// Fetch one property, giving up as soon as the request is cancelled
pub async fn fetch_detail<A: CatalogApi + ?Sized>(api: &A, request: &DetailRequest) -> DetailOutcome {
    tokio::select! {
        _ = request.token.cancelled() => {
            debug!("Detail fetch for {} cancelled", request.id);
            DetailOutcome::Cancelled
        }
        result = api.property(&request.id) => match result {
            Ok(property) => DetailOutcome::Loaded(property),
            Err(err) => DetailOutcome::Failed(err),
        },
    }
}

/// State of the property detail page.
///
/// Only the latest requested identifier may write into the view: starting a
/// new request or closing the view cancels the one in flight.
#[derive(Debug, Default)]
pub struct DetailView {
    pub data: Option<Property>,
    pub loading: bool,
    pub error: Option<String>,
    /// Prefilled text of the "Tenho interesse" form
    pub interest_message: String,
    generation: u64,
    current: Option<CancellationToken>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    fn cancel_current(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }

    /// Start loading `id`, superseding any request still running
    pub fn begin(&mut self, id: &str) -> Option<DetailRequest> {
        self.cancel_current();
        self.generation += 1;
        self.error = None;

        let id = id.trim();
        if id.is_empty() {
            self.loading = false;
            self.error = Some(FetchError::MissingId.user_message());
            return None;
        }

        self.loading = true;
        let token = CancellationToken::new();
        self.current = Some(token.clone());

        Some(DetailRequest {
            generation: self.generation,
            id: id.to_string(),
            token,
        })
    }

    /// Apply the outcome of a request; superseded or cancelled ones are ignored
    pub fn finish(&mut self, generation: u64, outcome: DetailOutcome) {
        if generation != self.generation {
            debug!("Ignoring superseded detail response {}", generation);
            return;
        }

        match outcome {
            DetailOutcome::Cancelled => return,
            DetailOutcome::Loaded(property) => {
                info!("Loaded property {}", property.id);
                self.interest_message = messages::interest(property.id);
                self.data = Some(property);
            }
            DetailOutcome::Failed(err) => {
                warn!("Loading property failed: {}", err);
                self.error = Some(err.user_message_for(DataSource::Property));
            }
        }

        self.loading = false;
        self.current = None;
    }

    /// The page goes away: cancel whatever is still loading
    pub fn close(&mut self) {
        self.cancel_current();
        self.loading = false;
    }

    /// Load `id` and wait for it
    pub async fn load<A: CatalogApi + ?Sized>(&mut self, api: &A, id: &str) {
        if let Some(request) = self.begin(id) {
            let outcome = fetch_detail(api, &request).await;
            self.finish(request.generation, outcome);
        }
    }

    /// Heading such as "Casa à venda, Centro - Mauá"
    pub fn title(&self) -> Option<String> {
        self.data.as_ref().map(property_title)
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        self.cancel_current();
    }
}

pub fn property_title(property: &Property) -> String {
    let mode = if property.is_sale() {
        "à venda"
    } else {
        "para alugar"
    };
    format!(
        "{} {}, {} - {}",
        property.tipo.as_deref().unwrap_or("Imóvel"),
        mode,
        property.bairro.as_deref().unwrap_or_default(),
        property.cidade.as_deref().unwrap_or_default()
    )
}
