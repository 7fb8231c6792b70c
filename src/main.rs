use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use imobiliaria_client::contact::{
    messages, redirect_to_whatsapp, AdvertiseForm, ContactTopic, Destinacao, Finalidade,
    InterestForm, PrintRedirector, WhatsappLink,
};
use imobiliaria_client::detail::DetailView;
use imobiliaria_client::format::{
    card_badges, card_location, card_title, count, format_area, format_brl,
};
use imobiliaria_client::home::{HomeSearchForm, HomeTab};
use imobiliaria_client::{
    build_query, compute_range, CatalogApi, FilterState, FiltersPanel, ImobiliariaClient,
    Modalidade, OptionKind, OptionSource, PageItem, PageResponse, PanelDriver, PropertyCard,
    Settings,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Real-estate listing search client")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG_PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search listings with filters
    Search(SearchArgs),
    /// Show the option lists used by the filters
    Options {
        /// Also list the neighborhoods of this city
        #[arg(long)]
        cidade: Option<String>,
    },
    /// Show one property
    Show {
        /// Property code
        id: String,
    },
    /// Home page quick search: prints where it leads
    Home(HomeArgs),
    /// Send an "advertise your property" lead through WhatsApp
    Advertise(AdvertiseArgs),
    /// Print a WhatsApp contact link
    Contact(ContactArgs),
}

#[derive(Args, Debug)]
struct ContactArgs {
    /// Property the contact is about
    #[arg(long)]
    property: Option<i64>,
    /// Ask to schedule a visit instead of asking for information
    #[arg(long, requires = "property", conflicts_with = "info")]
    visit: bool,
    /// General "Fale Conosco" message
    #[arg(long, conflicts_with = "property")]
    info: bool,

    /// Sends the interest form with this name
    #[arg(long, requires = "property")]
    nome: Option<String>,
    #[arg(long, requires = "property")]
    email: Option<String>,
    #[arg(long, requires = "property")]
    telefone: Option<String>,
    /// Replaces the prefilled interest text
    #[arg(long, requires = "property")]
    mensagem: Option<String>,
}

impl ContactArgs {
    fn topic(self) -> ContactTopic {
        let Some(id) = self.property else {
            return if self.info {
                ContactTopic::GeneralInfo
            } else {
                ContactTopic::Greeting
            };
        };
        if self.visit {
            return ContactTopic::Visit(id);
        }
        if self.nome.is_none()
            && self.email.is_none()
            && self.telefone.is_none()
            && self.mensagem.is_none()
        {
            return ContactTopic::Property(id);
        }

        let prefilled = InterestForm::for_property(id);
        ContactTopic::Form(InterestForm {
            name: self.nome.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.telefone.unwrap_or_default(),
            message: self.mensagem.unwrap_or(prefilled.message),
        })
    }
}

#[derive(Args, Debug, Default)]
struct SearchArgs {
    #[arg(long)]
    cidade: Option<String>,
    #[arg(long)]
    bairro: Option<String>,
    #[arg(long)]
    condominio: Option<String>,
    #[arg(long)]
    tipo: Option<String>,
    /// COMPRA or ALUGUEL
    #[arg(long)]
    modalidade: Option<Modalidade>,
    #[arg(long)]
    aceita_permuta: Option<bool>,

    #[arg(long)]
    quartos: Option<f64>,
    #[arg(long)]
    banheiros: Option<f64>,
    #[arg(long)]
    suites: Option<f64>,
    #[arg(long)]
    vagas: Option<f64>,

    #[arg(long)]
    area_min: Option<f64>,
    #[arg(long)]
    area_max: Option<f64>,
    #[arg(long)]
    lote_min: Option<f64>,
    #[arg(long)]
    lote_max: Option<f64>,

    #[arg(long)]
    valor_min: Option<f64>,
    #[arg(long)]
    valor_max: Option<f64>,
    #[arg(long)]
    condominio_min: Option<f64>,
    #[arg(long)]
    condominio_max: Option<f64>,
    #[arg(long)]
    iptu_min: Option<f64>,
    #[arg(long)]
    iptu_max: Option<f64>,

    /// Required internal feature (repeatable)
    #[arg(long = "interna")]
    internas: Vec<String>,
    /// Required external feature (repeatable)
    #[arg(long = "externa")]
    externas: Vec<String>,

    /// Zero-based page
    #[arg(long)]
    page: Option<u32>,

    /// Save the result page as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SearchArgs {
    fn to_filters(&self) -> FilterState {
        FilterState {
            condominio: self.condominio.clone(),
            bairro: self.bairro.clone(),
            cidade: self.cidade.clone(),
            aceita_permuta: self.aceita_permuta,
            tipo: self.tipo.clone(),
            modalidade: self.modalidade,
            area_principal_min: self.area_min,
            area_principal_max: self.area_max,
            area_lote_min: self.lote_min,
            area_lote_max: self.lote_max,
            qtd_quartos: self.quartos,
            qtd_banheiros: self.banheiros,
            qtd_suites: self.suites,
            qtd_vagas: self.vagas,
            caract_internas_contem: self.internas.clone(),
            caract_externas_contem: self.externas.clone(),
            valor_imovel_min: self.valor_min,
            valor_imovel_max: self.valor_max,
            valor_condominio_min: self.condominio_min,
            valor_condominio_max: self.condominio_max,
            valor_iptu_min: self.iptu_min,
            valor_iptu_max: self.iptu_max,
            page: self.page,
        }
    }
}

#[derive(Args, Debug)]
struct HomeArgs {
    /// Search rentals instead of sales
    #[arg(long)]
    alugar: bool,
    #[arg(long, default_value = "")]
    tipo: String,
    #[arg(long, default_value = "")]
    cidade: String,
    #[arg(long, default_value = "")]
    bairro: String,
    /// 1, 2, 3 or 4+
    #[arg(long, default_value = "")]
    quartos: String,
    #[arg(long, default_value = "")]
    valor_min: String,
    #[arg(long, default_value = "")]
    valor_max: String,
    /// Property code; skips the filters
    #[arg(long, default_value = "")]
    codigo: String,
}

#[derive(Args, Debug)]
struct AdvertiseArgs {
    /// JSON file with the complete form
    #[arg(long, value_name = "FORM_JSON")]
    form: Option<PathBuf>,

    #[arg(long)]
    nome: Option<String>,
    #[arg(long)]
    telefone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// VENDER or ALUGAR
    #[arg(long)]
    finalidade: Option<Finalidade>,
    #[arg(long)]
    tipo: Option<String>,
    /// RESIDENCIAL, COMERCIAL, RESIDENCIAL_E_COMERCIAL, INDUSTRIAL, RURAL or TEMPORADA
    #[arg(long)]
    destinacao: Option<Destinacao>,
    #[arg(long)]
    valor: Option<String>,
    #[arg(long)]
    cidade: Option<String>,
    #[arg(long)]
    bairro: Option<String>,
    #[arg(long)]
    quartos: Option<String>,
    #[arg(long)]
    aceita_permuta: bool,

    /// Consent to be contacted
    #[arg(long)]
    agree: bool,
}

/// Search result as written to disk
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnapshot<'a> {
    fetched_at: DateTime<Utc>,
    query: String,
    filters: &'a FilterState,
    page: &'a PageResponse<PropertyCard>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let link = WhatsappLink::from_settings(&settings.contact);

    match cli.command {
        Command::Search(args) => run_search(&settings, args).await,
        Command::Options { cidade } => run_options(&settings, cidade).await,
        Command::Show { id } => run_show(&settings, &link, &id).await,
        Command::Home(args) => {
            let form = HomeSearchForm {
                tab: if args.alugar { HomeTab::Alugar } else { HomeTab::Comprar },
                tipo: args.tipo,
                cidade: args.cidade,
                bairro: args.bairro,
                quartos: args.quartos,
                valor_min: args.valor_min,
                valor_max: args.valor_max,
                codigo: args.codigo,
            };
            println!("{}", form.submit().path());
            Ok(())
        }
        Command::Advertise(args) => run_advertise(&link, args).await,
        Command::Contact(args) => {
            redirect_to_whatsapp(&link, &PrintRedirector, &args.topic().message())?;
            Ok(())
        }
    }
}

async fn run_search(settings: &Settings, args: SearchArgs) -> Result<()> {
    let api = Arc::new(ImobiliariaClient::new(&settings.api)?);
    info!("🏠 Searching {}", api.base_url());

    let mut driver = PanelDriver::new(api, FiltersPanel::new(Some(args.to_filters())));
    driver.initialize();
    driver.settle().await;

    let panel = driver.panel();
    for kind in OptionKind::STATIC {
        if let Some(err) = &panel.list(kind).error {
            warn!("Could not load {} ({}); run `imobiliaria options` to retry", kind, err);
        }
    }

    let search = panel.search_state();
    let Some(page) = &search.result else {
        bail!(
            "Search failed: {}",
            search.error.as_deref().unwrap_or("no response")
        );
    };

    info!("✅ {} properties found\n", page.total_elements);

    for card in &page.content {
        println!(
            "{} [{}] {}",
            card_title(card),
            card_badges(card).join("] ["),
            format_brl(card.valor_imovel, false).unwrap_or_else(|| "Consulte".to_string())
        );
        println!("   {}", card_location(card));
        println!(
            "   {} qts, {} bhs, {} vagas, {}",
            count(card.qtd_quartos),
            count(card.qtd_banheiros),
            count(card.qtd_vagas),
            format_area(card.area_principal.or(card.area_lote)).unwrap_or_else(|| "—".into())
        );
        println!("   cód. {} → /imovel/{}", card.id, card.id);
        println!();
    }

    if page.total_pages > 1 {
        let bar: Vec<String> = compute_range(page.number, page.total_pages, settings.search.sibling_count)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(p) if p == page.number => format!("[{}]", p + 1),
                PageItem::Page(p) => (p + 1).to_string(),
                PageItem::Ellipsis => "…".to_string(),
            })
            .collect();
        println!("Páginas: {}", bar.join(" "));
    }

    if let Some(path) = args.output {
        let filters = panel.filters();
        let snapshot = SearchSnapshot {
            fetched_at: Utc::now(),
            query: build_query(filters),
            filters,
            page,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved results to {}", path.display());
    }

    Ok(())
}

async fn run_options(settings: &Settings, cidade: Option<String>) -> Result<()> {
    let api = ImobiliariaClient::new(&settings.api)?;

    let mut sources: Vec<OptionSource> = OptionKind::STATIC
        .into_iter()
        .filter_map(OptionSource::unscoped)
        .collect();
    if let Some(cidade) = cidade.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        sources.push(OptionSource::Bairros(cidade.to_string()));
    }

    for source in sources {
        match api.options(&source).await {
            Ok(list) => println!("{}: {}", source.kind(), list.join(", ")),
            Err(err) => warn!("{}: {} (tente novamente)", source.kind(), err),
        }
    }
    Ok(())
}

async fn run_show(settings: &Settings, link: &WhatsappLink, id: &str) -> Result<()> {
    let api = ImobiliariaClient::new(&settings.api)?;

    let mut view = DetailView::new();
    view.load(&api, id).await;

    if let Some(err) = &view.error {
        bail!("{}", err);
    }
    let (Some(property), Some(title)) = (&view.data, view.title()) else {
        bail!("Imóvel {} não encontrado", id);
    };

    println!("{}", title);
    println!(
        "   {}",
        format_brl(property.valor_imovel, true).unwrap_or_else(|| "—".into())
    );
    println!(
        "   Condomínio: {}  IPTU: {}",
        format_brl(property.valor_condominio, true).unwrap_or_else(|| "—".into()),
        format_brl(property.valor_iptu, true).unwrap_or_else(|| "—".into())
    );
    println!(
        "   {} quartos, {} suítes, {} banheiros, {} vagas",
        count(property.qtd_quartos),
        count(property.qtd_suites),
        count(property.qtd_banheiros),
        count(property.qtd_vagas)
    );
    println!(
        "   Área: {}  Lote: {}",
        format_area(property.area_principal).unwrap_or_else(|| "—".into()),
        format_area(property.area_lote).unwrap_or_else(|| "—".into())
    );
    if let Some(descricao) = &property.descricao {
        println!("\n{}\n", descricao);
    }
    println!("   Internas: {}", property.internal_features().join(", "));
    println!("   Externas: {}", property.external_features().join(", "));
    println!("   {} fotos", property.images().len());
    println!();
    println!("Tenho interesse: {}", link.url(&view.interest_message));
    println!(
        "Agendar visita:  {}",
        link.url(&messages::schedule_visit(property.id))
    );
    Ok(())
}

async fn run_advertise(link: &WhatsappLink, args: AdvertiseArgs) -> Result<()> {
    let mut form = match &args.form {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<AdvertiseForm>(&raw).context("Invalid form JSON")?
        }
        None => AdvertiseForm::default(),
    };

    let overrides = [
        (&mut form.nome, args.nome),
        (&mut form.telefone, args.telefone),
        (&mut form.email, args.email),
        (&mut form.tipo, args.tipo),
        (&mut form.valor, args.valor),
        (&mut form.cidade, args.cidade),
        (&mut form.bairro, args.bairro),
        (&mut form.quartos, args.quartos),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
    form.finalidade = args.finalidade.or(form.finalidade);
    form.destinacao = args.destinacao.or(form.destinacao);
    form.aceita_permuta |= args.aceita_permuta;

    form.validate(args.agree)?;
    redirect_to_whatsapp(link, &PrintRedirector, &form.message())?;
    Ok(())
}
