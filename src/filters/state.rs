use crate::models::Modalidade;
use serde::{Deserialize, Serialize};

/// Search criteria applied to the listing query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub condominio: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub aceita_permuta: Option<bool>,

    pub tipo: Option<String>,
    pub modalidade: Option<Modalidade>,

    /// Main area in m²
    pub area_principal_min: Option<f64>,
    pub area_principal_max: Option<f64>,
    /// Lot area in m²
    pub area_lote_min: Option<f64>,
    pub area_lote_max: Option<f64>,

    pub qtd_quartos: Option<f64>,
    pub qtd_banheiros: Option<f64>,
    pub qtd_suites: Option<f64>,
    pub qtd_vagas: Option<f64>,

    #[serde(default)]
    pub caract_internas_contem: Vec<String>,
    #[serde(default)]
    pub caract_externas_contem: Vec<String>,

    pub valor_imovel_min: Option<f64>,
    pub valor_imovel_max: Option<f64>,
    pub valor_condominio_min: Option<f64>,
    pub valor_condominio_max: Option<f64>,
    pub valor_iptu_min: Option<f64>,
    pub valor_iptu_max: Option<f64>,

    /// Zero-based result page
    pub page: Option<u32>,
}

impl FilterState {
    /// Defaults the panel starts from and returns to on "clear all"
    pub fn cleared() -> Self {
        Self {
            modalidade: Some(Modalidade::Compra),
            page: Some(0),
            ..Default::default()
        }
    }

    /// State used for the first search: the caller's values with the
    /// modality and page defaults filled in.
    pub fn initial(initial: Option<FilterState>) -> Self {
        let mut state = initial.unwrap_or_default();
        state.modalidade.get_or_insert(Modalidade::Compra);
        state.page.get_or_insert(0);
        state
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    /// City with surrounding whitespace removed, `None` when blank
    pub fn trimmed_cidade(&self) -> Option<&str> {
        self.cidade
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Apply a single field update.
    ///
    /// Any field other than `page` forces the page back to 0.
    pub fn apply(&mut self, update: FilterUpdate) {
        let resets_page = !matches!(update, FilterUpdate::Page(_));

        match update {
            FilterUpdate::Condominio(v) => self.condominio = v,
            FilterUpdate::Bairro(v) => self.bairro = v,
            FilterUpdate::Cidade(v) => self.cidade = v,
            FilterUpdate::AceitaPermuta(v) => self.aceita_permuta = v,
            FilterUpdate::Tipo(v) => self.tipo = v,
            FilterUpdate::Modalidade(v) => self.modalidade = v,
            FilterUpdate::AreaPrincipalMin(v) => self.area_principal_min = v,
            FilterUpdate::AreaPrincipalMax(v) => self.area_principal_max = v,
            FilterUpdate::AreaLoteMin(v) => self.area_lote_min = v,
            FilterUpdate::AreaLoteMax(v) => self.area_lote_max = v,
            FilterUpdate::QtdQuartos(v) => self.qtd_quartos = v,
            FilterUpdate::QtdBanheiros(v) => self.qtd_banheiros = v,
            FilterUpdate::QtdSuites(v) => self.qtd_suites = v,
            FilterUpdate::QtdVagas(v) => self.qtd_vagas = v,
            FilterUpdate::CaractInternasContem(v) => self.caract_internas_contem = v,
            FilterUpdate::CaractExternasContem(v) => self.caract_externas_contem = v,
            FilterUpdate::ValorImovelMin(v) => self.valor_imovel_min = v,
            FilterUpdate::ValorImovelMax(v) => self.valor_imovel_max = v,
            FilterUpdate::ValorCondominioMin(v) => self.valor_condominio_min = v,
            FilterUpdate::ValorCondominioMax(v) => self.valor_condominio_max = v,
            FilterUpdate::ValorIptuMin(v) => self.valor_iptu_min = v,
            FilterUpdate::ValorIptuMax(v) => self.valor_iptu_max = v,
            FilterUpdate::Page(p) => self.page = Some(p),
        }

        if resets_page {
            self.page = Some(0);
        }
    }
}

/// A change to exactly one filter field
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Condominio(Option<String>),
    Bairro(Option<String>),
    Cidade(Option<String>),
    AceitaPermuta(Option<bool>),
    Tipo(Option<String>),
    Modalidade(Option<Modalidade>),
    AreaPrincipalMin(Option<f64>),
    AreaPrincipalMax(Option<f64>),
    AreaLoteMin(Option<f64>),
    AreaLoteMax(Option<f64>),
    QtdQuartos(Option<f64>),
    QtdBanheiros(Option<f64>),
    QtdSuites(Option<f64>),
    QtdVagas(Option<f64>),
    CaractInternasContem(Vec<String>),
    CaractExternasContem(Vec<String>),
    ValorImovelMin(Option<f64>),
    ValorImovelMax(Option<f64>),
    ValorCondominioMin(Option<f64>),
    ValorCondominioMax(Option<f64>),
    ValorIptuMin(Option<f64>),
    ValorIptuMax(Option<f64>),
    Page(u32),
}

impl FilterUpdate {
    /// Query-string key of the field being changed
    pub fn key(&self) -> &'static str {
        match self {
            FilterUpdate::Condominio(_) => "condominio",
            FilterUpdate::Bairro(_) => "bairro",
            FilterUpdate::Cidade(_) => "cidade",
            FilterUpdate::AceitaPermuta(_) => "aceitaPermuta",
            FilterUpdate::Tipo(_) => "tipo",
            FilterUpdate::Modalidade(_) => "modalidade",
            FilterUpdate::AreaPrincipalMin(_) => "areaPrincipalMin",
            FilterUpdate::AreaPrincipalMax(_) => "areaPrincipalMax",
            FilterUpdate::AreaLoteMin(_) => "areaLoteMin",
            FilterUpdate::AreaLoteMax(_) => "areaLoteMax",
            FilterUpdate::QtdQuartos(_) => "qtdQuartos",
            FilterUpdate::QtdBanheiros(_) => "qtdBanheiros",
            FilterUpdate::QtdSuites(_) => "qtdSuites",
            FilterUpdate::QtdVagas(_) => "qtdVagas",
            FilterUpdate::CaractInternasContem(_) => "caractInternasContem",
            FilterUpdate::CaractExternasContem(_) => "caractExternasContem",
            FilterUpdate::ValorImovelMin(_) => "valorImovelMin",
            FilterUpdate::ValorImovelMax(_) => "valorImovelMax",
            FilterUpdate::ValorCondominioMin(_) => "valorCondominioMin",
            FilterUpdate::ValorCondominioMax(_) => "valorCondominioMax",
            FilterUpdate::ValorIptuMin(_) => "valorIptuMin",
            FilterUpdate::ValorIptuMax(_) => "valorIptuMax",
            FilterUpdate::Page(_) => "page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_non_page_update() -> Vec<FilterUpdate> {
        vec![
            FilterUpdate::Condominio(Some("Alphaville".into())),
            FilterUpdate::Bairro(Some("Centro".into())),
            FilterUpdate::Cidade(Some("Santo André".into())),
            FilterUpdate::AceitaPermuta(Some(true)),
            FilterUpdate::Tipo(Some("Casa".into())),
            FilterUpdate::Modalidade(Some(Modalidade::Aluguel)),
            FilterUpdate::AreaPrincipalMin(Some(50.0)),
            FilterUpdate::AreaPrincipalMax(Some(120.0)),
            FilterUpdate::AreaLoteMin(Some(200.0)),
            FilterUpdate::AreaLoteMax(None),
            FilterUpdate::QtdQuartos(Some(3.0)),
            FilterUpdate::QtdBanheiros(Some(2.0)),
            FilterUpdate::QtdSuites(Some(1.0)),
            FilterUpdate::QtdVagas(Some(2.0)),
            FilterUpdate::CaractInternasContem(vec!["Piscina".into()]),
            FilterUpdate::CaractExternasContem(vec![]),
            FilterUpdate::ValorImovelMin(Some(100_000.0)),
            FilterUpdate::ValorImovelMax(Some(900_000.0)),
            FilterUpdate::ValorCondominioMin(None),
            FilterUpdate::ValorCondominioMax(Some(800.0)),
            FilterUpdate::ValorIptuMin(Some(0.0)),
            FilterUpdate::ValorIptuMax(Some(300.0)),
        ]
    }

    #[test]
    fn test_every_field_change_resets_page() {
        for update in every_non_page_update() {
            let mut state = FilterState::cleared();
            state.page = Some(4);
            let key = update.key();
            state.apply(update);
            assert_eq!(state.page, Some(0), "{key} should reset the page");
        }
    }

    #[test]
    fn test_page_update_keeps_other_fields() {
        let mut state = FilterState::cleared();
        state.apply(FilterUpdate::Cidade(Some("Mauá".into())));
        state.apply(FilterUpdate::Page(3));

        assert_eq!(state.page, Some(3));
        assert_eq!(state.cidade.as_deref(), Some("Mauá"));
    }

    #[test]
    fn test_initial_fills_defaults_without_overriding() {
        let state = FilterState::initial(None);
        assert_eq!(state.modalidade, Some(Modalidade::Compra));
        assert_eq!(state.page, Some(0));

        let state = FilterState::initial(Some(FilterState {
            modalidade: Some(Modalidade::Aluguel),
            page: Some(2),
            ..Default::default()
        }));
        assert_eq!(state.modalidade, Some(Modalidade::Aluguel));
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_trimmed_cidade() {
        let mut state = FilterState::default();
        assert_eq!(state.trimmed_cidade(), None);
        state.cidade = Some("   ".into());
        assert_eq!(state.trimmed_cidade(), None);
        state.cidade = Some(" Mauá ".into());
        assert_eq!(state.trimmed_cidade(), Some("Mauá"));
    }
}
