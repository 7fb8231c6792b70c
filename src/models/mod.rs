use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing mode of a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modalidade {
    Compra,
    Aluguel,
}

impl Modalidade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modalidade::Compra => "COMPRA",
            Modalidade::Aluguel => "ALUGUEL",
        }
    }
}

impl fmt::Display for Modalidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modalidade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COMPRA" | "VENDA" => Ok(Modalidade::Compra),
            "ALUGUEL" => Ok(Modalidade::Aluguel),
            other => Err(format!("unknown modalidade: {other}")),
        }
    }
}

/// One card in the search results grid
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCard {
    pub id: i64,
    pub tipo: Option<String>,
    /// Kept as a string: the backend also emits modes the filter never sends
    /// (e.g. "LANCAMENTOS").
    pub modalidade: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub condominio: Option<String>,
    pub qtd_quartos: Option<u32>,
    pub qtd_banheiros: Option<u32>,
    pub qtd_suites: Option<u32>,
    pub qtd_vagas: Option<u32>,
    pub area_principal: Option<f64>,
    pub area_lote: Option<f64>,
    pub valor_imovel: Option<f64>,
    pub valor_condominio: Option<f64>,
    pub valor_iptu: Option<f64>,
    pub aceita_permuta: Option<bool>,
    pub destaque: Option<bool>,
    pub descricao: Option<String>,
    pub midias: Option<Vec<String>>,
}

impl PropertyCard {
    /// First media entry, used as the card cover
    pub fn cover(&self) -> Option<&str> {
        self.midias.as_ref()?.first().map(String::as_str)
    }
}

/// Full property record shown on the detail page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub tipo: Option<String>,
    /// Raw backend value, same as [`PropertyCard::modalidade`]
    pub modalidade: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub condominio: Option<String>,
    pub descricao: Option<String>,
    pub area_principal: Option<f64>,
    pub area_lote: Option<f64>,
    pub qtd_quartos: Option<u32>,
    pub qtd_banheiros: Option<u32>,
    pub qtd_suites: Option<u32>,
    pub qtd_vagas: Option<u32>,
    pub valor_condominio: Option<f64>,
    pub valor_imovel: Option<f64>,
    pub valor_iptu: Option<f64>,
    pub aceita_permuta: Option<bool>,
    pub destaque: Option<bool>,
    pub midias: Option<Vec<String>>,
    pub caract_internas: Option<Vec<String>>,
    pub caract_externas: Option<Vec<String>>,
}

impl Property {
    /// Sale listing, as opposed to rentals and every other mode
    pub fn is_sale(&self) -> bool {
        self.modalidade
            .as_deref()
            .and_then(|m| m.parse::<Modalidade>().ok())
            == Some(Modalidade::Compra)
    }

    pub fn images(&self) -> &[String] {
        self.midias.as_deref().unwrap_or_default()
    }

    pub fn internal_features(&self) -> Vec<&str> {
        non_blank(self.caract_internas.as_deref())
    }

    pub fn external_features(&self) -> Vec<&str> {
        non_blank(self.caract_externas.as_deref())
    }
}

fn non_blank(list: Option<&[String]>) -> Vec<&str> {
    list.unwrap_or_default()
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Pagination envelope returned by the search endpoint.
///
/// Replaced wholesale on every successful search; never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    /// Current page, zero-based
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

impl<T> Default for PageResponse<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size: 0,
            number_of_elements: 0,
            total_pages: 0,
            total_elements: 0,
            first: true,
            last: true,
            empty: true,
        }
    }
}
