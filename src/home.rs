use crate::filters::{FilterState, QueryPairs};
use crate::models::Modalidade;
use serde::{Deserialize, Serialize};

/// Buy/rent tab of the home page search box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeTab {
    #[default]
    Comprar,
    Alugar,
}

impl HomeTab {
    pub fn modalidade(&self) -> Modalidade {
        match self {
            HomeTab::Comprar => Modalidade::Compra,
            HomeTab::Alugar => Modalidade::Aluguel,
        }
    }
}

/// Where a home search submission leads
#[derive(Debug, Clone, PartialEq)]
pub enum HomeTarget {
    /// Results page with this query string
    Results(String),
    /// Property page reached by its code
    Property(String),
}

impl HomeTarget {
    pub fn path(&self) -> String {
        match self {
            HomeTarget::Results(query) => format!("/busca?{}", query),
            HomeTarget::Property(code) => format!("/imovel/{}", urlencoding::encode(code)),
        }
    }
}

/// Quick search box on the home page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeSearchForm {
    pub tab: HomeTab,
    pub tipo: String,
    pub cidade: String,
    pub bairro: String,
    /// "1", "2", "3" or "4+"
    pub quartos: String,
    /// Free text, only its digits count
    pub valor_min: String,
    pub valor_max: String,
    /// Property code; when set the search jumps straight to that property
    pub codigo: String,
}

/// "4+" means at least four
fn parse_quartos(raw: &str) -> Option<f64> {
    match raw.trim() {
        "" => None,
        "4+" => Some(4.0),
        other => other.parse::<f64>().ok().filter(|n| n.is_finite()),
    }
}

/// Digits only; zero or nothing means no bound
fn parse_money(raw: &str) -> Option<f64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<f64>().ok().filter(|n| *n > 0.0)
}

fn non_blank(s: &str) -> Option<String> {
    Some(s.trim().to_string()).filter(|s| !s.is_empty())
}

impl HomeSearchForm {
    pub fn is_code_mode(&self) -> bool {
        !self.codigo.trim().is_empty()
    }

    /// Filters the results page starts from
    pub fn to_filters(&self) -> FilterState {
        FilterState {
            modalidade: Some(self.tab.modalidade()),
            tipo: non_blank(&self.tipo),
            cidade: non_blank(&self.cidade),
            bairro: non_blank(&self.bairro),
            qtd_quartos: parse_quartos(&self.quartos),
            valor_imovel_min: parse_money(&self.valor_min),
            valor_imovel_max: parse_money(&self.valor_max),
            page: Some(0),
            ..Default::default()
        }
    }

    /// Query string for the results page, always on page 0
    pub fn query(&self) -> String {
        let filters = self.to_filters();
        let mut q = QueryPairs::new();
        q.text("modalidade", filters.modalidade.map(|m| m.as_str()))
            .text("tipo", filters.tipo.as_deref())
            .text("cidade", filters.cidade.as_deref())
            .text("bairro", filters.bairro.as_deref())
            .number("qtdQuartos", filters.qtd_quartos)
            .number("valorImovelMin", filters.valor_imovel_min)
            .number("valorImovelMax", filters.valor_imovel_max)
            .number("page", Some(0.0));
        q.finish()
    }

    /// Code search wins over the filters when a code was typed
    pub fn submit(&self) -> HomeTarget {
        if self.is_code_mode() {
            HomeTarget::Property(self.codigo.trim().to_string())
        } else {
            HomeTarget::Results(self.query())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_is_buy_page_zero() {
        assert_eq!(
            HomeSearchForm::default().submit().path(),
            "/busca?modalidade=COMPRA&page=0"
        );
    }

    #[test]
    fn test_quartos_and_money_parsing() {
        let form = HomeSearchForm {
            tab: HomeTab::Alugar,
            cidade: "Santo André".into(),
            quartos: "4+".into(),
            valor_min: "R$ 1.500".into(),
            valor_max: "R$ 0".into(),
            ..Default::default()
        };

        assert_eq!(
            form.query(),
            "modalidade=ALUGUEL&cidade=Santo%20Andr%C3%A9&qtdQuartos=4&valorImovelMin=1500&page=0"
        );

        let filters = form.to_filters();
        assert_eq!(filters.qtd_quartos, Some(4.0));
        assert_eq!(filters.valor_imovel_max, None);
    }

    #[test]
    fn test_unparseable_quartos_is_dropped() {
        let form = HomeSearchForm {
            quartos: "muitos".into(),
            ..Default::default()
        };
        assert_eq!(form.to_filters().qtd_quartos, None);
    }

    #[test]
    fn test_code_mode_targets_property_page() {
        let form = HomeSearchForm {
            cidade: "Mauá".into(),
            codigo: " AB 12 ".into(),
            ..Default::default()
        };

        assert!(form.is_code_mode());
        assert_eq!(form.submit(), HomeTarget::Property("AB 12".into()));
        assert_eq!(form.submit().path(), "/imovel/AB%2012");
    }
}
