use super::state::FilterState;

/// Accumulates `key=value` pairs, percent-encoding both sides
#[derive(Debug, Default)]
pub struct QueryPairs {
    pairs: Vec<String>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed string; blank values are dropped
    pub fn text(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(key, v);
        }
        self
    }

    /// Numbers are dropped when NaN (or infinite)
    pub fn number(&mut self, key: &str, value: Option<f64>) -> &mut Self {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.push(key, &v.to_string());
        }
        self
    }

    pub fn flag(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, if v { "true" } else { "false" });
        }
        self
    }

    /// One repeated key per non-blank element, order preserved
    pub fn list(&mut self, key: &str, values: &[String]) -> &mut Self {
        for v in values.iter().filter(|v| !v.trim().is_empty()) {
            self.push(key, v);
        }
        self
    }

    fn push(&mut self, key: &str, value: &str) {
        self.pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
    }

    pub fn finish(&self) -> String {
        self.pairs.join("&")
    }
}

/// Map a filter state onto the `/busca` query string.
///
/// `page` is always present and defaults to 0.
pub fn build_query(filters: &FilterState) -> String {
    let mut q = QueryPairs::new();

    q.text("condominio", filters.condominio.as_deref())
        .text("bairro", filters.bairro.as_deref())
        .text("cidade", filters.cidade.as_deref())
        .flag("aceitaPermuta", filters.aceita_permuta)
        .text("tipo", filters.tipo.as_deref())
        .text("modalidade", filters.modalidade.map(|m| m.as_str()));

    q.number("areaPrincipalMin", filters.area_principal_min)
        .number("areaPrincipalMax", filters.area_principal_max)
        .number("areaLoteMin", filters.area_lote_min)
        .number("areaLoteMax", filters.area_lote_max);

    q.number("qtdQuartos", filters.qtd_quartos)
        .number("qtdBanheiros", filters.qtd_banheiros)
        .number("qtdSuites", filters.qtd_suites)
        .number("qtdVagas", filters.qtd_vagas);

    q.list("caractInternasContem", &filters.caract_internas_contem)
        .list("caractExternasContem", &filters.caract_externas_contem);

    q.number("valorImovelMin", filters.valor_imovel_min)
        .number("valorImovelMax", filters.valor_imovel_max)
        .number("valorCondominioMin", filters.valor_condominio_min)
        .number("valorCondominioMax", filters.valor_condominio_max)
        .number("valorIptuMin", filters.valor_iptu_min)
        .number("valorIptuMax", filters.valor_iptu_max);

    q.number("page", Some(f64::from(filters.page())));

    q.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modalidade;

    #[test]
    fn test_blank_and_nan_values_are_skipped() {
        let filters = FilterState {
            cidade: Some("  ".into()),
            qtd_quartos: Some(f64::NAN),
            caract_internas_contem: vec!["piscina".into(), "".into()],
            page: None,
            ..Default::default()
        };

        assert_eq!(build_query(&filters), "caractInternasContem=piscina&page=0");
    }

    #[test]
    fn test_full_query_order_and_encoding() {
        let filters = FilterState {
            cidade: Some(" Santo André ".into()),
            bairro: Some("Vila Assunção".into()),
            aceita_permuta: Some(false),
            modalidade: Some(Modalidade::Aluguel),
            qtd_quartos: Some(3.0),
            area_principal_min: Some(45.5),
            caract_externas_contem: vec!["Churrasqueira".into(), " ".into(), "Quadra".into()],
            valor_imovel_max: Some(750000.0),
            page: Some(2),
            ..Default::default()
        };

        assert_eq!(
            build_query(&filters),
            "bairro=Vila%20Assun%C3%A7%C3%A3o&cidade=Santo%20Andr%C3%A9&aceitaPermuta=false\
             &modalidade=ALUGUEL&areaPrincipalMin=45.5&qtdQuartos=3\
             &caractExternasContem=Churrasqueira&caractExternasContem=Quadra\
             &valorImovelMax=750000&page=2"
        );
    }

    #[test]
    fn test_cleared_state_only_sends_modality_and_page() {
        assert_eq!(
            build_query(&FilterState::cleared()),
            "modalidade=COMPRA&page=0"
        );
    }

    #[test]
    fn test_builder_does_not_touch_input() {
        let filters = FilterState {
            tipo: Some("  Casa ".into()),
            ..Default::default()
        };
        let before = filters.clone();
        let first = build_query(&filters);
        assert_eq!(filters, before);
        assert_eq!(first, build_query(&filters));
        assert_eq!(first, "tipo=Casa&page=0");
    }
}
