use crate::models::PropertyCard;

/// `1234567` -> `1.234.567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Brazilian real, e.g. `R$ 1.250.000` or `R$ 1.250.000,50`
pub fn format_brl(value: Option<f64>, cents: bool) -> Option<String> {
    let v = value.filter(|v| v.is_finite())?;
    let sign = if v < 0.0 { "-" } else { "" };
    let v = v.abs();

    if cents {
        let total = (v * 100.0).round() as u64;
        Some(format!(
            "{}R$ {},{:02}",
            sign,
            group_thousands(total / 100),
            total % 100
        ))
    } else {
        Some(format!("{}R$ {}", sign, group_thousands(v.round() as u64)))
    }
}

/// Rounded square meters, e.g. `1.200 m²`
pub fn format_area(value: Option<f64>) -> Option<String> {
    let v = value.filter(|v| v.is_finite() && *v >= 0.0)?;
    Some(format!("{} m²", group_thousands(v.round() as u64)))
}

/// Human label for a backend listing mode
pub fn modalidade_label(modalidade: Option<&str>) -> String {
    let Some(m) = modalidade.filter(|m| !m.is_empty()) else {
        return "—".to_string();
    };
    match m.to_uppercase().as_str() {
        "COMPRA" | "VENDA" => "Venda".to_string(),
        "ALUGUEL" => "Aluguel".to_string(),
        "LANCAMENTOS" | "LANÇAMENTOS" => "Lançamento".to_string(),
        _ => m.to_string(),
    }
}

pub fn card_title(card: &PropertyCard) -> String {
    let tipo = card.tipo.as_deref().unwrap_or("Imóvel");
    match card.condominio.as_deref().filter(|c| !c.is_empty()) {
        Some(condominio) => format!("{} • {}", tipo, condominio),
        None => tipo.to_string(),
    }
}

pub fn card_location(card: &PropertyCard) -> String {
    let parts: Vec<&str> = [card.bairro.as_deref(), card.cidade.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(" • ")
    }
}

/// Badges over the card photo: mode, then "Destaque" and "Permuta" when set
pub fn card_badges(card: &PropertyCard) -> Vec<String> {
    let mut badges = vec![modalidade_label(card.modalidade.as_deref())];
    if card.destaque == Some(true) {
        badges.push("Destaque".to_string());
    }
    if card.aceita_permuta == Some(true) {
        badges.push("Permuta".to_string());
    }
    badges
}

/// Counts for the results grid, `—` when unknown
pub fn count(value: Option<u32>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brl() {
        assert_eq!(format_brl(Some(1_250_000.0), false).as_deref(), Some("R$ 1.250.000"));
        assert_eq!(format_brl(Some(999.6), false).as_deref(), Some("R$ 1.000"));
        assert_eq!(format_brl(Some(1234.5), true).as_deref(), Some("R$ 1.234,50"));
        assert_eq!(format_brl(Some(f64::NAN), false), None);
        assert_eq!(format_brl(None, true), None);
    }

    #[test]
    fn test_area() {
        assert_eq!(format_area(Some(1199.7)).as_deref(), Some("1.200 m²"));
        assert_eq!(format_area(Some(54.0)).as_deref(), Some("54 m²"));
        assert_eq!(format_area(None), None);
    }

    #[test]
    fn test_modalidade_label() {
        assert_eq!(modalidade_label(Some("compra")), "Venda");
        assert_eq!(modalidade_label(Some("LANCAMENTOS")), "Lançamento");
        assert_eq!(modalidade_label(Some("Temporada")), "Temporada");
        assert_eq!(modalidade_label(None), "—");
    }

    #[test]
    fn test_card_badges() {
        let card = PropertyCard {
            id: 2,
            modalidade: Some("ALUGUEL".into()),
            destaque: Some(true),
            aceita_permuta: Some(false),
            ..Default::default()
        };
        assert_eq!(card_badges(&card), vec!["Aluguel", "Destaque"]);

        let card = PropertyCard {
            destaque: Some(false),
            aceita_permuta: Some(true),
            ..card
        };
        assert_eq!(card_badges(&card), vec!["Aluguel", "Permuta"]);
    }

    #[test]
    fn test_card_text() {
        let card = PropertyCard {
            id: 1,
            tipo: Some("Apartamento".into()),
            condominio: Some("Vila Verde".into()),
            cidade: Some("Mauá".into()),
            bairro: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(card_title(&card), "Apartamento • Vila Verde");
        assert_eq!(card_location(&card), "Mauá");
        assert_eq!(card_location(&PropertyCard::default()), "—");
        assert_eq!(card_badges(&card), vec!["—"]);
        assert_eq!(count(None), "—");
        assert_eq!(count(Some(3)), "3");
    }
}
