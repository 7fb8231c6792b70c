use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// What the owner wants to do with the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Finalidade {
    Vender,
    Alugar,
}

impl Finalidade {
    pub fn label(&self) -> &'static str {
        match self {
            Finalidade::Vender => "Vender",
            Finalidade::Alugar => "Alugar",
        }
    }
}

impl FromStr for Finalidade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VENDER" => Ok(Finalidade::Vender),
            "ALUGAR" => Ok(Finalidade::Alugar),
            other => Err(format!("unknown finalidade: {other}")),
        }
    }
}

/// Intended use of the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Destinacao {
    Residencial,
    Comercial,
    ResidencialEComercial,
    Industrial,
    Rural,
    Temporada,
}

impl Destinacao {
    pub fn label(&self) -> &'static str {
        match self {
            Destinacao::Residencial => "Residencial",
            Destinacao::Comercial => "Comercial",
            Destinacao::ResidencialEComercial => "Residencial e Comercial",
            Destinacao::Industrial => "Industrial",
            Destinacao::Rural => "Rural",
            Destinacao::Temporada => "Temporada",
        }
    }
}

impl FromStr for Destinacao {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RESIDENCIAL" => Ok(Destinacao::Residencial),
            "COMERCIAL" => Ok(Destinacao::Comercial),
            "RESIDENCIAL_E_COMERCIAL" => Ok(Destinacao::ResidencialEComercial),
            "INDUSTRIAL" => Ok(Destinacao::Industrial),
            "RURAL" => Ok(Destinacao::Rural),
            "TEMPORADA" => Ok(Destinacao::Temporada),
            other => Err(format!("unknown destinacao: {other}")),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeadError {
    #[error("Nome é obrigatório")]
    MissingName,
    #[error("Telefone é obrigatório")]
    MissingPhone,
    #[error("Finalidade é obrigatória")]
    MissingPurpose,
    #[error("É preciso aceitar os termos")]
    ConsentRequired,
}

/// "Anuncie seu imóvel" form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvertiseForm {
    // personal data
    pub nome: String,
    pub telefone: String,
    pub email: String,

    // property data
    pub finalidade: Option<Finalidade>,
    pub tipo: String,
    pub destinacao: Option<Destinacao>,

    pub valor: String,
    pub valor_condominio: String,
    pub valor_iptu: String,

    pub area_interna: String,
    pub area_externa: String,
    pub area_lote: String,

    pub andar: String,
    pub quartos: String,
    pub suites: String,
    pub banheiros: String,
    pub vagas: String,

    pub aceita_permuta: bool,
    pub aceita_financiamento: bool,
    pub ocupado: bool,

    // address
    pub cep: String,
    pub endereco: String,
    pub numero: String,
    pub cidade: String,
    pub complemento: String,
    pub bairro: String,
}

/// `• Label: value`, or nothing when the value is blank or "0"
fn filled(label: &str, value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() || v == "0" {
        return None;
    }
    Some(format!("• {}: {}", label, v))
}

fn yes_no(label: &str, value: bool) -> String {
    format!("• {}: {}", label, if value { "Sim" } else { "Não" })
}

fn with_prefix(prefix: &str, value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{}{}", prefix, value.trim())
    }
}

fn with_suffix(value: &str, suffix: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{}{}", value.trim(), suffix)
    }
}

impl AdvertiseForm {
    /// Name, phone, purpose and consent are required before sending
    pub fn validate(&self, agreed: bool) -> Result<(), LeadError> {
        if self.nome.trim().is_empty() {
            return Err(LeadError::MissingName);
        }
        if self.telefone.trim().is_empty() {
            return Err(LeadError::MissingPhone);
        }
        if self.finalidade.is_none() {
            return Err(LeadError::MissingPurpose);
        }
        if !agreed {
            return Err(LeadError::ConsentRequired);
        }
        Ok(())
    }

    /// WhatsApp message body listing every filled field
    pub fn message(&self) -> String {
        let text = |s: &str| Some(s.to_string());
        let mut lines: Vec<Option<String>> = Vec::new();

        lines.push(text("Olá! Quero anunciar meu imóvel."));
        lines.push(text("*Dados pessoais*"));
        lines.push(filled("Nome", &self.nome));
        lines.push(filled("Telefone", &self.telefone));
        lines.push(filled("E-mail", &self.email));

        lines.push(text("*Dados do imóvel*"));
        lines.push(filled(
            "Finalidade",
            self.finalidade.map(|f| f.label()).unwrap_or_default(),
        ));
        lines.push(filled("Tipo", &self.tipo));
        lines.push(filled(
            "Destinação",
            self.destinacao.map(|d| d.label()).unwrap_or_default(),
        ));

        lines.push(filled("Valor", &with_prefix("R$ ", &self.valor)));
        lines.push(filled(
            "Valor do Condomínio",
            &with_prefix("R$ ", &self.valor_condominio),
        ));
        lines.push(filled("Valor do IPTU", &with_prefix("R$ ", &self.valor_iptu)));

        lines.push(filled("Área interna", &with_suffix(&self.area_interna, " m²")));
        lines.push(filled("Área externa", &with_suffix(&self.area_externa, " m²")));
        lines.push(filled("Área do lote", &with_suffix(&self.area_lote, " m²")));

        lines.push(filled("Andar", &self.andar));
        lines.push(filled("Quartos", &self.quartos));
        lines.push(filled("Suítes", &self.suites));
        lines.push(filled("Banheiros", &self.banheiros));
        lines.push(filled("Vagas", &self.vagas));

        lines.push(text("*Condições*"));
        lines.push(Some(yes_no("Aceita permuta", self.aceita_permuta)));
        lines.push(Some(yes_no("Aceita financiamento", self.aceita_financiamento)));
        lines.push(Some(yes_no("Ocupado", self.ocupado)));

        lines.push(text("*Endereço*"));
        lines.push(filled("CEP", &self.cep));
        lines.push(filled("Endereço", &self.endereco));
        lines.push(filled("Número", &self.numero));
        lines.push(filled("Complemento", &self.complemento));
        lines.push(filled("Bairro", &self.bairro));
        lines.push(filled("Cidade", &self.cidade));

        lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> AdvertiseForm {
        AdvertiseForm {
            nome: " Ana ".into(),
            telefone: "11 99999-0000".into(),
            finalidade: Some(Finalidade::Vender),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_order() {
        let mut form = AdvertiseForm::default();
        assert_eq!(form.validate(true), Err(LeadError::MissingName));
        form.nome = "Ana".into();
        assert_eq!(form.validate(true), Err(LeadError::MissingPhone));
        form.telefone = "  ".into();
        assert_eq!(form.validate(true), Err(LeadError::MissingPhone));
        form.telefone = "1199".into();
        assert_eq!(form.validate(true), Err(LeadError::MissingPurpose));
        form.finalidade = Some(Finalidade::Alugar);
        assert_eq!(form.validate(false), Err(LeadError::ConsentRequired));
        assert_eq!(form.validate(true), Ok(()));
    }

    #[test]
    fn test_minimal_message() {
        assert_eq!(
            minimal().message(),
            "Olá! Quero anunciar meu imóvel.\n\
             *Dados pessoais*\n\
             • Nome: Ana\n\
             • Telefone: 11 99999-0000\n\
             *Dados do imóvel*\n\
             • Finalidade: Vender\n\
             *Condições*\n\
             • Aceita permuta: Não\n\
             • Aceita financiamento: Não\n\
             • Ocupado: Não\n\
             *Endereço*"
        );
    }

    #[test]
    fn test_units_and_zero_values() {
        let form = AdvertiseForm {
            destinacao: Some(Destinacao::ResidencialEComercial),
            valor: "450.000".into(),
            area_interna: " 80 ".into(),
            vagas: "0".into(),
            quartos: "3".into(),
            aceita_permuta: true,
            cidade: "Mauá".into(),
            ..minimal()
        };
        let message = form.message();

        assert!(message.contains("• Destinação: Residencial e Comercial"));
        assert!(message.contains("• Valor: R$ 450.000"));
        assert!(message.contains("• Área interna: 80 m²"));
        assert!(message.contains("• Quartos: 3"));
        assert!(!message.contains("Vagas"));
        assert!(!message.contains("Valor do IPTU"));
        assert!(message.contains("• Aceita permuta: Sim"));
        assert!(message.ends_with("• Cidade: Mauá"));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("vender".parse::<Finalidade>(), Ok(Finalidade::Vender));
        assert_eq!(
            "residencial_e_comercial".parse::<Destinacao>(),
            Ok(Destinacao::ResidencialEComercial)
        );
        assert!("permutar".parse::<Finalidade>().is_err());
    }
}
