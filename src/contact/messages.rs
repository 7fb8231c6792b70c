//! Fixed texts sent through WhatsApp from the site's contact buttons.

use serde::{Deserialize, Serialize};

/// Floating button shown on every page
pub const GREETING: &str = "Olá! Gostaria de mais informações...";

/// "Fale Conosco" on the detail page
pub const GENERAL_INFO: &str = "Olá, gostaria de mais informações!";

/// Prefilled text of the detail page interest form
pub fn interest(property_id: i64) -> String {
    format!(
        "Olá, gostaria de mais informações sobre o imóvel: {}.",
        property_id
    )
}

/// "Agendar Visita" on the detail page
pub fn schedule_visit(property_id: i64) -> String {
    format!(
        "Olá, gostaria de agendar uma visita no imóvel de código número {}.",
        property_id
    )
}

/// "Tenho interesse" form on the detail page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl InterestForm {
    /// Form prefilled for one property
    pub fn for_property(property_id: i64) -> Self {
        Self {
            message: interest(property_id),
            ..Default::default()
        }
    }

    /// Only non-empty fields are listed
    pub fn message(&self) -> String {
        let fields = [
            ("Nome", &self.name),
            ("Email", &self.email),
            ("Número", &self.phone),
            ("Mensagem", &self.message),
        ];

        let mut lines = vec!["Informações de contato:".to_string()];
        lines.extend(
            fields
                .iter()
                .map(|(label, value)| (label, value.trim()))
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| format!("{}: {}", label, value)),
        );
        lines.join("\n")
    }
}

/// What a WhatsApp contact is about
#[derive(Debug, Clone)]
pub enum ContactTopic {
    /// Floating button
    Greeting,
    /// "Fale Conosco"
    GeneralInfo,
    /// Short question about one property
    Property(i64),
    Visit(i64),
    /// Filled "Tenho interesse" form
    Form(InterestForm),
}

impl ContactTopic {
    pub fn message(&self) -> String {
        match self {
            ContactTopic::Greeting => GREETING.to_string(),
            ContactTopic::GeneralInfo => GENERAL_INFO.to_string(),
            ContactTopic::Property(id) => interest(*id),
            ContactTopic::Visit(id) => schedule_visit(*id),
            ContactTopic::Form(form) => form.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_messages() {
        assert_eq!(
            schedule_visit(42),
            "Olá, gostaria de agendar uma visita no imóvel de código número 42."
        );
        assert_eq!(
            InterestForm::for_property(42).message,
            "Olá, gostaria de mais informações sobre o imóvel: 42."
        );
    }

    #[test]
    fn test_contact_topics() {
        assert_eq!(ContactTopic::Greeting.message(), GREETING);
        assert_eq!(
            ContactTopic::GeneralInfo.message(),
            "Olá, gostaria de mais informações!"
        );
        assert_eq!(ContactTopic::Property(7).message(), interest(7));
        assert_eq!(ContactTopic::Visit(7).message(), schedule_visit(7));

        let form = InterestForm {
            email: "ana@example.com".into(),
            ..InterestForm::for_property(7)
        };
        assert_eq!(
            ContactTopic::Form(form).message(),
            "Informações de contato:\nEmail: ana@example.com\nMensagem: Olá, gostaria de mais informações sobre o imóvel: 7."
        );
    }

    #[test]
    fn test_interest_form_skips_blank_fields() {
        let form = InterestForm {
            name: " Ana ".into(),
            phone: "11 98888-7777".into(),
            message: "Aceita proposta?".into(),
            ..Default::default()
        };

        assert_eq!(
            form.message(),
            "Informações de contato:\nNome: Ana\nNúmero: 11 98888-7777\nMensagem: Aceita proposta?"
        );
    }
}
