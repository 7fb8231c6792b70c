use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong while talking to the backend.
///
/// All variants end up as a single message plus a retry action for the
/// data source that failed; none of them is fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Falha de rede: {0}")]
    Network(String),

    #[error("Falha ao buscar ({0})")]
    Status(u16),

    #[error("Formato inválido ({0})")]
    Format(String),

    #[error("ID do imóvel não encontrado")]
    MissingId,
}

/// Which part of the site a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Options,
    Search,
    Property,
}

impl FetchError {
    /// Message shown next to the retry button
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Like [`FetchError::user_message`], with HTTP failures worded per source
    pub fn user_message_for(&self, source: DataSource) -> String {
        match (self, source) {
            (FetchError::Status(code), DataSource::Search) => format!("Falha na busca ({code})"),
            (FetchError::Status(code), DataSource::Property) => {
                format!("Falha ao buscar imóvel (HTTP {code})")
            }
            _ => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Format(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Format(err.to_string())
    }
}

/// Check that a payload is a JSON array made only of strings
pub fn validate_string_list(value: Value) -> Result<Vec<String>, FetchError> {
    let Value::Array(items) = value else {
        return Err(FetchError::Format("esperado: string[]".to_string()));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            _ => Err(FetchError::Format("esperado: string[]".to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_list_accepts_strings_only() {
        assert_eq!(
            validate_string_list(json!(["Mauá", "Santo André"])),
            Ok(vec!["Mauá".to_string(), "Santo André".to_string()])
        );
        assert_eq!(validate_string_list(json!([])), Ok(vec![]));
    }

    #[test]
    fn test_string_list_rejects_other_shapes() {
        for bad in [
            json!({"cidades": ["Mauá"]}),
            json!(["Mauá", 3]),
            json!("Mauá"),
            json!(null),
            json!([["nested"]]),
        ] {
            assert!(matches!(
                validate_string_list(bad),
                Err(FetchError::Format(_))
            ));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::Status(503).user_message(), "Falha ao buscar (503)");
        assert_eq!(
            FetchError::Status(503).user_message_for(DataSource::Options),
            "Falha ao buscar (503)"
        );
        assert_eq!(
            FetchError::Status(503).user_message_for(DataSource::Search),
            "Falha na busca (503)"
        );
        assert_eq!(
            FetchError::Status(404).user_message_for(DataSource::Property),
            "Falha ao buscar imóvel (HTTP 404)"
        );
        assert_eq!(
            FetchError::MissingId.user_message_for(DataSource::Property),
            "ID do imóvel não encontrado"
        );
        assert!(FetchError::Format("esperado: string[]".into())
            .user_message()
            .contains("string[]"));
    }
}
