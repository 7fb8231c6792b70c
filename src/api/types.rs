use serde::{Deserialize, Serialize};
use std::fmt;

/// The independently loaded option lists of the filters panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKind {
    Cidades,
    Bairros,
    Tipos,
    CaractInternas,
    CaractExternas,
}

impl OptionKind {
    /// Lists that do not depend on any other filter
    pub const STATIC: [OptionKind; 4] = [
        OptionKind::Cidades,
        OptionKind::Tipos,
        OptionKind::CaractInternas,
        OptionKind::CaractExternas,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            OptionKind::Cidades => "categoria/cidades",
            OptionKind::Bairros => "categoria/bairros",
            OptionKind::Tipos => "categoria/tipo-imovel",
            OptionKind::CaractInternas => "categoria/carac-internas",
            OptionKind::CaractExternas => "categoria/carac-externas",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::Cidades => "cidades",
            OptionKind::Bairros => "bairros",
            OptionKind::Tipos => "tipos",
            OptionKind::CaractInternas => "caractInternas",
            OptionKind::CaractExternas => "caractExternas",
        };
        f.write_str(name)
    }
}

/// A concrete request for one option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    Cidades,
    /// Neighborhoods of one city
    Bairros(String),
    Tipos,
    CaractInternas,
    CaractExternas,
}

impl OptionSource {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionSource::Cidades => OptionKind::Cidades,
            OptionSource::Bairros(_) => OptionKind::Bairros,
            OptionSource::Tipos => OptionKind::Tipos,
            OptionSource::CaractInternas => OptionKind::CaractInternas,
            OptionSource::CaractExternas => OptionKind::CaractExternas,
        }
    }

    /// Path relative to the API base, query string included
    pub fn path_and_query(&self) -> String {
        match self {
            OptionSource::Bairros(cidade) => format!(
                "{}?cidade={}",
                self.kind().path(),
                urlencoding::encode(cidade)
            ),
            other => other.kind().path().to_string(),
        }
    }

    /// Source for a list that does not need a city.
    ///
    /// Returns `None` for [`OptionKind::Bairros`].
    pub fn unscoped(kind: OptionKind) -> Option<Self> {
        match kind {
            OptionKind::Cidades => Some(OptionSource::Cidades),
            OptionKind::Bairros => None,
            OptionKind::Tipos => Some(OptionSource::Tipos),
            OptionKind::CaractInternas => Some(OptionSource::CaractInternas),
            OptionKind::CaractExternas => Some(OptionSource::CaractExternas),
        }
    }
}
