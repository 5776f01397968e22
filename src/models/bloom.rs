use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 布鲁姆认知层级（由低到高）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BloomLevel {
    #[serde(alias = "Lembrar")]
    Remember,
    #[serde(alias = "Entender")]
    Understand,
    #[serde(alias = "Aplicar")]
    Apply,
    #[serde(alias = "Analisar")]
    Analyze,
    #[serde(alias = "Avaliar")]
    Evaluate,
    #[serde(alias = "Criar")]
    Create,
}

/// 层级的静态说明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomInfo {
    /// 建议使用的命令动词
    pub verbs: &'static str,
    /// 层级定义
    pub description: &'static str,
}

impl BloomLevel {
    pub const ALL: [BloomLevel; 6] = [
        BloomLevel::Remember,
        BloomLevel::Understand,
        BloomLevel::Apply,
        BloomLevel::Analyze,
        BloomLevel::Evaluate,
        BloomLevel::Create,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BloomLevel::Remember => "Lembrar",
            BloomLevel::Understand => "Entender",
            BloomLevel::Apply => "Aplicar",
            BloomLevel::Analyze => "Analisar",
            BloomLevel::Evaluate => "Avaliar",
            BloomLevel::Create => "Criar",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            BloomLevel::Remember => "remember",
            BloomLevel::Understand => "understand",
            BloomLevel::Apply => "apply",
            BloomLevel::Analyze => "analyze",
            BloomLevel::Evaluate => "evaluate",
            BloomLevel::Create => "create",
        }
    }

    pub fn info(self) -> &'static BloomInfo {
        match self {
            BloomLevel::Remember => &REMEMBER,
            BloomLevel::Understand => &UNDERSTAND,
            BloomLevel::Apply => &APPLY,
            BloomLevel::Analyze => &ANALYZE,
            BloomLevel::Evaluate => &EVALUATE,
            BloomLevel::Create => &CREATE,
        }
    }

    /// 金字塔顺序：顶端（创造）到底部（记忆）
    pub fn pyramid() -> impl Iterator<Item = BloomLevel> {
        Self::ALL.into_iter().rev()
    }
}

const REMEMBER: BloomInfo = BloomInfo {
    verbs: "Citar, Definir, Listar, Identificar, Recordar",
    description: "Recuperar conhecimento relevante da memória.",
};

const UNDERSTAND: BloomInfo = BloomInfo {
    verbs: "Explicar, Resumir, Inferir, Paráfrasear, Interpretar",
    description: "Construir significado a partir de mensagens instrucionais.",
};

const APPLY: BloomInfo = BloomInfo {
    verbs: "Executar, Implementar, Usar, Demonstrar, Calcular",
    description: "Usar um procedimento em uma determinada situação.",
};

const ANALYZE: BloomInfo = BloomInfo {
    verbs: "Diferenciar, Organizar, Atribuir, Comparar, Desconstruir",
    description: "Decompor o material em partes e determinar como as partes se relacionam.",
};

const EVALUATE: BloomInfo = BloomInfo {
    verbs: "Checar, Criticar, Julgar, Hipotetizar, Concluir",
    description: "Fazer julgamentos baseados em critérios e padrões.",
};

const CREATE: BloomInfo = BloomInfo {
    verbs: "Gerar, Planejar, Produzir, Desenvolver, Combinar",
    description: "Colocar elementos juntos para formar um todo coerente ou funcional.",
};

impl FromStr for BloomLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BloomLevel::ALL
            .into_iter()
            .find(|l| l.id().eq_ignore_ascii_case(needle) || l.label() == needle)
            .ok_or_else(|| AppError::Validation(format!("未知的布鲁姆层级: {}", needle)))
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
