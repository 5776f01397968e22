use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyLevel {
    #[serde(alias = "Fácil")]
    Easy,
    #[serde(alias = "Médio")]
    Medium,
    #[serde(alias = "Difícil")]
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Fácil",
            DifficultyLevel::Medium => "Médio",
            DifficultyLevel::Hard => "Difícil",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }

    /// 校准段落
    pub fn calibration(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Complexidade Baixa: Foque em conceitos fundamentais, definições claras e relações diretas. O texto-base deve ser simples e o distrator deve ser facilmente identificável por quem estudou o básico.",
            DifficultyLevel::Medium => "Complexidade Média: Exija relacionamento entre conceitos e aplicação em contextos padrão. Os distratores devem ser plausíveis e exigir atenção aos detalhes.",
            DifficultyLevel::Hard => "Complexidade Alta: Exija análise minuciosa, nuances interpretativas e aplicação em contextos atípicos ou complexos (multidisciplinares). Os distratores devem ser muito bem elaborados, funcionando como 'cascas de banana' para quem tem conhecimento superficial.",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DifficultyLevel::ALL
            .into_iter()
            .find(|d| d.id().eq_ignore_ascii_case(needle) || d.label() == needle)
            .ok_or_else(|| AppError::Validation(format!("未知的难度等级: {}", needle)))
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
