//! 各题型共用的提示词片段

use crate::models::{BloomLevel, DifficultyLevel, Quantity};

/// 报告标题，同时也是拆分响应的标记
pub const REPORT_HEADING: &str = "# Relatório Técnico da Questão (RTQ)";

/// 支撑文本末尾的参考文献要求
pub(crate) const SOURCE_REFERENCE_RULE: &str = "   - OBRIGATÓRIO: Ao final do texto de suporte, pule uma linha e insira a referência no seguinte formato: \"**Fonte:** [Sobrenome, Nome. Título da Obra. Editora, Ano (REAL e VERIFICÁVEL)].\"";

/// 课程与内容上下文，学习目标非空时追加
pub fn base_context(course: &str, content: &str, learning_objective: Option<&str>) -> String {
    let mut ctx = format!("para o curso de {}, sobre o conteúdo \"{}\".", course, content);
    if let Some(objective) = learning_objective.filter(|o| !o.is_empty()) {
        ctx.push_str(&format!("\nObjetivo de Aprendizagem: \"{}\"", objective));
    }
    ctx
}

/// 数量子句；只生成一道题时为空
pub fn quantity_clause(quantity: Quantity) -> String {
    if !quantity.is_batch() {
        return String::new();
    }
    format!(
        "\nQUANTIDADE: Gere EXATAMENTE {} questões distintas sobre tópicos variados dentro do tema solicitado.
IMPORTANTE: Separe cada questão (incluindo seu feedback) da próxima usando \"---\" (linha horizontal).\n",
        quantity.get()
    )
}

/// 认知层级子句，动词与定义直接取自静态表
pub fn bloom_clause(level: BloomLevel) -> String {
    let info = level.info();
    format!(
        "\nNível Cognitivo (Taxonomia de Bloom): {level}
Instrução Pedagógica: A questão deve exigir que o aluno utilize processos cognitivos de nível \"{level}\".
Verbos de Comando Sugeridos: {verbs}.
Foco: {description}\n",
        level = level.label(),
        verbs = info.verbs,
        description = info.description,
    )
}

pub fn difficulty_clause(level: DifficultyLevel) -> String {
    format!(
        "\nNível de Dificuldade: {}\nInstrução de Calibragem: {}\n",
        level.label(),
        level.calibration()
    )
}

/// 所有题型共用的 RTQ 反馈模板
pub const FEEDBACK_SCAFFOLD: &str = "
# Relatório Técnico da Questão (RTQ)

### 1. Metadados
| Verbo de Comando | Complexidade Estimada | Estimativa de Tempo |
| :--- | :--- | :--- |
| (Identifique o verbo principal) | (Baixa/Média/Alta) | (Ex: 3 min) |

### 2. Classificação Taxonômica
> (Explique em 1 parágrafo como o item se alinha ao nível de Bloom solicitado. Descreva o processo mental que o aluno precisa realizar para chegar à resposta).

### 3. Análise das Alternativas
**Gabarito Correto:** [Indique a Letra]
*   **Justificativa:** Explique tecnicamente por que esta opção é a correta, fundamentando na teoria.
*   **Análise dos Distratores:** Explique brevemente por que as outras opções são incorretas, mas plausíveis.

### 4. Recomendação de Ajuste
> **Autoavaliação:** (Faça uma autocrítica honesta do item gerado. Sugira melhorias no enunciado, distratores ou suporte teórico para aumentar a precisão).

### 5. Indexação
**Tags:** #Tag1 #Tag2 #Tag3
";
