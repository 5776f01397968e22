//! 审核提示词编译器

/// 把用户粘贴的题目原样包进固定的审核指令
///
/// 不检查题目结构，由模型自行识别题目边界
pub fn compile_audit(raw_text: &str) -> String {
    format!(
        "
Role: Especialista em Psicometria INEP/ENADE.
Task: Analise as questões abaixo. Gere Relatório de Auditoria Técnica.
Critérios: Anatomia, Bloom, Distratores, Viés.

Questões:
{}

Saída Markdown para CADA questão:
## 📋 Relatório de Auditoria Técnica - Questão [N]
**Veredito:** [Status]
**1. Análise da Estrutura:** [Detalhes]
**2. Análise Pedagógica:** [Detalhes]
**3. Pontos de Atenção:** [Detalhes]
**💡 Sugestão:** [Texto]
Separe com ---
",
        raw_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_text_verbatim() {
        let raw = "1. Qual é a capital?\na) X\nb) Y\n\n2. {Outra} questão";
        let prompt = compile_audit(raw);
        assert!(prompt.contains(&format!("Questões:\n{}\n\nSaída Markdown", raw)));
    }

    #[test]
    fn has_fixed_five_field_report_shape() {
        let prompt = compile_audit("x");
        for field in [
            "**Veredito:**",
            "**1. Análise da Estrutura:**",
            "**2. Análise Pedagógica:**",
            "**3. Pontos de Atenção:**",
            "**💡 Sugestão:**",
        ] {
            assert!(prompt.contains(field), "missing {}", field);
        }
        assert!(prompt.trim_end().ends_with("Separe com ---"));
    }
}
