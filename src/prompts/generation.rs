//! 题目生成提示词编译器
//!
//! 纯函数：同样的输入永远得到逐字节相同的提示词。
//! 各题型共享同一骨架：上下文 → 数量 → 认知层级 → 难度 → 题型结构 → RTQ 模板。

use crate::models::{
    Alternative, BloomLevel, DifficultyLevel, GenerationRequest, Quantity, QuestionSpec,
};
use crate::prompts::alternatives::{
    assertion_reason_block, combinatorial_block, combinatorial_table,
};
use crate::prompts::fragments::{
    base_context, bloom_clause, difficulty_clause, quantity_clause, FEEDBACK_SCAFFOLD,
    SOURCE_REFERENCE_RULE,
};

/// 与题型无关的编译参数
#[derive(Debug, Clone, PartialEq)]
pub struct PromptOptions<'a> {
    pub bloom_level: BloomLevel,
    pub difficulty: DifficultyLevel,
    pub quantity: Quantity,
    pub learning_objective: Option<&'a str>,
}

/// 编译一个已校验的请求
pub fn compile_request(request: &GenerationRequest) -> String {
    let options = PromptOptions {
        bloom_level: request.bloom_level,
        difficulty: request.difficulty,
        quantity: request.quantity,
        learning_objective: request.learning_objective.as_deref(),
    };
    compile(request.spec, &request.course, &request.content, &options)
}

/// 按题型编译提示词
pub fn compile(spec: QuestionSpec, course: &str, content: &str, options: &PromptOptions<'_>) -> String {
    let mut prompt = String::with_capacity(4096);

    prompt.push('\n');
    prompt.push_str(&format!(
        "Contexto: Crie {} {} {}\n",
        options.quantity.get(),
        subject_phrase(spec),
        base_context(course, content, options.learning_objective)
    ));
    prompt.push_str(&quantity_clause(options.quantity));
    prompt.push('\n');
    prompt.push_str(&bloom_clause(options.bloom_level));
    prompt.push('\n');
    prompt.push_str(&difficulty_clause(options.difficulty));
    prompt.push('\n');
    prompt.push('\n');
    prompt.push_str(&structure_block(spec));
    prompt.push('\n');
    prompt.push_str(FEEDBACK_SCAFFOLD);
    prompt.push('\n');

    prompt
}

/// "Crie N ..." 后面的题型短语
fn subject_phrase(spec: QuestionSpec) -> &'static str {
    match spec {
        QuestionSpec::SingleAnswer => "questão(ões) de Resposta Única",
        QuestionSpec::IncompleteStatement => "questão(ões) de Afirmação Incompleta",
        QuestionSpec::MultipleComplementation { .. } => "questão(ões) de Complementação Múltipla",
        QuestionSpec::AssertionReason { .. } => "questão(ões) do tipo Asserção e Razão",
        QuestionSpec::Discursive => "questão(ões) Discursiva(s)",
    }
}

/// 题型专属的结构说明，以换行结尾
fn structure_block(spec: QuestionSpec) -> String {
    match spec {
        QuestionSpec::SingleAnswer => single_answer_block(),
        QuestionSpec::IncompleteStatement => incomplete_statement_block(),
        QuestionSpec::MultipleComplementation { range } => {
            let table = combinatorial_table(range);
            format!(
                "Estrutura da Questão (Repita esta estrutura para cada questão solicitada):
1. Texto de Suporte: Gere um suporte (texto, dados ou caso) necessário para a análise. NÃO escreva \"Texto-Base:\", inicie o texto diretamente.
{source}
2. Comando de Transição: Insira exatamente a frase: \"Considerando as informações apresentadas, avalie as afirmações a seguir.\"
3. Afirmações: Elabore {items} sobre o texto-base.
    ◦ Misture proposições verdadeiras e falsas de forma equilibrada.
    ◦ OBRIGATÓRIO: Pule uma linha entre cada afirmação romana ({roman}) para formar uma lista vertical clara.
4. Comando de Resposta: Insira exatamente a frase: \"{command}\"
5. Alternativas: Utilize EXATAMENTE este modelo de distribuição (ajuste a verdade das afirmações para que se encaixem em um gabarito). OBRIGATÓRIO: Pule uma linha entre cada alternativa para formar uma lista vertical, usando letras minúsculas:
{alternatives}
",
                source = SOURCE_REFERENCE_RULE,
                items = table.items_instruction,
                roman = table.roman_list,
                command = table.command_phrase,
                alternatives = combinatorial_block(table),
            )
        }
        QuestionSpec::AssertionReason { answer_key } => assertion_reason_block_for(answer_key),
        QuestionSpec::Discursive => format!(
            "Estrutura da Questão (Repita esta estrutura para cada questão solicitada):
1. Texto de Suporte: Um contexto rico e complexo (caso clínico, situação gerencial, gráfico descrito ou fragmento de lei). NÃO escreva \"Texto-Base:\", inicie o texto diretamente.
{source}
2. Comando Integrador: Insira a frase: \"Com base na situação apresentada, redija um texto dissertativo abordando os seguintes aspectos:\"
3. Tópicos (Scaffolding):
    ◦ a) [Solicite a identificação ou definição de um conceito chave do texto].
    ◦ b) [Solicite a análise crítica ou a proposição de uma solução prática para o caso].
",
            source = SOURCE_REFERENCE_RULE,
        ),
    }
}

fn single_answer_block() -> String {
    format!(
        "Estrutura da Questão (Repita esta estrutura para cada questão solicitada):
1. Texto de Suporte: Gere um estudo de caso, situação-problema ou contexto teórico (máx. 10 linhas). NÃO escreva \"Texto-Base:\", inicie o texto diretamente.
{source} Se o texto for autoral (ex: estudo de caso), indique a fonte teórica que embasa o caso.
2. Enunciado (Comando): Elabore uma pergunta direta ou uma ordem (usando verbo de comando alinhado ao nível de Bloom solicitado) que exija que o aluno resolva o problema apresentado no texto-base. Use voz ativa. Evite termos como \"exceto\" ou \"incorreto\".
3. Alternativas: Crie 5 alternativas (a, b, c, d, e).
    ◦ As alternativas devem ser simétricas em tamanho e estrutura gramatical.
    ◦ Os distratores (erradas) devem ser plausíveis, baseados em erros comuns de interpretação, e não absurdos óbvios.
    ◦ IMPORTANTE: Pule uma linha entre cada alternativa (use quebra de linha dupla) para que fiquem uma abaixo da outra.
    ◦ Exemplo de Formato:
      a) Texto...
{blank}
      b) Texto...
",
        source = SOURCE_REFERENCE_RULE,
        blank = "      ",
    )
}

fn incomplete_statement_block() -> String {
    format!(
        "Estrutura da Questão (Repita esta estrutura para cada questão solicitada):
1. Texto de Suporte: Um breve texto motivador ou caso prático (máx. 8 linhas). NÃO escreva \"Texto-Base:\", inicie o texto diretamente.
{source}
2. Enunciado (Tronco): Escreva uma frase que retome o tema do texto-base e termine abruptamente, exigindo complementação.
    ◦ Regra de Ouro: A frase não deve ter ponto final. Garanta a concordância nominal e verbal perfeita entre o final do enunciado e o início de todas as alternativas (a, b, c, d, e). Não termine o enunciado com artigos (o, a) ou preposições que \"entreguem\" a resposta.
3. Alternativas: Crie 5 opções que completem a frase gramaticalmente e semanticamente.
    ◦ IMPORTANTE: Pule uma linha entre cada alternativa (use quebra de linha dupla) para que fiquem uma abaixo da outra.
",
        source = SOURCE_REFERENCE_RULE,
    )
}

fn assertion_reason_block_for(answer_key: Alternative) -> String {
    format!(
        "Configuração do Gabarito (Engenharia Reversa) para a PRIMEIRA questão:
• Gabarito OBRIGATÓRIO da Questão 1: Alternativa {answer}

Estrutura da Questão (Siga rigorosamente a ordem visual abaixo):
1. Introdução (Opcional): Se decidir incluir uma frase inicial como \"Seguem as questões...\", coloque-a na PRIMEIRA LINHA do output, ANTES de qualquer outro texto.
2. Texto de Suporte (OBRIGATÓRIO): Escreva um texto-base robusto (MÍNIMO DE 10 LINHAS) com fundamentação teórica.
{source}
3. Comando de Ligação (Imediato): Pule uma linha e escreva: \"Considerando as informações apresentadas, avalie as asserções a seguir e a relação proposta entre elas.\"
4. Asserções (Bloco Central):
    I. [Escreva a Asserção I completa]
{blank}
    PORQUE (Escrito em maiúsculas, centralizado)
{blank}
    II. [Escreva a Asserção II completa]
5. Comando de Alternativas: Pule uma linha e escreva: \"A respeito dessas asserções, assinale a opção correta.\"
6. Alternativas (IMPORTANTE: Cada alternativa DEVE vir em uma nova linha com um espaço em branco entre elas):
{alternatives}
",
        answer = answer_key,
        source = SOURCE_REFERENCE_RULE,
        blank = "    ",
        alternatives = assertion_reason_block(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MultipleRange;

    fn options(quantity: u8) -> PromptOptions<'static> {
        PromptOptions {
            bloom_level: BloomLevel::Analyze,
            difficulty: DifficultyLevel::Hard,
            quantity: Quantity::new(quantity).unwrap(),
            learning_objective: None,
        }
    }

    #[test]
    fn skeleton_order_is_stable() {
        let prompt = compile(QuestionSpec::SingleAnswer, "Direito", "Contratos", &options(1));
        let context = prompt.find("Contexto: Crie 1 questão(ões) de Resposta Única").unwrap();
        let bloom = prompt.find("Nível Cognitivo (Taxonomia de Bloom): Analisar").unwrap();
        let difficulty = prompt.find("Nível de Dificuldade: Difícil").unwrap();
        let structure = prompt.find("Estrutura da Questão").unwrap();
        let report = prompt.find("# Relatório Técnico da Questão (RTQ)").unwrap();
        assert!(context < bloom && bloom < difficulty && difficulty < structure && structure < report);
        assert!(prompt.starts_with("\nContexto:"));
        assert!(prompt.ends_with("**Tags:** #Tag1 #Tag2 #Tag3\n\n"));
    }

    #[test]
    fn single_question_layout_matches_template() {
        let prompt = compile(QuestionSpec::Discursive, "Direito", "Contratos", &options(1));
        assert!(prompt.contains(
            "para o curso de Direito, sobre o conteúdo \"Contratos\".\n\n\nNível Cognitivo"
        ));
    }

    #[test]
    fn single_answer_example_keeps_blank_indented_line() {
        let prompt = compile(QuestionSpec::SingleAnswer, "Direito", "Contratos", &options(1));
        assert!(prompt.contains("      a) Texto...\n      \n      b) Texto...\n\n\n# Relatório"));
    }

    #[test]
    fn multiple_complementation_five_items() {
        let spec = QuestionSpec::MultipleComplementation {
            range: MultipleRange::Five,
        };
        let prompt = compile(spec, "Química", "Soluções", &options(1));
        assert!(prompt.contains("Elabore 5 afirmações (numeradas em romanos: I, II, III, IV e V)"));
        assert!(prompt.contains("\"É correto apenas o que se afirma em\""));
        assert!(prompt.contains("minúsculas:\n\n    a) I, II e III.\n    \n    b) I, IV e V."));
        assert!(prompt.contains("    e) II, IV e V.\n\n\n# Relatório"));
    }

    #[test]
    fn assertion_reason_block_structure() {
        let spec = QuestionSpec::AssertionReason {
            answer_key: Alternative::B,
        };
        let prompt = compile(spec, "Física", "Óptica", &options(1));
        assert!(prompt.contains(
            "Instrução de Calibragem: Complexidade Alta"
        ));
        assert!(prompt.contains("\n\n\nConfiguração do Gabarito (Engenharia Reversa)"));
        assert!(prompt.contains("• Gabarito OBRIGATÓRIO da Questão 1: Alternativa B\n"));
        assert!(prompt.contains("    I. [Escreva a Asserção I completa]\n    \n    PORQUE"));
        assert!(prompt.contains("elas):\n\n    a) As asserções"));
        assert!(prompt.contains("    e) As asserções I e II são proposições falsas.\n\n\n# Relatório"));
    }
}
