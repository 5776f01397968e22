//! 题型说明目录
//!
//! 每种题型的说明、示例和使用建议，供 `catalog` 命令展示

use crate::models::question_type::{MultipleRange, QuestionType};

/// 题型的静态说明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTypeInfo {
    pub description: &'static str,
    pub example: &'static str,
    pub tip: &'static str,
}

impl QuestionType {
    pub fn info(self) -> &'static QuestionTypeInfo {
        match self {
            QuestionType::SingleAnswer => &SINGLE_ANSWER,
            QuestionType::IncompleteStatement => &INCOMPLETE_STATEMENT,
            QuestionType::MultipleComplementation => &MULTIPLE_COMPLEMENTATION,
            QuestionType::AssertionReason => &ASSERTION_REASON,
            QuestionType::Discursive => &DISCURSIVE,
        }
    }

    /// 示例文本；多项组合题的示例随断言数量变化
    pub fn example(self, range: MultipleRange) -> String {
        if self != QuestionType::MultipleComplementation {
            return self.info().example.to_string();
        }

        let items = SAMPLE_ASSERTIONS[..range.count() as usize].join("\n");
        let (command, alternatives) = match range {
            MultipleRange::Three => (
                "É correto o que se afirma em",
                "a) I, apenas.\nb) II, apenas.\nc) I e II, apenas.\nd) II e III, apenas.\ne) I, II e III.",
            ),
            MultipleRange::Four => (
                "É correto apenas o que se afirma em",
                "a) I e II.\nb) I e IV.\nc) II e III.\nd) I, III e IV.\ne) II, III e IV.",
            ),
            MultipleRange::Five => (
                "É correto apenas o que se afirma em",
                "a) I, II e III.\nb) I, IV e V.\nc) II, III e IV.\nd) I, III e V.\ne) II, IV e V.",
            ),
        };

        format!("{}\n\n{}\n\n{}", items, command, alternatives)
    }
}

const SAMPLE_ASSERTIONS: [&str; 5] = [
    "I. A água ferve a 100ºC ao nível do mar.",
    "II. O gelo é menos denso que a água líquida.",
    "III. A molécula de água é apolar.",
    "IV. A tensão superficial da água é alta.",
    "V. O calor específico da água é elevado.",
];

const SINGLE_ANSWER: QuestionTypeInfo = QuestionTypeInfo {
    description: "Formato clássico com enunciado fechado. Exige que o aluno identifique a única alternativa correta entre distractores plausíveis.",
    example: "Enunciado: Qual estrutura celular é responsável pela respiração aeróbica?\n\na) Ribossomo.\nb) Lisossomo.\nc) Mitocôndria.\nd) Complexo de Golgi.\ne) Retículo Endoplasmático.",
    tip: "Ideal para avaliar retenção de fatos, compreensão de conceitos e aplicação direta de fórmulas.",
};

const INCOMPLETE_STATEMENT: QuestionTypeInfo = QuestionTypeInfo {
    description: "O enunciado é uma frase que termina abruptamente sem pontuação final. As alternativas completam a frase gramatical e semanticamente.",
    example: "Enunciado: No contexto da física newtoniana, a inércia pode ser definida como a tendência de um corpo em\n\na) aumentar sua velocidade constantemente.\nb) permanecer em seu estado de repouso ou movimento retilíneo uniforme.\nc) alterar sua massa independentemente da força.\nd) desacelerar na ausência de atrito.\ne) reagir instantaneamente a forças internas.",
    tip: "Excelente para testar definições precisas e relações de causa e efeito.",
};

const MULTIPLE_COMPLEMENTATION: QuestionTypeInfo = QuestionTypeInfo {
    description: "Apresenta uma lista de asserções (I, II, III...) seguida de alternativas que agrupam as corretas. Exige análise combinatória de conhecimentos.",
    example: "I. A água ferve a 100ºC ao nível do mar.\nII. O gelo é menos denso que a água líquida.\nIII. A molécula de água é apolar.\n\nÉ correto o que se afirma em:\n\na) I, apenas.\nb) II, apenas.\nc) I e II, apenas.\nd) II e III, apenas.\ne) I, II e III.",
    tip: "Use para avaliar tópicos multifacetados onde o aluno precisa distinguir múltiplas verdades parciais.",
};

const ASSERTION_REASON: QuestionTypeInfo = QuestionTypeInfo {
    description: "Duas afirmações conectadas pela palavra PORQUE. O aluno deve julgar a veracidade de cada uma e a relação de causalidade entre elas.",
    example: "Asserção I: O céu é azul durante o dia.\n\nPORQUE\n\nAsserção II: A atmosfera dispersa preferencialmente a luz solar de menor comprimento de onda.\n\na) As asserções I e II são verdadeiras, e a II é uma justificativa correta da I.\nb) As asserções I e II são verdadeiras, mas a II não é uma justificativa correta da I.\nc) A asserção I é uma proposição verdadeira, e a II é uma proposição falsa.\nd) A asserção I é uma proposição falsa, e a II é uma proposição verdadeira.\ne) As asserções I e II são proposições falsas.",
    tip: "O padrão ouro para avaliar raciocínio crítico profundo e entendimento de causalidade complexa.",
};

const DISCURSIVE: QuestionTypeInfo = QuestionTypeInfo {
    description: "Questão aberta que exige a produção de um texto. Inclui comando base e tópicos obrigatórios (scaffolding) para guiar a resposta.",
    example: "Comando: Redija um texto dissertativo sobre os impactos da Inteligência Artificial na educação superior, abordando necessariamente:\n\na) Os benefícios para a personalização do ensino.\nb) Os riscos éticos relacionados ao plágio.\nc) O novo papel do docente como mediador.",
    tip: "Fundamental para avaliar capacidade de síntese, argumentação e estruturação de pensamento.",
};
