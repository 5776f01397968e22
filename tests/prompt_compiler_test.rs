use academicus::models::{
    Alternative, BloomLevel, DifficultyLevel, GenerationForm, MultipleRange, Quantity, QuestionSpec,
    QuestionType,
};
use academicus::prompts::fragments::FEEDBACK_SCAFFOLD;
use academicus::prompts::{compile, compile_request, PromptOptions, REPORT_HEADING};

fn options(quantity: u8) -> PromptOptions<'static> {
    PromptOptions {
        bloom_level: BloomLevel::Apply,
        difficulty: DifficultyLevel::Medium,
        quantity: Quantity::new(quantity).unwrap(),
        learning_objective: Some("Aplicar o conceito em casos reais"),
    }
}

fn all_specs() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::SingleAnswer,
        QuestionSpec::IncompleteStatement,
        QuestionSpec::MultipleComplementation {
            range: MultipleRange::Three,
        },
        QuestionSpec::MultipleComplementation {
            range: MultipleRange::Four,
        },
        QuestionSpec::MultipleComplementation {
            range: MultipleRange::Five,
        },
        QuestionSpec::AssertionReason {
            answer_key: Alternative::D,
        },
        QuestionSpec::Discursive,
    ]
}

#[test]
fn every_question_type_ends_with_report_template() {
    for spec in all_specs() {
        let prompt = compile(spec, "Enfermagem", "Farmacologia", &options(1));
        let heading = prompt.find(REPORT_HEADING).unwrap();
        let structure = prompt.find("Estrutura da Questão").unwrap();
        assert!(structure < heading, "{:?}", spec);
        assert!(prompt.contains("Objetivo de Aprendizagem: \"Aplicar o conceito em casos reais\""));
        assert!(prompt.contains("**Tags:**"), "{:?}", spec);
    }
}

#[test]
fn every_combination_carries_scaffold_and_level_clauses() {
    for spec in all_specs() {
        for bloom_level in BloomLevel::ALL {
            for difficulty in DifficultyLevel::ALL {
                for quantity in [1, 3] {
                    let options = PromptOptions {
                        bloom_level,
                        difficulty,
                        quantity: Quantity::new(quantity).unwrap(),
                        learning_objective: None,
                    };
                    let prompt = compile(spec, "Pedagogia", "Avaliação formativa", &options);
                    let case = format!("{:?} {:?} {:?} x{}", spec, bloom_level, difficulty, quantity);

                    assert!(prompt.contains(FEEDBACK_SCAFFOLD), "{}", case);
                    assert!(
                        prompt.contains(&format!(
                            "Nível Cognitivo (Taxonomia de Bloom): {}",
                            bloom_level.label()
                        )),
                        "{}",
                        case
                    );
                    assert!(prompt.contains(bloom_level.info().verbs), "{}", case);
                    assert!(prompt.contains(bloom_level.info().description), "{}", case);
                    assert!(
                        prompt.contains(&format!("Nível de Dificuldade: {}", difficulty.label())),
                        "{}",
                        case
                    );
                    assert!(prompt.contains(difficulty.calibration()), "{}", case);
                }
            }
        }
    }
}

#[test]
fn compilation_is_deterministic() {
    for spec in all_specs() {
        let first = compile(spec, "Direito", "Contratos", &options(3));
        let second = compile(spec, "Direito", "Contratos", &options(3));
        assert_eq!(first, second);
    }
}

#[test]
fn multiple_complementation_uses_table_for_range() {
    let three = compile(
        QuestionSpec::MultipleComplementation {
            range: MultipleRange::Three,
        },
        "Biologia",
        "Genética",
        &options(1),
    );
    assert!(three.contains("3 afirmações (numeradas em romanos: I, II e III)"));
    assert!(three.contains("    c) I e III, apenas."));
    assert!(three.contains("\"É correto o que se afirma em\""));

    let four = compile(
        QuestionSpec::MultipleComplementation {
            range: MultipleRange::Four,
        },
        "Biologia",
        "Genética",
        &options(1),
    );
    assert!(four.contains("    d) I, III e IV."));
    assert!(four.contains("\"É correto apenas o que se afirma em\""));

    let five = compile(
        QuestionSpec::MultipleComplementation {
            range: MultipleRange::Five,
        },
        "Biologia",
        "Genética",
        &options(1),
    );
    assert!(five.contains("I, II, III, IV e V"));
    assert!(five.contains("    e) II, IV e V."));
}

#[test]
fn assertion_reason_pins_answer_key() {
    let prompt = compile(
        QuestionSpec::AssertionReason {
            answer_key: Alternative::D,
        },
        "Física",
        "Óptica",
        &options(1),
    );
    assert!(prompt.contains("Gabarito OBRIGATÓRIO da Questão 1: Alternativa D"));
    assert!(prompt.contains("PORQUE"));
    assert!(prompt.contains(
        "    d) A asserção I é uma proposição falsa, e a II é uma proposição verdadeira."
    ));
}

#[test]
fn batch_instructions_only_for_multiple_questions() {
    let single = compile(QuestionSpec::Discursive, "História", "Brasil Império", &options(1));
    assert!(!single.contains("QUANTIDADE"));
    assert!(single.contains("Crie 1 questão(ões) Discursiva(s)"));

    let batch = compile(QuestionSpec::Discursive, "História", "Brasil Império", &options(5));
    assert!(batch.contains("QUANTIDADE: Gere EXATAMENTE 5 questões distintas"));
    assert!(batch.contains("\"---\""));
}

#[test]
fn form_drops_parameters_of_other_types() {
    let form = GenerationForm {
        course: "Engenharia".to_string(),
        content: "Estruturas".to_string(),
        question_type: QuestionType::SingleAnswer,
        multiple_range: 5,
        correct_alternative: Alternative::E,
        ..GenerationForm::default()
    };
    let request = form.validate().unwrap();
    assert_eq!(request.spec, QuestionSpec::SingleAnswer);

    let prompt = compile_request(&request);
    assert!(!prompt.contains("Gabarito OBRIGATÓRIO"));
    assert!(!prompt.contains("afirmações (numeradas"));
}

#[test]
fn blank_course_is_rejected_before_compilation() {
    let form = GenerationForm {
        course: "   ".to_string(),
        content: "Estruturas".to_string(),
        ..GenerationForm::default()
    };
    assert!(form.validate().is_err());
}
