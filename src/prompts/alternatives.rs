//! 固定的选项表
//!
//! 多项组合题的字母-罗马数字分组与断言-理由题的五个固定选项都是写死的数据，
//! 按断言数量 / 选项字母查表，不在模板里分支拼接。

use phf::{phf_map, phf_ordered_map};

use crate::models::{Alternative, MultipleRange};

/// 多项组合题的一组固定配置
#[derive(Debug)]
pub struct CombinatorialTable {
    /// 断言编号列表，如 "I, II e III"
    pub roman_list: &'static str,
    /// 断言数量说明
    pub items_instruction: &'static str,
    /// 五个选项的正文（a 到 e）
    pub alternatives: [&'static str; 5],
    /// 回答命令句
    pub command_phrase: &'static str,
}

const THREE_ITEMS: CombinatorialTable = CombinatorialTable {
    roman_list: "I, II e III",
    items_instruction: "3 afirmações (numeradas em romanos: I, II e III)",
    alternatives: [
        "I, apenas.",
        "II, apenas.",
        "I e III, apenas.",
        "II e III, apenas.",
        "I, II e III.",
    ],
    command_phrase: "É correto o que se afirma em",
};

// 每个罗马数字在五个选项中出现的次数保持均衡
const FOUR_ITEMS: CombinatorialTable = CombinatorialTable {
    roman_list: "I, II, III e IV",
    items_instruction: "4 afirmações (numeradas em romanos: I, II, III e IV)",
    alternatives: [
        "I e II.",
        "I e IV.",
        "II e III.",
        "I, III e IV.",
        "II, III e IV.",
    ],
    command_phrase: "É correto apenas o que se afirma em",
};

// 每个罗马数字恰好出现 3 次
const FIVE_ITEMS: CombinatorialTable = CombinatorialTable {
    roman_list: "I, II, III, IV e V",
    items_instruction: "5 afirmações (numeradas em romanos: I, II, III, IV e V)",
    alternatives: [
        "I, II e III.",
        "I, IV e V.",
        "II, III e IV.",
        "I, III e V.",
        "II, IV e V.",
    ],
    command_phrase: "É correto apenas o que se afirma em",
};

static COMBINATORIAL_TABLES: phf::Map<u8, &'static CombinatorialTable> = phf_map! {
    3u8 => &THREE_ITEMS,
    4u8 => &FOUR_ITEMS,
    5u8 => &FIVE_ITEMS,
};

/// 断言-理由题的五个固定选项，按字母排序
static ASSERTION_REASON_ALTERNATIVES: phf::OrderedMap<char, &'static str> = phf_ordered_map! {
    'A' => "As asserções I e II são proposições verdadeiras, e a II é uma justificativa correta da I.",
    'B' => "As asserções I e II são proposições verdadeiras, mas a II não é uma justificativa correta da I.",
    'C' => "A asserção I é uma proposição verdadeira, e a II é uma proposição falsa.",
    'D' => "A asserção I é uma proposição falsa, e a II é uma proposição verdadeira.",
    'E' => "As asserções I e II são proposições falsas.",
};

const LETTERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// 按断言数量查表，表外的值回落到 4 项表
pub fn combinatorial_table(range: MultipleRange) -> &'static CombinatorialTable {
    COMBINATORIAL_TABLES
        .get(&range.count())
        .copied()
        .unwrap_or(&FOUR_ITEMS)
}

/// 某个答案字母对应的断言-理由判断
pub fn assertion_logic(answer: Alternative) -> &'static str {
    ASSERTION_REASON_ALTERNATIVES
        .get(&answer.letter())
        .copied()
        .unwrap_or_default()
}

/// 提示词中的多项组合选项块（选项间空一行，行首 4 个空格）
pub fn combinatorial_block(table: &CombinatorialTable) -> String {
    let lines: Vec<String> = LETTERS
        .iter()
        .zip(table.alternatives.iter())
        .map(|(letter, text)| format!("    {}) {}", letter, text))
        .collect();
    format!("\n{}", lines.join("\n    \n"))
}

/// 提示词中的断言-理由选项块
pub fn assertion_reason_block() -> String {
    let lines: Vec<String> = LETTERS
        .iter()
        .zip(ASSERTION_REASON_ALTERNATIVES.values())
        .map(|(letter, text)| format!("    {}) {}", letter, text))
        .collect();
    format!("\n{}", lines.join("\n\n"))
}
