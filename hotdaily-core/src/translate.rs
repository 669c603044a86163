//! Lookup-table pseudo-translation of common AI/tech terms into Chinese
//!
//! Literal substitution only: every table entry is applied in order, and
//! later entries see the output of earlier ones. Matching is
//! case-insensitive and whole-word, with ASCII word boundaries.

use regex::Regex;
use std::sync::OnceLock;

/// English term → Chinese replacement, applied top to bottom
pub const TECH_TERMS: &[(&str, &str)] = &[
    // Projects
    ("The Ultimate Collection", "终极合集"),
    ("Agentic Skills", "智能体技能"),
    ("for", "适用于"),
    ("Battle-tested", "经过实战检验"),
    ("high-performance", "高性能"),
    ("official skills", "官方技能"),
    ("open-source", "开源"),
    ("builder", "构建器"),
    ("platform", "平台"),
    ("framework", "框架"),
    ("collection", "合集"),
    ("curated", "精选"),
    ("repository", "仓库"),
    // AI
    ("AI agent", "AI智能体"),
    ("agent", "智能体"),
    ("prompt", "提示词"),
    ("LLM", "大语言模型"),
    ("language model", "语言模型"),
    ("chatbot", "聊天机器人"),
    ("copilot", "编程助手"),
    ("assistant", "助手"),
    ("automation", "自动化"),
    ("workflow", "工作流"),
    ("skill", "技能"),
    ("plugin", "插件"),
    ("extension", "扩展"),
    // Development
    ("code", "代码"),
    ("coding", "编程"),
    ("developer", "开发者"),
    ("development", "开发"),
    ("programming", "编程"),
    ("software", "软件"),
    ("tool", "工具"),
    ("library", "库"),
    ("API", "接口"),
    ("SDK", "开发套件"),
    ("CLI", "命令行工具"),
    ("GUI", "图形界面"),
    // Technical terms
    ("neural network", "神经网络"),
    ("machine learning", "机器学习"),
    ("deep learning", "深度学习"),
    ("natural language processing", "自然语言处理"),
    ("NLP", "NLP"),
    ("computer vision", "计算机视觉"),
    ("data science", "数据科学"),
    ("cloud", "云"),
    ("serverless", "无服务器"),
    ("container", "容器"),
    ("Docker", "Docker"),
    ("Kubernetes", "Kubernetes"),
    // Adjectives
    ("powerful", "强大的"),
    ("simple", "简单的"),
    ("easy", "易用的"),
    ("fast", "快速的"),
    ("modern", "现代的"),
    ("lightweight", "轻量级的"),
    ("flexible", "灵活的"),
    ("scalable", "可扩展的"),
    ("free", "免费的"),
    ("free and open-source", "免费开源"),
    // Verbs
    ("build", "构建"),
    ("create", "创建"),
    ("generate", "生成"),
    ("automate", "自动化"),
    ("integrate", "集成"),
    ("deploy", "部署"),
    ("manage", "管理"),
    ("monitor", "监控"),
    ("track", "追踪"),
    ("analyze", "分析"),
    ("optimize", "优化"),
    // Phrases
    ("self-hosted", "自托管"),
    ("privacy-focused", "注重隐私"),
    ("community-driven", "社区驱动"),
    ("production-ready", "生产就绪"),
    ("enterprise-grade", "企业级"),
];

struct CompiledTerm {
    pattern: Regex,
    replacement: &'static str,
}

fn compiled_terms() -> &'static [CompiledTerm] {
    static TERMS: OnceLock<Vec<CompiledTerm>> = OnceLock::new();
    TERMS.get_or_init(|| {
        TECH_TERMS
            .iter()
            .map(|&(en, zh)| CompiledTerm {
                pattern: Regex::new(&format!("(?i-u){}", regex::escape(en))).unwrap(),
                replacement: zh,
            })
            .collect()
    })
}

fn is_ascii_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Replace matches of `pattern` that stand as whole ASCII words
fn replace_whole_words(text: &str, pattern: &Regex, replacement: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in pattern.find_iter(text) {
        let starts_word = m.start() == 0 || !is_ascii_word_byte(bytes[m.start() - 1]);
        let ends_word = m.end() == bytes.len() || !is_ascii_word_byte(bytes[m.end()]);
        if starts_word && ends_word {
            out.push_str(&text[last..m.start()]);
            out.push_str(replacement);
            last = m.end();
        }
    }

    out.push_str(&text[last..]);
    out
}

/// Substitute every known term in `text`
pub fn translate_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    compiled_terms()
        .iter()
        .fold(text.to_string(), |acc, term| {
            replace_whole_words(&acc, &term.pattern, term.replacement)
        })
}

/// True when more than half of the non-whitespace characters are ASCII letters
pub fn is_english(text: &str) -> bool {
    let total = text.chars().filter(|c| !c.is_whitespace()).count();
    if total == 0 {
        return false;
    }
    let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    letters as f64 / total as f64 > 0.5
}

/// Translate, then cut to `max_len` characters with a trailing `...`
pub fn smart_summary(text: &str, max_len: usize) -> String {
    let translated = translate_text(text);
    truncate_chars(&translated, max_len)
}

/// Cut to `max_len` characters, appending `...` when anything was removed
pub fn truncate_chars(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_term_starts_and_ends_with_word_char() {
        // Whole-word matching assumes word characters at both edges
        for (en, _) in TECH_TERMS {
            assert!(en.is_ascii(), "{:?}", en);
            let bytes = en.as_bytes();
            assert!(is_ascii_word_byte(bytes[0]), "{:?}", en);
            assert!(is_ascii_word_byte(bytes[bytes.len() - 1]), "{:?}", en);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(translate_text(""), "");
        assert_eq!(smart_summary("", 10), "");
    }

    #[test]
    fn test_case_insensitive_replacement() {
        assert_eq!(translate_text("Powerful"), "强大的");
        assert_eq!(translate_text("POWERFUL"), "强大的");
        assert_eq!(translate_text("Kubernetes"), "Kubernetes");
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // Long s and the Kelvin sign fold to ASCII letters under Unicode rules
        assert_eq!(translate_text("\u{17F}imple"), "\u{17F}imple");
        assert_eq!(translate_text("s\u{212A}ill"), "s\u{212A}ill");
        assert_eq!(translate_text("SKILL"), "技能");
    }

    #[test]
    fn test_whole_words_only() {
        // "agents" and "forum" contain terms but are different words
        assert_eq!(translate_text("agents"), "agents");
        assert_eq!(translate_text("forum"), "forum");
        assert_eq!(translate_text("codebase"), "codebase");
        assert_eq!(translate_text("agent"), "智能体");
    }

    #[test]
    fn test_boundaries_next_to_translated_text() {
        // CJK characters are not ASCII word characters
        assert_eq!(translate_text("agent工具"), "智能体工具");
        assert_eq!(translate_text("A fast tool"), "A 快速的 工具");
    }

    #[test]
    fn test_table_order_is_significant() {
        // "AI agent" is applied before the bare "agent" entry
        assert_eq!(translate_text("an AI agent"), "an AI智能体");
        // "open-source" and "free" are replaced first, so the longer phrase never matches
        assert_eq!(translate_text("free and open-source"), "免费的 and 开源");
        assert_eq!(translate_text("coding"), "编程");
    }

    #[test]
    fn test_hyphenated_terms() {
        assert_eq!(translate_text("Battle-tested"), "经过实战检验");
        assert_eq!(translate_text("a self-hosted CLI"), "a 自托管 命令行工具");
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(
            translate_text("Open-source framework for LLM workflow automation"),
            "开源 框架 适用于 大语言模型 工作流 自动化"
        );
    }

    #[test]
    fn test_is_english() {
        assert!(is_english("An open-source agent framework"));
        assert!(!is_english("开源智能体框架"));
        assert!(!is_english(""));
        assert!(!is_english("   "));
        assert!(!is_english("12345"));
    }

    #[test]
    fn test_smart_summary_truncates_after_translation() {
        assert_eq!(smart_summary("simple", 10), "简单的");
        assert_eq!(smart_summary("simple tool", 4), "简单的 ...");
        assert_eq!(smart_summary("abcdef", 6), "abcdef");
        assert_eq!(smart_summary("abcdefg", 6), "abcdef...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("智能体框架", 3), "智能体...");
        assert_eq!(truncate_chars("智能体", 3), "智能体");
    }
}
