use crate::domain::model::{Declaration, Declarations, ScannedFile, SourceFile};
use crate::domain::ports::DeclarationExtractor;
use regex::Regex;
use std::sync::LazyLock;

// Only tokens that start a line (after optional whitespace) are recognized.
static GROUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*TEST_GROUP\s*\(\s*(\w+)\s*\)").expect("valid group pattern")
});
static CASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*TEST\s*\(\s*(\w+)\s*,\s*(\w+)\s*\)").expect("valid case pattern")
});

/// Line-anchored pattern matcher for `TEST_GROUP(g)` and `TEST(g, c)`.
///
/// This is best-effort extraction: anything that does not match is ignored
/// rather than reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexScanner;

impl RegexScanner {
    pub fn new() -> Self {
        Self
    }

    fn group_declarations<'t>(&self, text: &'t str) -> impl Iterator<Item = Declaration> + 't {
        GROUP_PATTERN
            .captures_iter(text)
            .map(|caps| Declaration::Group(caps[1].to_string()))
    }

    fn case_declarations<'t>(&self, text: &'t str) -> impl Iterator<Item = Declaration> + 't {
        CASE_PATTERN.captures_iter(text).map(|caps| Declaration::Case {
            group: caps[1].to_string(),
            case: caps[2].to_string(),
        })
    }
}

impl DeclarationExtractor for RegexScanner {
    fn extract_declarations(&self, text: &str) -> Declarations {
        // 群組宣告先於測試案例，保留宣告順序
        self.group_declarations(text)
            .chain(self.case_declarations(text))
            .collect()
    }
}

pub fn scan_source<E: DeclarationExtractor + ?Sized>(
    extractor: &E,
    source: &SourceFile,
) -> ScannedFile {
    let declarations = extractor.extract_declarations(&source.text);
    tracing::debug!(
        "Scanned {}: {} group(s)",
        source.path.display(),
        declarations.len()
    );

    ScannedFile {
        name: source.display_name(),
        declarations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Declarations {
        RegexScanner::new().extract_declarations(text)
    }

    #[test]
    fn test_extracts_groups_and_cases() {
        let text = r#"
#include "unity_fixture.h"

TEST_GROUP(Stack);

TEST_SETUP(Stack) {}
TEST_TEAR_DOWN(Stack) {}

TEST(Stack, PushPop) {
    TEST_ASSERT_TRUE(true);
}

TEST(Stack, LimitsSize) {}
"#;
        let declarations = extract(text);

        let groups: Vec<&str> = declarations.group_names().collect();
        assert_eq!(groups, vec!["Stack"]);
        assert_eq!(
            declarations.cases("Stack"),
            Some(&["PushPop".to_string(), "LimitsSize".to_string()][..])
        );
    }

    #[test]
    fn test_tolerates_whitespace_inside_tokens() {
        let text = "  TEST_GROUP ( Timer )\n\tTEST( Timer ,  Ticks )\n";
        let declarations = extract(text);

        assert_eq!(declarations.cases("Timer"), Some(&["Ticks".to_string()][..]));
    }

    #[test]
    fn test_ignores_mid_line_tokens() {
        let text = "// TEST_GROUP(Commented)\nfoo(); TEST(Inline, Case)\nint x; /* TEST(A, b) */\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_ignores_malformed_tokens() {
        let text = "TEST_GROUP()\nTEST_GROUP(a.b)\nTEST(Only)\nTEST(A, b, c)\nTEST(ns::A, b)\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_case_without_group_declaration_creates_group() {
        let declarations = extract("TEST(Orphan, Lonely) {}\n");

        let groups: Vec<&str> = declarations.group_names().collect();
        assert_eq!(groups, vec!["Orphan"]);
        assert_eq!(declarations.cases("Orphan"), Some(&["Lonely".to_string()][..]));
    }

    #[test]
    fn test_declared_groups_precede_case_only_groups() {
        let text = "TEST(Cpu, Jump) {}\nTEST_GROUP(Memory);\nTEST_GROUP(Cpu);\n";
        let declarations = extract(text);

        let groups: Vec<&str> = declarations.group_names().collect();
        assert_eq!(groups, vec!["Memory", "Cpu"]);
    }

    #[test]
    fn test_empty_file() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_scan_source_reports_file_name() {
        let source = SourceFile::new("test/test_font.c", "TEST_GROUP(Font);\n");
        let scanned = scan_source(&RegexScanner::new(), &source);

        assert_eq!(scanned.name, "test_font.c");
        assert_eq!(scanned.declarations.len(), 1);
    }
}
