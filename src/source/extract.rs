//! Word source that pulls quoted names out of search tool output.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::shell::SearchTool;
use crate::words::{Keyword, WordSet};

use super::WordSource;

/// Pattern handed to the search tool by default: a builtin table entry.
pub const DEFAULT_PATTERN: &str = r#"    {"[^"]*""#;

/// File searched by default, relative to the working directory.
pub const DEFAULT_PATH: &str = "src/builtins.c";

/// Search program used by default.
pub const DEFAULT_PROGRAM: &str = "grep";

static QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("quoted word regex is valid"));

/// Extract the first double-quoted substring of `line` as a keyword.
///
/// Returns `None` when the line holds no complete quoted pair.
pub fn extract_keyword(line: &str) -> Option<Keyword> {
    QUOTED_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| Keyword::new(m.as_str()))
}

/// Collect every extractable keyword from `lines`, skipping the rest.
pub fn extract_keywords<I, S>(lines: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = WordSet::new();
    for line in lines {
        let line = line.as_ref();
        match extract_keyword(line) {
            Some(word) => {
                words.insert(word);
            }
            None => tracing::trace!("Skipping line without a quoted word: {:?}", line),
        }
    }
    words
}

/// Runs a [`SearchTool`] once and extracts keywords from its output.
#[derive(Debug, Clone)]
pub struct ExtractionSource<T> {
    tool: T,
    pattern: String,
    path: PathBuf,
}

impl<T: SearchTool> ExtractionSource<T> {
    /// Create a source searching `path` for `pattern` with `tool`.
    pub fn new(tool: T, pattern: &str, path: &Path) -> Self {
        Self {
            tool,
            pattern: pattern.to_string(),
            path: path.to_path_buf(),
        }
    }

    /// Create a source using the default pattern and path.
    pub fn with_defaults(tool: T) -> Self {
        Self::new(tool, DEFAULT_PATTERN, Path::new(DEFAULT_PATH))
    }

    /// The search tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }
}

impl<T: SearchTool> WordSource for ExtractionSource<T> {
    fn describe(&self) -> String {
        format!("extracted from {}", self.path.display())
    }

    fn current_words(&self) -> Result<WordSet> {
        let lines = self.tool.search(&self.pattern, &self.path)?;
        tracing::debug!("Search returned {} lines", lines.len());
        Ok(extract_keywords(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreCheckError;
    use std::cell::RefCell;

    /// Returns canned lines and records every call.
    struct FakeSearchTool {
        lines: Vec<String>,
        calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl FakeSearchTool {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SearchTool for FakeSearchTool {
        fn search(&self, pattern: &str, path: &Path) -> Result<Vec<String>> {
            self.calls
                .borrow_mut()
                .push((pattern.to_string(), path.to_path_buf()));
            Ok(self.lines.clone())
        }
    }

    struct FailingSearchTool;

    impl SearchTool for FailingSearchTool {
        fn search(&self, _pattern: &str, path: &Path) -> Result<Vec<String>> {
            Err(CoreCheckError::TargetNotFound {
                path: path.to_path_buf(),
            })
        }
    }

    #[test]
    fn extracts_first_quoted_substring() {
        assert_eq!(
            extract_keyword(r#"    {"dup", builtin_dup},"#),
            Some(Keyword::new("DUP"))
        );
        assert_eq!(
            extract_keyword(r#"    {"a" "b"}"#),
            Some(Keyword::new("A"))
        );
    }

    #[test]
    fn unterminated_quote_is_skipped() {
        assert_eq!(extract_keyword(r#"    {"malformed"#), None);
        assert_eq!(extract_keyword("no quotes at all"), None);
    }

    #[test]
    fn empty_quotes_yield_empty_keyword() {
        assert_eq!(extract_keyword(r#"{"", x}"#), Some(Keyword::new("")));
    }

    #[test]
    fn simulated_tool_output_yields_dup_only() {
        let source = ExtractionSource::with_defaults(FakeSearchTool::new(&[
            r#"    {"DUP", ...}"#,
            r#"    {"malformed"#,
        ]));

        let words = source.current_words().unwrap();

        assert_eq!(words.len(), 1);
        assert!(words.contains(&Keyword::new("DUP")));
    }

    #[test]
    fn extracted_words_are_case_folded_and_deduplicated() {
        let source = ExtractionSource::with_defaults(FakeSearchTool::new(&[
            r#"    {"dup""#,
            r#"    {"DUP""#,
            r#"    {"2drop""#,
        ]));

        let words = source.current_words().unwrap();

        let names: Vec<&str> = words.iter().map(Keyword::as_str).collect();
        assert_eq!(names, vec!["2DROP", "DUP"]);
    }

    #[test]
    fn searches_exactly_once_with_configured_pattern() {
        let source = ExtractionSource::new(
            FakeSearchTool::new(&[]),
            "pattern",
            Path::new("words.c"),
        );

        let words = source.current_words().unwrap();

        assert!(words.is_empty());
        let calls = source.tool().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("pattern".to_string(), PathBuf::from("words.c")));
    }

    #[test]
    fn default_source_uses_builtin_table_pattern() {
        let source = ExtractionSource::with_defaults(FakeSearchTool::new(&[]));
        source.current_words().unwrap();

        let calls = source.tool().calls.borrow();
        assert_eq!(calls[0].0, "    {\"[^\"]*\"");
        assert_eq!(calls[0].1, PathBuf::from("src/builtins.c"));
    }

    #[test]
    fn tool_failure_propagates() {
        let source = ExtractionSource::with_defaults(FailingSearchTool);
        let err = source.current_words().unwrap_err();
        assert!(matches!(err, CoreCheckError::TargetNotFound { .. }));
    }

    #[test]
    fn escaped_quote_entries_keep_text_before_backslash_quote() {
        // `{".\"", builtin_dot_quote}` as grep -o prints it.
        let words = extract_keywords([r#"    {".\""#]);
        assert!(words.contains(&Keyword::new(".\\")));
    }

    #[test]
    fn describe_mentions_path() {
        let source = ExtractionSource::with_defaults(FakeSearchTool::new(&[]));
        assert_eq!(source.describe(), "extracted from src/builtins.c");
    }
}
