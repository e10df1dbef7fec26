//! Markdown cheatsheet parser.
//!
//! Only two kinds of line matter:
//!
//! ```markdown
//! ## Movement
//! * `j`, `gj` - Move the cursor down
//! ```
//!
//! A `## ` header sets the category for every question below it, and a
//! bullet whose first span is backtick-quoted becomes one [`Record`]. Every
//! other line is ignored.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::QuizError;
use crate::model::Record;

static QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*\s+(`.*`)\s-\s+(.*)$").expect("valid question regex"));

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s(.*)$").expect("valid header regex"));

/// Separator between answer alternatives inside the answer span.
const ANSWER_SEPARATOR: &str = ", ";

/// What a single source line contributes to the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A `## ` heading; the captured text becomes the current category.
    Header(String),
    /// A question bullet with its cleaned answer alternatives.
    Question {
        answers: Vec<String>,
        question: String,
    },
    /// Anything else.
    Ignored,
}

/// Classify one line. The question pattern wins over the header pattern.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(caps) = QUESTION_RE.captures(line) {
        return LineKind::Question {
            answers: split_answers(&caps[1]),
            question: caps[2].to_string(),
        };
    }
    if let Some(caps) = HEADER_RE.captures(line) {
        return LineKind::Header(caps[1].to_string());
    }
    LineKind::Ignored
}

/// Turn a raw answer span into its alternatives.
///
/// Double and triple backtick runs are removed from the whole span first.
/// The span is then split on `", "` and each piece is trimmed, losing one
/// wrapping pair of backticks if it has one. Pieces left empty are dropped.
pub fn split_answers(token: &str) -> Vec<String> {
    let stripped = token.replace("```", "").replace("``", "");
    stripped
        .split(ANSWER_SEPARATOR)
        .map(clean_alternative)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

// A span like `a, b` splits into "`a" and "b`": the outer delimiters end up
// on different pieces, so each side is stripped on its own.
fn clean_alternative(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('`').unwrap_or(trimmed);
    let inner = inner.strip_suffix('`').unwrap_or(inner);
    inner.trim()
}

/// Parse cheatsheet text into records, in source order.
pub fn parse_str(content: &str) -> Vec<Record> {
    let (_, records) = content.lines().enumerate().fold(
        (String::new(), Vec::new()),
        |(category, mut records), (idx, line)| match classify_line(line) {
            LineKind::Header(next) => (next, records),
            LineKind::Question { answers, question } => {
                if answers.is_empty() {
                    tracing::debug!(line = idx + 1, "skipping question without answers");
                } else if question.trim().is_empty() {
                    tracing::debug!(line = idx + 1, "skipping answer without question");
                } else {
                    records.push(Record::new(category.clone(), question, answers));
                }
                (category, records)
            }
            LineKind::Ignored => (category, records),
        },
    );
    records
}

/// Read and parse a cheatsheet file.
///
/// The file is closed before this returns. A missing or unreadable file is
/// an error, never an empty quiz.
pub fn parse_file(path: &Path) -> Result<Vec<Record>, QuizError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| QuizError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let records = parse_str(&content);
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "parsed quiz source"
    );
    Ok(records)
}

/// A warning from cheatsheet validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Category of the offending question (if applicable).
    pub category: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check parsed records for issues worth telling the author about.
pub fn validate_records(records: &[Record]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if records.is_empty() {
        warnings.push(ValidationWarning {
            category: None,
            message: "no questions found".into(),
        });
    }

    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert((&r.category, &r.question)) {
            warnings.push(ValidationWarning {
                category: Some(r.category.clone()),
                message: format!("duplicate question: {}", r.question),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHEATSHEET: &str = "\
# Vim cheatsheet

Some prose that is not a question.

* `h` - Move left

## Movement
* `j` - Move down
* `w`, `W` - Jump to the start of the next word

## Editing
  * `dd` - Delete the current line
* `:wq`, `:x`, `ZZ` - Save and quit
";

    #[test]
    fn classify_header() {
        assert_eq!(
            classify_line("## Movement"),
            LineKind::Header("Movement".into())
        );
        assert_eq!(classify_line("### Deeper"), LineKind::Ignored);
        assert_eq!(classify_line("##NoSpace"), LineKind::Ignored);
    }

    #[test]
    fn classify_question() {
        assert_eq!(
            classify_line("* `a, b` - What?"),
            LineKind::Question {
                answers: vec!["a".into(), "b".into()],
                question: "What?".into(),
            }
        );
    }

    #[test]
    fn classify_ignores_prose_and_blank_lines() {
        assert_eq!(classify_line(""), LineKind::Ignored);
        assert_eq!(classify_line("Just text"), LineKind::Ignored);
        assert_eq!(classify_line("* plain bullet - no backticks"), LineKind::Ignored);
    }

    #[test]
    fn question_under_category() {
        let records = parse_str("## X\n* `a, b` - What?\n");
        assert_eq!(
            records,
            vec![Record::new("X", "What?", vec!["a".into(), "b".into()])]
        );
    }

    #[test]
    fn categories_follow_headers() {
        let records = parse_str(CHEATSHEET);
        let cats: Vec<_> = records.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(cats, vec!["", "Movement", "Movement", "Editing", "Editing"]);
    }

    #[test]
    fn question_before_any_header_has_empty_category() {
        let records = parse_str("* `h` - Move left\n## Later\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "");
    }

    #[test]
    fn multiple_backticked_alternatives() {
        let records = parse_str(CHEATSHEET);
        let quit = records.last().unwrap();
        assert_eq!(quit.answers, vec![":wq", ":x", "ZZ"]);
        assert_eq!(quit.question, "Save and quit");
    }

    #[test]
    fn indented_bullet_is_a_question() {
        let records = parse_str(CHEATSHEET);
        assert!(records.iter().any(|r| r.answers == vec!["dd"]));
    }

    #[test]
    fn triple_backticks_stripped_before_split() {
        assert_eq!(split_answers("`dd`, ```yy```"), vec!["dd", "yy"]);
        assert_eq!(split_answers("```ci(```"), vec!["ci("]);
        assert_eq!(split_answers("`` `x` ``"), vec!["x"]);
        for a in split_answers("`dd`, ```yy```, `` `p` ``") {
            assert!(!a.contains('`'), "residual backtick in {a:?}");
        }
    }

    #[test]
    fn unwrapped_alternatives_are_trimmed() {
        assert_eq!(split_answers("` a `"), vec!["a"]);
        assert_eq!(split_answers("`gg`,  G"), vec!["gg", "G"]);
    }

    #[test]
    fn question_keeps_inline_spans() {
        let records = parse_str("* `ciw` - Change the `inner` word\n");
        assert_eq!(records[0].question, "Change the `inner` word");
    }

    #[test]
    fn empty_answer_span_is_skipped() {
        assert!(parse_str("* `` - Nothing to type\n").is_empty());
    }

    #[test]
    fn every_record_has_question_and_answers() {
        let records = parse_str(CHEATSHEET);
        assert_eq!(records.len(), 5);
        for r in &records {
            assert!(!r.question.trim().is_empty());
            assert!(!r.answers.is_empty());
            assert!(r.answers.iter().all(|a| !a.is_empty()));
        }
    }

    #[test]
    fn crlf_line_endings() {
        let records = parse_str("## Win\r\n* `x` - Delete char\r\n");
        assert_eq!(records[0].category, "Win");
        assert_eq!(records[0].question, "Delete char");
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cheatsheet.md");
        std::fs::write(&path, CHEATSHEET).unwrap();

        let records = parse_file(&path).unwrap();
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn parse_file_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("nope.md")).unwrap_err();
        assert!(err.is_source_error());
    }

    #[test]
    fn validate_duplicates() {
        let records = parse_str("## A\n* `x` - Same\n* `y` - Same\n## B\n* `z` - Same\n");
        let warnings = validate_records(&records);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("duplicate"));
        assert_eq!(warnings[0].category.as_deref(), Some("A"));
    }

    #[test]
    fn validate_empty_source() {
        let warnings = validate_records(&[]);
        assert!(warnings.iter().any(|w| w.message.contains("no questions")));
    }
}
