//! End-to-end comparisons against corpus directories.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use motif_analysis::comparator::PatternComparator;
use motif_core::config::MotifConfig;
use motif_core::errors::{AnalysisError, CorpusError, ParseError};
use tracing_subscriber::fmt::MakeWriter;

const BTN: &str = r#"function Btn({label}){ return <button className="btn">{label}</button> }"#;
const BTN2: &str =
    r#"function Btn2({label,color}){ return <button className="btn-2">{label}</button> }"#;

fn fixture_dir(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/components")
        .join(relative)
}

fn corpus_with(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

#[test]
fn test_near_variant_is_novel_and_consistent() {
    let dir = corpus_with(&[("Btn2.tsx", BTN2)]);
    let outcome = PatternComparator::default().compare(BTN, dir.path()).unwrap();
    let result = outcome.data;

    // props 1/2, style 0, structure 0
    assert!((result.similarity_score - 0.5 / 3.0).abs() < 1e-9);
    assert_eq!(result.matched_component.as_deref(), Some("Btn2.tsx"));
    assert!(result.is_consistent);
    assert!(result.is_novel);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_empty_corpus() {
    let dir = corpus_with(&[]);
    let result = PatternComparator::default().compare(BTN, dir.path()).unwrap().data;
    assert_eq!(result.matched_component, None);
    assert!(!result.is_consistent);
    assert!(!result.is_novel);
    assert_eq!(result.similarity_score, 0.0);
}

#[test]
fn test_malformed_candidate_aborts() {
    let dir = corpus_with(&[("Btn2.tsx", BTN2)]);
    let err = PatternComparator::default()
        .compare("function Broken() { return <div><span>oops</div> }", dir.path())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)));
}

#[test]
fn test_malformed_member_skipped_with_warning() {
    let dir = corpus_with(&[
        ("Aaa.tsx", "export default function Aaa() { return <div className=\"a\"> }"),
        ("Btn2.tsx", BTN2),
    ]);
    let outcome = PatternComparator::default().compare(BTN, dir.path()).unwrap();

    assert_eq!(outcome.data.matched_component.as_deref(), Some("Btn2.tsx"));
    assert_eq!(outcome.warning_count(), 1);
    match &outcome.warnings[0] {
        CorpusError::Parse { path, source } => {
            assert!(path.ends_with("Aaa.tsx"));
            assert!(matches!(
                source,
                ParseError::Syntax { .. } | ParseError::MismatchedTag { .. }
            ));
        }
        other => panic!("expected parse warning, got {other:?}"),
    }
}

fn nested_array(depth: usize) -> String {
    format!("const x = {}0{};", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn test_deeply_nested_member_skipped_with_warning() {
    let deep = nested_array(3_000);
    let dir = corpus_with(&[("Btn2.tsx", BTN2), ("Deep.tsx", &deep)]);
    let outcome = PatternComparator::default().compare(BTN, dir.path()).unwrap();

    assert_eq!(outcome.data.matched_component.as_deref(), Some("Btn2.tsx"));
    assert_eq!(outcome.warning_count(), 1);
    assert!(matches!(
        &outcome.warnings[0],
        CorpusError::Parse { source: ParseError::TooDeep { limit: 256, .. }, .. }
    ));
}

#[test]
fn test_deeply_nested_candidate_is_parse_error() {
    let dir = corpus_with(&[("Btn2.tsx", BTN2)]);
    let err = PatternComparator::default()
        .compare(&nested_array(6_000), dir.path())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(ParseError::TooDeep { .. })));
}

#[test]
fn test_empty_class_name_is_a_style_token() {
    let dir = corpus_with(&[(
        "M.tsx",
        r#"export default function M({ title }) { return <div className="card">{title}</div>; }"#,
    )]);
    let candidate = r#"export default function P({ title }) { return <p className="" />; }"#;
    let result = PatternComparator::default().compare(candidate, dir.path()).unwrap().data;

    // props 1, style 0, structure 0; "" is a substring of "card"
    assert!((result.similarity_score - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(result.matched_component.as_deref(), Some("M.tsx"));
    assert!(result.is_consistent);
    assert!(result.is_novel);
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_skipped_member_is_logged() {
    let dir = corpus_with(&[
        ("Aaa.tsx", "export default function Aaa() { return <div className=\"a\"> }"),
        ("Btn2.tsx", BTN2),
    ]);
    // Sequential, so every event is emitted on this thread's subscriber.
    let config = MotifConfig::from_toml("[corpus]\nparallel = false\n").unwrap();
    let comparator = PatternComparator::new(config);

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let outcome = tracing::subscriber::with_default(subscriber, || {
        comparator.compare(BTN, dir.path()).unwrap()
    });

    assert_eq!(outcome.warning_count(), 1);
    let output = logs.contents();
    assert!(output.contains("WARN"), "no warning logged: {output}");
    assert!(output.contains("skipping corpus member"), "{output}");
    assert!(output.contains("Aaa.tsx"), "{output}");
    assert!(!output.contains("Btn2.tsx"), "{output}");
}

#[test]
fn test_self_similarity() {
    let source = std::fs::read_to_string(fixture_dir("corpus/Card.tsx")).unwrap();
    let result = PatternComparator::default()
        .compare(&source, &fixture_dir("corpus"))
        .unwrap()
        .data;
    assert_eq!(result.similarity_score, 1.0);
    assert_eq!(result.matched_component.as_deref(), Some("Card.tsx"));
    assert!(result.is_consistent);
    assert!(!result.is_novel);
}

#[test]
fn test_fixture_candidate_against_fixture_corpus() {
    let source = std::fs::read_to_string(fixture_dir("candidates/ProfileCard.tsx")).unwrap();
    let outcome = PatternComparator::default()
        .compare(&source, &fixture_dir("corpus"))
        .unwrap();

    // Card shares `title` out of {title, avatarUrl, children}; nothing else overlaps.
    assert!(outcome.is_clean(), "notes.md must not be loaded");
    assert_eq!(outcome.data.matched_component.as_deref(), Some("Card.tsx"));
    assert!((outcome.data.similarity_score - 1.0 / 9.0).abs() < 1e-9);
    assert!(outcome.data.is_consistent);
    assert!(outcome.data.is_novel);
}

#[test]
fn test_missing_corpus_directory() {
    let dir = corpus_with(&[]);
    let err = PatternComparator::default()
        .compare(BTN, &dir.path().join("absent"))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Corpus(CorpusError::NotADirectory { .. })));
}

#[test]
fn test_threshold_from_config() {
    let dir = corpus_with(&[("Btn2.tsx", BTN2)]);
    let config = MotifConfig::from_toml("[analysis]\nnovelty_threshold = 0.1\n").unwrap();
    let comparator = PatternComparator::new(config);
    assert_eq!(comparator.config().analysis.effective_novelty_threshold(), 0.1);

    let result = comparator.compare(BTN, dir.path()).unwrap().data;
    assert!(result.is_consistent);
    assert!(!result.is_novel, "0.167 is not below 0.1");
}

#[test]
fn test_extension_config_selects_members() {
    let dir = corpus_with(&[("Btn2.jsx", BTN2)]);
    let default = PatternComparator::default().compare(BTN, dir.path()).unwrap().data;
    assert_eq!(default.matched_component, None);

    let config = MotifConfig::from_toml("[corpus]\nextensions = [\"tsx\", \"jsx\"]\n").unwrap();
    let result = PatternComparator::new(config).compare(BTN, dir.path()).unwrap().data;
    assert_eq!(result.matched_component.as_deref(), Some("Btn2.jsx"));
}

#[test]
fn test_cached_and_sequential_runs_agree() {
    let dir = corpus_with(&[
        ("Btn2.tsx", BTN2),
        ("Card.tsx", &std::fs::read_to_string(fixture_dir("corpus/Card.tsx")).unwrap()),
    ]);
    let baseline = PatternComparator::default().compare(BTN, dir.path()).unwrap().data;

    let config =
        MotifConfig::from_toml("[corpus]\nparallel = false\ncache_capacity = 32\n").unwrap();
    let comparator = PatternComparator::new(config);
    let first = comparator.compare(BTN, dir.path()).unwrap().data;
    let second = comparator.compare(BTN, dir.path()).unwrap().data;

    assert_eq!(baseline, first);
    assert_eq!(first, second);
    assert_eq!(comparator.cache().map(|c| c.entry_count()), Some(3));
}

#[test]
fn test_reuse_loaded_corpus() {
    let comparator = PatternComparator::default();
    let corpus = comparator.load_corpus(&fixture_dir("corpus")).unwrap();
    assert_eq!(corpus.data.len(), 3);
    let card = corpus.data.get("Card.tsx").unwrap();
    assert_eq!(card.fingerprint.name, "Card");
    assert!(card.path.ends_with("Card.tsx"));
    assert!(corpus.data.get("notes.md").is_none());

    let candidate = comparator.fingerprint(BTN).unwrap();
    assert_eq!(*candidate, comparator.fingerprinter().fingerprint(BTN).unwrap());
    let ranked = comparator.rank(&candidate, &corpus.data);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|w| w[0].breakdown.total >= w[1].breakdown.total));

    let direct = comparator.compare_fingerprint(&candidate, &corpus.data);
    let via_dir = comparator.compare(BTN, &fixture_dir("corpus")).unwrap().data;
    assert_eq!(direct, via_dir);
}

#[test]
fn test_result_serializes_camel_case() {
    let dir = corpus_with(&[("Btn2.tsx", BTN2)]);
    let result = PatternComparator::default().compare(BTN, dir.path()).unwrap().data;
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["isNovel"], true);
    assert_eq!(json["isConsistent"], true);
    assert_eq!(json["matchedComponent"], "Btn2.tsx");
    assert!(json["similarityScore"].as_f64().unwrap() > 0.16);
}
