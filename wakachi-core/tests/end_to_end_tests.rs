//! End-to-end tests for the complete segmentation pipeline

use std::path::PathBuf;

use wakachi_core::external::{Annotation, BoxError};
use wakachi_core::{
    AnnotationFile, ApiError, FileCache, SegmentOptions, Segmenter, SyntaxAnnotator, Token,
};

const ROPPONGI: &str = "六本木ヒルズで、「ご飯」を食べます。";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Annotator for "今日は Googleの日", a sentence with a space inside
struct MixedScriptAnnotator;

impl SyntaxAnnotator for MixedScriptAnnotator {
    fn annotate(&self, _text: &str, _language: Option<&str>) -> Result<Annotation, BoxError> {
        Ok(Annotation {
            tokens: vec![
                Token::new("今日", 0, "NOUN", "NN", 2),
                Token::new("は", 2, "PRT", "PRT", 0),
                Token::new("Google", 4, "NOUN", "NSUBJ", 4),
                Token::new("の", 10, "PRT", "PRT", 2),
                Token::new("日", 11, "NOUN", "ROOT", 4),
            ],
            language: Some("ja".to_string()),
        })
    }
}

#[test]
fn test_annotation_file_pipeline() {
    let annotations = AnnotationFile::from_path(fixture("roppongi.json")).unwrap();
    let segmenter = Segmenter::from_annotations(annotations);

    let result = segmenter.segment(ROPPONGI, &SegmentOptions::default()).unwrap();
    assert_eq!(
        result.words(),
        vec!["六本木", "ヒルズで、", "「ご飯」を", "食べます。"]
    );
    assert_eq!(result.language.as_deref(), Some("ja"));
}

#[test]
fn test_annotation_file_pipeline_with_entities() {
    let annotations = AnnotationFile::from_path(fixture("roppongi.json")).unwrap();
    let segmenter = Segmenter::from_annotations(annotations);
    let options = SegmentOptions::builder()
        .use_entities(true)
        .attribute("class", "nowrap")
        .build()
        .unwrap();

    let result = segmenter.segment(ROPPONGI, &options).unwrap();
    assert_eq!(
        result.html,
        concat!(
            r#"<span><span class="nowrap">六本木ヒルズで、</span>"#,
            r#"<span class="nowrap">「ご飯」を</span>"#,
            r#"<span class="nowrap">食べます。</span></span>"#
        )
    );
}

#[test]
fn test_space_after_cjk_becomes_break() {
    let segmenter = Segmenter::new().with_annotator(MixedScriptAnnotator);
    let result = segmenter
        .segment("今日は Googleの日", &SegmentOptions::default())
        .unwrap();

    assert_eq!(result.words(), vec!["今日は", "\n", "Googleの", "日"]);
    assert_eq!(
        result.html,
        concat!(
            r#"<span><span class="ww">今日は</span>"#,
            "\n",
            r#"<span class="ww">Googleの</span><span class="ww">日</span></span>"#
        )
    );
    assert_eq!(result.content_chunk_count(), 3);
}

#[test]
fn test_html_input_matches_plain_text() {
    let annotations = AnnotationFile::from_path(fixture("roppongi.json")).unwrap();
    let segmenter = Segmenter::from_annotations(annotations);

    let plain = segmenter.segment(ROPPONGI, &SegmentOptions::default()).unwrap();
    let markup = segmenter
        .segment(
            "<p>\n  六本木ヒルズで、<b>「ご飯」</b>を食べます。\n</p>",
            &SegmentOptions::default(),
        )
        .unwrap();
    assert_eq!(plain.chunks, markup.chunks);
    assert_eq!(plain.html, markup.html);
}

#[test]
fn test_file_cache_round_trip() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let annotations = AnnotationFile::from_path(fixture("roppongi.json")).unwrap();

    let first = Segmenter::from_annotations(annotations)
        .with_cache(FileCache::new(temp_dir.path()))
        .segment(ROPPONGI, &SegmentOptions::default())
        .unwrap();

    // A segmenter without an annotator can only answer from the cache.
    let cached = Segmenter::new()
        .with_cache(FileCache::new(temp_dir.path()))
        .segment(ROPPONGI, &SegmentOptions::default())
        .unwrap();
    assert_eq!(first, cached);

    let other_language = Segmenter::new()
        .with_cache(FileCache::new(temp_dir.path()))
        .segment(ROPPONGI, &SegmentOptions::builder().language("ja").build().unwrap());
    assert!(matches!(other_language, Err(ApiError::Configuration(_))));
}

#[test]
fn test_segmentation_serializes_to_json() {
    let annotations = AnnotationFile::from_path(fixture("roppongi.json")).unwrap();
    let result = Segmenter::from_annotations(annotations)
        .segment(ROPPONGI, &SegmentOptions::default())
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["chunks"][0]["word"], "六本木");
    assert_eq!(json["chunks"][0]["tag"], "NONE");
    assert_eq!(json["chunks"][1]["dependency"], "unresolved");
    assert_eq!(json["tokens"][10]["pos"], "PUNCT");
}

#[test]
fn test_segmenter_is_shareable_across_threads() {
    let annotations = AnnotationFile::from_path(fixture("roppongi.json")).unwrap();
    let segmenter = Segmenter::from_annotations(annotations);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let segmenter = segmenter.clone();
            std::thread::spawn(move || {
                segmenter
                    .segment(ROPPONGI, &SegmentOptions::default())
                    .map(|result| result.html)
            })
        })
        .collect();

    let outputs: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}
