//! Storage Tests
//!
//! Data directory on disk → loader → pipeline → JSON report.

use crate::test_utils::*;
use std::fs;
use tempfile::TempDir;

fn report_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(REPORT_PREFIX))
                .unwrap_or(false)
        })
        .collect()
}

#[test]
fn analyze_data_dir_into_json_report() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("Data");
    let output = tmp.path().join("output");
    write_data_dir(&data);

    let loader = LexiconLoader::new(&data);
    let lexicons = loader.load_lexicons();
    let corpus = loader.load_corpus();
    assert_eq!(corpus.len(), 4);

    let mut sink = JsonReportSink::new(&output);
    let summary = BatchPipeline::new(&lexicons).run(&corpus, &mut sink).unwrap();
    assert_eq!(summary.total_positive_emojis.get('😊'), 2);
    assert_eq!(summary.total_negative_emojis.get('😢'), 1);

    let files = report_files(&output);
    assert_eq!(files.len(), 1);
    assert_eq!(sink.written_path(), Some(files[0].as_path()));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(doc["report"].as_array().unwrap().len(), 4);
    assert_eq!(doc["report"][0]["raw"], "أنا سعيد 😊");
    assert_eq!(doc["report"][0]["processed"], "انا سعيد 😊");
    assert_eq!(doc["report"][0]["sentiment"], "positive");
    assert_eq!(doc["report"][2]["processed"], "");
    assert_eq!(doc["total_positive_emojis"]["😍"], 1);
    assert_eq!(doc["emoji_sentiment_scores"]["😢"], -1.0);
    assert_eq!(doc["classification_results"][0]["label"], "positive");
    assert_eq!(doc["classification_results"][1]["label"], "negative");
    assert_eq!(doc["classification_results"][2]["label"], "Neutral");
    assert_eq!(doc["external_sentiment_scores"].as_array().unwrap().len(), 4);
}

#[test]
fn missing_data_dir_completes() {
    let tmp = TempDir::new().unwrap();
    let loader = LexiconLoader::new(tmp.path().join("absent"));
    let lexicons = loader.load_lexicons();
    let corpus = loader.load_corpus();
    assert!(corpus.is_empty());

    let mut sink = MemoryReportSink::new();
    let summary = BatchPipeline::new(&lexicons).run(&corpus, &mut sink).unwrap();
    assert_eq!(summary, BatchSummary::default());
    assert!(sink.finished);
}

#[test]
fn config_drives_loader_and_options() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("tweets-data");
    write_data_dir(&data);

    let config_path = tmp.path().join(CONFIG_FILE_NAME);
    fs::write(
        &config_path,
        format!(
            "data_dir = {:?}\n\n[analysis]\nemoji_detection = \"known-list\"\nparallel = true\n",
            data.display().to_string()
        ),
    )
    .unwrap();

    let config = EmoslConfig::from_file(&config_path).unwrap();
    let options = config.analysis.pipeline_options().unwrap();
    assert_eq!(options.emoji_detection, DetectionRule::KnownList);
    assert!(options.parallel);

    let loader = LexiconLoader::from_config(&config);
    let lexicons = loader.load_lexicons();
    let report = BatchPipeline::new(&lexicons)
        .with_options(options)
        .analyze(&loader.load_corpus());
    assert_eq!(report.records.len(), 4);
    assert_eq!(report.records[3].features.total_emojis_count, 2);
}

#[test]
fn clear_removes_generated_reports() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output");
    let lexicons = sample_lexicons();

    for _ in 0..2 {
        let mut sink = JsonReportSink::new(&output);
        BatchPipeline::new(&lexicons)
            .run(&sample_corpus(), &mut sink)
            .unwrap();
    }
    fs::write(output.join("keep.txt"), "x").unwrap();

    let before = report_files(&output).len();
    assert!(before >= 1);
    assert_eq!(clear_reports(&output).unwrap(), before);
    assert!(report_files(&output).is_empty());
    assert!(output.join("keep.txt").exists());
}
