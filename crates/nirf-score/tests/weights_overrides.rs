use std::io::Write;

use nirf_score::intake;
use nirf_score::ranking::{ScoreEngine, StaticWeights, WeightConfig, WeightProvider, WeightsFile};

#[test]
fn weights_file_overrides_only_the_keys_it_names() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp weights file");
    writeln!(file, "tlr: 40\nRPII: 25\nGO: \"15\"\nOI: lots").expect("write weights");

    let weights = WeightsFile::new(file.path()).weights();
    assert_eq!(weights.teaching_resources, 40.0);
    assert_eq!(weights.research_output, 25.0);
    assert_eq!(weights.graduation_outcomes, 15.0);
    assert_eq!(weights.outreach_inclusivity, 10.0);
    assert_eq!(weights.perception, 10.0);
}

#[test]
fn weights_file_is_reread_on_every_call() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weights.yaml");
    let provider = WeightsFile::new(&path);

    assert_eq!(provider.weights(), WeightConfig::default());

    std::fs::write(&path, "PR: 50\n").expect("write weights");
    assert_eq!(provider.weights().perception, 50.0);
}

#[test]
fn providers_feed_the_engine() {
    let cohort = intake::from_json_reader(
        r#"{"records": [
            {"college_name": "Solo College", "F1": "40", "seats_N": 400, "PR_survey": 30}
        ]}"#
        .as_bytes(),
    )
    .expect("cohort parses");

    let provider = StaticWeights(WeightConfig {
        teaching_resources: 0.0,
        research_output: 0.0,
        graduation_outcomes: 0.0,
        outreach_inclusivity: 0.0,
        perception: 100.0,
    });
    let results = ScoreEngine::from_provider(&provider).score(&cohort);

    // Without applications the seat ratio is zero, leaving only the survey.
    assert_eq!(results[0].perception, 30.0);
    assert_eq!(results[0].total, 30.0);
}
