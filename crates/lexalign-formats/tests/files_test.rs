use std::fs;

use lexalign_core::errors::LexAlignError;
use lexalign_core::Lexicon;
use lexalign_formats::*;

#[test]
fn reads_alignment_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wn-vn.tsv");
    fs::write(&path, "# wordnet to verbnet\ns1\tgive-13.1\ns2\tgive-13.1\t0.7\n").unwrap();

    let input = read_alignment_file(open(&path).unwrap(), "wn-vn.tsv").unwrap();
    assert_eq!(input.header.len(), 1);
    assert_eq!(input.pairs.len(), 2);
    assert_eq!(input.pairs[1].confidence.value(), 0.7);
}

#[test]
fn missing_file_reports_path() {
    let err = open(std::path::Path::new("/nonexistent/clusters.tsv")).unwrap_err();
    match err {
        LexAlignError::Io { path, .. } => assert!(path.contains("clusters.tsv")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cluster_file_survives_a_disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clusters.tsv");
    let input = read_cluster_file("# h\na\tb\nc\td\te\n".as_bytes(), "inline").unwrap();

    let mut sink = TsvClusterSink::new(fs::File::create(&path).unwrap());
    lexalign_core::ClusterSink::accept_clusters(&mut sink, &input.header, &input.clusters)
        .unwrap();
    drop(sink);

    let back = read_cluster_file(open(&path).unwrap(), "clusters.tsv").unwrap();
    assert_eq!(back.header, input.header);
    assert_eq!(back.clusters, input.clusters);
}

#[test]
fn run_metadata_extension_selects_parser() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("run.json");
    fs::write(
        &json,
        r#"{"id":"r1","date":"2024-05-05","decision_type":"manual","tool":"annotator"}"#,
    )
    .unwrap();
    let md = read_run_metadata(&json).unwrap();
    assert_eq!(md.creation_tool, "annotator");
    assert!(!md.automatic);

    let toml = dir.path().join("run.toml");
    fs::write(&toml, "id = \"r2\"\ndate = \"2024-05-05\"\n").unwrap();
    let err = read_run_metadata(&toml).unwrap_err();
    assert!(err.to_string().contains("decision type"));
}

#[test]
fn lexicon_and_allow_list_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let lex_path = dir.path().join("wn.tsv");
    fs::write(&lex_path, "sense\tdog%1\tdog\tn\ts1\nsense\thound%1\thound\tn\ts1\n").unwrap();
    let (lexicon, stats) = load_lexicon("wn", open(&lex_path).unwrap(), "wn.tsv").unwrap();
    assert_eq!(stats.records, 2);
    assert_eq!(lexicon.senses_of_synset("s1").len(), 2);

    let allow_path = dir.path().join("allow.tsv");
    fs::write(&allow_path, "dog\tn\n").unwrap();
    let allow = read_allow_list(open(&allow_path).unwrap(), "allow.tsv", "_").unwrap();
    assert_eq!(allow.len(), 1);
}
