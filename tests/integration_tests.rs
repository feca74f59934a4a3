use amalgamate::core::ConfigProvider;
use amalgamate::{AmalgamEngine, AmalgamError, AmalgamManifest, AmalgamPipeline, LocalStorage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "// csbench
// command-line benchmarking tool
//
#ifndef CSBENCH_H
#define CSBENCH_H

#include <stdio.h>

int cs_main(void);

#endif // CSBENCH_H
";

const MAIN_SOURCE: &str = "#if !defined(__APPLE__)
#define _POSIX_C_SOURCE 200809L
#endif

int main(void) { return cs_main(); }
";

fn implementation_source(name: &str) -> String {
    let stem = name.trim_end_matches(".c");
    format!(
        "// csbench\n// command-line benchmarking tool\n#include \"csbench.h\"\n\nint {}(void) {{ return 0; }}\n\n",
        stem
    )
}

fn write_fragments(dir: &Path) {
    let manifest = AmalgamManifest::builtin().unwrap();
    for name in manifest.load_order() {
        let content = match name.as_str() {
            "csbench.h" => HEADER.to_string(),
            "csbench.c" => MAIN_SOURCE.to_string(),
            other => implementation_source(other),
        };
        fs::write(dir.join(name), content).unwrap();
    }
}

fn engine_for(dir: &Path) -> AmalgamEngine<AmalgamPipeline<LocalStorage, AmalgamManifest>> {
    let storage = LocalStorage::new(dir.to_str().unwrap().to_string());
    let pipeline = AmalgamPipeline::new(storage, AmalgamManifest::builtin().unwrap());
    AmalgamEngine::new(pipeline)
}

fn expected_output() -> String {
    let mut expected = String::from(
        "// csbench\n// command-line benchmarking tool\n//\n#include <stdio.h>\n\nint cs_main(void);\n",
    );
    for stem in [
        "csbench_run",
        "csbench_analyze",
        "csbench_report",
        "csbench_utils",
        "csbench_plot",
        "csbench_perf",
    ] {
        expected.push_str(&format!("\nint {}(void) {{ return 0; }}\n", stem));
    }
    expected.push('\n');
    expected.push_str(MAIN_SOURCE);
    expected
}

#[test]
fn test_end_to_end_amalgamation() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());

    let output_path = engine_for(temp_dir.path()).run().unwrap();
    assert!(output_path.ends_with("csbench_amalgamated.c"));

    let written = fs::read_to_string(temp_dir.path().join("csbench_amalgamated.c")).unwrap();
    assert_eq!(written, expected_output());
}

#[test]
fn test_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());
    let destination = temp_dir.path().join("csbench_amalgamated.c");

    engine_for(temp_dir.path()).run().unwrap();
    let first = fs::read(&destination).unwrap();
    engine_for(temp_dir.path()).run().unwrap();
    let second = fs::read(&destination).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_fragment_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());
    fs::remove_file(temp_dir.path().join("csbench_perf.c")).unwrap();

    let result = engine_for(temp_dir.path()).run();

    match result {
        Err(AmalgamError::ResourceNotFound { name, .. }) => assert_eq!(name, "csbench_perf.c"),
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
    assert!(!temp_dir.path().join("csbench_amalgamated.c").exists());
}

#[test]
fn test_missing_fragment_keeps_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());
    let destination = temp_dir.path().join("csbench_amalgamated.c");
    fs::write(&destination, "previous build\n").unwrap();
    fs::remove_file(temp_dir.path().join("csbench.h")).unwrap();

    assert!(engine_for(temp_dir.path()).run().is_err());
    assert_eq!(fs::read_to_string(&destination).unwrap(), "previous build\n");
}

#[test]
fn test_comment_only_fragment_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());
    fs::write(
        temp_dir.path().join("csbench_plot.c"),
        "// csbench\n// nothing to see\n\n\n",
    )
    .unwrap();

    engine_for(temp_dir.path()).run().unwrap();

    let written = fs::read_to_string(temp_dir.path().join("csbench_amalgamated.c")).unwrap();
    assert!(!written.contains("csbench_plot"));
    assert!(!written.contains("\n\n\n"));
}

#[test]
fn test_dry_run_plan_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());

    let output = engine_for(temp_dir.path()).plan().unwrap();

    assert_eq!(output.report.preamble_lines, 3);
    assert_eq!(output.report.fragments.len(), 8);
    assert_eq!(output.report.output_lines, output.lines.len());
    assert!(!temp_dir.path().join("csbench_amalgamated.c").exists());
}

#[test]
fn test_crlf_line_endings_are_preserved() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());
    fs::write(
        temp_dir.path().join("csbench_run.c"),
        "// csbench\r\n#include \"csbench.h\"\r\n\r\nint crlf(void);\r\n",
    )
    .unwrap();

    engine_for(temp_dir.path()).run().unwrap();

    let written = fs::read_to_string(temp_dir.path().join("csbench_amalgamated.c")).unwrap();
    assert!(written.contains("\nint crlf(void);\r\n\nint csbench_analyze"));
}

#[test]
fn test_unterminated_main_source_keeps_missing_newline() {
    let temp_dir = TempDir::new().unwrap();
    write_fragments(temp_dir.path());
    fs::write(
        temp_dir.path().join("csbench.c"),
        MAIN_SOURCE.trim_end_matches('\n'),
    )
    .unwrap();

    engine_for(temp_dir.path()).run().unwrap();

    let written = fs::read_to_string(temp_dir.path().join("csbench_amalgamated.c")).unwrap();
    let expected = expected_output();
    assert_eq!(written, expected.trim_end_matches('\n'));
    assert!(written.ends_with("int main(void) { return cs_main(); }"));
}
