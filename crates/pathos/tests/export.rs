use std::fs;

use pathos::app::editor::{Action, Editor, EditorOptions, Outcome};
use pathos::app::export::{ExportOptions, Exporter};
use pathos::app::store::MemoryStore;
use pathos::domain::errors::EditorError;
use pathos::infra::config::Config;

fn editor_exporting_to(path: std::path::PathBuf, entries: &[&str]) -> Editor {
    let options = EditorOptions {
        exporter: Exporter::new(ExportOptions {
            path,
            variable: "PATH".into(),
        }),
        ..EditorOptions::default()
    };
    Editor::new(
        entries.iter().copied(),
        Box::new(MemoryStore::default()),
        options,
    )
}

#[test]
fn export_writes_current_entries_after_edits() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_path = temp_dir.path().join("pathos.sh");
    let mut editor = editor_exporting_to(output_path.clone(), &["/usr/bin", "/bin"]);

    editor.apply(Action::DeleteSelected).unwrap();
    editor.apply(Action::StartNewEntry).unwrap();
    editor
        .apply(Action::CommitEntry("/opt/tools".into()))
        .unwrap();

    let Outcome::Exported(result) = editor.apply(Action::RequestExport).unwrap() else {
        panic!("expected export outcome");
    };
    let contents = fs::read_to_string(&output_path).unwrap();
    assert_eq!(contents, "export PATH=/opt/tools:/bin\n");
    assert_eq!(result.bytes_written, contents.len());
    assert_eq!(result.path, output_path);
}

#[test]
fn exporting_twice_truncates() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_path = temp_dir.path().join("pathos.sh");
    let mut editor = editor_exporting_to(output_path.clone(), &["/a", "/b", "/c"]);

    editor.apply(Action::RequestExport).unwrap();
    editor.apply(Action::DeleteSelected).unwrap();
    editor.apply(Action::DeleteSelected).unwrap();
    editor.apply(Action::RequestExport).unwrap();

    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "export PATH=/c\n"
    );
}

#[test]
fn empty_list_exports_bare_assignment() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_path = temp_dir.path().join("pathos.sh");
    let mut editor = editor_exporting_to(output_path.clone(), &[]);
    editor.apply(Action::RequestExport).unwrap();
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "export PATH=\n");
}

#[test]
fn export_failure_leaves_session_usable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut editor = editor_exporting_to(temp_dir.path().to_path_buf(), &["/a"]);

    let err = editor.apply(Action::RequestExport).unwrap_err();
    assert!(matches!(err, EditorError::Export(_)));
    assert!(!editor.is_finished());
    assert_eq!(
        editor.apply(Action::DeleteSelected).unwrap(),
        Outcome::Removed {
            index: 0,
            entry: "/a".into()
        }
    );
}

#[test]
fn options_follow_configuration() {
    let mut config = Config::default();
    config.export.set_file("custom.sh");
    let options = ExportOptions::from_config(&config);
    assert_eq!(options.path, std::path::PathBuf::from("custom.sh"));
    assert_eq!(options.variable, "PATH");
}
