use insta::assert_snapshot;
use pathos::app::editor::{Editor, EditorOptions};
use pathos::app::export::render_line;
use pathos::app::store::MemoryStore;
use pathos::ui::components::path_list::row_label;

fn labelled_rows(editor: &Editor) -> String {
    editor
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let label = row_label(index, row);
            match row.classification.tag() {
                "" => label,
                tag => format!("{label} {tag}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn export_line_renders() {
    let rendered = render_line("PATH", &["/usr/bin", "/bin", "/usr/bin"]);
    assert_snapshot!("export_line", rendered);
}

#[test]
fn classified_rows_render() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("bin");
    std::fs::create_dir(&present).unwrap();
    let present = present.display().to_string();

    let editor = Editor::new(
        [
            "/pathos-missing/a".to_string(),
            present.clone(),
            "/pathos-missing/a".to_string(),
            "/pathos-missing/b".to_string(),
        ],
        Box::new(MemoryStore::default()),
        EditorOptions::default(),
    );
    let rendered = labelled_rows(&editor).replace(&present, "<tmp>/bin");
    assert_snapshot!("classified_rows", rendered);
}
