use pathos::app::classify::{classify, is_duplicate};
use pathos::app::editor::{Action, Editor, EditorOptions, Outcome};
use pathos::app::path_list::Direction;
use pathos::app::session::Mode;
use pathos::app::store::{MemoryStore, PathStore};
use pathos::domain::errors::{EditorError, StoreError};
use pathos::domain::model::Classification;

fn editor(entries: &[&str]) -> Editor {
    Editor::new(
        entries.iter().copied(),
        Box::new(MemoryStore::default()),
        EditorOptions::default(),
    )
}

fn add(editor: &mut Editor, text: &str) -> Outcome {
    editor.apply(Action::StartNewEntry).unwrap();
    editor.apply(Action::CommitEntry(text.into())).unwrap()
}

#[test]
fn second_copy_flips_both_to_duplicate_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().display().to_string();
    let mut editor = editor(&[existing.as_str(), "/other"]);
    assert_eq!(editor.rows()[0].classification, Classification::Normal);

    add(&mut editor, &existing);
    let rows = editor.rows();
    let copies: Vec<_> = rows.iter().filter(|row| row.text == existing).collect();
    assert_eq!(copies.len(), 2);
    assert!(
        copies
            .iter()
            .all(|row| row.classification == Classification::Duplicate)
    );

    editor.apply(Action::DeleteSelected).unwrap();
    let rows = editor.rows();
    let remaining = rows.iter().find(|row| row.text == existing).unwrap();
    assert_eq!(remaining.classification, Classification::Normal);
}

#[test]
fn duplicate_checks_are_exact_and_case_sensitive() {
    let list = ["/usr/bin", "/USR/BIN", "/usr/bin/", "/usr/bin"];
    assert!(is_duplicate("/usr/bin", &list));
    assert!(!is_duplicate("/USR/BIN", &list));
    assert!(!is_duplicate("/usr/bin/", &list));
    assert!(!is_duplicate("/absent", &list));
    assert_eq!(
        classify("/pathos-missing", &["/pathos-missing", "/pathos-missing"]),
        Classification::MissingAndDuplicate
    );
}

#[test]
fn blank_commits_never_change_the_list() {
    let mut editor = editor(&["/a", "/b"]);
    editor.apply(Action::StartNewEntry).unwrap();
    for text in ["", " ", "\t\t", "  \n "] {
        assert_eq!(
            editor.apply(Action::CommitEntry(text.into())).unwrap(),
            Outcome::Rejected
        );
        assert_eq!(editor.current_entries().len(), 2);
        assert_eq!(editor.mode(), Mode::Entering { insert_at: 0 });
    }
}

#[test]
fn navigation_while_entering_is_ignored() {
    let mut editor = editor(&["/a", "/b", "/c"]);
    editor.apply(Action::Navigate(Direction::Down)).unwrap();
    editor.apply(Action::StartNewEntry).unwrap();

    for direction in [Direction::Down, Direction::Bottom, Direction::PageDown] {
        assert_eq!(
            editor.apply(Action::Navigate(direction)).unwrap(),
            Outcome::Ignored
        );
    }
    assert_eq!(editor.apply(Action::DeleteSelected).unwrap(), Outcome::Ignored);
    assert_eq!(editor.list().cursor(), 1);

    editor.apply(Action::CommitEntry("/x".into())).unwrap();
    assert_eq!(editor.current_entries(), ["/a", "/x", "/b", "/c"]);
}

#[test]
fn new_entry_on_empty_list_lands_at_zero() {
    let mut editor = editor(&[]);
    assert_eq!(
        add(&mut editor, "/first"),
        Outcome::Inserted {
            index: 0,
            entry: "/first".into()
        }
    );
    assert_eq!(editor.current_entries(), ["/first"]);
}

#[test]
fn deleting_last_entry_clamps_cursor() {
    let mut editor = editor(&["/only"]);
    editor.apply(Action::DeleteSelected).unwrap();
    assert!(editor.current_entries().is_empty());
    assert_eq!(editor.list().cursor(), 0);
    assert_eq!(editor.apply(Action::DeleteSelected).unwrap(), Outcome::Ignored);
}

#[test]
fn page_navigation_uses_configured_size() {
    let entries: Vec<String> = (0..10).map(|index| format!("/p{index}")).collect();
    let options = EditorOptions {
        page_size: 4,
        ..EditorOptions::default()
    };
    let mut editor = Editor::new(entries, Box::new(MemoryStore::default()), options);

    assert_eq!(
        editor.apply(Action::Navigate(Direction::PageDown)).unwrap(),
        Outcome::Moved { cursor: 4 }
    );
    editor.apply(Action::Navigate(Direction::Bottom)).unwrap();
    assert_eq!(
        editor.apply(Action::Navigate(Direction::Down)).unwrap(),
        Outcome::Ignored
    );
    assert_eq!(editor.list().cursor(), 9);
}

struct FailingStore;

impl PathStore for FailingStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }

    fn save(&self, _entries: &[String]) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly("$PATH".into()))
    }

    fn describe(&self) -> String {
        "$PATH".into()
    }
}

#[test]
fn autosave_failure_keeps_the_mutation() {
    let options = EditorOptions {
        autosave: true,
        ..EditorOptions::default()
    };
    let mut editor = Editor::new(["/a"], Box::new(FailingStore), options);
    editor.apply(Action::StartNewEntry).unwrap();

    let err = editor
        .apply(Action::CommitEntry("/b".into()))
        .unwrap_err();
    assert!(matches!(err, EditorError::Store(StoreError::ReadOnly(_))));
    assert_eq!(editor.current_entries(), ["/b", "/a"]);
    assert_eq!(editor.mode(), Mode::Browsing);
}

#[test]
fn autosave_persists_each_mutation() {
    struct Shared(std::rc::Rc<MemoryStore>);
    impl PathStore for Shared {
        fn load(&self) -> Result<Vec<String>, StoreError> {
            self.0.load()
        }
        fn save(&self, entries: &[String]) -> Result<(), StoreError> {
            self.0.save(entries)
        }
        fn describe(&self) -> String {
            self.0.describe()
        }
    }

    let memory = std::rc::Rc::new(MemoryStore::new(["/a", "/b"]));
    let options = EditorOptions {
        autosave: true,
        ..EditorOptions::default()
    };
    let mut editor = Editor::from_store(Box::new(Shared(memory.clone())), options).unwrap();

    editor.apply(Action::DeleteSelected).unwrap();
    assert_eq!(memory.snapshot(), ["/b"]);
    add(&mut editor, "/c");
    assert_eq!(memory.snapshot(), ["/c", "/b"]);
}
