use std::fs;
use tempfile::TempDir;
use vaultpad::api::VaultApi;
use vaultpad::layout::CellWidth;
use vaultpad::notebook::{Notebook, NotebookLimits, WELCOME_TITLE};
use vaultpad::store::fs::FsBackend;

fn backend(dir: &TempDir) -> FsBackend {
    FsBackend::new(dir.path().join("vault"))
}

fn open(dir: &TempDir) -> Notebook<FsBackend> {
    Notebook::open(backend(dir), NotebookLimits::default()).unwrap()
}

fn files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path().join("vault"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn empty_vault_gets_a_welcome_note() {
    let dir = TempDir::new().unwrap();
    let mut nb = open(&dir);
    assert_eq!(nb.len(), 1);
    assert_eq!(nb.notes()[0].title(), WELCOME_TITLE);
    assert_eq!(nb.selected(), Some(0));

    assert!(nb.persist_all().is_ok());
    assert_eq!(files(&dir), vec![format!("{WELCOME_TITLE}.md")]);
}

#[test]
fn unicode_text_survives_a_reload() {
    let dir = TempDir::new().unwrap();
    let mut nb = open(&dir);
    let index = nb.create_titled("Hello").unwrap();
    for c in "Hello ƒ±√ü".chars() {
        assert!(nb.insert_codepoint(c as u32));
    }
    assert!(nb.persist_all().is_ok());

    let nb = open(&dir);
    let reloaded = nb.find("Hello").unwrap();
    assert_eq!(nb.notes()[reloaded].text(), "Hello ƒ±√ü");
    assert!(!nb.notes()[reloaded].is_dirty());
    assert_eq!(index, 1);
}

#[test]
fn rename_then_persist_leaves_one_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("vault")).unwrap();
    fs::write(dir.path().join("vault/Draft.md"), "body").unwrap();

    let mut nb = open(&dir);
    nb.rename(0, "Final").unwrap();
    assert!(nb.persist(0).unwrap());
    assert_eq!(files(&dir), vec!["Final.md"]);
    assert_eq!(
        fs::read_to_string(dir.path().join("vault/Final.md")).unwrap(),
        "body"
    );
}

#[test]
fn invalid_utf8_loads_lossily_and_other_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    let vault = dir.path().join("vault");
    fs::create_dir_all(&vault).unwrap();
    fs::write(vault.join("Broken.md"), b"ok \xff end").unwrap();
    fs::write(vault.join(".hidden.md"), "secret").unwrap();
    fs::write(vault.join("notes.txt"), "other").unwrap();

    let nb = open(&dir);
    assert_eq!(nb.len(), 1);
    assert_eq!(nb.notes()[0].text(), "ok \u{FFFD} end");
}

#[test]
fn delete_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let vault = dir.path().join("vault");
    fs::create_dir_all(&vault).unwrap();
    fs::write(vault.join("a.md"), "1").unwrap();
    fs::write(vault.join("b.md"), "2").unwrap();

    let mut nb = open(&dir);
    let removed = nb.delete(0).unwrap();
    assert_eq!(removed.title(), "a");
    assert_eq!(files(&dir), vec!["b.md"]);
    assert_eq!(nb.selected(), Some(0));
}

#[test]
fn api_session_flushes_on_shutdown() {
    let dir = TempDir::new().unwrap();
    let mut api = VaultApi::open(backend(&dir), NotebookLimits::default()).unwrap();
    api.create_note(Some("Plan"), Some("# Plan\n- wrap me please"))
        .unwrap();

    let view = api
        .view_note(2, 12.0, CellWidth, None)
        .unwrap()
        .view
        .unwrap();
    let texts: Vec<_> = view.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Plan", "wrap me", "please"]);

    assert!(!api.shutdown().has_errors());
    assert_eq!(
        fs::read_to_string(dir.path().join("vault/Plan.md")).unwrap(),
        "# Plan\n- wrap me please"
    );
}
