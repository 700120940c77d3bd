use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Element {
    Element::new("Binary")
        .with_child(Element::new("Ident").with_attr("Name", "a"))
        .with_child(Element::new("Ident").with_attr("Name", "b"))
        .with_attr("Op", "ADD")
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn writes_xml_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expr.xml");

    save(&path, &sample()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), sample().to_xml());
    assert_eq!(entries(dir.path()), ["expr.xml"]);
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expr.xml");
    fs::write(&path, "old contents that are longer than the new document").unwrap();

    let doc = Element::new("Ident").with_attr("Name", "x");
    save(&path, &doc).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), r#"<Ident Name="x" />"#);
}

#[test]
fn unrelated_tmp_sibling_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xml");
    let sibling = dir.path().join("out.xml.tmp");
    fs::write(&sibling, "user data").unwrap();

    save(&path, &sample()).unwrap();

    assert_eq!(fs::read_to_string(&sibling).unwrap(), "user data");
    assert_eq!(fs::read_to_string(&path).unwrap(), sample().to_xml());
    assert_eq!(entries(dir.path()), ["out.xml", "out.xml.tmp"]);
}

#[test]
fn repeated_saves_leave_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expr.xml");

    for _ in 0..3 {
        save(&path, &sample()).unwrap();
    }

    assert_eq!(entries(dir.path()), ["expr.xml"]);
}

#[cfg(unix)]
#[test]
fn existing_permissions_are_kept() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expr.xml");
    fs::write(&path, "old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    save(&path, &sample()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn missing_directory_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("expr.xml");

    let err = save(&path, &sample()).unwrap_err();

    assert!(matches!(err, SaveError::Write { .. }));
    assert!(err.to_string().starts_with("failed to write document to `"));
    assert!(err.to_string().contains("expr.xml"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn replacing_a_directory_fails_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taken");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let err = save(&path, &sample()).unwrap_err();

    assert!(matches!(err, SaveError::Replace { .. }));
    assert!(path.is_dir());
    assert_eq!(entries(&path), ["keep"]);
    assert_eq!(entries(dir.path()), ["taken"]);
}

#[test]
fn bare_file_name_uses_current_directory() {
    assert_eq!(parent_dir(Path::new("expr.xml")), Path::new("."));
    assert_eq!(parent_dir(Path::new("out/expr.xml")), Path::new("out"));
}
