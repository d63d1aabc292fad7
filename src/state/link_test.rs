use super::*;

fn post(id: u64, title: &str) -> Record {
    let mut record = Record::new();
    record.insert("id".into(), id.into());
    record.insert("title".into(), title.into());
    record
}

#[test]
fn edit_links_to_base_path_plus_id() {
    let target = LinkType::Edit.resolve(&post(1, "foo"), "1", "/posts");
    assert_eq!(target, Some("/posts/1".to_owned()));
}

#[test]
fn default_is_edit() {
    let target = LinkType::default().resolve(&post(1, "foo"), "1", "/posts");
    assert_eq!(target, Some("/posts/1".to_owned()));
}

#[test]
fn show_appends_show_segment() {
    let target = LinkType::Show.resolve(&post(1, "foo"), "1", "/posts");
    assert_eq!(target, Some("/posts/1/show".to_owned()));
}

#[test]
fn disabled_has_no_target() {
    assert_eq!(LinkType::Disabled.resolve(&post(1, "foo"), "1", "/posts"), None);
}

#[test]
fn custom_path_is_used_verbatim() {
    let link = LinkType::custom(|_record, id, base_path| format!("{base_path}/{id}/details"));
    let target = link.resolve(&post(1, "foo"), "1", "/posts");
    assert_eq!(target, Some("/posts/1/details".to_owned()));
}

#[test]
fn custom_builder_sees_the_record() {
    let link = LinkType::custom(|record, _id, _base_path| {
        let title = record.get("title").and_then(|v| v.as_str()).unwrap_or("");
        format!("/by-title/{title}")
    });
    let target = link.resolve(&post(2, "bar"), "2", "/posts");
    assert_eq!(target, Some("/by-title/bar".to_owned()));
}

#[test]
fn boolean_true_behaves_like_edit() {
    let target = LinkType::from(true).resolve(&post(1, "foo"), "1", "/posts");
    assert_eq!(target, Some("/posts/1".to_owned()));
}

#[test]
fn boolean_false_disables_links() {
    assert_eq!(LinkType::from(false).resolve(&post(1, "foo"), "1", "/posts"), None);
}

#[test]
fn parses_edit_and_show() {
    assert!(matches!(LinkType::try_from("edit"), Ok(LinkType::Edit)));
    assert!(matches!(LinkType::try_from("show"), Ok(LinkType::Show)));
}

#[test]
fn unknown_string_is_a_configuration_error() {
    let err = LinkType::try_from("delete").unwrap_err();
    assert_eq!(err, LinkTypeError::Unknown("delete".to_owned()));
    assert!(err.to_string().contains("delete"));
}
