use paperdash_core::{
    import_json, PaperRecord, ProjectDraft, ProjectRecord, ProjectStore, StoreError,
};
use uuid::Uuid;

fn store_with(names: &[&str]) -> ProjectStore {
    names.iter().fold(ProjectStore::new(), |store, name| {
        store
            .create_project(ProjectDraft::named(*name))
            .unwrap()
            .store
    })
}

#[test]
fn create_trims_name_and_leaves_original_store_untouched() {
    let empty = ProjectStore::new();
    let update = empty.create_project(ProjectDraft::named("  Graph Learning ")).unwrap();

    assert!(empty.is_empty());
    assert_eq!(update.store.len(), 1);
    let created = update.store.get_project(update.value).unwrap();
    assert_eq!(created.name, "Graph Learning");
}

#[test]
fn create_rejects_blank_and_duplicate_names() {
    let store = store_with(&["Robotics"]);

    assert_eq!(
        store.create_project(ProjectDraft::named("   ")).unwrap_err(),
        StoreError::EmptyProjectName
    );
    assert_eq!(
        store.create_project(ProjectDraft::named("robotics")).unwrap_err(),
        StoreError::DuplicateProjectName("robotics".to_string())
    );
}

#[test]
fn create_rejects_untitled_papers() {
    let draft = ProjectDraft {
        name: "Vision".to_string(),
        papers: vec![PaperRecord::new(" ")],
    };
    assert_eq!(
        ProjectStore::new().create_project(draft).unwrap_err(),
        StoreError::EmptyPaperTitle
    );
}

#[test]
fn update_replaces_content_and_keeps_position() {
    let store = store_with(&["A", "B", "C"]);
    let target = store.projects()[1].id;

    let draft = ProjectDraft {
        name: "B prime".to_string(),
        papers: vec![PaperRecord::new("new paper")],
    };
    let next = store.update_project(target, draft).unwrap().store;

    assert_eq!(next.projects()[1].id, target);
    assert_eq!(next.projects()[1].name, "B prime");
    assert_eq!(next.projects()[1].papers.len(), 1);
    assert_eq!(store.projects()[1].name, "B");
}

#[test]
fn update_allows_same_name_but_not_another_projects_name() {
    let store = store_with(&["A", "B"]);
    let a = store.projects()[0].id;

    assert!(store.rename_project(a, "a").is_ok());
    assert_eq!(
        store.rename_project(a, "B").unwrap_err(),
        StoreError::DuplicateProjectName("B".to_string())
    );
}

#[test]
fn unknown_ids_are_reported() {
    let store = store_with(&["A"]);
    let missing = Uuid::new_v4();

    assert_eq!(
        store.delete_project(missing).unwrap_err(),
        StoreError::ProjectNotFound(missing)
    );
    assert_eq!(
        store.begin_edit(missing).unwrap_err(),
        StoreError::ProjectNotFound(missing)
    );
    assert_eq!(
        store
            .update_project(missing, ProjectDraft::named("X"))
            .unwrap_err(),
        StoreError::ProjectNotFound(missing)
    );
}

#[test]
fn editing_marker_follows_begin_cancel_update_and_delete() {
    let store = store_with(&["A", "B"]);
    let a = store.projects()[0].id;

    let editing = store.begin_edit(a).unwrap().store;
    assert_eq!(editing.editing(), Some(a));
    assert_eq!(editing.editing_project().unwrap().name, "A");
    assert_eq!(editing.cancel_edit().editing(), None);

    let renamed = editing.rename_project(a, "A2").unwrap().store;
    assert_eq!(renamed.editing(), None);

    let deleted = editing.delete_project(a).unwrap();
    assert_eq!(deleted.value.name, "A");
    assert_eq!(deleted.store.editing(), None);
    assert_eq!(deleted.store.len(), 1);
}

#[test]
fn papers_can_be_added_and_removed_by_index() {
    let store = store_with(&["A"]);
    let a = store.projects()[0].id;

    let first = store.add_paper(a, PaperRecord::new("one")).unwrap();
    assert_eq!(first.value, 0);
    let second = first.store.add_paper(a, PaperRecord::new("two")).unwrap();
    assert_eq!(second.value, 1);

    let removed = second.store.remove_paper(a, 0).unwrap();
    assert_eq!(removed.value.title, "one");
    assert_eq!(removed.store.get_project(a).unwrap().papers[0].title, "two");

    assert_eq!(
        removed.store.remove_paper(a, 5).unwrap_err(),
        StoreError::PaperNotFound { project: a, index: 5 }
    );
    assert_eq!(
        store.add_paper(a, PaperRecord::new("")).unwrap_err(),
        StoreError::EmptyPaperTitle
    );
}

#[test]
fn replace_all_validates_names_and_ids() {
    let store = ProjectStore::new();
    let shared = ProjectRecord::new("Shared");

    let mut clone = shared.clone();
    clone.name = "Other".to_string();
    assert_eq!(
        store.replace_all(vec![shared.clone(), clone]).unwrap_err(),
        StoreError::DuplicateProjectId(shared.id)
    );

    assert_eq!(
        store
            .replace_all(vec![ProjectRecord::new("X"), ProjectRecord::new(" x ")])
            .unwrap_err(),
        StoreError::DuplicateProjectName("x".to_string())
    );

    let imported = store
        .replace_all(vec![ProjectRecord::new(" Padded "), ProjectRecord::new("Plain")])
        .unwrap();
    assert_eq!(imported.value, 2);
    assert_eq!(imported.store.projects()[0].name, "Padded");
}

#[test]
fn rename_keeps_untitled_papers_from_lenient_import() {
    let imported =
        import_json(r#"{"projects":[{"name":"X","papers":[{"status":"Draft"}]}]}"#).unwrap();
    let store = ProjectStore::from_projects(imported).unwrap();
    let id = store.projects()[0].id;

    let renamed = store.rename_project(id, "Y").unwrap().store;
    let project = renamed.get_project(id).unwrap();
    assert_eq!(project.name, "Y");
    assert_eq!(project.papers.len(), 1);
    assert_eq!(project.papers[0].title, "");
    assert_eq!(project.papers[0].status, "Draft");

    let mut papers = project.papers.clone();
    papers.push(PaperRecord::new(""));
    let draft = ProjectDraft {
        name: "Y".to_string(),
        papers,
    };
    assert_eq!(
        renamed.update_project(id, draft).unwrap_err(),
        StoreError::EmptyPaperTitle
    );
}
