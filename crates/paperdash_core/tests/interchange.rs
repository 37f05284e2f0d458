use paperdash_core::interchange::CSV_HEADERS;
use paperdash_core::{
    export_csv, export_json, import_csv, import_json, InterchangeError, PaperRecord, Priority,
    ProjectRecord,
};

const DATA_FILE: &str = r#"{
  "projects": [
    {
      "name": "Graph Learning",
      "papers": [
        {
          "title": "Message Passing at Scale",
          "status": "Under Review",
          "priority": "High",
          "start": "2026-01-01",
          "end": "2026-03-01",
          "deadline": "2026-02-15",
          "progress": 70,
          "submissions": [
            { "journal": "JMLR", "submitted": "2026-02-01", "decision": "Under Review" }
          ]
        },
        { "title": "Untimed idea", "progress": "n/a", "submissions": null }
      ]
    },
    { "name": "Empty Project" }
  ]
}"#;

#[test]
fn json_import_reads_data_file_with_defaults() {
    let projects = import_json(DATA_FILE).unwrap();

    assert_eq!(projects.len(), 2);
    let papers = &projects[0].papers;
    assert_eq!(papers[0].priority, Priority::High);
    assert_eq!(papers[0].submissions[0].journal, "JMLR");
    assert_eq!(papers[1].progress, 0);
    assert_eq!(papers[1].priority, Priority::Low);
    assert_eq!(papers[1].status, "");
    assert!(projects[1].papers.is_empty());
}

#[test]
fn json_import_accepts_bare_arrays_and_rejects_other_shapes() {
    let projects = import_json(r#"[{ "name": "Solo", "papers": [] }, 42]"#).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Solo");

    assert!(matches!(
        import_json(r#"{ "items": [] }"#),
        Err(InterchangeError::UnexpectedShape(_))
    ));
    assert!(matches!(import_json("{ nope"), Err(InterchangeError::Json(_))));
}

#[test]
fn json_export_round_trips_including_ids() {
    let projects = import_json(DATA_FILE).unwrap();
    let exported = export_json(&projects).unwrap();
    assert!(exported.starts_with("{\n  \"projects\""));

    let reimported = import_json(&exported).unwrap();
    assert_eq!(reimported, projects);
}

#[test]
fn csv_export_writes_one_row_per_paper() {
    let projects = import_json(DATA_FILE).unwrap();
    let mut buffer = Vec::new();
    export_csv(&projects, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], CSV_HEADERS.join(","));
    assert_eq!(
        lines[1],
        "Graph Learning,Message Passing at Scale,Under Review,High,2026-01-01,2026-03-01,2026-02-15,70"
    );
    assert_eq!(lines[2], "Graph Learning,Untimed idea,,Low,,,,0");
    assert_eq!(lines[3], "Empty Project,,,,,,,");
    assert_eq!(lines.len(), 4);
}

#[test]
fn csv_round_trip_keeps_projects_and_paper_fields() {
    let projects = import_json(DATA_FILE).unwrap();
    let mut buffer = Vec::new();
    export_csv(&projects, &mut buffer).unwrap();

    let reimported = import_csv(buffer.as_slice()).unwrap();
    assert_eq!(reimported.len(), 2);
    assert_eq!(reimported[0].name, "Graph Learning");
    assert_eq!(reimported[1].name, "Empty Project");
    assert!(reimported[1].papers.is_empty());

    let original = &projects[0].papers[0];
    let restored = &reimported[0].papers[0];
    assert_eq!(restored.title, original.title);
    assert_eq!(restored.priority, original.priority);
    assert_eq!(restored.start, original.start);
    assert_eq!(restored.deadline, original.deadline);
    assert_eq!(restored.progress, original.progress);
    assert!(restored.submissions.is_empty());
}

#[test]
fn csv_import_groups_reordered_columns_and_skips_blank_projects() {
    let sheet = "\
Title,Project,Progress,Priority
 Paper A , Vision ,55%,medium
Paper B,vision,abc,
Orphan,,10,high
Paper C,NLP,120,HIGH
";
    let projects = import_csv(sheet.as_bytes()).unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Vision");
    assert_eq!(
        projects[0].papers,
        vec![
            PaperRecord {
                progress: 55,
                priority: Priority::Medium,
                ..PaperRecord::new("Paper A")
            },
            PaperRecord::new("Paper B"),
        ]
    );
    assert_eq!(projects[1].papers[0].progress, 100);
    assert_eq!(projects[1].papers[0].priority, Priority::High);
}

#[test]
fn csv_import_requires_project_and_title_columns() {
    let err = import_csv("name,deadline\nX,2026-01-01\n".as_bytes()).unwrap_err();
    assert!(matches!(err, InterchangeError::MissingColumn("project")));
}

#[test]
fn exported_project_without_name_still_serializes() {
    let projects = vec![ProjectRecord::new("")];
    let mut buffer = Vec::new();
    export_csv(&projects, &mut buffer).unwrap();
    assert!(import_csv(buffer.as_slice()).unwrap().is_empty());
}
