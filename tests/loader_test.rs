//! Snapshot file loading, end to end through the engine

use skillgraph::algo::{PathOptions, PathOutcome};
use skillgraph::graph::EntityKind;
use skillgraph::loader::{self, LoadError};
use skillgraph::query::{QueryEngine, SearchFilters};
use std::io::Write;
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
    "industries": [
        {"id": "tech-001", "title": "Technology", "category": "Technology"}
    ],
    "departments": [
        {"id": "eng-001", "title": "Engineering", "industry_id": "tech-001"}
    ],
    "jobroles": [
        {"id": "frontend-001", "title": "Frontend Developer", "department_id": "eng-001"},
        {"id": "backend-001", "title": "Backend Developer", "department_id": "eng-001"}
    ],
    "skills": [
        {"id": "react-001", "title": "React", "level": "advanced",
         "description": "JavaScript library for building user interfaces."},
        {"id": "typescript-001", "title": "TypeScript", "level": "intermediate"},
        {"id": "sql-001", "title": "SQL", "level": "advanced"}
    ],
    "jobrole_skills": [
        {"jobrole_id": "frontend-001", "skill_id": "react-001"},
        {"jobrole_id": "backend-001", "skill_id": "sql-001"}
    ],
    "related_skills": [
        {"from": "react-001", "to": "typescript-001"}
    ]
}"#;

fn snapshot_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_snapshot_file_and_query() {
    let file = snapshot_file(SNAPSHOT);
    let store = loader::load_snapshot(file.path()).unwrap();

    assert_eq!(store.entity_count(), 7);
    assert_eq!(store.entities_of_kind(EntityKind::Skill).count(), 3);

    let engine = QueryEngine::new(store);

    let skills = engine.skills_of("frontend-001").unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].title, "React");

    // Front to back: react -> frontend -> eng -> backend -> sql
    let outcome = engine
        .shortest_path("react-001", "sql-001", &PathOptions::default(), None)
        .unwrap();
    match outcome {
        PathOutcome::Found(path) => assert_eq!(path.distance, 4),
        PathOutcome::NoPath => panic!("expected a path"),
    }

    let hits = engine.search("react", &SearchFilters::default());
    assert_eq!(hits[0].id.as_str(), "react-001");
}

#[test]
fn test_missing_file_is_io_error() {
    let result = loader::load_snapshot("/nonexistent/snapshot.json");
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn test_snapshot_with_dangling_link_fails() {
    let file = snapshot_file(
        r#"{
            "skills": [{"id": "react-001", "title": "React"}],
            "related_skills": [{"from": "react-001", "to": "ghost-001"}]
        }"#,
    );
    assert!(loader::load_snapshot(file.path()).is_err());
}
