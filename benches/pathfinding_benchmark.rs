use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skillgraph::algo::{shortest_path, PathOptions};
use skillgraph::graph::{Entity, EntityKind, EntityStore, RelationKind, Relationship};
use skillgraph::index::RelationshipIndex;
use skillgraph::loader::demo::demo_store;
use skillgraph::query::{QueryEngine, SearchFilters};

/// A synthetic ontology: `industries` branches, each with departments,
/// job roles and skills, plus random lateral skill links so cross-branch
/// paths exist.
fn synthetic_store(industries: usize, lateral_links: usize) -> EntityStore {
    let mut store = EntityStore::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut skills = Vec::new();

    for i in 0..industries {
        let ind = format!("ind-{i}");
        store
            .upsert_entity(Entity::new(ind.as_str(), EntityKind::Industry, &ind))
            .unwrap();
        for d in 0..4 {
            let dep = format!("dep-{i}-{d}");
            store
                .upsert_entity(Entity::new(dep.as_str(), EntityKind::Department, &dep))
                .unwrap();
            store
                .upsert_edge(Relationship::new(ind.as_str(), dep.as_str(), RelationKind::Contains))
                .unwrap();
            for j in 0..4 {
                let role = format!("role-{i}-{d}-{j}");
                store
                    .upsert_entity(Entity::new(role.as_str(), EntityKind::JobRole, &role))
                    .unwrap();
                store
                    .upsert_edge(Relationship::new(dep.as_str(), role.as_str(), RelationKind::Contains))
                    .unwrap();
                for s in 0..4 {
                    let skill = format!("skill-{i}-{d}-{j}-{s}");
                    store
                        .upsert_entity(Entity::new(skill.as_str(), EntityKind::Skill, &skill))
                        .unwrap();
                    store
                        .upsert_edge(Relationship::new(role.as_str(), skill.as_str(), RelationKind::Requires))
                        .unwrap();
                    skills.push(skill);
                }
            }
        }
    }

    for _ in 0..lateral_links {
        let a = &skills[rng.gen_range(0..skills.len())];
        let b = &skills[rng.gen_range(0..skills.len())];
        if a != b {
            store
                .upsert_edge(Relationship::new(a.as_str(), b.as_str(), RelationKind::RelatesTo))
                .unwrap();
        }
    }
    store
}

fn bench_shortest_path(c: &mut Criterion) {
    let store = synthetic_store(10, 200);
    let index = RelationshipIndex::new();
    let options = PathOptions::default();

    // warm the index outside the measurement
    shortest_path(&store, &index, "ind-0", "skill-9-3-3-3", &options, None).unwrap();

    c.bench_function("shortest_path_cross_branch", |b| {
        b.iter(|| {
            shortest_path(
                &store,
                &index,
                black_box("ind-0"),
                black_box("skill-9-3-3-3"),
                &options,
                None,
            )
            .unwrap()
        })
    });

    c.bench_function("shortest_path_demo", |b| {
        let store = demo_store();
        let index = RelationshipIndex::new();
        b.iter(|| {
            shortest_path(
                &store,
                &index,
                black_box("react-001"),
                black_box("modeling-001"),
                &options,
                None,
            )
            .unwrap()
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let engine = QueryEngine::new(synthetic_store(10, 200));
    let filters = SearchFilters::default();

    c.bench_function("search_substring", |b| {
        b.iter(|| engine.search(black_box("skill-5"), &filters))
    });
}

criterion_group!(benches, bench_shortest_path, bench_search);
criterion_main!(benches);
