//! Built-in demo ontology
//!
//! A small but fully connected ontology used by the server when no
//! snapshot is supplied, and by tests and benches. The content mirrors the
//! product's fixture data: four industries down to skills, with lateral
//! skill associations so cross-branch paths exist.

use super::{build_store, EntityRecord, JobRoleSkill, RelatedSkills, Snapshot};
use crate::graph::EntityStore;

fn record(id: &str, title: &str, description: &str, category: &str) -> EntityRecord {
    EntityRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        level: None,
        created_at: None,
        updated_at: None,
        industry_id: None,
        department_id: None,
        jobrole_id: None,
    }
}

fn child(parent_field: &str, parent: &str, mut rec: EntityRecord) -> EntityRecord {
    match parent_field {
        "industry" => rec.industry_id = Some(parent.to_string()),
        "department" => rec.department_id = Some(parent.to_string()),
        _ => rec.jobrole_id = Some(parent.to_string()),
    }
    rec
}

fn skill(id: &str, title: &str, description: &str, category: &str, level: &str) -> EntityRecord {
    let mut rec = record(id, title, description, category);
    rec.level = Some(level.to_string());
    rec
}

/// The demo snapshot, as data.
pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        industries: vec![
            record("tech-001", "Technology", "Software, hardware and IT services.", "Technology"),
            record("finance-001", "Financial Services", "Banking, insurance and investment services.", "Finance"),
            record("healthcare-001", "Healthcare", "Medical services, research and patient care.", "Healthcare"),
            record("retail-001", "Retail & E-commerce", "Consumer goods, online and offline retail.", "Retail"),
        ],
        departments: vec![
            child("industry", "tech-001", record("eng-001", "Engineering", "Builds and maintains software products.", "Engineering")),
            child("industry", "tech-001", record("product-001", "Product Management", "Owns product strategy and roadmaps.", "Product")),
            child("industry", "tech-001", record("design-001", "Design", "Designs user experiences and interfaces.", "Design")),
            child("industry", "finance-001", record("investment-001", "Investment Banking", "Advises on capital raising and deals.", "Finance")),
            child("industry", "finance-001", record("risk-001", "Risk Management", "Identifies and mitigates financial risk.", "Finance")),
            child("industry", "healthcare-001", record("clinical-001", "Clinical Operations", "Runs day-to-day patient care.", "Clinical")),
            child("industry", "retail-001", record("marketing-001", "Marketing", "Plans campaigns and brand presence.", "Marketing")),
        ],
        jobroles: vec![
            child("department", "eng-001", record("frontend-001", "Frontend Developer", "Builds user-facing web applications.", "Engineering")),
            child("department", "eng-001", record("backend-001", "Backend Developer", "Builds server-side services and APIs.", "Engineering")),
            child("department", "eng-001", record("fullstack-001", "Full Stack Developer", "Works across frontend and backend.", "Engineering")),
            child("department", "product-001", record("pm-001", "Product Manager", "Defines product requirements and priorities.", "Product")),
            child("department", "design-001", record("ux-001", "UX Designer", "Researches and designs user journeys.", "Design")),
            child("department", "investment-001", record("analyst-001", "Investment Analyst", "Analyzes investments and builds models.", "Finance")),
            child("department", "clinical-001", record("nurse-001", "Registered Nurse", "Provides patient care and medical support.", "Clinical")),
            child("department", "marketing-001", record("digital-001", "Digital Marketing Manager", "Manages online marketing campaigns.", "Marketing")),
        ],
        work_functions: Vec::new(),
        skills: vec![
            skill("react-001", "React", "JavaScript library for building user interfaces.", "Frontend Framework", "advanced"),
            skill("typescript-001", "TypeScript", "Typed superset of JavaScript.", "Programming Language", "intermediate"),
            skill("css-001", "CSS", "Styling language for web applications.", "Styling", "advanced"),
            skill("nodejs-001", "Node.js", "JavaScript runtime for server-side development.", "Backend Framework", "advanced"),
            skill("python-001", "Python", "High-level programming language.", "Programming Language", "intermediate"),
            skill("sql-001", "SQL", "Database query language for data management.", "Database", "advanced"),
            skill("figma-001", "Figma", "Collaborative interface design tool.", "Design Tool", "advanced"),
            skill("analytics-001", "Data Analytics", "Interprets data to support decisions.", "Analytics", "intermediate"),
            skill("modeling-001", "Financial Modeling", "Builds valuation and forecasting models.", "Finance", "advanced"),
            skill("seo-001", "SEO", "Optimizes content for search engines.", "Marketing", "intermediate"),
        ],
        classifications: Vec::new(),
        jobrole_skills: vec![
            JobRoleSkill { jobrole_id: "frontend-001".into(), skill_id: "react-001".into() },
            JobRoleSkill { jobrole_id: "frontend-001".into(), skill_id: "typescript-001".into() },
            JobRoleSkill { jobrole_id: "frontend-001".into(), skill_id: "css-001".into() },
            JobRoleSkill { jobrole_id: "backend-001".into(), skill_id: "nodejs-001".into() },
            JobRoleSkill { jobrole_id: "backend-001".into(), skill_id: "python-001".into() },
            JobRoleSkill { jobrole_id: "backend-001".into(), skill_id: "sql-001".into() },
            JobRoleSkill { jobrole_id: "fullstack-001".into(), skill_id: "react-001".into() },
            JobRoleSkill { jobrole_id: "fullstack-001".into(), skill_id: "nodejs-001".into() },
            JobRoleSkill { jobrole_id: "fullstack-001".into(), skill_id: "sql-001".into() },
            JobRoleSkill { jobrole_id: "pm-001".into(), skill_id: "analytics-001".into() },
            JobRoleSkill { jobrole_id: "ux-001".into(), skill_id: "figma-001".into() },
            JobRoleSkill { jobrole_id: "analyst-001".into(), skill_id: "modeling-001".into() },
            JobRoleSkill { jobrole_id: "analyst-001".into(), skill_id: "analytics-001".into() },
            JobRoleSkill { jobrole_id: "digital-001".into(), skill_id: "seo-001".into() },
            JobRoleSkill { jobrole_id: "digital-001".into(), skill_id: "analytics-001".into() },
        ],
        related_skills: vec![
            RelatedSkills { from: "react-001".into(), to: "typescript-001".into() },
            RelatedSkills { from: "react-001".into(), to: "css-001".into() },
            RelatedSkills { from: "nodejs-001".into(), to: "typescript-001".into() },
            RelatedSkills { from: "python-001".into(), to: "analytics-001".into() },
            RelatedSkills { from: "sql-001".into(), to: "analytics-001".into() },
            RelatedSkills { from: "analytics-001".into(), to: "modeling-001".into() },
            RelatedSkills { from: "seo-001".into(), to: "analytics-001".into() },
        ],
    }
}

/// Build the demo ontology. Only used at the binary boundary and in tests;
/// the engine itself never substitutes demo data for real data.
pub fn demo_store() -> EntityStore {
    build_store(&demo_snapshot()).expect("demo ontology is internally consistent")
}
