//! Ranked substring search over entity titles and descriptions

use crate::graph::{Entity, EntityId, EntityKind, SkillLevel};
use serde::{Deserialize, Serialize};

/// Ancestor filters narrowing a search to a branch of the hierarchy.
///
/// A candidate is kept only when every provided id appears in its upward
/// ancestry (or is the candidate itself).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilters {
    pub industry: Option<String>,
    pub department: Option<String>,
    pub jobrole: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.industry.is_none() && self.department.is_none() && self.jobrole.is_none()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.industry
            .as_deref()
            .into_iter()
            .chain(self.department.as_deref())
            .chain(self.jobrole.as_deref())
    }
}

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: EntityId,
    pub kind: EntityKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    pub relevance_score: f64,
}

/// Score a single entity against a lowercased query.
///
/// A title-prefix match outranks a title substring match, which outranks a
/// description match. The empty query matches everything with score zero.
pub(crate) fn score_entity(entity: &Entity, query_lower: &str) -> Option<f64> {
    if query_lower.is_empty() {
        return Some(0.0);
    }

    let title = entity.title.to_lowercase();
    if title.starts_with(query_lower) {
        return Some(100.0);
    }
    if title.contains(query_lower) {
        return Some(60.0);
    }
    if let Some(description) = &entity.description {
        if description.to_lowercase().contains(query_lower) {
            return Some(30.0);
        }
    }
    None
}

pub(crate) fn hit_from(entity: &Entity, relevance_score: f64) -> SearchHit {
    SearchHit {
        id: entity.id.clone(),
        kind: entity.kind,
        title: entity.title.clone(),
        description: entity.description.clone(),
        category: entity.category.clone(),
        level: entity.level,
        relevance_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_outranks_substring_outranks_description() {
        let prefix = Entity::new("react-001", EntityKind::Skill, "React");
        let middle = Entity::new("preact-001", EntityKind::Skill, "Preact");
        let descr = Entity::new("vue-001", EntityKind::Skill, "Vue")
            .with_description("Often compared with React.");

        let p = score_entity(&prefix, "react").unwrap();
        let m = score_entity(&middle, "react").unwrap();
        let d = score_entity(&descr, "react").unwrap();
        assert!(p > m && m > d);
    }

    #[test]
    fn test_no_match() {
        let entity = Entity::new("css-001", EntityKind::Skill, "CSS");
        assert_eq!(score_entity(&entity, "rust"), None);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let entity = Entity::new("css-001", EntityKind::Skill, "CSS");
        assert_eq!(score_entity(&entity, ""), Some(0.0));
    }

    #[test]
    fn test_filters_ids() {
        let filters = SearchFilters {
            industry: Some("tech-001".into()),
            department: None,
            jobrole: Some("frontend-001".into()),
        };
        let ids: Vec<_> = filters.ids().collect();
        assert_eq!(ids, vec!["tech-001", "frontend-001"]);
        assert!(!filters.is_empty());
        assert!(SearchFilters::default().is_empty());
    }
}
