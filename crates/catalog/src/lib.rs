//! Reference data provider for the SkillSphere pipeline.
//!
//! Loads the career/skill/course/scholarship catalog from TOML and
//! serves it read-only for the lifetime of the process. A built-in
//! catalog is embedded for the default deployment; `Catalog::load`
//! replaces it wholesale.
//!
//! All data problems are caught at load time — in particular a cycle in
//! a prerequisite graph, which would otherwise corrupt curriculum
//! generation, is rejected here.

pub mod model;

pub use model::{Career, Course, ScholarshipEntry, SkillInfo};

use serde::Deserialize;
use skillsphere_core::Scholarship;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

/// The built-in catalog TOML, compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Errors raised while loading or validating reference data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {reason}")]
    ReadError { path: String, reason: String },

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Duplicate career id '{0}'")]
    DuplicateCareer(String),

    #[error("Career '{career}' references unknown skill '{skill}' in {field}")]
    UnknownSkillRef {
        career: String,
        skill: String,
        field: &'static str,
    },

    #[error("Prerequisite cycle in career '{career}' involving skill '{skill}'")]
    CyclicPrerequisites { career: String, skill: String },
}

/// The loaded, validated reference catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: Vec<Career>,
    skills: BTreeMap<String, SkillInfo>,
    courses: Vec<Course>,
    scholarships: Vec<ScholarshipEntry>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    careers: Vec<Career>,

    #[serde(default)]
    skills: BTreeMap<String, SkillInfo>,

    #[serde(default)]
    courses: Vec<Course>,

    #[serde(default)]
    scholarships: Vec<ScholarshipEntry>,
}

impl Catalog {
    /// The catalog embedded in the binary.
    ///
    /// The embedded TOML is validated by tests; failure to parse it is a
    /// build defect, not a runtime condition.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATALOG).expect("embedded catalog is valid")
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            careers = catalog.careers.len(),
            courses = catalog.courses.len(),
            "Loaded reference catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;
        let catalog = Self {
            careers: raw.careers,
            skills: raw.skills,
            courses: raw.courses,
            scholarships: raw.scholarships,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for career in &self.careers {
            if !seen.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateCareer(career.id.clone()));
            }

            let required: BTreeSet<&str> =
                career.required_skills.iter().map(|s| s.as_str()).collect();

            for skill in career.weights.keys() {
                if !required.contains(skill.as_str()) {
                    return Err(CatalogError::UnknownSkillRef {
                        career: career.id.clone(),
                        skill: skill.clone(),
                        field: "weights",
                    });
                }
            }
            for skill in career.prerequisites.keys() {
                if !required.contains(skill.as_str()) {
                    return Err(CatalogError::UnknownSkillRef {
                        career: career.id.clone(),
                        skill: skill.clone(),
                        field: "prerequisites",
                    });
                }
            }

            Self::check_acyclic(career)?;
        }
        Ok(())
    }

    /// Depth-first cycle check over a career's prerequisite graph.
    fn check_acyclic(career: &Career) -> Result<(), CatalogError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        fn visit(
            skill: &str,
            graph: &BTreeMap<String, Vec<String>>,
            marks: &mut BTreeMap<String, Mark>,
            career_id: &str,
        ) -> Result<(), CatalogError> {
            match marks.get(skill) {
                Some(Mark::Done) => return Ok(()),
                Some(Mark::Visiting) => {
                    return Err(CatalogError::CyclicPrerequisites {
                        career: career_id.to_string(),
                        skill: skill.to_string(),
                    });
                }
                None => {}
            }
            marks.insert(skill.to_string(), Mark::Visiting);
            if let Some(prereqs) = graph.get(skill) {
                for p in prereqs {
                    visit(p, graph, marks, career_id)?;
                }
            }
            marks.insert(skill.to_string(), Mark::Done);
            Ok(())
        }

        let mut marks = BTreeMap::new();
        for skill in &career.required_skills {
            visit(skill, &career.prerequisites, &mut marks, &career.id)?;
        }
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// All careers, in catalog order.
    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    /// Look up a career by id.
    pub fn career(&self, id: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Courses teaching a skill, best first: rating descending, then price
    /// ascending, then title for a total order.
    pub fn courses_for(&self, skill: &str) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.iter().filter(|c| c.skill == skill).collect();
        courses.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.price.total_cmp(&b.price))
                .then_with(|| a.title.cmp(&b.title))
        });
        courses
    }

    /// Hour estimate for a skill, if the catalog carries one.
    pub fn estimated_hours(&self, skill: &str) -> Option<f64> {
        self.skills.get(skill).and_then(|s| s.estimated_hours)
    }

    /// Extraction dictionary: every alias and canonical tag, mapped to its
    /// canonical skill tag. Keys are normalized (lower-case).
    pub fn skill_dictionary(&self) -> BTreeMap<String, String> {
        let mut dict = BTreeMap::new();
        for (tag, info) in &self.skills {
            dict.insert(tag.clone(), tag.clone());
            for alias in &info.aliases {
                dict.insert(alias.to_lowercase(), tag.clone());
            }
        }
        // Required skills without a [skills] entry still belong in the
        // dictionary.
        for career in &self.careers {
            for skill in &career.required_skills {
                dict.entry(skill.clone()).or_insert_with(|| skill.clone());
            }
        }
        dict
    }

    /// All interest categories declared across careers.
    pub fn categories(&self) -> BTreeSet<String> {
        self.careers
            .iter()
            .flat_map(|c| c.categories.iter().cloned())
            .collect()
    }

    /// Scholarships applicable to a career, plus the general listings.
    /// With no career, only the general listings are returned.
    pub fn scholarships_for(&self, career_id: Option<&str>) -> Vec<Scholarship> {
        self.scholarships
            .iter()
            .filter(|entry| {
                entry.careers.is_empty()
                    || career_id.is_some_and(|id| entry.careers.iter().any(|c| c == id))
            })
            .map(|entry| entry.scholarship.clone())
            .collect()
    }
}
