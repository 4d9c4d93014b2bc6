//! Skill-gap matcher — scores candidate careers against a profile.
//!
//! Scoring is a weighted overlap: the weight sum of required skills the
//! user already holds, divided by the career's total weight. The result
//! order is total and reproducible — fit descending, market demand
//! descending, career id ascending.

use skillsphere_catalog::{Career, Catalog};
use skillsphere_core::error::ToolError;
use skillsphere_core::matching::CareerMatch;
use skillsphere_core::profile::Profile;
use std::collections::BTreeSet;
use tracing::debug;

/// Scores and ranks careers for a profile.
pub struct SkillGapMatcher {
    /// Maximum matches returned per call
    max_matches: usize,
}

impl SkillGapMatcher {
    pub fn new(max_matches: usize) -> Self {
        Self { max_matches }
    }

    /// Rank candidate careers for this profile, best fit first.
    ///
    /// When at least one career category matches a profile interest, only
    /// careers in matching categories are scored; otherwise every career
    /// is a candidate.
    pub fn match_careers(
        &self,
        profile: &Profile,
        catalog: &Catalog,
    ) -> Result<Vec<CareerMatch>, ToolError> {
        if catalog.careers().is_empty() {
            return Err(ToolError::NoCandidates {
                reason: "the career catalog is empty".into(),
            });
        }
        if !profile.is_scorable() {
            return Err(ToolError::NoCandidates {
                reason: "the profile has no skills or interests to score on".into(),
            });
        }

        let held = profile.all_skills();
        let candidates = Self::filter_by_interests(profile, catalog);

        let mut matches: Vec<CareerMatch> = candidates
            .iter()
            .map(|career| Self::score(career, &held))
            .collect();

        matches.sort_by(|a, b| {
            b.fit_score
                .total_cmp(&a.fit_score)
                .then_with(|| b.market.demand_score.total_cmp(&a.market.demand_score))
                .then_with(|| a.career_id.cmp(&b.career_id))
        });
        matches.truncate(self.max_matches);

        debug!(
            count = matches.len(),
            best = matches.first().map(|m| m.career_id.as_str()),
            "Ranked career matches"
        );
        Ok(matches)
    }

    /// Careers whose categories overlap the profile's interests, or every
    /// career when no category matches.
    fn filter_by_interests<'a>(profile: &Profile, catalog: &'a Catalog) -> Vec<&'a Career> {
        let matching: Vec<&Career> = catalog
            .careers()
            .iter()
            .filter(|c| c.categories.iter().any(|cat| profile.interests.contains(cat)))
            .collect();

        if matching.is_empty() {
            catalog.careers().iter().collect()
        } else {
            matching
        }
    }

    fn score(career: &Career, held: &BTreeSet<String>) -> CareerMatch {
        let total_weight = career.total_weight();
        let overlap_weight: f64 = career
            .required_skills
            .iter()
            .filter(|s| held.contains(*s))
            .map(|s| career.weight(s))
            .sum();

        let fit_score = if total_weight > 0.0 {
            (overlap_weight / total_weight).clamp(0.0, 1.0)
        } else {
            0.0
        };

        // Missing skills ordered most impactful first: weight descending,
        // then alphabetically for a stable tie-break.
        let mut missing: Vec<String> = career
            .required_skills
            .iter()
            .filter(|s| !held.contains(*s))
            .cloned()
            .collect();
        missing.sort_by(|a, b| {
            career
                .weight(b)
                .total_cmp(&career.weight(a))
                .then_with(|| a.cmp(b))
        });

        CareerMatch {
            career_id: career.id.clone(),
            title: career.title.clone(),
            fit_score,
            missing_skills: missing,
            market: career.market,
        }
    }
}

impl Default for SkillGapMatcher {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsphere_core::profile::ProfileFields;

    fn profile_with(skills: &[&str], interests: &[&str]) -> Profile {
        let mut profile = Profile::default();
        profile.merge(ProfileFields {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        });
        profile
    }

    #[test]
    fn frontend_scenario_matches_reference_numbers() {
        // Profile {html, css} against frontend-developer requiring
        // {html:1, css:1, javascript:3, react:2} — fit 2/7, gaps ordered
        // javascript (weight 3) then react (weight 2).
        let catalog = Catalog::builtin();
        let profile = profile_with(&["html", "css"], &[]);

        let matches = SkillGapMatcher::new(10)
            .match_careers(&profile, &catalog)
            .unwrap();
        let frontend = matches
            .iter()
            .find(|m| m.career_id == "frontend-developer")
            .unwrap();

        assert!((frontend.fit_score - 2.0 / 7.0).abs() < 1e-9);
        assert_eq!(frontend.missing_skills, vec!["javascript", "react"]);
    }

    #[test]
    fn results_sorted_non_increasing_and_bounded() {
        let catalog = Catalog::builtin();
        let profile = profile_with(&["python", "sql", "statistics"], &[]);

        let matches = SkillGapMatcher::new(10)
            .match_careers(&profile, &catalog)
            .unwrap();

        for m in &matches {
            assert!((0.0..=1.0).contains(&m.fit_score));
        }
        for pair in matches.windows(2) {
            assert!(pair[0].fit_score >= pair[1].fit_score);
        }
    }

    #[test]
    fn k_limits_result_count() {
        let catalog = Catalog::builtin();
        let profile = profile_with(&["python"], &[]);

        let matches = SkillGapMatcher::new(2)
            .match_careers(&profile, &catalog)
            .unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn interests_prefilter_restricts_candidates() {
        let catalog = Catalog::builtin();
        let profile = profile_with(&[], &["marketing"]);

        let matches = SkillGapMatcher::new(10)
            .match_careers(&profile, &catalog)
            .unwrap();
        assert!(matches.iter().all(|m| m.career_id == "digital-marketer"));
    }

    #[test]
    fn unknown_interest_scores_all_careers() {
        let catalog = Catalog::builtin();
        let profile = profile_with(&[], &["astrology"]);

        let matches = SkillGapMatcher::new(100)
            .match_careers(&profile, &catalog)
            .unwrap();
        assert_eq!(matches.len(), catalog.careers().len());
    }

    #[test]
    fn empty_profile_is_no_candidates() {
        let catalog = Catalog::builtin();
        let err = SkillGapMatcher::default()
            .match_careers(&Profile::default(), &catalog)
            .unwrap_err();
        assert!(matches!(err, ToolError::NoCandidates { .. }));
    }

    #[test]
    fn empty_catalog_is_no_candidates() {
        let catalog = Catalog::from_toml_str("").unwrap();
        let profile = profile_with(&["python"], &[]);
        let err = SkillGapMatcher::default()
            .match_careers(&profile, &catalog)
            .unwrap_err();
        assert!(matches!(err, ToolError::NoCandidates { .. }));
    }

    #[test]
    fn resume_skills_count_toward_fit() {
        let catalog = Catalog::builtin();
        let profile = profile_with(&["html", "css"], &[]);
        let with_resume = {
            let mut p = profile.clone();
            p.merge(ProfileFields {
                resume_skills: vec!["javascript".into()],
                ..Default::default()
            });
            p
        };

        let matcher = SkillGapMatcher::new(10);
        let base = matcher.match_careers(&profile, &catalog).unwrap();
        let boosted = matcher.match_careers(&with_resume, &catalog).unwrap();

        let fit = |ms: &[CareerMatch]| {
            ms.iter()
                .find(|m| m.career_id == "frontend-developer")
                .unwrap()
                .fit_score
        };
        assert!(fit(&boosted) > fit(&base));
    }

    #[test]
    fn ties_break_by_demand_then_id() {
        let toml = r#"
[[careers]]
id = "b-career"
title = "B"
required_skills = ["x"]
[careers.market]
median_salary = 1.0
demand_score = 0.5
job_posting_frequency = 1.0

[[careers]]
id = "a-career"
title = "A"
required_skills = ["x"]
[careers.market]
median_salary = 1.0
demand_score = 0.5
job_posting_frequency = 1.0

[[careers]]
id = "c-career"
title = "C"
required_skills = ["x"]
[careers.market]
median_salary = 1.0
demand_score = 0.9
job_posting_frequency = 1.0
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        let profile = profile_with(&["y"], &["anything"]);

        let matches = SkillGapMatcher::new(10)
            .match_careers(&profile, &catalog)
            .unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.career_id.as_str()).collect();
        // All fit 0.0: demand sorts c-career first, then id ascending.
        assert_eq!(ids, vec!["c-career", "a-career", "b-career"]);
    }
}
