//! Scholarship finder — financial-aid listings for a career transition.

use skillsphere_catalog::Catalog;
use skillsphere_core::scholarship::Scholarship;

/// Looks up scholarship listings in the catalog.
pub struct ScholarshipFinder;

impl ScholarshipFinder {
    /// Scholarships for the given career plus the general listings. With
    /// no chosen career, only the general listings apply.
    pub fn find(career_id: Option<&str>, catalog: &Catalog) -> Vec<Scholarship> {
        catalog.scholarships_for(career_id)
    }

    /// Static application guidance returned alongside every listing.
    pub fn application_tips() -> Vec<String> {
        [
            "Apply early and often",
            "Tailor your application to each scholarship",
            "Highlight your commitment to the career change",
            "Get letters of recommendation",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_specific_listings_include_general_ones() {
        let catalog = Catalog::builtin();
        let general = ScholarshipFinder::find(None, &catalog);
        let for_ds = ScholarshipFinder::find(Some("data-scientist"), &catalog);

        assert!(!general.is_empty());
        assert!(for_ds.len() > general.len());
        for s in &general {
            assert!(for_ds.iter().any(|x| x.name == s.name));
        }
    }

    #[test]
    fn unknown_career_still_gets_general_listings() {
        let catalog = Catalog::builtin();
        let listings = ScholarshipFinder::find(Some("underwater-basket-weaver"), &catalog);
        assert!(!listings.is_empty());
    }

    #[test]
    fn tips_are_nonempty() {
        assert!(!ScholarshipFinder::application_tips().is_empty());
    }
}
