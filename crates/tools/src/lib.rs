//! Domain tool implementations for SkillSphere.
//!
//! Each tool covers one step of the guidance journey: building the
//! profile, matching careers against it, expanding a match into a
//! curriculum, costing the curriculum, tracking progress, and finding
//! scholarships. Tools are pure over their inputs — none of them touch
//! the session store — so the dispatcher can pass exactly the session
//! fields a tool needs and merge the result back itself.

pub mod costs;
pub mod curriculum;
pub mod extract;
pub mod matcher;
pub mod profile_builder;
pub mod progress;
pub mod scholarships;

pub use costs::CostCalculator;
pub use curriculum::CurriculumGenerator;
pub use extract::KeywordSkillExtractor;
pub use matcher::SkillGapMatcher;
pub use profile_builder::ProfileBuilder;
pub use progress::{BadgeSpec, MarkOutcome, ProgressTracker};
pub use scholarships::ScholarshipFinder;
