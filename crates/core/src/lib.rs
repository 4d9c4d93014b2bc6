//! # SkillSphere Core
//!
//! Domain types, traits, and error definitions for the SkillSphere career
//! guidance pipeline. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator seam is defined as a trait here. Implementations live
//! in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod finance;
pub mod market;
pub mod matching;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod scholarship;
pub mod session;
pub mod turn;

// Re-export key types at crate root for ergonomics
pub use error::{DispatchError, Error, ExtractorError, Result, ToolError};
pub use finance::FinancialSummary;
pub use market::MarketData;
pub use matching::CareerMatch;
pub use plan::{CourseRef, LearningPlan, Milestone, Phase};
pub use profile::{Profile, ProfileFields, SkillExtractor, normalize_term};
pub use progress::{Badge, ProgressState};
pub use scholarship::Scholarship;
pub use session::{Session, SessionId, TurnRecord};
pub use turn::{Intent, ResultData, Status, StructuredResult, SuggestionStrategy};
