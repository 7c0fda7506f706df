//! AI-assisted content generators: curriculum strategy, skill-gap analysis, and
//! needs-assessment surveys, all backed by an external completion service.

pub mod client;
pub mod router;
pub mod schema;
pub mod sequence;
pub mod service;
mod skill_gap;
pub mod strategy;
pub mod survey;

pub use client::{CompletionRequest, CompletionService, GeminiClient, GenerationFailure};
pub use router::{generator_router, GenerationResponse};
pub use schema::ResponseSchema;
pub use sequence::{FormState, GenerationTicket, RequestSequencer};
pub use service::Generators;
pub use strategy::{PlanModule, TrainingPlan};
pub use survey::{QuestionKind, SurveyPlan, SurveyQuestion, RESPONDENT_ROLES};
