use serde::{Deserialize, Serialize};

use super::schema::ResponseSchema;

/// Curriculum proposal returned by the strategy generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub title: String,
    pub overview: String,
    pub modules: Vec<PlanModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanModule {
    pub name: String,
    pub objectives: Vec<String>,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfia_level: Option<String>,
}

pub(crate) fn prompt(topic: &str, audience: &str, duration: &str) -> String {
    let duration = if duration.trim().is_empty() {
        "flexible, recommend one"
    } else {
        duration.trim()
    };
    format!(
        "Act as a Senior L&D Consultant working to the SFIA framework.\n\
         Design a structured training program for: \"{topic}\".\n\
         Target Audience: {audience}.\n\
         Desired Duration: {duration}.\n\n\
         Return a JSON object with a catchy title, a brief overview, and a list of modules.\n\
         Each module needs a name, 2-3 learning objectives, an estimated duration, and where \
         it applies, the SFIA responsibility level it targets."
    )
}

pub(crate) fn schema() -> ResponseSchema {
    ResponseSchema::object(vec![
        ("title", ResponseSchema::String),
        ("overview", ResponseSchema::String),
        (
            "modules",
            ResponseSchema::array_of(
                ResponseSchema::object(vec![
                    ("name", ResponseSchema::String),
                    (
                        "objectives",
                        ResponseSchema::array_of(ResponseSchema::String),
                    ),
                    ("duration", ResponseSchema::String),
                    ("sfiaLevel", ResponseSchema::String),
                ])
                .with_optional(&["sfiaLevel"]),
            ),
        ),
    ])
}
