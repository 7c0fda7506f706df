use serde::{Deserialize, Serialize};

use super::schema::ResponseSchema;

/// Respondent groups offered by the needs-assessment form.
pub const RESPONDENT_ROLES: [&str; 4] = [
    "Subsidiary Training Managers",
    "Department Heads",
    "End Learners / Employees",
    "HR Directors",
];

pub const DEFAULT_RESPONDENT_ROLE: &str = RESPONDENT_ROLES[0];

/// Diagnostic questionnaire returned by the survey generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPlan {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<SurveyQuestion>,
}

impl SurveyPlan {
    /// One line per question, `question (type)`, for pasting into another tool.
    pub fn clipboard_text(&self) -> String {
        self.questions
            .iter()
            .map(|question| format!("{} ({})", question.question, question.kind.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Five-point agreement scale.
    Scale,
    Text,
    Choice,
}

impl QuestionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Scale => "scale",
            QuestionKind::Text => "text",
            QuestionKind::Choice => "choice",
        }
    }
}

pub(crate) fn prompt(focus_area: &str, respondent_role: &str, intent: &str) -> String {
    format!(
        "Act as an organizational diagnostics specialist for a multi-subsidiary corporate group.\n\
         Draft a training needs assessment questionnaire.\n\
         Focus Area: {focus_area}\n\
         Respondents: {respondent_role}\n\
         Strategic Intent: {intent}\n\n\
         Return a JSON object with a title, a one-paragraph description for respondents, and \
         6-8 questions. Each question has the question text, a type of \"scale\" (1-5 \
         agreement), \"text\" (open answer) or \"choice\" (with 3-5 options), and a short \
         rationale explaining what the answer reveals."
    )
}

pub(crate) fn schema() -> ResponseSchema {
    ResponseSchema::object(vec![
        ("title", ResponseSchema::String),
        ("description", ResponseSchema::String),
        (
            "questions",
            ResponseSchema::array_of(
                ResponseSchema::object(vec![
                    ("question", ResponseSchema::String),
                    (
                        "type",
                        ResponseSchema::Enum(vec!["scale", "text", "choice"]),
                    ),
                    ("options", ResponseSchema::array_of(ResponseSchema::String)),
                    ("rationale", ResponseSchema::String),
                ])
                .with_optional(&["options"]),
            ),
        ),
    ])
}
