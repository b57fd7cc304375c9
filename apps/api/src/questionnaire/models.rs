use serde::{Deserialize, Serialize};

/// Fixed category vocabulary for founder questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Market,
    UnitEconomics,
    Revenue,
    Competition,
    Strategy,
    Team,
    Product,
    Financials,
}

#[allow(dead_code)]
impl QuestionCategory {
    pub const ALL: [QuestionCategory; 8] = [
        QuestionCategory::Market,
        QuestionCategory::UnitEconomics,
        QuestionCategory::Revenue,
        QuestionCategory::Competition,
        QuestionCategory::Strategy,
        QuestionCategory::Team,
        QuestionCategory::Product,
        QuestionCategory::Financials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Market => "market",
            QuestionCategory::UnitEconomics => "unit_economics",
            QuestionCategory::Revenue => "revenue",
            QuestionCategory::Competition => "competition",
            QuestionCategory::Strategy => "strategy",
            QuestionCategory::Team => "team",
            QuestionCategory::Product => "product",
            QuestionCategory::Financials => "financials",
        }
    }
}

/// Answer format. Only free text is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: QuestionCategory,
    #[serde(rename = "type")]
    pub kind: QuestionType,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: QuestionCategory) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            kind: QuestionType::Text,
        }
    }
}

/// Questions used whenever the model's questionnaire cannot be parsed.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "q1",
            "What is your total addressable market (TAM)?",
            QuestionCategory::Market,
        ),
        Question::new(
            "q2",
            "What is your customer acquisition cost (CAC)?",
            QuestionCategory::UnitEconomics,
        ),
        Question::new(
            "q3",
            "What is your monthly recurring revenue (MRR)?",
            QuestionCategory::Revenue,
        ),
        Question::new(
            "q4",
            "Who are your main competitors?",
            QuestionCategory::Competition,
        ),
        Question::new(
            "q5",
            "What is your go-to-market strategy?",
            QuestionCategory::Strategy,
        ),
    ]
}
