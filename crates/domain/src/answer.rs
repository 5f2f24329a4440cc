use crate::dns_record::RecordType;
use serde::Serialize;

/// The question echoed back in a gateway response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.as_str().to_string(),
        }
    }
}

/// One resource record from the answer section, rendered as text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub data: String,
}

/// A decoded DNS response: status text, the original question and every
/// answer-section record in the order the upstream returned them.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub status: String,
    pub question: Question,
    pub records: Vec<AnswerRecord>,
}
