use doh_relay_domain::{Answer, AnswerRecord, Question};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Domain to resolve. Required, but optional here so its absence becomes
    /// a 400 with a `detail` body instead of a bare rejection.
    pub url: Option<String>,

    #[serde(default = "default_record_type", rename = "type")]
    pub record_type: String,
}

fn default_record_type() -> String {
    "A".to_string()
}

/// DNS-JSON style response body: status text plus the echoed question and
/// every answer record, in upstream order.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Question")]
    pub question: Vec<Question>,
    #[serde(rename = "Answer")]
    pub answer: Vec<AnswerRecord>,
}

impl From<Answer> for ResolveResponse {
    fn from(answer: Answer) -> Self {
        Self {
            status: answer.status,
            question: vec![answer.question],
            answer: answer.records,
        }
    }
}
