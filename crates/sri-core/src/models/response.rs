use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One answered questionnaire item. A respondent changing an answer
/// overwrites the existing entry for that question id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub value: u8,
    pub timestamp: jiff::Timestamp,
}
