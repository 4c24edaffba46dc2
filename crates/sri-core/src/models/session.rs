use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::demographics::Demographics;
use crate::models::response::Response;
use crate::models::results::AssessmentResults;

/// Assessment granularity: quick (short forms) or full (long forms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentKind {
    Quick,
    Full,
}

/// One assessment run. Owned by the storage layer; the scorer only reads
/// `demographics`/`responses` and returns a results payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub kind: AssessmentKind,
    pub demographics: Demographics,
    pub responses: Vec<Response>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub results: Option<AssessmentResults>,
    pub start_time: jiff::Timestamp,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end_time: Option<jiff::Timestamp>,
    pub completed: bool,
}

impl AssessmentSession {
    /// Start a new session. Consent is checked here so a session without
    /// consent can never exist.
    pub fn begin(kind: AssessmentKind, demographics: Demographics) -> Result<Self, CoreError> {
        if !demographics.consent_to_participate {
            return Err(CoreError::MissingConsent);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            demographics,
            responses: Vec::new(),
            results: None,
            start_time: jiff::Timestamp::now(),
            end_time: None,
            completed: false,
        })
    }

    /// Record an answer. Re-answering a question overwrites the earlier
    /// entry; responses are never removed otherwise.
    pub fn record_response(&mut self, response: Response) {
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
    }

    /// Attach computed results and close the session.
    pub fn complete(&mut self, results: AssessmentResults) {
        self.results = Some(results);
        self.end_time = Some(jiff::Timestamp::now());
        self.completed = true;
    }
}
