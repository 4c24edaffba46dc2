pub mod demographics;
pub mod response;
pub mod results;
pub mod session;

pub use demographics::{
    ActivityBracket, AgeBracket, Demographics, Gender, RelationshipStatus, ReligiousBackground,
};
pub use response::Response;
pub use results::{AssessmentResults, DimensionScores, ScaleScore, SriLevel, SriResult};
pub use session::{AssessmentKind, AssessmentSession};
