mod request;
mod response;

pub use request::{PositionRequest, SelectRequest};
pub use response::{AttemptResponse, GradeResponse, HealthResponse, ProgressResponse, QuestView};
