pub mod assessment;
pub mod consultation;
pub mod patient;
pub mod questionnaire;
