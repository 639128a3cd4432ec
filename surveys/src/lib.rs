pub mod answer_filters;
pub mod colors;
pub mod models;
pub mod nps;
pub mod properties;

pub use answer_filters::{build_answer_filter_hogql, escape_sql_string};
pub use colors::{
    sanitize_color, sanitize_survey_appearance, validate_color, validate_survey_appearance,
    AppearanceError,
};
pub use models::{
    survey_question_response_key, survey_response_key, Survey, SurveyAppearance, SurveyQuestion,
    SURVEY_RESPONSE_PROPERTY,
};
pub use nps::{calculate_nps_breakdown, calculate_nps_score, NpsBreakdown, SurveyRatingResults};
pub use properties::{OperatorType, PropertyFilter, PropertyFilterType};
