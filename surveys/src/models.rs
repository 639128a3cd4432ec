use serde::{Deserialize, Serialize};

/// Event property holding the answer to a survey's first question. Subsequent
/// questions use the index-suffixed form `$survey_response_<n>`, and
/// id-addressed variants suffix the question id itself.
pub const SURVEY_RESPONSE_PROPERTY: &str = "$survey_response";

/// Index-based response property key: `$survey_response` for the first
/// question, `$survey_response_<n>` for the rest.
pub fn survey_response_key(question_index: usize) -> String {
    if question_index == 0 {
        SURVEY_RESPONSE_PROPERTY.to_string()
    } else {
        format!("{SURVEY_RESPONSE_PROPERTY}_{question_index}")
    }
}

/// Id-based response property key, stable across question reordering. The id
/// is suffixed verbatim: a question with id `q1` answers on
/// `$survey_response_q1`.
pub fn survey_question_response_key(question_id: &str) -> String {
    format!("{SURVEY_RESPONSE_PROPERTY}_{question_id}")
}

/// Resolves an index-based response key to its question index. The bare key
/// and `$survey_response_0` both denote the first question. Id-based keys and
/// unrelated properties resolve to `None`.
pub(crate) fn parse_response_key_index(key: &str) -> Option<usize> {
    if key == SURVEY_RESPONSE_PROPERTY {
        return Some(0);
    }
    key.strip_prefix(SURVEY_RESPONSE_PROPERTY)?
        .strip_prefix('_')?
        .parse::<usize>()
        .ok()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SurveyQuestion {
    pub id: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Survey {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub questions: Vec<SurveyQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<SurveyAppearance>,
}

/// Appearance settings as stored on the survey, camelCase in JSON. Only the
/// color-valued fields matter to sanitization; the rest pass through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAppearance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_button_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_button_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_button_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_button_active_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_label: Option<bool>,
}
