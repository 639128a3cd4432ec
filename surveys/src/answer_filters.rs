use serde_json::Value;

use crate::models::{parse_response_key_index, survey_question_response_key, Survey};
use crate::properties::{to_string_representation, OperatorType, PropertyFilter, PropertyFilterType};

/// Escapes a string for embedding in a single-quoted HogQL literal.
/// Backslashes must be doubled before quotes are escaped, otherwise the
/// backslash inserted for the quote gets doubled too.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn quoted(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

fn property_access(key: &str) -> String {
    format!("properties['{}']", escape_sql_string(key))
}

/// Compiles answer filters into a HogQL predicate fragment for splicing into
/// a survey results query.
///
/// Each valid filter contributes one `AND (<raw> OR <aliased>)` clause, where
/// the raw side matches the index-based response property and the aliased side
/// matches the id-based `$survey_response_<id>` property of the question the
/// key resolves to. Clauses keep input order and are joined by single spaces;
/// when no filter survives the validity gate the result is the empty string,
/// so callers can always concatenate the fragment onto a base WHERE clause.
///
/// Filters are dropped, never rejected: missing or empty values, vacuous
/// `ILIKE` patterns, keys that do not resolve to a question, and operators
/// with no HogQL rendering all contribute nothing.
pub fn build_answer_filter_hogql(filters: &[PropertyFilter], survey: &Survey) -> String {
    filters
        .iter()
        .filter_map(|filter| compile_filter(filter, survey))
        .collect::<Vec<String>>()
        .join(" ")
}

fn compile_filter(filter: &PropertyFilter, survey: &Survey) -> Option<String> {
    if filter.prop_type != PropertyFilterType::Event {
        return None;
    }

    let value = filter.value.as_ref()?;
    if is_empty_value(value) {
        return None;
    }

    let operator = filter.operator.unwrap_or(OperatorType::Exact);
    if !matches!(
        operator,
        OperatorType::Exact
            | OperatorType::IsNot
            | OperatorType::Icontains
            | OperatorType::Regex
            | OperatorType::NotRegex
    ) {
        tracing::debug!(
            key = %filter.key,
            ?operator,
            "unsupported operator for survey answer filters, skipping"
        );
        return None;
    }

    // An ILIKE pattern of bare wildcards or whitespace matches everything,
    // which as a filter means nothing.
    if operator == OperatorType::Icontains && is_vacuous_pattern(&scalar_value(value)) {
        return None;
    }

    let index = parse_response_key_index(&filter.key)?;
    let question = match survey.questions.get(index) {
        Some(question) => question,
        None => {
            tracing::debug!(
                key = %filter.key,
                survey_id = %survey.id,
                "answer filter key does not resolve to a question, skipping"
            );
            return None;
        }
    };

    let raw = operator_expr(operator, &filter.key, value)?;
    let aliased = operator_expr(operator, &survey_question_response_key(&question.id), value)?;
    Some(format!("AND ({raw} OR {aliased})"))
}

fn operator_expr(operator: OperatorType, key: &str, value: &Value) -> Option<String> {
    let prop = property_access(key);
    match operator {
        OperatorType::Exact | OperatorType::IsNot => {
            if let Some(items) = value.as_array() {
                let list = items
                    .iter()
                    .map(|item| quoted(&to_string_representation(item)))
                    .collect::<Vec<String>>()
                    .join(", ");
                let set_op = if operator == OperatorType::Exact {
                    "IN"
                } else {
                    "NOT IN"
                };
                Some(format!("{prop} {set_op} ({list})"))
            } else {
                let cmp = if operator == OperatorType::Exact {
                    "="
                } else {
                    "!="
                };
                Some(format!("{prop} {cmp} {}", quoted(&to_string_representation(value))))
            }
        }
        OperatorType::Icontains => Some(format!(
            "{prop} ILIKE '%{}%'",
            escape_sql_string(&scalar_value(value))
        )),
        OperatorType::Regex => Some(format!("match({prop}, {})", quoted(&scalar_value(value)))),
        OperatorType::NotRegex => {
            Some(format!("NOT match({prop}, {})", quoted(&scalar_value(value))))
        }
        // no HogQL rendering; the whole clause is dropped
        _ => None,
    }
}

// Pattern-style operators take one pattern; a list value degrades to its
// first element.
fn scalar_value(value: &Value) -> String {
    match value.as_array() {
        Some(items) => items.first().map(to_string_representation).unwrap_or_default(),
        None => to_string_representation(value),
    }
}

fn is_vacuous_pattern(pattern: &str) -> bool {
    let trimmed = pattern.trim();
    trimmed.is_empty() || trimmed.chars().all(|c| c == '%')
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
