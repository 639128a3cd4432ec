use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorType {
    Exact,
    IsNot,
    Icontains,
    NotIcontains,
    Regex,
    NotRegex,
    Gt,
    Lt,
    Gte,
    Lte,
    IsSet,
    IsNotSet,
    IsDateExact,
    IsDateAfter,
    IsDateBefore,
    In,
    NotIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyFilterType {
    Event,
    Person,
    Element,
    Session,
    Cohort,
    Group,
    Hogql,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropertyFilter {
    pub key: String,
    // not guaranteed to have a value, if say created via api
    pub value: Option<Value>,
    pub operator: Option<OperatorType>,
    #[serde(rename = "type")]
    pub prop_type: PropertyFilterType,
}

pub fn to_string_representation(value: &Value) -> String {
    if value.is_string() {
        return value
            .as_str()
            .expect("string slice should always exist for string value")
            .to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_deserializes_from_stored_json() {
        let filter: PropertyFilter = serde_json::from_value(json!({
            "key": "$survey_response",
            "value": "yes",
            "operator": "icontains",
            "type": "event",
        }))
        .expect("filter should deserialize");

        assert_eq!(filter.key, "$survey_response");
        assert_eq!(filter.operator, Some(OperatorType::Icontains));
        assert_eq!(filter.prop_type, PropertyFilterType::Event);
    }

    #[test]
    fn test_operator_is_optional() {
        let filter: PropertyFilter = serde_json::from_value(json!({
            "key": "$survey_response",
            "value": ["a", "b"],
            "type": "event",
        }))
        .expect("filter should deserialize");

        assert_eq!(filter.operator, None);
        assert_eq!(filter.value, Some(json!(["a", "b"])));
    }

    #[test]
    fn test_string_representation_of_values() {
        assert_eq!(to_string_representation(&json!("yes")), "yes");
        assert_eq!(to_string_representation(&json!(5)), "5");
        assert_eq!(to_string_representation(&json!(true)), "true");
    }
}
