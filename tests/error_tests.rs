use parkpulse::errors::AppError;
use serde_json::Value;

#[test]
fn test_json_errors_convert_into_app_error() {
    fn parse(raw: &str) -> Result<Value, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    let err = parse("{").unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.to_string().starts_with("JSON serialization error"));
}

#[test]
fn test_yaml_errors_convert_into_app_error() {
    fn parse(raw: &str) -> Result<Value, AppError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    assert!(matches!(parse("a: [1"), Err(AppError::ConfigParse(_))));
}
