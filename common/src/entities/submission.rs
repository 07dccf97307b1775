use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidateEmail;

/// Collection name the original `FormData` model is stored under.
pub const SUBMISSIONS_COLLECTION: &str = "formdatas";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form as posted by the client. Fields are taken as loosely typed
/// JSON; any of them may be absent, null or of the wrong type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSubmission {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    #[display(fmt = "All fields are required")]
    MissingFields,
    #[display(fmt = "All fields must be text")]
    InvalidFieldType,
    #[display(fmt = "Invalid email format")]
    InvalidEmail,
}

/// JSON truthiness: null, false, 0 and "" count as not filled in.
fn is_present(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn into_text(field: Option<Value>) -> Result<String, ValidationError> {
    match field {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        _ => Err(ValidationError::InvalidFieldType),
    }
}

impl CreateSubmission {
    pub fn validate(self) -> Result<Submission, ValidationError> {
        if ![&self.name, &self.email, &self.message]
            .into_iter()
            .all(is_present)
        {
            return Err(ValidationError::MissingFields);
        }

        let name = into_text(self.name)?;
        let email = into_text(self.email)?;
        let message = into_text(self.message)?;

        if !email.validate_email() {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Submission {
            name,
            email,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> CreateSubmission {
        let text = |field: Option<&str>| field.map(|s| Value::String(s.to_string()));
        CreateSubmission {
            name: text(name),
            email: text(email),
            message: text(message),
        }
    }

    fn parse(body: Value) -> CreateSubmission {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_complete_form() {
        let submission = form(Some("Ada"), Some("ada@example.com"), Some("hello"))
            .validate()
            .unwrap();
        assert_eq!(
            submission,
            Submission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "hello".to_string(),
            }
        );
    }

    #[test]
    fn rejects_absent_or_empty_fields() {
        let cases = [
            form(None, Some("ada@example.com"), Some("hello")),
            form(Some("Ada"), None, Some("hello")),
            form(Some("Ada"), Some("ada@example.com"), None),
            form(Some(""), Some("ada@example.com"), Some("hello")),
            form(Some("Ada"), Some(""), Some("hello")),
            form(Some("Ada"), Some("ada@example.com"), Some("")),
            CreateSubmission::default(),
        ];
        for case in cases {
            assert_eq!(case.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            let case = parse(json!({"name": falsy, "email": "ada@example.com", "message": "hi"}));
            assert_eq!(case.validate(), Err(ValidationError::MissingFields), "{falsy}");
        }
    }

    #[test]
    fn truthy_scalars_are_stored_as_text() {
        let submission = parse(json!({"name": 42, "email": "ada@example.com", "message": true}))
            .validate()
            .unwrap();
        assert_eq!(submission.name, "42");
        assert_eq!(submission.message, "true");
    }

    #[test]
    fn rejects_structured_values() {
        let case = parse(json!({"name": {"first": "Ada"}, "email": "ada@example.com", "message": ["hi"]}));
        assert_eq!(case.validate(), Err(ValidationError::InvalidFieldType));
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let result = form(None, Some("not-an-email"), Some("hello")).validate();
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["not-an-email", "ada@", "@example.com", "ada example@example.com"] {
            let result = form(Some("Ada"), Some(email), Some("hello")).validate();
            assert_eq!(result, Err(ValidationError::InvalidEmail), "{email}");
        }
        let numeric = parse(json!({"name": "Ada", "email": 5, "message": "hello"}));
        assert_eq!(numeric.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let form = parse(json!({"name": null, "email": "ada@example.com"}));
        assert!(form.message.is_none());
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }
}
