//! Payload validation for person create/update.
//!
//! Pure functions over the payload and a snapshot of existing persons.
//! The uniqueness check reads a snapshot, so it is not atomic with the
//! insert that follows it.

use shared::{Person, PersonPayload};

use super::errors::PersonValidationError;

/// A payload that passed the required-field checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPerson {
    pub name: String,
    pub number: String,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Check that both name and number are present and non-empty.
/// Name is checked first.
pub fn validate(payload: &PersonPayload) -> Result<ValidPerson, PersonValidationError> {
    let name = non_empty(&payload.name).ok_or(PersonValidationError::MissingName)?;
    let number = non_empty(&payload.number).ok_or(PersonValidationError::MissingNumber)?;

    Ok(ValidPerson {
        name: name.to_string(),
        number: number.to_string(),
    })
}

/// Reject a name that is already used by an existing person (case-sensitive)
pub fn ensure_unique_name(name: &str, existing: &[Person]) -> Result<(), PersonValidationError> {
    if existing.iter().any(|person| person.name == name) {
        return Err(PersonValidationError::DuplicateName);
    }
    Ok(())
}

/// Full validation for create: required fields, then name uniqueness
pub fn validate_new(
    payload: &PersonPayload,
    existing: &[Person],
) -> Result<ValidPerson, PersonValidationError> {
    let valid = validate(payload)?;
    ensure_unique_name(&valid.name, existing)?;
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<Person> {
        vec![Person {
            id: "8b0f6a3e-6f0e-4b8a-9a55-2f1f0d6c1e11".to_string(),
            name: "Mary Poppendieck".to_string(),
            number: "39-23-6423122".to_string(),
        }]
    }

    #[test]
    fn test_missing_name() {
        let payload = PersonPayload {
            name: None,
            number: Some("123".to_string()),
        };
        assert_eq!(validate(&payload), Err(PersonValidationError::MissingName));

        let empty = PersonPayload::new("", "123");
        assert_eq!(validate(&empty), Err(PersonValidationError::MissingName));
    }

    #[test]
    fn test_missing_number() {
        let payload = PersonPayload {
            name: Some("New P".to_string()),
            number: None,
        };
        assert_eq!(validate(&payload), Err(PersonValidationError::MissingNumber));

        let empty = PersonPayload::new("New P", "");
        assert_eq!(validate(&empty), Err(PersonValidationError::MissingNumber));
    }

    #[test]
    fn test_name_checked_before_number() {
        assert_eq!(
            validate(&PersonPayload::default()),
            Err(PersonValidationError::MissingName)
        );
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let valid = validate(&PersonPayload::new(" ", " ")).unwrap();
        assert_eq!(valid.name, " ");
        assert_eq!(valid.number, " ");
    }

    #[test]
    fn test_duplicate_name_on_create() {
        let payload = PersonPayload::new("Mary Poppendieck", "1");
        assert_eq!(
            validate_new(&payload, &existing()),
            Err(PersonValidationError::DuplicateName)
        );
    }

    #[test]
    fn test_uniqueness_is_case_sensitive() {
        let payload = PersonPayload::new("mary poppendieck", "1");
        let valid = validate_new(&payload, &existing()).unwrap();
        assert_eq!(valid.name, "mary poppendieck");
    }

    #[test]
    fn test_missing_field_reported_before_duplicate() {
        let payload = PersonPayload {
            name: Some("Mary Poppendieck".to_string()),
            number: None,
        };
        assert_eq!(
            validate_new(&payload, &existing()),
            Err(PersonValidationError::MissingNumber)
        );
    }
}
