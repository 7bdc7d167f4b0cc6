use coach_domain as domain;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Selection(#[from] domain::SelectionError),
    #[error(transparent)]
    Plan(#[from] domain::PlanError),
}

/// Rejected request value, naming the JSON field it was found in.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid value for {field}: \"{value}\"")]
    InvalidValue { field: String, value: String },
    #[error("value of {field} out of range: {value}")]
    OutOfRange { field: String, value: String },
    #[error("invalid date for {field}: \"{value}\"")]
    InvalidDate { field: String, value: String },
}

impl ValidationError {
    /// Prefixes the field with the path of the enclosing object.
    #[must_use]
    pub fn within(self, path: &str) -> Self {
        match self {
            ValidationError::InvalidValue { field, value } => ValidationError::InvalidValue {
                field: format!("{path}.{field}"),
                value,
            },
            ValidationError::OutOfRange { field, value } => ValidationError::OutOfRange {
                field: format!("{path}.{field}"),
                value,
            },
            ValidationError::InvalidDate { field, value } => ValidationError::InvalidDate {
                field: format!("{path}.{field}"),
                value,
            },
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidValue { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidDate { field, .. } => field,
        }
    }
}

/// Parses a wire name into its enum value.
pub(crate) fn parse<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses every element of a list field. Errors name the index of the offending element.
pub(crate) fn parse_all<T, C>(field: &str, values: &[String]) -> Result<C, ValidationError>
where
    T: std::str::FromStr,
    C: FromIterator<T>,
{
    values
        .iter()
        .enumerate()
        .map(|(i, value)| parse(&format!("{field}[{i}]"), value))
        .collect()
}
