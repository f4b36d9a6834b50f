use std::fmt;

/// Error raised while building or loading a [`Schema`](crate::schema::Schema).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The input is not a compiled schema.
    #[error("a valid schema is required to generate a mock: {0}")]
    NotASchema(String),

    /// A definition document could not be compiled.
    #[error("invalid definition at `{path}`: {reason}")]
    InvalidDefinition { path: String, reason: String },

    /// A validator key the compiler does not know.
    #[error("unknown validator `{validator}` on `{path}`")]
    UnknownValidator { path: String, validator: String },

    /// Failed to parse JSON text.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse YAML text.
    #[cfg(feature = "yaml")]
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failed to read a schema file.
    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    pub(crate) fn definition(path: &str, reason: impl Into<String>) -> Self {
        SchemaError::InvalidDefinition {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// A segment in a validation error path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum PathSegment {
    /// Document field name.
    Field(String),
    /// Array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Validation issue code, describing what went wrong.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum IssueCode {
    InvalidType { expected: String, received: String },
    MissingField,
    TooSmall { minimum: f64 },
    TooBig { maximum: f64 },
    InvalidEnumValue,
}

/// A single validation issue with path and message.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,
    pub path: Vec<PathSegment>,
}

impl ValidationIssue {
    /// Render the path as `.a.b[0].c`.
    pub fn path_string(&self) -> String {
        self.path.iter().map(ToString::to_string).collect()
    }
}

/// Collection of validation issues.
///
/// Issues are accumulated (not short-circuited), so every problem in a
/// document is reported at once.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Create an empty error container.
    pub fn new() -> Self {
        Self { issues: vec![] }
    }

    /// Create an error with a single issue.
    pub fn single(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                code,
                message: message.into(),
                path: vec![],
            }],
        }
    }

    /// Prepend a path segment to all issues (used for nested documents/arrays).
    pub fn with_prefix(mut self, segment: PathSegment) -> Self {
        for issue in &mut self.issues {
            issue.path.insert(0, segment.clone());
        }
        self
    }

    /// Merge another error's issues into this one.
    pub fn merge(mut self, other: ValidationError) -> Self {
        self.issues.extend(other.issues);
        self
    }

    /// Check if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Push a single issue.
    pub fn push(&mut self, code: IssueCode, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            code,
            message: message.into(),
            path: vec![],
        });
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let path = issue.path_string();
            if path.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{}: {}", path, issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
