use serde::{Deserialize, Serialize};

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Demographic details collected before the questionnaire starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u8,
    pub gender: Gender,
    pub location: String,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Returns the profile untouched when every field passes, or every
    /// failing field otherwise.
    pub fn validate(self) -> Result<Self, ProfileError> {
        let mut issues = Vec::new();

        if self.first_name.trim().chars().count() < 2 {
            issues.push(FieldIssue::new(
                "firstName",
                "First name must be at least 2 characters",
            ));
        }
        if self.last_name.trim().is_empty() {
            issues.push(FieldIssue::new("lastName", "Last name is required"));
        }
        if !is_plausible_email(&self.email) {
            issues.push(FieldIssue::new("email", "Invalid email address"));
        }
        if self.age < MIN_AGE {
            issues.push(FieldIssue::new("age", "Must be at least 18 years old"));
        } else if self.age > MAX_AGE {
            issues.push(FieldIssue::new("age", "Invalid age"));
        }
        if self.location.trim().chars().count() < 2 {
            issues.push(FieldIssue::new("location", "Please enter your location"));
        }

        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ProfileError::Invalid(issues))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldIssue {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile failed validation: {}", summarize(.0))]
    Invalid(Vec<FieldIssue>),
}

impl ProfileError {
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ProfileError::Invalid(issues) => issues,
        }
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} ({})", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
