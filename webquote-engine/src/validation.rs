use webquote_catalog::{non_empty, Selection};
use webquote_core::CoreError;

/// Which export the selection is being checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredFields {
    /// On-screen summary and ledger export.
    Quotation,
    /// Document download. Does not insist on a performance level.
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in all required fields: {}", .missing.join(", "))]
pub struct ValidationFailure {
    pub missing: Vec<&'static str>,
}

impl From<ValidationFailure> for CoreError {
    fn from(err: ValidationFailure) -> Self {
        CoreError::ValidationError(err.to_string())
    }
}

/// Checks the fields an export cannot do without. Pricing never calls this.
pub fn validate(selection: &Selection, required: RequiredFields) -> Result<(), ValidationFailure> {
    let mut missing = Vec::new();

    let scalars: [(&'static str, &Option<String>); 5] = [
        ("clientName", &selection.client_name),
        ("companyName", &selection.company_name),
        ("projectTitle", &selection.project_title),
        ("email", &selection.email),
        ("projectType", &selection.project_type),
    ];
    for (field, value) in scalars {
        if non_empty(value).is_none() {
            missing.push(field);
        }
    }

    if selection.target_audience.is_empty() {
        missing.push("targetAudience");
    }
    if non_empty(&selection.website_type).is_none() {
        missing.push("websiteType");
    }
    if required == RequiredFields::Quotation && non_empty(&selection.performance_level).is_none() {
        missing.push("performanceLevel");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { missing })
    }
}
