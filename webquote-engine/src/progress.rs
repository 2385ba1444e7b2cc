use serde::Serialize;
use webquote_catalog::{non_empty, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    Starting,
    MakingProgress,
    LookingGreat,
    AlmostThere,
}

impl ProgressStage {
    fn from_percent(percent: u8) -> Self {
        match percent {
            75.. => ProgressStage::AlmostThere,
            50.. => ProgressStage::LookingGreat,
            25.. => ProgressStage::MakingProgress,
            _ => ProgressStage::Starting,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ProgressStage::Starting => "Let's begin!",
            ProgressStage::MakingProgress => "Making progress...",
            ProgressStage::LookingGreat => "Looking great!",
            ProgressStage::AlmostThere => "Almost there!",
        }
    }
}

/// How far along the form is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub percent: u8,
    pub stage: ProgressStage,
}

/// Completion of the form, counting six required fields and five important
/// selections. Performance level sits in both groups and counts twice.
pub fn progress(selection: &Selection) -> Progress {
    let filled = |value: &Option<String>| usize::from(non_empty(value).is_some());
    let chosen = |values: &[String]| usize::from(!values.is_empty());

    let required = filled(&selection.client_name)
        + filled(&selection.company_name)
        + filled(&selection.project_title)
        + filled(&selection.email)
        + filled(&selection.project_type)
        + filled(&selection.performance_level);

    let selections = chosen(&selection.target_audience)
        + filled(&selection.website_type)
        + chosen(&selection.device_compatibility)
        + filled(&selection.performance_level)
        + filled(&selection.logo_design);

    const SLOTS: usize = 11;
    let completed = required + selections;
    // Rounded half up.
    let percent = ((completed * 200 + SLOTS) / (2 * SLOTS)) as u8;

    Progress {
        percent,
        stage: ProgressStage::from_percent(percent),
    }
}
