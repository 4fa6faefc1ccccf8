//! Read-side shapes: rows re-assembled with the leaves attached to them.

use serde::Serialize;

use super::{
    achievement, credential, education, hobby, image, open_source_contribution, portfolio,
    side_project, skill, volunteer_work, website, work_experience,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillView {
    #[serde(flatten)]
    pub skill: skill::Model,
    pub icon: Option<image::Model>,
}

/// Everything hanging off one owner row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachments {
    pub main_image: Option<image::Model>,
    pub logo: Option<image::Model>,
    pub additional_images: Vec<image::Model>,
    pub websites: Vec<website::Model>,
    pub skills: Vec<SkillView>,
    pub achievements: Vec<achievement::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView<M> {
    #[serde(flatten)]
    pub entry: M,
    #[serde(flatten)]
    pub attachments: Attachments,
}

/// The fully assembled portfolio graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    #[serde(flatten)]
    pub portfolio: portfolio::Model,
    pub main_image: Option<image::Model>,
    pub github: Option<website::Model>,
    pub linkedin: Option<website::Model>,
    pub websites: Vec<website::Model>,
    pub hobbies: Vec<EntryView<hobby::Model>>,
    pub skills: Vec<SkillView>,
    pub side_projects: Vec<EntryView<side_project::Model>>,
    pub work_experiences: Vec<EntryView<work_experience::Model>>,
    pub educations: Vec<EntryView<education::Model>>,
    pub credentials: Vec<EntryView<credential::Model>>,
    pub volunteer_works: Vec<EntryView<volunteer_work::Model>>,
    pub open_source_contributions: Vec<EntryView<open_source_contribution::Model>>,
    pub additional_images: Vec<image::Model>,
}
