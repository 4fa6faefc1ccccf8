pub mod achievement;
pub mod achievement_link;
pub mod blog_post;
pub mod credential;
pub mod education;
pub mod hobby;
pub mod image;
pub mod image_link;
pub mod open_source_contribution;
pub mod portfolio;
pub mod portfolio_link;
pub mod side_project;
pub mod skill;
pub mod skill_link;
pub mod views;
pub mod volunteer_work;
pub mod website;
pub mod website_link;
pub mod work_experience;

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Every kind of row that can own images, websites, skills or achievements,
/// and every kind of entry a portfolio links to. Stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    #[sea_orm(string_value = "portfolio")]
    Portfolio,
    #[sea_orm(string_value = "education")]
    Education,
    #[sea_orm(string_value = "work_experience")]
    WorkExperience,
    #[sea_orm(string_value = "credential")]
    Credential,
    #[sea_orm(string_value = "volunteer_work")]
    VolunteerWork,
    #[sea_orm(string_value = "open_source_contribution")]
    OpenSourceContribution,
    #[sea_orm(string_value = "side_project")]
    SideProject,
    #[sea_orm(string_value = "hobby")]
    Hobby,
    #[sea_orm(string_value = "skill")]
    Skill,
    #[sea_orm(string_value = "blog_post")]
    BlogPost,
}

impl OwnerKind {
    /// The URL segment used for this kind, e.g. `work-experience`.
    pub fn path_segment(self) -> &'static str {
        match self {
            OwnerKind::Portfolio => "portfolio",
            OwnerKind::Education => "education",
            OwnerKind::WorkExperience => "work-experience",
            OwnerKind::Credential => "credential",
            OwnerKind::VolunteerWork => "volunteer-work",
            OwnerKind::OpenSourceContribution => "open-source-contribution",
            OwnerKind::SideProject => "sideproject",
            OwnerKind::Hobby => "hobby",
            OwnerKind::Skill => "skill",
            OwnerKind::BlogPost => "blogpost",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.path_segment() == segment)
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            OwnerKind::Portfolio => "Portfolio",
            OwnerKind::Education => "Education",
            OwnerKind::WorkExperience => "Work experience",
            OwnerKind::Credential => "Credential",
            OwnerKind::VolunteerWork => "Volunteer work",
            OwnerKind::OpenSourceContribution => "Open-source contribution",
            OwnerKind::SideProject => "Side project",
            OwnerKind::Hobby => "Hobby",
            OwnerKind::Skill => "Skill",
            OwnerKind::BlogPost => "Blog post",
        }
    }

    pub fn allows_image_slot(self, slot: ImageSlot) -> bool {
        match self {
            OwnerKind::Skill => slot == ImageSlot::Icon,
            OwnerKind::Portfolio | OwnerKind::Hobby | OwnerKind::BlogPost => {
                matches!(slot, ImageSlot::MainImage | ImageSlot::AdditionalImage)
            }
            OwnerKind::Credential => matches!(slot, ImageSlot::MainImage | ImageSlot::Logo),
            OwnerKind::Education
            | OwnerKind::WorkExperience
            | OwnerKind::VolunteerWork
            | OwnerKind::OpenSourceContribution
            | OwnerKind::SideProject => slot != ImageSlot::Icon,
        }
    }

    pub fn accepts_websites(self) -> bool {
        !matches!(self, OwnerKind::Hobby | OwnerKind::Skill | OwnerKind::BlogPost)
    }

    pub fn accepts_skills(self) -> bool {
        !matches!(self, OwnerKind::Hobby | OwnerKind::Skill | OwnerKind::BlogPost)
    }

    pub fn accepts_achievements(self) -> bool {
        matches!(
            self,
            OwnerKind::Education
                | OwnerKind::WorkExperience
                | OwnerKind::VolunteerWork
                | OwnerKind::OpenSourceContribution
        )
    }
}

/// The attachment point an image fills on its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ImageSlot {
    #[sea_orm(string_value = "main_image")]
    #[serde(rename = "main image", alias = "main_image")]
    MainImage,
    #[sea_orm(string_value = "logo")]
    #[serde(rename = "logo")]
    Logo,
    #[sea_orm(string_value = "additional_image")]
    #[serde(rename = "additional image", alias = "additional_image")]
    AdditionalImage,
    #[sea_orm(string_value = "icon")]
    #[serde(rename = "icon")]
    Icon,
}

impl ImageSlot {
    /// Single-valued slots hold at most one image per owner.
    pub fn is_single(self) -> bool {
        self != ImageSlot::AdditionalImage
    }

    /// Route segment of a single-valued slot, e.g. `main-image`.
    pub fn path_segment(self) -> Option<&'static str> {
        match self {
            ImageSlot::MainImage => Some("main-image"),
            ImageSlot::Logo => Some("logo"),
            ImageSlot::Icon => Some("icon"),
            ImageSlot::AdditionalImage => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageSlot::MainImage => "main image",
            ImageSlot::Logo => "logo",
            ImageSlot::AdditionalImage => "additional image",
            ImageSlot::Icon => "icon",
        }
    }
}

/// Website discriminator. Each owner holds at most one website per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum WebsiteType {
    #[sea_orm(string_value = "main_website")]
    #[serde(alias = "main website")]
    MainWebsite,
    #[sea_orm(string_value = "secondary_website")]
    #[serde(alias = "secondary website")]
    SecondaryWebsite,
    #[sea_orm(string_value = "github")]
    Github,
    #[sea_orm(string_value = "linkedin")]
    Linkedin,
    #[sea_orm(string_value = "portfolio_link")]
    #[serde(alias = "portfolio link")]
    PortfolioLink,
    #[sea_orm(string_value = "pull_request_link")]
    #[serde(alias = "pull request link")]
    PullRequestLink,
}

impl WebsiteType {
    pub fn label(self) -> &'static str {
        match self {
            WebsiteType::MainWebsite => "main website",
            WebsiteType::SecondaryWebsite => "secondary website",
            WebsiteType::Github => "GitHub",
            WebsiteType::Linkedin => "LinkedIn",
            WebsiteType::PortfolioLink => "portfolio link",
            WebsiteType::PullRequestLink => "pull request link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn path_segments_round_trip() {
        for kind in OwnerKind::iter() {
            assert_eq!(OwnerKind::from_path_segment(kind.path_segment()), Some(kind));
        }
        assert_eq!(OwnerKind::from_path_segment("dragon"), None);
    }

    #[test]
    fn skills_only_take_icons() {
        assert!(OwnerKind::Skill.allows_image_slot(ImageSlot::Icon));
        assert!(!OwnerKind::Skill.allows_image_slot(ImageSlot::MainImage));
        assert!(!OwnerKind::Portfolio.allows_image_slot(ImageSlot::Logo));
        assert!(OwnerKind::Education.allows_image_slot(ImageSlot::Logo));
    }

    #[test]
    fn image_slot_accepts_spaced_and_snake_names() {
        let spaced: ImageSlot = serde_json::from_str("\"main image\"").unwrap();
        let snake: ImageSlot = serde_json::from_str("\"main_image\"").unwrap();
        assert_eq!(spaced, ImageSlot::MainImage);
        assert_eq!(snake, ImageSlot::MainImage);
        assert_eq!(serde_json::to_string(&ImageSlot::AdditionalImage).unwrap(), "\"additional image\"");
        assert!(serde_json::from_str::<ImageSlot>("\"banner\"").is_err());
    }

    #[test]
    fn only_additional_images_are_multi_valued() {
        assert!(ImageSlot::MainImage.is_single());
        assert!(ImageSlot::Logo.is_single());
        assert!(ImageSlot::Icon.is_single());
        assert!(!ImageSlot::AdditionalImage.is_single());
    }
}
