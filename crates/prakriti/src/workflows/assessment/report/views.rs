use super::super::domain::Dosha;
use super::super::profile::UserProfile;
use super::super::scoring::ScoreDistribution;
use super::recommendations::{DoshaTraits, Recommendations};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DistributionEntry {
    pub dosha: Dosha,
    pub label: &'static str,
    pub elements: &'static str,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub constitution: String,
    pub primary: Dosha,
    pub primary_label: &'static str,
    pub secondary: Dosha,
    pub secondary_label: &'static str,
    pub distribution: ScoreDistribution,
    pub ranked: Vec<DistributionEntry>,
    pub key_characteristics: DoshaTraits,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub balanced_fallback: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub gender: &'static str,
    pub location: String,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.full_name(),
            email: profile.email.clone(),
            age: profile.age,
            gender: profile.gender.label(),
            location: profile.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub generated_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileView>,
    pub result: ResultView,
    pub title: String,
    pub introduction: String,
    pub description: &'static str,
    pub balance_practices: Vec<&'static str>,
    pub recommendations: Recommendations,
}
