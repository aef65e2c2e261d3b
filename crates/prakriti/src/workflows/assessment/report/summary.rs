use super::super::profile::UserProfile;
use super::super::scoring::{Constitution, ScoreDistribution};
use super::recommendations::{guidance_for, traits_for, PairGuidance};
use super::views::{DistributionEntry, ProfileView, ReportView, ResultView};
use chrono::NaiveDate;

/// Everything the results and report steps render, assembled from a
/// distribution and an optional profile.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub distribution: ScoreDistribution,
    pub constitution: Constitution,
    pub guidance: PairGuidance,
    pub profile: Option<UserProfile>,
    pub generated_on: NaiveDate,
    pub balanced_fallback: bool,
}

impl AssessmentReport {
    pub fn new(
        distribution: ScoreDistribution,
        profile: Option<UserProfile>,
        generated_on: NaiveDate,
    ) -> Self {
        let constitution = distribution.constitution();
        Self {
            distribution,
            constitution,
            guidance: guidance_for(constitution),
            profile,
            generated_on,
            balanced_fallback: false,
        }
    }

    pub fn with_fallback(mut self, balanced_fallback: bool) -> Self {
        self.balanced_fallback = balanced_fallback;
        self
    }

    pub fn result_view(&self) -> ResultView {
        let ranked = self
            .distribution
            .ranked()
            .into_iter()
            .map(|dosha| DistributionEntry {
                dosha,
                label: dosha.label(),
                elements: dosha.elements(),
                percentage: self.distribution.get(dosha),
            })
            .collect();

        ResultView {
            constitution: self.constitution.label(),
            primary: self.constitution.primary,
            primary_label: self.constitution.primary.label(),
            secondary: self.constitution.secondary,
            secondary_label: self.constitution.secondary.label(),
            distribution: self.distribution,
            ranked,
            key_characteristics: traits_for(self.constitution.primary),
            balanced_fallback: self.balanced_fallback,
        }
    }

    pub fn introduction(&self) -> String {
        format!(
            "Based on your {} constitution, we've prepared a comprehensive set of recommendations to help you maintain balance and optimize your health. Following these guidelines will help you manage your dominant doshas and create harmony in your mind and body.",
            self.constitution.label()
        )
    }

    pub fn view(&self) -> ReportView {
        ReportView {
            generated_on: self.generated_on,
            profile: self.profile.as_ref().map(ProfileView::from),
            result: self.result_view(),
            title: self.guidance.title(),
            introduction: self.introduction(),
            description: self.guidance.description,
            balance_practices: self.guidance.balance_practices.clone(),
            recommendations: self.guidance.recommendations.clone(),
        }
    }
}
