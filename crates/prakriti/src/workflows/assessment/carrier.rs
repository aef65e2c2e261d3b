//! Text encoding for the score distribution and profile when they travel
//! between the results and report steps outside of a stored session.

use tracing::warn;

use super::profile::UserProfile;
use super::scoring::ScoreDistribution;

pub fn encode_scores(scores: &ScoreDistribution) -> String {
    serde_json::to_string(scores).unwrap_or_else(|_| {
        format!(
            r#"{{"vata":{},"pitta":{},"kapha":{}}}"#,
            scores.vata, scores.pitta, scores.kapha
        )
    })
}

/// Decodes a distribution, substituting [`ScoreDistribution::BALANCED`] for
/// anything malformed, incomplete, or out of range.
pub fn decode_scores(raw: &str) -> ScoreDistribution {
    match serde_json::from_str::<ScoreDistribution>(raw) {
        Ok(scores) if scores.is_valid() => scores,
        Ok(scores) => {
            warn!(?scores, "score distribution out of range; using balanced default");
            ScoreDistribution::BALANCED
        }
        Err(err) => {
            warn!(error = %err, "unreadable score distribution; using balanced default");
            ScoreDistribution::BALANCED
        }
    }
}

pub fn encode_profile(profile: &UserProfile) -> Result<String, serde_json::Error> {
    serde_json::to_string(profile)
}

pub fn decode_profile(raw: &str) -> Option<UserProfile> {
    match serde_json::from_str::<UserProfile>(raw) {
        Ok(profile) => Some(profile),
        Err(err) => {
            warn!(error = %err, "unreadable user profile; rendering without it");
            None
        }
    }
}
