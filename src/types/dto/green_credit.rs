use poem_openapi::Object;

use crate::types::internal::{CreditActivity, GreenCreditProfile, Reward};

/// Response model for one redeemable reward
#[derive(Object, Debug)]
pub struct RewardResponse {
    /// Reward identifier
    pub id: String,

    /// Reward name
    pub name: String,

    /// Points required to redeem
    pub points_needed: u32,

    /// Icon name for the reward
    pub icon: String,

    /// Whether the current balance covers this reward
    pub redeemable: bool,
}

/// Response model for one line of recent activity
#[derive(Object, Debug)]
pub struct CreditActivityResponse {
    /// Date label as displayed in the product
    pub date: String,

    /// Activity description
    pub description: String,

    /// Signed point delta label (e.g. `+50`)
    pub points: String,
}

/// Response model for the green-credit rewards program
#[derive(Object, Debug)]
pub struct GreenCreditResponse {
    /// Current point balance
    pub points: u32,

    /// Current tier name
    pub tier: String,

    /// Next tier name
    pub next_tier_name: String,

    /// Points required for the next tier
    pub next_tier_points: u32,

    /// Points still missing for the next tier
    pub points_to_next_tier: u32,

    /// Progress toward the next tier, 0-100
    pub progress_percent: f64,

    /// Rewards available for redemption
    pub rewards: Vec<RewardResponse>,

    /// Recent point activity, newest first
    pub recent_activity: Vec<CreditActivityResponse>,
}

impl From<&GreenCreditProfile> for GreenCreditResponse {
    fn from(profile: &GreenCreditProfile) -> Self {
        let points_to_next_tier = profile.next_tier_points.saturating_sub(profile.points);
        let progress_percent = if profile.next_tier_points == 0 {
            0.0
        } else {
            f64::from(profile.points) / f64::from(profile.next_tier_points) * 100.0
        };

        Self {
            points: profile.points,
            tier: profile.tier.clone(),
            next_tier_name: profile.next_tier_name.clone(),
            next_tier_points: profile.next_tier_points,
            points_to_next_tier,
            progress_percent,
            rewards: profile
                .rewards
                .iter()
                .map(|reward| RewardResponse::from_reward(reward, profile.points))
                .collect(),
            recent_activity: profile
                .recent_activity
                .iter()
                .map(CreditActivityResponse::from)
                .collect(),
        }
    }
}

impl RewardResponse {
    fn from_reward(reward: &Reward, balance: u32) -> Self {
        Self {
            id: reward.id.clone(),
            name: reward.name.clone(),
            points_needed: reward.points_needed,
            icon: reward.icon.to_string(),
            redeemable: balance >= reward.points_needed,
        }
    }
}

impl From<&CreditActivity> for CreditActivityResponse {
    fn from(activity: &CreditActivity) -> Self {
        Self {
            date: activity.date.clone(),
            description: activity.description.clone(),
            points: activity.points.clone(),
        }
    }
}
