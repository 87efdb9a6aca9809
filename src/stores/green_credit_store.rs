use crate::types::internal::{CreditActivity, GreenCreditProfile, Reward};

/// Read-only store behind the green-credit rewards view
pub struct GreenCreditStore {
    profile: GreenCreditProfile,
}

impl GreenCreditStore {
    pub fn new() -> Self {
        Self {
            profile: seed_profile(),
        }
    }

    pub fn profile(&self) -> &GreenCreditProfile {
        &self.profile
    }
}

impl Default for GreenCreditStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_profile() -> GreenCreditProfile {
    GreenCreditProfile {
        points: 150,
        tier: "Bronze Reciclador".to_string(),
        next_tier_name: "Prata Reciclador".to_string(),
        next_tier_points: 500,
        rewards: vec![
            Reward {
                id: "rew001".to_string(),
                name: "Desconto de 5% na próxima recolha".to_string(),
                points_needed: 100,
                icon: "shopping-cart",
            },
            Reward {
                id: "rew002".to_string(),
                name: "Brinde Ecológico Surpresa".to_string(),
                points_needed: 250,
                icon: "gift",
            },
            Reward {
                id: "rew003".to_string(),
                name: "Doação para Causa Ambiental".to_string(),
                points_needed: 500,
                icon: "star",
            },
        ],
        recent_activity: vec![
            CreditActivity {
                date: "15 de Julho, 2024".to_string(),
                description: "Recolha de 3 sacolas".to_string(),
                points: "+50".to_string(),
            },
            CreditActivity {
                date: "02 de Julho, 2024".to_string(),
                description: "Recolha de 5 sacolas".to_string(),
                points: "+75".to_string(),
            },
            CreditActivity {
                date: "20 de Junho, 2024".to_string(),
                description: "Cadastro no programa".to_string(),
                points: "+25".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_profile_matches_the_product() {
        let profile = GreenCreditStore::new().profile().clone();

        assert_eq!(profile.points, 150);
        assert_eq!(profile.tier, "Bronze Reciclador");
        assert_eq!(profile.next_tier_points, 500);
        assert_eq!(profile.rewards.len(), 3);
        assert_eq!(profile.recent_activity.len(), 3);
    }
}
