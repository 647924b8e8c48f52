use crate::error::ApiError;
use crate::profiles::ProfileRepository;
use crate::scoreboard::models::{AwardResult, PrizeAward, Standing};
use crate::scoreboard::ranker::{self, PRIZES};
use crate::scoreboard::repository::ScoreboardRepository;

/// Service for scoreboard queries and prize runs
#[derive(Clone)]
pub struct ScoreboardService {
    profiles: ProfileRepository,
    repository: ScoreboardRepository,
}

impl ScoreboardService {
    pub fn new(profiles: ProfileRepository, repository: ScoreboardRepository) -> Self {
        Self {
            profiles,
            repository,
        }
    }

    /// Current standings over all traveller accounts
    pub async fn standings(&self) -> Result<Vec<Standing>, ApiError> {
        let players = self.profiles.list_players().await?;
        let ranked = ranker::rank(players);

        Ok(ranked
            .into_iter()
            .zip(1u32..)
            .map(|(p, rank)| Standing {
                rank,
                user_id: p.user_id,
                name: p.name,
                tours_attended: p.tours_attended,
                balance: p.balance,
            })
            .collect())
    }

    /// Credit the prize table to the current top players
    ///
    /// Runs against the standings as they are right now; calling it
    /// twice pays out twice. That is intentional, the trigger is an
    /// admin action.
    pub async fn award_prizes(&self) -> Result<AwardResult, ApiError> {
        let players = self.profiles.list_players().await?;
        let ranked = ranker::rank(players);

        let winners: Vec<PrizeAward> = ranked
            .into_iter()
            .zip(PRIZES)
            .map(|(p, prize)| PrizeAward {
                user_id: p.user_id,
                name: p.name,
                prize,
            })
            .collect();

        let credits: Vec<_> = winners.iter().map(|w| (w.user_id, w.prize)).collect();
        self.repository.credit_prizes(&credits).await?;

        tracing::info!("Prizes awarded to {} players", winners.len());
        Ok(AwardResult { awarded: winners })
    }
}
