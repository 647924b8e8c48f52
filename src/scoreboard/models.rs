use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// One row of the scoreboard, rank starting at 1
#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub rank: u32,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub tours_attended: i32,
    pub balance: Decimal,
}

/// Result of an admin prize run
#[derive(Debug, Serialize)]
pub struct AwardResult {
    pub awarded: Vec<PrizeAward>,
}

#[derive(Debug, Serialize)]
pub struct PrizeAward {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub prize: Decimal,
}
