use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Approval status of an agent's company application
///
/// Only an `Active` company admits its agent into the agent area;
/// the route guard redirects the rest to the pending page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Pending,
    Active,
    Rejected,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Pending => "pending",
            CompanyStatus::Active => "active",
            CompanyStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(CompanyStatus::Pending),
            "active" => Ok(CompanyStatus::Active),
            "rejected" => Ok(CompanyStatus::Rejected),
            _ => Err(format!("Invalid company status: {}", s)),
        }
    }
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Agent business profile
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub company_name: String,
    pub phone: String,
    pub address: String,
    pub license_number: String,
    pub description: String,
    pub status: CompanyStatus,
    pub created_at: DateTime<Utc>,
}
