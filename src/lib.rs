pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod lint;
pub mod report;
pub mod store;
pub mod types;

pub use engine::aggregate::{score_group, score_period, PeriodSummary, ScoredGroup};
pub use engine::risk::at_risk_items;
pub use engine::trend::{compute_trend, TrendPoint};
pub use engine::{score, Scored, ScoredItem, DEFAULT_ACHIEVEMENT_CAP};
pub use error::{Result, ScorecardError};
pub use types::period::{PeriodScore, ScoreGroup, ScoreItem};
