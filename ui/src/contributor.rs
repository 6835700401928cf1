//! The static top-contributor leaderboard.

use serde::{Deserialize, Serialize};

/// One leaderboard entry. The board is seed data only; donations made in the
/// session do not feed back into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    /// Cumulative amount contributed, in rupees.
    pub amount: f64,
    /// Number of projects supported.
    pub projects: u32,
}

impl Contributor {
    fn new(name: &str, amount: f64, projects: u32) -> Self {
        Self {
            name: name.to_string(),
            amount,
            projects,
        }
    }

    /// Ranked top-five, highest cumulative amount first.
    pub fn seed() -> Vec<Contributor> {
        vec![
            Contributor::new("Ritu Sharma", 125_000.0, 12),
            Contributor::new("Anita Desai", 98_000.0, 8),
            Contributor::new("Priya Mehta", 85_000.0, 10),
            Contributor::new("Suman Reddy", 76_000.0, 7),
            Contributor::new("Nina Patel", 65_000.0, 6),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_board_is_ranked_by_amount() {
        let board = Contributor::seed();
        assert_eq!(board.len(), 5);
        assert!(board.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
    }
}
