use battle_core::{BattleEvent, Outcome};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub ticks: u64,
    pub seconds: f64,
    pub outcome: MatchOutcome,
    pub player_health: i32,
    pub monster_health: i32,
    pub tally: EventTally,
}

impl MatchReport {
    pub fn new(seed: u64, ticks: u64, seconds: f64, outcome: MatchOutcome) -> Self {
        Self {
            id: format!("match-{seed}"),
            timestamp: Utc::now().to_rfc3339(),
            seed,
            ticks,
            seconds,
            outcome,
            player_health: 0,
            monster_health: 0,
            tally: EventTally::default(),
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Report {} -> {:?} after {:.1}s (player {} / monster {})",
            self.id, self.outcome, self.seconds, self.player_health, self.monster_health
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Victory,
    Defeat,
    Undecided,
}

impl From<Option<Outcome>> for MatchOutcome {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            Some(Outcome::Victory) => MatchOutcome::Victory,
            Some(Outcome::Defeat) => MatchOutcome::Defeat,
            None => MatchOutcome::Undecided,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventTally {
    pub player_strikes: u32,
    pub monster_strikes: u32,
    pub packs_collected: u32,
    pub packs_spawned: u32,
}

impl EventTally {
    pub fn record(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::PlayerStruck { .. } => self.player_strikes += 1,
            BattleEvent::MonsterStruck { .. } => self.monster_strikes += 1,
            BattleEvent::PackCollected { .. } => self.packs_collected += 1,
            BattleEvent::PackSpawned { .. } => self.packs_spawned += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_lowercase() {
        let json = serde_json::to_string(&MatchOutcome::Undecided).unwrap();
        assert_eq!("\"undecided\"", json);
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut report = MatchReport::new(42, 600, 10.0, MatchOutcome::Victory);
        report.tally.player_strikes = 9;
        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.tally, back.tally);
        assert_eq!(MatchOutcome::Victory, back.outcome);
        assert!(back.summary_line().starts_with("Report match-42 -> Victory"));
    }
}
