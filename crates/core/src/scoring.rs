//! Scoring module - answer points and the high-score board
//!
//! All functions here are pure: the board is never mutated in place,
//! `record_entry` hands back a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{BASE_ANSWER_SCORE, HIGH_SCORE_CAP, TIME_BONUS_PER_SECOND};

/// One finished play-through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreEntry {
    pub score: u32,
    pub date: DateTime<Utc>,
    pub levels_completed: usize,
}

/// Best results, sorted by score (highest first), at most `HIGH_SCORE_CAP` long
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreBoard {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from arbitrary entries, restoring order and cap.
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(HIGH_SCORE_CAP);
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn top(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record_entry(&self, score: u32, levels_completed: usize, now: DateTime<Utc>) -> Self {
        record_entry(self, score, levels_completed, now)
    }

    pub fn is_new_record(&self, score: u32) -> bool {
        is_new_record(self, score)
    }
}

/// Points for a correct answer: base plus 10 per second left.
pub fn compute_answer_score(time_left: u32) -> u32 {
    BASE_ANSWER_SCORE.saturating_add(time_left.saturating_mul(TIME_BONUS_PER_SECOND))
}

/// Append an entry, re-sort and truncate, returning the new board.
///
/// Ties keep their insertion order, so an earlier result stays ahead of a
/// later one with the same score.
pub fn record_entry(
    board: &HighScoreBoard,
    score: u32,
    levels_completed: usize,
    now: DateTime<Utc>,
) -> HighScoreBoard {
    let mut entries = Vec::with_capacity(board.entries.len() + 1);
    entries.extend_from_slice(&board.entries);
    entries.push(HighScoreEntry {
        score,
        date: now,
        levels_completed,
    });
    HighScoreBoard::from_entries(entries)
}

/// True when the board is empty or `score` beats the current best.
pub fn is_new_record(board: &HighScoreBoard, score: u32) -> bool {
    match board.top() {
        Some(top) => score > top.score,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_answer_score() {
        assert_eq!(compute_answer_score(0), 100);
        assert_eq!(compute_answer_score(5), 150);
        assert_eq!(compute_answer_score(12), 220);
        assert_eq!(compute_answer_score(30), 400);
    }

    #[test]
    fn test_record_entry_does_not_mutate_input() {
        let board = HighScoreBoard::new();
        let next = board.record_entry(150, 1, at(0));
        assert!(board.is_empty());
        assert_eq!(next.len(), 1);
        assert_eq!(next.top().unwrap().score, 150);
        assert_eq!(next.top().unwrap().levels_completed, 1);
    }

    #[test]
    fn test_board_sorted_and_capped() {
        let scores = [40, 900, 0, 310, 310, 75, 1200, 5, 660, 220, 18, 990, 130];
        let mut board = HighScoreBoard::new();
        for (i, score) in scores.iter().enumerate() {
            board = board.record_entry(*score, i % 6, at(i as i64));
            assert!(board.len() <= HIGH_SCORE_CAP);
            assert!(board
                .entries()
                .windows(2)
                .all(|w| w[0].score >= w[1].score));
        }
        assert_eq!(board.len(), HIGH_SCORE_CAP);
        assert_eq!(board.top().unwrap().score, 1200);
        // The three lowest scores fell off.
        assert!(board.entries().iter().all(|e| e.score >= 18));
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let board = HighScoreBoard::new()
            .record_entry(300, 2, at(1))
            .record_entry(300, 3, at(2));
        assert_eq!(board.entries()[0].date, at(1));
        assert_eq!(board.entries()[1].date, at(2));
    }

    #[test]
    fn test_new_record() {
        let empty = HighScoreBoard::new();
        assert!(empty.is_new_record(0));

        let board = empty.record_entry(500, 5, at(0));
        assert!(board.is_new_record(501));
        assert!(!board.is_new_record(500));
        assert!(!board.is_new_record(20));
    }

    #[test]
    fn test_from_entries_normalizes() {
        let entries: Vec<HighScoreEntry> = (0..15)
            .map(|i| HighScoreEntry {
                score: i * 10,
                date: at(i as i64),
                levels_completed: 0,
            })
            .collect();
        let board = HighScoreBoard::from_entries(entries);
        assert_eq!(board.len(), HIGH_SCORE_CAP);
        assert_eq!(board.top().unwrap().score, 140);
        assert_eq!(board.entries().last().unwrap().score, 50);
    }

    #[test]
    fn test_entry_json_shape() {
        let board = HighScoreBoard::new().record_entry(220, 3, at(0));
        let json = serde_json::to_value(&board).unwrap();
        let entry = &json[0];
        assert_eq!(entry["score"], 220);
        assert_eq!(entry["levelsCompleted"], 3);
        assert!(entry["date"].is_string());
    }
}
