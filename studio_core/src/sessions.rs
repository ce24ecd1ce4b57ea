//! Live session board grouping.
//!
//! The sessions page shows three groups: what is live right now, what is
//! coming up, and what already ran. Grouping and ordering are derived from
//! the snapshot on every render.

use crate::types::{LiveSession, SessionStatus};

impl LiveSession {
    /// Open spots remaining, saturating at zero when overbooked
    pub fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.participants)
    }

    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }
}

/// Sessions grouped by lifecycle state
#[derive(Clone, Debug, Default)]
pub struct SessionBoard {
    /// Soonest first
    pub live: Vec<LiveSession>,
    /// Soonest first
    pub upcoming: Vec<LiveSession>,
    /// Most recent first
    pub completed: Vec<LiveSession>,
}

impl SessionBoard {
    pub fn total(&self) -> usize {
        self.live.len() + self.upcoming.len() + self.completed.len()
    }
}

/// Partition sessions by status.
///
/// Every input session lands in exactly one group. Live and upcoming groups
/// are ordered soonest-first; completed most-recent-first.
pub fn partition_sessions(sessions: &[LiveSession]) -> SessionBoard {
    let mut board = SessionBoard::default();

    for session in sessions {
        match session.status {
            SessionStatus::Live => board.live.push(session.clone()),
            SessionStatus::Upcoming => board.upcoming.push(session.clone()),
            SessionStatus::Completed => board.completed.push(session.clone()),
        }
    }

    board.live.sort_by_key(|s| s.scheduled_at);
    board.upcoming.sort_by_key(|s| s.scheduled_at);
    board
        .completed
        .sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));

    tracing::debug!(
        "Session board: {} live, {} upcoming, {} completed",
        board.live.len(),
        board.upcoming.len(),
        board.completed.len()
    );

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn session(id: &str, status: SessionStatus, hours_from_now: i64, participants: u32) -> LiveSession {
        LiveSession {
            id: id.into(),
            title: format!("Session {}", id),
            trainer: "Sarah Johnson".into(),
            scheduled_at: Utc::now() + Duration::hours(hours_from_now),
            duration_minutes: 45,
            participants,
            max_participants: 15,
            status,
            meeting_link: None,
        }
    }

    #[test]
    fn test_partition_covers_every_session_once() {
        let sessions = vec![
            session("s1", SessionStatus::Upcoming, 24, 8),
            session("s2", SessionStatus::Live, 0, 12),
            session("s3", SessionStatus::Completed, -24, 14),
            session("s4", SessionStatus::Upcoming, 48, 5),
        ];

        let board = partition_sessions(&sessions);
        assert_eq!(board.total(), sessions.len());
        assert_eq!(board.live.len(), 1);
        assert_eq!(board.upcoming.len(), 2);
        assert_eq!(board.completed.len(), 1);
    }

    #[test]
    fn test_upcoming_sorted_soonest_first() {
        let sessions = vec![
            session("later", SessionStatus::Upcoming, 72, 0),
            session("soon", SessionStatus::Upcoming, 12, 0),
            session("middle", SessionStatus::Upcoming, 48, 0),
        ];

        let board = partition_sessions(&sessions);
        let ids: Vec<&str> = board.upcoming.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "middle", "later"]);
    }

    #[test]
    fn test_completed_sorted_most_recent_first() {
        let sessions = vec![
            session("oldest", SessionStatus::Completed, -72, 15),
            session("newest", SessionStatus::Completed, -12, 15),
        ];

        let board = partition_sessions(&sessions);
        let ids: Vec<&str> = board.completed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "oldest"]);
    }

    #[test]
    fn test_spots_left_saturates() {
        let mut s = session("s1", SessionStatus::Upcoming, 10, 10);
        assert_eq!(s.spots_left(), 5);
        assert!(!s.is_full());

        s.participants = 15;
        assert_eq!(s.spots_left(), 0);
        assert!(s.is_full());

        // Overbooked still reports zero, not a panic
        s.participants = 20;
        assert_eq!(s.spots_left(), 0);
        assert!(s.is_full());
    }
}
