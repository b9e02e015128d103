// ABOUTME: Snapshot history storage seam with day-dedupe and retention pruning
// ABOUTME: In-memory store keyed by user id for tests and embedding callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Snapshot history persistence.
//!
//! The engine owns the history *policy* — at most one snapshot per calendar
//! day (latest wins) and a rolling retention window — while the
//! [`HistoryStore`] trait owns the mechanics: append, windowed read, and
//! full overwrite, keyed by user id. Callers bring their own store; the
//! bundled [`InMemoryHistoryStore`] backs tests and embedded use.

use crate::models::IndexSnapshot;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Persistence seam for per-user snapshot history
///
/// Implementations store snapshots in chronological order per user; the
/// engine keeps that ordering intact across overwrites.
pub trait HistoryStore: Send + Sync {
    /// Append one snapshot to a user's history
    fn append(&self, user_id: Uuid, snapshot: IndexSnapshot);

    /// Read a user's full history, ordered oldest to newest
    fn read_all(&self, user_id: Uuid) -> Vec<IndexSnapshot>;

    /// Replace a user's history wholesale (used after dedupe/prune)
    fn overwrite(&self, user_id: Uuid, snapshots: Vec<IndexSnapshot>);

    /// Read the snapshots at or after `cutoff`, ordered oldest to newest
    fn read_window(&self, user_id: Uuid, cutoff: DateTime<Utc>) -> Vec<IndexSnapshot> {
        self.read_all(user_id)
            .into_iter()
            .filter(|s| s.timestamp >= cutoff)
            .collect()
    }
}

impl<S: HistoryStore + ?Sized> HistoryStore for Arc<S> {
    fn append(&self, user_id: Uuid, snapshot: IndexSnapshot) {
        (**self).append(user_id, snapshot);
    }

    fn read_all(&self, user_id: Uuid) -> Vec<IndexSnapshot> {
        (**self).read_all(user_id)
    }

    fn overwrite(&self, user_id: Uuid, snapshots: Vec<IndexSnapshot>) {
        (**self).overwrite(user_id, snapshots);
    }

    fn read_window(&self, user_id: Uuid, cutoff: DateTime<Utc>) -> Vec<IndexSnapshot> {
        (**self).read_window(user_id, cutoff)
    }
}

/// Collapse a history to at most one snapshot per UTC calendar day
///
/// The snapshot with the latest timestamp wins its day; output is ordered
/// oldest to newest.
pub(crate) fn dedupe_daily(mut snapshots: Vec<IndexSnapshot>) -> Vec<IndexSnapshot> {
    snapshots.sort_by_key(|s| s.timestamp);
    let mut by_day: BTreeMap<NaiveDate, IndexSnapshot> = BTreeMap::new();
    for snapshot in snapshots {
        // Ascending insertion order makes the latest timestamp the survivor
        by_day.insert(snapshot.timestamp.date_naive(), snapshot);
    }
    by_day.into_values().collect()
}

/// Drop snapshots older than the retention window, measured from `now`
pub(crate) fn prune_expired(
    snapshots: Vec<IndexSnapshot>,
    now: DateTime<Utc>,
    max_history_days: i64,
) -> Vec<IndexSnapshot> {
    let cutoff = now - Duration::days(max_history_days);
    snapshots
        .into_iter()
        .filter(|s| s.timestamp >= cutoff)
        .collect()
}

/// In-memory snapshot store keyed by user id
///
/// Interior mutability lets a shared engine serve multiple request threads;
/// snapshot histories are small enough that whole-vector reads are cheap.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: RwLock<HashMap<Uuid, Vec<IndexSnapshot>>>,
}

impl InMemoryHistoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    /// If the lock is poisoned, the append is silently skipped.
    fn append(&self, user_id: Uuid, snapshot: IndexSnapshot) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        entries.entry(user_id).or_default().push(snapshot);
    }

    /// Returns empty if the lock is poisoned.
    fn read_all(&self, user_id: Uuid) -> Vec<IndexSnapshot> {
        let Ok(entries) = self.entries.read() else {
            return Vec::new();
        };
        entries.get(&user_id).cloned().unwrap_or_default()
    }

    /// Silently skipped if the lock is poisoned.
    fn overwrite(&self, user_id: Uuid, snapshots: Vec<IndexSnapshot>) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        entries.insert(user_id, snapshots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentScores, PerformanceLevel};
    use crate::trend::TrendDirection;
    use chrono::TimeZone;

    fn snapshot(score: u8, timestamp: DateTime<Utc>) -> IndexSnapshot {
        IndexSnapshot {
            score,
            level: PerformanceLevel::from_score(score),
            components: ComponentScores::default(),
            trend: TrendDirection::Stable,
            timestamp,
            workout_count: 1,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn dedupe_keeps_latest_snapshot_of_each_day() {
        let now = fixed_now();
        let morning = snapshot(40, now - Duration::hours(6));
        let evening = snapshot(55, now);
        let deduped = dedupe_daily(vec![evening.clone(), morning]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].score, evening.score);
        assert_eq!(deduped[0].timestamp, evening.timestamp);
    }

    #[test]
    fn dedupe_preserves_chronological_order_across_days() {
        let now = fixed_now();
        let days = vec![
            snapshot(30, now - Duration::days(2)),
            snapshot(50, now),
            snapshot(40, now - Duration::days(1)),
        ];
        let deduped = dedupe_daily(days);
        let scores: Vec<u8> = deduped.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![30, 40, 50]);
    }

    #[test]
    fn prune_drops_entries_beyond_retention() {
        let now = fixed_now();
        let history = vec![
            snapshot(20, now - Duration::days(120)),
            snapshot(40, now - Duration::days(30)),
            snapshot(60, now),
        ];
        let kept = prune_expired(history, now, 90);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|s| s.timestamp >= now - Duration::days(90)));
    }

    #[test]
    fn store_isolates_users() {
        let store = InMemoryHistoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.append(alice, snapshot(70, fixed_now()));
        assert_eq!(store.read_all(alice).len(), 1);
        assert!(store.read_all(bob).is_empty());
    }

    #[test]
    fn read_window_honors_cutoff() {
        let store = InMemoryHistoryStore::new();
        let user = Uuid::new_v4();
        let now = fixed_now();
        store.append(user, snapshot(30, now - Duration::days(10)));
        store.append(user, snapshot(50, now - Duration::days(2)));
        let window = store.read_window(user, now - Duration::days(7));
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].score, 50);
    }
}
