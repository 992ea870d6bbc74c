//! Day-selection model shared by the three calendar modals.
//!
//! Each modal lets the user multi-select days of the displayed month, pick a
//! status/preference/duty category and reconcile the selection against the
//! records already persisted for that month. The reconciliation rules differ
//! only in the apply mode, so the state machine lives here once.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dates::in_span;

/// How "Apply" turns a selection into create calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// One record spanning min..=max of the selection (status schedules).
    CollapseToRange,
    /// One record per selected day (duty preferences, department duty days).
    PerDay,
}

/// The creates "Apply" should issue for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyPlan {
    Range { start: NaiveDate, end: NaiveDate },
    Days(Vec<NaiveDate>),
}

/// An inclusive date span of a persisted record. Single-day records report
/// `start == end`.
pub trait DateSpan {
    fn span(&self) -> (NaiveDate, NaiveDate);
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    days: BTreeSet<NaiveDate>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a day in or out of the selection. Days that already carry a
    /// persisted record are selectable too, so "Remove" can target them.
    pub fn toggle(&mut self, day: NaiveDate) {
        if !self.days.remove(&day) {
            self.days.insert(day);
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Selected days in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.days.iter().copied().collect()
    }

    /// What "Apply" should create. `None` while nothing is selected.
    pub fn apply_plan(&self, mode: ApplyMode) -> Option<ApplyPlan> {
        let first = *self.days.iter().next()?;
        let last = *self.days.iter().next_back()?;
        Some(match mode {
            ApplyMode::CollapseToRange => ApplyPlan::Range { start: first, end: last },
            ApplyMode::PerDay => ApplyPlan::Days(self.days()),
        })
    }

    /// Records whose span intersects any selected day — one delete each.
    pub fn remove_targets<'a, R: DateSpan>(&self, records: &'a [R]) -> Vec<&'a R> {
        records
            .iter()
            .filter(|r| {
                let (start, end) = r.span();
                self.days.iter().any(|d| in_span(*d, start, end))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date_key;

    fn d(s: &str) -> NaiveDate {
        parse_date_key(s).unwrap()
    }

    struct Rec {
        id: i64,
        start: NaiveDate,
        end: NaiveDate,
    }

    impl DateSpan for Rec {
        fn span(&self) -> (NaiveDate, NaiveDate) {
            (self.start, self.end)
        }
    }

    #[test]
    fn toggle_round_trips() {
        let mut sel = Selection::new();
        sel.toggle(d("2024-03-05"));
        assert!(sel.contains(d("2024-03-05")));
        sel.toggle(d("2024-03-05"));
        assert!(sel.is_empty());
    }

    #[test]
    fn range_apply_collapses_noncontiguous_selection() {
        // 2nd, 5th, 3rd selected out of order: exactly one range 02..=05.
        let mut sel = Selection::new();
        sel.toggle(d("2024-03-02"));
        sel.toggle(d("2024-03-05"));
        sel.toggle(d("2024-03-03"));
        assert_eq!(
            sel.apply_plan(ApplyMode::CollapseToRange),
            Some(ApplyPlan::Range {
                start: d("2024-03-02"),
                end: d("2024-03-05"),
            })
        );
    }

    #[test]
    fn per_day_apply_creates_one_record_per_date() {
        let mut sel = Selection::new();
        sel.toggle(d("2024-03-02"));
        sel.toggle(d("2024-03-05"));
        sel.toggle(d("2024-03-03"));
        let plan = sel.apply_plan(ApplyMode::PerDay).unwrap();
        assert_eq!(
            plan,
            ApplyPlan::Days(vec![d("2024-03-02"), d("2024-03-03"), d("2024-03-05")])
        );
    }

    #[test]
    fn empty_selection_has_no_plan() {
        assert_eq!(Selection::new().apply_plan(ApplyMode::PerDay), None);
    }

    #[test]
    fn remove_hits_range_containing_one_selected_day() {
        // A persisted range 01..10 is deleted when any single day of it is
        // selected.
        let records = vec![
            Rec { id: 1, start: d("2024-03-01"), end: d("2024-03-10") },
            Rec { id: 2, start: d("2024-03-20"), end: d("2024-03-22") },
        ];
        let mut sel = Selection::new();
        sel.toggle(d("2024-03-05"));
        let targets = sel.remove_targets(&records);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, 1);
    }

    #[test]
    fn remove_matches_each_intersecting_record_once() {
        let records = vec![
            Rec { id: 1, start: d("2024-03-01"), end: d("2024-03-03") },
            Rec { id: 2, start: d("2024-03-03"), end: d("2024-03-06") },
            Rec { id: 3, start: d("2024-03-15"), end: d("2024-03-15") },
        ];
        let mut sel = Selection::new();
        sel.toggle(d("2024-03-03"));
        sel.toggle(d("2024-03-15"));
        let ids: Vec<i64> = sel.remove_targets(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
