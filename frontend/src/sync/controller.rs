//! State of one testimonial list and the rules for changing it.
//!
//! Each view that shows testimonials owns one `SyncController`. It tracks
//! the canonical list, the reload lifecycle, and which rows have a mutation
//! in flight. The controller performs no I/O itself: its transition methods
//! return whether the caller may start a request, and the component's
//! message handler is the only place that actually spawns one. That split
//! keeps every consistency rule in plain code a test can drive directly.
//!
//! Consistency rules encoded here:
//! - The visible list is only replaced once fresh data has arrived, so a
//!   reload never flickers through an empty state.
//! - Change notifications landing while a reload is running collapse into
//!   exactly one follow-up reload.
//! - A row admits at most one in-flight delete and one in-flight approval
//!   change; repeat requests are dropped, not queued. Different rows do not
//!   affect each other.
//! - Deleting takes two triggers: the first arms the row, the second inside
//!   the confirmation window executes. Arming another row, or the window
//!   running out, resets the first.
//! - Successful mutations are applied to the local list immediately; the
//!   next reload brings the server's version of the truth regardless.

use std::collections::HashSet;

use common::model::testimonial::Testimonial;

/// How long an armed delete waits for its confirming trigger.
pub const CONFIRM_WINDOW_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// First load has not completed yet.
    Loading,
    /// A list has been shown at least once. Re-entered after every reload.
    Ready,
}

/// What a delete trigger on a row led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmOutcome {
    /// The row is now armed; the generation identifies this arming so a
    /// stale expiry cannot cancel a later one.
    Armed(u32),
    /// The row was already armed: the delete may proceed.
    Confirmed,
    /// The row already has a delete in flight; nothing to do.
    Ignored,
}

pub struct SyncController {
    phase: Phase,
    items: Vec<Testimonial>,
    reload_in_flight: bool,
    reload_pending: bool,
    deleting: HashSet<String>,
    approving: HashSet<String>,
    armed: Option<(String, u32)>,
    arm_generation: u32,
}

impl SyncController {
    pub fn new() -> Self {
        SyncController {
            phase: Phase::Loading,
            items: Vec::new(),
            reload_in_flight: false,
            reload_pending: false,
            deleting: HashSet::new(),
            approving: HashSet::new(),
            armed: None,
            arm_generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn items(&self) -> &[Testimonial] {
        &self.items
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|t| !t.approved).count()
    }

    /// True while a background reload is running behind an already visible
    /// list; views show a subtle refresh hint instead of a blank page.
    pub fn is_reloading(&self) -> bool {
        self.reload_in_flight && self.phase == Phase::Ready
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    pub fn is_approving(&self, id: &str) -> bool {
        self.approving.contains(id)
    }

    pub fn armed_id(&self) -> Option<&str> {
        self.armed.as_ref().map(|(id, _)| id.as_str())
    }

    /// Returns true when the caller should issue the first fetch.
    pub fn begin_initial_load(&mut self) -> bool {
        if self.reload_in_flight {
            return false;
        }
        self.phase = Phase::Loading;
        self.reload_in_flight = true;
        true
    }

    /// A change notification arrived. Returns true when the caller should
    /// reload now; while a reload is already running the signal is absorbed
    /// and answered by one follow-up reload later.
    pub fn invalidated(&mut self) -> bool {
        if self.reload_in_flight {
            self.reload_pending = true;
            return false;
        }
        self.reload_in_flight = true;
        true
    }

    /// A fetch finished. `items` is `None` when it failed, in which case
    /// whatever list is currently shown stays. Returns true when a
    /// coalesced follow-up reload should be issued.
    pub fn loaded(&mut self, items: Option<Vec<Testimonial>>) -> bool {
        self.reload_in_flight = false;
        self.phase = Phase::Ready;
        if let Some(items) = items {
            self.items = items;
        }
        if self.reload_pending {
            self.reload_pending = false;
            self.reload_in_flight = true;
            return true;
        }
        false
    }

    /// Handles a delete trigger: arms the row, confirms an armed row, or
    /// ignores a row whose delete is already running. Arming a row disarms
    /// any other.
    pub fn arm_delete(&mut self, id: &str) -> ArmOutcome {
        if self.deleting.contains(id) {
            return ArmOutcome::Ignored;
        }
        if self.armed.as_ref().is_some_and(|(armed, _)| armed == id) {
            self.armed = None;
            return ArmOutcome::Confirmed;
        }
        self.arm_generation += 1;
        self.armed = Some((id.to_string(), self.arm_generation));
        ArmOutcome::Armed(self.arm_generation)
    }

    /// The confirmation window for an arming ran out. Only the matching
    /// generation disarms; a newer arming of the same row stays.
    pub fn disarm_expired(&mut self, id: &str, generation: u32) {
        if self
            .armed
            .as_ref()
            .is_some_and(|(armed, gen)| armed == id && *gen == generation)
        {
            self.armed = None;
        }
    }

    /// Unconditional reset, used when focus leaves the armed control.
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Returns true when the caller should issue the delete request.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting.contains(id) {
            return false;
        }
        self.deleting.insert(id.to_string());
        true
    }

    pub fn delete_resolved(&mut self, id: &str) {
        self.deleting.remove(id);
    }

    /// Returns true when the caller should issue the approval request.
    pub fn begin_approval(&mut self, id: &str) -> bool {
        if self.approving.contains(id) {
            return false;
        }
        self.approving.insert(id.to_string());
        true
    }

    pub fn approval_resolved(&mut self, id: &str) {
        self.approving.remove(id);
    }

    /// Drops the row locally right after a successful delete, ahead of the
    /// next reload.
    pub fn apply_removal(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }

    /// Patches the local copy right after a successful approval change.
    pub fn apply_approval(&mut self, id: &str, approved: bool) {
        if let Some(item) = self.items.iter_mut().find(|t| t.id == id) {
            item.approved = approved;
        }
    }
}

impl Default for SyncController {
    fn default() -> Self {
        SyncController::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::testimonial::TestimonialContent;

    fn testimonial(id: &str, approved: bool) -> Testimonial {
        Testimonial {
            id: id.to_string(),
            name: format!("author of {id}"),
            content: TestimonialContent::Written {
                text: "Great program".to_string(),
                role: None,
                company: None,
                avatar_url: None,
            },
            approved,
            verified: false,
            rating: None,
            source: None,
            tags: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn ready_controller(ids: &[(&str, bool)]) -> SyncController {
        let mut sync = SyncController::new();
        assert!(sync.begin_initial_load());
        let items = ids
            .iter()
            .map(|(id, approved)| testimonial(id, *approved))
            .collect();
        assert!(!sync.loaded(Some(items)));
        sync
    }

    #[test]
    fn initial_load_transitions_to_ready() {
        let mut sync = SyncController::new();
        assert_eq!(sync.phase(), Phase::Loading);
        assert!(sync.begin_initial_load());
        sync.loaded(Some(vec![testimonial("a", true)]));
        assert_eq!(sync.phase(), Phase::Ready);
        assert_eq!(sync.items().len(), 1);
    }

    #[test]
    fn failed_load_keeps_the_current_list() {
        let mut sync = ready_controller(&[("a", true)]);
        assert!(sync.invalidated());
        sync.loaded(None);
        assert_eq!(sync.items().len(), 1);
        assert_eq!(sync.phase(), Phase::Ready);
    }

    #[test]
    fn invalidations_during_a_reload_coalesce_into_one() {
        let mut sync = ready_controller(&[]);
        assert!(sync.invalidated());
        // Three notifications land while the reload is still running.
        assert!(!sync.invalidated());
        assert!(!sync.invalidated());
        assert!(!sync.invalidated());
        // Finishing triggers exactly one follow-up reload.
        assert!(sync.loaded(Some(vec![])));
        assert!(!sync.loaded(Some(vec![])));
    }

    #[test]
    fn background_reload_keeps_the_list_visible() {
        let mut sync = ready_controller(&[("a", true)]);
        assert!(sync.invalidated());
        // Still Ready, still showing the old list, hinting at the refresh.
        assert_eq!(sync.phase(), Phase::Ready);
        assert!(sync.is_reloading());
        assert_eq!(sync.items().len(), 1);
        sync.loaded(Some(vec![]));
        assert!(!sync.is_reloading());
    }

    #[test]
    fn second_delete_for_the_same_row_is_refused() {
        let mut sync = ready_controller(&[("a", true)]);
        assert!(sync.begin_delete("a"));
        assert!(!sync.begin_delete("a"));
        sync.delete_resolved("a");
        assert!(sync.begin_delete("a"));
    }

    #[test]
    fn second_approval_for_the_same_row_is_refused() {
        let mut sync = ready_controller(&[("a", false)]);
        assert!(sync.begin_approval("a"));
        assert!(!sync.begin_approval("a"));
        sync.approval_resolved("a");
        assert!(sync.begin_approval("a"));
    }

    #[test]
    fn operations_on_different_rows_are_independent() {
        let mut sync = ready_controller(&[("a", false), ("b", false)]);
        assert!(sync.begin_delete("a"));
        assert!(sync.begin_delete("b"));
        assert!(sync.begin_approval("a"));
        assert!(sync.begin_approval("b"));
    }

    #[test]
    fn lone_trigger_only_arms() {
        let mut sync = ready_controller(&[("a", true)]);
        assert!(matches!(sync.arm_delete("a"), ArmOutcome::Armed(_)));
        assert_eq!(sync.armed_id(), Some("a"));
        // No delete was authorized; the row is merely armed.
        assert!(!sync.is_deleting("a"));
    }

    #[test]
    fn second_trigger_confirms() {
        let mut sync = ready_controller(&[("a", true)]);
        assert!(matches!(sync.arm_delete("a"), ArmOutcome::Armed(_)));
        assert_eq!(sync.arm_delete("a"), ArmOutcome::Confirmed);
        assert_eq!(sync.armed_id(), None);
    }

    #[test]
    fn arming_another_row_moves_the_armed_state() {
        let mut sync = ready_controller(&[("a", true), ("b", true)]);
        assert!(matches!(sync.arm_delete("a"), ArmOutcome::Armed(_)));
        assert!(matches!(sync.arm_delete("b"), ArmOutcome::Armed(_)));
        assert_eq!(sync.armed_id(), Some("b"));
        // The first row was never confirmed, so confirming it now requires
        // arming again.
        assert!(matches!(sync.arm_delete("a"), ArmOutcome::Armed(_)));
    }

    #[test]
    fn expiry_disarms_only_its_own_generation() {
        let mut sync = ready_controller(&[("a", true)]);
        let first = match sync.arm_delete("a") {
            ArmOutcome::Armed(generation) => generation,
            other => panic!("expected an arming, got {other:?}"),
        };
        // The window lapses, then the row is armed again.
        sync.disarm_expired("a", first);
        let second = match sync.arm_delete("a") {
            ArmOutcome::Armed(generation) => generation,
            other => panic!("expected an arming, got {other:?}"),
        };
        // The stale expiry from the first arming must not cancel the second.
        sync.disarm_expired("a", first);
        assert_eq!(sync.armed_id(), Some("a"));
        sync.disarm_expired("a", second);
        assert_eq!(sync.armed_id(), None);
    }

    #[test]
    fn delete_trigger_on_a_busy_row_is_ignored() {
        let mut sync = ready_controller(&[("a", true)]);
        assert!(sync.begin_delete("a"));
        assert_eq!(sync.arm_delete("a"), ArmOutcome::Ignored);
    }

    #[test]
    fn optimistic_removal_applies_before_any_reload() {
        let mut sync = ready_controller(&[("a", true), ("b", true)]);
        sync.apply_removal("a");
        assert!(sync.items().iter().all(|t| t.id != "a"));
        assert_eq!(sync.items().len(), 1);
    }

    #[test]
    fn optimistic_approval_patches_the_local_copy() {
        let mut sync = ready_controller(&[("a", false)]);
        sync.apply_approval("a", true);
        assert!(sync.items()[0].approved);
        assert_eq!(sync.pending_count(), 0);
    }

    #[test]
    fn pending_count_tracks_unapproved_rows() {
        let sync = ready_controller(&[("a", false), ("b", true), ("c", false)]);
        assert_eq!(sync.pending_count(), 2);
    }
}
