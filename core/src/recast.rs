//! Cooldown, charge, and usability reads.
//!
//! [`SpellReader`] wraps an [`ActionRuntime`] and turns the host's raw
//! recast records into display-ready numbers. The host tracks recasts per
//! group at the caller's current charge cap; abilities whose extra
//! charges unlock late need their totals rescaled against the cap at the
//! reference level so a partially-unlocked ability doesn't show a longer
//! cooldown than it has.

use crate::client::{ActionRuntime, GameObject, RecastRecord, layout};

/// Level at which every ability has all of its charges unlocked; charge
/// caps queried here serve as the normalization reference.
pub const CHARGE_REFERENCE_LEVEL: u32 = 90;

/// Recast state of one action, normalized to the caller's charge cap
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdjustedRecast {
    /// Normalized total recast length in seconds (0 = not recasting)
    pub total: f32,
    /// Seconds elapsed since the recast began
    pub elapsed: f32,
    /// The caller's current charge cap
    pub max_charges: u16,
}

/// Per-frame reader over the host's action state
pub struct SpellReader<R> {
    runtime: R,
}

impl<R: ActionRuntime> SpellReader<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Job/level-scaled substitution of a base action id
    pub fn adjusted_id(&self, action_id: u32) -> u32 {
        self.runtime.adjusted_action_id(action_id)
    }

    fn record(&self, action_id: u32) -> Option<RecastRecord> {
        let group = self.runtime.recast_group(action_id)?;
        self.runtime.recast_record(group)
    }

    /// Seconds elapsed on the adjusted action's recast; 0 when idle
    pub fn recast_elapsed(&self, action_id: u32) -> f32 {
        self.record(self.adjusted_id(action_id))
            .map_or(0.0, |record| record.elapsed)
    }

    /// Total recast length of the adjusted action; 0 when idle
    pub fn recast_total(&self, action_id: u32) -> f32 {
        self.record(self.adjusted_id(action_id))
            .map_or(0.0, |record| record.total)
    }

    /// Recast state normalized to the caller's charge cap.
    ///
    /// The host's record totals assume the reference-level charge cap.
    /// When the caller has fewer charges unlocked, the total is rescaled
    /// by `own / reference`; if the elapsed time has already overrun the
    /// rescaled total, the cooldown is reported as fully elapsed.
    pub fn adjusted_recast_info(&self, action_id: u32) -> AdjustedRecast {
        // Group lookup takes the base id; the host applies adjustment
        // itself when mapping an action to its group.
        let Some(record) = self.record(action_id) else {
            return AdjustedRecast::default();
        };

        let reference_max = self.max_charges(action_id, CHARGE_REFERENCE_LEVEL);
        if reference_max <= 1 {
            return AdjustedRecast {
                total: record.total,
                elapsed: record.elapsed,
                max_charges: reference_max,
            };
        }

        let own_max = self.max_charges(action_id, 0);
        let adjusted_total = record.total * f32::from(own_max) / f32::from(reference_max);
        if record.elapsed > adjusted_total {
            return AdjustedRecast {
                total: 0.0,
                elapsed: 0.0,
                max_charges: own_max,
            };
        }

        AdjustedRecast {
            total: adjusted_total,
            elapsed: record.elapsed,
            max_charges: own_max,
        }
    }

    /// Charge cap of the adjusted action at `level` (0 = current level)
    pub fn max_charges(&self, action_id: u32, level: u32) -> u16 {
        self.runtime.max_charges(self.adjusted_id(action_id), level)
    }

    /// Raw host usability code for the adjusted action; 0 = usable
    pub fn action_status(&self, action_id: u32, target_id: u32) -> u32 {
        self.runtime.action_status(self.adjusted_id(action_id), target_id)
    }

    /// Off cooldown with resources available against `target_id`
    pub fn can_use(&self, action_id: u32, target_id: u32) -> bool {
        self.action_status(action_id, target_id) == 0
    }

    /// Whether `target` is reachable with the action from `source`.
    ///
    /// False when either actor is missing. Of the host's result codes
    /// only [`layout::range::OUT_OF_RANGE`] counts as unreachable; "not
    /// facing" and "no line of sight" still report in range.
    pub fn in_range(
        &self,
        action_id: u32,
        source: Option<&GameObject>,
        target: Option<&GameObject>,
    ) -> bool {
        let (Some(source), Some(target)) = (source, target) else {
            return false;
        };
        self.runtime.range_check(action_id, source, target) != layout::range::OUT_OF_RANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeObject, MockRuntime};

    #[test]
    fn test_idle_action_reads_zero() {
        let reader = SpellReader::new(MockRuntime::default());
        assert_eq!(reader.recast_elapsed(100), 0.0);
        assert_eq!(reader.recast_total(100), 0.0);
        assert_eq!(reader.adjusted_recast_info(100), AdjustedRecast::default());
    }

    #[test]
    fn test_single_charge_passes_record_through() {
        let mut runtime = MockRuntime::with_recast(100, 12.5, 60.0, 1);
        runtime.charges.insert((100, CHARGE_REFERENCE_LEVEL), 1);
        let reader = SpellReader::new(runtime);

        let info = reader.adjusted_recast_info(100);
        assert_eq!(info.total, 60.0);
        assert_eq!(info.elapsed, 12.5);
        assert_eq!(info.max_charges, 1);
    }

    #[test]
    fn test_partially_unlocked_charges_rescale_total() {
        // Three charges at the reference level, two unlocked: the 90s
        // record total covers three charges, so the caller sees 60s.
        let mut runtime = MockRuntime::with_recast(100, 10.0, 90.0, 3);
        runtime.charges.insert((100, 0), 2);
        let reader = SpellReader::new(runtime);

        let info = reader.adjusted_recast_info(100);
        assert_eq!(info.total, 60.0);
        assert_eq!(info.elapsed, 10.0);
        assert_eq!(info.max_charges, 2);
    }

    #[test]
    fn test_elapsed_overrun_reports_fully_elapsed() {
        let mut runtime = MockRuntime::with_recast(100, 80.0, 90.0, 3);
        runtime.charges.insert((100, 0), 2);
        let reader = SpellReader::new(runtime);

        // 80s elapsed > 60s rescaled total
        let info = reader.adjusted_recast_info(100);
        assert_eq!(info.total, 0.0);
        assert_eq!(info.elapsed, 0.0);
        assert_eq!(info.max_charges, 2);
    }

    #[test]
    fn test_elapsed_and_total_follow_the_adjusted_id() {
        let mut runtime = MockRuntime::with_recast(200, 5.0, 30.0, 1);
        runtime.adjustments.insert(100, 200);
        let reader = SpellReader::new(runtime);

        // Asking about the base id reads the upgraded action's record
        assert_eq!(reader.recast_elapsed(100), 5.0);
        assert_eq!(reader.recast_total(100), 30.0);
    }

    #[test]
    fn test_can_use_follows_status_code() {
        let mut runtime = MockRuntime::default();
        runtime.status_code = 0;
        assert!(SpellReader::new(runtime).can_use(100, layout::object::EMPTY_ID));

        let mut runtime = MockRuntime::default();
        runtime.status_code = 572; // not enough resources
        assert!(!SpellReader::new(runtime).can_use(100, layout::object::EMPTY_ID));
    }

    #[test]
    fn test_only_the_out_of_range_code_means_unreachable() {
        let player = FakeObject::player(0x1001);
        let boss = FakeObject::battle_npc(0x2002);

        for (code, expected) in [
            (layout::range::IN_RANGE, true),
            (layout::range::NOT_FACING, true),
            (layout::range::NOT_IN_LOS, true),
            (layout::range::OUT_OF_RANGE, false),
        ] {
            let mut runtime = MockRuntime::default();
            runtime.range_code = code;
            let reader = SpellReader::new(runtime);
            assert_eq!(
                reader.in_range(100, Some(&player.as_object()), Some(&boss.as_object())),
                expected,
                "code {code}"
            );
        }
    }

    #[test]
    fn test_missing_actor_is_never_in_range() {
        let player = FakeObject::player(0x1001);
        let reader = SpellReader::new(MockRuntime::default());
        assert!(!reader.in_range(100, Some(&player.as_object()), None));
        assert!(!reader.in_range(100, None, None));
    }
}
