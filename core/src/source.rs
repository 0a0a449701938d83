//! Per-frame display snapshots.
//!
//! A frontend resolves a trigger once (see [`crate::lookup`]) and then
//! asks these functions every frame for the current numeric state of the
//! matched ids. Snapshots have no identity across frames; the caller
//! renders whatever it was handed and asks again.

use sigil_types::{DataValueKind, TriggerSource};

use crate::client::{ActionRuntime, ClientState, layout};
use crate::lookup::TriggerData;
use crate::recast::SpellReader;

/// One instant's state of one tracked trigger
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DataSource {
    pub trigger_id: u32,
    pub active: bool,
    pub in_range: bool,
    /// Seconds remaining (status) or until the next charge (cooldown)
    pub value: f32,
    pub stacks: i32,
    pub max_stacks: i32,
    pub icon: u16,
}

impl DataSource {
    /// Numeric field a display element binds to
    pub fn value_for(&self, kind: DataValueKind) -> f32 {
        match kind {
            DataValueKind::Value => self.value,
            DataValueKind::Stacks => self.stacks as f32,
            DataValueKind::MaxStacks => self.max_stacks as f32,
        }
    }

    /// Fixed sample snapshot shown while a trigger is being authored
    fn preview(triggers: &[TriggerData]) -> Self {
        Self {
            active: true,
            value: 10.0,
            stacks: 2,
            max_stacks: 2,
            icon: triggers.first().map_or(0, |trigger| trigger.icon),
            ..Self::default()
        }
    }
}

/// Snapshot of a status trigger: scan the selected actor's status list
/// for the first entry matching any of the trigger's resolved ids.
pub fn status_data(
    state: &ClientState,
    triggers: &[TriggerData],
    source: TriggerSource,
    only_mine: bool,
    preview: bool,
) -> DataSource {
    if preview {
        return DataSource::preview(triggers);
    }

    let Some(player) = state.local_player() else {
        return DataSource::default();
    };
    let Some(actor) = state.resolve_source(source) else {
        return DataSource::default();
    };

    let player_id = player.object_id();
    for trigger in triggers {
        for status in actor.statuses() {
            if u32::from(status.status_id) == trigger.id
                && (status.source_id == player_id || !only_mine)
            {
                return DataSource {
                    trigger_id: trigger.id,
                    active: true,
                    in_range: false,
                    // The client reports permanent statuses with negative
                    // remaining time
                    value: status.remaining.abs(),
                    stacks: i32::from(status.stacks),
                    max_stacks: i32::from(trigger.max_stacks),
                    icon: trigger.icon,
                };
            }
        }
    }

    DataSource::default()
}

/// Snapshot of a cooldown trigger: recast progress, charge count, and
/// usability of the first resolved entry.
pub fn cooldown_data<R: ActionRuntime>(
    reader: &SpellReader<R>,
    state: &ClientState,
    triggers: &[TriggerData],
    usable_gate: bool,
    range_gate: bool,
    preview: bool,
) -> DataSource {
    if preview {
        return DataSource::preview(triggers);
    }
    let Some(trigger) = triggers.first() else {
        return DataSource::default();
    };

    let info = reader.adjusted_recast_info(trigger.id);

    let stacks = if info.total == 0.0 {
        i32::from(info.max_charges)
    } else {
        (f32::from(info.max_charges) * (info.elapsed / info.total)) as i32
    };

    let charge_time = if info.max_charges != 0 {
        info.total / f32::from(info.max_charges)
    } else {
        info.total
    };

    let value = if charge_time != 0.0 {
        (info.total - info.elapsed).abs() % charge_time
    } else {
        0.0
    };

    DataSource {
        trigger_id: trigger.id,
        active: usable_gate && reader.can_use(trigger.id, layout::object::EMPTY_ID),
        in_range: range_gate
            && reader.in_range(
                trigger.id,
                state.local_player().as_ref(),
                state.target().as_ref(),
            ),
        value,
        stacks,
        max_stacks: i32::from(info.max_charges),
        icon: trigger.icon,
    }
}
