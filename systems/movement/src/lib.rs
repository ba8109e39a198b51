#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic movement system that replays adventurer scripts.
//!
//! Adventurers act strictly one after another in declaration order, and each
//! one runs its whole script before the next starts. The system proposes a
//! single world command per script step; the world applies it and refreshes
//! its occupancy index before the next step is proposed, so every collision
//! check sees all adventurers at their latest positions.

use treasure_hunt_core::{AdventurerId, Command, Event, MoveCommand, Obstacle};
use treasure_hunt_world::{self as world, query, Adventurer, Terrain};
use tracing::{debug, info};

/// Pure system that walks through adventurer scripts and emits world commands.
#[derive(Debug, Default)]
pub struct Movement {
    cursor: ScriptCursor,
}

impl Movement {
    /// Emits the command for the next pending script step, if any remains.
    ///
    /// Returns `false` once every script has been exhausted.
    pub fn handle(&mut self, adventurers: &[Adventurer], out: &mut Vec<Command>) -> bool {
        while let Some(adventurer) = adventurers.get(self.cursor.adventurer) {
            if let Some(step) = adventurer.script().get(self.cursor.step) {
                self.cursor.step += 1;
                out.push(command_for(adventurer.id(), *step));
                return true;
            }
            self.cursor.next_adventurer();
        }
        false
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct ScriptCursor {
    adventurer: usize,
    step: usize,
}

impl ScriptCursor {
    fn next_adventurer(&mut self) {
        self.adventurer += 1;
        self.step = 0;
    }
}

fn command_for(adventurer: AdventurerId, step: MoveCommand) -> Command {
    match step {
        MoveCommand::Advance => Command::Advance { adventurer },
        MoveCommand::Turn(rotation) => Command::Turn {
            adventurer,
            rotation,
        },
    }
}

/// Replays every adventurer script against the terrain, mutating it in place.
///
/// Returns the full event log in the order events were produced.
pub fn play(terrain: &mut Terrain) -> Vec<Event> {
    let mut movement = Movement::default();
    let mut commands = Vec::new();
    let mut log = Vec::new();
    let mut events = Vec::new();

    loop {
        commands.clear();
        if !movement.handle(query::adventurers(terrain), &mut commands) {
            break;
        }

        for command in commands.drain(..) {
            events.clear();
            world::apply(terrain, command, &mut events);
            trace_events(terrain, &events);
            log.append(&mut events);
        }
    }

    let summary = PlaySummary::from_events(&log);
    info!(
        steps = summary.steps,
        advances = summary.advances,
        blocked = summary.blocked,
        pickups = summary.pickups,
        "play finished"
    );
    log
}

fn trace_events(terrain: &Terrain, events: &[Event]) {
    for event in events {
        match event {
            Event::AdventurerBlocked {
                adventurer,
                at,
                obstacle,
            } => {
                let name = adventurer_name(terrain, *adventurer);
                let obstacle = match obstacle {
                    Obstacle::Boundary => "boundary",
                    Obstacle::Mountain => "mountain",
                    Obstacle::Adventurer(_) => "adventurer",
                };
                debug!(
                    adventurer = name,
                    column = at.column(),
                    row = at.row(),
                    obstacle,
                    "advance blocked"
                );
            }
            Event::TreasureCollected {
                adventurer,
                cell,
                remaining,
            } => {
                debug!(
                    adventurer = adventurer_name(terrain, *adventurer),
                    column = cell.column(),
                    row = cell.row(),
                    remaining,
                    "treasure collected"
                );
            }
            _ => {}
        }
    }
}

fn adventurer_name(terrain: &Terrain, adventurer: AdventurerId) -> &str {
    query::adventurer(terrain, adventurer).map_or("?", Adventurer::name)
}

/// Tally of what happened during a play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaySummary {
    /// Script steps executed (turns and advance attempts).
    pub steps: usize,
    /// Advances that changed an adventurer's cell.
    pub advances: usize,
    /// Advances refused by a boundary, mountain or adventurer.
    pub blocked: usize,
    /// Treasure units picked up.
    pub pickups: usize,
}

impl PlaySummary {
    /// Tallies an event log produced by [`play`].
    #[must_use]
    pub fn from_events(events: &[Event]) -> Self {
        let mut summary = Self::default();
        for event in events {
            match event {
                Event::AdventurerTurned { .. } => summary.steps += 1,
                Event::AdventurerAdvanced { .. } => {
                    summary.steps += 1;
                    summary.advances += 1;
                }
                Event::AdventurerBlocked { .. } => {
                    summary.steps += 1;
                    summary.blocked += 1;
                }
                Event::TreasureCollected { .. } => summary.pickups += 1,
                _ => {}
            }
        }
        summary
    }
}
