//! Headless run of one roster through one tower.

use tower_content::{EquipmentCatalog, NamePool};
use tower_core::{
    Activity, Dude, DudeId, Env, Equipment, GameConfig, MessageKind, MessageSink, PcgRng,
    derive_seed, weighted_random_profession_kind,
};

use crate::config::SimConfig;
use crate::error::{Result, RuntimeError};
use crate::feed::{FloatingTextBuffer, MessageLog};
use crate::tower::Tower;

/// Seed streams, one per subsystem.
const ROSTER_STREAM: u64 = 0;
const TICK_STREAM: u64 = 1;
const LAYOUT_STREAM: u64 = 2;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Outcome {
    /// Every living dude walked out through the portal.
    Won,
    /// Nobody is left alive inside and nobody made it out.
    Lost,
    TimedOut,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub seed: u64,
    pub ticks: u64,
    /// Gold collected from the dudes that made it out.
    pub gold: i32,
    /// Inventory collected from the dudes that made it out.
    pub items: Vec<Equipment>,
    pub survivors: Vec<Dude>,
    pub fallen: Vec<Dude>,
}

pub struct Simulation {
    config: GameConfig,
    seed: u64,
    max_ticks: u64,
    rng: PcgRng,
    tower: Tower,
    messages: MessageLog,
    texts: FloatingTextBuffer,
    ticks: u64,
}

impl Simulation {
    /// Builds the tower and roster for `seed` and drops the roster in.
    pub fn new(
        settings: &SimConfig,
        config: GameConfig,
        catalog: EquipmentCatalog,
        names: &mut NamePool,
        seed: u64,
    ) -> Result<Self> {
        if settings.dudes == 0 {
            return Err(RuntimeError::NoDudes);
        }

        let mut roster_rng = PcgRng::new(derive_seed(seed, ROSTER_STREAM));
        let mut roster: Vec<Dude> = Vec::with_capacity(settings.dudes);
        for index in 0..settings.dudes {
            let profession = weighted_random_profession_kind(&roster, &mut roster_rng);
            let name = names.draw(&mut roster_rng);
            let mut dude = Dude::new(
                DudeId(index as u32 + 1),
                name,
                profession,
                1,
                &catalog,
                &config,
                &mut roster_rng,
            )?;
            dude.set_invincible(settings.invincible);
            roster.push(dude);
        }

        let mut layout_rng = PcgRng::new(derive_seed(seed, LAYOUT_STREAM));
        let mut tower = Tower::generate(
            settings.stories,
            settings.rooms_per_story,
            catalog,
            &mut layout_rng,
        )?;
        tower.enter(roster, &config);

        tracing::info!(
            seed,
            stories = settings.stories,
            rooms = settings.rooms_per_story,
            dudes = settings.dudes,
            "simulation ready"
        );

        Ok(Self {
            config,
            seed,
            max_ticks: settings.max_ticks,
            rng: PcgRng::new(derive_seed(seed, TICK_STREAM)),
            tower,
            messages: MessageLog::new(settings.message_capacity),
            texts: FloatingTextBuffer::new(),
            ticks: 0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn texts(&self) -> &FloatingTextBuffer {
        &self.texts
    }

    /// Runs one tick. Returns the outcome once the run is over.
    pub fn step(&mut self) -> Option<Outcome> {
        if let Some(outcome) = self.outcome() {
            return Some(outcome);
        }

        self.ticks += 1;
        let mut env = Env::new(
            &self.config,
            &mut self.rng,
            &mut self.messages,
            &mut self.texts,
        );
        for activity in self.tower.tick(&mut env) {
            match activity {
                Activity::DudeDied { dude } => {
                    tracing::debug!(%dude, tick = self.ticks, "dude removed from the active roster");
                }
            }
        }
        for (dude, views) in self.tower.changes() {
            tracing::trace!(%dude, ?views, tick = self.ticks, "views changed");
        }
        self.texts.age();

        self.outcome()
    }

    fn outcome(&self) -> Option<Outcome> {
        if self.tower.active_count() == 0 {
            return Some(if self.tower.returned().is_empty() {
                Outcome::Lost
            } else {
                Outcome::Won
            });
        }
        (self.ticks >= self.max_ticks).then_some(Outcome::TimedOut)
    }

    /// Ticks until the run ends, then collects the loot of every dude that
    /// made it out.
    pub fn run(mut self) -> RunSummary {
        let outcome = loop {
            if let Some(outcome) = self.step() {
                break outcome;
            }
        };

        let (mut survivors, inside) = self.tower.drain();
        let (fallen, stranded): (Vec<Dude>, Vec<Dude>) =
            inside.into_iter().partition(|dude| dude.is_dead());
        if !stranded.is_empty() {
            tracing::warn!(count = stranded.len(), "dudes still inside when the run stopped");
        }

        let gold: i32 = survivors.iter_mut().map(Dude::take_gold).sum();
        let items: Vec<Equipment> = survivors
            .iter_mut()
            .flat_map(Dude::take_inventory)
            .collect();
        if gold > 0 {
            self.messages
                .push_message(MessageKind::Loot, format!("Collected {gold} gold from dudes."));
        }
        if !items.is_empty() {
            self.messages.push_message(
                MessageKind::Loot,
                format!("Collected {} items from dudes.", items.len()),
            );
        }

        tracing::info!(%outcome, ticks = self.ticks, gold, items = items.len(), "run finished");

        survivors.extend(stranded);
        RunSummary {
            outcome,
            seed: self.seed,
            ticks: self.ticks,
            gold,
            items,
            survivors,
            fallen,
        }
    }
}
