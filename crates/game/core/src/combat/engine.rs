//! Turn loop of a fight between one character and a group of monsters.
//!
//! # Turn order
//!
//! 1. pick a target (auto when only one monster is alive)
//! 2. the player hits it
//! 3. if monsters remain, each alive monster hits back in encounter order,
//!    stopping as soon as the player drops to zero or below
//! 4. check for defeat, then victory, then the turn limit
//!
//! The engine owns its copy of the player's health and the monster instances.
//! It never touches the character record; [`super::apply_outcome`] does that
//! from the finished [`CombatReport`].

use crate::env::RngOracle;
use crate::stats::CombatProfile;

use super::damage::{roll_monster_damage, roll_player_damage};
use super::{
    CombatEvent, CombatObserver, CombatSetupError, MonsterInstance, TargetCandidate,
    TargetSelector,
};

/// How a finished fight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    /// Every monster is dead and the player still stands.
    Victory,
    /// The player's health reached zero or below.
    Defeat,
    /// The turn limit passed and the monsters fled.
    Stalemate,
}

/// Lifecycle of a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatState {
    Ongoing,
    Finished(CombatOutcome),
}

impl CombatState {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub fn outcome(self) -> Option<CombatOutcome> {
        match self {
            Self::Ongoing => None,
            Self::Finished(outcome) => Some(outcome),
        }
    }
}

/// Chooses targets and hears about events. One value plays both roles so an
/// interactive front end can prompt and narrate from the same place.
pub trait CombatController: TargetSelector + CombatObserver {}

impl<T: TargetSelector + CombatObserver + ?Sized> CombatController for T {}

/// Pairs a separate selector and observer into one controller.
#[derive(Debug, Default)]
pub struct Controller<S, O> {
    pub selector: S,
    pub observer: O,
}

impl<S, O> Controller<S, O> {
    pub fn new(selector: S, observer: O) -> Self {
        Self { selector, observer }
    }
}

impl<S: TargetSelector, O> TargetSelector for Controller<S, O> {
    fn select_target(&mut self, turn: u32, candidates: &[TargetCandidate<'_>]) -> Option<usize> {
        self.selector.select_target(turn, candidates)
    }

    fn name(&self) -> &'static str {
        self.selector.name()
    }
}

impl<S, O: CombatObserver> CombatObserver for Controller<S, O> {
    fn on_event(&mut self, event: &CombatEvent) {
        self.observer.on_event(event);
    }
}

/// Everything the caller needs once the fight is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatReport {
    pub outcome: CombatOutcome,
    /// Player health after the last blow. May be negative.
    pub final_health: i32,
    /// Number of turns actually played.
    pub turns: u32,
    pub monsters: Vec<MonsterInstance>,
    pub events: Vec<CombatEvent>,
}

/// Resolves a single fight.
#[derive(Clone, Debug)]
pub struct CombatEngine {
    profile: CombatProfile,
    health: i32,
    monsters: Vec<MonsterInstance>,
    turn: u32,
    turns_played: u32,
    turn_limit: u32,
    state: CombatState,
    events: Vec<CombatEvent>,
}

impl CombatEngine {
    /// Set up a fight.
    ///
    /// A player starting at zero health or below has already lost.
    ///
    /// # Errors
    ///
    /// [`CombatSetupError::NoMonsters`] if `monsters` is empty.
    pub fn new(
        profile: CombatProfile,
        health: i32,
        monsters: Vec<MonsterInstance>,
        turn_limit: u32,
    ) -> Result<Self, CombatSetupError> {
        if monsters.is_empty() {
            return Err(CombatSetupError::NoMonsters {
                name: String::from("encounter"),
            });
        }
        let state = if health <= 0 {
            CombatState::Finished(CombatOutcome::Defeat)
        } else {
            CombatState::Ongoing
        };
        Ok(Self {
            profile,
            health,
            monsters,
            turn: 1,
            turns_played: 0,
            turn_limit,
            state,
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn monsters(&self) -> &[MonsterInstance] {
        &self.monsters
    }

    pub fn alive_count(&self) -> usize {
        self.monsters.iter().filter(|m| m.alive).count()
    }

    /// Play turns until the fight ends.
    pub fn run<C>(mut self, rng: &mut dyn RngOracle, controller: &mut C) -> CombatReport
    where
        C: CombatController + ?Sized,
    {
        if let (CombatState::Finished(outcome), 0) = (self.state, self.turns_played) {
            self.emit(controller, CombatEvent::CombatEnded { outcome });
        }
        loop {
            if let CombatState::Finished(outcome) = self.step(rng, controller) {
                return self.build_report(outcome);
            }
        }
    }

    /// Play one full turn. Does nothing once the fight is over.
    pub fn step<C>(&mut self, rng: &mut dyn RngOracle, controller: &mut C) -> CombatState
    where
        C: CombatController + ?Sized,
    {
        if self.state.is_finished() {
            return self.state;
        }

        self.emit(controller, CombatEvent::TurnStarted { turn: self.turn });

        let target = self.choose_target(controller);
        self.player_attack(target, rng, controller);

        if self.alive_count() > 0 {
            self.monsters_attack(rng, controller);
        }

        self.turns_played += 1;
        self.state = self.evaluate();
        if let CombatState::Finished(outcome) = self.state {
            if outcome == CombatOutcome::Stalemate {
                let turns = self.turns_played;
                self.emit(controller, CombatEvent::MonstersFled { turns });
            }
            self.emit(controller, CombatEvent::CombatEnded { outcome });
        }
        self.state
    }

    /// Freeze the fight into a report.
    ///
    /// Returns `None` while the fight is still going.
    pub fn into_report(self) -> Option<CombatReport> {
        let outcome = self.state.outcome()?;
        Some(self.build_report(outcome))
    }

    fn build_report(self, outcome: CombatOutcome) -> CombatReport {
        CombatReport {
            outcome,
            final_health: self.health,
            turns: self.turns_played,
            monsters: self.monsters,
            events: self.events,
        }
    }

    // ========================================================================
    // Turn phases
    // ========================================================================

    fn choose_target<C>(&mut self, controller: &mut C) -> usize
    where
        C: CombatController + ?Sized,
    {
        let (target, fallback) = {
            let candidates: Vec<TargetCandidate<'_>> = self
                .monsters
                .iter()
                .enumerate()
                .filter(|(_, m)| m.alive)
                .map(|(instance, m)| TargetCandidate {
                    instance,
                    name: &m.display_name,
                    current_health: m.current_health,
                    max_health: m.max_health,
                })
                .collect();

            match candidates.as_slice() {
                [] => (0, None),
                [only] => (only.instance, None),
                [first, ..] => {
                    let requested = controller.select_target(self.turn, &candidates);
                    match requested.and_then(|position| candidates.get(position)) {
                        Some(chosen) => (chosen.instance, None),
                        None => (
                            first.instance,
                            Some(CombatEvent::TargetFallback {
                                requested,
                                target: first.name.to_owned(),
                            }),
                        ),
                    }
                }
            }
        };

        if let Some(event) = fallback {
            self.emit(controller, event);
        }
        target
    }

    fn player_attack<C>(&mut self, target: usize, rng: &mut dyn RngOracle, controller: &mut C)
    where
        C: CombatController + ?Sized,
    {
        let damage = roll_player_damage(self.profile.attack, rng);
        let monster = &mut self.monsters[target];
        let killed = monster.take_damage(damage);
        let attacked = CombatEvent::PlayerAttacked {
            target: monster.display_name.clone(),
            damage,
            remaining: monster.current_health,
        };
        let defeated = killed.then(|| CombatEvent::MonsterDefeated {
            name: monster.display_name.clone(),
        });

        self.emit(controller, attacked);
        if let Some(event) = defeated {
            self.emit(controller, event);
        }
    }

    fn monsters_attack<C>(&mut self, rng: &mut dyn RngOracle, controller: &mut C)
    where
        C: CombatController + ?Sized,
    {
        for index in 0..self.monsters.len() {
            if !self.monsters[index].alive {
                continue;
            }
            let damage = roll_monster_damage(self.profile.defense, rng);
            self.health -= damage;
            let event = CombatEvent::MonsterAttacked {
                attacker: self.monsters[index].display_name.clone(),
                damage,
                player_health: self.health,
            };
            self.emit(controller, event);
            if self.health <= 0 {
                break;
            }
        }
    }

    fn evaluate(&mut self) -> CombatState {
        if self.health <= 0 {
            return CombatState::Finished(CombatOutcome::Defeat);
        }
        if self.alive_count() == 0 {
            return CombatState::Finished(CombatOutcome::Victory);
        }
        self.turn += 1;
        if self.turn > self.turn_limit {
            return CombatState::Finished(CombatOutcome::Stalemate);
        }
        CombatState::Ongoing
    }

    fn emit<C>(&mut self, controller: &mut C, event: CombatEvent)
    where
        C: CombatController + ?Sized,
    {
        controller.on_event(&event);
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{FirstAliveTarget, instantiate};
    use crate::env::{PcgRng, SequenceRng};
    use crate::state::MonsterTemplate;

    fn profile(attack: i32, defense: i32) -> CombatProfile {
        CombatProfile {
            max_health: 100,
            attack,
            defense,
        }
    }

    fn pack(name: &str, health: i32, count: u32) -> Vec<MonsterInstance> {
        instantiate(&MonsterTemplate::new(name, health), count)
    }

    /// Replays fixed answers and counts how often it was asked.
    struct Script {
        answers: Vec<Option<usize>>,
        asked: usize,
    }

    impl TargetSelector for Script {
        fn select_target(
            &mut self,
            _turn: u32,
            _candidates: &[TargetCandidate<'_>],
        ) -> Option<usize> {
            let answer = self.answers.get(self.asked).copied().flatten();
            self.asked += 1;
            answer
        }

        fn name(&self) -> &'static str {
            "Script"
        }
    }

    #[test]
    fn single_monster_falls_in_two_turns() {
        let engine = CombatEngine::new(profile(7, 4), 20, pack("Goblin", 10, 1), 30).unwrap();
        let mut rng = SequenceRng::constant(0);
        let report = engine.run(&mut rng, &mut Controller::new(FirstAliveTarget, ()));

        assert_eq!(report.outcome, CombatOutcome::Victory);
        assert_eq!(report.turns, 2);
        assert_eq!(report.final_health, 19);
        assert_eq!(
            report.events,
            vec![
                CombatEvent::TurnStarted { turn: 1 },
                CombatEvent::PlayerAttacked {
                    target: "Goblin 1".into(),
                    damage: 7,
                    remaining: 3,
                },
                CombatEvent::MonsterAttacked {
                    attacker: "Goblin 1".into(),
                    damage: 1,
                    player_health: 19,
                },
                CombatEvent::TurnStarted { turn: 2 },
                CombatEvent::PlayerAttacked {
                    target: "Goblin 1".into(),
                    damage: 7,
                    remaining: -4,
                },
                CombatEvent::MonsterDefeated {
                    name: "Goblin 1".into(),
                },
                CombatEvent::CombatEnded {
                    outcome: CombatOutcome::Victory,
                },
            ]
        );
    }

    #[test]
    fn death_mid_turn_skips_remaining_counter_attacks() {
        let engine = CombatEngine::new(profile(5, 0), 3, pack("Orc", 50, 2), 30).unwrap();
        let mut rng = SequenceRng::new(vec![0, 6, 6]);
        let report = engine.run(&mut rng, &mut Controller::new(FirstAliveTarget, ()));

        assert_eq!(report.outcome, CombatOutcome::Defeat);
        assert_eq!(report.final_health, -3);
        assert_eq!(report.turns, 1);
        let hits = report
            .events
            .iter()
            .filter(|e| matches!(e, CombatEvent::MonsterAttacked { .. }))
            .count();
        assert_eq!(hits, 1);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn turn_limit_ends_in_stalemate() {
        let engine = CombatEngine::new(profile(1, 100), 1000, pack("Golem", 1000, 1), 30).unwrap();
        let mut rng = SequenceRng::constant(0);
        let report = engine.run(&mut rng, &mut Controller::new(FirstAliveTarget, ()));

        assert_eq!(report.outcome, CombatOutcome::Stalemate);
        assert_eq!(report.turns, 30);
        assert_eq!(report.final_health, 970);
        assert!(report.monsters[0].alive);
        let tail = &report.events[report.events.len() - 2..];
        assert_eq!(
            tail,
            [
                CombatEvent::MonstersFled { turns: 30 },
                CombatEvent::CombatEnded {
                    outcome: CombatOutcome::Stalemate,
                },
            ]
        );
    }

    #[test]
    fn instances_are_targeted_independently_with_fallback() {
        let engine = CombatEngine::new(profile(10, 0), 100, pack("Goblin", 10, 3), 30).unwrap();
        let mut rng = SequenceRng::constant(0);
        let mut controller = Controller::new(
            Script {
                answers: vec![Some(2), Some(5)],
                asked: 0,
            },
            Vec::new(),
        );
        let report = engine.run(&mut rng, &mut controller);

        assert_eq!(report.outcome, CombatOutcome::Victory);
        assert_eq!(report.turns, 3);
        assert_eq!(controller.selector.asked, 2);
        assert_eq!(controller.observer, report.events);

        let defeated: Vec<_> = report
            .events
            .iter()
            .filter_map(|e| match e {
                CombatEvent::MonsterDefeated { name } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(defeated, ["Goblin 3", "Goblin 1", "Goblin 2"]);
        assert!(report.events.contains(&CombatEvent::TargetFallback {
            requested: Some(5),
            target: "Goblin 1".into(),
        }));
        // 2 attackers on turn 1, 1 attacker on turn 2, none on turn 3.
        assert_eq!(report.final_health, 100 - 2 * 2 - 2);
    }

    #[test]
    fn starting_dead_is_an_immediate_defeat() {
        let engine = CombatEngine::new(profile(10, 0), 0, pack("Rat", 2, 1), 30).unwrap();
        assert_eq!(engine.state(), CombatState::Finished(CombatOutcome::Defeat));

        let mut rng = SequenceRng::constant(0);
        let report = engine.run(&mut rng, &mut Controller::new(FirstAliveTarget, ()));
        assert_eq!(report.turns, 0);
        assert_eq!(report.final_health, 0);
        assert_eq!(
            report.events,
            vec![CombatEvent::CombatEnded {
                outcome: CombatOutcome::Defeat
            }]
        );
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn empty_encounter_is_rejected() {
        assert!(matches!(
            CombatEngine::new(profile(5, 5), 10, Vec::new(), 30),
            Err(CombatSetupError::NoMonsters { .. })
        ));
    }

    #[test]
    fn step_reports_progress_and_into_report_waits_for_the_end() {
        let mut engine = CombatEngine::new(profile(7, 4), 20, pack("Goblin", 10, 1), 30).unwrap();
        let mut rng = SequenceRng::constant(0);
        let mut controller = Controller::new(FirstAliveTarget, ());

        assert_eq!(engine.step(&mut rng, &mut controller), CombatState::Ongoing);
        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.clone().into_report(), None);

        let state = engine.step(&mut rng, &mut controller);
        assert_eq!(state, CombatState::Finished(CombatOutcome::Victory));
        assert_eq!(engine.step(&mut rng, &mut controller), state);
        assert_eq!(engine.into_report().map(|r| r.turns), Some(2));
    }

    #[test]
    fn random_fights_terminate_with_one_consistent_outcome() {
        for seed in 0..200u64 {
            let mut rng = PcgRng::new(seed);
            let attack = 1 + (seed % 9) as i32;
            let defense = (seed % 7) as i32;
            let count = 1 + (seed % 4) as u32;
            let health = 5 + (seed % 40) as i32;
            let engine =
                CombatEngine::new(profile(attack, defense), health, pack("Imp", 12, count), 30)
                    .unwrap();
            let report = engine.run(&mut rng, &mut Controller::new(FirstAliveTarget, ()));

            assert!(report.turns <= 30);
            match report.outcome {
                CombatOutcome::Victory => {
                    assert!(report.final_health > 0);
                    assert!(report.monsters.iter().all(|m| !m.alive));
                }
                CombatOutcome::Defeat => assert!(report.final_health <= 0),
                CombatOutcome::Stalemate => {
                    assert!(report.final_health > 0);
                    assert!(report.monsters.iter().any(|m| m.alive));
                    assert_eq!(report.turns, 30);
                }
            }

            let mut last = health;
            for event in &report.events {
                if let CombatEvent::MonsterAttacked {
                    damage,
                    player_health,
                    ..
                } = event
                {
                    assert!(*damage >= 1);
                    assert!(*player_health < last);
                    last = *player_health;
                }
                if let CombatEvent::PlayerAttacked { damage, .. } = event {
                    assert!(*damage >= 1);
                }
            }
        }
    }
}
