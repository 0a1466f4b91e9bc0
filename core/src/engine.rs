use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    #[default]
    None,
    Won,
}

impl RoundResult {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastOutcome {
    #[default]
    None,
    Miss,
}

/// Player input. Decodes from `{"type": "selected", "row": r, "col": c}` or `{"type": "replay"}`; any other
/// `type` becomes [`Action::Other`], which changes nothing. Selections may point anywhere, off-board ones are
/// misses.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Selected { row: ShotCoord, col: ShotCoord },
    Replay,
    #[serde(other)]
    Other,
}

impl Action {
    pub const fn selected((row, col): Coord2) -> Self {
        Self::Selected {
            row: row as ShotCoord,
            col: col as ShotCoord,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShotOutcome {
    NoChange,
    Missed,
    Won,
    Replayed,
}

impl ShotOutcome {
    pub const fn has_update(self) -> bool {
        use ShotOutcome::*;
        match self {
            NoChange => false,
            Missed => true,
            Won => true,
            Replayed => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    started_at: Option<DateTime<Utc>>,
    score: u32,
    shots_taken: ShotCount,
    shots_fired: Vec<Shot2>,
    history: History,
    result: RoundResult,
    target: Coord2,
    last_outcome: LastOutcome,
}

impl GameState {
    pub fn new(config: GameConfig, history: History, targets: &mut impl TargetSource) -> Self {
        Self {
            config,
            started_at: None,
            score: 0,
            shots_taken: 0,
            shots_fired: Vec::new(),
            history,
            result: RoundResult::None,
            target: targets.next_target(config),
            last_outcome: LastOutcome::None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid_size(&self) -> Coord {
        self.config.grid_size()
    }

    pub fn started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Reserved, never changes.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn shots_taken(&self) -> ShotCount {
        self.shots_taken
    }

    pub fn shots_fired(&self) -> &[Shot2] {
        &self.shots_fired
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn result(&self) -> RoundResult {
        self.result
    }

    pub fn target(&self) -> Coord2 {
        self.target
    }

    pub fn last_outcome(&self) -> LastOutcome {
        self.last_outcome
    }

    pub fn is_won(&self) -> bool {
        self.result.is_won()
    }

    /// Whether the board should announce a miss.
    pub fn shows_miss(&self) -> bool {
        self.last_outcome == LastOutcome::Miss && !self.is_won() && self.shots_taken != 0
    }

    /// Number of shots per cell on the board, shots outside the grid are left out.
    pub fn shot_counts(&self) -> Array2<u16> {
        let size = self.grid_size();
        let mut counts: Array2<u16> = Array2::zeros((size, size).to_nd_index());
        for coords in self.shots_fired.iter().filter_map(|&shot| board_coords(shot, size)) {
            let count = &mut counts[coords.to_nd_index()];
            *count = u16::saturating_add(*count, 1);
        }
        counts
    }

    /// Next state after `action`, leaving `self` untouched.
    pub fn reduce(&self, action: Action, now: DateTime<Utc>, targets: &mut impl TargetSource) -> Self {
        let mut next = self.clone();
        next.apply(action, now, targets);
        next
    }

    pub fn apply(&mut self, action: Action, now: DateTime<Utc>, targets: &mut impl TargetSource) -> ShotOutcome {
        match action {
            Action::Selected { row, col } => self.select((row, col), now),
            Action::Replay => {
                self.replay(targets);
                ShotOutcome::Replayed
            }
            Action::Other => ShotOutcome::NoChange,
        }
    }

    fn select(&mut self, shot: Shot2, now: DateTime<Utc>) -> ShotOutcome {
        if self.is_won() {
            return ShotOutcome::NoChange;
        }

        let started_at = *self.started_at.get_or_insert(now);

        let (row, col) = self.target;
        if shot == (ShotCoord::from(row), ShotCoord::from(col)) {
            self.shots_taken += 1;
            self.history.push(GameRecord::won(started_at, now, self.shots_taken));
            self.result = RoundResult::Won;
            log::debug!("target hit at {:?} after {} shots", shot, self.shots_taken);
            ShotOutcome::Won
        } else {
            self.last_outcome = LastOutcome::Miss;
            self.shots_taken += 1;
            self.shots_fired.push(shot);
            log::trace!("miss at {:?}", shot);
            ShotOutcome::Missed
        }
    }

    fn replay(&mut self, targets: &mut impl TargetSource) {
        let history = core::mem::take(&mut self.history);
        *self = Self::new(self.config, history, targets);
        log::debug!("new round on a {0}x{0} grid", self.grid_size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(1_650_000_000_000).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        t0() + TimeDelta::seconds(secs)
    }

    fn fresh(target: Coord2) -> GameState {
        GameState::new(GameConfig::new(5), History::new(), &mut FixedTarget(target))
    }

    fn won(target: Coord2) -> GameState {
        let mut state = fresh(target);
        state.apply(Action::selected(target), t0(), &mut FixedTarget(target));
        state
    }

    #[test]
    fn new_state_is_in_progress_and_not_started() {
        let state = fresh((2, 3));

        assert_eq!(state.result(), RoundResult::None);
        assert!(!state.started());
        assert_eq!(state.shots_taken(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.target(), (2, 3));
        assert_eq!(state.last_outcome(), LastOutcome::None);
    }

    #[test]
    fn miss_counts_the_shot_and_records_coords() {
        let state = fresh((2, 3));

        let next = state.reduce(Action::selected((0, 0)), t0(), &mut FixedTarget((4, 4)));

        assert_eq!(next.shots_taken(), state.shots_taken() + 1);
        assert_eq!(next.shots_fired(), &[(0, 0)]);
        assert_eq!(next.last_outcome(), LastOutcome::Miss);
        assert_eq!(next.result(), RoundResult::None);
        assert_eq!(next.target(), (2, 3));
        assert!(state.shots_fired().is_empty());
    }

    #[test]
    fn first_shot_stamps_start_time_once() {
        let mut state = fresh((2, 3));
        let mut targets = FixedTarget((2, 3));

        state.apply(Action::selected((0, 0)), at(0), &mut targets);
        state.apply(Action::selected((0, 1)), at(10), &mut targets);

        assert_eq!(state.started_at(), Some(at(0)));
        assert!(state.started());
    }

    #[test]
    fn repeated_miss_is_recorded_twice() {
        let mut state = fresh((2, 3));
        let mut targets = FixedTarget((2, 3));

        state.apply(Action::selected((0, 0)), t0(), &mut targets);
        state.apply(Action::selected((0, 0)), t0(), &mut targets);

        assert_eq!(state.shots_fired(), &[(0, 0), (0, 0)]);
        assert_eq!(state.shots_taken(), 2);
        assert_eq!(state.shot_counts()[[0, 0]], 2);
    }

    #[test]
    fn out_of_range_selection_is_a_miss() {
        let mut state = fresh((2, 3));

        let outcome = state.apply(Action::selected((9, 200)), t0(), &mut FixedTarget((2, 3)));

        assert_eq!(outcome, ShotOutcome::Missed);
        assert_eq!(state.shots_fired(), &[(9, 200)]);
        assert_eq!(state.shot_counts().iter().sum::<u16>(), 0);
    }

    #[test]
    fn hit_wins_and_appends_one_record() {
        let mut state = fresh((2, 3));
        let mut targets = FixedTarget((2, 3));
        state.apply(Action::selected((1, 1)), at(0), &mut targets);
        state.apply(Action::selected((4, 0)), at(30), &mut targets);

        let outcome = state.apply(Action::selected((2, 3)), at(75), &mut targets);

        assert_eq!(outcome, ShotOutcome::Won);
        assert_eq!(state.result(), RoundResult::Won);
        assert_eq!(state.shots_taken(), 3);
        assert_eq!(state.history().len(), 1);
        let record = state.history().last().unwrap();
        assert_eq!(record.shots, 3);
        assert_eq!(record.started_at, at(0));
        assert_eq!(record.ended_at, at(75));
        assert_eq!(record.duration, "01:15");
        assert_eq!(record.result, RecordResult::Won);
        assert_eq!(state.shots_fired(), &[(1, 1), (4, 0)]);
    }

    #[test]
    fn hit_on_first_shot_has_zero_duration() {
        let state = won((0, 0));

        let record = state.history().last().unwrap();
        assert_eq!(record.shots, 1);
        assert_eq!(record.duration, "00:00");
        assert_eq!(state.started_at(), Some(t0()));
    }

    #[test]
    fn won_state_ignores_selections() {
        let state = won((2, 3));

        for coords in [(2, 3), (0, 0), (255, 255)] {
            let next = state.reduce(Action::selected(coords), at(99), &mut FixedTarget((1, 1)));
            assert_eq!(next, state);
        }
    }

    #[test]
    fn unknown_action_changes_nothing() {
        let mut state = fresh((2, 3));
        let before = state.clone();

        assert_eq!(
            state.apply(Action::Other, t0(), &mut FixedTarget((0, 0))),
            ShotOutcome::NoChange
        );
        assert_eq!(state, before);
    }

    #[test]
    fn replay_resets_round_and_keeps_history() {
        let mut state = won((2, 3));
        state.apply(Action::Replay, t0(), &mut FixedTarget((0, 0)));
        state.apply(Action::selected((1, 1)), at(1), &mut FixedTarget((0, 0)));
        state.apply(Action::selected((0, 0)), at(2), &mut FixedTarget((0, 0)));
        let history = state.history().clone();

        let next = state.reduce(Action::Replay, at(3), &mut FixedTarget((4, 1)));

        assert_eq!(next.result(), RoundResult::None);
        assert!(next.shots_fired().is_empty());
        assert_eq!(next.shots_taken(), 0);
        assert_eq!(next.score(), 0);
        assert!(!next.started());
        assert_eq!(next.last_outcome(), LastOutcome::None);
        assert_eq!(next.target(), (4, 1));
        assert_eq!(next.grid_size(), 5);
        assert_eq!(next.history(), &history);
        assert_eq!(next.history().len(), 2);
    }

    #[test]
    fn replay_with_random_targets_stays_on_the_board() {
        let mut targets = RandomTargets::new(3);
        let mut state = GameState::new(GameConfig::new(4), History::new(), &mut targets);

        for _ in 0..100 {
            state = state.reduce(Action::Replay, t0(), &mut targets);
            assert!(in_bounds(state.target(), 4));
        }
    }

    #[test]
    fn miss_then_hit_then_frozen() {
        let mut targets = FixedTarget((2, 3));
        let state = fresh((2, 3));

        let state = state.reduce(Action::selected((0, 0)), at(0), &mut targets);
        assert_eq!(state.shots_taken(), 1);

        let state = state.reduce(Action::selected((2, 3)), at(5), &mut targets);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().last().unwrap().shots, 2);

        let frozen = state.reduce(Action::selected((1, 1)), at(9), &mut targets);
        assert_eq!(frozen, state);
    }

    #[test]
    fn miss_message_only_while_playing() {
        let mut state = fresh((2, 3));
        let mut targets = FixedTarget((2, 3));
        assert!(!state.shows_miss());

        state.apply(Action::selected((0, 0)), t0(), &mut targets);
        assert!(state.shows_miss());

        state.apply(Action::selected((2, 3)), t0(), &mut targets);
        assert!(!state.shows_miss());
    }

    #[test]
    fn actions_decode_from_tagged_json() {
        let selected: Action = serde_json::from_str(r#"{"type":"selected","row":2,"col":3}"#).unwrap();
        let replay: Action = serde_json::from_str(r#"{"type":"replay"}"#).unwrap();
        let other: Action = serde_json::from_str(r#"{"type":"surrender"}"#).unwrap();

        assert_eq!(selected, Action::selected((2, 3)));
        assert_eq!(replay, Action::Replay);
        assert_eq!(other, Action::Other);
    }

    #[test]
    fn decoded_off_board_selection_is_a_miss() {
        let mut state = fresh((2, 3));
        let action: Action = serde_json::from_str(r#"{"type":"selected","row":-1,"col":300}"#).unwrap();

        let outcome = state.apply(action, t0(), &mut FixedTarget((2, 3)));

        assert_eq!(outcome, ShotOutcome::Missed);
        assert_eq!(state.shots_fired(), &[(-1, 300)]);
        assert_eq!(state.shots_taken(), 1);
        assert_eq!(state.shot_counts().iter().sum::<u16>(), 0);
    }
}
