use tictactoe_engine::GameStatus;

/// Running tally across rounds. Lives only for the process lifetime; there
/// is no on-disk game history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
