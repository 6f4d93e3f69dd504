use hanzi_core::HanziRecord;

use crate::presenter::Presenter;

/// What the result area is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Card(HanziRecord),
    Error(String),
}

/// Result area state machine.
///
/// Every transition bumps `generation`. A dismissal only reverts the error
/// it was scheduled for: if anything happened in between, the generation no
/// longer matches and the dismissal is dropped.
pub struct ResultArea<P: Presenter> {
    presenter: P,
    screen: Screen,
    /// Welcome or Card, restored when an error goes away
    previous: Screen,
    generation: u64,
}

impl<P: Presenter> ResultArea<P> {
    pub fn new(mut presenter: P) -> Self {
        presenter.show_welcome();

        Self {
            presenter,
            screen: Screen::Welcome,
            previous: Screen::Welcome,
            generation: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn show_record(&mut self, record: HanziRecord) {
        self.generation += 1;
        self.presenter.show_record(&record);
        if matches!(self.screen, Screen::Error(_)) {
            self.presenter.clear_error();
        }
        self.previous = Screen::Card(record.clone());
        self.screen = Screen::Card(record);
    }

    /// Returns the generation a dismissal must carry to revert this error
    pub fn show_error(&mut self, reason: String) -> u64 {
        self.generation += 1;
        self.presenter.show_error(&reason);
        self.screen = Screen::Error(reason);
        self.generation
    }

    /// Drop the current card. Welcome is shown in its place and is what a
    /// following error reverts to.
    pub fn hide_card(&mut self) {
        if !matches!(self.previous, Screen::Card(_)) {
            return;
        }

        self.generation += 1;
        self.presenter.show_welcome();
        self.previous = Screen::Welcome;
        if matches!(self.screen, Screen::Card(_)) {
            self.screen = Screen::Welcome;
        }
    }

    /// Timer-driven revert. Returns false for stale dismissals.
    pub fn dismiss_error(&mut self, generation: u64) -> bool {
        if generation != self.generation || !matches!(self.screen, Screen::Error(_)) {
            return false;
        }

        self.restore();
        true
    }

    /// Input-driven revert, regardless of any pending timer
    pub fn clear_error(&mut self) {
        if matches!(self.screen, Screen::Error(_)) {
            self.generation += 1;
            self.restore();
        }
    }

    fn restore(&mut self) {
        self.presenter.clear_error();
        self.screen = self.previous.clone();
    }
}
