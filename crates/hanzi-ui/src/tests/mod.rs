use std::sync::{Arc, Mutex};

use hanzi_core::{HanziRecord, UiEvent};

use crate::presenter::Presenter;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Welcome,
    Record(String),
    Error(String),
    ClearError,
}

/// Presenter that records every signal it receives
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub signals: Arc<Mutex<Vec<Signal>>>,
}

impl RecordingPresenter {
    pub fn take(&self) -> Vec<Signal> {
        std::mem::take(&mut *self.signals.lock().unwrap())
    }

    fn push(&self, signal: Signal) {
        self.signals.lock().unwrap().push(signal);
    }
}

impl Presenter for RecordingPresenter {
    fn show_welcome(&mut self) {
        self.push(Signal::Welcome);
    }

    fn show_record(&mut self, record: &HanziRecord) {
        self.push(Signal::Record(record.simplified_form.clone()));
    }

    fn show_error(&mut self, reason: &str) {
        self.push(Signal::Error(reason.to_string()));
    }

    fn clear_error(&mut self) {
        self.push(Signal::ClearError);
    }
}

pub fn record(simplified: &str) -> HanziRecord {
    HanziRecord {
        simplified_form: simplified.to_string(),
        ..Default::default()
    }
}

pub fn error(reason: &str) -> UiEvent {
    UiEvent::ShowError {
        reason: reason.to_string(),
        hide_card: false,
    }
}
