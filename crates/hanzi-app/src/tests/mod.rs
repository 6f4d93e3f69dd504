use std::sync::{Arc, Mutex};

use hanzi_core::HanziRecord;
use hanzi_ui::Presenter;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Welcome,
    Record(HanziRecord),
    Error(String),
    ClearError,
}

#[derive(Clone, Default)]
pub struct RecordingPresenter {
    signals: Arc<Mutex<Vec<Signal>>>,
}

impl RecordingPresenter {
    pub fn signals(&self) -> Vec<Signal> {
        self.signals.lock().unwrap().clone()
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
        self.push(Signal::Record(record.clone()));
    }

    fn show_error(&mut self, reason: &str) {
        self.push(Signal::Error(reason.to_string()));
    }

    fn clear_error(&mut self) {
        self.push(Signal::ClearError);
    }
}
