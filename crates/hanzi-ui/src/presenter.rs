use std::io::{self, Write};

use hanzi_core::HanziRecord;
use hanzi_lang_chinese::hsk;

pub const WELCOME_TEXT: &str = "Type a simplified Chinese character and press Enter.";

/// Rendering surface driven by the result area
pub trait Presenter: Send {
    fn show_welcome(&mut self);
    fn show_record(&mut self, record: &HanziRecord);
    fn show_error(&mut self, reason: &str);
    fn clear_error(&mut self);
}

/// Plain text presenter for a terminal or any writer
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    error_visible: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error_visible: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    fn write_lines(&mut self, lines: &[String]) {
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{line}"))
            .and_then(|_| self.out.flush());

        if let Err(e) = result {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn show_welcome(&mut self) {
        self.write_lines(&[WELCOME_TEXT.to_string()]);
    }

    fn show_record(&mut self, record: &HanziRecord) {
        self.error_visible = false;
        self.write_lines(&render_card(record));
    }

    fn show_error(&mut self, reason: &str) {
        self.error_visible = true;
        self.write_lines(&[format!("! {reason}")]);
    }

    fn clear_error(&mut self) {
        // Errors scroll away on a terminal, nothing to erase
        self.error_visible = false;
    }
}

/// Card layout: blank optional fields stay blank, a blank level shows `N/A`
pub fn render_card(record: &HanziRecord) -> Vec<String> {
    let mut heading = record.simplified_form.trim().to_string();
    let traditional = record.traditional_form.trim();
    if !traditional.is_empty() {
        heading.push_str(&format!("  ({traditional})"));
    }

    vec![
        String::new(),
        format!("  {heading}"),
        format!("  Pinyin:                 {}", record.pronunciation.trim()),
        format!("  Meaning:                {}", record.meaning.trim()),
        format!("  Mnemonic (simplified):  {}", record.mnemonic_simplified.trim()),
        format!("  Mnemonic (traditional): {}", record.mnemonic_traditional.trim()),
        format!("  HSK:                    {}", hsk::badge(&record.proficiency_level)),
        String::new(),
    ]
}
