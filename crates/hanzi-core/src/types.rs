use serde::Serialize;

use crate::error::LoadError;

/// Recognized dataset columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    HanziSimplified,
    HanziTraditional,
    Pinyin,
    Meaning,
    MnemonicSimplified,
    MnemonicTraditional,
    Hsk,
}

/// Normalized header name -> column. Headers not listed here are dropped.
pub const COLUMN_TABLE: [(&str, Column); 7] = [
    ("hanzi_simplified", Column::HanziSimplified),
    ("hanzi_traditional", Column::HanziTraditional),
    ("pinyin", Column::Pinyin),
    ("meaning", Column::Meaning),
    ("mnemonic_simplified", Column::MnemonicSimplified),
    ("mnemonic_traditional", Column::MnemonicTraditional),
    ("hsk", Column::Hsk),
];

impl Column {
    /// Match a raw header, ignoring surrounding whitespace and case
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = header.trim().to_lowercase();
        COLUMN_TABLE
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, column)| *column)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::HanziSimplified => "hanzi_simplified",
            Column::HanziTraditional => "hanzi_traditional",
            Column::Pinyin => "pinyin",
            Column::Meaning => "meaning",
            Column::MnemonicSimplified => "mnemonic_simplified",
            Column::MnemonicTraditional => "mnemonic_traditional",
            Column::Hsk => "hsk",
        }
    }
}

/// One character entry. Every field is text; blank means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HanziRecord {
    #[serde(rename = "hanzi_simplified")]
    pub simplified_form: String,
    #[serde(rename = "hanzi_traditional")]
    pub traditional_form: String,
    #[serde(rename = "pinyin")]
    pub pronunciation: String,
    pub meaning: String,
    pub mnemonic_simplified: String,
    pub mnemonic_traditional: String,
    /// HSK tier label, blank when unclassified
    #[serde(rename = "hsk")]
    pub proficiency_level: String,
}

impl HanziRecord {
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::HanziSimplified => &self.simplified_form,
            Column::HanziTraditional => &self.traditional_form,
            Column::Pinyin => &self.pronunciation,
            Column::Meaning => &self.meaning,
            Column::MnemonicSimplified => &self.mnemonic_simplified,
            Column::MnemonicTraditional => &self.mnemonic_traditional,
            Column::Hsk => &self.proficiency_level,
        }
    }

    pub fn set_field(&mut self, column: Column, value: String) {
        let slot = match column {
            Column::HanziSimplified => &mut self.simplified_form,
            Column::HanziTraditional => &mut self.traditional_form,
            Column::Pinyin => &mut self.pronunciation,
            Column::Meaning => &mut self.meaning,
            Column::MnemonicSimplified => &mut self.mnemonic_simplified,
            Column::MnemonicTraditional => &mut self.mnemonic_traditional,
            Column::Hsk => &mut self.proficiency_level,
        };
        *slot = value;
    }

    /// Exact match of the simplified form against an already trimmed key
    pub fn matches(&self, key: &str) -> bool {
        self.simplified_form.trim() == key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// A line typed on the input surface
    Keyboard,
    /// A query passed on the command line
    Argument,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    TextInput { text: String, source: TextSource },
    /// The user edited the input without submitting
    InputChanged,
    DatasetReady { records: usize },
    DatasetFailed(LoadError),
    InputClosed,
    UiEvent(UiEvent),
}

/// Signals for the presentation side
#[derive(Debug, Clone)]
pub enum UiEvent {
    ShowRecord(HanziRecord),
    /// `hide_card` drops the current card so the error reverts to Welcome
    ShowError { reason: String, hide_card: bool },
    ClearError,
    /// Fired by the auto-dismiss timer for the error shown at `generation`
    DismissError { generation: u64 },
    Close,
}
