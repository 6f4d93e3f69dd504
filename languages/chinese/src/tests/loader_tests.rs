use async_trait::async_trait;
use hanzi_core::dictionary::{DatasetSource, Dictionary};
use hanzi_core::{Column, LoadError, LookupError};

use crate::dictionary::SharedDataset;
use crate::loader::HanziLoader;

const FULL_CSV: &str = "\
hanzi_simplified,hanzi_traditional,pinyin,meaning,mnemonic_simplified,mnemonic_traditional,hsk
学,學,xué,to study,a child under a roof,,1
爱,愛,ài,love,,a heart inside,2

马,馬,mǎ,horse,,,
学,學,xiáo,duplicate,,,9
";

struct StaticSource(&'static str);

#[async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.0.as_bytes().to_vec())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

struct BrokenSource;

#[async_trait]
impl DatasetSource for BrokenSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Err(LoadError::ResourceUnreachable {
            location: "nowhere".to_string(),
            reason: "connection refused".to_string(),
        })
    }

    fn location(&self) -> String {
        "nowhere".to_string()
    }
}

#[test]
fn parses_all_columns_in_order() {
    let parsed = HanziLoader::parse(FULL_CSV.as_bytes()).unwrap();
    let records = parsed.dataset.records();

    assert!(parsed.warnings.is_empty());
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].simplified_form, "学");
    assert_eq!(records[0].traditional_form, "學");
    assert_eq!(records[0].mnemonic_simplified, "a child under a roof");
    assert_eq!(records[0].proficiency_level, "1");
    assert_eq!(records[1].mnemonic_traditional, "a heart inside");
    assert_eq!(records[2].proficiency_level, "");
    assert_eq!(parsed.dataset.columns().len(), 7);
}

#[test]
fn minimal_header_leaves_other_fields_blank() {
    let parsed = HanziLoader::parse("hanzi_simplified,pinyin,meaning\n学,xué,to study\n".as_bytes())
        .unwrap();
    let record = parsed.dataset.lookup("学").unwrap();

    assert_eq!(record.pronunciation, "xué");
    assert_eq!(record.meaning, "to study");
    assert_eq!(record.traditional_form, "");
    assert_eq!(record.proficiency_level, "");
    assert_eq!(
        parsed.dataset.columns(),
        &[Column::HanziSimplified, Column::Pinyin, Column::Meaning]
    );
}

#[test]
fn headers_are_trimmed_and_lowercased() {
    let csv = " Hanzi_Simplified , PINYIN , HSK \n学,xué,3\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();
    let record = &parsed.dataset.records()[0];

    assert_eq!(record.simplified_form, "学");
    assert_eq!(record.pronunciation, "xué");
    assert_eq!(record.proficiency_level, "3");
}

#[test]
fn unknown_and_misspelled_columns_are_dropped() {
    let csv = "hanzi_simplified,notes,meanings,pinyin\n学,remember this,to study,xué\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();
    let record = &parsed.dataset.records()[0];

    assert_eq!(record.meaning, "");
    assert_eq!(record.pronunciation, "xué");
    assert_eq!(
        parsed.dataset.columns(),
        &[Column::HanziSimplified, Column::Pinyin]
    );
    let json = serde_json::to_value(record).unwrap();
    assert!(json.get("notes").is_none());
}

#[test]
fn values_are_trimmed() {
    let csv = "hanzi_simplified,meaning\n  学  ,  to study \t\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();
    let record = &parsed.dataset.records()[0];

    assert_eq!(record.simplified_form, "学");
    assert_eq!(record.meaning, "to study");
}

#[test]
fn quoted_fields_keep_commas() {
    let csv = "hanzi_simplified,meaning\n学,\"to study, to learn\"\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();
    assert_eq!(parsed.dataset.records()[0].meaning, "to study, to learn");
}

#[test]
fn malformed_rows_are_skipped_with_warnings() {
    let csv = "hanzi_simplified,pinyin\n学,xué\n坏\n好,hǎo,extra\n爱,ài\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();

    let simplified: Vec<&str> = parsed
        .dataset
        .records()
        .iter()
        .map(|r| r.simplified_form.as_str())
        .collect();
    assert_eq!(simplified, vec!["学", "爱"]);
    assert_eq!(parsed.warnings.len(), 2);
    assert_eq!(parsed.warnings[0].line, Some(3));
    assert!(parsed.warnings[0].message.contains("expected 2 fields"));
}

#[test]
fn byte_order_mark_is_ignored() {
    let csv = "\u{feff}hanzi_simplified,pinyin\n学,xué\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();
    assert_eq!(parsed.dataset.records()[0].simplified_form, "学");
}

#[test]
fn later_duplicate_header_wins() {
    let csv = "pinyin,PINYIN,hanzi_simplified\nold,new,学\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();
    assert_eq!(parsed.dataset.records()[0].pronunciation, "new");
    assert_eq!(parsed.dataset.columns(), &[Column::Pinyin, Column::HanziSimplified]);
}

#[test]
fn blank_simplified_form_is_kept_but_unreachable() {
    let csv = "hanzi_simplified,pinyin\n,orphan\n学,xué\n";
    let parsed = HanziLoader::parse(csv.as_bytes()).unwrap();

    assert_eq!(parsed.dataset.len(), 2);
    assert_eq!(parsed.dataset.lookup(" "), Err(LookupError::EmptyQuery));
}

#[test]
fn empty_resource_is_a_parse_failure() {
    assert!(matches!(
        HanziLoader::parse(b""),
        Err(LoadError::ParseFailure(_))
    ));
    assert!(matches!(
        HanziLoader::parse(b" \n\n "),
        Err(LoadError::ParseFailure(_))
    ));
}

#[test]
fn invalid_utf8_is_a_parse_failure() {
    let bytes = [b'h', b'\n', 0xff, 0xfe, b'\n'];
    match HanziLoader::parse(&bytes) {
        Err(LoadError::ParseFailure(reason)) => assert!(reason.contains("UTF-8")),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("expected a parse failure"),
    }
}

#[test]
fn header_only_yields_empty_dataset() {
    let parsed = HanziLoader::parse(b"hanzi_simplified,pinyin\n").unwrap();
    assert!(parsed.dataset.is_empty());
    assert_eq!(parsed.dataset.lookup("学"), Err(LookupError::DatasetUnavailable));
}

#[test]
fn reparsing_is_deterministic() {
    let first = HanziLoader::parse(FULL_CSV.as_bytes()).unwrap();
    let second = HanziLoader::parse(FULL_CSV.as_bytes()).unwrap();

    assert_eq!(first.dataset.records(), second.dataset.records());
    assert_eq!(first.dataset.columns(), second.dataset.columns());
}

#[tokio::test]
async fn load_then_lookup_first_match() {
    let parsed = HanziLoader::load(&StaticSource(FULL_CSV)).await.unwrap();
    let shared = SharedDataset::new();
    shared.install(parsed.dataset);

    let record = shared.lookup("学").unwrap();
    assert_eq!(record.pronunciation, "xué");
    assert_eq!(shared.lookup("  学 "), shared.lookup("学"));
    assert_eq!(
        shared.lookup("猫"),
        Err(LookupError::NotFound("猫".to_string()))
    );
}

#[tokio::test]
async fn unreachable_source_leaves_dataset_empty() {
    let result = HanziLoader::load(&BrokenSource).await;
    assert!(matches!(result, Err(LoadError::ResourceUnreachable { .. })));

    let shared = SharedDataset::new();
    if result.is_err() {
        shared.install(crate::HanziDataset::empty());
    }

    assert_eq!(shared.len(), 0);
    assert_eq!(shared.lookup("学"), Err(LookupError::DatasetUnavailable));
}
