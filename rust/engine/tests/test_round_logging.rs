use std::fs;
use std::path::PathBuf;

use maketen_engine::engine::{MatchEngine, Reveal};
use maketen_engine::game::{PairRecord, RoundConfig, RoundStats};
use maketen_engine::logger::{format_round_id, RoundLogger, RoundRecord};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample(round_id: &str) -> RoundRecord {
    RoundRecord {
        round_id: round_id.to_string(),
        seed: 1,
        picker: Some("memory".to_string()),
        pairs: vec![PairRecord {
            first: "4 + 6".to_string(),
            second: "10".to_string(),
            matched: true,
        }],
        stats: RoundStats {
            matches_found: 1,
            streak: 1,
            best_streak: 1,
            moves: 1,
        },
        completed: false,
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("roundlog");
    let _ = fs::remove_file(&path);
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample("20250102-000001")).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let _ = fs::remove_file(&path);
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
    assert_eq!(format_round_id("20260101", 42), "20260101-000042");
}

#[test]
fn reopening_a_log_continues_the_id_sequence() {
    let path = tmp_path("roundlog_reopen");
    let _ = fs::remove_file(&path);

    let mut ids = Vec::new();
    for _ in 0..2 {
        let mut logger = RoundLogger::create(&path).expect("create logger");
        let id = logger.next_id();
        logger.write(&sample(&id)).expect("write");
        ids.push(id);
    }
    assert_ne!(ids[0], ids[1]);
    assert!(ids[1].ends_with("-000002"), "{:?}", ids);

    let content = fs::read_to_string(&path).unwrap();
    let written: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(written.len(), 2);
    assert_ne!(written[0].round_id, written[1].round_id);
    let _ = fs::remove_file(&path);
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("roundlog_ts");
    let _ = fs::remove_file(&path);
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let rec = sample("20250102-000010");
    logger.write(&rec).expect("write");
    let line = fs::read_to_string(&path).unwrap();
    assert!(line.contains("\"ts\":\""), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = RoundRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
    assert_eq!(content.lines().count(), 2);
    let _ = fs::remove_file(&path);
}

#[test]
fn engine_record_captures_pairs_and_seed() {
    let mut eng = MatchEngine::new(RoundConfig::default(), Some(31)).unwrap();
    let ids: Vec<_> = eng.board().into_iter().map(|v| v.id).collect();
    eng.reveal_card(&ids[0]).unwrap();
    if let Reveal::Pair { settle, .. } = eng.reveal_card(&ids[1]).unwrap() {
        eng.settle(&settle);
    }

    let rec = eng.record("20250101-000001".to_string());
    assert_eq!(rec.seed, 31);
    assert_eq!(rec.pairs.len(), 1);
    assert_eq!(rec.stats.moves, 1);
    assert!(!rec.completed);
    assert_eq!(rec.picker, None);

    let line = serde_json::to_string(&rec).unwrap();
    let back: RoundRecord = serde_json::from_str(&line).unwrap();
    assert_eq!(back, rec);
}
