//! Property-based tests for the wire formats and the sequence counter.

use ctlog::{
    from_json_slice, from_slice, from_tokenized_slice, to_json_vec, to_tokenized_vec, Argument,
    Event, LevelMask, LineScanner, Logger, LoggerOptions, Severity, SharedBuffer,
};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

/// Text without NUL, which the encoders treat as the end of a string.
fn text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=255, 0..24)
}

fn argument() -> impl Strategy<Value = Argument> {
    prop_oneof![
        any::<bool>().prop_map(Argument::Bool),
        any::<u8>().prop_map(Argument::Char),
        any::<i32>().prop_map(Argument::Int),
        text().prop_map(Argument::Text),
        any::<u32>().prop_map(Argument::UInt),
    ]
}

prop_compose! {
    fn event()(
        severity in severity(),
        module in any::<u32>(),
        line in any::<u32>(),
        seq in any::<u16>(),
        args in prop::collection::vec(argument(), 0..8),
    ) -> Event {
        Event::new(severity, module, line).with_seq(seq).with_args(args)
    }
}

proptest! {
    #[test]
    fn prop_tokenized_roundtrip(event in event()) {
        let record = to_tokenized_vec(&event);
        prop_assert_eq!(from_tokenized_slice(&record).unwrap(), event);
    }

    #[test]
    fn prop_json_roundtrip(event in event()) {
        let record = to_json_vec(&event);
        prop_assert_eq!(from_json_slice(&record).unwrap(), event);
    }

    #[test]
    fn prop_record_is_one_line_ending_in_newline(event in event()) {
        let json = to_json_vec(&event);
        prop_assert_eq!(json.iter().filter(|&&b| b == b'\n').count(), 1);
        prop_assert_eq!(json.last(), Some(&b'\n'));

        let tokenized = to_tokenized_vec(&event);
        prop_assert_eq!(tokenized.last(), Some(&b'\n'));
    }

    #[test]
    fn prop_json_parses_with_serde_json(
        seq in any::<u16>(),
        s in "[^\\x00]{0,16}",
        n in any::<i32>(),
    ) {
        let event = Event::new(Severity::Info, 1, 2).with_seq(seq).arg(s.as_str()).arg(n);
        let value: serde_json::Value = serde_json::from_slice(&to_json_vec(&event)).unwrap();
        prop_assert_eq!(value["seq"].as_u64(), Some(u64::from(seq)));
        prop_assert_eq!(value["args"][0]["v"].as_str(), Some(s.as_str()));
        prop_assert_eq!(value["args"][1]["v"].as_i64(), Some(i64::from(n)));
    }

    #[test]
    fn prop_text_sits_between_sentinels(bytes in text()) {
        let record = to_tokenized_vec(&Event::new(Severity::Info, 0, 0).arg(bytes.clone()));
        let start = record.windows(2).position(|w| w == b"^\0").unwrap() + 2;
        prop_assert_eq!(&record[start..start + bytes.len()], bytes.as_slice());
        prop_assert_eq!(&record[start + bytes.len()..], b"$\0,\n".as_slice());
    }

    #[test]
    fn prop_scanner_recovers_every_record(events in prop::collection::vec(event(), 1..6)) {
        let mut capture = Vec::new();
        for event in &events {
            capture.extend_from_slice(&to_tokenized_vec(event));
        }
        let decoded: Vec<Event> = LineScanner::new(capture.as_slice())
            .map(|line| from_slice(&line.unwrap()).unwrap())
            .collect();
        prop_assert_eq!(decoded, events);
    }

    #[test]
    fn prop_scanner_recovers_mixed_records(
        events in prop::collection::vec((event(), any::<bool>()), 1..6),
    ) {
        let mut capture = Vec::new();
        for (event, json) in &events {
            if *json {
                capture.extend_from_slice(&to_json_vec(event));
            } else {
                capture.extend_from_slice(&to_tokenized_vec(event));
            }
        }
        let decoded: Vec<Event> = LineScanner::new(capture.as_slice())
            .map(|line| from_slice(&line.unwrap()).unwrap())
            .collect();
        let expected: Vec<Event> = events.into_iter().map(|(event, _)| event).collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn prop_sequence_counts_every_call(toggles in prop::collection::vec(any::<bool>(), 1..64)) {
        let sink = SharedBuffer::new();
        let logger = Logger::tokenized(LoggerOptions::new().with_levels(LevelMask::ALL));
        logger.set_sink(sink.clone());

        let mut expected = Vec::new();
        for (i, enabled) in toggles.iter().enumerate() {
            logger.set_enabled(*enabled);
            logger.log(Severity::Debug, 0, 0, &[]).unwrap();
            if *enabled {
                expected.push(i as u16);
            }
        }

        let seqs: Vec<u16> = LineScanner::new(&sink.contents()[..])
            .map(|line| from_slice(&line.unwrap()).unwrap().seq)
            .collect();
        prop_assert_eq!(seqs, expected);
        prop_assert_eq!(logger.next_sequence() as usize, toggles.len());
    }
}
