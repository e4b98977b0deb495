//! Wire format conformance tests.
//!
//! Each test pins down one rule of the tokenized or JSON grammar with exact
//! bytes, then checks the decoders accept what the encoders produce.

use ctlog::{
    from_json_slice, from_slice, from_tokenized_slice, to_json_vec, to_tokenized_vec, ArgTag,
    Argument, Error, Event, Format, Severity,
};

fn event(severity: Severity) -> Event {
    Event::new(severity, 12, 34).with_seq(2)
}

// Tokenized format

#[test]
fn test_header_fields() {
    for (severity, code) in [
        (Severity::Error, 'E'),
        (Severity::Info, 'I'),
        (Severity::Debug, 'D'),
        (Severity::Warn, 'W'),
    ] {
        let record = to_tokenized_vec(&event(severity));
        assert_eq!(record, format!("$TL002,{},12,34,0,\n", code).into_bytes());
    }
}

#[test]
fn test_every_argument_kind() {
    let record = to_tokenized_vec(
        &event(Severity::Info)
            .arg(123u32)
            .arg(-1)
            .arg('J')
            .arg(true)
            .arg("Exit main"),
    );
    assert_eq!(
        record,
        b"$TL002,I,12,34,5,4,123,2,-1,1,74,0,1,3,^\0Exit main$\0,\n"
    );
}

#[test]
fn test_integer_extremes() {
    let record = to_tokenized_vec(&event(Severity::Info).arg(i32::MIN).arg(u32::MAX));
    assert_eq!(
        record,
        b"$TL002,I,12,34,2,2,-2147483648,4,4294967295,\n"
    );
}

#[test]
fn test_text_is_verbatim_up_to_nul() {
    let raw = b"a,b\r\n\xff\x01^$".to_vec();
    let record = to_tokenized_vec(&event(Severity::Info).arg(raw.clone()));
    let mut expected = b"$TL002,I,12,34,1,3,^\0".to_vec();
    expected.extend_from_slice(&raw);
    expected.extend_from_slice(b"$\0,\n");
    assert_eq!(record, expected);

    let cut = to_tokenized_vec(&event(Severity::Info).arg(&b"keep\0drop"[..]));
    assert_eq!(cut, b"$TL002,I,12,34,1,3,^\0keep$\0,\n");
}

#[test]
fn test_empty_text() {
    let record = to_tokenized_vec(&event(Severity::Info).arg(""));
    assert_eq!(record, b"$TL002,I,12,34,1,3,^\0$\0,\n");
    assert_eq!(
        from_tokenized_slice(&record).unwrap().args,
        vec![Argument::text("")]
    );
}

#[test]
fn test_legacy_header_accepted() {
    let event = from_tokenized_slice(b"$TL00,17,W,1,2,1,2,-5,\n").unwrap();
    assert_eq!(event.seq, 17);
    assert_eq!(event.args, vec![Argument::Int(-5)]);
}

#[test]
fn test_tokenized_rejects() {
    assert!(matches!(
        from_tokenized_slice(b"$TX000,I,0,0,0,"),
        Err(Error::Syntax { .. })
    ));
    assert!(matches!(
        from_tokenized_slice(b"$TL090,I,0,0,0,"),
        Err(Error::UnsupportedVersion { found: 9, max: 0 })
    ));
    assert!(matches!(
        from_tokenized_slice(b"$TL000,I,0,0,1,9,1,"),
        Err(Error::UnknownTag(9))
    ));
    assert!(matches!(
        from_tokenized_slice(b"$TL000,I,0,0,2,4,1,"),
        Err(Error::UnexpectedEof { .. })
    ));
    assert!(matches!(
        from_tokenized_slice(b"$TL000,I,0,0,1,4,-1,"),
        Err(Error::TypeMismatch { index: 0, .. })
    ));
    assert!(from_tokenized_slice(b"$TL000,I,0,0,1,3,^\0open,").is_err());
}

// JSON format

#[test]
fn test_json_every_argument_kind() {
    let record = to_json_vec(
        &event(Severity::Debug)
            .arg(true)
            .arg('J')
            .arg(-7)
            .arg("hi")
            .arg(7u32),
    );
    assert_eq!(
        String::from_utf8(record).unwrap(),
        "{\"ctlog\":0,\"seq\":2,\"lvl\":\"D\",\"mi\":12,\"ml\":34,\"args\":[\
         {\"t\":0,\"v\":true},{\"t\":1,\"v\":\"J\"},{\"t\":2,\"v\":-7},\
         {\"t\":3,\"v\":\"hi\"},{\"t\":4,\"v\":7}]}\n"
    );
}

#[test]
fn test_json_escapes() {
    let record = to_json_vec(&event(Severity::Info).arg(&b"q\"b\\\t\x1f\x7f\xc3\xa9"[..]));
    let text = String::from_utf8(record).unwrap();
    assert!(
        text.contains(r#""v":"q\"b\\\t\u001F\u007Fé""#),
        "{}",
        text
    );

    let record = to_json_vec(&event(Severity::Info).arg('\n'));
    assert!(String::from_utf8(record).unwrap().contains(r#"{"t":1,"v":"\n"}"#));
}

#[test]
fn test_json_is_valid_json() {
    let record = to_json_vec(&event(Severity::Warn).arg("a\u{1}b").arg(false));
    let value: serde_json::Value = serde_json::from_slice(&record).unwrap();
    assert_eq!(value["ctlog"], 0);
    assert_eq!(value["lvl"], "W");
    assert_eq!(value["args"][0]["t"], ArgTag::Text.as_u8());
    assert_eq!(value["args"][0]["v"], "a\u{1}b");
    assert_eq!(value["args"][1]["v"], false);
}

#[test]
fn test_json_decoder_is_lenient_about_layout() {
    let record = br#" { "args" : [ {"v": 300, "t": 4} ], "ml": 2, "mi": 1,
        "lvl": "I", "seq": 9, "ctlog": 0, "host": "bench" } "#;
    let event = from_json_slice(record).unwrap();
    assert_eq!(event.seq, 9);
    assert_eq!(event.args, vec![Argument::UInt(300)]);
}

#[test]
fn test_json_rejects() {
    assert!(from_json_slice(b"[]").is_err());
    assert!(matches!(
        from_json_slice(br#"{"ctlog":3,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[]}"#),
        Err(Error::UnsupportedVersion { found: 3, .. })
    ));
    assert!(matches!(
        from_json_slice(br#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[{"t":2,"v":"x"}]}"#),
        Err(Error::TypeMismatch { index: 0, .. })
    ));
    assert!(matches!(
        from_json_slice(br#"{"ctlog":0,"seq":70000,"lvl":"I","mi":0,"ml":0,"args":[]}"#),
        Err(Error::Custom(_))
    ));
    assert!(from_json_slice(br#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":1.5,"args":[]}"#).is_err());
}

// Both formats

#[test]
fn test_formats_decode_to_same_event() {
    let original = event(Severity::Warn)
        .arg(u32::MAX)
        .arg(i32::MIN)
        .arg('~')
        .arg("multi\nline");
    let a = from_slice(&to_tokenized_vec(&original)).unwrap();
    let b = from_slice(&to_json_vec(&original)).unwrap();
    assert_eq!(a, original);
    assert_eq!(b, original);
}

#[test]
fn test_format_detection() {
    assert_eq!(Format::detect(b"$TL000,"), Some(Format::Tokenized));
    assert_eq!(Format::detect(b"\n {\"ctlog\":0}"), Some(Format::Json));
    assert_eq!(Format::detect(b"$T"), None);
    assert_eq!(Format::detect(b"log: $TL000,"), None);
}
