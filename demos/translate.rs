//! Translating a capture back into text with a dictionary.
//!
//! Run with: cargo run --example translate [dictionary.json] < capture.log
//!
//! Without arguments a built-in dictionary and capture are used.

use ctlog::{Argument, Dictionary, Logger, LoggerOptions, Severity, SharedBuffer, Translator};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};

const DICTIONARY: &str = r#"{
    "date": "2018-06-01T12:00:00Z",
    "modules": [
        { "index": 0, "name": "main", "path": "/src/main.c",
          "lines": [
            { "number": 12, "formatString": "Enter main" },
            { "number": 30, "formatString": "boot took %u ms" }
          ] },
        { "index": 1, "name": "net", "path": "/src/net.c",
          "lines": [ { "number": 88, "formatString": "peer %s sent %d bytes (%c)" } ] }
    ]
}"#;

fn built_in_capture() -> Result<Vec<u8>, Box<dyn Error>> {
    let capture = SharedBuffer::new();
    let logger = Logger::tokenized(LoggerOptions::new().with_enabled(true));
    logger.set_sink(capture.clone());

    capture.clone().write_all(b"ROM boot v1.2\r\n")?;
    logger.log(Severity::Info, 0, 12, &[])?;
    logger.log(Severity::Info, 0, 30, &[Argument::UInt(184)])?;
    logger.log(
        Severity::Warn,
        1,
        88,
        &[
            Argument::text("10.0.0.2\nbackup"),
            Argument::Int(-1),
            Argument::Char(b'!'),
        ],
    )?;
    Ok(capture.take())
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();

    match std::env::args().nth(1) {
        Some(path) => {
            let dict = Dictionary::from_reader(BufReader::new(File::open(path)?))?;
            let translator = Translator::from_dictionary(dict)?;
            translator.translate_stream(io::stdin().lock(), stdout.lock())?;
        }
        None => {
            let translator = Translator::from_dictionary(Dictionary::from_json(DICTIONARY)?)?;
            let capture = built_in_capture()?;
            println!("Capture:\n{}\n", String::from_utf8_lossy(&capture));
            println!("Translated:");
            translator.translate_stream(capture.as_slice(), stdout.lock())?;
        }
    }

    Ok(())
}
