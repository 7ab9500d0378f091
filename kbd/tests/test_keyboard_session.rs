// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A whole power-on and typing session pushed through one interpreter, the way a
//! capture tool would feed it.

use pretty_assertions::assert_eq;
use ps2_kbd::{Annotation, ByteEvent, CodeSet, DecodedEvent, Direction,
              ScanCodeInterpreter, UNKNOWN_CODE, parse_trace_line};

const HOST: Direction = Direction::HostToDevice;
const DEVICE: Direction = Direction::DeviceToHost;

fn session() -> Vec<ByteEvent> {
    let bytes: &[(Direction, u8)] = &[
        // Reset, ACK, BAT.
        (HOST, 0xFF),
        (DEVICE, 0xFA),
        (DEVICE, 0xAA),
        // Set LEDs (Num Lock on).
        (HOST, 0xED),
        (DEVICE, 0xFA),
        (HOST, 0x02),
        (DEVICE, 0xFA),
        // Shift + h.
        (DEVICE, 0x12),
        (DEVICE, 0x33),
        (DEVICE, 0xF0),
        (DEVICE, 0x33),
        (DEVICE, 0xF0),
        (DEVICE, 0x12),
        // Right Control tap.
        (DEVICE, 0xE0),
        (DEVICE, 0x14),
        (DEVICE, 0xF0),
        (DEVICE, 0xE0),
        (DEVICE, 0x14),
    ];
    bytes
        .iter()
        .enumerate()
        .map(|(index, &(direction, value))| {
            let start = index as u64 * 100;
            ByteEvent::new(direction, value, start, start + 90)
        })
        .collect()
}

#[test]
fn test_power_on_and_typing_session() {
    let mut interpreter = ScanCodeInterpreter::new(CodeSet::Set2);
    let events: Vec<DecodedEvent> = session()
        .into_iter()
        .filter_map(|it| interpreter.decode_event(it))
        .map(|it| it.event)
        .collect();

    assert_eq!(
        events,
        vec![
            DecodedEvent::Command("Reset"),
            DecodedEvent::CommandAck,
            DecodedEvent::SelfTestOk,
            DecodedEvent::Command("Set Indicator"),
            DecodedEvent::CommandAck,
            // The LED bitmap argument is not a command of its own.
            DecodedEvent::Command(UNKNOWN_CODE),
            DecodedEvent::CommandAck,
            DecodedEvent::KeyDown("Left Shift"),
            DecodedEvent::KeyDown("h H"),
            DecodedEvent::KeyUp("h H"),
            DecodedEvent::KeyUp("Left Shift"),
            DecodedEvent::KeyDown("Right Control"),
            DecodedEvent::KeyUp("Right Control"),
        ]
    );
}

#[test]
fn test_annotations_point_at_completing_byte() {
    let mut interpreter = ScanCodeInterpreter::new(CodeSet::Set2);
    let annotations: Vec<Annotation> = session()
        .into_iter()
        .filter_map(|it| interpreter.decode_event(it))
        .map(Annotation::from)
        .collect();

    let last = annotations.last().unwrap();
    // 18 bytes, the last one starts at sample 1700.
    assert_eq!((last.start, last.end), (1700, 1790));
    assert_eq!(last.texts.long, "↑: Right Control");
    assert_eq!(last.category.as_ref(), "key-up");
}

#[test]
fn test_parsed_trace_matches_constructed_events() {
    let text = "H->D FF 0 90\nD->H FA 100 190\n";
    let parsed: Vec<ByteEvent> = text
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_trace_line(index + 1, line).unwrap())
        .collect();
    assert_eq!(parsed, session()[..2].to_vec());
}
