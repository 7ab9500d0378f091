// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! What the rendering side gets for each decoded event: a category tag and the same
//! message at three widths, so a narrow annotation row can fall back to a shorter one.
//!
//! | Event          | long        | medium | short |
//! |----------------|-------------|--------|-------|
//! | `Command(n)`   | `Cmd: n`    | `C`    | `C`   |
//! | `KeyDown(n)`   | `↓: n`      | `↓`    | `↓`   |
//! | `KeyUp(n)`     | `↑: n`      | `↑`    | `↑`   |
//! | `SelfTestOk`   | `BAT OK`    | `OK`   | `OK`  |
//! | `SelfTestFail` | `BAT NG`    | `NG`   | `NG`  |
//! | `CommandAck`   | `Res: ACK`  | `ACK`  | `A`   |

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter};

use crate::{DecodedEvent, SpannedEvent};

pub const KEY_DOWN_GLYPH: &str = "↓";
pub const KEY_UP_GLYPH: &str = "↑";
pub const COMMAND_GLYPH: &str = "C";

/// Category tag of an emitted event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    AsRefStr,
    EnumIter,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Command,
    KeyDown,
    KeyUp,
    SelfTestOk,
    SelfTestFail,
    Ack,
}

/// Long, medium, and short rendering of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationTexts {
    pub long: String,
    pub medium: &'static str,
    pub short: &'static str,
}

/// An event ready to be placed on an annotation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub start: u64,
    pub end: u64,
    pub category: EventCategory,
    pub texts: AnnotationTexts,
}

impl DecodedEvent {
    #[must_use]
    pub const fn category(&self) -> EventCategory {
        match self {
            DecodedEvent::Command(_) => EventCategory::Command,
            DecodedEvent::KeyDown(_) => EventCategory::KeyDown,
            DecodedEvent::KeyUp(_) => EventCategory::KeyUp,
            DecodedEvent::SelfTestOk => EventCategory::SelfTestOk,
            DecodedEvent::SelfTestFail => EventCategory::SelfTestFail,
            DecodedEvent::CommandAck => EventCategory::Ack,
        }
    }

    #[must_use]
    pub fn texts(&self) -> AnnotationTexts {
        let (medium, short) = match self {
            DecodedEvent::Command(_) => (COMMAND_GLYPH, COMMAND_GLYPH),
            DecodedEvent::KeyDown(_) => (KEY_DOWN_GLYPH, KEY_DOWN_GLYPH),
            DecodedEvent::KeyUp(_) => (KEY_UP_GLYPH, KEY_UP_GLYPH),
            DecodedEvent::SelfTestOk => ("OK", "OK"),
            DecodedEvent::SelfTestFail => ("NG", "NG"),
            DecodedEvent::CommandAck => ("ACK", "A"),
        };
        AnnotationTexts {
            long: self.to_string(),
            medium,
            short,
        }
    }
}

/// Renders the long form.
impl Display for DecodedEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DecodedEvent::Command(name) => write!(f, "Cmd: {name}"),
            DecodedEvent::KeyDown(name) => write!(f, "{KEY_DOWN_GLYPH}: {name}"),
            DecodedEvent::KeyUp(name) => write!(f, "{KEY_UP_GLYPH}: {name}"),
            DecodedEvent::SelfTestOk => write!(f, "BAT OK"),
            DecodedEvent::SelfTestFail => write!(f, "BAT NG"),
            DecodedEvent::CommandAck => write!(f, "Res: ACK"),
        }
    }
}

impl From<SpannedEvent> for Annotation {
    fn from(spanned_event: SpannedEvent) -> Self {
        let SpannedEvent { span, event } = spanned_event;
        Self {
            start: span.start,
            end: span.end,
            category: event.category(),
            texts: event.texts(),
        }
    }
}
