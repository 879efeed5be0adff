//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible in
//! embedded-graphics 0.8, so every fixed font/color pairing lives here and
//! widgets reference it directly.
//!
//! # Character Sets
//!
//! Captions, the card message and navigation labels contain Turkish letters
//! (İ, ı, ş, ğ), so they use the ISO-8859-9 variants of the mono fonts.
//! Numbers and units are ASCII and keep the ProFont / ASCII fonts.
//!
//! # Dynamic Color Styles
//!
//! Ring labels take the ring's accent color and navigation labels change
//! color with the selection. For these, `LABEL_FONT` is exposed so callers
//! can create `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_7X13, FONT_10X20},
        iso_8859_9,
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{CARD_TITLE, TEXT_CAPTION, TEXT_UNIT, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text, positioned by its top edge. Used for the overlay and navigation labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned text, positioned by its top edge. Used for the card and value rows.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text, vertically centered. Used for the FPS counter.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References (for dynamic color styles and measuring)
// =============================================================================

/// Small label font (6x10, ISO-8859-9). Ring labels, captions, navigation labels.
pub const LABEL_FONT: &MonoFont = &iso_8859_9::FONT_6X10;

/// Body font (7x13, ISO-8859-9). Card title and message.
pub const BODY_FONT: &MonoFont = &iso_8859_9::FONT_7X13;

/// Outer ring value (`ProFont` 24pt).
pub const VALUE_FONT_LARGE: &MonoFont = &PROFONT_24_POINT;

/// Middle ring value (`ProFont` 18pt).
pub const VALUE_FONT_MEDIUM: &MonoFont = &PROFONT_18_POINT;

/// Inner ring value (`ProFont` 14pt).
pub const VALUE_FONT_SMALL: &MonoFont = &PROFONT_14_POINT;

/// Unit next to the outer value (10x20).
pub const UNIT_FONT_LARGE: &MonoFont = &FONT_10X20;

/// Unit and percentage next to the middle and inner values (7x13).
pub const UNIT_FONT: &MonoFont = &FONT_7X13;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// White label text (status bar FPS).
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, WHITE);

/// Dimmed caption under each overlay row.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, TEXT_CAPTION);

/// Large unit text ("kWh" of the outer ring).
pub const UNIT_STYLE_LARGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(UNIT_FONT_LARGE, TEXT_UNIT);

/// Unit and percentage text of the middle and inner rings.
pub const UNIT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(UNIT_FONT, TEXT_UNIT);

/// Card heading ("AKILLI ASİSTAN").
pub const CARD_TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, CARD_TITLE);

/// Card message body.
pub const CARD_BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(BODY_FONT, WHITE);
