//! Color constants and blending for the energy dashboard.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The design palette is specified as 24-bit hex values, so every constant
//! goes through [`hex`], which drops the low bits of each channel at compile
//! time.
//!
//! # Opacity
//!
//! Rgb565 has no alpha channel and draw targets cannot be read back, so
//! translucent colors are resolved against a known backdrop with [`blend`]
//! before they are drawn. Constants blend in 8-bit space with [`blend_hex`]
//! since the `RgbColor` accessors are not `const`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Convert a `0xRRGGBB` value to Rgb565.
pub const fn hex(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Raw 24-bit Values (inputs to const blending)
// =============================================================================

const WHITE_HEX: u32 = 0xFF_FF_FF;
const BACKGROUND_HEX: u32 = 0x0A_19_29;
const BACKGROUND_MID_HEX: u32 = 0x0D_1F_33;
const CARD_HEX: u32 = 0x1E_29_36;
const NAV_BAR_HEX: u32 = 0x0F_1C_2E;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure white. Primary text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure black.
pub const BLACK: Rgb565 = Rgb565::BLACK;

// =============================================================================
// Background
// =============================================================================

/// Darkest background tone (top and bottom of the screen gradient).
pub const BACKGROUND: Rgb565 = hex(BACKGROUND_HEX);

/// Lighter background tone at the vertical middle of the screen.
pub const BACKGROUND_MID: Rgb565 = hex(BACKGROUND_MID_HEX);

/// Vertical gradient stops for the screen background.
pub const BACKGROUND_STOPS: [Rgb565; 3] = [BACKGROUND, BACKGROUND_MID, BACKGROUND];

// =============================================================================
// Ring Palettes
// =============================================================================

/// Outer ring accent (cyan). Also the selected navigation color.
pub const CYAN: Rgb565 = hex(0x4D_D0_E1);

/// Middle ring accent (orange).
pub const ORANGE: Rgb565 = hex(0xFF_B7_4D);

/// Inner ring accent (pink).
pub const PINK: Rgb565 = hex(0xFF_40_81);

/// Sweep gradient stops for the outer ring.
pub const CYAN_STOPS: [Rgb565; 4] = [CYAN, hex(0x26_C6_DA), hex(0x00_BC_D4), CYAN];

/// Sweep gradient stops for the middle ring.
pub const ORANGE_STOPS: [Rgb565; 4] = [ORANGE, hex(0xFF_A7_26), hex(0xFF_98_00), ORANGE];

/// Sweep gradient stops for the inner ring.
pub const PINK_STOPS: [Rgb565; 4] = [PINK, hex(0xE9_1E_63), hex(0xC2_18_5B), PINK];

// =============================================================================
// Surfaces
// =============================================================================

/// Assistant card fill (0x1E2936 at 0.8 over the background).
pub const CARD: Rgb565 = blend_hex(CARD_HEX, BACKGROUND_MID_HEX, 0.8);

/// Icon tile inside the assistant card.
pub const CARD_ICON_TILE: Rgb565 = hex(0x2A_37_44);

/// Bottom navigation bar fill (0x0F1C2E at 0.95 over the background).
pub const NAV_BAR: Rgb565 = blend_hex(NAV_BAR_HEX, BACKGROUND_HEX, 0.95);

/// Car placeholder, lighter center of its radial gradient.
pub const CAR_LIGHT: Rgb565 = hex(0x4A_55_68);

/// Car placeholder, darker rim of its radial gradient.
pub const CAR_DARK: Rgb565 = hex(0x2D_37_48);

/// Car glyph tint.
pub const CAR_ICON: Rgb565 = hex(0x90_A4_AE);

// =============================================================================
// Text
// =============================================================================

/// Unit text (white at 0.7).
pub const TEXT_UNIT: Rgb565 = blend_hex(WHITE_HEX, BACKGROUND_MID_HEX, 0.7);

/// Caption text (white at 0.6).
pub const TEXT_CAPTION: Rgb565 = blend_hex(WHITE_HEX, BACKGROUND_MID_HEX, 0.6);

/// Unselected navigation item (white at 0.6 over the bar).
pub const NAV_INACTIVE: Rgb565 = blend_hex(WHITE_HEX, NAV_BAR_HEX, 0.6);

/// Card title (white at 0.7 over the card).
pub const CARD_TITLE: Rgb565 = blend_hex(WHITE_HEX, CARD_HEX, 0.7);

// =============================================================================
// Blending
// =============================================================================

/// Composite `fg` at `opacity` (0.0-1.0) over `bg`.
///
/// Works on the raw 5-6-5 channels with 8-bit fixed-point weights.
/// Opacity outside 0.0-1.0 is clamped.
pub fn blend(fg: Rgb565, bg: Rgb565, opacity: f32) -> Rgb565 {
    let alpha = alpha_fixed(opacity);
    Rgb565::new(
        mix_channel(bg.r(), fg.r(), alpha),
        mix_channel(bg.g(), fg.g(), alpha),
        mix_channel(bg.b(), fg.b(), alpha),
    )
}

/// Interpolate between two colors, `t = 0.0` giving `from` and `t = 1.0` giving `to`.
#[inline]
pub fn lerp(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 { blend(to, from, t) }

/// Sample evenly spaced gradient `stops` at `fraction` (0.0-1.0).
///
/// An empty slice yields black.
pub fn gradient(
    stops: &[Rgb565],
    fraction: f32,
) -> Rgb565 {
    match stops {
        [] => BLACK,
        [only] => *only,
        _ => {
            let segments = stops.len() - 1;
            let position = fraction.clamp(0.0, 1.0) * segments as f32;
            let index = (libm::floorf(position) as usize).min(segments - 1);
            lerp(stops[index], stops[index + 1], position - index as f32)
        }
    }
}

/// Const counterpart of [`blend`] for `0xRRGGBB` inputs, blended at 8 bits per channel.
pub const fn blend_hex(fg: u32, bg: u32, opacity: f32) -> Rgb565 {
    let alpha = alpha_fixed(opacity);
    let r = mix_channel(((bg >> 16) & 0xFF) as u8, ((fg >> 16) & 0xFF) as u8, alpha) as u32;
    let g = mix_channel(((bg >> 8) & 0xFF) as u8, ((fg >> 8) & 0xFF) as u8, alpha) as u32;
    let b = mix_channel((bg & 0xFF) as u8, (fg & 0xFF) as u8, alpha) as u32;
    hex((r << 16) | (g << 8) | b)
}

/// Opacity as an 8-bit fixed-point weight in 0..=256.
const fn alpha_fixed(opacity: f32) -> i32 {
    if opacity <= 0.0 {
        0
    } else if opacity >= 1.0 {
        256
    } else {
        (opacity * 256.0) as i32
    }
}

const fn mix_channel(from: u8, to: u8, alpha: i32) -> u8 {
    let from = from as i32;
    let to = to as i32;
    (from + (((to - from) * alpha) >> 8)) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================
