//! Drawing the card, the wheel viewport and the winner modal.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use palette::{Clamp, FromColor, Oklch, Srgb};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;

/// Rows of the wheel viewport.
const VIEWPORT_ROWS: u16 = 15;
/// Rows one item occupies in the viewport.
const ROWS_PER_ITEM: f64 = 3.0;
/// Title, subtitle and spacing above the viewport.
const HEADER_ROWS: u16 = 4;
/// Spacing and trigger hint below the viewport.
const FOOTER_ROWS: u16 = 3;

struct Palette {
    background: Oklch,
    card: Oklch,
    viewport: Oklch,
    band: Oklch,
    text: Oklch,
    muted: Oklch,
    accent: Oklch,
}

impl Palette {
    fn new() -> Self {
        Self {
            background: Oklch::new(0.15, 0.01, 250.0),
            card: Oklch::new(0.22, 0.015, 250.0),
            viewport: Oklch::new(0.19, 0.012, 250.0),
            band: Oklch::new(0.30, 0.06, 255.0),
            text: Oklch::new(0.93, 0.0, 0.0),
            muted: Oklch::new(0.65, 0.01, 250.0),
            accent: Oklch::new(0.68, 0.16, 255.0),
        }
    }
}

fn to_terminal(color: Oklch) -> CtColor {
    let rgb = Srgb::<f32>::from_color(color).clamp().into_format::<u8>();
    CtColor::Rgb {
        r: rgb.red,
        g: rgb.green,
        b: rgb.blue,
    }
}

/// Interpolate in OKLCH, taking the short way around the hue circle.
fn mix(from: Oklch, to: Oklch, t: f32) -> Oklch {
    let from_h = from.hue.into_positive_degrees();
    let to_h = to.hue.into_positive_degrees();

    let mut dh = to_h - from_h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }

    Oklch::new(
        from.l + (to.l - from.l) * t,
        from.chroma + (to.chroma - from.chroma) * t,
        (from_h + dh * t).rem_euclid(360.0),
    )
}

/// Cut `text` to at most `width` columns.
fn truncate(text: &str, width: u16) -> String {
    let mut used = 0u16;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

fn fill(out: &mut impl Write, x: u16, y: u16, width: u16, height: u16, color: Oklch) -> io::Result<()> {
    let blank = " ".repeat(width as usize);
    queue!(out, SetBackgroundColor(to_terminal(color)))?;
    for row in y..y + height {
        queue!(out, cursor::MoveTo(x, row), Print(&blank))?;
    }
    Ok(())
}

/// Print `text` centered in `[x, x + width)`.
#[allow(clippy::too_many_arguments)]
fn centered(
    out: &mut impl Write,
    x: u16,
    y: u16,
    width: u16,
    text: &str,
    fg: Oklch,
    bg: Oklch,
    bold: bool,
) -> io::Result<()> {
    let text = truncate(text, width);
    let pad = width.saturating_sub(text.width() as u16) / 2;
    queue!(
        out,
        cursor::MoveTo(x + pad, y),
        SetForegroundColor(to_terminal(fg)),
        SetBackgroundColor(to_terminal(bg)),
    )?;
    if bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Draw one full frame.
pub fn draw(out: &mut impl Write, app: &App, now: Duration) -> io::Result<()> {
    let colors = Palette::new();
    let (cols, rows) = terminal::size()?;

    queue!(
        out,
        BeginSynchronizedUpdate,
        SetBackgroundColor(to_terminal(colors.background)),
        Clear(ClearType::All)
    )?;

    if app.modal().is_some() {
        draw_modal(out, app, &colors, cols, rows)?;
    } else {
        draw_card(out, app, &colors, cols, rows, now)?;
    }

    if let Some(status) = app.status() {
        centered(out, 0, rows.saturating_sub(1), cols, status, colors.muted, colors.background, false)?;
    }

    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

fn draw_card(
    out: &mut impl Write,
    app: &App,
    colors: &Palette,
    cols: u16,
    rows: u16,
    now: Duration,
) -> io::Result<()> {
    let width = app.surface().width(now).min(cols.saturating_sub(2)).max(8);
    let height = HEADER_ROWS + VIEWPORT_ROWS + FOOTER_ROWS + 1;
    let left = cols.saturating_sub(width) / 2;
    let top = rows.saturating_sub(height) / 2;

    fill(out, left, top, width, height, colors.card)?;
    centered(out, left, top + 1, width, "Lucky Draw Wheel", colors.text, colors.card, true)?;
    centered(
        out,
        left,
        top + 2,
        width,
        "Press space to find today's lucky winner!",
        colors.muted,
        colors.card,
        false,
    )?;

    let inner_left = left + 2;
    let inner_width = width.saturating_sub(4);
    let viewport_top = top + HEADER_ROWS;
    draw_viewport(out, app, colors, inner_left, viewport_top, inner_width)?;

    let (hint, color) = if app.wheel().is_busy() {
        ("Spinning...", colors.muted)
    } else {
        ("[ Space ] Pick at random", colors.accent)
    };
    centered(out, left, viewport_top + VIEWPORT_ROWS + 1, width, hint, color, colors.card, true)
}

fn draw_viewport(
    out: &mut impl Write,
    app: &App,
    colors: &Palette,
    left: u16,
    top: u16,
    width: u16,
) -> io::Result<()> {
    let wheel = app.wheel();
    let config = wheel.config();
    let center = (VIEWPORT_ROWS / 2) as i32;
    let units_per_row = config.item_height / ROWS_PER_ITEM;

    fill(out, left, top, width, VIEWPORT_ROWS, colors.viewport)?;
    fill(out, left, top + center as u16 - 1, width, 3, colors.band)?;

    for (index, attrs) in wheel.frame().iter().enumerate() {
        // translate_y is the item's top edge; its center sits one centering
        // offset further down.
        let center_units = attrs.translate_y + config.centering_offset;
        let row = center + (center_units / units_per_row).round() as i32;
        if !(0..VIEWPORT_ROWS as i32).contains(&row) {
            continue;
        }

        let in_band = (row - center).abs() <= 1;
        let bg = if in_band { colors.band } else { colors.viewport };
        let fg = mix(bg, colors.text, attrs.opacity as f32);
        let label = wheel.items().label(index).unwrap_or_default();
        centered(out, left, top + row as u16, width, label, fg, bg, attrs.scale >= 0.9)?;
    }

    let marker_row = top + center as u16;
    queue!(
        out,
        SetForegroundColor(to_terminal(colors.accent)),
        SetBackgroundColor(to_terminal(colors.band)),
        cursor::MoveTo(left, marker_row),
        Print("▶"),
        cursor::MoveTo(left + width.saturating_sub(1), marker_row),
        Print("◀"),
        SetAttribute(Attribute::Reset),
    )?;
    Ok(())
}

fn draw_modal(out: &mut impl Write, app: &App, colors: &Palette, cols: u16, rows: u16) -> io::Result<()> {
    let Some(label) = app.modal() else {
        return Ok(());
    };

    let max_width = cols.saturating_sub(2).max(8);
    let width = (label.width() as u16 + 8).max(48).min(max_width);
    let height = 9;
    let left = cols.saturating_sub(width) / 2;
    let top = rows.saturating_sub(height) / 2;

    fill(out, left, top, width, height, colors.card)?;
    centered(out, left, top + 1, width, "CONGRATULATIONS TO", colors.text, colors.card, true)?;
    centered(
        out,
        left,
        top + 2,
        width,
        "Our congratulations to today's lucky participant!",
        colors.muted,
        colors.card,
        false,
    )?;
    centered(out, left, top + 4, width, label, colors.accent, colors.card, true)?;
    centered(out, left, top + 7, width, "[ Enter ] Continue", colors.text, colors.card, false)
}
