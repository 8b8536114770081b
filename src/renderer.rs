//! # Dashboard Rendering
//!
//! Draws a [`Selection`] either as text for a terminal or onto any
//! `embedded-graphics` [`DrawTarget`]. Both layouts put the hours on the
//! vertical axis, starting at the current hour at the top, with the value
//! on the horizontal axis:
//!
//! ```text
//! Current Location | Partly Cloudy
//!
//! ← Moisture    21°C    Precipitation →
//!
//!       14.0                        26.5
//!  7 >│       ---●---
//!  8  │    ---●---
//! ```
//!
//! The band around each sample spans `value - margin` to `value + margin`.

use crate::config::DisplayConfig;
use crate::frame::FrameBuffer;
use crate::navigation::Control;
use crate::selection::Selection;
use crate::window::WindowedSeries;
use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::{Baseline, Text},
};

/// Narrowest value axis the ASCII chart will draw.
const MIN_COLUMNS: usize = 12;

/// Width of the `"23 >│"` hour gutter.
const GUTTER: usize = 5;

/// Format a value with one decimal only when needed.
pub fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// The value range used for scaling, widened when the series is flat.
fn value_range(window: &WindowedSeries) -> (f32, f32) {
    let (min, max) = window.bounds();
    if max - min < f32::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// The `"← Prev    21°C    Next →"` navigation line.
fn navigation_line(selection: &Selection) -> String {
    let kind = selection.kind();
    let left = selection.adjacent(Control::ArrowLeft.direction());
    let right = selection.adjacent(Control::ArrowRight.direction());
    format!(
        "← {}    {}{}    {} →",
        left,
        format_value(selection.window.current()),
        kind.unit(),
        right
    )
}

/// Render the dashboard as text.
///
/// `columns` is the width of the value axis in characters.
pub fn render_ascii(selection: &Selection, columns: usize) -> String {
    let columns = columns.max(MIN_COLUMNS);
    let window = &selection.window;
    let (min, max) = value_range(window);

    let to_column = |value: f32| {
        let normalized = (value - min) / (max - min);
        ((normalized * (columns as f32 - 1.0)).round() as usize).min(columns - 1)
    };

    let mut out = String::new();
    out.push_str(&selection.headline());
    out.push_str("\n\n");
    out.push_str(&navigation_line(selection));
    out.push_str("\n\n");

    // Value axis labels above the chart
    let min_label = format!("{:.1}", min);
    let max_label = format!("{:.1}", max);
    let pad = columns.saturating_sub(min_label.len() + max_label.len()).max(1);
    out.push_str(&format!(
        "{}{}{}{}\n",
        " ".repeat(GUTTER),
        min_label,
        " ".repeat(pad),
        max_label
    ));

    let upper = window.upper_band();
    let lower = window.lower_band();

    for (index, hour) in window.hours().iter().enumerate() {
        let mut row = vec![' '; columns];

        for cell in row
            .iter_mut()
            .take(to_column(upper[index]) + 1)
            .skip(to_column(lower[index]))
        {
            *cell = '-';
        }
        row[to_column(window.data()[index])] = '●';

        // The current hour is always the first row
        let marker = if index == 0 { '>' } else { ' ' };
        out.push_str(&format!(
            "{:>2} {}│{}\n",
            hour.get(),
            marker,
            row.into_iter().collect::<String>().trim_end()
        ));
    }

    out
}

/// Print the dashboard to stdout.
pub fn draw_ascii(selection: &Selection, columns: usize) {
    print!("{}", render_ascii(selection, columns));
}

/// Draw the dashboard onto a monochrome graphics target.
///
/// Layout scales to the target's bounding box: a two-line header, then the
/// chart with hour labels every six rows. The error band is drawn dashed
/// and the current hour is marked with a filled circle.
pub fn draw_chart<D>(selection: &Selection, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let area = display.bounding_box();
    let width = area.size.width as i32;
    let height = area.size.height as i32;
    let origin = area.top_left;

    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    Text::with_baseline(&selection.headline(), origin, text_style, Baseline::Top)
        .draw(display)?;

    // FONT_6X10 has no arrow glyphs
    let nav = navigation_line(selection)
        .replace('←', "<")
        .replace('→', ">");
    Text::with_baseline(&nav, origin + Point::new(0, 12), text_style, Baseline::Top)
        .draw(display)?;

    let window = &selection.window;
    let (min, max) = value_range(window);

    let chart_left = origin.x + 18;
    let chart_top = origin.y + 28;
    let chart_width = (width - 18).max(1);
    let chart_height = (height - 28).max(1);
    let last_index = (window.data().len() as i32 - 1).max(1);

    let to_point = |index: usize, value: f32| {
        let normalized = (value - min) / (max - min);
        let x = chart_left + (normalized * (chart_width - 1) as f32).round() as i32;
        let y = chart_top + index as i32 * (chart_height - 1) / last_index;
        Point::new(x, y)
    };

    let thin = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let thick = PrimitiveStyle::with_stroke(BinaryColor::On, 2);

    for band in [window.upper_band(), window.lower_band()] {
        let points: Vec<Point> = band
            .iter()
            .enumerate()
            .map(|(i, value)| to_point(i, *value))
            .collect();
        for segment in points.windows(2).step_by(2) {
            Line::new(segment[0], segment[1])
                .into_styled(thin)
                .draw(display)?;
        }
    }

    let points: Vec<Point> = window
        .data()
        .iter()
        .enumerate()
        .map(|(i, value)| to_point(i, *value))
        .collect();
    for segment in points.windows(2) {
        Line::new(segment[0], segment[1])
            .into_styled(thick)
            .draw(display)?;
    }

    if let Some(now) = points.first() {
        Circle::with_center(*now, 5)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display)?;
    }

    for (index, label) in window.hour_labels().iter().enumerate().step_by(6) {
        let y = to_point(index, min).y;
        Text::with_baseline(
            label,
            Point::new(origin.x, y),
            text_style,
            Baseline::Middle,
        )
        .draw(display)?;
    }

    Ok(())
}

/// Draw the dashboard into a frame sized from the `[display]` settings.
pub fn render_frame(selection: &Selection, display: &DisplayConfig) -> FrameBuffer {
    let mut frame = FrameBuffer::new(display.width, display.height);
    draw_chart(selection, &mut frame).unwrap_or_else(|never| match never {});
    let (width, height) = (display.width, display.height);
    tracing::debug!(
        width = width,
        height = height,
        lit = frame.lit_pixels(),
        "rendered frame"
    );
    frame
}
