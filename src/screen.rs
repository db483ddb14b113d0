//! What goes on the 128x64 panel each tick, and how it is drawn.

use chrono::{Datelike, NaiveDateTime, Timelike};
use embedded_graphics::{
    mono_font::{iso_8859_15::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::holiday::{format_date, Holiday};
use crate::locale::{weekday_name, CLOSEST_HOLIDAY_LABEL, NO_HOLIDAY_YET};

pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;

/// Row pitch of FONT_6X10
pub const LINE_HEIGHT: i32 = 10;
pub const CHARS_PER_LINE: usize = (SCREEN_WIDTH / 6) as usize;

/// Rows left for the holiday name below the date
const NAME_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// One message at mid-height (connectivity, clock sync)
    Status(String),
    /// Clock and nearest holiday, one string per row from the top
    Dashboard(Vec<String>),
}

impl Frame {
    pub fn status(message: &str) -> Self {
        Frame::Status(message.to_string())
    }

    /// ```text
    /// Senin, 2025-12-01
    /// 08:05:09
    /// Hari libur terdekat:
    /// 2025-12-25
    /// Hari Raya Natal
    /// ```
    pub fn dashboard(now: NaiveDateTime, closest: Option<&Holiday>) -> Self {
        let mut lines = vec![
            format!("{}, {}", weekday_name(now.weekday()), format_date(now.date())),
            format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second()),
            CLOSEST_HOLIDAY_LABEL.to_string(),
        ];
        match closest {
            Some(holiday) => {
                lines.push(format_date(holiday.date()));
                lines.extend(wrap(holiday.name(), CHARS_PER_LINE, NAME_LINES));
            }
            None => lines.push(NO_HOLIDAY_YET.to_string()),
        }
        Frame::Dashboard(lines)
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Frame::Status(message) => std::slice::from_ref(message),
            Frame::Dashboard(lines) => lines,
        }
    }

    /// Clear `target` and draw the frame's text rows.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let top = match self {
            Frame::Status(_) => SCREEN_HEIGHT as i32 / 2,
            Frame::Dashboard(_) => 0,
        };
        for (row, line) in self.lines().iter().enumerate() {
            let origin = Point::new(0, top + row as i32 * LINE_HEIGHT);
            Text::with_baseline(line, origin, style, Baseline::Top).draw(target)?;
        }
        Ok(())
    }
}

/// Greedy word wrap to `width` characters, at most `max_lines` rows. Words
/// longer than a row are split.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while !chars.is_empty() {
            let used = current.chars().count();
            let sep = usize::from(used > 0);
            if used + sep + chars.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(chars.drain(..));
            } else if used > 0 {
                lines.push(std::mem::take(&mut current));
            } else {
                current.extend(chars.drain(..width));
                lines.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.truncate(max_lines);
    lines
}
