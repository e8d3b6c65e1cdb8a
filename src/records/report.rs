//! # Titled Reports
//!
//! A [`Report`] wraps a rendered body (usually a [`RecordSet`] table) with a
//! title, an `=` underline, and a creation timestamp line:
//!
//! ```text
//! Current users
//! =============
//! +----+-------+
//! | ID | Name  |
//! +----+-------+
//! | 1  | Bob   |
//! +----+-------+
//! Report created on Sunday September 09 2001, 01:46:40 UTC.
//! ```
//!
//! The timestamp is captured when the report is created and rendered in UTC
//! with civil-calendar integer math, so no date/time dependency is needed.
//!
//! [`RecordSet`]: crate::records::RecordSet

use std::time::{SystemTime, UNIX_EPOCH};

use crate::text::TextBuf;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub struct Report {
    title: TextBuf,
    body: TextBuf,
    created_at: SystemTime,
}

impl Report {
    /// Empty report stamped with the current time.
    pub fn new() -> Report {
        Report {
            title: TextBuf::new(),
            body: TextBuf::new(),
            created_at: SystemTime::now(),
        }
    }

    pub fn set_title(&mut self, title: TextBuf) {
        self.title = title;
    }

    pub fn set_body(&mut self, body: TextBuf) {
        self.body = body;
    }

    pub fn title(&self) -> &TextBuf {
        &self.title
    }

    pub fn body(&self) -> &TextBuf {
        &self.body
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Title, underline, body, and the creation timestamp line. The body is
    /// emitted as-is; table bodies already end with a newline.
    pub fn render(&self) -> TextBuf {
        let mut out = TextBuf::new();
        out.append(&self.title);
        out.append_str("\n");
        for _ in 0..self.title.len() {
            out.append_str("=");
        }
        out.append_str("\n");
        out.append(&self.body);

        let secs = self
            .created_at
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        out.append(&timestamp_line(secs));
        out
    }
}

impl Default for Report {
    fn default() -> Report {
        Report::new()
    }
}

fn timestamp_line(secs: u64) -> TextBuf {
    let days = secs / 86_400;
    let secs_of_day = secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    text_fmt!(
        "Report created on {} {} {:02} {}, {:02}:{:02}:{:02} UTC.\n",
        WEEKDAYS[((days + 4) % 7) as usize],
        MONTHS[(month - 1) as usize],
        day,
        year,
        secs_of_day / 3_600,
        secs_of_day % 3_600 / 60,
        secs_of_day % 60
    )
}

/// Proleptic-Gregorian date for a day count since 1970-01-01, valid for any
/// unsigned day count.
fn civil_from_days(days: u64) -> (u64, u32, u32) {
    let shifted = days + 719_468;
    let era = shifted / 146_097;
    let doe = shifted % 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let mut year = yoe + era * 400;
    if month <= 2 {
        year += 1;
    }
    (year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_a_thursday() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(
            timestamp_line(0),
            "Report created on Thursday January 01 1970, 00:00:00 UTC.\n"
        );
    }

    #[test]
    fn billionth_second_lands_on_a_sunday_morning() {
        assert_eq!(
            timestamp_line(1_000_000_000),
            "Report created on Sunday September 09 2001, 01:46:40 UTC.\n"
        );
    }

    #[test]
    fn civil_dates_cross_month_and_leap_boundaries() {
        assert_eq!(civil_from_days(30), (1970, 1, 31));
        assert_eq!(civil_from_days(31), (1970, 2, 1));
        // 2000 is a leap year under the 400-year rule.
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(20_691), (2026, 8, 26));
    }

    #[test]
    fn render_frames_the_body_with_title_and_timestamp() {
        let mut report = Report::new();
        report.set_title(TextBuf::from("Users"));
        report.set_body(TextBuf::from("one line\n"));
        assert_eq!(report.title(), "Users");
        assert_eq!(report.body(), "one line\n");
        assert!(report.created_at() <= SystemTime::now());

        let rendered = report.render();
        let text = rendered.to_string_lossy();
        assert!(text.starts_with("Users\n=====\none line\n"));
        assert!(text.contains("Report created on "));
        assert!(text.ends_with(" UTC.\n"));
    }

    #[test]
    fn underline_matches_title_length() {
        let mut report = Report::new();
        report.set_title(TextBuf::from("ab"));
        let rendered = report.render();
        assert!(rendered.to_string_lossy().starts_with("ab\n==\n"));
    }
}
