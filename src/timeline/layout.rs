use chrono::{Datelike, NaiveDate};

use crate::model::profile::Experience;

/// End-date labels meaning "still ongoing".
pub const ONGOING_LABELS: &[&str] = &["present", "current", "now"];

#[derive(Clone, Debug, PartialEq)]
/// One experience placed on the axis.
pub struct TimelineBar {
    /// Source experience id.
    pub id: String,
    /// Source experience title.
    pub title: String,
    /// Row index; overlapping ranges never share a lane.
    pub lane: usize,
    /// Left edge in pixels.
    pub x: f64,
    /// Width in pixels.
    pub width: f64,
    /// Parsed start.
    pub start: NaiveDate,
    /// Parsed end (`today` for ongoing entries).
    pub end: NaiveDate,
    /// Whether the end date was an ongoing label.
    pub ongoing: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// All bars plus the axis they were laid out on.
pub struct TimelineLayout {
    /// Bars ordered by start date.
    pub bars: Vec<TimelineBar>,
    /// Number of lanes used.
    pub lanes: usize,
    /// Axis width in pixels.
    pub width: f64,
    first_month: i64,
    span_months: i64,
}

impl TimelineLayout {
    /// Pixel offset of January for every year inside the axis.
    pub fn year_ticks(&self) -> Vec<(i32, f64)> {
        if self.span_months == 0 {
            return Vec::new();
        }
        let last_month = self.first_month + self.span_months - 1;
        let first_year = self.first_month.div_euclid(12);
        let last_year = last_month.div_euclid(12);
        (first_year..=last_year)
            .filter(|y| y * 12 >= self.first_month)
            .map(|y| (y as i32, self.offset(y * 12)))
            .collect()
    }

    fn offset(&self, month: i64) -> f64 {
        (month - self.first_month) as f64 * self.width / self.span_months as f64
    }
}

/// Parse `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `Mon YYYY` into a date.
///
/// Partial dates resolve to the first day of the period.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("01 {s}"), "%d %b %Y") {
        return Some(d);
    }
    if s.len() == 4 {
        let year = s.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// Whether `raw` marks an ongoing range (blank, `Present`, ...).
pub fn is_ongoing(raw: &str) -> bool {
    let s = raw.trim();
    s.is_empty() || ONGOING_LABELS.iter().any(|l| l.eq_ignore_ascii_case(s))
}

/// Lay `entries` out on an axis `axis_width` pixels wide.
///
/// Months are the unit: each bar covers its start month through its end month inclusive.
/// Lanes are assigned greedily by start date, taking the lowest lane whose last bar ended
/// before this one starts. Entries with an unparseable start are skipped.
///
/// A NaN, infinite or negative `axis_width` is treated as `0.0`, which keeps every bar finite.
pub fn layout(entries: &[Experience], axis_width: f64, today: NaiveDate) -> TimelineLayout {
    let axis_width = if axis_width.is_finite() && axis_width > 0.0 {
        axis_width
    } else {
        tracing::warn!(axis_width, "unusable axis width; laying out at zero width");
        0.0
    };
    let mut spans = Vec::with_capacity(entries.len());
    for e in entries {
        let Some(start) = parse_date(&e.start_date) else {
            tracing::warn!(id = %e.id, start = %e.start_date, "skipping experience with unparseable start");
            continue;
        };
        let (end, ongoing) = if is_ongoing(&e.end_date) {
            (today, true)
        } else if let Some(end) = parse_date(&e.end_date) {
            (end, false)
        } else {
            tracing::warn!(id = %e.id, end = %e.end_date, "unparseable end; using start");
            (start, false)
        };
        spans.push((e, start, end.max(start), ongoing));
    }
    spans.sort_by_key(|&(_, start, end, _)| (start, end));

    let (Some(first), Some(last)) = (
        spans.iter().map(|s| month_index(s.1)).min(),
        spans.iter().map(|s| month_index(s.2)).max(),
    ) else {
        return TimelineLayout {
            width: axis_width,
            ..TimelineLayout::default()
        };
    };

    let mut out = TimelineLayout {
        bars: Vec::with_capacity(spans.len()),
        lanes: 0,
        width: axis_width,
        first_month: first,
        span_months: last - first + 1,
    };

    let mut lane_ends: Vec<i64> = Vec::new();
    for (e, start, end, ongoing) in spans {
        let (s, t) = (month_index(start), month_index(end));
        let lane = match lane_ends.iter().position(|&last_end| last_end < s) {
            Some(lane) => {
                lane_ends[lane] = t;
                lane
            }
            None => {
                lane_ends.push(t);
                lane_ends.len() - 1
            }
        };

        let x = out.offset(s);
        out.bars.push(TimelineBar {
            id: e.id.clone(),
            title: e.title.clone(),
            lane,
            x,
            width: (t - s + 1) as f64 * axis_width / out.span_months as f64,
            start,
            end,
            ongoing,
        });
    }
    out.lanes = lane_ends.len();
    out
}

fn month_index(d: NaiveDate) -> i64 {
    i64::from(d.year()) * 12 + i64::from(d.month0())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/layout.rs"]
mod tests;
