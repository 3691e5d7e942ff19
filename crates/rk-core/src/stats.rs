//! Aggregate statistics over a classified archive.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};
use serde::Serialize;

use crate::{ActivityType, Category, ClassifiedPost};

/// Short weekday names, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of most frequent activity types broken down by day.
pub const TOP_ACTIVITY_COUNT: usize = 3;

// ========== Archive Summary ==========

/// Post count per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub completed_event: usize,
    pub live_event: usize,
    pub achievement: usize,
    pub miscellaneous: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: Category) {
        match category {
            Category::CompletedEvent => self.completed_event += 1,
            Category::LiveEvent => self.live_event += 1,
            Category::Achievement => self.achievement += 1,
            Category::Miscellaneous => self.miscellaneous += 1,
        }
    }

    /// Counts a category given by tag; unknown tags count as miscellaneous.
    pub fn record_tag(&mut self, tag: &str) {
        self.record(Category::from_tag(tag));
    }

    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::CompletedEvent => self.completed_event,
            Category::LiveEvent => self.live_event,
            Category::Achievement => self.achievement,
            Category::Miscellaneous => self.miscellaneous,
        }
    }

    pub const fn total(&self) -> usize {
        self.completed_event + self.live_event + self.achievement + self.miscellaneous
    }
}

/// Totals, date range and category breakdown of an archive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveSummary {
    pub total: usize,
    pub earliest: Option<DateTime<FixedOffset>>,
    pub latest: Option<DateTime<FixedOffset>>,
    pub counts: CategoryCounts,
    /// Completed events that carry user-written text.
    pub completed_written: usize,
}

impl ArchiveSummary {
    pub fn compute(posts: &[ClassifiedPost]) -> Self {
        let mut counts = CategoryCounts::default();
        let mut completed_written = 0;
        for post in posts {
            counts.record(post.classification.category);
            if post.classification.is_completed() && post.classification.is_written {
                completed_written += 1;
            }
        }

        let times = posts.iter().filter_map(|p| p.post.time);
        Self {
            total: posts.len(),
            earliest: times.clone().min(),
            latest: times.max(),
            counts,
            completed_written,
        }
    }
}

// ========== Activity Report ==========

/// Frequency and mean distance of one activity type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCount {
    pub activity: ActivityType,
    pub count: usize,
    pub mean_distance_miles: f64,
}

/// Mean distance of one activity type on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayDistance {
    pub activity: ActivityType,
    pub day: &'static str,
    pub count: usize,
    pub mean_distance_miles: f64,
}

/// Which part of the week has the longer mean distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LongerPart {
    Weekdays,
    Weekends,
}

impl LongerPart {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekdays => "weekdays",
            Self::Weekends => "weekends",
        }
    }
}

/// Statistics over completed events with a known activity and a positive distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityReport {
    /// Activities counted, including those without a usable timestamp.
    pub activity_count: usize,
    /// Per-type counts, most frequent first.
    pub by_type: Vec<ActivityCount>,
    /// The most frequent types, at most [`TOP_ACTIVITY_COUNT`].
    pub top: Vec<ActivityType>,
    pub longest: Option<ActivityType>,
    pub shortest: Option<ActivityType>,
    /// Per-day means for the top types, Sunday first.
    pub by_day: Vec<DayDistance>,
    pub weekday_mean_miles: f64,
    pub weekend_mean_miles: f64,
    pub longer: LongerPart,
}

struct Row {
    activity: ActivityType,
    distance: f64,
    /// Days since Sunday in the report time zone.
    day: Option<usize>,
}

impl ActivityReport {
    /// Computes the report, reading weekdays in the given time zone.
    pub fn compute<Tz: TimeZone>(posts: &[ClassifiedPost], tz: &Tz) -> Self {
        let rows: Vec<Row> = posts
            .iter()
            .filter(|p| {
                let c = &p.classification;
                c.is_completed() && c.activity_type.is_known() && c.distance_miles > 0.0
            })
            .map(|p| Row {
                activity: p.classification.activity_type,
                distance: p.classification.distance_miles,
                day: p
                    .post
                    .time
                    .map(|t| t.with_timezone(tz).weekday().num_days_from_sunday() as usize),
            })
            .collect();

        let mut distances: HashMap<ActivityType, Vec<f64>> = HashMap::new();
        for row in &rows {
            distances.entry(row.activity).or_default().push(row.distance);
        }

        // Ties resolve in priority order.
        let mut by_type: Vec<ActivityCount> = ActivityType::PRIORITY
            .into_iter()
            .filter_map(|activity| {
                distances.get(&activity).map(|d| ActivityCount {
                    activity,
                    count: d.len(),
                    mean_distance_miles: mean(d),
                })
            })
            .collect();
        by_type.sort_by(|a, b| b.count.cmp(&a.count));

        let top: Vec<ActivityType> = by_type
            .iter()
            .take(TOP_ACTIVITY_COUNT)
            .map(|a| a.activity)
            .collect();

        let mut by_mean: Vec<&ActivityCount> = by_type.iter().collect();
        by_mean.sort_by(|a, b| b.mean_distance_miles.total_cmp(&a.mean_distance_miles));
        let longest = by_mean.first().map(|a| a.activity);
        let shortest = by_mean.last().map(|a| a.activity);

        let by_day = day_means(&rows, &top);

        let (weekend, weekday): (Vec<&Row>, Vec<&Row>) = rows
            .iter()
            .filter(|r| r.day.is_some())
            .partition(|r| matches!(r.day, Some(0 | 6)));
        let weekend_mean_miles = mean(&weekend.iter().map(|r| r.distance).collect::<Vec<_>>());
        let weekday_mean_miles = mean(&weekday.iter().map(|r| r.distance).collect::<Vec<_>>());
        let longer = if weekend_mean_miles > weekday_mean_miles {
            LongerPart::Weekends
        } else {
            LongerPart::Weekdays
        };

        Self {
            activity_count: rows.len(),
            by_type,
            top,
            longest,
            shortest,
            by_day,
            weekday_mean_miles,
            weekend_mean_miles,
            longer,
        }
    }

    /// Number of distinct activity types.
    pub fn distinct_types(&self) -> usize {
        self.by_type.len()
    }
}

fn day_means(rows: &[Row], top: &[ActivityType]) -> Vec<DayDistance> {
    let mut out = Vec::new();
    for &activity in top {
        for (day, &name) in DAY_NAMES.iter().enumerate() {
            let distances: Vec<f64> = rows
                .iter()
                .filter(|r| r.activity == activity && r.day == Some(day))
                .map(|r| r.distance)
                .collect();
            if distances.is_empty() {
                continue;
            }
            out.push(DayDistance {
                activity,
                day: name,
                count: distances.len(),
                mean_distance_miles: mean(&distances),
            });
        }
    }
    out
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
