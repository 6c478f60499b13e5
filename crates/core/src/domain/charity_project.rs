use chrono::{Duration, NaiveDateTime};

/// A fundraising project as stored by the donation application.
///
/// `close_date` is present exactly when `fully_invested` is set.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CharityProject {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub full_amount: i64,
    pub invested_amount: i64,
    pub fully_invested: bool,
    pub create_date: NaiveDateTime,
    pub close_date: Option<NaiveDateTime>,
}

impl CharityProject {
    /// Time it took to collect the full amount, `None` while still open.
    pub fn collection_time(&self) -> Option<Duration> {
        self.close_date.map(|close_date| close_date - self.create_date)
    }
}

/// Renders a duration as `"<D> day(s), H:MM:SS[.ffffff]"`, omitting the day
/// part when it is zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let mut days = elapsed.num_days();
    let mut remainder = elapsed - Duration::days(days);
    // Days are floored so the clock part is always positive.
    if remainder < Duration::zero() {
        days -= 1;
        remainder = remainder + Duration::days(1);
    }

    let total_seconds = remainder.num_seconds();
    let micros = (remainder - Duration::seconds(total_seconds))
        .num_microseconds()
        .unwrap_or(0);
    let (hours, minutes, seconds) = (
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60,
    );

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() != 1 { "s" } else { "" };
        out.push_str(&format!("{days} day{plural}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}
