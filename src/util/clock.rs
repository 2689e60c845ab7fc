//! Wall-clock time and timer helpers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Today's local date as `dd/mm/yyyy`. Outside the browser the UTC date is used.
pub fn today_br() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_day_br(now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "csr"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        let days = i64::try_from(secs / 86_400).unwrap_or_default();
        let (year, month, day) = civil_from_days(days);
        format_day_br(year, month, day)
    }
}

fn format_day_br(year: u32, month: u32, day: u32) -> String {
    format!("{day:02}/{month:02}/{year:04}")
}

/// Proleptic Gregorian `(year, month, day)` for a count of days since
/// 1970-01-01.
#[cfg(any(test, not(feature = "csr")))]
fn civil_from_days(days: i64) -> (u32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (
        u32::try_from(year).unwrap_or_default(),
        u32::try_from(month).unwrap_or_default(),
        u32::try_from(day).unwrap_or_default(),
    )
}

/// Resolve after `ms` milliseconds. Resolves immediately outside the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
