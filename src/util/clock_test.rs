use super::*;

// =============================================================
// civil_from_days
// =============================================================

#[test]
fn epoch_is_first_of_january_1970() {
    assert_eq!(civil_from_days(0), (1970, 1, 1));
}

#[test]
fn counts_leap_days() {
    assert_eq!(civil_from_days(11_016), (2000, 2, 29));
    assert_eq!(civil_from_days(19_723), (2024, 1, 1));
    assert_eq!(civil_from_days(19_782), (2024, 2, 29));
}

// =============================================================
// today_br
// =============================================================

#[test]
fn day_is_zero_padded_day_month_year() {
    assert_eq!(format_day_br(2024, 3, 5), "05/03/2024");
    assert_eq!(format_day_br(1999, 12, 31), "31/12/1999");
}

#[test]
fn today_has_brazilian_shape() {
    let today = today_br();
    let parts: Vec<&str> = today.split('/').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 2);
    assert_eq!(parts[1].len(), 2);
    assert_eq!(parts[2].len(), 4);
}
