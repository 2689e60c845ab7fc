use super::*;

#[test]
fn format_brl_pads_to_two_places() {
    assert_eq!(format_brl(Decimal::new(1990, 2)), "R$ 19.90");
    assert_eq!(format_brl(Decimal::new(5, 0)), "R$ 5.00");
    assert_eq!(format_brl(Decimal::ZERO), "R$ 0.00");
}

#[test]
fn format_brl_rounds_extra_precision() {
    assert_eq!(format_brl(Decimal::new(12_345, 3)), "R$ 12.35");
}

#[test]
fn format_date_br_reorders_iso_dates() {
    assert_eq!(format_date_br("2024-03-07"), "07/03/2024");
    assert_eq!(format_date_br("2024-03-07T15:04:05"), "07/03/2024");
}

#[test]
fn format_date_br_echoes_unrecognized_input() {
    assert_eq!(format_date_br("ontem"), "ontem");
    assert_eq!(format_date_br("2024-3-7"), "2024-3-7");
}
