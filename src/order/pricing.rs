use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use super::draft::AcademicLevel;

/// Flat per-page surcharge for deadlines inside the urgency window.
pub const URGENT_FEE_PER_PAGE: f64 = 3.0;

/// Deadlines strictly closer than this are urgent; exactly 24h is not.
pub const URGENT_WINDOW_HOURS: i64 = 24;

impl AcademicLevel {
    pub fn rate_per_page(self) -> f64 {
        match self {
            AcademicLevel::HighSchool => 8.49,
            AcademicLevel::Undergraduate => 9.49,
            AcademicLevel::Graduate => 10.49,
            AcademicLevel::Postgraduate => 11.49,
            AcademicLevel::Professional => 11.49,
        }
    }
}

/// Derived price breakdown shown next to the price form and on review.
/// Always a pure function of the level, page count, and deadline at the
/// moment of calculation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub cost_per_page: f64,
    pub total_pages: u32,
    pub additional_charges: f64,
    pub total_cost: f64,
    pub upfront_payment: f64,
}

/// Integer coercion of the raw pages field; anything unparseable counts as 0.
pub fn parse_pages(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

pub fn calculate(
    level: Option<AcademicLevel>,
    total_pages: u32,
    deadline: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> OrderSummary {
    let cost_per_page = level.map(AcademicLevel::rate_per_page).unwrap_or(0.0);

    let urgent = matches!(
        deadline,
        Some(d) if d - now < Duration::hours(URGENT_WINDOW_HOURS)
    );
    let additional_charges = if urgent {
        URGENT_FEE_PER_PAGE * total_pages as f64
    } else {
        0.0
    };

    let total_cost = cost_per_page * total_pages as f64 + additional_charges;
    let upfront_payment = total_cost / 2.0;

    OrderSummary {
        cost_per_page,
        total_pages,
        additional_charges,
        total_cost,
        upfront_payment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn rate_table_matches_levels() {
        assert_eq!(AcademicLevel::HighSchool.rate_per_page(), 8.49);
        assert_eq!(AcademicLevel::Undergraduate.rate_per_page(), 9.49);
        assert_eq!(AcademicLevel::Graduate.rate_per_page(), 10.49);
        assert_eq!(AcademicLevel::Postgraduate.rate_per_page(), 11.49);
        assert_eq!(AcademicLevel::Professional.rate_per_page(), 11.49);
    }

    #[test]
    fn total_is_rate_times_pages_plus_charges() {
        let now = at(12);
        for level in AcademicLevel::ALL {
            for pages in 1..=20 {
                let s = calculate(Some(level), pages, Some(now + Duration::days(3)), now);
                assert_eq!(s.cost_per_page, level.rate_per_page());
                assert_eq!(s.additional_charges, 0.0);
                assert_eq!(s.total_cost, level.rate_per_page() * pages as f64);
                assert_eq!(s.upfront_payment, s.total_cost / 2.0);
            }
        }
    }

    #[test]
    fn undergraduate_four_pages_three_days_out() {
        let now = at(9);
        let s = calculate(
            Some(AcademicLevel::Undergraduate),
            4,
            Some(now + Duration::hours(72)),
            now,
        );
        assert_eq!(s.additional_charges, 0.0);
        assert_eq!(s.total_cost, 37.96);
        assert_eq!(s.upfront_payment, 18.98);
    }

    #[test]
    fn graduate_two_pages_two_hours_out_is_urgent() {
        let now = at(9);
        let s = calculate(
            Some(AcademicLevel::Graduate),
            2,
            Some(now + Duration::hours(2)),
            now,
        );
        assert_eq!(s.additional_charges, 6.0);
        assert_eq!(s.total_cost, 26.98);
        assert_eq!(s.upfront_payment, 13.49);
    }

    #[test]
    fn exactly_24_hours_is_not_urgent() {
        let now = at(9);
        let boundary = calculate(
            Some(AcademicLevel::HighSchool),
            3,
            Some(now + Duration::hours(24)),
            now,
        );
        assert_eq!(boundary.additional_charges, 0.0);

        let inside = calculate(
            Some(AcademicLevel::HighSchool),
            3,
            Some(now + Duration::hours(24) - Duration::milliseconds(1)),
            now,
        );
        assert_eq!(inside.additional_charges, 9.0);
    }

    #[test]
    fn past_deadline_counts_as_urgent() {
        let now = at(9);
        let s = calculate(
            Some(AcademicLevel::Undergraduate),
            1,
            Some(now - Duration::hours(1)),
            now,
        );
        assert_eq!(s.additional_charges, 3.0);
    }

    #[test]
    fn unknown_level_and_bad_pages_price_to_zero() {
        let now = at(9);
        assert_eq!(parse_pages("abc"), 0);
        assert_eq!(parse_pages(""), 0);
        assert_eq!(parse_pages(" 7 "), 7);

        let s = calculate(None, parse_pages("abc"), Some(now + Duration::days(2)), now);
        assert_eq!(s.cost_per_page, 0.0);
        assert_eq!(s.total_cost, 0.0);
        assert_eq!(s.upfront_payment, 0.0);
    }

    #[test]
    fn missing_deadline_skips_the_surcharge() {
        let now = at(9);
        let s = calculate(Some(AcademicLevel::Graduate), 2, None, now);
        assert_eq!(s.additional_charges, 0.0);
        assert_eq!(s.total_cost, 20.98);
    }
}
