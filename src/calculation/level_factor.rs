//! Level (triennium) factor calculation.
//!
//! The level factor is the seniority multiplier on the base entitlement:
//! career ranks gain a compounding 3% step for every completed three-year
//! block of service, while academy ranks draw a fixed stipend factor.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Rank;

use super::calendar::{last_of_month, whole_years_between};

/// The per-triennium step (3%), as a multiplier.
fn triennium_step() -> Decimal {
    Decimal::new(103, 2)
}

/// Compound triennium multiplier: 1.03 to the `t`-th power.
fn compound(t: u32) -> Decimal {
    let step = triennium_step();
    let mut factor = Decimal::ONE;
    for _ in 0..t {
        factor *= step;
    }
    factor
}

/// Computes the level factor for a rank at a reference date.
///
/// Seniority is measured from `enlistment` through the last day of the
/// reference date's month, in whole calendar years, floor-divided by three.
/// The step compounds: two completed trienniums give 1.03², not 1.06.
///
/// Fixed factors: not-enlisted and Aspirant 1.0; Cadet year 3 and year 2
/// 1.03²; Cadet year 1 1.03.
///
/// # Example
///
/// ```
/// use revision_engine::calculation::level_factor;
/// use revision_engine::models::Rank;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let enlisted = NaiveDate::from_ymd_opt(2010, 2, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
/// let step = Decimal::new(103, 2);
/// let factor = level_factor(Some(Rank::Private), reference, enlisted);
/// assert_eq!(factor, step * step * step);
/// ```
pub fn level_factor(rank: Option<Rank>, reference_date: NaiveDate, enlistment: NaiveDate) -> Decimal {
    let rank = match rank {
        Some(rank) => rank,
        None => return Decimal::ONE,
    };

    match rank {
        Rank::Aspirant => Decimal::ONE,
        Rank::CadetYear3 | Rank::CadetYear2 => compound(2),
        Rank::CadetYear1 => compound(1),
        _ => {
            let service_end = last_of_month(reference_date);
            let years = whole_years_between(enlistment, service_end);
            compound(years / 3)
        }
    }
}
