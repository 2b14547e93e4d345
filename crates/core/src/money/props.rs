//! Property-based tests for money.
//!
//! - Property 1: Rounding idempotence and minor-unit round-trip
//! - Property 2: Even split sum invariant
//! - Property 3: Proportional split sum invariant
//! - Property 4: Sign preservation

use proptest::prelude::*;
use rust_decimal::Decimal;

use coinage_shared::types::{Bhd, Jpy, Usd};

use super::Money;

/// Strategy to generate amounts with sub-cent precision (-1,000,000.0000 to 1,000,000.0000).
fn precise_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate cent amounts (-1,000,000.00 to 1,000,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate split counts (-5 to 200).
fn part_count() -> impl Strategy<Value = i64> {
    -5i64..200
}

/// Strategy to generate positive weight vectors (1 to 20 weights).
fn positive_weights() -> impl Strategy<Value = Vec<Money<Usd>>> {
    prop::collection::vec(1i64..1_000_000, 1..20)
        .prop_map(|units| units.into_iter().map(Money::from_minor_units).collect())
}

fn minor_sum<C: coinage_shared::Currency>(parts: &[Money<C>]) -> i64 {
    parts.iter().map(|part| part.to_minor_units().unwrap()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Rounding
    // =========================================================================

    /// Property 1.1: Rounding twice equals rounding once.
    #[test]
    fn prop_rounded_is_idempotent(amount in precise_amount()) {
        let money = Money::<Usd>::new(amount);
        prop_assert_eq!(money.rounded().rounded(), money.rounded());

        let yen = Money::<Jpy>::new(amount);
        prop_assert_eq!(yen.rounded().rounded(), yen.rounded());
    }

    /// Property 1.2: Minor-unit round-trip equals rounding.
    #[test]
    fn prop_minor_unit_round_trip(amount in precise_amount()) {
        let money = Money::<Usd>::new(amount);
        let units = money.to_minor_units().unwrap();
        prop_assert_eq!(Money::<Usd>::from_minor_units(units), money.rounded());

        let dinar = Money::<Bhd>::new(amount);
        let units = dinar.to_minor_units().unwrap();
        prop_assert_eq!(Money::<Bhd>::from_minor_units(units), dinar.rounded());
    }

    /// Property 1.3: Parsing the rendered amount gives the same money.
    #[test]
    fn prop_display_parse_round_trip(amount in precise_amount()) {
        let money = Money::<Usd>::new(amount);
        prop_assert_eq!(money.to_string().parse::<Money<Usd>>().unwrap(), money);
    }

    // =========================================================================
    // Property 2: Even split
    // =========================================================================

    /// Property 2.1: Parts sum exactly to the source in minor units.
    #[test]
    fn prop_distributed_evenly_sum_invariant(
        amount in precise_amount(),
        parts in part_count(),
    ) {
        let money = Money::<Usd>::new(amount);
        let result = money.distributed_evenly(parts).unwrap();

        if parts <= 0 {
            prop_assert!(result.is_empty());
        } else {
            prop_assert_eq!(result.len(), usize::try_from(parts).unwrap());
            prop_assert_eq!(minor_sum(&result), money.to_minor_units().unwrap());
        }
    }

    /// Property 2.2: Parts differ by at most one minor unit, larger ones first.
    #[test]
    fn prop_distributed_evenly_is_even(
        amount in cent_amount(),
        parts in 1i64..50,
    ) {
        let result = Money::<Usd>::new(amount).distributed_evenly(parts).unwrap();
        let units: Vec<i64> = result.iter().map(|p| p.to_minor_units().unwrap()).collect();
        let max = *units.iter().max().unwrap();
        let min = *units.iter().min().unwrap();
        prop_assert!(max - min <= 1);
        for pair in units.windows(2) {
            prop_assert!(pair[0].abs() >= pair[1].abs());
        }
    }

    // =========================================================================
    // Property 3: Proportional split
    // =========================================================================

    /// Property 3.1: Parts sum exactly to the source in minor units.
    #[test]
    fn prop_distributed_proportionally_sum_invariant(
        amount in precise_amount(),
        weights in positive_weights(),
    ) {
        let money = Money::<Usd>::new(amount);
        let result = money.distributed_proportionally(&weights).unwrap();
        prop_assert_eq!(result.len(), weights.len());
        prop_assert_eq!(minor_sum(&result), money.to_minor_units().unwrap());
    }

    /// Property 3.2: Every part is already at currency precision.
    #[test]
    fn prop_distributed_proportionally_parts_are_rounded(
        amount in precise_amount(),
        weights in positive_weights(),
    ) {
        let result = Money::<Usd>::new(amount).distributed_proportionally(&weights).unwrap();
        for part in result {
            prop_assert_eq!(part.rounded(), part);
        }
    }

    // =========================================================================
    // Property 4: Sign preservation
    // =========================================================================

    /// Property 4.1: Positive weights never flip the sign of a leading part.
    ///
    /// The last part absorbs the residual, so it may overshoot past zero when
    /// many leading parts round up.
    #[test]
    fn prop_distributed_proportionally_preserves_sign(
        amount in cent_amount(),
        weights in positive_weights(),
    ) {
        let money = Money::<Usd>::new(amount);
        let result = money.distributed_proportionally(&weights).unwrap();
        for part in &result[..result.len() - 1] {
            if money.is_negative() {
                prop_assert!(!part.is_positive());
            } else {
                prop_assert!(!part.is_negative());
            }
        }
    }

    /// Property 4.2: Even split of a negative amount yields no positive part.
    #[test]
    fn prop_distributed_evenly_preserves_sign(
        amount in cent_amount(),
        parts in 1i64..50,
    ) {
        let money = Money::<Usd>::new(amount);
        for part in money.distributed_evenly(parts).unwrap() {
            if money.is_negative() {
                prop_assert!(!part.is_positive());
            } else {
                prop_assert!(!part.is_negative());
            }
        }
    }
}
