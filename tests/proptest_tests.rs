//! Property-based tests for invoice arithmetic.
//!
//! Run with: `cargo test --test proptest_tests`

use fakturace::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn invoice() -> Invoice {
    Invoice::new(
        Address::client("Kupec a.s."),
        Address::provider("Dodavatel s.r.o."),
        Creator::new("Jan Novák"),
    )
    .unwrap()
}

/// Money-like decimal with up to 2 decimal places.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Quantity with up to 3 decimal places.
fn arb_count() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

fn arb_tax() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::ZERO),
        Just(Decimal::new(10, 0)),
        Just(Decimal::new(12, 0)),
        Just(Decimal::new(15, 0)),
        Just(Decimal::new(21, 0)),
        Just(Decimal::new(210, 1)),
    ]
}

fn arb_item() -> impl Strategy<Value = Item> {
    (arb_count(), arb_price(), arb_tax())
        .prop_map(|(count, price, tax)| Item::new(count, price).unwrap().with_tax(tax).unwrap())
}

fn arb_rule() -> impl Strategy<Value = RoundingRule> {
    prop_oneof![
        Just(RoundingRule::HalfEven),
        Just(RoundingRule::HalfUp),
        Just(RoundingRule::HalfDown),
        Just(RoundingRule::Down),
        Just(RoundingRule::Up),
        Just(RoundingRule::Floor),
        Just(RoundingRule::Ceiling),
    ]
}

proptest! {
    #[test]
    fn tax_amount_is_total_times_rate(item in arb_item()) {
        prop_assert_eq!(
            item.total_tax() - item.total(),
            item.total() * item.tax() / Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn input_kind_does_not_matter(cents in -1_000_000i64..1_000_000i64, count in 0i64..1000) {
        let price = Decimal::new(cents, 2);
        let from_dec = Item::new(Decimal::from(count), price).unwrap();
        let from_int = Item::new(count, price.to_string()).unwrap();
        let from_str = Item::new(count.to_string(), price.to_string().as_str()).unwrap();

        prop_assert_eq!(from_dec.count(), from_int.count());
        prop_assert_eq!(from_dec.price(), from_str.price());
        prop_assert_eq!(from_dec.total(), from_int.total());
        prop_assert_eq!(from_dec.total(), from_str.total());
    }

    #[test]
    fn price_is_rounding_of_item_sum(
        items in prop::collection::vec(arb_item(), 0..20),
        rounding_result in any::<bool>(),
        rule in arb_rule(),
    ) {
        let mut inv = invoice();
        inv.rounding.rounding_result = rounding_result;
        inv.rounding.strategy = rule;
        for item in &items {
            inv.add_item(item.clone());
        }

        let net: Decimal = items.iter().map(Item::total).sum();
        let gross: Decimal = items.iter().map(Item::total_tax).sum();
        prop_assert_eq!(inv.price(), inv.rounding.apply(net));
        prop_assert_eq!(inv.price_tax(), inv.rounding.apply(gross));
    }

    #[test]
    fn totals_are_order_independent(items in prop::collection::vec(arb_item(), 1..20)) {
        let mut forward = invoice();
        let mut backward = invoice();
        for item in &items {
            forward.add_item(item.clone());
        }
        for item in items.iter().rev() {
            backward.add_item(item.clone());
        }

        prop_assert_eq!(forward.price(), backward.price());
        prop_assert_eq!(forward.price_tax(), backward.price_tax());
        prop_assert_eq!(forward.difference_in_rounding(), backward.difference_in_rounding());
    }

    #[test]
    fn difference_in_rounding_definition(
        items in prop::collection::vec(arb_item(), 0..20),
        rule in arb_rule(),
    ) {
        let mut inv = invoice();
        inv.rounding.strategy = rule;
        for item in items {
            inv.add_item(item);
        }

        let unrounded = inv.price_tax_unrounded();
        let diff = inv.difference_in_rounding();
        prop_assert_eq!(diff, inv.rounding.round(unrounded) - unrounded);
        prop_assert!(diff.abs() < Decimal::ONE);
        if unrounded.fract().is_zero() {
            prop_assert!(diff.is_zero());
        }

        // Same value with rounding of the displayed result switched on.
        inv.rounding.rounding_result = true;
        prop_assert_eq!(inv.difference_in_rounding(), diff);
        prop_assert_eq!(inv.price_tax(), unrounded + diff);
    }

    #[test]
    fn breakdown_sums_back_to_totals(items in prop::collection::vec(arb_item(), 0..30)) {
        let mut inv = invoice();
        inv.rounding.rounding_result = true;
        for item in &items {
            inv.add_item(item.clone());
        }

        let table = inv.generate_breakdown_vat_table();
        let net: Decimal = table.iter().map(|r| r.1).sum();
        let gross: Decimal = table.iter().map(|r| r.2).sum();
        let tax: Decimal = table.iter().map(|r| r.3).sum();

        prop_assert_eq!(net, inv.price_unrounded());
        prop_assert_eq!(gross, inv.price_tax_unrounded());
        prop_assert_eq!(tax, gross - net);

        // One row per distinct rate, in first-occurrence order.
        let mut seen: Vec<Decimal> = Vec::new();
        for item in &items {
            if !seen.contains(&item.tax()) {
                seen.push(item.tax());
            }
        }
        let rates: Vec<Decimal> = table.iter().map(|r| r.0).collect();
        prop_assert_eq!(rates, seen);
    }

    #[test]
    fn equal_rates_collapse_into_one_row(a in arb_item(), b in arb_item()) {
        let mut b = b;
        b.set_tax(a.tax()).unwrap();

        let mut inv = invoice();
        inv.add_item(a.clone());
        inv.add_item(b.clone());

        let table = inv.generate_breakdown_vat_table();
        prop_assert_eq!(table.len(), 1);
        prop_assert_eq!(table[0].1, a.total() + b.total());
        prop_assert_eq!(table[0].2, a.total_tax() + b.total_tax());
        prop_assert_eq!(table[0].3, a.tax_amount() + b.tax_amount());
    }

    #[test]
    fn garbage_text_never_panics(s in "\\PC*") {
        let _ = Item::new(s.as_str(), s.as_str());
        let _ = Item::new(1, 1).unwrap().with_tax(s.as_str());
    }
}
