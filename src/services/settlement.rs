//! Settlement reduction
//!
//! Greedy pairing of the front creditor with the front debtor, both lists
//! kept in balance order. This is fast and usually minimal, but it is not
//! guaranteed to produce the fewest transfers possible.

use crate::models::{BalanceRecord, Money, Person, Settlement, SettlementPolicy};

/// A participant's balance while transfers are being assigned
struct Open<'a> {
    person: &'a Person,
    remaining: Money,
}

impl<'a> Open<'a> {
    fn from_record(record: &'a BalanceRecord) -> Self {
        Self {
            person: &record.person,
            remaining: record.balance,
        }
    }
}

/// Reduce balances to a list of transfers that settles everyone
///
/// `balances` must be sorted highest first (as returned by
/// [`compute_balances`](super::balance::compute_balances)). Each step pays
/// the front debtor's debt toward the front creditor, so the output is at
/// most `creditors + debtors - 1` transfers long, in the order they were
/// assigned.
///
/// Amounts are exact; every step clears at least one party completely.
/// Round them with [`SettlementPolicy::decimal_places`] when showing or
/// exporting them.
pub fn compute_settlements(
    balances: &[BalanceRecord],
    policy: &SettlementPolicy,
) -> Vec<Settlement> {
    let threshold = policy.threshold();

    let mut creditors: Vec<Open> = balances
        .iter()
        .filter(|r| r.balance.is_positive() && !r.balance.is_settled(threshold))
        .map(Open::from_record)
        .collect();
    let mut debtors: Vec<Open> = balances
        .iter()
        .filter(|r| r.balance.is_negative() && !r.balance.is_settled(threshold))
        .map(Open::from_record)
        .collect();

    // Cursors into the two lists; entries before them are settled
    let (mut ci, mut di) = (0, 0);
    let mut settlements = Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));

    while ci < creditors.len() && di < debtors.len() {
        let creditor = &mut creditors[ci];
        let debtor = &mut debtors[di];

        let amount = creditor.remaining.min(-debtor.remaining);

        settlements.push(Settlement {
            from: debtor.person.clone(),
            to: creditor.person.clone(),
            amount,
        });

        creditor.remaining -= amount;
        debtor.remaining += amount;

        if creditor.remaining.is_settled(threshold) {
            ci += 1;
        }
        if debtor.remaining.is_settled(threshold) {
            di += 1;
        }
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = settlements.len(),
        "reduced balances to settlements"
    );

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, balance: f64) -> BalanceRecord {
        let (paid, owed) = if balance >= 0.0 {
            (balance, 0.0)
        } else {
            (0.0, -balance)
        };
        BalanceRecord::new(Person::new(name), Money::new(paid), Money::new(owed))
    }

    fn summary(settlements: &[Settlement]) -> Vec<(String, String, f64)> {
        settlements
            .iter()
            .map(|s| (s.from.name.clone(), s.to.name.clone(), s.amount.amount()))
            .collect()
    }

    #[test]
    fn test_dinner_settlements() {
        let balances = vec![record("A", 60.0), record("B", -30.0), record("C", -30.0)];

        let settlements = compute_settlements(&balances, &SettlementPolicy::default());

        assert_eq!(
            summary(&settlements),
            vec![
                ("B".to_string(), "A".to_string(), 30.0),
                ("C".to_string(), "A".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn test_front_entries_pair_first() {
        let balances = vec![
            record("A", 50.0),
            record("B", 10.0),
            record("C", -20.0),
            record("D", -40.0),
        ];

        let settlements = compute_settlements(&balances, &SettlementPolicy::default());

        // Debtors keep input order, so C (the first listed) pays first
        assert_eq!(
            summary(&settlements),
            vec![
                ("C".to_string(), "A".to_string(), 20.0),
                ("D".to_string(), "A".to_string(), 30.0),
                ("D".to_string(), "B".to_string(), 10.0),
            ]
        );
    }

    #[test]
    fn test_near_zero_balances_are_ignored() {
        let balances = vec![record("A", 0.009), record("B", 0.0), record("C", -0.009)];
        assert!(compute_settlements(&balances, &SettlementPolicy::default()).is_empty());
        assert!(compute_settlements(&[], &SettlementPolicy::default()).is_empty());
    }

    #[test]
    fn test_amounts_stay_exact() {
        let third = 100.0 / 3.0;
        let balances = vec![
            record("A", 2.0 * third),
            record("B", -third),
            record("C", -third),
        ];

        let settlements = compute_settlements(&balances, &SettlementPolicy::default());

        assert_eq!(settlements.len(), 2);
        assert!(settlements.iter().all(|s| s.amount == Money::new(third)));
        assert_eq!(settlements[0].amount.round_to(2), Money::new(33.33));
    }

    #[test]
    fn test_odd_cents_leave_no_residual() {
        // 30.012 does not split into whole cents
        let share = 30.012 / 3.0;
        let balances = vec![
            record("A", 30.012),
            record("B", -share),
            record("C", -share),
            record("D", -share),
        ];

        let settlements = compute_settlements(&balances, &SettlementPolicy::default());
        assert_eq!(settlements.len(), 3);

        let received: Money = settlements.iter().map(|s| s.amount).sum();
        let residual = Money::new(30.012) - received;
        assert!(residual.is_settled(SettlementPolicy::DEFAULT_THRESHOLD));
        assert!(residual.amount().abs() < 1e-9);
    }

    #[test]
    fn test_transfer_bound() {
        let balances = vec![
            record("A", 70.0),
            record("B", 5.0),
            record("C", -25.0),
            record("D", -25.0),
            record("E", -25.0),
        ];

        let settlements = compute_settlements(&balances, &SettlementPolicy::default());
        assert!(settlements.len() <= 2 + 3 - 1);
        assert!(settlements.iter().all(|s| s.amount.is_positive()));
    }

    #[test]
    fn test_whole_unit_policy() {
        let policy = SettlementPolicy::new(1.0, 0).unwrap();
        let balances = vec![record("A", 10.4), record("B", -10.4)];

        let settlements = compute_settlements(&balances, &policy);
        assert_eq!(summary(&settlements), vec![("B".into(), "A".into(), 10.4)]);
        assert_eq!(settlements[0].amount.round_to(policy.decimal_places()), Money::new(10.0));
    }
}
