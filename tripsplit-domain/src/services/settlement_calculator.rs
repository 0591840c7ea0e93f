use crate::model::{Money, NamedTransfer, PersonBalances, PersonDirectory, PersonId, Transfer};

/// Settlement calculation service
///
/// Matches the largest remaining debtor with the largest remaining creditor
/// until one side runs out. The plan is deterministic but not guaranteed to
/// use the fewest possible transfers.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementCalculator;

struct Party<'a> {
    id: &'a PersonId,
    remaining: Money,
}

impl SettlementCalculator {
    /// Calculate transfers that bring every balance within tolerance of zero
    ///
    /// # Arguments
    /// * `balances` - Net balance per person (positive: owed money)
    ///
    /// # Returns
    /// Transfers in the order they were matched
    pub fn calculate(&self, balances: &PersonBalances) -> Vec<Transfer> {
        let mut transfers = Vec::new();
        self.match_parties(balances, |from, to, amount| {
            transfers.push(Transfer {
                from: from.clone(),
                to: to.clone(),
                amount,
            });
        });
        transfers
    }

    /// Same plan as [`SettlementCalculator::calculate`], reported by display name.
    ///
    /// A transfer involving a person the directory does not know is left out
    /// of the result; its amount is still consumed from both sides.
    pub fn calculate_named(
        &self,
        balances: &PersonBalances,
        directory: &dyn PersonDirectory,
    ) -> Vec<NamedTransfer> {
        let mut transfers = Vec::new();
        self.match_parties(balances, |from, to, amount| {
            match (directory.display_name(from), directory.display_name(to)) {
                (Some(from_name), Some(to_name)) => transfers.push(NamedTransfer {
                    from: from_name.to_owned(),
                    to: to_name.to_owned(),
                    amount,
                }),
                _ => tracing::debug!(
                    from = %from,
                    to = %to,
                    amount = %amount,
                    "Omitting transfer for person missing from directory"
                ),
            }
        });
        transfers
    }

    /// Runs the matching, handing each transfer to `emit`.
    ///
    /// Returns the total magnitude left unmatched on both sides.
    fn match_parties<'a, F>(&self, balances: &'a PersonBalances, mut emit: F) -> Money
    where
        F: FnMut(&'a PersonId, &'a PersonId, Money),
    {
        let mut debtors = Vec::new();
        let mut creditors = Vec::new();
        for (id, &balance) in balances {
            if balance < -Money::TOLERANCE {
                debtors.push(Party {
                    id,
                    remaining: -balance,
                });
            } else if balance > Money::TOLERANCE {
                creditors.push(Party {
                    id,
                    remaining: balance,
                });
            }
        }

        // Stable sorts: equal magnitudes keep balance-map order.
        debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

        let (mut i, mut j) = (0, 0);
        let mut emitted = 0usize;
        while let (Some(debtor), Some(creditor)) = (debtors.get_mut(i), creditors.get_mut(j)) {
            let amount = debtor.remaining.min(creditor.remaining);
            emit(debtor.id, creditor.id, amount);
            emitted += 1;

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if debtor.remaining < Money::TOLERANCE {
                i += 1;
            }
            if creditor.remaining < Money::TOLERANCE {
                j += 1;
            }
        }

        let leftover: Money = debtors
            .iter()
            .chain(&creditors)
            .map(|party| party.remaining)
            .sum();
        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = emitted,
            leftover = %leftover,
            "Settlement matching finished"
        );
        if !leftover.to_cents().is_zero() {
            tracing::warn!(
                leftover = %leftover,
                "Balances do not net to zero; dropping unmatched remainder"
            );
        }

        leftover
    }
}
