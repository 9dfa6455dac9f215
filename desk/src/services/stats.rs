//! # Dashboard Statistics
//!
//! Pure aggregation over fetched credit lists for the dashboard view.

use shared::{Credit, CreditKind, CreditStatus};

/// Aggregate figures over a credit list.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditStats {
    pub total_credits: usize,
    pub accepted_credits: usize,
    pub rejected_credits: usize,
    pub in_progress_credits: usize,
    pub total_amount: f64,
    pub average_amount: f64,
}

/// Per-kind count and volume.
#[derive(Debug, Clone, PartialEq)]
pub struct KindBreakdown {
    pub kind: CreditKind,
    pub count: usize,
    pub total_amount: f64,
}

/// Compute dashboard figures from a credit list.
pub fn credit_stats(credits: &[Credit]) -> CreditStats {
    let count_with = |status: CreditStatus| {
        credits
            .iter()
            .filter(|credit| credit.status == status)
            .count()
    };

    let total_amount: f64 = credits.iter().map(|credit| credit.amount).sum();
    let average_amount = if credits.is_empty() {
        0.0
    } else {
        total_amount / credits.len() as f64
    };

    CreditStats {
        total_credits: credits.len(),
        accepted_credits: count_with(CreditStatus::Accepted),
        rejected_credits: count_with(CreditStatus::Rejected),
        in_progress_credits: count_with(CreditStatus::InProgress),
        total_amount,
        average_amount,
    }
}

/// Group credits by kind, in display order. Kinds with no credits are
/// included with zero figures so the dashboard renders a stable set of rows.
pub fn credits_by_kind(credits: &[Credit]) -> Vec<KindBreakdown> {
    CreditKind::all()
        .iter()
        .map(|&kind| {
            let of_kind: Vec<&Credit> = credits
                .iter()
                .filter(|credit| credit.kind() == kind)
                .collect();
            KindBreakdown {
                kind,
                count: of_kind.len(),
                total_amount: of_kind.iter().map(|credit| credit.amount).sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::CreditDetails;

    fn credit(status: CreditStatus, amount: f64, details: CreditDetails) -> Credit {
        Credit {
            id: Some(1),
            amount,
            duration: 12,
            interest_rate: 0.05,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            client_id: 1,
            status,
            details,
        }
    }

    #[test]
    fn test_stats_over_empty_list() {
        let stats = credit_stats(&[]);
        assert_eq!(stats.total_credits, 0);
        assert_eq!(stats.total_amount, 0.0);
        assert_eq!(stats.average_amount, 0.0);
    }

    #[test]
    fn test_stats_aggregation() {
        let credits = vec![
            credit(
                CreditStatus::Accepted,
                10000.0,
                CreditDetails::Personal {
                    motif: "car".to_string(),
                },
            ),
            credit(
                CreditStatus::InProgress,
                20000.0,
                CreditDetails::Professional {
                    reason: "stock".to_string(),
                    company_name: "Atlas SARL".to_string(),
                },
            ),
            credit(
                CreditStatus::Rejected,
                30000.0,
                CreditDetails::Personal {
                    motif: "travel".to_string(),
                },
            ),
        ];

        let stats = credit_stats(&credits);
        assert_eq!(stats.total_credits, 3);
        assert_eq!(stats.accepted_credits, 1);
        assert_eq!(stats.rejected_credits, 1);
        assert_eq!(stats.in_progress_credits, 1);
        assert!((stats.total_amount - 60000.0).abs() < 1e-9);
        assert!((stats.average_amount - 20000.0).abs() < 1e-9);

        let by_kind = credits_by_kind(&credits);
        assert_eq!(by_kind.len(), 3);
        assert_eq!(by_kind[0].kind, CreditKind::Personal);
        assert_eq!(by_kind[0].count, 2);
        assert!((by_kind[0].total_amount - 40000.0).abs() < 1e-9);
        // No real-estate credits: present with zero figures
        assert_eq!(by_kind[1].kind, CreditKind::RealEstate);
        assert_eq!(by_kind[1].count, 0);
        assert_eq!(by_kind[1].total_amount, 0.0);
    }
}
