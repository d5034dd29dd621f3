use ezytix_core::flight::Flight;

/// Price totals for the booking page. Backend prices are decimal strings;
/// missing or unparseable prices count as zero. No rounding beyond the
/// display formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub total_outbound: f64,
    pub total_inbound: f64,
    pub grand_total: f64,
}

/// Grand total = outbound per-seat price x passenger count, plus the same
/// for the inbound leg when one is selected.
pub fn quote(outbound: &Flight, inbound: Option<&Flight>, passenger_count: usize) -> PriceBreakdown {
    let count = passenger_count as f64;
    let total_outbound = outbound.lead_price() * count;
    let total_inbound = inbound.map(|f| f.lead_price() * count).unwrap_or(0.0);

    PriceBreakdown {
        total_outbound,
        total_inbound,
        grand_total: total_outbound + total_inbound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::flight;

    #[test]
    fn test_round_trip_grand_total() {
        let outbound = flight(101, "1500000");
        let inbound = flight(202, "1150000");

        let breakdown = quote(&outbound, Some(&inbound), 2);
        assert_eq!(breakdown.total_outbound, 3_000_000.0);
        assert_eq!(breakdown.total_inbound, 2_300_000.0);
        assert_eq!(breakdown.grand_total, 5_300_000.0);
    }

    #[test]
    fn test_one_way_inbound_is_zero() {
        let outbound = flight(101, "1500000");
        let breakdown = quote(&outbound, None, 3);
        assert_eq!(breakdown.total_inbound, 0.0);
        assert_eq!(breakdown.grand_total, 4_500_000.0);
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let outbound = flight(101, "not-a-price");
        let breakdown = quote(&outbound, None, 2);
        assert_eq!(breakdown.grand_total, 0.0);
    }
}
