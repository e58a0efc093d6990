use serde::{Deserialize, Serialize};

use super::{order::Order, ticket::TicketCategory};

/// Price of a single ticket per category, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl PriceTable {
    pub fn price(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: 25,
            child: 15,
            infant: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingResult {
    pub total_charge: u64,
    pub total_seats: u64,
}

/// Computes the charge and the number of seats for an order.
///
/// Does not validate the order; callers price only admissible orders.
pub fn price_order(order: &Order, prices: &PriceTable) -> PricingResult {
    order.requests.iter().fold(
        PricingResult {
            total_charge: 0,
            total_seats: 0,
        },
        |mut result, request| {
            let count = u64::from(request.count());
            result.total_charge = result
                .total_charge
                .saturating_add(count.saturating_mul(prices.price(request.category())));
            if request.category().occupies_seat() {
                result.total_seats = result.total_seats.saturating_add(count);
            }
            result
        },
    )
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::models::ticket::TicketRequest;

    fn order(requests: &[(TicketCategory, u32)]) -> Order {
        Order::new(
            1,
            requests
                .iter()
                .map(|(c, n)| TicketRequest::new(*c, *n))
                .collect(),
        )
    }

    #[test]
    fn test_price_order() {
        use crate::models::ticket::TicketCategory::*;
        let cases = vec![
            (vec![(Adult, 2), (Child, 1)], 65, 3),
            (vec![(Adult, 2), (Child, 3), (Infant, 1)], 95, 5),
            (vec![(Adult, 3), (Child, 2), (Infant, 1)], 105, 5),
            (vec![(Adult, 1), (Child, 2), (Infant, 3)], 55, 3),
            (vec![(Adult, 20), (Child, 5)], 575, 25),
            (vec![], 0, 0),
        ];

        for (requests, charge, seats) in cases {
            let result = price_order(&order(&requests), &PriceTable::default());
            assert_eq!(charge, result.total_charge, "{requests:?}");
            assert_eq!(seats, result.total_seats, "{requests:?}");
        }
    }

    #[test]
    fn test_price_table_is_configurable() {
        let prices = PriceTable {
            adult: 10,
            child: 5,
            infant: 1,
        };
        let result = price_order(
            &order(&[
                (TicketCategory::Adult, 1),
                (TicketCategory::Child, 1),
                (TicketCategory::Infant, 2),
            ]),
            &prices,
        );
        assert_eq!(17, result.total_charge);
        assert_eq!(2, result.total_seats);
    }

    #[test]
    fn test_infants_are_free_and_seatless_for_random_orders() {
        let mut rng = rand::thread_rng();
        let prices = PriceTable::default();
        for _ in 0..500 {
            let adults = rng.gen_range(0..20);
            let children = rng.gen_range(0..20);
            let infants = rng.gen_range(0..20);
            let order = order(&[
                (TicketCategory::Infant, infants),
                (TicketCategory::Child, children),
                (TicketCategory::Adult, adults),
            ]);

            let result = price_order(&order, &prices);
            assert_eq!(
                25 * u64::from(adults) + 15 * u64::from(children),
                result.total_charge
            );
            assert_eq!(u64::from(adults + children), result.total_seats);
            assert_eq!(result, price_order(&order, &prices));
        }
    }
}
