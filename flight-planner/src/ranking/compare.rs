//! Route comparators.
//!
//! Each comparator is a total order over [`Route`]; the sorting
//! algorithms are generic over them. The [`none_last`] adapter lifts a
//! comparator to `Option<Route>` with the convention that an absent route
//! sorts after every present one.

use std::cmp::Ordering;

use crate::domain::Route;

/// Order by total price, ascending (cheapest first).
pub fn by_price(a: &Route, b: &Route) -> Ordering {
    a.total_price.total_cmp(&b.total_price)
}

/// Order by total duration, ascending (fastest first).
pub fn by_duration(a: &Route, b: &Route) -> Ordering {
    a.total_duration.cmp(&b.total_duration)
}

/// Order by stopover count, ascending (fewest first).
pub fn by_stopovers(a: &Route, b: &Route) -> Ordering {
    a.stopovers.cmp(&b.stopovers)
}

/// Composite order: price ascending, ties broken by duration ascending,
/// further ties broken by stopovers ascending.
pub fn combined(a: &Route, b: &Route) -> Ordering {
    by_price(a, b)
        .then_with(|| by_duration(a, b))
        .then_with(|| by_stopovers(a, b))
}

/// Lift a comparator over `T` to one over `Option<T>`, sorting `None`
/// after every `Some`.
pub fn none_last<T>(
    compare: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&Option<T>, &Option<T>) -> Ordering {
    move |a, b| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: u32, price: f64, duration: i64, stopovers: u32) -> Route {
        Route {
            id,
            flights: id.to_string(),
            total_duration: duration,
            total_price: price,
            stopovers,
        }
    }

    #[test]
    fn price_ascending() {
        let cheap = route(1, 100.0, 300, 1);
        let pricey = route(2, 200.0, 100, 0);
        assert_eq!(by_price(&cheap, &pricey), Ordering::Less);
        assert_eq!(by_price(&pricey, &cheap), Ordering::Greater);
        assert_eq!(by_price(&cheap, &cheap), Ordering::Equal);
    }

    #[test]
    fn duration_ascending() {
        let fast = route(1, 300.0, 100, 1);
        let slow = route(2, 100.0, 200, 0);
        assert_eq!(by_duration(&fast, &slow), Ordering::Less);
    }

    #[test]
    fn stopovers_ascending() {
        let direct = route(1, 300.0, 400, 0);
        let hopper = route(2, 100.0, 200, 2);
        assert_eq!(by_stopovers(&direct, &hopper), Ordering::Less);
    }

    #[test]
    fn combined_breaks_ties_in_sequence() {
        let a = route(1, 100.0, 200, 1);
        let b = route(2, 100.0, 300, 0);
        let c = route(3, 100.0, 200, 2);

        // Same price: duration decides
        assert_eq!(combined(&a, &b), Ordering::Less);
        // Same price and duration: stopovers decide
        assert_eq!(combined(&a, &c), Ordering::Less);
        // Price dominates everything else
        let expensive = route(4, 150.0, 1, 0);
        assert_eq!(combined(&a, &expensive), Ordering::Less);
    }

    #[test]
    fn none_sorts_after_every_route() {
        let compare = none_last(by_price);
        let present = Some(route(1, 100.0, 100, 0));
        let absent: Option<Route> = None;

        assert_eq!(compare(&present, &absent), Ordering::Less);
        assert_eq!(compare(&absent, &present), Ordering::Greater);
        assert_eq!(compare(&absent, &absent), Ordering::Equal);
    }
}
