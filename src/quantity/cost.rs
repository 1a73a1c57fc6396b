use crate::quantity::{energy::KilowattHours, price::KilowattHourPrice};

quantity!(Cost, via: f64, suffix: "TWD", precision: 2);

implement_mul!(KilowattHours, KilowattHourPrice, Cost);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_energy_times_price() {
        let cost = KilowattHours(8.0) * KilowattHourPrice(4.02);
        assert_abs_diff_eq!(cost.0, 32.16);
    }

    #[test]
    fn test_price_times_energy() {
        let cost = KilowattHourPrice(2.5) * KilowattHours(2.0);
        assert_abs_diff_eq!(cost.0, 5.0);
    }
}
