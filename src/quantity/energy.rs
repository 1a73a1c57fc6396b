quantity!(
    /// Energy in kilowatt-hours, as reported by the meters.
    KilowattHours, via: f64, suffix: "kWh", precision: 2
);
