pub trait Zero {
    const ZERO: Self;
}
