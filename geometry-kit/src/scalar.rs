use num_traits::Float;

/// `0.5` in any float type.
pub(crate) fn half<Num: Float>() -> Num {
    Num::one() / (Num::one() + Num::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_is_exact() {
        assert_eq!(half::<f64>(), 0.5);
        assert_eq!(half::<f32>(), 0.5);
    }
}
