use super::math::square;
use crate::Float;

/// Compute the Euclidean distance between the two sRGB channel triples.
///
/// The distance treats red, green, and blue as orthogonal axes of equal weight
/// and hence is not perceptually uniform.
pub(crate) fn to_distance(channels1: &[Float; 3], channels2: &[Float; 3]) -> Float {
    let [r1, g1, b1] = *channels1;
    let [r2, g2, b2] = *channels2;

    (square(r1 - r2) + square(g1 - g2) + square(b1 - b2)).sqrt()
}

#[cfg(test)]
mod test {
    use super::to_distance;
    use crate::Float;

    #[test]
    fn test_distance() {
        assert_eq!(to_distance(&[0.2, 0.4, 0.6], &[0.2, 0.4, 0.6]), 0.0);
        assert_eq!(to_distance(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), (2.0 as Float).sqrt());
        assert_eq!(to_distance(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]), (3.0 as Float).sqrt());
        assert_eq!(to_distance(&[0.0, 0.3, 0.0], &[0.0, 0.0, 0.4]), 0.5);
    }
}
