use crate::random::UniformSource;

/// Stable partition of `items` into `(dev, test)`.
///
/// Each item independently takes one draw from `source`; a draw strictly
/// below `dev_ratio` sends it to dev. Relative order is kept on both sides,
/// so the dev size is binomial around `dev_ratio * items.len()` rather than
/// exact.
pub fn split<T, S>(items: Vec<T>, dev_ratio: f64, source: &mut S) -> (Vec<T>, Vec<T>)
where
    S: UniformSource + ?Sized,
{
    let mut dev = Vec::new();
    let mut test = Vec::new();
    for item in items {
        if source.next_uniform() < dev_ratio {
            dev.push(item);
        } else {
            test.push(item);
        }
    }
    (dev, test)
}
