use num::Float;

/// Evenly spaced samples over a closed interval, end points included.
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = if n > 1 {
            let num_steps = F::from(n - 1).unwrap_or_else(F::infinity);
            (max - min) / num_steps
        } else {
            F::zero()
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = self.index;
            self.index += 1;
            F::from(i).map(|i| self.start + self.step * i)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

/// Collects `n` evenly spaced samples from `min` to `max`.
pub fn linspace<F: Float>(min: F, max: F, n: usize) -> Vec<F> {
    Linspace::new(min, max, n).collect()
}

#[test]
fn test_linspace() {
    assert_eq!(linspace(0., 1., 5), vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(linspace(-10., 10., 3), vec![-10., 0., 10.]);
    assert_eq!(linspace(2.5f32, 7., 1), vec![2.5]);
    assert!(linspace(0., 1., 0).is_empty());

    let samples = linspace(-10f64, 10., 1000);

    assert_eq!(samples.len(), 1000);
    assert_eq!(samples[0], -10.);
    approx::assert_relative_eq!(samples[999], 10., epsilon = 1e-12);
}
