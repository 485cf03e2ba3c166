use crate::rng::RandomSource;

/// Picks hole indices, never the same hole twice in a row.
#[derive(Clone, Debug, Default)]
pub struct HoleChooser {
    last: Option<usize>,
}

impl HoleChooser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Choose a hole in `[0, len)` other than the previous one.
    ///
    /// Draws uniformly over the eligible holes instead of retrying, so it always
    /// terminates. With a single hole the repeat is unavoidable.
    pub fn choose(&mut self, len: usize, rng: &mut impl RandomSource) -> Option<usize> {
        let idx = match (len, self.last) {
            (0, _) => return None,
            (1, _) => 0,
            (_, Some(last)) if last < len => {
                let pick = scale(rng.next_f64(), len - 1);
                if pick >= last { pick + 1 } else { pick }
            }
            _ => scale(rng.next_f64(), len),
        };
        self.last = Some(idx);
        Some(idx)
    }
}

fn scale(r: f64, n: usize) -> usize {
    ((r * n as f64).floor() as usize).min(n - 1)
}
