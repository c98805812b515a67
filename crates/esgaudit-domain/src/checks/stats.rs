//! Mean / sample-variance summaries for industry baselines.

/// Count, mean and sum of squared deviations (`m2`) of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub m2: f64,
}

impl Summary {
    /// Two-pass summary of `values`.
    pub fn of(values: &[f64]) -> Self {
        Self::two_pass(|| values.iter().copied())
    }

    fn two_pass<I, F>(sample: F) -> Self
    where
        I: Iterator<Item = f64>,
        F: Fn() -> I,
    {
        let (count, sum) = sample().fold((0usize, 0.0f64), |(n, s), v| (n + 1, s + v));
        Self::from_sum(count, sum, sample)
    }

    fn from_sum<I, F>(count: usize, sum: f64, sample: F) -> Self
    where
        I: Iterator<Item = f64>,
        F: Fn() -> I,
    {
        if count == 0 {
            return Self::EMPTY;
        }
        let mean = sum / count as f64;
        let m2 = sample().map(|v| (v - mean) * (v - mean)).sum();
        Self { count, mean, m2 }
    }

    const EMPTY: Self = Self {
        count: 0,
        mean: 0.0,
        m2: 0.0,
    };

    /// Sample standard deviation (n - 1). `None` with fewer than two values.
    pub fn sample_std_dev(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        Some((self.m2 / (self.count - 1) as f64).sqrt())
    }
}

/// The most extreme value of a sample under some ordering, how often it occurs,
/// and the runner-up distinct value.
#[derive(Clone, Copy, Debug)]
struct Extreme {
    value: f64,
    count: usize,
    next: Option<f64>,
}

impl Extreme {
    fn of(values: &[f64], beats: fn(f64, f64) -> bool) -> Option<Self> {
        let mut it = values.iter().copied();
        let mut best = Self {
            value: it.next()?,
            count: 1,
            next: None,
        };
        for v in it {
            if v == best.value {
                best.count += 1;
            } else if beats(v, best.value) {
                best.next = Some(best.value);
                best.value = v;
                best.count = 1;
            } else if best.next.is_none_or(|n| beats(v, n)) {
                best.next = Some(v);
            }
        }
        Some(best)
    }

    /// The extreme once a single occurrence of `value` is removed.
    fn without(&self, value: f64) -> Option<f64> {
        if value == self.value && self.count == 1 {
            self.next
        } else {
            Some(self.value)
        }
    }
}

/// Statistics of an industry that answer "everyone but this supplier" in
/// constant time.
///
/// Built in two passes over the sample. A removal downdates the group sums;
/// when the remaining values are all equal the summary is exact (mean equal to
/// that value, `m2` zero) so identical peers never leave a rounding residue.
#[derive(Clone, Copy, Debug)]
pub struct LeaveOneOut {
    group: Summary,
    sum: f64,
    min: Option<Extreme>,
    max: Option<Extreme>,
}

impl LeaveOneOut {
    pub fn new(values: &[f64]) -> Self {
        let sum = values.iter().fold(0.0f64, |s, v| s + v);
        Self {
            group: Summary::from_sum(values.len(), sum, || values.iter().copied()),
            sum,
            min: Extreme::of(values, |a, b| a < b),
            max: Extreme::of(values, |a, b| a > b),
        }
    }

    /// Summary of the whole sample.
    pub fn group(&self) -> Summary {
        self.group
    }

    /// Summary of the sample with one occurrence of `value` removed.
    ///
    /// `value` must be a member of the sample.
    pub fn without(&self, value: f64) -> Summary {
        let Summary { count, mean, m2 } = self.group;
        if count <= 1 {
            return Summary::EMPTY;
        }
        let rest = count - 1;

        let lo = self.min.and_then(|e| e.without(value));
        let hi = self.max.and_then(|e| e.without(value));
        if let (Some(lo), Some(hi)) = (lo, hi)
            && lo == hi
        {
            return Summary {
                count: rest,
                mean: lo,
                m2: 0.0,
            };
        }

        let rest_mean = (self.sum - value) / rest as f64;
        let rest_m2 = (m2 - (value - mean) * (value - rest_mean)).max(0.0);
        Summary {
            count: rest,
            mean: rest_mean,
            m2: rest_m2,
        }
    }
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
