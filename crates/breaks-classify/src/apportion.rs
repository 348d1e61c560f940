//! Pro-rata apportionment of a class budget between two groups

use breaks_core::{Error, Result};
use num_traits::{NumCast, ToPrimitive};

/// Types that can be divided proportionally.
///
/// Integers are split into whole shares, floats are split exactly.
pub trait ProRata: Copy + Sized {
    /// Split `n` into two shares proportional to `n_1` and `n_2`
    fn pro_rata(n: Self, n_1: Self, n_2: Self) -> Result<(Self, Self)>;
}

/// Divide the budget `n` between two groups weighted `n_1` and `n_2`.
///
/// For floats this is plain proportional division. For integers each side with
/// a weight above the ideal group size `N / n` gets the floor of its share, and
/// the one left-over unit goes to the side with the larger remainder relative
/// to its share; a side whose weight does not exceed one ideal group gets
/// exactly one unit.
///
/// Fails when the weights sum to zero or any input is negative or non-finite.
///
/// # Examples
///
/// ```rust
/// use breaks_classify::pro_rata;
///
/// assert_eq!(pro_rata(5usize, 37, 63).unwrap(), (2, 3));
/// assert_eq!(pro_rata(4usize, 30, 10).unwrap(), (3, 1));
/// assert_eq!(pro_rata(3.0, 1.0, 2.0).unwrap(), (1.0, 2.0));
/// assert!(pro_rata(3usize, 0, 0).is_err());
/// ```
pub fn pro_rata<T: ProRata>(n: T, n_1: T, n_2: T) -> Result<(T, T)> {
    T::pro_rata(n, n_1, n_2)
}

fn zero_total() -> Error {
    Error::InvalidInput("cannot divide proportionally with zero total weight".to_string())
}

fn apportion_counts(n: u64, w_1: u64, w_2: u64) -> Result<(u64, u64)> {
    let total = w_1
        .checked_add(w_2)
        .ok_or_else(|| Error::InvalidInput("pro_rata weights overflow".to_string()))?;
    if total == 0 {
        return Err(zero_total());
    }
    if n == 0 {
        return Ok((0, 0));
    }

    // Ideal number of points per unit of budget
    let m = total as f64 / n as f64;
    let (w_1, w_2) = (w_1 as f64, w_2 as f64);

    if w_1 <= m {
        return Ok((1, n - 1));
    }
    if w_2 <= m {
        return Ok((n - 1, 1));
    }

    let q_1 = (w_1 / m).floor();
    let q_2 = (w_2 / m).floor();
    let r_1 = w_1 - q_1 * m;
    let r_2 = w_2 - q_2 * m;
    let (s_1, s_2) = (q_1 as u64, q_2 as u64);

    // Both shares were whole numbers
    if s_1 + s_2 >= n {
        let s_1 = s_1.min(n);
        return Ok((s_1, n - s_1));
    }

    if r_1 / q_1 > r_2 / q_2 {
        Ok((s_1 + 1, n - s_1 - 1))
    } else {
        Ok((n - s_2 - 1, s_2 + 1))
    }
}

fn cast_back<T: NumCast>(value: u64) -> Result<T> {
    <T as NumCast>::from(value)
        .ok_or_else(|| Error::InvalidInput(format!("pro_rata share {value} does not fit the input type")))
}

macro_rules! impl_pro_rata_int {
    ($($t:ty),*) => {
        $(
            impl ProRata for $t {
                fn pro_rata(n: Self, n_1: Self, n_2: Self) -> Result<(Self, Self)> {
                    let to_u64 = |x: Self| {
                        x.to_u64().ok_or_else(|| {
                            Error::InvalidInput(format!("pro_rata inputs must be non-negative, got {x}"))
                        })
                    };
                    let (a, b) = apportion_counts(to_u64(n)?, to_u64(n_1)?, to_u64(n_2)?)?;
                    Ok((cast_back(a)?, cast_back(b)?))
                }
            }
        )*
    };
}

macro_rules! impl_pro_rata_float {
    ($($t:ty),*) => {
        $(
            impl ProRata for $t {
                fn pro_rata(n: Self, n_1: Self, n_2: Self) -> Result<(Self, Self)> {
                    if [n, n_1, n_2].iter().any(|x| !x.is_finite() || *x < 0.0) {
                        return Err(Error::InvalidInput(format!(
                            "pro_rata inputs must be finite and non-negative, got ({n}, {n_1}, {n_2})"
                        )));
                    }
                    let total = n_1 + n_2;
                    if total == 0.0 {
                        return Err(zero_total());
                    }
                    Ok((n * n_1 / total, n * n_2 / total))
                }
            }
        )*
    };
}

impl_pro_rata_int!(usize, u32, u64, i32, i64);
impl_pro_rata_float!(f32, f64);
