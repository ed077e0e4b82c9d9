//! Integer helpers shared by the concepts: digits, divisors, powers.
//!
//! Everything here works on the magnitude of the number where sign carries no
//! meaning (digits, divisors). Perfect cubes keep the sign.

/// Decimal digits of `|n|`, most significant first. `0` yields `[0]`.
pub fn digits(n: i64) -> Vec<u8> {
  let mut m = n.unsigned_abs();
  if m == 0 {
    return vec![0];
  }
  let mut out = Vec::new();
  while m > 0 {
    out.push((m % 10) as u8);
    m /= 10;
  }
  out.reverse();
  out
}

pub fn digit_count(n: i64) -> usize {
  digits(n).len()
}

pub fn digit_sum(n: i64) -> i64 {
  digits(n).iter().map(|d| i64::from(*d)).sum()
}

/// Positive divisors of `|n|` in ascending order. `0` has no finite divisor list.
pub fn factors(n: i64) -> Vec<i64> {
  let m = n.unsigned_abs();
  if m == 0 {
    return Vec::new();
  }
  let mut low = Vec::new();
  let mut high = Vec::new();
  let mut d: u64 = 1;
  while d * d <= m {
    if m % d == 0 {
      low.push(d as i64);
      if d * d != m {
        high.push((m / d) as i64);
      }
    }
    d += 1;
  }
  high.reverse();
  low.extend(high);
  low
}

/// Primes are positive with exactly two divisors.
pub fn is_prime(n: i64) -> bool {
  n > 1 && factors(n).len() == 2
}

pub fn distinct_prime_factor_count(n: i64) -> usize {
  let mut m = n.unsigned_abs();
  let mut count = 0;
  let mut p: u64 = 2;
  while p * p <= m {
    if m % p == 0 {
      count += 1;
      while m % p == 0 {
        m /= p;
      }
    }
    p += 1;
  }
  if m > 1 {
    count += 1;
  }
  count
}

pub fn is_perfect_square(n: i64) -> bool {
  if n < 0 {
    return false;
  }
  let r = (n as f64).sqrt().round() as i64;
  (r - 1..=r + 1).any(|c| c >= 0 && c.checked_mul(c) == Some(n))
}

/// Defined for negatives: `-27` is `(-3)^3`.
pub fn is_perfect_cube(n: i64) -> bool {
  let m = n.unsigned_abs() as f64;
  let r = m.cbrt().round() as i64;
  (r - 1..=r + 1).any(|c| {
    c >= 0
      && c.checked_mul(c)
        .and_then(|sq| sq.checked_mul(c))
        .is_some_and(|cube| cube as u64 == n.unsigned_abs())
  })
}

pub fn is_digit_factor(n: i64, d: u8) -> bool {
  d != 0 && n % i64::from(d) == 0
}

pub fn is_prime_digit(d: u8) -> bool {
  matches!(d, 2 | 3 | 5 | 7)
}

pub fn is_square_digit(d: u8) -> bool {
  matches!(d, 0 | 1 | 4 | 9)
}

pub fn is_cube_digit(d: u8) -> bool {
  matches!(d, 0 | 1 | 8)
}

/// How many digits of `n` satisfy `pred`.
pub fn count_digits(n: i64, pred: impl Fn(u8) -> bool) -> usize {
  digits(n).into_iter().filter(|d| pred(*d)).count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digits_of_zero_and_negatives() {
    assert_eq!(digits(0), vec![0]);
    assert_eq!(digits(-305), vec![3, 0, 5]);
    assert_eq!(digit_sum(-305), 8);
    assert_eq!(digit_count(1000), 4);
  }

  #[test]
  fn factors_are_sorted_divisors_of_magnitude() {
    assert_eq!(factors(24), vec![1, 2, 3, 4, 6, 8, 12, 24]);
    assert_eq!(factors(-9), vec![1, 3, 9]);
    assert_eq!(factors(1), vec![1]);
    assert!(factors(0).is_empty());
  }

  #[test]
  fn primes_and_prime_factors() {
    assert!(is_prime(5));
    assert!(!is_prime(1));
    assert!(!is_prime(-5));
    assert_eq!(distinct_prime_factor_count(24), 2);
    assert_eq!(distinct_prime_factor_count(30), 3);
    assert_eq!(distinct_prime_factor_count(49), 1);
  }

  #[test]
  fn powers() {
    assert!(is_perfect_square(0));
    assert!(is_perfect_square(49));
    assert!(!is_perfect_square(-4));
    assert!(!is_perfect_square(50));
    assert!(is_perfect_cube(-27));
    assert!(is_perfect_cube(1000));
    assert!(!is_perfect_cube(9));
  }

  #[test]
  fn digit_predicates() {
    assert!(is_digit_factor(24, 4));
    assert!(!is_digit_factor(10, 0));
    assert_eq!(count_digits(2357, is_prime_digit), 4);
    assert_eq!(count_digits(180, is_cube_digit), 3);
  }
}
