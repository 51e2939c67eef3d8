//! Two-field heterogeneous tuple
//!
//! `Pair` is the entry type of [`FixedMap`](crate::FixedMap). Both fields are
//! public; there is no structural equality, callers compare fields directly.

/// An ordered pair of independently typed values
#[derive(Clone, Copy, Debug, Default, Hash)]
pub struct Pair<T1, T2> {
    pub first: T1,
    pub second: T2,
}

impl<T1, T2> Pair<T1, T2> {
    #[inline]
    pub const fn new(first: T1, second: T2) -> Self {
        Pair { first, second }
    }

    /// Build from a pair whose field types convert into `T1` and `T2`.
    ///
    /// Passing the source by value moves its fields; clone it first to copy.
    pub fn convert_from<U1, U2>(other: Pair<U1, U2>) -> Self
    where
        T1: From<U1>,
        T2: From<U2>,
    {
        Pair {
            first: T1::from(other.first),
            second: T2::from(other.second),
        }
    }

    /// Convert both fields into another pair type
    pub fn convert<U1, U2>(self) -> Pair<U1, U2>
    where
        U1: From<T1>,
        U2: From<T2>,
    {
        Pair::convert_from(self)
    }

    /// Replace both fields, returning the pair so assignments chain
    pub fn assign(&mut self, other: Pair<T1, T2>) -> &mut Self {
        self.first = other.first;
        self.second = other.second;
        self
    }

    /// Replace both fields from a pair of convertible types
    pub fn assign_from<U1, U2>(&mut self, other: Pair<U1, U2>) -> &mut Self
    where
        T1: From<U1>,
        T2: From<U2>,
    {
        self.first = T1::from(other.first);
        self.second = T2::from(other.second);
        self
    }

    #[inline]
    pub const fn first(&self) -> &T1 {
        &self.first
    }

    #[inline]
    pub const fn second(&self) -> &T2 {
        &self.second
    }

    /// Borrow both fields
    #[inline]
    pub const fn as_ref(&self) -> Pair<&T1, &T2> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    #[inline]
    pub fn into_tuple(self) -> (T1, T2) {
        (self.first, self.second)
    }
}

impl<T1, T2> From<(T1, T2)> for Pair<T1, T2> {
    fn from((first, second): (T1, T2)) -> Self {
        Pair { first, second }
    }
}

impl<T1, T2> From<Pair<T1, T2>> for (T1, T2) {
    fn from(pair: Pair<T1, T2>) -> Self {
        pair.into_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[derive(Clone, Copy, Debug, Default)]
    struct A;

    #[derive(Clone, Copy, Debug, Default)]
    struct B;

    const ORIGIN: Pair<i32, f64> = Pair::new(3, 0.511);
    const _: () = assert!(ORIGIN.first == 3);
    const _: () = assert!(*ORIGIN.as_ref().first == 3);

    #[test]
    fn test_default_zeroes_both_fields() {
        let p: Pair<i32, f64> = Pair::default();
        assert_eq!(p.first, 0);
        assert!(p.second.abs() < EPSILON);
    }

    #[test]
    fn test_value_construction() {
        let p: Pair<i32, f64> = Pair::new(3, 0.511);
        assert_eq!(p.first, 3);
        assert!((p.second - 0.511).abs() < EPSILON);
    }

    #[test]
    fn test_field_types_survive_copy_and_move() {
        let p: Pair<A, B> = Pair::new(A, B);
        let q = p;
        let r = Pair::<A, B>::convert_from(q);

        let _: &A = &p.first;
        let _: &B = &q.second;
        let _: (A, B) = r.into_tuple();
    }

    #[test]
    fn test_converting_construction() {
        let narrow: Pair<u8, f32> = Pair::new(7, 1.5);
        let wide: Pair<u64, f64> = Pair::convert_from(narrow);
        assert_eq!(wide.first, 7);
        assert!((wide.second - 1.5).abs() < EPSILON);

        let owned: Pair<String, Vec<u8>> = Pair::new("muon", vec![1u8, 2]).convert();
        assert_eq!(owned.first, "muon");
        assert_eq!(owned.second, vec![1, 2]);
    }

    #[test]
    fn test_assignment_chains() {
        let mut p: Pair<i64, String> = Pair::default();
        p.assign(Pair::new(1, "a".to_string()))
            .assign_from(Pair::new(2i32, "b"));
        assert_eq!(p.first, 2);
        assert_eq!(p.second, "b");

        let mut q: Pair<i64, String> = Pair::default();
        q.assign(p.clone()).first += 1;
        assert_eq!(q.first, 3);
        assert_eq!(q.second, p.second);
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Pair<&str, u32> = ("tau", 3).into();
        assert_eq!(*p.first(), "tau");
        assert_eq!(*p.second(), 3);

        let (name, generation): (&str, u32) = p.into();
        assert_eq!(name, "tau");
        assert_eq!(generation, 3);
    }
}
