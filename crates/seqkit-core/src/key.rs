//! Key absence for join-style matching.
//!
//! A join can never match on an absent key, so join lookups skip elements
//! whose key reports `is_absent()`. Ordinary grouping keeps absent keys as a
//! group of their own.

pub trait JoinKey {
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> JoinKey for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: JoinKey + ?Sized> JoinKey for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: JoinKey + ?Sized> JoinKey for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

macro_rules! present_keys {
    ($($t:ty),* $(,)?) => {
        $(impl JoinKey for $t {})*
    };
}

present_keys!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
);

impl<T> JoinKey for Vec<T> {}

macro_rules! tuple_keys {
    ($($name:ident),+) => {
        impl<$($name),+> JoinKey for ($($name,)+) {}
    };
}

tuple_keys!(A);
tuple_keys!(A, B);
tuple_keys!(A, B, C);
tuple_keys!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_absence() {
        assert!(None::<i32>.is_absent());
        assert!(!Some(3).is_absent());
        assert!(!Some(None::<i32>).is_absent());
    }

    #[test]
    fn test_plain_keys_present() {
        assert!(!0i32.is_absent());
        assert!(!"".is_absent());
        assert!(!String::new().is_absent());
        assert!(!(1, "a").is_absent());
        let k: Option<&str> = None;
        assert!((&k).is_absent());
    }
}
