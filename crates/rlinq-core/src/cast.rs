//! Value conversions used by the cast adapter and by `average`.
//!
//! `U: CastFrom<T>` performs the same narrowing/widening conversion as
//! `value as U`. No range validation happens beyond what `as` does.

pub trait CastFrom<T> {
    fn cast_from(value: T) -> Self;
}

macro_rules! cast_from {
    ($dst:ty; $($src:ty),*) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )*
    };
}

macro_rules! numeric_casts {
    ($($dst:ty),*) => {
        $(
            cast_from!($dst; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )*
    };
}

macro_rules! integer_casts {
    ($($dst:ty),*) => {
        $(
            cast_from!($dst; bool, char);
        )*
    };
}

numeric_casts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
integer_casts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
cast_from!(char; u8, char);
cast_from!(bool; bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_truncates_like_as() {
        assert_eq!(u8::cast_from(300i32), 44);
        assert_eq!(i32::cast_from(2.9f64), 2);
    }

    #[test]
    fn widening_is_exact() {
        assert_eq!(f64::cast_from(7i64), 7.0);
        assert_eq!(u32::cast_from('A'), 65);
        assert_eq!(i64::cast_from(true), 1);
    }
}
