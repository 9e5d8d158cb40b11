// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Associated integer constants.
//!
//! `MinusOne::MINUS_ONE` is what the scheduler hands back to callers that ask
//! for the classic `-1` "cannot be done" answer instead of an `Option`.

/// Integer types that can represent -1.
pub trait MinusOne {
    const MINUS_ONE: Self;
}

/// Integer types with a constant 0.
pub trait Zero {
    const ZERO: Self;
}

/// Integer types with a constant +1.
pub trait PlusOne {
    const PLUS_ONE: Self;
}

macro_rules! impl_integer_constants {
    (signed: $($s:ty),*; unsigned: $($u:ty),*) => {
        $(
            impl MinusOne for $s { const MINUS_ONE: Self = -1; }
            impl Zero for $s { const ZERO: Self = 0; }
            impl PlusOne for $s { const PLUS_ONE: Self = 1; }
        )*
        $(
            impl Zero for $u { const ZERO: Self = 0; }
            impl PlusOne for $u { const PLUS_ONE: Self = 1; }
        )*
    };
}

impl_integer_constants!(
    signed: i8, i16, i32, i64, i128, isize;
    unsigned: u8, u16, u32, u64, u128, usize
);

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinel<T: MinusOne>() -> T {
        T::MINUS_ONE
    }

    #[test]
    fn test_signed_constants() {
        assert_eq!(sentinel::<i32>(), -1);
        assert_eq!(sentinel::<i64>(), -1);
        assert_eq!(<i8 as Zero>::ZERO, 0);
        assert_eq!(<isize as PlusOne>::PLUS_ONE, 1);
    }

    #[test]
    fn test_unsigned_constants() {
        assert_eq!(<u64 as Zero>::ZERO, 0);
        assert_eq!(<usize as PlusOne>::PLUS_ONE, 1);
    }
}
