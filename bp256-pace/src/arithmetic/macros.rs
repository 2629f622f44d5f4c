//! Macros for defining field element types.

/// Implements a prime field element newtype whose internal representation is
/// a `crypto-bigint` residue in Montgomery form modulo a constant modulus.
///
/// The modulus must be ≡ 3 mod 4. Both brainpoolP256r1 moduli are, so the
/// 2-adicity `S` of `modulus - 1` is 1, the root of unity is −1 and square
/// roots take a single exponentiation.
///
/// # Inherent impls
/// - `const ZERO: Self`
/// - `const ONE: Self` (multiplicative identity)
/// - `const MODULUS: U256`
/// - `pub const fn from_hex`
/// - `pub const fn from_u64`
/// - `pub fn from_uint`
/// - `pub fn from_bytes`
/// - `pub fn from_slice`
/// - `pub fn to_uint`
/// - `pub fn to_bytes`
/// - `pub fn is_odd`
/// - `pub fn is_zero`
/// - `pub fn double`
/// - `pub fn square`
/// - `pub fn pow`
/// - `pub fn invert`
/// - `pub fn sqrt`
///
/// # Trait impls
/// - `ConditionallySelectable`
/// - `ConstantTimeEq`
/// - `Default`
/// - `DefaultIsZeroes`
/// - `Eq`
/// - `Field`
/// - `From<u64>`
/// - `PartialEq`
/// - `PrimeField`
/// - `Sum`, `Product`
///
/// ## Ops
/// - `Add`, `AddAssign`
/// - `Sub`, `SubAssign`
/// - `Mul`, `MulAssign`
/// - `Neg`
macro_rules! field_element {
    (
        name: $fe:ident,
        params: $params:ident,
        modulus: $modulus_hex:expr,
        multiplicative_generator: $generator:expr,
        doc: $doc:expr
    ) => {
        ::elliptic_curve::bigint::impl_modulus!($params, $crate::U256, $modulus_hex);

        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $fe(
            ::elliptic_curve::bigint::modular::constant_mod::Residue<
                $params,
                { $crate::U256::LIMBS },
            >,
        );

        impl $fe {
            /// Zero element.
            pub const ZERO: Self =
                Self(::elliptic_curve::bigint::modular::constant_mod::Residue::ZERO);

            /// Multiplicative identity.
            pub const ONE: Self =
                Self(::elliptic_curve::bigint::modular::constant_mod::Residue::ONE);

            /// Modulus of the field.
            pub const MODULUS: $crate::U256 = $crate::U256::from_be_hex($modulus_hex);

            /// Exponent used for inversion by Fermat's little theorem.
            const MODULUS_MINUS_TWO: $crate::U256 =
                Self::MODULUS.wrapping_sub(&$crate::U256::from_u8(2));

            /// `(modulus + 1) / 4`
            const SQRT_EXP: $crate::U256 =
                Self::MODULUS.shr_vartime(2).wrapping_add(&$crate::U256::ONE);

            /// Decode from big endian hex. Intended for constants.
            ///
            /// The value is not checked against the modulus.
            pub const fn from_hex(hex: &str) -> Self {
                Self::from_uint_unchecked($crate::U256::from_be_hex(hex))
            }

            /// Convert a `u64` into a field element.
            pub const fn from_u64(w: u64) -> Self {
                Self::from_uint_unchecked($crate::U256::from_u64(w))
            }

            /// Convert an integer already known to be in range.
            pub(crate) const fn from_uint_unchecked(uint: $crate::U256) -> Self {
                Self(::elliptic_curve::bigint::modular::constant_mod::Residue::new(&uint))
            }

            /// Convert an integer, returning `None` unless it is less than the
            /// modulus.
            pub fn from_uint(uint: $crate::U256) -> ::elliptic_curve::subtle::CtOption<Self> {
                let in_range =
                    ::elliptic_curve::subtle::ConstantTimeLess::ct_lt(&uint, &Self::MODULUS);
                ::elliptic_curve::subtle::CtOption::new(Self::from_uint_unchecked(uint), in_range)
            }

            /// Decode from a canonical big endian representation.
            pub fn from_bytes(
                bytes: &$crate::FieldBytes,
            ) -> ::elliptic_curve::subtle::CtOption<Self> {
                use ::elliptic_curve::bigint::ArrayEncoding;
                Self::from_uint($crate::U256::from_be_byte_array(*bytes))
            }

            /// Decode from a big endian byte slice of exactly the field width.
            pub fn from_slice(slice: &[u8]) -> Option<Self> {
                if slice.len() != $crate::U256::BYTES {
                    return None;
                }

                let mut bytes = $crate::FieldBytes::default();
                bytes.copy_from_slice(slice);
                Self::from_bytes(&bytes).into()
            }

            /// Canonical integer value of this element.
            pub fn to_uint(&self) -> $crate::U256 {
                self.0.retrieve()
            }

            /// Canonical big endian representation.
            pub fn to_bytes(&self) -> $crate::FieldBytes {
                use ::elliptic_curve::bigint::ArrayEncoding;
                self.to_uint().to_be_byte_array()
            }

            /// Is the canonical value odd?
            pub fn is_odd(&self) -> ::elliptic_curve::subtle::Choice {
                let bytes = self.to_bytes();
                ::elliptic_curve::subtle::Choice::from(bytes[bytes.len() - 1] & 1)
            }

            /// Is this element zero?
            pub fn is_zero(&self) -> ::elliptic_curve::subtle::Choice {
                ::elliptic_curve::subtle::ConstantTimeEq::ct_eq(self, &Self::ZERO)
            }

            /// Returns `self + self`.
            pub fn double(&self) -> Self {
                *self + *self
            }

            /// Returns `self * self`.
            pub fn square(&self) -> Self {
                Self(self.0.square())
            }

            /// Returns `self^exp`.
            pub fn pow(&self, exp: &$crate::U256) -> Self {
                Self(self.0.pow(exp))
            }

            /// Multiplicative inverse, or `None` for zero.
            pub fn invert(&self) -> ::elliptic_curve::subtle::CtOption<Self> {
                ::elliptic_curve::subtle::CtOption::new(
                    self.pow(&Self::MODULUS_MINUS_TWO),
                    !self.is_zero(),
                )
            }

            /// Returns the square root of self, or `None` if no square root
            /// exists.
            pub fn sqrt(&self) -> ::elliptic_curve::subtle::CtOption<Self> {
                let sqrt = self.pow(&Self::SQRT_EXP);
                ::elliptic_curve::subtle::CtOption::new(
                    sqrt,
                    ::elliptic_curve::subtle::ConstantTimeEq::ct_eq(&sqrt.square(), self),
                )
            }
        }

        impl ::elliptic_curve::ff::Field for $fe {
            const ZERO: Self = Self::ZERO;
            const ONE: Self = Self::ONE;

            fn random(mut rng: impl ::elliptic_curve::rand_core::RngCore) -> Self {
                let mut bytes = $crate::FieldBytes::default();

                loop {
                    rng.fill_bytes(&mut bytes);
                    if let Some(fe) = Option::<Self>::from(Self::from_bytes(&bytes)) {
                        return fe;
                    }
                }
            }

            fn square(&self) -> Self {
                self.square()
            }

            fn double(&self) -> Self {
                self.double()
            }

            fn invert(&self) -> ::elliptic_curve::subtle::CtOption<Self> {
                self.invert()
            }

            fn sqrt(&self) -> ::elliptic_curve::subtle::CtOption<Self> {
                self.sqrt()
            }

            fn sqrt_ratio(num: &Self, div: &Self) -> (::elliptic_curve::subtle::Choice, Self) {
                ::elliptic_curve::ff::helpers::sqrt_ratio_generic(num, div)
            }
        }

        impl ::elliptic_curve::ff::PrimeField for $fe {
            type Repr = $crate::FieldBytes;

            const MODULUS: &'static str = $modulus_hex;
            const NUM_BITS: u32 = 256;
            const CAPACITY: u32 = 255;
            const TWO_INV: Self = Self::from_uint_unchecked(
                Self::MODULUS.shr_vartime(1).wrapping_add(&$crate::U256::ONE),
            );
            const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64($generator);
            const S: u32 = 1;
            const ROOT_OF_UNITY: Self =
                Self::from_uint_unchecked(Self::MODULUS.wrapping_sub(&$crate::U256::ONE));
            const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY;
            const DELTA: Self = Self::from_u64($generator * $generator);

            fn from_repr(bytes: $crate::FieldBytes) -> ::elliptic_curve::subtle::CtOption<Self> {
                Self::from_bytes(&bytes)
            }

            fn to_repr(&self) -> $crate::FieldBytes {
                self.to_bytes()
            }

            fn is_odd(&self) -> ::elliptic_curve::subtle::Choice {
                self.is_odd()
            }
        }

        impl From<u64> for $fe {
            fn from(n: u64) -> $fe {
                Self::from_u64(n)
            }
        }

        impl ::elliptic_curve::subtle::ConditionallySelectable for $fe {
            fn conditional_select(
                a: &Self,
                b: &Self,
                choice: ::elliptic_curve::subtle::Choice,
            ) -> Self {
                Self(::elliptic_curve::subtle::ConditionallySelectable::conditional_select(
                    &a.0, &b.0, choice,
                ))
            }
        }

        impl ::elliptic_curve::subtle::ConstantTimeEq for $fe {
            fn ct_eq(&self, other: &Self) -> ::elliptic_curve::subtle::Choice {
                ::elliptic_curve::subtle::ConstantTimeEq::ct_eq(&self.0, &other.0)
            }
        }

        impl ::elliptic_curve::zeroize::DefaultIsZeroes for $fe {}

        impl Eq for $fe {}

        impl PartialEq for $fe {
            fn eq(&self, other: &Self) -> bool {
                ::elliptic_curve::subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl ::core::ops::Neg for $fe {
            type Output = Self;

            fn neg(self) -> Self {
                Self::ZERO - self
            }
        }

        impl ::core::ops::Neg for &$fe {
            type Output = $fe;

            fn neg(self) -> $fe {
                -*self
            }
        }

        impl_field_op!($fe, Add, add, AddAssign, add_assign);
        impl_field_op!($fe, Sub, sub, SubAssign, sub_assign);
        impl_field_op!($fe, Mul, mul, MulAssign, mul_assign);

        impl ::core::iter::Sum for $fe {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, ::core::ops::Add::add)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $fe> for $fe {
            fn sum<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl ::core::iter::Product for $fe {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, ::core::ops::Mul::mul)
            }
        }

        impl<'a> ::core::iter::Product<&'a $fe> for $fe {
            fn product<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().product()
            }
        }
    };
}

/// Binary operator impls for every owned/borrowed operand combination, plus
/// the assigning forms.
macro_rules! impl_field_op {
    ($fe:ident, $op:ident, $op_fn:ident, $op_assign:ident, $op_assign_fn:ident) => {
        impl ::core::ops::$op for $fe {
            type Output = $fe;

            fn $op_fn(self, rhs: $fe) -> $fe {
                $fe(::core::ops::$op::$op_fn(self.0, rhs.0))
            }
        }

        impl ::core::ops::$op<&$fe> for $fe {
            type Output = $fe;

            fn $op_fn(self, rhs: &$fe) -> $fe {
                ::core::ops::$op::$op_fn(self, *rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for &$fe {
            type Output = $fe;

            fn $op_fn(self, rhs: &$fe) -> $fe {
                ::core::ops::$op::$op_fn(*self, *rhs)
            }
        }

        impl ::core::ops::$op_assign for $fe {
            fn $op_assign_fn(&mut self, rhs: $fe) {
                *self = ::core::ops::$op::$op_fn(*self, rhs);
            }
        }

        impl ::core::ops::$op_assign<&$fe> for $fe {
            fn $op_assign_fn(&mut self, rhs: &$fe) {
                *self = ::core::ops::$op::$op_fn(*self, *rhs);
            }
        }
    };
}
