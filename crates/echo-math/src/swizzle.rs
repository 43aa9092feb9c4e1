// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Swizzle accessor generators shared by the vector types.
//!
//! Invoked inside an `impl<T: Scalar>` block; each entry expands to a `pub fn`
//! that reads the named components through the receiver's getters.

macro_rules! swizzles2 {
    ($($name:ident => ($a:ident, $b:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Returns `(", stringify!($a), ", ", stringify!($b), ")`.")]
            #[inline]
            pub fn $name(&self) -> $crate::Vec2<T> {
                $crate::Vec2::new(self.$a(), self.$b())
            }
        )*
    };
}

macro_rules! swizzles3 {
    ($($name:ident => ($a:ident, $b:ident, $c:ident)),* $(,)?) => {
        $(
            #[doc = concat!(
                "Returns `(", stringify!($a), ", ", stringify!($b), ", ", stringify!($c), ")`."
            )]
            #[inline]
            pub fn $name(&self) -> $crate::Vec3<T> {
                $crate::Vec3::new(self.$a(), self.$b(), self.$c())
            }
        )*
    };
}

pub(crate) use swizzles2;
pub(crate) use swizzles3;
