// \file src/macros.rs
//! operator-forwarding macros

macro_rules! forward_binop_to_ref_ref {
    (impl $imp:ident for BigRadix, $method:ident) => {
        impl $imp<BigRadix> for BigRadix {
            type Output = BigRadix;

            #[inline]
            fn $method(self, rhs: BigRadix) -> BigRadix {
                // forward to ref-ref
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigRadix> for BigRadix {
            type Output = BigRadix;

            #[inline]
            fn $method(self, rhs: &BigRadix) -> BigRadix {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigRadix> for &BigRadix {
            type Output = BigRadix;

            #[inline]
            fn $method(self, rhs: BigRadix) -> BigRadix {
                $imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_assign_to_binop {
    (impl $imp:ident for BigRadix, $method:ident, $binop:ident) => {
        impl $imp<BigRadix> for BigRadix {
            #[inline]
            fn $method(&mut self, rhs: BigRadix) {
                *self = (&*self).$binop(&rhs);
            }
        }

        impl $imp<&BigRadix> for BigRadix {
            #[inline]
            fn $method(&mut self, rhs: &BigRadix) {
                *self = (&*self).$binop(rhs);
            }
        }
    };
}
