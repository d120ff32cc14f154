//! Random number stream primitives (§4.1 of the generation engine).

mod stream;
mod util;

pub use stream::{RandomStream, MODULUS};
pub use util::{
    business_key, make_permutation, permutation_entry, random_charset, random_decimal,
    random_int, uniform_int, Distribution, ALPHANUMERIC, DIGITS,
};
