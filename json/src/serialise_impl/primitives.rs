use crate::serialise::{Serialise, Serialiser};

impl Serialise for f64 {
    fn serialise(&self, out: &mut Serialiser) {
        out.number(*self);
    }
}

impl Serialise for f32 {
    fn serialise(&self, out: &mut Serialiser) {
        out.number(f64::from(*self));
    }
}

// Integers keep their exact text form rather than going through f64
macro_rules! serialise_integers {
    ($($t:ty),*) => {
        $(
            impl Serialise for $t {
                fn serialise(&self, out: &mut Serialiser) {
                    out.raw(&self.to_string());
                }
            }
        )*
    };
}

serialise_integers!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl Serialise for bool {
    fn serialise(&self, out: &mut Serialiser) {
        out.raw(if *self { "true" } else { "false" });
    }
}
