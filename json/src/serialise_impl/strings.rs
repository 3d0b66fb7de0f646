use crate::serialise::{Serialise, Serialiser};

impl Serialise for String {
    fn serialise(&self, out: &mut Serialiser) {
        out.string(self);
    }
}

impl Serialise for &str {
    fn serialise(&self, out: &mut Serialiser) {
        out.string(self);
    }
}
