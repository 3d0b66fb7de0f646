use crate::serialise::{Serialise, Serialiser};

impl<T: Serialise> Serialise for Option<T> {
    fn serialise(&self, out: &mut Serialiser) {
        match self {
            Some(value) => value.serialise(out),
            None => out.raw("null"),
        }
    }
}
