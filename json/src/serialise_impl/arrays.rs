use crate::serialise::{Serialise, Serialiser};

impl<T: Serialise> Serialise for Vec<T> {
    fn serialise(&self, out: &mut Serialiser) {
        // Empty arrays stay on one line whatever the indent setting
        if self.is_empty() {
            out.raw("[]");
            return;
        }

        out.open('[');
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                out.raw(",");
            }
            out.break_line();
            elem.serialise(out);
        }
        out.close(']');
    }
}

#[cfg(test)]
mod tests {
    use crate::stringify;

    #[test]
    fn test_compact() {
        assert_eq!("[1,2,3]", stringify(&vec![1, 2, 3], 0));
    }

    #[test]
    fn test_empty() {
        assert_eq!("[]", stringify(&Vec::<bool>::new(), 0));
        assert_eq!("[]", stringify(&Vec::<bool>::new(), 2));
    }

    #[test]
    fn test_pretty() {
        assert_eq!("[\n  true,\n  false\n]", stringify(&vec![true, false], 2));
    }
}
