use std::collections::HashMap;

use crate::serialise::{Serialise, Serialiser};

impl<T: Serialise> Serialise for HashMap<String, T> {
    fn serialise(&self, out: &mut Serialiser) {
        // Empty objects stay on one line whatever the indent setting
        if self.is_empty() {
            out.raw("{}");
            return;
        }

        // Map iteration order is unspecified; sort so output is deterministic
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();

        out.open('{');
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                out.raw(",");
            }
            out.break_line();
            out.key(key);
            self[key].serialise(out);
        }
        out.close('}');
    }
}
