use std::collections::HashSet;

use crate::controllers::mosaic::ports::key_source::KeySource;
use crate::core::view::ViewKey;

/// A fixed set of keys that stay held for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: HashSet<ViewKey>,
}

impl FromIterator<ViewKey> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = ViewKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl KeySource for HeldKeys {
    fn is_down(&self, key: ViewKey) -> bool {
        self.keys.contains(&key)
    }
}
