use crate::core::view::{ViewControlsSnapshot, ViewKey};

pub trait KeySource {
    fn is_down(&self, key: ViewKey) -> bool;

    fn snapshot(&self) -> ViewControlsSnapshot {
        ViewControlsSnapshot::from_fn(|key| self.is_down(key))
    }
}
