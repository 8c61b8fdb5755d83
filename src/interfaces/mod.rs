/// Owner-side API of a phone field. The field calls it with the canonical
/// value (dial code followed by digits, no separators) after every accepted
/// edit, so the owning form can keep the durable copy of the value.
///
/// Any `FnMut(&str)` closure is a listener.
pub trait ChangeListener {
    fn on_change(&mut self, canonical_value: &str);
}

impl<F: FnMut(&str)> ChangeListener for F {
    fn on_change(&mut self, canonical_value: &str) {
        self(canonical_value)
    }
}
