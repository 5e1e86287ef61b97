/// Section id to element handle, filled in as sections mount.
///
/// Entries keep registration order; re-registering an id replaces its handle
/// in place.
#[derive(Clone, Debug)]
pub struct AnchorRegistry<H> {
    entries: Vec<(String, H)>,
}

impl<H> AnchorRegistry<H> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the handle previously registered under `id`, if any.
    pub fn register(&mut self, id: impl Into<String>, handle: H) -> Option<H> {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => Some(std::mem::replace(slot, handle)),
            None => {
                self.entries.push((id, handle));
                None
            }
        }
    }

    pub fn unregister(&mut self, id: &str) -> Option<H> {
        let index = self.entries.iter().position(|(existing, _)| existing == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, id: &str) -> Option<&H> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, handle)| handle)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H> Default for AnchorRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
