use log::debug;

/// Stateless adapter between the host's collision detection and gameplay
/// logic: each entry of an object carrying `needed_tag` invokes the bound
/// event once. No debouncing, no state between calls; a mismatched tag is
/// a silent no-op.
pub struct TriggerNotifier {
    needed_tag: String,
    event: Box<dyn FnMut()>,
}

impl TriggerNotifier {
    pub fn new(needed_tag: impl Into<String>, event: impl FnMut() + 'static) -> Self {
        Self {
            needed_tag: needed_tag.into(),
            event: Box::new(event),
        }
    }

    pub fn needed_tag(&self) -> &str {
        &self.needed_tag
    }

    /// Called by the collision collaborator when an object begins
    /// overlapping the watched volume.
    pub fn on_spatial_entry(&mut self, object_tag: &str) {
        if object_tag == self.needed_tag {
            debug!("trigger fired for tag `{}`", object_tag);
            (self.event)();
        }
    }
}
