//! Hover tooltips with explicit ownership.
//!
//! The registry maps element identity to its floating label, so an element
//! holds at most one tooltip and leaving always releases it. Positions are
//! captured at hover time and never re-anchored afterwards.

use std::collections::HashMap;

/// How far above the anchor's top edge the label floats.
pub const TOOLTIP_RISE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Top-left corner of the hovered element, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBox {
    pub left: f32,
    pub top: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipInstance {
    pub text: String,
    pub left: f32,
    pub top: f32,
}

#[derive(Default)]
pub struct TooltipRegistry {
    instances: HashMap<ElementId, TooltipInstance>,
}

impl TooltipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates (or replaces) the element's tooltip just above its box.
    pub fn hover_enter(&mut self, id: ElementId, text: impl Into<String>, anchor: AnchorBox) {
        self.instances.insert(
            id,
            TooltipInstance {
                text: text.into(),
                left: anchor.left,
                top: anchor.top - TOOLTIP_RISE,
            },
        );
    }

    pub fn hover_leave(&mut self, id: ElementId) {
        self.instances.remove(&id);
    }

    pub fn get(&self, id: ElementId) -> Option<&TooltipInstance> {
        self.instances.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &TooltipInstance)> {
        self.instances.iter().map(|(id, instance)| (*id, instance))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_creates_and_leave_removes() {
        let mut registry = TooltipRegistry::new();
        let id = ElementId(1);
        registry.hover_enter(id, "Grade: 12th Grade", AnchorBox { left: 40.0, top: 90.0 });
        let instance = registry.get(id).expect("tooltip exists");
        assert_eq!(instance.text, "Grade: 12th Grade");
        assert_eq!(instance.left, 40.0);
        assert_eq!(instance.top, 90.0 - TOOLTIP_RISE);

        registry.hover_leave(id);
        assert!(registry.get(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn leave_without_enter_is_a_noop() {
        let mut registry = TooltipRegistry::new();
        registry.hover_leave(ElementId(9));
        assert!(registry.is_empty());
    }

    #[test]
    fn at_most_one_tooltip_per_element() {
        let mut registry = TooltipRegistry::new();
        let id = ElementId(2);
        registry.hover_enter(id, "first", AnchorBox { left: 0.0, top: 50.0 });
        registry.hover_enter(id, "second", AnchorBox { left: 10.0, top: 60.0 });
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(id).map(|t| t.text.as_str()), Some("second"));
    }

    #[test]
    fn concurrent_elements_hold_independent_tooltips() {
        let mut registry = TooltipRegistry::new();
        registry.hover_enter(ElementId(1), "a", AnchorBox { left: 0.0, top: 40.0 });
        registry.hover_enter(ElementId(2), "b", AnchorBox { left: 5.0, top: 45.0 });
        assert_eq!(registry.len(), 2);
        registry.hover_leave(ElementId(1));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(ElementId(2)).is_some());
    }

    #[test]
    fn position_is_captured_at_hover_time() {
        let mut registry = TooltipRegistry::new();
        let id = ElementId(3);
        registry.hover_enter(id, "pinned", AnchorBox { left: 100.0, top: 200.0 });
        // The stored position does not track later anchor movement.
        let instance = registry.get(id).expect("tooltip exists").clone();
        assert_eq!((instance.left, instance.top), (100.0, 200.0 - TOOLTIP_RISE));
    }
}
