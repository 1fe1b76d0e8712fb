use crate::geometry::{contains, iou};
use crate::models::DetectedElement;

/// Drop same-type elements that overlap an earlier kept element by more than
/// `iou_threshold`. Elements of different types never suppress each other,
/// and a pair where one box contains the other is never treated as a
/// duplicate. Input order is preserved.
pub fn class_aware_nms(elements: Vec<DetectedElement>, iou_threshold: f64) -> Vec<DetectedElement> {
    let mut kept: Vec<DetectedElement> = Vec::with_capacity(elements.len());

    for elem in elements {
        if !is_suppressed(&elem, &kept, iou_threshold) {
            kept.push(elem);
        }
    }

    kept
}

fn is_suppressed(elem: &DetectedElement, kept: &[DetectedElement], iou_threshold: f64) -> bool {
    for kept_elem in kept {
        if elem.ui_type() != kept_elem.ui_type() {
            continue;
        }

        let (a, b) = (elem.bounds(), kept_elem.bounds());

        // Nested same-type regions are a hierarchy, not duplicates
        if contains(b, a) || contains(a, b) {
            continue;
        }

        if iou(a, b) > iou_threshold {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Bounds;
    use crate::layout::UiType;

    fn elem(ui_type: UiType, x: f64, y: f64, w: f64, h: f64) -> DetectedElement {
        DetectedElement::new(ui_type, 0.7, Bounds::new(x, y, w, h))
    }

    #[test]
    fn test_suppresses_same_type_duplicate() {
        let first = elem(UiType::Button, 0.5, 0.5, 0.1, 0.1);
        let second = elem(UiType::Button, 0.51, 0.51, 0.1, 0.1);

        let kept = class_aware_nms(vec![first.clone(), second], 0.6);
        assert_eq!(kept, vec![first]);
    }

    #[test]
    fn test_keeps_nested_same_type() {
        let outer = elem(UiType::Card, 0.1, 0.1, 0.4, 0.25);
        let inner = elem(UiType::Card, 0.15, 0.12, 0.1, 0.05);

        let kept = class_aware_nms(vec![outer.clone(), inner.clone()], 0.6);
        assert_eq!(kept, vec![outer.clone(), inner.clone()]);

        // Containment exemption works in either discovery order
        let kept = class_aware_nms(vec![inner.clone(), outer.clone()], 0.6);
        assert_eq!(kept, vec![inner, outer]);
    }

    #[test]
    fn test_identical_boxes_are_nested() {
        let a = elem(UiType::Icon, 0.2, 0.2, 0.05, 0.05);
        let kept = class_aware_nms(vec![a.clone(), a.clone()], 0.6);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_cross_type_overlap_allowed() {
        let a = elem(UiType::Button, 0.5, 0.5, 0.1, 0.1);
        let b = elem(UiType::InputField, 0.51, 0.51, 0.1, 0.1);
        assert_eq!(class_aware_nms(vec![a, b], 0.6).len(), 2);
    }

    #[test]
    fn test_low_overlap_kept() {
        let a = elem(UiType::Button, 0.0, 0.0, 0.1, 0.1);
        let b = elem(UiType::Button, 0.05, 0.0, 0.1, 0.1);
        assert_eq!(class_aware_nms(vec![a, b], 0.6).len(), 2);
    }

    #[test]
    fn test_suppressed_element_does_not_suppress_others() {
        // b is suppressed by a; c overlaps b heavily but not a
        let a = elem(UiType::Button, 0.50, 0.5, 0.1, 0.1);
        let b = elem(UiType::Button, 0.52, 0.5, 0.1, 0.1);
        let c = elem(UiType::Button, 0.54, 0.5, 0.1, 0.1);

        let kept = class_aware_nms(vec![a.clone(), b, c.clone()], 0.6);
        assert_eq!(kept, vec![a, c]);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            elem(UiType::Button, 0.5, 0.5, 0.1, 0.1),
            elem(UiType::Button, 0.51, 0.51, 0.1, 0.1),
            elem(UiType::Card, 0.1, 0.1, 0.4, 0.25),
            elem(UiType::Card, 0.15, 0.12, 0.1, 0.05),
            elem(UiType::Container, 0.0, 0.3, 0.9, 0.6),
        ];

        let once = class_aware_nms(input, 0.6);
        let twice = class_aware_nms(once.clone(), 0.6);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(class_aware_nms(Vec::new(), 0.6).is_empty());
    }
}
