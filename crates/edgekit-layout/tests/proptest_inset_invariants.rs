//! Property-based invariant tests for the inset calculator.
//!
//! 1. Determinism: identical inputs, identical output.
//! 2. Top/left/right pass through verbatim.
//! 3. Bottom follows the keyboard-merge rule exactly.
//! 4. A hidden keyboard is an identity transform.
//! 5. The merged bottom never shrinks below the bar inset.

use edgekit_layout::{InsetRect, KeyboardState, compute_insets};
use proptest::prelude::*;

fn arb_insets() -> impl Strategy<Value = InsetRect> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(top, left, bottom, right)| InsetRect::new(top, left, bottom, right))
}

fn arb_keyboard() -> impl Strategy<Value = KeyboardState> {
    (any::<bool>(), any::<u16>()).prop_map(|(visible, inset_bottom)| KeyboardState {
        visible,
        inset_bottom,
    })
}

proptest! {
    // The calculator is deterministic: identical inputs, identical output.
    #[test]
    fn deterministic(bars in arb_insets(), kb in arb_keyboard()) {
        prop_assert_eq!(compute_insets(bars, kb), compute_insets(bars, kb));
    }

    // Top, left, and right pass through untouched.
    #[test]
    fn sides_verbatim(bars in arb_insets(), kb in arb_keyboard()) {
        let merged = compute_insets(bars, kb);
        prop_assert_eq!(merged.top, bars.top);
        prop_assert_eq!(merged.left, bars.left);
        prop_assert_eq!(merged.right, bars.right);
    }

    // Bottom follows the keyboard-merge rule exactly.
    #[test]
    fn bottom_merge_rule(bars in arb_insets(), kb in arb_keyboard()) {
        let merged = compute_insets(bars, kb);
        let expected = if kb.visible {
            bars.bottom.max(kb.inset_bottom)
        } else {
            bars.bottom
        };
        prop_assert_eq!(merged.bottom, expected);
    }

    // A hidden keyboard never changes the result, whatever height it reports.
    #[test]
    fn hidden_keyboard_is_identity(bars in arb_insets(), height in any::<u16>()) {
        let kb = KeyboardState { visible: false, inset_bottom: height };
        prop_assert_eq!(compute_insets(bars, kb), bars);
    }

    // The merged bottom never shrinks below the system-bar bottom.
    #[test]
    fn bottom_never_shrinks(bars in arb_insets(), kb in arb_keyboard()) {
        prop_assert!(compute_insets(bars, kb).bottom >= bars.bottom);
    }
}
