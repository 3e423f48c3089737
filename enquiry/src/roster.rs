//! Guest roster derivation.
//!
//! Computes the set of required guest slots from the declared adult count.
//! The main slot (index 0) always survives; the additional slot count is
//! `adults - 1`. Shrinking drops trailing slots together with anything
//! entered in them. That data loss is intentional: a slot removed by
//! lowering the adult count is not cached for a later re-expansion.

use crate::state::GuestSlot;

/// Reshape the slot list for the given adult count.
///
/// Runs synchronously on every adult-count change, before any submit can
/// happen. Existing slots keep their identifiers and entered data; new
/// slots are appended empty with fresh identifiers.
pub fn derive_slots(slots: &mut Vec<GuestSlot>, adults: u32) {
    let additional = adults.max(1).saturating_sub(1) as usize;
    let target = additional + 1; // plus the always-present main slot

    if target < slots.len() {
        slots.truncate(target);
    } else {
        let missing = target - slots.len();
        slots.extend(std::iter::repeat_with(GuestSlot::empty).take(missing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DocumentRef;
    use proptest::prelude::*;

    fn roster_for(adults: u32) -> Vec<GuestSlot> {
        let mut slots = vec![GuestSlot::empty()];
        derive_slots(&mut slots, adults);
        slots
    }

    #[test]
    fn one_adult_means_no_additional_slots() {
        assert_eq!(roster_for(1).len(), 1);
    }

    #[test]
    fn additional_slot_count_is_adults_minus_one() {
        assert_eq!(roster_for(4).len(), 4);
    }

    #[test]
    fn zero_adults_is_clamped_to_one() {
        assert_eq!(roster_for(0).len(), 1);
    }

    #[test]
    fn growing_appends_empty_slots_and_keeps_existing() {
        let mut slots = roster_for(2);
        slots[1].full_name = "Borja".to_string();
        let kept_id = slots[1].id;

        derive_slots(&mut slots, 3);

        assert_eq!(slots.len(), 3);
        assert_eq!(slots[1].full_name, "Borja");
        assert_eq!(slots[1].id, kept_id);
        assert!(slots[2].full_name.is_empty());
        assert_ne!(slots[2].id, kept_id);
    }

    #[test]
    fn shrink_then_grow_discards_entered_data() {
        let mut slots = roster_for(3);
        slots[2].full_name = "Carla".to_string();
        slots[2].document = Some(DocumentRef::new("id.png", "image/png", vec![1, 2, 3]));

        derive_slots(&mut slots, 2);
        derive_slots(&mut slots, 3);

        // The restored slot is a new, empty one; nothing was cached
        assert_eq!(slots.len(), 3);
        assert!(slots[2].full_name.is_empty());
        assert!(slots[2].document.is_none());
    }

    #[test]
    fn main_slot_survives_every_resize() {
        let mut slots = roster_for(5);
        let main_id = slots[0].id;
        slots[0].full_name = "Ana".to_string();

        derive_slots(&mut slots, 1);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].id, main_id);
        assert_eq!(slots[0].full_name, "Ana");
    }

    proptest! {
        #[test]
        fn slot_count_matches_adults(adults in 1u32..=16) {
            let slots = roster_for(adults);
            prop_assert_eq!(slots.len() as u32, adults);
        }

        #[test]
        fn resize_round_trip_yields_empty_additional_slots(
            first in 2u32..=8,
            second in 2u32..=8,
        ) {
            let mut slots = roster_for(first);
            for slot in slots.iter_mut().skip(1) {
                slot.full_name = "occupied".to_string();
            }

            derive_slots(&mut slots, 1);
            derive_slots(&mut slots, second);

            prop_assert!(slots.iter().skip(1).all(|s| s.full_name.is_empty()));
        }
    }
}
