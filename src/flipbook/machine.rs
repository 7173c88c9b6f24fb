//! Navigation state machine
//!
//! `current_location` is the 1-based pointer to the next page boundary to
//! cross: location 1 is the closed book at the front, `num_pages + 1` is
//! the closed book at the back. Pages keep a descending initial stack
//! (`z = num_pages - index`); flipping page `i` restacks it to
//! `current_location` so flipped pages pile up in reading order.

use serde::{Deserialize, Serialize};

use super::effects::FlipEffect;

/// Direction resolved from a click on a page
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Page-turn state machine for a fixed set of pages
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FlipbookMachine {
    current_location: usize,
    num_pages: usize,
    fullscreen: bool,
    restack_delay_ms: u32,
}

impl FlipbookMachine {
    /// Create a machine for `num_pages` pages (must be at least 1; the
    /// zero-page case is rejected during setup before a machine exists).
    pub fn new(num_pages: usize, restack_delay_ms: u32) -> Self {
        debug_assert!(num_pages >= 1);
        Self {
            current_location: 1,
            num_pages,
            fullscreen: false,
            restack_delay_ms,
        }
    }

    /// Current 1-based location in `[1, max_location]`
    pub fn current_location(&self) -> usize {
        self.current_location
    }

    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// One past the last page: the closed-at-the-back location
    pub fn max_location(&self) -> usize {
        self.num_pages + 1
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether the book is currently in its translated open position
    pub fn is_open(&self) -> bool {
        self.current_location > 1 && self.current_location < self.max_location()
    }

    /// Original stacking position of a page in the descending initial stack
    fn original_z_index(&self, page: usize) -> i32 {
        (self.num_pages - page) as i32
    }

    fn buttons(&self) -> FlipEffect {
        FlipEffect::SetButtons {
            prev_disabled: self.current_location == 1,
            next_disabled: self.current_location == self.max_location(),
        }
    }

    /// Effects establishing the initial render state: the descending
    /// page stack and the initial button state.
    pub fn initial_effects(&self) -> Vec<FlipEffect> {
        let mut effects: Vec<FlipEffect> = (0..self.num_pages)
            .map(|page| FlipEffect::SetStacking {
                page,
                z_index: self.original_z_index(page),
            })
            .collect();
        effects.push(self.buttons());
        effects
    }

    /// Flip the page at the current location forward. No-op at the back
    /// cover.
    pub fn go_next_page(&mut self) -> Vec<FlipEffect> {
        if self.current_location == self.max_location() {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.current_location == 1 {
            effects.push(FlipEffect::OpenBook);
        }

        let page = self.current_location - 1;
        effects.push(FlipEffect::MarkFlipped { page });
        // Flipped pages stack in flip order, above earlier flips and
        // below every page still waiting in the descending stack.
        effects.push(FlipEffect::SetStacking {
            page,
            z_index: self.current_location as i32,
        });

        if self.current_location == self.num_pages {
            effects.push(FlipEffect::CloseBook { at_beginning: false });
        }

        self.current_location += 1;
        effects.push(self.buttons());
        effects
    }

    /// Turn the most recently flipped page back. No-op at the front
    /// cover.
    pub fn go_prev_page(&mut self) -> Vec<FlipEffect> {
        if self.current_location == 1 {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.current_location == 2 {
            effects.push(FlipEffect::CloseBook { at_beginning: true });
        } else if self.current_location == self.max_location() {
            effects.push(FlipEffect::OpenBook);
        }

        // current_location points at the next page to flip, so the page
        // being turned back sits two positions behind it.
        let page = self.current_location - 2;
        effects.push(FlipEffect::ClearFlipped { page });
        effects.push(FlipEffect::SetStackingDelayed {
            page,
            z_index: self.original_z_index(page),
            delay_ms: self.restack_delay_ms,
        });

        self.current_location -= 1;
        effects.push(self.buttons());
        effects
    }

    /// Resolve a click at horizontal offset `offset_x` within a page of
    /// width `page_width`: left half turns back, right half turns forward.
    pub fn resolve_click(offset_x: f64, page_width: f64) -> NavDirection {
        if offset_x < page_width / 2.0 {
            NavDirection::Prev
        } else {
            NavDirection::Next
        }
    }

    /// Flip the fullscreen flag, yielding the matching relocation effect.
    pub fn toggle_fullscreen(&mut self) -> Vec<FlipEffect> {
        self.fullscreen = !self.fullscreen;
        if self.fullscreen {
            vec![FlipEffect::EnterFullscreen]
        } else {
            vec![FlipEffect::ExitFullscreen]
        }
    }

    /// Leave fullscreen if currently active (Escape key, background click).
    pub fn exit_fullscreen(&mut self) -> Vec<FlipEffect> {
        if !self.fullscreen {
            return Vec::new();
        }
        self.fullscreen = false;
        vec![FlipEffect::ExitFullscreen]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(num_pages: usize) -> FlipbookMachine {
        FlipbookMachine::new(num_pages, 300)
    }

    #[test]
    fn initial_stack_is_descending_with_buttons_at_front() {
        let m = machine(3);
        let effects = m.initial_effects();
        assert_eq!(
            effects,
            vec![
                FlipEffect::SetStacking { page: 0, z_index: 3 },
                FlipEffect::SetStacking { page: 1, z_index: 2 },
                FlipEffect::SetStacking { page: 2, z_index: 1 },
                FlipEffect::SetButtons {
                    prev_disabled: true,
                    next_disabled: false
                },
            ]
        );
    }

    #[test]
    fn first_flip_opens_the_book() {
        let mut m = machine(5);
        let effects = m.go_next_page();
        assert_eq!(effects[0], FlipEffect::OpenBook);
        assert_eq!(effects[1], FlipEffect::MarkFlipped { page: 0 });
        assert_eq!(effects[2], FlipEffect::SetStacking { page: 0, z_index: 1 });
        assert_eq!(m.current_location(), 2);
        assert!(m.is_open());
    }

    #[test]
    fn flipping_the_last_page_closes_at_the_end() {
        let mut m = machine(2);
        m.go_next_page();
        let effects = m.go_next_page();
        assert!(effects.contains(&FlipEffect::CloseBook { at_beginning: false }));
        assert_eq!(m.current_location(), 3);
        assert!(!m.is_open());
    }

    #[test]
    fn five_flips_exhaust_five_pages_then_no_op() {
        let mut m = machine(5);
        let mut last = Vec::new();
        for _ in 0..5 {
            last = m.go_next_page();
            assert!(!last.is_empty());
        }
        assert_eq!(m.current_location(), 6);
        assert_eq!(m.current_location(), m.max_location());

        match last.last() {
            Some(FlipEffect::SetButtons { next_disabled, .. }) => assert!(next_disabled),
            other => panic!("expected button state, got {:?}", other),
        }

        assert!(m.go_next_page().is_empty());
        assert_eq!(m.current_location(), 6);
    }

    #[test]
    fn prev_at_front_cover_is_a_no_op() {
        let mut m = machine(4);
        assert!(m.go_prev_page().is_empty());
        assert_eq!(m.current_location(), 1);
    }

    #[test]
    fn turning_back_restores_location_and_original_stacking() {
        let mut m = machine(5);
        m.go_next_page();
        m.go_next_page();
        assert_eq!(m.current_location(), 3);

        let effects = m.go_prev_page();
        assert_eq!(m.current_location(), 2);
        assert!(effects.contains(&FlipEffect::ClearFlipped { page: 1 }));
        // Page 1 returns to its slot in the descending stack: 5 - 1 = 4.
        assert!(effects.contains(&FlipEffect::SetStackingDelayed {
            page: 1,
            z_index: 4,
            delay_ms: 300,
        }));
    }

    #[test]
    fn turning_back_from_location_two_closes_at_the_beginning() {
        let mut m = machine(3);
        m.go_next_page();
        let effects = m.go_prev_page();
        assert_eq!(effects[0], FlipEffect::CloseBook { at_beginning: true });
        assert_eq!(m.current_location(), 1);
    }

    #[test]
    fn turning_back_from_the_back_cover_reopens() {
        let mut m = machine(2);
        m.go_next_page();
        m.go_next_page();
        assert_eq!(m.current_location(), m.max_location());

        let effects = m.go_prev_page();
        assert_eq!(effects[0], FlipEffect::OpenBook);
        assert!(m.is_open());
    }

    #[test]
    fn button_state_tracks_the_boundaries() {
        let mut m = machine(2);
        assert_eq!(
            *m.initial_effects().last().unwrap(),
            FlipEffect::SetButtons {
                prev_disabled: true,
                next_disabled: false
            }
        );
        m.go_next_page();
        let mid = m.go_next_page();
        assert_eq!(
            *mid.last().unwrap(),
            FlipEffect::SetButtons {
                prev_disabled: false,
                next_disabled: true
            }
        );
    }

    #[test]
    fn click_halves_resolve_direction() {
        assert_eq!(FlipbookMachine::resolve_click(10.0, 100.0), NavDirection::Prev);
        assert_eq!(FlipbookMachine::resolve_click(49.9, 100.0), NavDirection::Prev);
        assert_eq!(FlipbookMachine::resolve_click(50.0, 100.0), NavDirection::Next);
        assert_eq!(FlipbookMachine::resolve_click(90.0, 100.0), NavDirection::Next);
    }

    #[test]
    fn fullscreen_toggles_and_exit_is_idempotent() {
        let mut m = machine(3);
        assert_eq!(m.toggle_fullscreen(), vec![FlipEffect::EnterFullscreen]);
        assert!(m.is_fullscreen());
        assert_eq!(m.exit_fullscreen(), vec![FlipEffect::ExitFullscreen]);
        assert!(!m.is_fullscreen());
        assert!(m.exit_fullscreen().is_empty());
    }
}
