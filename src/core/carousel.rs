// Carousel navigation state, independent of the DOM.
//
// The DOM layer measures the container and cards, asks [`Carousel`] for a
// [`CardMove`] and applies it (track translation plus the `active` marker).

/// Layout measurements needed to center a card, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    pub container_width: f64,
    pub card_width: f64,
    pub card_margin: f64,
}

impl CardLayout {
    #[inline]
    pub fn slot_width(&self) -> f64 {
        self.card_width + self.card_margin * 2.0
    }

    /// Track translation that puts card `index` in the middle of the container.
    #[inline]
    pub fn track_offset(&self, index: usize) -> f64 {
        let slot = self.slot_width();
        self.container_width / 2.0 - slot / 2.0 - index as f64 * slot
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMove {
    pub previous: usize,
    pub active: usize,
    pub offset_px: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Carousel {
    card_count: usize,
    active: usize,
}

impl Carousel {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            active: 0,
        }
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next_index(&self) -> Option<usize> {
        (self.card_count > 0).then(|| (self.active + 1) % self.card_count)
    }

    pub fn prev_index(&self) -> Option<usize> {
        (self.card_count > 0).then(|| (self.active + self.card_count - 1) % self.card_count)
    }

    /// Make `target` the active card. `measure` supplies the layout for the
    /// target; `None` from it, or a missing card, leaves the state untouched.
    pub fn move_to(
        &mut self,
        target: usize,
        measure: impl FnOnce(usize) -> Option<CardLayout>,
    ) -> Option<CardMove> {
        if target >= self.card_count {
            return None;
        }
        let layout = measure(target)?;
        let previous = self.active;
        self.active = target;
        Some(CardMove {
            previous,
            active: target,
            offset_px: layout.track_offset(target),
        })
    }

    pub fn next(&mut self, measure: impl FnOnce(usize) -> Option<CardLayout>) -> Option<CardMove> {
        let i = self.next_index()?;
        self.move_to(i, measure)
    }

    pub fn prev(&mut self, measure: impl FnOnce(usize) -> Option<CardLayout>) -> Option<CardMove> {
        let i = self.prev_index()?;
        self.move_to(i, measure)
    }

    pub fn jump_to(
        &mut self,
        index: usize,
        measure: impl FnOnce(usize) -> Option<CardLayout>,
    ) -> Option<CardMove> {
        self.move_to(index, measure)
    }
}

/// CSS `transform` value for a track offset.
#[inline]
pub fn translate_x(offset_px: f64) -> String {
    format!("translateX({}px)", offset_px)
}
