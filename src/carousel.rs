use crate::constants::{
    ACTIVE_CLASS, CONTAINER_SELECTOR, NEXT_BUTTON_ID, PREV_BUTTON_ID, TRACK_SELECTOR,
};
use crate::core::{
    translate_x, CardLayout, CardMove, Carousel, CARD_MARGIN_PX, CAROUSEL_SETTLE_DELAY_MS,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CarouselDom {
    track: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    container: web::HtmlElement,
}

impl CarouselDom {
    fn query(document: &web::Document) -> Option<Self> {
        let track = document
            .query_selector(TRACK_SELECTOR)
            .ok()
            .flatten()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let container = match document
            .query_selector(CONTAINER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            Some(c) => c,
            None => {
                log::warn!("[carousel] missing {}", CONTAINER_SELECTOR);
                return None;
            }
        };
        let children = track.children();
        let cards = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        Some(Self {
            track,
            cards,
            container,
        })
    }

    fn layout_for(&self, index: usize) -> Option<CardLayout> {
        let card = self.cards.get(index)?;
        Some(CardLayout {
            container_width: self.container.offset_width() as f64,
            card_width: card.offset_width() as f64,
            card_margin: CARD_MARGIN_PX,
        })
    }

    fn apply(&self, mv: &CardMove) {
        _ = self
            .track
            .style()
            .set_property("transform", &translate_x(mv.offset_px));
        if let Some(prev) = self.cards.get(mv.previous) {
            _ = prev.class_list().remove_1(ACTIVE_CLASS);
        }
        if let Some(cur) = self.cards.get(mv.active) {
            _ = cur.class_list().add_1(ACTIVE_CLASS);
        }
    }
}

#[derive(Clone)]
struct CarouselHandle {
    state: Rc<RefCell<Carousel>>,
    dom: Rc<CarouselDom>,
}

impl CarouselHandle {
    /// Run one carousel transition, measuring cards on demand, and show the result.
    fn navigate(
        &self,
        step: impl FnOnce(&mut Carousel, &CarouselDom) -> Option<CardMove>,
    ) {
        let mv = step(&mut self.state.borrow_mut(), &self.dom);
        if let Some(mv) = mv {
            self.dom.apply(&mv);
        }
    }
}

/// Wire next/prev buttons and card clicks. Missing markup leaves the page untouched.
pub fn wire(document: &web::Document) {
    let Some(dom) = CarouselDom::query(document) else {
        log::debug!("[carousel] no track found; carousel disabled");
        return;
    };
    if document.get_element_by_id(NEXT_BUTTON_ID).is_none()
        || document.get_element_by_id(PREV_BUTTON_ID).is_none()
    {
        log::warn!("[carousel] missing #{} or #{}", NEXT_BUTTON_ID, PREV_BUTTON_ID);
        return;
    }
    let handle = CarouselHandle {
        state: Rc::new(RefCell::new(Carousel::new(dom.cards.len()))),
        dom: Rc::new(dom),
    };
    log::info!("[carousel] {} cards", handle.dom.cards.len());

    let h = handle.clone();
    dom::add_click_listener_by_id(document, NEXT_BUTTON_ID, move || {
        h.navigate(|c, d| c.next(|i| d.layout_for(i)));
    });
    let h = handle.clone();
    dom::add_click_listener_by_id(document, PREV_BUTTON_ID, move || {
        h.navigate(|c, d| c.prev(|i| d.layout_for(i)));
    });
    for (index, card) in handle.dom.cards.iter().enumerate() {
        let h = handle.clone();
        dom::add_click_listener(card, move || {
            h.navigate(|c, d| c.jump_to(index, |i| d.layout_for(i)));
        });
    }

    let h = handle;
    dom::set_timeout(CAROUSEL_SETTLE_DELAY_MS, move || {
        h.navigate(|c, d| c.jump_to(0, |i| d.layout_for(i)));
    });
}
