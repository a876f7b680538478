/// Pointer drag tracking for the orbit controls.
///
/// Only the pointer that started the drag moves the camera; other pointers
/// are ignored until it is released.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerDrag {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl PointerDrag {
    #[inline]
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the previous event, in CSS pixels.
    #[inline]
    pub fn step(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let d = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(d)
    }

    #[inline]
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

/// Extract a numeric `key=value` pair from a URL query string (`?a=1&seed=7`).
pub fn query_u64(search: &str, key: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.trim().parse().ok())
}
