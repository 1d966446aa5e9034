//! 布局：两块可调尺寸面板（侧栏、底栏），钳制在各自边界内

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Side,
    Bottom,
}

pub const SIDE_DEFAULT: i32 = 250;
pub const SIDE_MIN: i32 = 150;
pub const SIDE_MAX: i32 = 500;
pub const BOTTOM_DEFAULT: i32 = 200;
pub const BOTTOM_MIN: i32 = 100;
pub const BOTTOM_MAX: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    side: i32,
    bottom: i32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            side: SIDE_DEFAULT,
            bottom: BOTTOM_DEFAULT,
        }
    }
}

impl LayoutState {
    pub fn side_size(&self) -> i32 {
        self.side
    }

    pub fn bottom_size(&self) -> i32 {
        self.bottom
    }

    /// 底栏锚在尾缘：拖其上边增大面板对应负的指针位移，故取反。
    pub fn resize(&mut self, panel: Panel, delta: i32) -> bool {
        let (current, min, max, applied) = match panel {
            Panel::Side => (self.side, SIDE_MIN, SIDE_MAX, delta),
            Panel::Bottom => (self.bottom, BOTTOM_MIN, BOTTOM_MAX, delta.saturating_neg()),
        };
        let next = (current.saturating_add(applied)).clamp(min, max);
        if next == current {
            return false;
        }
        match panel {
            Panel::Side => self.side = next,
            Panel::Bottom => self.bottom = next,
        }
        true
    }
}
