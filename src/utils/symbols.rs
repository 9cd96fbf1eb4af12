#[allow(unused)]
pub mod arrow {
    pub const UP: &str = "↑";
    pub const DOWN: &str = "↓";
    pub const LEFT: &str = "←";
    pub const RIGHT: &str = "→";
}

pub mod triangle {
    pub const UP_SMALL: &str = "▴";
    pub const DOWN_SMALL: &str = "▾";
}
