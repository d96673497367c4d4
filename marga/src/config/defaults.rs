//! Default value functions for serde deserialization.

pub fn max_level() -> u8 {
    6
}

pub fn max_nodes() -> usize {
    200_000
}

pub fn enabled() -> bool {
    true
}

pub fn border_epsilon() -> f32 {
    1.0
}

pub fn min_border_overlap() -> f32 {
    1.0
}

pub fn max_iterations() -> usize {
    10_000
}

pub fn heuristic_weight() -> f32 {
    1.0
}
