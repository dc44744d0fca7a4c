pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves a table selection by `delta` rows, clamped to the table.
pub const fn clamp_step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let target = index.saturating_add_signed(delta);
    if target >= len {
        len - 1
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_moves_cycle_through_options() {
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
    }

    #[test]
    fn clamped_steps_stay_inside_the_table() {
        assert_eq!(clamp_step(0, -5, 10), 0);
        assert_eq!(clamp_step(8, 5, 10), 9);
        assert_eq!(clamp_step(3, 5, 10), 8);
        assert_eq!(clamp_step(3, 1, 0), 0);
    }
}
