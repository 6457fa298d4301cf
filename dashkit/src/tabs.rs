// dashkit/src/tabs.rs
//
// Circular tab cycling for the fixed tab strips used by every detail
// screen. Tabs are addressed by index into a fixed label list.

/// Next tab index, wrapping from the last tab back to the first.
pub fn next_tab(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}

/// Previous tab index, wrapping from the first tab back to the last.
pub fn prev_tab(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if current == 0 {
        count - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_and_wraps() {
        assert_eq!(next_tab(0, 4), 1);
        assert_eq!(next_tab(2, 4), 3);
        assert_eq!(next_tab(3, 4), 0);
    }

    #[test]
    fn prev_retreats_and_wraps() {
        assert_eq!(prev_tab(3, 4), 2);
        assert_eq!(prev_tab(1, 4), 0);
        assert_eq!(prev_tab(0, 4), 3);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let count = 5;
        let mut tab = 2;
        for _ in 0..count {
            tab = next_tab(tab, count);
        }
        assert_eq!(tab, 2);
        for _ in 0..count {
            tab = prev_tab(tab, count);
        }
        assert_eq!(tab, 2);
    }

    #[test]
    fn empty_strip_stays_at_zero() {
        assert_eq!(next_tab(0, 0), 0);
        assert_eq!(prev_tab(0, 0), 0);
    }
}
