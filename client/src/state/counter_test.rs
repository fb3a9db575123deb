use super::*;

#[test]
fn zero_target_terminates_at_once() {
    assert_eq!(count_up_frames(0), vec![0]);
}

#[test]
fn frames_end_exactly_at_target() {
    for target in [1, 7, 29, 30, 31, 100, 12_345] {
        let frames = count_up_frames(target);
        assert_eq!(frames.len(), 30);
        assert_eq!(frames.last().copied(), Some(target));
    }
}

#[test]
fn frames_are_floored_and_monotonic() {
    let frames = count_up_frames(10);
    // 10/30 per tick: 0.33, 0.66, 1.0, ...
    assert_eq!(&frames[..4], &[0, 0, 1, 1]);
    assert!(frames.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn value_clamps_after_last_step() {
    assert_eq!(count_up_value(42, 30), 42);
    assert_eq!(count_up_value(42, 31), 42);
    assert_eq!(count_up_value(60, 15), 30);
}

#[test]
fn huge_target_does_not_overflow() {
    assert_eq!(count_up_frames(u64::MAX).last().copied(), Some(u64::MAX));
}
