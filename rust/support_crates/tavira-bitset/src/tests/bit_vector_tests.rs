use crate::BitVector;

#[test]
fn test_empty() {
    let vector = BitVector::empty(130);
    assert_eq!(vector.len(), 130);
    assert_eq!(vector.count_ones(), 0);
    assert!(!vector.contains(0));
    assert!(!vector.contains(129));
}

#[test]
fn test_set_reset_contains() {
    let mut vector = BitVector::empty(200);
    vector.set(0);
    vector.set(63);
    vector.set(64);
    vector.set(199);
    assert_eq!(vector.count_ones(), 4);
    assert!(vector.contains(0));
    assert!(vector.contains(63));
    assert!(vector.contains(64));
    assert!(vector.contains(199));
    assert!(!vector.contains(1));

    vector.reset(64);
    assert!(!vector.contains(64));
    assert_eq!(vector.count_ones(), 3);
}

#[test]
fn test_from_positions_and_iter() {
    let positions = [5usize, 7, 9, 64, 130];
    let vector = BitVector::from_positions(positions, 200);
    assert_eq!(vector.iter().collect::<Vec<_>>(), positions);
}

#[test]
#[should_panic]
fn test_from_positions_out_of_bounds() {
    BitVector::from_positions([5usize, 200], 200);
}

#[test]
fn test_retain_from_filters_at_or_after_begin() {
    let mut vector = BitVector::from_positions([5usize, 7, 9], 16);
    vector.retain_from(5, |pos| pos != 7);
    assert_eq!(vector.iter().collect::<Vec<_>>(), vec![5, 9]);
}

#[test]
fn test_retain_from_leaves_bits_below_begin() {
    // Positions below begin survive even when the predicate rejects them.
    let mut vector = BitVector::from_positions([5usize, 7, 9], 16);
    vector.retain_from(6, |_| false);
    assert_eq!(vector.iter().collect::<Vec<_>>(), vec![5]);
}

#[test]
fn test_retain_from_begin_past_len() {
    let mut vector = BitVector::from_positions([5usize, 7], 16);
    vector.retain_from(16, |_| false);
    assert_eq!(vector.count_ones(), 2);
}

#[test]
fn test_retain_from_across_word_boundaries() {
    let positions = [0usize, 63, 64, 65, 127, 128, 190];
    let mut vector = BitVector::from_positions(positions, 191);
    vector.retain_from(63, |pos| pos % 2 == 0);
    assert_eq!(vector.iter().collect::<Vec<_>>(), vec![0, 64, 128, 190]);
}

#[test]
fn test_retain_from_random_matches_naive_model() {
    fastrand::seed(918273645);
    for _ in 0..20 {
        let len = fastrand::usize(1..500);
        let mut model: Vec<usize> = (0..len).filter(|_| fastrand::bool()).collect();
        let mut vector = BitVector::from_positions(model.iter().copied(), len);
        let begin = fastrand::usize(0..=len);
        let keep_mod = fastrand::usize(2..5);

        vector.retain_from(begin, |pos| pos % keep_mod == 0);
        model.retain(|&pos| pos < begin || pos % keep_mod == 0);

        assert_eq!(vector.iter().collect::<Vec<_>>(), model, "len={len} begin={begin}");
        assert_eq!(vector.count_ones(), model.len());
    }
}
