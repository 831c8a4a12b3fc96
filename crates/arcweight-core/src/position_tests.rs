//! Tests for position providers.

use crate::position::{PositionProvider, RandomPositions};

#[test]
fn test_seeded_providers_agree() {
    let mut a = RandomPositions::with_seed(42);
    let mut b = RandomPositions::with_seed(42);
    for key in 0..5 {
        assert_eq!(a.position_for(key), b.position_for(key));
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = RandomPositions::with_seed(1);
    let mut b = RandomPositions::with_seed(2);
    assert_ne!(a.position_for(0), b.position_for(0));
}

#[test]
fn test_positions_stay_inside_window() {
    let mut provider = RandomPositions::with_seed(7);
    for key in 0..100 {
        let pos = provider.position_for(key);
        assert!(pos.x > 32.0 && pos.x < 33.0);
        assert!(pos.y > 35.0 && pos.y < 36.0);
        assert_eq!(pos.z, 0.0);
    }
}

#[test]
fn test_default_provider_is_usable() {
    let mut provider = RandomPositions::default();
    let pos = provider.position_for(0);
    assert!(pos.x > 32.0 && pos.x < 33.0);
}
