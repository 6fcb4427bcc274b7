//! Tests for reliability-weighted selection and handicapper chains

use std::sync::Arc;

use super::*;
use crate::domain::address_space::AddressSpace;
use crate::domain::identifier::{Identifier, ID_LEN};

fn make_id(byte: u8) -> Identifier {
    let mut id = [0u8; ID_LEN];
    id[0] = byte;
    Identifier::from_bytes(id)
}

// =============================================================================
// TEST HELPERS
// =============================================================================

fn setup_selector() -> (ReliabilitySelector, Identifier) {
    let local = make_id(0);
    let selector =
        ReliabilitySelector::new(local, HandicapConfig::default(), &AddressSpace::default())
            .unwrap();
    (selector, local)
}

fn fixed_cost(costs: Vec<(Identifier, Handicap)>) -> Arc<dyn Handicapper> {
    Arc::new(
        move |id: &Identifier, _kind: OperationKind| -> Result<Handicap, HandicapError> {
            Ok(costs
                .iter()
                .find(|(candidate, _)| candidate == id)
                .map(|(_, handicap)| *handicap)
                .unwrap_or(Handicap::Cost(0.0)))
        },
    )
}

// =============================================================================
// TEST GROUP 1: Reliability selector
// =============================================================================

#[test]
fn test_self_costs_nothing() {
    let (selector, local) = setup_selector();
    for reliability in [0.0, 1e-9, 0.5, 1.0, f64::NAN] {
        let record = ReliabilityHandle::with_value(reliability);
        assert_eq!(selector.cost(&local, OperationKind::PublishContent, &record), 0.0);
        assert_eq!(selector.cost(&local, OperationKind::Relay, &record), 0.0);
    }
}

#[test]
fn test_floor_matches_ring() {
    let (selector, _) = setup_selector();
    assert_eq!(selector.floor(), 256.0 / (1u64 << 23) as f64);
}

#[test]
fn test_cost_is_tuning_over_reliability() {
    let (selector, _) = setup_selector();
    let record = ReliabilityHandle::with_value(0.5);
    assert_eq!(selector.cost(&make_id(1), OperationKind::RetrieveContent, &record), 512.0);
    // untouched when above floor
    assert_eq!(record.get(), Some(0.5));
}

#[test]
fn test_unobserved_peer_uses_configured_default() {
    let (selector, _) = setup_selector();
    let record = ReliabilityHandle::default();
    assert_eq!(selector.cost(&make_id(1), OperationKind::LookupContact, &record), 256.0);
    assert_eq!(record.get(), None);
}

#[test]
fn test_below_floor_is_raised_and_written_back() {
    let (selector, _) = setup_selector();
    let record = ReliabilityHandle::with_value(0.0);

    let cost = selector.cost(&make_id(1), OperationKind::Relay, &record);

    assert_eq!(record.get(), Some(selector.floor()));
    // least reliable peer costs as much as the farthest one is distant
    assert_eq!(cost, (1u64 << 23) as f64);
}

#[test]
fn test_nan_reliability_is_treated_as_below_floor() {
    let (selector, _) = setup_selector();
    let record = ReliabilityHandle::with_value(f64::NAN);
    selector.cost(&make_id(1), OperationKind::Relay, &record);
    assert_eq!(record.get(), Some(selector.floor()));
}

#[test]
fn test_publish_is_boosted() {
    let (selector, _) = setup_selector();
    let peer = make_id(3);
    for reliability in [0.0, 0.001, 0.3, 0.9, 1.0] {
        let publish = selector.cost(
            &peer,
            OperationKind::PublishContent,
            &ReliabilityHandle::with_value(reliability),
        );
        let other = selector.cost(
            &peer,
            OperationKind::RetrieveContent,
            &ReliabilityHandle::with_value(reliability),
        );
        assert_eq!(publish, selector.config().publish_boost * other);
    }
}

#[test]
fn test_selector_rejects_invalid_config() {
    let config = HandicapConfig {
        tuning_factor: 0.0,
        ..HandicapConfig::default()
    };
    assert!(ReliabilitySelector::new(make_id(0), config, &AddressSpace::default()).is_err());

    let config = HandicapConfig {
        history_weight: 1.5,
        ..HandicapConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_testing_config_values() {
    let selector = ReliabilitySelector::new(
        make_id(0),
        HandicapConfig::for_testing(),
        &AddressSpace::default(),
    )
    .unwrap();
    let record = ReliabilityHandle::with_value(0.5);
    assert_eq!(selector.cost(&make_id(1), OperationKind::Relay, &record), 8.0);
    assert_eq!(selector.cost(&make_id(1), OperationKind::PublishContent, &record), 16.0);
}

#[test]
fn test_concurrent_floor_corrections_agree() {
    let (selector, _) = setup_selector();
    let selector = Arc::new(selector);
    let record = ReliabilityHandle::with_value(0.0);
    let peer = make_id(9);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let selector = Arc::clone(&selector);
            let record = record.clone();
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| selector.cost(&peer, OperationKind::Relay, &record))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for cost in handle.join().unwrap() {
            assert_eq!(cost, (1u64 << 23) as f64);
        }
    }
    assert_eq!(record.get(), Some(selector.floor()));
}

// =============================================================================
// TEST GROUP 2: Reliability records
// =============================================================================

#[test]
fn test_weighted_observations() {
    let mut record = PeerReliability::new();
    assert_eq!(record.get(), None);

    // 0.75 * 0.5 + 0.25 * 1.0
    assert_eq!(record.observe(Outcome::Success, 0.75, 0.5), 0.625);
    // 0.75 * 0.625 + 0.25 * 0.0
    assert_eq!(record.observe(Outcome::Failure, 0.75, 0.5), 0.46875);
    assert_eq!(record.observations(), 2);
}

#[test]
fn test_history_weight_extremes() {
    let mut record = PeerReliability::with_value(0.2);
    assert_eq!(record.observe(Outcome::Success, 1.0, 0.5), 0.2);
    assert_eq!(record.observe(Outcome::Success, 0.0, 0.5), 1.0);
}

#[test]
fn test_handles_share_one_record() {
    let a = ReliabilityHandle::with_value(0.1);
    let b = a.clone();
    b.set(0.7);
    assert_eq!(a.get(), Some(0.7));
    assert!(a.same_record(&b));
    assert!(!a.same_record(&ReliabilityHandle::default()));
}

// =============================================================================
// TEST GROUP 3: Handicapper chain
// =============================================================================

#[test]
fn test_empty_chain() {
    let chain = HandicapperChain::new();
    assert!(chain.is_empty());
    assert!(chain.sort_by_preference(&[], OperationKind::Relay).is_empty());
    assert_eq!(chain.pick_best(&[], OperationKind::Relay), None);
    assert_eq!(chain.compute(&make_id(1), OperationKind::Relay), Handicap::Cost(0.0));
}

#[test]
fn test_disqualified_not_returned() {
    let (a, b) = (make_id(1), make_id(2));
    let mut chain = HandicapperChain::new();
    chain.add(fixed_cost(vec![(a, Handicap::Disqualified)]), None);

    let result = chain.sort_by_preference(&[a, b], OperationKind::Relay);
    assert_eq!(result, vec![b]);
    assert_eq!(chain.pick_best(&[a, b], OperationKind::Relay), Some(b));
    assert_eq!(chain.pick_best(&[a], OperationKind::Relay), None);
}

#[test]
fn test_orders_by_cost_in_either_input_order() {
    let (a, b) = (make_id(1), make_id(2));
    let mut chain = HandicapperChain::new();
    chain.add(fixed_cost(vec![(a, Handicap::Cost(1.0)), (b, Handicap::Cost(0.0))]), None);

    assert_eq!(chain.sort_by_preference(&[a, b], OperationKind::Relay), vec![b, a]);
    assert_eq!(chain.sort_by_preference(&[b, a], OperationKind::Relay), vec![b, a]);
}

#[test]
fn test_equal_costs_keep_input_order() {
    let (a, b) = (make_id(1), make_id(2));
    let mut chain = HandicapperChain::new();
    chain.add(fixed_cost(vec![]), None);

    assert_eq!(chain.sort_by_preference(&[a, b], OperationKind::Relay), vec![a, b]);
    assert_eq!(chain.pick_best(&[b, a], OperationKind::Relay), Some(b));
}

#[test]
fn test_costs_combine_as_sum_of_squares() {
    let (a, b) = (make_id(1), make_id(2));
    let mut chain = HandicapperChain::new();
    // a: 1 + 0 = 1 ; b: 0 + 4 = 4
    chain.add(fixed_cost(vec![(a, Handicap::Cost(1.0)), (b, Handicap::Cost(0.0))]), None);
    chain.add(fixed_cost(vec![(a, Handicap::Cost(0.0)), (b, Handicap::Cost(2.0))]), None);

    assert_eq!(chain.compute(&a, OperationKind::Relay), Handicap::Cost(1.0));
    assert_eq!(chain.compute(&b, OperationKind::Relay), Handicap::Cost(4.0));
    assert_eq!(chain.sort_by_preference(&[b, a], OperationKind::Relay), vec![a, b]);
}

#[test]
fn test_kind_specific_handicappers_only_apply_to_their_kind() {
    let (a, b) = (make_id(1), make_id(2));
    let mut chain = HandicapperChain::new();
    chain.add(
        fixed_cost(vec![(a, Handicap::Disqualified)]),
        Some(&[OperationKind::PublishContent][..]),
    );

    assert_eq!(chain.sort_by_preference(&[a, b], OperationKind::PublishContent), vec![b]);
    assert_eq!(chain.sort_by_preference(&[a, b], OperationKind::Relay), vec![a, b]);
    assert_eq!(chain.len(), 1);
}

#[test]
fn test_failing_or_negative_handicapper_disqualifies() {
    let a = make_id(1);
    let mut chain = HandicapperChain::new();
    chain.add(
        Arc::new(
            |_: &Identifier, _: OperationKind| -> Result<Handicap, HandicapError> {
                Err(HandicapError::Failed {
                    handicapper: "broken".to_string(),
                    reason: "no data".to_string(),
                })
            },
        ),
        None,
    );
    assert_eq!(chain.compute(&a, OperationKind::Relay), Handicap::Disqualified);

    let mut chain = HandicapperChain::new();
    chain.add(fixed_cost(vec![(a, Handicap::Cost(-2.0))]), None);
    assert_eq!(chain.compute(&a, OperationKind::Relay), Handicap::Disqualified);

    let mut chain = HandicapperChain::new();
    chain.add(fixed_cost(vec![(a, Handicap::Cost(f64::INFINITY))]), None);
    assert_eq!(chain.compute(&a, OperationKind::Relay), Handicap::Disqualified);
}
