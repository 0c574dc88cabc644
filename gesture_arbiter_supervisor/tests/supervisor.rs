use gesture_arbiter_core::*;
use gesture_arbiter_supervisor::*;

fn punch_frame(confidence: f32) -> GestureFrame {
    GestureFrame {
        observations: vec![GestureObservation::discrete(
            GestureClass::Punch,
            true,
            confidence,
        )],
    }
}

fn idle_frame() -> GestureFrame {
    GestureFrame {
        observations: vec![
            GestureObservation::discrete(GestureClass::Punch, false, 0.0),
            GestureObservation::discrete(GestureClass::Kick, false, 0.0),
            GestureObservation::discrete(GestureClass::Haduken, false, 0.0),
            GestureObservation::discrete(GestureClass::JumpingJacks, false, 0.0),
        ],
    }
}

fn two_slot_cfg() -> ArbiterCfg {
    ArbiterCfg {
        max_actors: 2,
        ..ArbiterCfg::default()
    }
}

#[test]
fn resolving_same_actor_twice_is_stable() {
    let mut slots = SlotMap::new(2);
    let a = slots.resolve(42).unwrap();
    let b = slots.resolve(42).unwrap();
    assert_eq!(a, b);
}

#[test]
fn occupied_slot_is_never_handed_out() {
    let mut slots = SlotMap::new(6);
    let s42 = slots.resolve(42).unwrap();
    assert_eq!(s42, 0);
    let s7 = slots.resolve(7).unwrap();
    assert_eq!(s7, 1);
    // 42 still bound: resolving a third actor must skip slots 0 and 1.
    assert_eq!(slots.resolve(99).unwrap(), 2);
}

#[test]
fn released_slot_is_reused_for_next_unseen_actor() {
    let mut slots = SlotMap::new(2);
    slots.resolve(41).unwrap();
    let s42 = slots.resolve(42).unwrap();
    assert_eq!(s42, 1);

    assert_eq!(slots.release(42), Some(1));
    assert_eq!(slots.resolve(99).unwrap(), 1);
}

#[test]
fn capacity_boundary_at_two_actors() {
    let mut sup = GestureSupervisor::new(two_slot_cfg());

    let first = sup.ingest_frame(10, &idle_frame()).unwrap();
    let second = sup.ingest_frame(20, &idle_frame()).unwrap();
    assert_eq!(first.slot, 0);
    assert_eq!(second.slot, 1);

    let err = sup.ingest_frame(30, &idle_frame()).unwrap_err();
    assert_eq!(
        err,
        ArbiterError::CapacityExceeded {
            actor: 30,
            capacity: 2
        }
    );

    // Bound slots are unaffected by the dropped frame.
    assert_eq!(sup.ingest_frame(10, &idle_frame()).unwrap().slot, 0);
    assert_eq!(sup.ingest_frame(20, &idle_frame()).unwrap().slot, 1);
}

#[test]
fn punch_fires_exactly_once_per_latch() {
    let mut sup = GestureSupervisor::new(ArbiterCfg::default());

    let out = sup.ingest_frame(7, &punch_frame(0.9)).unwrap();
    assert_eq!(
        out.fired,
        Some(ActionFired {
            slot: 0,
            class: GestureClass::Punch
        })
    );
    assert!(out.status.is_tracked);
    assert!(!out.status.latched[GestureClass::Punch.index()]);

    // Idle follow-up frame: nothing re-fires.
    let out = sup.ingest_frame(7, &idle_frame()).unwrap();
    assert_eq!(out.fired, None);
}

#[test]
fn slots_do_not_interfere() {
    let mut sup = GestureSupervisor::new(ArbiterCfg::default());

    sup.ingest_frame(1, &punch_frame(0.9)).unwrap();
    // Actor 2 latches but has not fired yet this tick.
    let out2 = sup
        .ingest_frame(
            2,
            &GestureFrame {
                observations: vec![GestureObservation::discrete(
                    GestureClass::Kick,
                    true,
                    0.8,
                )],
            },
        )
        .unwrap();
    assert_eq!(
        out2.fired,
        Some(ActionFired {
            slot: 1,
            class: GestureClass::Kick
        })
    );

    // Losing actor 1 must not disturb actor 2's slot or state.
    sup.on_tracking_lost(1).unwrap();
    let status2 = sup.status_of(1).unwrap();
    assert!(status2.is_tracked);
}

#[test]
fn tracking_lost_resets_everything_to_sentinel() {
    let mut sup = GestureSupervisor::new(ArbiterCfg::default());

    let frame = GestureFrame {
        observations: vec![
            GestureObservation::discrete(GestureClass::Punch, true, 0.4).with_progress(0.6),
            GestureObservation::discrete(GestureClass::Haduken, true, 0.95),
        ],
    };
    sup.ingest_frame(5, &frame).unwrap();

    let status = sup.on_tracking_lost(5).unwrap();
    assert_eq!(status.slot, 0);
    assert!(!status.is_tracked);
    for class in GestureClass::PRIORITY {
        assert!(!status.latched[class.index()]);
        assert_eq!(status.confidence[class.index()], 0.0);
        assert_eq!(status.progress[class.index()], PROGRESS_NONE);
    }

    // The slot is free again and the next unseen actor starts clean.
    let out = sup.ingest_frame(6, &idle_frame()).unwrap();
    assert_eq!(out.slot, 0);
    assert_eq!(out.fired, None);
}

#[test]
fn stale_tracking_lost_is_ignored() {
    let mut sup = GestureSupervisor::new(ArbiterCfg::default());
    assert_eq!(sup.on_tracking_lost(999), None);
}

#[test]
fn status_of_unbound_slot_is_a_contract_violation() {
    let sup = GestureSupervisor::new(ArbiterCfg::default());
    assert_eq!(
        sup.status_of(3).unwrap_err(),
        ArbiterError::UnboundSlot { slot: 3 }
    );
}

#[test]
fn named_builder_maps_and_merges_channels() {
    let builder = NamedResultBuilder::default();
    let frame = builder.build(&[
        NamedResult::discrete("PunchStart", true, 0.9),
        NamedResult::progress("PunchProgress", 0.4),
        NamedResult::discrete("KickStart", false, 0.2),
        NamedResult::discrete("NotAGesture", true, 1.0),
    ]);

    // Unknown name skipped, punch channels merged into one observation.
    assert_eq!(frame.observations.len(), 2);
    let punch = frame
        .observations
        .iter()
        .find(|o| o.class == GestureClass::Punch)
        .unwrap();
    assert!(punch.detected);
    assert!((punch.confidence - 0.9).abs() < 1e-6);
    assert_eq!(punch.progress, Some(0.4));

    let kick = frame
        .observations
        .iter()
        .find(|o| o.class == GestureClass::Kick)
        .unwrap();
    assert!(!kick.detected);
}

#[test]
fn ingest_named_end_to_end() {
    let mut sup = GestureSupervisor::new(ArbiterCfg::default());
    let builder = NamedResultBuilder::default();

    let out = sup
        .ingest_named(
            &builder,
            42,
            &[
                NamedResult::discrete("HadukStart", true, 0.95),
                NamedResult::discrete("PunchStart", true, 0.85),
            ],
        )
        .unwrap();

    // Punch 0.85 < haduken 0.95: the special move wins.
    assert_eq!(
        out.fired,
        Some(ActionFired {
            slot: 0,
            class: GestureClass::Haduken
        })
    );
    // Punch latch survives, its confidence is zeroed by the rival rule,
    // so it fires on the next tick.
    assert!(out.status.latched[GestureClass::Punch.index()]);
    let out = sup.ingest_named(&builder, 42, &[]).unwrap();
    assert_eq!(
        out.fired,
        Some(ActionFired {
            slot: 0,
            class: GestureClass::Punch
        })
    );
}

#[test]
fn snapshot_roundtrip_preserves_bindings_and_latches() {
    let mut sup = GestureSupervisor::new(ArbiterCfg::default());
    sup.ingest_frame(10, &idle_frame()).unwrap();
    // Sub-threshold kick activity: recorded confidence, no latch, no fire.
    sup.ingest_frame(
        20,
        &GestureFrame {
            observations: vec![GestureObservation::discrete(GestureClass::Kick, true, 0.3)],
        },
    )
    .unwrap();

    let snap = sup.export_state();
    assert_eq!(snap.states.len(), 2);
    assert_eq!(snap.states[0].0, 0);
    assert_eq!(snap.states[0].1, 10);
    assert_eq!(snap.states[1].1, 20);

    let mut restored = GestureSupervisor::new(ArbiterCfg::default());
    restored.restore(snap);
    assert!(restored.status_of(0).unwrap().is_tracked);
    let status = restored.status_of(1).unwrap();
    assert!(status.is_tracked);
    assert!((status.confidence[GestureClass::Kick.index()] - 0.3).abs() < 1e-6);
    // Same actor resolves to the same slot after restore.
    assert_eq!(restored.ingest_frame(20, &idle_frame()).unwrap().slot, 1);
}
