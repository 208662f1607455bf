use game_content::{GuideSpec, LevelSpec};
use game_core::{
    ContactTag, DialoguePhase, EntityId, EventResult, GameConfig, HeartIcon, Vec2,
};
use runtime::{
    BusEvent, MESSAGE_LABEL, OracleManager, RuntimeError, SCORE_LABEL, SceneRegistry, Session,
    SessionEvent, Topic, UiEvent,
};

const GUIDE: EntityId = EntityId(9);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn level() -> LevelSpec {
    LevelSpec {
        player_spawn: Vec2::new(0.0, 1.0),
        respawn_point: Vec2::new(4.0, 1.0),
        guide: GuideSpec::default(),
    }
}

fn registry() -> SceneRegistry {
    let mut registry = SceneRegistry::new();
    registry.register(MESSAGE_LABEL);
    registry.register(SCORE_LABEL);
    registry
}

fn session() -> Session {
    Session::builder()
        .oracles(OracleManager::from_content(GameConfig::default(), &level()))
        .registry(registry())
        .guide_npc(GUIDE)
        .build()
        .expect("Session should build")
}

/// End-to-End Gameplay Scenario Test
///
/// This test simulates a complete session from start to finish:
/// 1. Session starts with oracle-based initialization
/// 2. Player collects coins and pickups
/// 3. Player takes enemy hits through shield and life
/// 4. Player dies and respawns
/// 5. Player talks to the guide NPC
/// 6. Player reaches the finish trigger
#[test]
fn test_complete_session_scenario() {
    init_tracing();

    println!("\n════════════════════════════════════════════════════════");
    println!("  PLATFORMER - Complete Session Scenario Test");
    println!("════════════════════════════════════════════════════════\n");

    // ================================================================
    // PHASE 1: Initialization
    // ================================================================
    println!("📦 PHASE 1: Initializing Session");
    println!("─────────────────────────────────────────────────────\n");

    let mut session = session();

    assert_eq!(session.state().player.life.current, 3);
    assert_eq!(session.state().player.shield.current, 0);
    assert_eq!(session.state().player.position, Vec2::new(0.0, 1.0));
    assert_eq!(session.ui().label(session.score_widget()), Some("0000"));
    assert_eq!(session.ui().label(session.message_widget()), Some(""));
    assert_eq!(session.ui().hearts().len(), 9);
    println!("✓ Player spawned with 3 life hearts, 0 shield hearts");
    println!("✓ Score label reads 0000, message label empty\n");

    // ================================================================
    // PHASE 2: Coin collection
    // ================================================================
    println!("🪙 PHASE 2: Coin Collection");
    println!("─────────────────────────────────────────────────────\n");

    let mut events = session.subscribe(Topic::Session);

    let result = session
        .player_trigger_entered(EntityId(20), ContactTag::Coin)
        .expect("Coin pickup should succeed");
    assert_eq!(result, EventResult::CoinCollected { value: 5 });

    let despawn = events.try_recv().expect("Should receive despawn event");
    assert!(matches!(
        despawn,
        BusEvent::Session(SessionEvent::EntityDespawned { entity: EntityId(20) })
    ));
    assert_eq!(session.ui().label(session.score_widget()), Some("0005"));
    println!("✓ Coin collected: score 0005, coin despawned\n");

    // ================================================================
    // PHASE 3: Shield pickup and enemy contact
    // ================================================================
    println!("🛡️  PHASE 3: Shield Absorbs Before Life");
    println!("─────────────────────────────────────────────────────\n");

    session
        .player_trigger_entered(EntityId(21), ContactTag::Shield)
        .expect("Shield pickup should succeed");
    assert_eq!(session.state().player.shield.current, 1);

    let result = session
        .player_collision_entered(EntityId(40), ContactTag::Enemy)
        .expect("Enemy contact should resolve");
    assert_eq!(
        result,
        EventResult::DamageTaken {
            absorbed_by_shield: true,
            respawned: false,
        }
    );
    assert_eq!(session.state().player.shield.current, 0);
    assert_eq!(session.state().player.life.current, 3);
    println!("✓ Shield heart absorbed the hit; life untouched\n");

    // ================================================================
    // PHASE 4: Death and respawn
    // ================================================================
    println!("💀 PHASE 4: Death And Respawn");
    println!("─────────────────────────────────────────────────────\n");

    for _ in 0..2 {
        session
            .player_collision_entered(EntityId(40), ContactTag::Enemy)
            .expect("Enemy contact should resolve");
    }
    assert_eq!(session.state().player.life.current, 1);

    let result = session
        .player_collision_entered(EntityId(40), ContactTag::Enemy)
        .expect("Fatal hit should resolve");
    assert_eq!(
        result,
        EventResult::DamageTaken {
            absorbed_by_shield: false,
            respawned: true,
        }
    );
    assert!(session.state().player.life.is_full());
    assert_eq!(session.state().player.position, Vec2::new(4.0, 1.0));
    assert_eq!(session.state().player.velocity, Vec2::ORIGIN);
    // 5 (coin) + 20 (death delta, additive)
    assert_eq!(session.ui().label(session.score_widget()), Some("0025"));
    println!("✓ Life refilled, player moved to the respawn point");
    println!("✓ Score rose to 0025 (death delta is additive)\n");

    // ================================================================
    // PHASE 5: Guide dialogue
    // ================================================================
    println!("💬 PHASE 5: Guide Dialogue");
    println!("─────────────────────────────────────────────────────\n");

    session.npc_zone_entered().expect("Zone enter should resolve");
    assert_eq!(
        session.ui().label(session.message_widget()),
        Some("Be Careful As You Move Forward")
    );
    assert_eq!(session.state().player.move_speed, 0.0);

    session.confirm_pressed().expect("Confirm should resolve");
    assert_eq!(
        session.ui().label(session.message_widget()),
        Some("Watch out for dragons!")
    );
    assert_eq!(session.state().player.move_speed, 5.0);
    assert_eq!(session.state().dialogue.phase, DialoguePhase::Triggered);

    session.npc_zone_exited().expect("Zone exit should resolve");
    assert_eq!(session.ui().label(session.message_widget()), Some(""));
    println!("✓ Script ran, player froze and was released, message cleared\n");

    // ================================================================
    // PHASE 6: Finish trigger
    // ================================================================
    println!("🏁 PHASE 6: Finish Trigger");
    println!("─────────────────────────────────────────────────────\n");

    let result = session
        .player_trigger_entered(EntityId(50), ContactTag::Finish)
        .expect("Finish trigger should resolve");
    assert_eq!(result, EventResult::LevelFinished);
    assert!(session.state().world.clock_paused);
    println!("✓ Clock paused\n");

    println!("════════════════════════════════════════════════════════");
    println!("  TEST COMPLETE - All Phases Successful!");
    println!("════════════════════════════════════════════════════════\n");
}

#[test]
fn test_health_pickups_never_exceed_max_life() {
    let mut session = session();

    session
        .player_collision_entered(EntityId(40), ContactTag::Enemy)
        .unwrap();
    assert_eq!(session.state().player.life.current, 2);

    for expected_gain in [true, false, false] {
        let result = session
            .player_trigger_entered(EntityId(22), ContactTag::Health)
            .unwrap();
        assert_eq!(
            result,
            EventResult::HealthCollected {
                gained: expected_gain
            }
        );
    }

    assert_eq!(session.state().player.life.current, 3);
    let player = &session.state().player;
    assert!(player.hearts.matches(3, 0));
}

#[test]
fn test_shield_pickups_never_exceed_max_shield() {
    let mut session = session();

    for _ in 0..6 {
        let result = session
            .player_trigger_entered(EntityId(23), ContactTag::Shield)
            .unwrap();
        assert_eq!(result, EventResult::ShieldCollected { gained: true });
    }

    let before = session.ui().hearts().to_vec();
    let result = session
        .player_trigger_entered(EntityId(23), ContactTag::Shield)
        .unwrap();
    assert_eq!(result, EventResult::ShieldCollected { gained: false });

    assert_eq!(session.state().player.shield.current, 6);
    assert_eq!(session.ui().hearts(), &before[..]);
}

#[test]
fn test_unshielded_hit_empties_the_top_life_slot() {
    let mut session = session();

    session
        .player_collision_entered(EntityId(40), ContactTag::Enemy)
        .unwrap();

    assert_eq!(session.state().player.life.current, 2);
    let hearts = session.ui().hearts();
    assert!(hearts[2].visible);
    assert_eq!(hearts[2].icon, HeartIcon::Container);
    assert_eq!(hearts[1].icon, HeartIcon::Life);
}

#[test]
fn test_score_accounting_over_coins_and_deaths() {
    let mut session = session();

    // 4 coins and 2 deaths: 4*5 + 2*20 = 60
    for _ in 0..4 {
        session
            .player_trigger_entered(EntityId(20), ContactTag::Coin)
            .unwrap();
    }
    for _ in 0..2 {
        session
            .player_trigger_entered(EntityId(30), ContactTag::Death)
            .unwrap();
    }

    assert_eq!(session.state().player.score, 60);
    assert_eq!(session.ui().label(session.score_widget()), Some("0060"));
}

#[test]
fn test_death_trigger_leaves_shield_untouched() {
    let mut session = session();

    for _ in 0..3 {
        session
            .player_trigger_entered(EntityId(23), ContactTag::Shield)
            .unwrap();
    }

    session
        .player_trigger_entered(EntityId(30), ContactTag::Death)
        .unwrap();

    assert!(session.state().player.life.is_full());
    assert_eq!(session.state().player.shield.current, 3);
}

#[test]
fn test_warning_message_on_repeat_contact() {
    let mut session = session();

    session.npc_zone_entered().unwrap();
    session.confirm_pressed().unwrap();
    session.npc_zone_exited().unwrap();

    let result = session.npc_zone_entered().unwrap();
    assert_eq!(result, EventResult::DialogueWarned);
    assert_eq!(
        session.ui().label(session.message_widget()),
        Some("You Are Going The Wrong Way")
    );
}

#[test]
fn test_leaving_mid_script_keeps_the_player_frozen() {
    let mut session = session();

    session.npc_zone_entered().unwrap();
    session.npc_zone_exited().unwrap();

    assert_eq!(session.ui().label(session.message_widget()), Some(""));
    assert_eq!(session.state().player.move_speed, 0.0);
    assert!(matches!(
        session.state().dialogue.phase,
        DialoguePhase::AwaitingConfirmation { .. }
    ));

    // The pending confirm still finishes the script.
    session.confirm_pressed().unwrap();
    assert_eq!(session.state().player.move_speed, 5.0);
}

#[test]
fn test_ui_events_follow_label_changes() {
    let mut session = session();
    let mut ui_events = session.subscribe(Topic::Ui);

    session
        .player_trigger_entered(EntityId(20), ContactTag::Coin)
        .unwrap();

    let event = ui_events.try_recv().expect("Should receive a UI event");
    match event {
        BusEvent::Ui(UiEvent::LabelChanged { widget, text }) => {
            assert_eq!(widget, session.score_widget());
            assert_eq!(text, "0005");
        }
        other => panic!("unexpected UI event: {other:?}"),
    }
}

#[test]
fn test_build_fails_without_the_message_binding() {
    let mut registry = SceneRegistry::new();
    registry.register(SCORE_LABEL);

    let error = Session::builder()
        .oracles(OracleManager::from_content(GameConfig::default(), &level()))
        .registry(registry)
        .build()
        .unwrap_err();

    assert!(matches!(
        error,
        RuntimeError::MissingBinding { name } if name == MESSAGE_LABEL
    ));
}

#[test]
fn test_build_fails_without_oracles() {
    let error = Session::builder().registry(registry()).build().unwrap_err();
    assert!(matches!(error, RuntimeError::MissingOracles));
}
