/// Tests for the deferred startup handshake
/// Covers the one-cycle deferral, tier precedence through GameMode, the
/// single-assignment guard, and the unresolved stuck state

use kickoff_server::{
    shared::{ExperienceId, NextTickQueue, OptionString},
    ExperienceState, GameMode, GameModeConfig, KickoffServerError, SessionState,
    StaticAssetRegistry, StaticSceneDefaults,
};

fn game_mode(config: GameModeConfig, scene_default: Option<ExperienceId>) -> GameMode {
    GameMode::new(
        config,
        Box::new(StaticSceneDefaults::new(scene_default)),
        Box::new(StaticAssetRegistry::empty()),
    )
}

#[test]
fn options_string_beats_scene_default() {
    let mut config = GameModeConfig::default();
    config.options = OptionString::from_raw("?Experience=Foo");
    let mut mode = game_mode(config, Some(ExperienceId::experience("Bar")));

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);

    // resolution is deferred to the next cycle
    assert_eq!(
        session.experience_manager().state(),
        &ExperienceState::Unassigned
    );

    queue.run_due(&mut session);

    assert_eq!(
        session.experience_manager().assigned_id(),
        Some(&ExperienceId::experience("Foo"))
    );
    assert_eq!(
        session.events_mut().take_resolutions(),
        vec![(ExperienceId::experience("Foo"), "OptionsString")]
    );
}

#[test]
fn scene_default_wins_when_options_are_absent() {
    let mut mode = game_mode(GameModeConfig::default(), Some(ExperienceId::experience("Bar")));

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);
    queue.run_due(&mut session);

    assert_eq!(
        session.events_mut().take_resolutions(),
        vec![(ExperienceId::experience("Bar"), "WorldSettings")]
    );
}

#[test]
fn match_assignment_beats_everything() {
    let mut config = GameModeConfig::default();
    config.match_assignment = Some(ExperienceId::experience("Assigned"));
    config.options = OptionString::from_raw("?Experience=Foo");
    config.default_experience = Some(ExperienceId::experience("Fallback"));
    let mut mode = game_mode(config, Some(ExperienceId::experience("Bar")));

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);
    queue.run_due(&mut session);

    assert_eq!(
        session.events_mut().take_resolutions(),
        vec![(ExperienceId::experience("Assigned"), "MatchAssignment")]
    );
}

#[test]
fn command_line_override_accepts_kind_and_name() {
    let mut config = GameModeConfig::default();
    config.command_line = vec![
        "--port=9000".to_string(),
        "Experience=ExperienceBundle:Baz".to_string(),
    ];
    let mut mode = game_mode(config, None);

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);
    queue.run_due(&mut session);

    assert_eq!(
        session.events_mut().take_resolutions(),
        vec![(ExperienceId::experience("Baz"), "CommandLine")]
    );
}

#[test]
fn dedicated_host_fallback_and_global_default_tiers() {
    let mut config = GameModeConfig::default();
    config.dedicated_host = true;
    config.dedicated_host_experience = Some(ExperienceId::experience("HostDefault"));
    config.default_experience = Some(ExperienceId::experience("GlobalDefault"));
    let mut mode = game_mode(config.clone(), None);

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);
    queue.run_due(&mut session);
    assert_eq!(
        session.events_mut().take_resolutions(),
        vec![(ExperienceId::experience("HostDefault"), "DedicatedHost")]
    );

    // not a dedicated host: the global default is the last resort
    config.dedicated_host = false;
    let mut mode = game_mode(config, None);
    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);
    queue.run_due(&mut session);
    assert_eq!(
        session.events_mut().take_resolutions(),
        vec![(ExperienceId::experience("GlobalDefault"), "Default")]
    );
}

#[test]
fn empty_option_value_is_not_a_valid_candidate() {
    let mut config = GameModeConfig::default();
    config.options = OptionString::from_raw("?Experience=");
    let mut mode = game_mode(config, Some(ExperienceId::experience("Bar")));

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);
    queue.run_due(&mut session);

    assert_eq!(
        session.events_mut().take_resolutions(),
        vec![(ExperienceId::experience("Bar"), "WorldSettings")]
    );
}

cfg_if::cfg_if! {
    if #[cfg(debug_assertions)] {
        #[test]
        fn developer_override_wins_over_command_line_in_dev_builds() {
            let mut config = GameModeConfig::default();
            config.developer_override = Some(ExperienceId::experience("DevOverride"));
            config.command_line = vec!["Experience=Baz".to_string()];
            let mut mode = game_mode(config, None);

            let mut queue = NextTickQueue::new();
            let mut session = SessionState::new();
            mode.init_session(&mut queue);
            queue.run_due(&mut session);

            assert_eq!(
                session.events_mut().take_resolutions(),
                vec![(ExperienceId::experience("DevOverride"), "DeveloperSettings")]
            );
        }
    } else {
        #[test]
        fn developer_override_is_ignored_in_production_builds() {
            let mut config = GameModeConfig::default();
            config.developer_override = Some(ExperienceId::experience("DevOverride"));
            config.command_line = vec!["Experience=Baz".to_string()];
            let mut mode = game_mode(config, None);

            let mut queue = NextTickQueue::new();
            let mut session = SessionState::new();
            mode.init_session(&mut queue);
            queue.run_due(&mut session);

            assert_eq!(
                session.events_mut().take_resolutions(),
                vec![(ExperienceId::experience("Baz"), "CommandLine")]
            );
        }
    }
}

#[test]
fn no_source_resolves_session_stays_unassigned() {
    let mut mode = game_mode(GameModeConfig::default(), None);

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    mode.init_session(&mut queue);
    queue.run_due(&mut session);

    assert_eq!(
        session.experience_manager().state(),
        &ExperienceState::Unassigned
    );
    // exactly one error surfaces; no resolution event, no fallback identifier
    assert!(!session.events().has_resolutions());
    assert_eq!(
        session.events_mut().take_errors(),
        vec![KickoffServerError::NoExperienceResolved]
    );

    // later cycles do not retry the chain
    queue.run_due(&mut session);
    assert!(!session.events().has_errors());
}

#[test]
fn reentrant_init_schedules_the_trigger_exactly_once() {
    let mut config = GameModeConfig::default();
    config.options = OptionString::from_raw("?Experience=Foo");
    let mut mode = game_mode(config, None);

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    let first = mode.init_session(&mut queue);
    let second = mode.init_session(&mut queue);
    assert_eq!(first, second);

    queue.run_due(&mut session);
    assert_eq!(session.events_mut().take_resolutions().len(), 1);
    assert_eq!(
        session.experience_manager().assigned_id(),
        Some(&ExperienceId::experience("Foo"))
    );

    queue.run_due(&mut session);
    assert!(session.events().is_empty() || !session.events().has_resolutions());
}

#[test]
fn player_initialization_is_recorded() {
    use kickoff_server::ControllerId;

    let mode = game_mode(GameModeConfig::default(), None);
    let mut session = SessionState::new();

    mode.notify_player_initialized(&mut session, ControllerId::new(4));
    mode.notify_player_initialized(&mut session, ControllerId::new(9));

    assert!(session.events().has_player_initializations());
    assert_eq!(
        session.events_mut().take_player_initializations(),
        vec![ControllerId::new(4), ControllerId::new(9)]
    );
}

#[test]
fn cancelled_trigger_never_resolves() {
    let mut config = GameModeConfig::default();
    config.options = OptionString::from_raw("?Experience=Foo");
    let mut mode = game_mode(config, None);

    let mut queue = NextTickQueue::new();
    let mut session = SessionState::new();
    let handle = mode.init_session(&mut queue);

    // session torn down before the trigger fires
    queue.cancel(&handle);
    queue.run_due(&mut session);

    assert_eq!(
        session.experience_manager().state(),
        &ExperienceState::Unassigned
    );
    assert!(session.events().is_empty());
}
