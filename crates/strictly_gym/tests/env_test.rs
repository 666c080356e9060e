//! Tests for the gym-style environment surface.

use strictly_gym::{
    EnvConfig, EnvError, Phase, Player, RenderMode, ResetOptions, RewardScheme, StepError,
    XsAndOsEnv,
};

fn rgb_env(window_size: u32) -> XsAndOsEnv {
    XsAndOsEnv::new(
        EnvConfig::default()
            .with_render_mode(RenderMode::RgbArray)
            .with_window_size(window_size),
    )
    .unwrap()
}

#[test]
fn test_metadata_and_spaces() {
    let env = XsAndOsEnv::default();
    assert_eq!(
        XsAndOsEnv::METADATA.render_modes,
        [RenderMode::Human, RenderMode::RgbArray]
    );
    assert_eq!(XsAndOsEnv::METADATA.render_fps, 4);

    let actions = env.action_space();
    assert_eq!(actions.n, 9);
    assert!(actions.contains(8));
    assert!(!actions.contains(9));

    let observations = env.observation_space();
    assert_eq!(observations.shape, (3, 3));
    assert!(observations.contains(&[[1, -1, 0], [0, 0, 0], [0, 0, 1]]));
    assert!(!observations.contains(&[[2, 0, 0], [0, 0, 0], [0, 0, 0]]));
}

#[test]
fn test_reset_uses_configured_starting_player() {
    let mut env = XsAndOsEnv::new(EnvConfig::default().with_starting_player(Player::O)).unwrap();
    let (obs, info) = env.reset(None).unwrap();
    assert_eq!(obs, [[0; 3]; 3]);
    assert!(info.is_empty());
    assert_eq!(env.snapshot().to_move, Player::O);

    env.reset(Some(ResetOptions::new(Player::X))).unwrap();
    assert_eq!(env.snapshot().to_move, Player::X);
}

#[test]
fn test_episode_through_env() {
    let mut env = XsAndOsEnv::default();
    env.reset(None).unwrap();
    for action in [0, 3, 1, 4] {
        assert!(!env.step(action).unwrap().terminated());
    }
    let win = env.step(2).unwrap();
    assert_eq!(win.reward(), -0.5);
    assert!(win.terminated());
    assert!(!win.truncated());

    let replay = env.step(8).unwrap();
    assert_eq!(replay.reward(), 1.0);
    assert_eq!(env.snapshot().phase, Phase::Won(Player::X));
}

#[test]
fn test_out_of_range_action_is_an_error() {
    let mut env = XsAndOsEnv::default();
    env.reset(None).unwrap();
    let err = env.step(12).unwrap_err();
    assert!(matches!(
        err,
        EnvError::Step(StepError::ActionOutOfRange { action: 12 })
    ));
    assert!(err.to_string().contains("12"));
}

#[test]
fn test_out_of_range_after_terminal_replays() {
    let mut env = XsAndOsEnv::default();
    env.reset(None).unwrap();
    env.step(0).unwrap();
    env.step(0).unwrap();
    let replay = env.step(9).unwrap();
    assert_eq!(replay.reward(), -1.0);
    assert!(replay.terminated());
}

#[test]
fn test_new_rejects_invalid_window_size() {
    let oversized = EnvConfig::default().with_window_size(u32::MAX);
    let err = XsAndOsEnv::new(oversized).unwrap_err();
    assert!(matches!(err, EnvError::Config(_)));
    assert!(err.to_string().contains("window_size"));

    let tiny = EnvConfig::default().with_window_size(2);
    assert!(matches!(XsAndOsEnv::new(tiny), Err(EnvError::Config(_))));
}

#[test]
fn test_rewards_come_from_config() {
    let rewards = RewardScheme {
        illegal_move: -10.0,
        ..RewardScheme::default()
    };
    let mut env = XsAndOsEnv::new(EnvConfig::default().with_rewards(rewards)).unwrap();
    env.reset(None).unwrap();
    env.step(4).unwrap();
    assert_eq!(env.step(4).unwrap().reward(), -10.0);
    assert_eq!(env.step(4).unwrap().reward(), -1.0);
}

#[test]
fn test_render_without_mode_returns_nothing() {
    let mut env = XsAndOsEnv::default();
    env.reset(None).unwrap();
    assert!(env.render().unwrap().is_none());
    assert!(!env.has_display_session());
}

#[test]
fn test_rgb_array_frames_follow_the_board() {
    let mut env = rgb_env(90);
    env.reset(None).unwrap();

    let empty = env.render().unwrap().unwrap();
    assert_eq!(empty.shape(), (90, 90, 3));
    assert_eq!(empty.pixel(45, 45), Some([255, 255, 255]));

    env.step(4).unwrap();
    let marked = env.render().unwrap().unwrap();
    assert_eq!(marked.pixel(45, 45), Some([0, 0, 255]));

    // Rendering never touches the game.
    let before = env.snapshot();
    env.render().unwrap();
    assert_eq!(env.snapshot(), before);
    assert!(!env.has_display_session());
}

#[test]
fn test_render_replays_frozen_board() {
    let mut env = rgb_env(30);
    env.reset(None).unwrap();
    env.step(0).unwrap();
    env.step(0).unwrap();
    let first = env.render().unwrap().unwrap();
    env.step(5).unwrap();
    let second = env.render().unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_close_without_session_is_noop() {
    let mut env = rgb_env(30);
    env.reset(None).unwrap();
    env.close();
    env.close();
    assert!(!env.has_display_session());
}
