use billdeck::prelude::*;
use billdeck::{Accent, Direction, ExitMotion};
use std::path::PathBuf;

fn mock_deck() -> BillDeck {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("mocks")
        .join("bills.json");
    BillDeck::from_path(&path).expect("Failed to load mocks/bills.json")
}

/// Two bills, quota 20, wrap policy: like twice and come back around
#[test]
fn test_two_bill_wrap_scenario() {
    let mut engine = BillCardEngine::new(mock_deck(), &Config::default()).unwrap();

    let view = engine.view().unwrap();
    assert_eq!(view.position, 0);
    assert_eq!(view.progress.percent, 5.0);
    assert_eq!(view.bill.status, "Senate Floor");
    assert_eq!(view.category, Category::Urgent);
    let urgent_advisory = view.advisory_message.expect("urgent bills carry an advisory");
    assert!(!urgent_advisory.is_empty());

    let update = engine.dispatch(Command::Like).unwrap();
    assert_eq!(update.view.position, 1);
    assert_eq!(update.view.progress.percent, 10.0);
    assert_eq!(update.view.bill.status, "In Committee");
    assert_eq!(update.view.category, Category::Informational);
    let info_advisory = update
        .view
        .advisory_message
        .expect("committee bills carry an advisory");
    assert!(!info_advisory.is_empty());
    assert_ne!(info_advisory, urgent_advisory);

    let update = engine.dispatch(Command::Like).unwrap();
    assert_eq!(update.view.position, 0);
    assert_eq!(update.view.progress.percent, 5.0);
    assert_eq!(update.transition.from, 1);
    assert_eq!(update.transition.to, 0);
}

#[test]
fn test_clamp_scenario_from_config_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("mocks")
        .join("billdeck.yml");
    let config = Config::from_path(&path).unwrap();
    let mut engine = BillCardEngine::new(mock_deck(), &config).unwrap();
    assert_eq!(engine.quota(), 2);

    let update = engine.dispatch(Command::Dislike).unwrap();
    assert_eq!(update.view.position, 0);
    assert_eq!(update.view.progress.percent, 50.0);
    assert_eq!(update.transition.exit, ExitMotion::SwipeLeft);
    assert_eq!(update.transition.accent, Accent::Oppose);

    engine.dispatch(Command::Like).unwrap();
    let update = engine.dispatch(Command::Like).unwrap();
    assert_eq!(update.view.position, 1);
    assert!(update.view.progress.complete);
}

#[test]
fn test_rapid_commands_apply_in_order() {
    let mut engine = BillCardEngine::new(mock_deck(), &Config::default()).unwrap();
    let transitions = engine
        .dispatch_all([Command::Like, Command::Dislike, Command::Skip, Command::Back])
        .unwrap();

    let hops: Vec<(usize, usize)> = transitions.iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(hops, vec![(0, 1), (1, 0), (0, 1), (1, 0)]);

    // Last command wins
    let state = engine.state();
    assert_eq!(state.last_command, Some(Command::Back));
    assert_eq!(state.last_direction, Direction::Stay.signum());
}

#[test]
fn test_initial_view_snapshot() {
    let engine = BillCardEngine::new(mock_deck(), &Config::default()).unwrap();
    let json = serde_json::to_string_pretty(&engine.view().unwrap()).unwrap();

    insta::assert_snapshot!(json, @r###"
    {
      "position": 0,
      "bill": {
        "jurisdiction": "California",
        "title": "Clean Energy Act 2025",
        "summary": "Require utilities to generate 70% clean energy by 2030 and invest in renewable infrastructure.",
        "keyIssues": [
          "Renewable Energy",
          "Environment"
        ],
        "stats": {
          "like": 120,
          "dislike": 10,
          "watch": 50
        },
        "status": "Senate Floor",
        "voteDate": "10/01/25"
      },
      "category": "urgent",
      "advisoryMessage": "Voting soon. Send a letter!",
      "emphasis": true,
      "progress": {
        "current": 1,
        "quota": 20,
        "percent": 5.0,
        "complete": false
      },
      "lastCommand": null,
      "lastDirection": 0
    }
    "###);
}

#[test]
fn test_like_transition_snapshot() {
    let mut engine = BillCardEngine::new(mock_deck(), &Config::default()).unwrap();
    let update = engine.dispatch(Command::Like).unwrap();
    let json = serde_json::to_string_pretty(&update.transition).unwrap();

    insta::assert_snapshot!(json, @r###"
    {
      "command": "like",
      "direction": 1,
      "from": 0,
      "to": 1,
      "exit": "swipeRight",
      "enterOffset": 100,
      "accent": "affirm"
    }
    "###);
}
