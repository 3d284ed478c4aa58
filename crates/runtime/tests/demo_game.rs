//! Replays the scripted demo game and custom catalogs from disk.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use sideline_content::{CatalogFile, CatalogLoader, ScriptLoader};
use sideline_core::{
    ExecuteError, GamePhase, Kickoff, OpeningToss, PenaltyCall, PenaltyTable, Play,
    PlayError, Possession, RulesConfig, Side, YardLine,
};
use sideline_runtime::{GameSession, RuntimeError, TeamNames};

fn demo_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/sample_game.ron")
}

#[test]
fn demo_game_plays_to_the_final() {
    let script = ScriptLoader::load(&demo_script()).unwrap();
    let mut session = GameSession::nfhs(script.opening)
        .with_team_names(TeamNames::new("Tigers", "Bears"));

    for play in script.plays {
        session.record(play).unwrap();
    }

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Final);
    assert_eq!(state.score.to_string(), "10-6");

    let half = session.halftime_report().unwrap();
    assert_eq!(half.score.to_string(), "7-0");

    let summary = session.summary();
    assert_eq!(summary.home.touchdowns, 1);
    assert_eq!(summary.home.field_goals_made, 1);
    assert_eq!(summary.home.fumbles_lost, 1);
    assert_eq!(summary.home.penalties, 3);
    assert_eq!(summary.home.penalty_yards, 35);
    assert_eq!(summary.away.touchdowns, 1);
    assert_eq!(summary.away.interceptions, 2);
    assert_eq!(summary.away.timeouts_used, 1);
    assert_eq!(summary.away.penalties, 2);
    assert_eq!(summary.away.penalty_yards, 25);

    let last = session.log().last().unwrap();
    assert_eq!(last.report.description, "Final, 10-6");
}

#[test]
fn custom_catalog_replaces_the_builtin_one() {
    let mut file = CatalogFile::from_catalog(PenaltyTable::nfhs());
    file.penalties.retain(|definition| definition.id != "taunting");
    file.quick_picks.defense.clear();

    let mut temp = tempfile::NamedTempFile::new().unwrap();
    write!(temp, "{}", ron::ser::to_string(&file).unwrap()).unwrap();
    let catalog = CatalogLoader::load(temp.path()).unwrap();

    let mut session = GameSession::new(
        OpeningToss::default(),
        RulesConfig::default(),
        Arc::new(catalog),
    );
    session
        .record(Play::Kickoff(Kickoff {
            return_spot: YardLine::new(30).unwrap(),
        }))
        .unwrap();
    let error = session
        .record(Play::Penalty(PenaltyCall::new("taunting", Side::Defense)))
        .unwrap_err();
    match error {
        RuntimeError::Rejected {
            error: ExecuteError::Penalty(inner),
            ..
        } => assert!(matches!(inner.error, PlayError::Catalog(_))),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(session.catalog().get_by_id("false-start").is_ok());
    assert_eq!(session.state().possession, Possession::Offense);
    assert_eq!(session.log().len(), 1);
}
