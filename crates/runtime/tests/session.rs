//! End-to-end scorekeeping through a `GameSession`.

use sideline_core::{
    BallCarry, CarryKind, Conversion, ConversionKind, DriveDirection, ExecuteError, GamePhase,
    Kickoff, OpeningToss, PenaltyCall, Play, PlayError, Possession, Punt, Quarter, Side, Timeout,
    Turnover, TurnoverKind, YardLine,
};
use sideline_runtime::{GameExport, GameSession, RuntimeError, TeamNames};

fn yl(value: u8) -> YardLine {
    YardLine::new(value).unwrap()
}

fn carry(kind: CarryKind, end: u8) -> Play {
    Play::Carry(BallCarry::new(kind, yl(end)))
}

fn penalty(id: &str, side: Side) -> Play {
    Play::Penalty(PenaltyCall::new(id, side))
}

/// Home receives driving right, scores, then the away team draws two
/// unsportsmanlike fouls from the home defense before halftime.
fn first_half(session: &mut GameSession) {
    let plays = [
        Play::Kickoff(Kickoff { return_spot: yl(25) }),
        carry(CarryKind::Rush, 32),
        penalty("false-start", Side::Offense),
        carry(CarryKind::Completion, 45),
        carry(CarryKind::Sack, 38),
        Play::Incompletion,
        Play::Punt(Punt { end_spot: yl(90) }),
        Play::Turnover(Turnover::new(TurnoverKind::Interception, yl(80))),
        carry(CarryKind::Rush, 100),
        Play::Conversion(Conversion {
            kind: ConversionKind::ExtraPoint,
            good: true,
        }),
        Play::Kickoff(Kickoff {
            return_spot: YardLine::RIGHT_GOAL,
        }),
        penalty("unsportsmanlike-conduct", Side::Defense),
        penalty("taunting", Side::Defense),
        Play::Timeout(Timeout {
            team: Possession::Offense,
        }),
        Play::EndQuarter,
        Play::EndQuarter,
    ];
    for play in plays {
        session.record(play).unwrap();
    }
}

#[test]
fn drive_is_tracked_play_by_play() {
    let mut session = GameSession::nfhs(OpeningToss::default());

    let entry = session
        .record(Play::Kickoff(Kickoff { return_spot: yl(25) }))
        .unwrap();
    assert_eq!(entry.sequence, 1);
    assert_eq!(entry.line(), "Q1 12:00  Kickoff returned to OWN 25");

    session.record(carry(CarryKind::Rush, 32)).unwrap();
    assert_eq!(session.state().field.describe(), "2nd & 3 at OWN 32");

    let entry = session.record(penalty("false-start", Side::Offense)).unwrap();
    let foul = entry.report.foul.as_ref().unwrap();
    assert_eq!(foul.team, Possession::Offense);
    assert_eq!(foul.enforcement.yards_applied, 5);
    assert_eq!(session.state().field.describe(), "2nd & 8 at OWN 27");

    let entry = session.record(carry(CarryKind::Completion, 45)).unwrap();
    assert!(entry.report.first_down);
    assert_eq!(session.state().field.describe(), "1st & 10 at OWN 45");
}

#[test]
fn rejected_play_changes_nothing() {
    let mut session = GameSession::nfhs(OpeningToss::default());
    let before = session.state().clone();

    let error = session
        .record(carry(CarryKind::Rush, 40))
        .unwrap_err();
    match &error {
        RuntimeError::Rejected {
            error: ExecuteError::Scrimmage(inner),
            ..
        } => assert!(matches!(inner.error, PlayError::WrongPhase { .. })),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.is_recoverable());
    assert_eq!(session.state(), &before);
    assert!(session.log().is_empty());
}

#[test]
fn first_half_summary_and_ejection_notice() {
    let mut session = GameSession::nfhs(OpeningToss::default())
        .with_team_names(TeamNames::new("Tigers", "Bears"));
    first_half(&mut session);

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Halftime);
    assert_eq!(state.score.home, 7);
    assert_eq!(state.score.away, 0);

    let notices: Vec<_> = session
        .log()
        .iter()
        .flat_map(|entry| entry.notices.iter())
        .collect();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].starts_with("Tigers has 2 unsportsmanlike fouls"));

    let half = session.halftime_report().unwrap();
    assert_eq!(half.total_plays, 13);
    assert_eq!(half.home.plays, 9);
    assert_eq!(half.away.plays, 4);
    assert_eq!(half.home.touchdowns, 1);
    assert_eq!(half.home.first_downs, 1);
    assert_eq!(half.away.first_downs, 2);
    assert_eq!(half.home.sacks, 1);
    assert_eq!(half.away.interceptions, 1);
    assert_eq!(half.home.penalties, 3);
    assert_eq!(half.home.penalty_yards, 35);
    assert_eq!(half.home.timeouts_used, 1);
    assert_eq!(half.score.to_string(), "7-0");
    assert_eq!(half, session.summary());
}

#[test]
fn undo_restores_the_previous_state() {
    let mut session = GameSession::nfhs(OpeningToss::default());
    first_half(&mut session);

    let undone = session.undo_last().unwrap();
    assert_eq!(undone.play, Play::EndQuarter);
    assert_eq!(session.state().quarter, Quarter::Q2);
    assert_eq!(session.state().phase, GamePhase::Scrimmage);
    assert!(session.halftime_report().is_none());

    session.record(Play::EndQuarter).unwrap();
    assert!(session.halftime_report().is_some());

    let mut empty = GameSession::nfhs(OpeningToss::default());
    assert!(matches!(empty.undo_last(), Err(RuntimeError::NothingToUndo)));
}

#[test]
fn second_half_kickoff_goes_to_the_other_team() {
    let mut session = GameSession::nfhs(OpeningToss {
        receiving: Possession::Offense,
        direction: DriveDirection::Right,
    });
    first_half(&mut session);

    session.record(Play::StartSecondHalf).unwrap();
    let state = session.state();
    assert_eq!(state.quarter, Quarter::Q3);
    assert_eq!(state.phase, GamePhase::Kickoff);
    assert_eq!(state.possession, Possession::Defense);
    assert_eq!(state.timeouts.remaining(Possession::Offense), 3);
}

#[test]
fn export_round_trips_through_json() {
    let mut session = GameSession::nfhs(OpeningToss::default());
    first_half(&mut session);

    let export = session.export();
    assert_eq!(export.home, "Home");
    assert_eq!(export.log.len(), 16);
    assert!(export.halftime.is_some());

    let json = export.to_json().unwrap();
    assert!(json.contains("\"penalty_id\": \"taunting\""));
    assert_eq!(GameExport::from_json(&json).unwrap(), export);
}

#[test]
fn overtime_is_settled_after_both_series() {
    let mut session = GameSession::nfhs(OpeningToss::default());
    let regulation = [
        Play::Kickoff(Kickoff { return_spot: yl(25) }),
        Play::EndQuarter,
        Play::EndQuarter,
        Play::StartSecondHalf,
        Play::Kickoff(Kickoff { return_spot: yl(75) }),
        Play::EndQuarter,
        Play::EndQuarter,
    ];
    for play in regulation {
        session.record(play).unwrap();
    }

    let state = session.state();
    assert_eq!(state.quarter, Quarter::Overtime);
    assert_eq!(state.possession, Possession::Offense);
    assert_eq!(state.field.describe(), "1st & Goal at OPP 10");
    let goal = state.field.direction.goal_ahead().value();

    session.record(carry(CarryKind::Rush, goal)).unwrap();
    session
        .record(Play::Conversion(Conversion {
            kind: ConversionKind::ExtraPoint,
            good: true,
        }))
        .unwrap();

    // No kickoff: the away team starts its own series at the ten.
    let state = session.state();
    assert_eq!(state.phase, GamePhase::Scrimmage);
    assert_eq!(state.possession, Possession::Defense);
    assert_eq!(state.field.describe(), "1st & Goal at OPP 10");

    for _ in 0..4 {
        session.record(Play::Incompletion).unwrap();
    }
    let state = session.state();
    assert!(state.is_final());
    assert_eq!(state.score.to_string(), "7-0");
    assert!(matches!(
        session.record(Play::Incompletion),
        Err(RuntimeError::Rejected { .. })
    ));
}
