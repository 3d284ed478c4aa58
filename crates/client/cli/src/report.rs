//! Plain-text rendering of a finished session.

use console::style;
use sideline_core::Possession;
use sideline_runtime::{GameSession, GameSummary, PlayLogEntry, TeamNames, TeamStats};

pub fn print_entry(entry: &PlayLogEntry) {
    println!("{:>4}  {}", entry.sequence, entry.line());
    for notice in &entry.notices {
        println!("      {} {notice}", style("!").yellow().bold());
    }
}

pub fn print_rejected(index: usize, message: &str) {
    eprintln!(
        "{:>4}  {} {message}",
        index + 1,
        style("rejected:").red().bold()
    );
}

pub fn print_reports(session: &GameSession) {
    let teams = session.teams();
    if let Some(half) = session.halftime_report() {
        println!();
        print_summary("Halftime", &half, teams);
    }
    println!();
    let title = if session.state().is_final() {
        "Final"
    } else {
        "Current"
    };
    print_summary(title, &session.summary(), teams);

    let state = session.state();
    println!();
    println!(
        "{} {} {}, {} {}  ({} plays logged, {} {})",
        style("Score:").bold(),
        teams.home,
        state.score.home,
        teams.away,
        state.score.away,
        session.log().len(),
        state.quarter,
        state.phase
    );
}

fn print_summary(title: &str, summary: &GameSummary, teams: &TeamNames) {
    println!(
        "{}  {} snaps",
        style(format!("{title} summary")).bold().underlined(),
        summary.total_plays
    );
    println!(
        "{:<18}{:>10}{:>10}",
        "",
        truncate(&teams.home),
        truncate(&teams.away)
    );

    let rows: [(&str, fn(&TeamStats) -> u16); 12] = [
        ("Plays", |s| s.plays),
        ("First downs", |s| s.first_downs),
        ("Touchdowns", |s| s.touchdowns),
        ("FG made", |s| s.field_goals_made),
        ("FG missed", |s| s.field_goals_missed),
        ("Safeties", |s| s.safeties),
        ("Interceptions", |s| s.interceptions),
        ("Fumbles lost", |s| s.fumbles_lost),
        ("Sacked", |s| s.sacks),
        ("Penalties", |s| s.penalties),
        ("Penalty yards", |s| s.penalty_yards),
        ("Timeouts used", |s| s.timeouts_used),
    ];
    let home = summary.team(Possession::Offense);
    let away = summary.team(Possession::Defense);
    for (label, stat) in rows {
        println!("{label:<18}{:>10}{:>10}", stat(home), stat(away));
    }
}

fn truncate(name: &str) -> String {
    name.chars().take(9).collect()
}
