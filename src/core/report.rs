use crate::domain::model::{GameOutcome, GameShape, Team, TeamTotal};
use crate::utils::error::{DiceError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

const BANNER: &str = "=====================";

/// Renders the plain-text game report.
pub fn render_report(outcome: &GameOutcome, shape: &GameShape) -> String {
    let mut out = String::new();
    write_report(&mut out, outcome, shape).expect("fmt::Write for String never fails");
    out
}

fn write_report(out: &mut String, outcome: &GameOutcome, shape: &GameShape) -> std::fmt::Result {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "Dice Rolling Game Results")?;
    writeln!(out, "{}", BANNER)?;

    for player in 0..shape.players {
        write!(out, "Player {}: ", player + 1)?;
        for face in outcome.grid.player_rolls(player) {
            write!(out, "{:<6}", face)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Bonus Points per Round:")?;
    for (round, winner) in outcome.bonus.iter().enumerate() {
        match winner {
            Some(player) => writeln!(
                out,
                "Round {}: Player {} gets a bonus of {} points.",
                round + 1,
                player + 1,
                shape.bonus_points
            )?,
            None => writeln!(out, "Round {}: No bonus awarded.", round + 1)?,
        }
    }
    writeln!(out)?;

    writeln!(out)?;
    write_team(out, outcome, &outcome.team_a)?;
    writeln!(out)?;
    write_team(out, outcome, &outcome.team_b)?;
    writeln!(out)?;

    writeln!(out, "{}", outcome.verdict.message())
}

fn write_team(out: &mut String, outcome: &GameOutcome, team: &TeamTotal) -> std::fmt::Result {
    for &member in &team.members {
        writeln!(out, "Player {} : {:>3}", member + 1, outcome.scores[member].total)?;
    }
    writeln!(out, "      -----")?;
    writeln!(out, " {}{:>4}", team.team, team.total)
}

/// Derives a sibling filename by swapping the extension.
///
/// Everything from the last `.` of the file name onward is replaced; a name
/// without a `.` gets the extension appended. Directory parts are kept as-is.
pub fn report_file_name(input_name: &str, extension: &str) -> String {
    let file_start = input_name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let stem_end = input_name[file_start..]
        .rfind('.')
        .map_or(input_name.len(), |i| file_start + i);

    format!("{}.{}", &input_name[..stem_end], extension)
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    source: &'a str,
    generated_at: DateTime<Utc>,
    players: Vec<JsonPlayer>,
    bonus_winners: Vec<Option<usize>>,
    teams: Vec<JsonTeam>,
    verdict: &'static str,
}

#[derive(Serialize)]
struct JsonPlayer {
    player: usize,
    team: Team,
    rolls: Vec<&'static str>,
    base: u32,
    bonus: u32,
    total: u32,
}

#[derive(Serialize)]
struct JsonTeam {
    team: Team,
    players: Vec<usize>,
    total: u32,
}

impl From<&TeamTotal> for JsonTeam {
    fn from(team: &TeamTotal) -> Self {
        Self {
            team: team.team,
            players: team.members.iter().map(|m| m + 1).collect(),
            total: team.total,
        }
    }
}

/// Pretty JSON summary of the game. Player numbers are 1-based.
pub fn render_json(outcome: &GameOutcome, shape: &GameShape) -> Result<String> {
    let players = outcome
        .scores
        .iter()
        .map(|score| JsonPlayer {
            player: score.player + 1,
            team: shape.team_of(score.player),
            rolls: outcome
                .grid
                .player_rolls(score.player)
                .iter()
                .map(|f| f.word())
                .collect(),
            base: score.base,
            bonus: score.bonus,
            total: score.total,
        })
        .collect();

    let summary = JsonSummary {
        source: &outcome.source_name,
        generated_at: Utc::now(),
        players,
        bonus_winners: outcome.bonus.iter().map(|w| w.map(|p| p + 1)).collect(),
        teams: vec![(&outcome.team_a).into(), (&outcome.team_b).into()],
        verdict: outcome.verdict.message(),
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}

/// One CSV row per player: number, team, each roll, base, bonus and total.
pub fn render_csv(outcome: &GameOutcome, shape: &GameShape) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["player".to_string(), "team".to_string()];
    header.extend((1..=shape.rounds).map(|r| format!("round_{}", r)));
    header.extend(["base", "bonus", "total"].map(String::from));
    writer.write_record(&header)?;

    for score in &outcome.scores {
        let mut row = vec![
            (score.player + 1).to_string(),
            shape.team_of(score.player).to_string(),
        ];
        row.extend(
            outcome
                .grid
                .player_rolls(score.player)
                .iter()
                .map(|f| f.word().to_string()),
        );
        row.extend([score.base, score.bonus, score.total].map(|n| n.to_string()));
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DiceError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
