use crate::domain::model::{
    BonusWinners, DieFace, GameOutcome, GameShape, PlayerScore, ResultGrid, Team, TeamTotal,
    Verdict,
};

/// Picks each round's bonus winner.
///
/// The comparison is strict, so on a tied maximum the lowest-numbered player
/// holding it keeps the bonus.
pub fn calc_bonus(grid: &ResultGrid, shape: &GameShape) -> BonusWinners {
    let winners = (0..shape.rounds)
        .map(|round| {
            let mut highest = 0;
            let mut winner = None;
            for (player, face) in grid.round_rolls(round).enumerate() {
                if face.value() > highest {
                    highest = face.value();
                    winner = Some(player);
                }
            }
            winner
        })
        .collect();

    BonusWinners::new(winners)
}

pub fn bonus_points(winners: &BonusWinners, player: usize, shape: &GameShape) -> u32 {
    let rounds_won = winners.iter().filter(|w| *w == Some(player)).count() as u32;
    rounds_won * shape.bonus_points
}

pub fn calc_score(rolls: &[DieFace], bonus_points: u32) -> u32 {
    rolls.iter().map(|face| face.value()).sum::<u32>() + bonus_points
}

pub fn team_totals(scores: &[PlayerScore], shape: &GameShape) -> (TeamTotal, TeamTotal) {
    let total_for = |team: Team| {
        let members = shape.members(team);
        let total = scores
            .iter()
            .filter(|s| members.contains(&s.player))
            .map(|s| s.total)
            .sum();
        TeamTotal {
            team,
            members,
            total,
        }
    };

    (total_for(Team::A), total_for(Team::B))
}

/// Runs bonus, scoring and team comparison over a filled grid.
pub fn score_game(grid: ResultGrid, shape: &GameShape, source_name: &str) -> GameOutcome {
    let bonus = calc_bonus(&grid, shape);

    let scores: Vec<PlayerScore> = (0..shape.players)
        .map(|player| {
            let points = bonus_points(&bonus, player, shape);
            let total = calc_score(grid.player_rolls(player), points);
            PlayerScore {
                player,
                base: total - points,
                bonus: points,
                total,
            }
        })
        .collect();

    let (team_a, team_b) = team_totals(&scores, shape);
    let verdict = Verdict::decide(team_a.total, team_b.total);

    tracing::debug!(
        "Team A {} vs Team B {}: {}",
        team_a.total,
        team_b.total,
        verdict.message()
    );

    GameOutcome {
        source_name: source_name.to_string(),
        grid,
        bonus,
        scores,
        team_a,
        team_b,
        verdict,
    }
}
