use crate::core::decoder::decode;
use crate::domain::model::{GameShape, ResultGrid};

/// Fills a grid from roll tokens, one per line.
///
/// Lines are consumed round by round, every player of round 0 first. Input
/// that runs out early leaves the remaining cells at `One`; extra lines are
/// ignored.
pub fn read_results<I, S>(lines: I, shape: &GameShape) -> ResultGrid
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grid = ResultGrid::new(shape);
    let mut lines = lines.into_iter();
    let mut consumed = 0usize;

    'rounds: for round in 0..shape.rounds {
        for player in 0..shape.players {
            let Some(line) = lines.next() else {
                break 'rounds;
            };
            grid.set(player, round, decode(line.as_ref()));
            consumed += 1;
        }
    }

    let expected = shape.players * shape.rounds;
    if consumed < expected {
        tracing::debug!(
            "Roll data ended after {} of {} tokens, remaining cells default to One",
            consumed,
            expected
        );
    }

    grid
}
