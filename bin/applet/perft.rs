use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Color};
use lib::rules::{apply, expanded_moves, perft};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the positions reachable from the starting position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// How many plies deep to search.
    #[clap(default_value = "4")]
    depth: u32,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let (board, turn) = (Board::default(), Color::White);
        let timer = Instant::now();

        let mut divide: Vec<_> = match self.depth {
            0 => Vec::new(),
            d => expanded_moves(turn, &board)
                .into_par_iter()
                .map(|m| (m, perft(!turn, &apply(&board, &m), d - 1)))
                .collect(),
        };

        divide.sort_by_key(|(m, _)| m.to_string());

        for (m, nodes) in &divide {
            println!("{m}: {nodes}");
        }

        let nodes: usize = match self.depth {
            0 => 1,
            _ => divide.iter().map(|(_, n)| n).sum(),
        };

        let time = timer.elapsed();
        info!(depth = self.depth, nodes, ?time, nps = nodes as f64 / time.as_secs_f64());
        println!("{nodes}");

        Ok(())
    }
}
